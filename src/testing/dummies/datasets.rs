use crate::core::dataset::Dataset;
use crate::core::instance_header::InstanceHeader;
use crate::testing::dummies::{header_with_features, instance};
use std::sync::Arc;

pub fn dataset(header: &Arc<InstanceHeader>, rows: &[&[u8]]) -> Dataset {
    let items = rows.iter().map(|r| instance(header, r)).collect();
    Dataset::new(Arc::clone(header), items).expect("rows share the header")
}

/// `A` alone decides the label.
pub fn separable_ab() -> Dataset {
    dataset(
        &header_with_features(2),
        &[&[0, 0, 0], &[0, 1, 0], &[1, 0, 1], &[1, 1, 1]],
    )
}

/// Neither attribute separates the labels. Information gain prefers `A`,
/// variance impurity prefers `B`.
pub fn mixed_ab() -> Dataset {
    dataset(
        &header_with_features(2),
        &[
            &[0, 1, 0],
            &[1, 1, 1],
            &[1, 1, 1],
            &[0, 1, 0],
            &[0, 0, 1],
            &[0, 1, 1],
        ],
    )
}

/// Training and validation sets over three features where the true label is
/// `A`. The training set carries label noise that makes ID3 grow extra splits.
pub fn noisy_parity() -> (Dataset, Dataset) {
    let header = header_with_features(3);
    let clean: Vec<[u8; 4]> = (0..8u8)
        .map(|n| {
            let a = n & 1;
            [a, (n >> 1) & 1, (n >> 2) & 1, a]
        })
        .collect();

    let noise: [[u8; 4]; 3] = [[0, 1, 1, 1], [1, 0, 1, 0], [0, 0, 1, 1]];
    let training: Vec<&[u8]> = clean.iter().chain(&noise).map(|r| r.as_slice()).collect();
    let validation: Vec<&[u8]> = clean.iter().map(|r| r.as_slice()).collect();

    (dataset(&header, &training), dataset(&header, &validation))
}
