use crate::core::instance_header::InstanceHeader;
use crate::core::instances::BinaryInstance;
use std::sync::Arc;

/// Features named `A`, `B`, `C`, ... followed by a trailing `class` column.
pub fn header_with_features(n: usize) -> Arc<InstanceHeader> {
    let mut names: Vec<String> = (0..n)
        .map(|i| char::from(b'A' + (i % 26) as u8).to_string())
        .collect();
    names.push("class".into());
    Arc::new(InstanceHeader::new("synthetic".into(), names, n).expect("class index in range"))
}

pub fn instance(header: &Arc<InstanceHeader>, values: &[u8]) -> BinaryInstance {
    BinaryInstance::new(Arc::clone(header), values.to_vec()).expect("row width matches header")
}
