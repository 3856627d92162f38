use crate::classifiers::conditional_tests::{AttributeSplitSuggestion, BinaryAttributeTest};
use crate::classifiers::decision_tree::nodes::NodeStats;
use crate::classifiers::decision_tree::split_criteria::SplitCriterion;
use crate::core::error::DataError;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::{BinaryInstance, ClassLabel, Instance};
use crate::streams::Stream;
use std::sync::Arc;

/// A group of examples together with the statistics its tree node will keep.
#[derive(Debug, Clone)]
pub struct Dataset {
    header: Arc<InstanceHeader>,
    items: Vec<BinaryInstance>,
    stats: NodeStats,
}

/// The two halves produced by [`Dataset::split`], in branch order.
#[derive(Debug)]
pub struct DatasetSplit {
    pub suggestion: AttributeSplitSuggestion,
    /// Statistics of the dataset that was split; its items now live in `branches`.
    pub parent: NodeStats,
    pub branches: [Dataset; 2],
}

impl DatasetSplit {
    pub fn attribute_index(&self) -> usize {
        self.suggestion.get_split_test().attribute_index()
    }
}

impl Dataset {
    /// Root dataset: every feature eligible, counts taken from the items and
    /// the classifier set when only one label occurs.
    pub fn new(header: Arc<InstanceHeader>, items: Vec<BinaryInstance>) -> Result<Self, DataError> {
        if let Some(stray) = items
            .iter()
            .find(|i| !Arc::ptr_eq(i.shared_header(), &header) && **i.shared_header() != *header)
        {
            return Err(DataError::HeaderMismatch(
                stray.header().relation_name().to_string(),
            ));
        }
        let [neg, pos] = count_labels(&items);
        let stats = NodeStats::new(header.full_mask(), neg, pos).classify();
        Ok(Self {
            header,
            items,
            stats,
        })
    }

    /// Drains `stream` into a root dataset.
    pub fn from_stream<S: Stream + ?Sized>(stream: &mut S) -> Result<Self, DataError> {
        let header = Arc::clone(stream.header());
        let mut items = Vec::new();
        while let Some(instance) = stream.next_instance()? {
            items.push(instance);
        }
        Self::new(header, items)
    }

    pub fn header(&self) -> &Arc<InstanceHeader> {
        &self.header
    }

    pub fn items(&self) -> &[BinaryInstance] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    pub fn stats(&self) -> &NodeStats {
        &self.stats
    }

    /// Releases the items, keeping only the statistics.
    pub fn into_stats(self) -> NodeStats {
        self.stats
    }

    /// Scores splitting on `attribute_index` with `criterion`.
    pub fn evaluate_attribute(
        &self,
        attribute_index: usize,
        criterion: &dyn SplitCriterion,
    ) -> AttributeSplitSuggestion {
        let mut dists = [[0u64; 2]; 2];
        for item in &self.items {
            let branch = (item.value_at_index(attribute_index).unwrap_or(0) != 0) as usize;
            let label = item.class_label().unwrap_or(ClassLabel::Negative);
            dists[branch][label.index()] += 1;
        }
        let merit = criterion.merit_of_split(&dists);
        AttributeSplitSuggestion::new(BinaryAttributeTest::new(attribute_index), dists, merit)
    }

    /// Best attribute under `criterion`: strictly lowest merit, earliest index
    /// on ties. `None` when nothing is eligible or there are no items.
    pub fn best_split_suggestion(
        &self,
        criterion: &dyn SplitCriterion,
    ) -> Option<AttributeSplitSuggestion> {
        if self.items.is_empty() {
            return None;
        }
        let mut best: Option<AttributeSplitSuggestion> = None;
        for index in self.stats.mask().eligible_indices() {
            let candidate = self.evaluate_attribute(index, criterion);
            if best
                .as_ref()
                .is_none_or(|b| candidate.get_merit() < b.get_merit())
            {
                best = Some(candidate);
            }
        }
        best
    }

    /// Partitions the items on the best attribute. Each branch gets its own
    /// mask with that attribute cleared and is classified from its counts.
    ///
    /// Gives the dataset back unchanged when no split is possible.
    pub fn split(self, criterion: &dyn SplitCriterion) -> Result<DatasetSplit, Dataset> {
        let Some(suggestion) = self.best_split_suggestion(criterion) else {
            return Err(self);
        };
        let test = suggestion.get_split_test();
        let Dataset {
            header,
            items,
            stats,
        } = self;

        let (items1, items0): (Vec<_>, Vec<_>) = items
            .into_iter()
            .partition(|item| test.branch_for_instance(item) == Some(1));

        let mask = stats.mask().without(test.attribute_index());
        let make_branch = |items: Vec<BinaryInstance>, [neg, pos]: [u64; 2]| Dataset {
            header: Arc::clone(&header),
            items,
            stats: NodeStats::new(mask.clone(), neg, pos).classify(),
        };
        let branches = [
            make_branch(items0, suggestion.resulting_class_distribution_from_split(0)),
            make_branch(items1, suggestion.resulting_class_distribution_from_split(1)),
        ];

        Ok(DatasetSplit {
            suggestion,
            parent: stats,
            branches,
        })
    }
}

fn count_labels(items: &[BinaryInstance]) -> [u64; 2] {
    items.iter().fold([0, 0], |mut acc, item| {
        if let Some(label) = item.class_label() {
            acc[label.index()] += 1;
        }
        acc
    })
}
