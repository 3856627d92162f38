use crate::classifiers::decision_tree::split_criteria::{
    InfoGainSplitCriterion, SplitCriterion, VarianceImpuritySplitCriterion,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumMessage, EnumString, IntoStaticStr};

/// Selects the impurity metric used to choose split attributes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
    EnumMessage,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SplitHeuristic {
    #[strum(
        message = "Information Gain",
        detailed_message = "Minimise the weighted binary entropy of the two branches."
    )]
    InformationGain,
    #[strum(
        message = "Variance Impurity",
        detailed_message = "Minimise the weighted variance impurity of the two branches."
    )]
    VarianceImpurity,
}

impl SplitHeuristic {
    pub fn criterion(self) -> Box<dyn SplitCriterion> {
        match self {
            SplitHeuristic::InformationGain => Box::new(InfoGainSplitCriterion::new()),
            SplitHeuristic::VarianceImpurity => Box::new(VarianceImpuritySplitCriterion::new()),
        }
    }
}
