use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Binary class value. `0` is negative, every other value is positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassLabel {
    Negative,
    Positive,
}

impl ClassLabel {
    #[inline]
    pub fn from_value(value: u8) -> Self {
        if value == 0 {
            ClassLabel::Negative
        } else {
            ClassLabel::Positive
        }
    }

    #[inline]
    pub fn value(self) -> u8 {
        match self {
            ClassLabel::Negative => 0,
            ClassLabel::Positive => 1,
        }
    }

    /// Position of this label in a two-slot vote or count vector.
    #[inline]
    pub fn index(self) -> usize {
        self.value() as usize
    }
}

impl Display for ClassLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}
