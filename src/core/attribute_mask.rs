use serde::{Deserialize, Serialize};

/// Which attributes are still eligible for splitting along one root-to-node path.
///
/// A mask is an immutable snapshot: [`AttributeMask::without`] hands back a new
/// mask and leaves the receiver untouched, so sibling branches never observe
/// each other's choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeMask {
    eligible: Vec<bool>,
}

impl AttributeMask {
    /// Every attribute except `class_index` is eligible.
    pub fn full(number_of_attributes: usize, class_index: usize) -> Self {
        Self {
            eligible: (0..number_of_attributes).map(|i| i != class_index).collect(),
        }
    }

    pub fn from_flags(eligible: Vec<bool>) -> Self {
        Self { eligible }
    }

    pub fn len(&self) -> usize {
        self.eligible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.eligible.is_empty()
    }

    #[inline]
    pub fn is_eligible(&self, index: usize) -> bool {
        self.eligible.get(index).copied().unwrap_or(false)
    }

    /// True once no attribute is left to split on.
    pub fn is_exhausted(&self) -> bool {
        !self.eligible.iter().any(|&e| e)
    }

    pub fn remaining(&self) -> usize {
        self.eligible.iter().filter(|&&e| e).count()
    }

    pub fn eligible_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.eligible
            .iter()
            .enumerate()
            .filter_map(|(i, &e)| e.then_some(i))
    }

    /// Copy of this mask with `index` marked as used.
    pub fn without(&self, index: usize) -> Self {
        let mut eligible = self.eligible.clone();
        if let Some(flag) = eligible.get_mut(index) {
            *flag = false;
        }
        Self { eligible }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_mask_excludes_class_attribute() {
        let mask = AttributeMask::full(4, 3);
        assert_eq!(mask.len(), 4);
        assert_eq!(mask.remaining(), 3);
        assert!(!mask.is_eligible(3));
        assert_eq!(mask.eligible_indices().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn without_leaves_original_untouched() {
        let mask = AttributeMask::full(3, 2);
        let left = mask.without(0);
        let right = mask.without(1);

        assert!(mask.is_eligible(0) && mask.is_eligible(1));
        assert!(!left.is_eligible(0) && left.is_eligible(1));
        assert!(right.is_eligible(0) && !right.is_eligible(1));
    }

    #[test]
    fn exhausted_after_every_attribute_used() {
        let mask = AttributeMask::full(3, 2).without(0).without(1);
        assert!(mask.is_exhausted());
        assert_eq!(mask.remaining(), 0);
        assert!(!mask.without(7).is_eligible(7));
    }
}
