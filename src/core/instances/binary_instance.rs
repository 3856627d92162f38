use crate::core::error::DataError;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::instance::Instance;
use std::sync::Arc;

/// Fixed-width vector of 0/1 values, one per header attribute, label included.
///
/// Values are normalised on construction (anything non-zero becomes 1) and
/// never change afterwards.
#[derive(Debug, Clone)]
pub struct BinaryInstance {
    header: Arc<InstanceHeader>,
    values: Vec<u8>,
}

impl BinaryInstance {
    pub fn new(header: Arc<InstanceHeader>, values: Vec<u8>) -> Result<BinaryInstance, DataError> {
        let expected = header.number_of_attributes();
        if values.len() != expected {
            return Err(DataError::WidthMismatch {
                expected,
                found: values.len(),
            });
        }
        let values = values.into_iter().map(|v| (v != 0) as u8).collect();
        Ok(BinaryInstance { header, values })
    }

    /// Parses raw tokens: `"0"` is 0, any other token is 1.
    pub fn from_tokens<S: AsRef<str>>(
        header: Arc<InstanceHeader>,
        tokens: &[S],
    ) -> Result<BinaryInstance, DataError> {
        let values = tokens
            .iter()
            .map(|t| crate::utils::file_parsing::parse_binary_token(t.as_ref()))
            .collect();
        Self::new(header, values)
    }

    pub fn shared_header(&self) -> &Arc<InstanceHeader> {
        &self.header
    }

    pub fn values(&self) -> &[u8] {
        &self.values
    }
}

impl Instance for BinaryInstance {
    #[inline]
    fn value_at_index(&self, index: usize) -> Option<u8> {
        self.values.get(index).copied()
    }

    fn class_index(&self) -> usize {
        self.header.class_index()
    }

    fn number_of_attributes(&self) -> usize {
        self.values.len()
    }

    fn to_vec(&self) -> Vec<u8> {
        self.values.clone()
    }

    fn header(&self) -> &InstanceHeader {
        &self.header
    }
}
