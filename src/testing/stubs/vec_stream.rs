use crate::core::error::DataError;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::BinaryInstance;
use crate::streams::Stream;
use std::sync::Arc;

/// In-memory stream over fixed rows.
pub struct VecStream {
    header: Arc<InstanceHeader>,
    rows: Vec<Vec<u8>>,
    idx: usize,
}

impl VecStream {
    pub fn new(header: Arc<InstanceHeader>, rows: Vec<Vec<u8>>) -> Self {
        Self {
            header,
            rows,
            idx: 0,
        }
    }
}

impl Stream for VecStream {
    fn header(&self) -> &Arc<InstanceHeader> {
        &self.header
    }

    fn has_more_instances(&self) -> bool {
        self.idx < self.rows.len()
    }

    fn next_instance(&mut self) -> Result<Option<BinaryInstance>, DataError> {
        let Some(row) = self.rows.get(self.idx) else {
            return Ok(None);
        };
        self.idx += 1;
        BinaryInstance::new(Arc::clone(&self.header), row.clone()).map(Some)
    }

    fn restart(&mut self) -> Result<(), DataError> {
        self.idx = 0;
        Ok(())
    }
}
