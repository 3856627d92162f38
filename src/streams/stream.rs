use crate::core::error::DataError;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::BinaryInstance;
use std::sync::Arc;

/// Pull-based source of labelled binary instances.
///
/// Every instance yielded shares the stream's header for its whole lifetime.
pub trait Stream {
    fn header(&self) -> &Arc<InstanceHeader>;

    /// `false` once the source is exhausted; a following
    /// [`Stream::next_instance`] then yields `Ok(None)`.
    fn has_more_instances(&self) -> bool;

    /// Next instance, `Ok(None)` at the end of the source, or an error for a
    /// malformed record.
    fn next_instance(&mut self) -> Result<Option<BinaryInstance>, DataError>;

    /// Rewinds to the first instance. The header is unchanged.
    fn restart(&mut self) -> Result<(), DataError>;
}
