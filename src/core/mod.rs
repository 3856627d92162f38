pub mod attribute_mask;
pub mod dataset;
pub mod error;
pub mod instance_header;
pub mod instances;
