mod binary_instance;
mod class_label;
pub mod instance;

pub use binary_instance::BinaryInstance;
pub use class_label::ClassLabel;
pub use instance::Instance;
