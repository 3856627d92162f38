mod constant_classifier;
mod scripted_driver;
mod vec_stream;

pub use constant_classifier::ConstantClassifier;
pub use scripted_driver::ScriptedDriver;
pub use vec_stream::VecStream;
