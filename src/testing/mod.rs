//! Fixtures and test doubles shared by the unit tests.

pub mod dummies;
pub mod stubs;
