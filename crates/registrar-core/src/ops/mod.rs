//! Entity store and enrollment operations

pub mod enrollment_ops;
pub mod registry;

pub use registry::Registry;
