//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod device;
pub mod generation;
pub mod inference;
pub mod test_dependencies;
pub mod traits;

pub use deps::ServerDeps;
pub use device::SystemDeviceProbe;
pub use generation::{initialize_summarizer, BoundedSummarizer};
pub use inference::{HttpModelLoader, HttpSummarizer};
pub use test_dependencies::TestDependencies;
pub use traits::*;
