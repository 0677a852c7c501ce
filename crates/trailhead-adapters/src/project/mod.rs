//! Project model adapters.

mod memory;

pub use memory::InMemoryProject;
