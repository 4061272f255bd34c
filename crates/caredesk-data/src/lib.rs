//! Data access for CareDesk.
//!
//! Rendering components never touch a data origin directly: they consume a
//! [`Repository`] for the in-memory datasets and the async [`Directory`]
//! collaborator for joined lookups. This keeps the pages decoupled from
//! where records actually come from, which is the seam a real backend would
//! later plug into.

pub mod directory;
pub mod error;
pub mod repository;
pub mod sample;

pub use directory::Directory;
pub use error::DataError;
pub use repository::{InMemoryRepository, Repository};
pub use sample::SampleData;
