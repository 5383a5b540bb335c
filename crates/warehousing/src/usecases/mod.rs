//! Allocation use cases: create, replace, archive.

pub mod archive;
pub mod create;
pub mod replace;

#[cfg(test)]
pub(crate) mod testing;

pub use archive::ArchiveWarehouse;
pub use create::CreateWarehouse;
pub use replace::ReplaceWarehouse;
