//! Document store implementations

mod json_file;
mod memory;

#[cfg(test)]
mod tests;

pub use json_file::JsonFileStore;
pub use memory::InMemoryDocumentStore;
