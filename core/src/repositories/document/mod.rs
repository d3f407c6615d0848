pub mod path;
pub mod store;

pub use store::{paths, DocumentStore};

#[cfg(test)]
pub mod mock;
#[cfg(test)]
pub use mock::MockDocumentStore;
