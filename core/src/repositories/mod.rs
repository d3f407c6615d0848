pub mod credential;
pub mod document;

pub use credential::CredentialRepository;
pub use document::{paths, DocumentStore};

#[cfg(test)]
pub use document::MockDocumentStore;
