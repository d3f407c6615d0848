pub mod repository;

pub use repository::CredentialRepository;

#[cfg(test)]
mod tests;
