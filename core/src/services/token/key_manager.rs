//! Symmetric signing key resolution for JWT signing and verification

use base64::{engine::general_purpose::STANDARD, Engine as _};
use jsonwebtoken::{DecodingKey, EncodingKey};
use rand::{rngs::OsRng, RngCore};

use crate::errors::{DomainError, InitError};

/// Number of random bytes behind a generated secret (16 base64 characters)
const SECRET_BYTES: usize = 12;

/// Where the effective signing key came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    /// Read from `/privateKey` in the credential store
    Persisted,
    /// Supplied through `PRIVATE_KEY`
    Override,
    /// Generated for this process only
    Generated,
}

impl KeySource {
    /// Whether tokens signed with this key stay valid across restarts
    pub fn survives_restart(&self) -> bool {
        !matches!(self, KeySource::Generated)
    }
}

/// HS256 signing key
#[derive(Clone)]
pub struct SigningKey {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey").finish_non_exhaustive()
    }
}

impl SigningKey {
    /// Builds a key from a shared secret
    ///
    /// # Returns
    ///
    /// * `Ok(SigningKey)` - Key ready for signing and verification
    /// * `Err(DomainError)` - The secret is empty
    pub fn from_secret(secret: &str) -> Result<Self, DomainError> {
        if secret.is_empty() {
            return Err(InitError::InvalidSigningKey {
                reason: "secret is empty".to_string(),
            }
            .into());
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        })
    }

    /// Picks the effective key: persisted, then override, then a fresh random one
    ///
    /// # Arguments
    ///
    /// * `persisted` - Value stored under `/privateKey`, if any
    /// * `override_key` - Value of `PRIVATE_KEY`, if set
    pub fn resolve(
        persisted: Option<&str>,
        override_key: Option<&str>,
    ) -> Result<(Self, KeySource), DomainError> {
        match (persisted, override_key) {
            (Some(secret), _) => Ok((Self::from_secret(secret)?, KeySource::Persisted)),
            (None, Some(secret)) => Ok((Self::from_secret(secret)?, KeySource::Override)),
            (None, None) => Ok((Self::from_secret(&generate_secret())?, KeySource::Generated)),
        }
    }

    /// Returns the encoding key for signing JWTs
    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    /// Returns the decoding key for verifying JWTs
    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }
}

/// Generates a random secret from the OS CSPRNG, base64 encoded
pub fn generate_secret() -> String {
    let mut bytes = [0u8; SECRET_BYTES];
    OsRng.fill_bytes(&mut bytes);
    STANDARD.encode(bytes)
}
