//! PBKDF2-HMAC-SHA256 password hashing.
//!
//! Hashes are stored as `pbkdf2_sha256$<iterations>$<salt>$<hash>` with the salt and hash
//! base64 encoded, so the iteration count can be raised without invalidating existing hashes.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use subtle::ConstantTimeEq;
use tokio::task::JoinError;

const ALGORITHM: &str = "pbkdf2_sha256";
const SALT_LEN: usize = 16;
const OUTPUT_LEN: usize = 32;

/// Hashes and verifies user passwords.
#[derive(Clone, Copy, Debug)]
pub struct PasswordHasher {
    iterations: u32,
}

impl PasswordHasher {
    /// Creates a hasher producing hashes with the provided iteration count.
    ///
    /// An iteration count of zero is raised to one.
    pub fn new(iterations: u32) -> Self {
        Self {
            iterations: iterations.max(1),
        }
    }

    /// Hashes a password with a freshly generated random salt.
    pub fn hash(&self, password: &str) -> String {
        let salt: [u8; SALT_LEN] = rand::random();
        let hash = derive(password.as_bytes(), &salt, self.iterations);

        format!(
            "{ALGORITHM}${}${}${}",
            self.iterations,
            STANDARD.encode(salt),
            STANDARD.encode(hash)
        )
    }

    /// Checks a password against a stored hash.
    ///
    /// The iteration count is read from the stored hash. Hashes which cannot be parsed
    /// never match.
    pub fn verify(&self, password: &str, stored: &str) -> bool {
        let Some((iterations, salt, expected)) = parse(stored) else {
            return false;
        };

        if expected.len() != OUTPUT_LEN {
            return false;
        }

        let hash = derive(password.as_bytes(), &salt, iterations);
        hash.ct_eq(&expected).into()
    }

    /// [`Self::hash`] on the blocking thread pool
    pub async fn hash_blocking(&self, password: String) -> Result<String, JoinError> {
        let hasher = *self;

        tokio::task::spawn_blocking(move || hasher.hash(&password)).await
    }

    /// [`Self::verify`] on the blocking thread pool
    pub async fn verify_blocking(&self, password: String, stored: String) -> Result<bool, JoinError> {
        let hasher = *self;

        tokio::task::spawn_blocking(move || hasher.verify(&password, &stored)).await
    }
}

fn derive(secret: &[u8], salt: &[u8], iterations: u32) -> [u8; OUTPUT_LEN] {
    let mut out = [0u8; OUTPUT_LEN];
    pbkdf2_hmac::<Sha256>(secret, salt, iterations, &mut out);
    out
}

fn parse(stored: &str) -> Option<(u32, Vec<u8>, Vec<u8>)> {
    let mut parts = stored.split('$');

    if parts.next()? != ALGORITHM {
        return None;
    }

    let iterations = parts.next()?.parse::<u32>().ok().filter(|i| *i > 0)?;
    let salt = STANDARD.decode(parts.next()?).ok()?;
    let hash = STANDARD.decode(parts.next()?).ok()?;

    if parts.next().is_some() {
        return None;
    }

    Some((iterations, salt, hash))
}
