//! Auth service.

use std::fmt;

use mockall::automock;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::auth::AuthServiceError;

/// Verifies presented API tokens against the process-wide shared secret.
///
/// Only the SHA-256 digest of the secret is retained. Presented tokens are
/// digested and compared over the full digest.
#[derive(Clone)]
pub struct SharedSecretAuthService {
    secret_digest: Zeroizing<[u8; 32]>,
}

impl SharedSecretAuthService {
    /// Build a verifier for the given secret.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::EmptySecret`] when the secret is blank.
    pub fn new(secret: &str) -> Result<Self, AuthServiceError> {
        if secret.trim().is_empty() {
            return Err(AuthServiceError::EmptySecret);
        }

        Ok(Self {
            secret_digest: Zeroizing::new(digest(secret)),
        })
    }
}

impl fmt::Debug for SharedSecretAuthService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSecretAuthService")
            .field("secret_digest", &"<redacted>")
            .finish()
    }
}

impl AuthService for SharedSecretAuthService {
    fn authenticate(&self, token: &str) -> Result<(), AuthServiceError> {
        let presented = Zeroizing::new(digest(token));

        if presented
            .iter()
            .zip(self.secret_digest.iter())
            .fold(0_u8, |acc, (a, b)| acc | (a ^ b))
            == 0
        {
            Ok(())
        } else {
            Err(AuthServiceError::InvalidToken)
        }
    }
}

#[automock]
pub trait AuthService: Send + Sync {
    /// Check a presented token against the shared secret.
    fn authenticate(&self, token: &str) -> Result<(), AuthServiceError>;
}

fn digest(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn matching_token_is_accepted() -> TestResult {
        let service = SharedSecretAuthService::new("s3cret")?;

        assert_eq!(service.authenticate("s3cret"), Ok(()));

        Ok(())
    }

    #[test]
    fn mismatched_token_is_rejected() -> TestResult {
        let service = SharedSecretAuthService::new("s3cret")?;

        assert_eq!(
            service.authenticate("s3cret "),
            Err(AuthServiceError::InvalidToken)
        );
        assert_eq!(
            service.authenticate(""),
            Err(AuthServiceError::InvalidToken)
        );

        Ok(())
    }

    #[test]
    fn blank_secret_is_refused() {
        let result = SharedSecretAuthService::new("   ");

        assert!(
            matches!(result, Err(AuthServiceError::EmptySecret)),
            "expected EmptySecret, got {result:?}"
        );
    }

    #[test]
    fn debug_output_redacts_secret() -> TestResult {
        let service = SharedSecretAuthService::new("s3cret")?;

        assert!(!format!("{service:?}").contains("s3cret"));

        Ok(())
    }
}
