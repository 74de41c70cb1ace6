use tokio::task;

use crate::domain::{
    error::DomainError,
    models::{credential::HashedCredential, secret::PlainSecret},
    services::password_service::PasswordHasher,
};

/// Async entry point for hashing and verifying credentials.
///
/// Every computation runs on tokio's blocking pool, so callers on a runtime
/// worker suspend instead of stalling it. Nothing is cached or retried.
#[derive(Clone)]
pub struct CredentialUsecase<P: PasswordHasher> {
    password_hasher: P,
}

impl<P: PasswordHasher> CredentialUsecase<P> {
    pub fn new(password_hasher: P) -> Self {
        Self { password_hasher }
    }

    pub fn password_hasher(&self) -> &P {
        &self.password_hasher
    }

    pub async fn hash(&self, secret: impl Into<PlainSecret>) -> Result<HashedCredential, DomainError> {
        let secret = secret.into();
        let password_hasher = self.password_hasher.clone();

        task::spawn_blocking(move || password_hasher.hash(&secret))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Hashing task did not complete");
                DomainError::Hashing
            })?
    }

    pub async fn verify(
        &self,
        secret: impl Into<PlainSecret>,
        hashed: &HashedCredential,
    ) -> Result<bool, DomainError> {
        let secret = secret.into();
        let hashed = hashed.clone();
        let password_hasher = self.password_hasher.clone();

        task::spawn_blocking(move || password_hasher.verify(&secret, &hashed))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Verification task did not complete");
                DomainError::Comparison
            })?
    }

    /// Only inspects the encoding, so it runs inline.
    pub fn needs_rehash(&self, hashed: &HashedCredential) -> Result<bool, DomainError> {
        self.password_hasher.needs_rehash(hashed)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::*;
    use tokio::task::JoinSet;

    use super::*;
    use crate::infrastructure::bcrypt_password_hasher::BcryptPasswordHasher;

    #[derive(Clone)]
    struct PanickingPasswordHasher;

    impl PasswordHasher for PanickingPasswordHasher {
        fn hash(&self, _secret: &PlainSecret) -> Result<HashedCredential, DomainError> {
            panic!("primitive blew up");
        }

        fn verify(
            &self,
            _secret: &PlainSecret,
            _hashed: &HashedCredential,
        ) -> Result<bool, DomainError> {
            panic!("primitive blew up");
        }

        fn needs_rehash(&self, _hashed: &HashedCredential) -> Result<bool, DomainError> {
            Ok(false)
        }
    }

    #[fixture]
    fn usecase() -> CredentialUsecase<BcryptPasswordHasher> {
        CredentialUsecase::new(BcryptPasswordHasher::with_cost(4))
    }

    #[rstest]
    #[tokio::test]
    async fn test_hash_then_verify_positive(usecase: CredentialUsecase<BcryptPasswordHasher>) {
        let hashed = usecase.hash("Tr0ub4dor&3").await.unwrap();

        assert_eq!(usecase.verify("Tr0ub4dor&3", &hashed).await, Ok(true));
    }

    #[rstest]
    #[tokio::test]
    async fn test_verify_wrong_secret_negative(usecase: CredentialUsecase<BcryptPasswordHasher>) {
        let hashed = usecase.hash("Tr0ub4dor&3").await.unwrap();

        assert_eq!(usecase.verify("wrongpass", &hashed).await, Ok(false));
    }

    #[rstest]
    #[tokio::test]
    async fn test_verify_malformed_negative(usecase: CredentialUsecase<BcryptPasswordHasher>) {
        let hashed = HashedCredential::new("not-a-valid-encoding".to_string());

        assert_eq!(
            usecase.verify("Tr0ub4dor&3", &hashed).await,
            Err(DomainError::Comparison)
        );
    }

    #[tokio::test]
    async fn test_panicking_primitive_negative() {
        let usecase = CredentialUsecase::new(PanickingPasswordHasher);
        let hashed = HashedCredential::new("$2b$04$whatever".to_string());

        assert_eq!(usecase.hash("secret").await, Err(DomainError::Hashing));
        assert_eq!(
            usecase.verify("secret", &hashed).await,
            Err(DomainError::Comparison)
        );
    }

    #[rstest]
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_hashes_positive(
        usecase: CredentialUsecase<BcryptPasswordHasher>,
    ) {
        let mut tasks = JoinSet::new();
        for i in 0..100 {
            let usecase = usecase.clone();
            tasks.spawn(async move {
                let secret = format!("secret-{i}");
                let hashed = usecase.hash(secret.clone()).await;
                (secret, hashed)
            });
        }

        let mut results = Vec::with_capacity(100);
        while let Some(joined) = tasks.join_next().await {
            let (secret, hashed) = joined.unwrap();
            results.push((secret, hashed.unwrap()));
        }
        assert_eq!(results.len(), 100);

        let distinct: HashSet<_> = results.iter().map(|(_, h)| h.as_str().to_owned()).collect();
        assert_eq!(distinct.len(), 100);

        for (i, (secret, hashed)) in results.iter().enumerate() {
            assert_eq!(usecase.verify(secret.as_str(), hashed).await, Ok(true));

            let (neighbour, _) = &results[(i + 1) % results.len()];
            assert_eq!(usecase.verify(neighbour.as_str(), hashed).await, Ok(false));
        }
    }

    #[rstest]
    fn test_needs_rehash_positive(usecase: CredentialUsecase<BcryptPasswordHasher>) {
        let hashed = HashedCredential::new(
            "$2b$12$R9h/cIPz0gi.URNNX3kh2OPST9/PgBkqquzi.Ss7KIUgO2t0jWMUW".to_string(),
        );

        assert_eq!(usecase.needs_rehash(&hashed), Ok(false));
        assert_eq!(
            CredentialUsecase::new(BcryptPasswordHasher::new()).password_hasher().cost(),
            12
        );
    }
}
