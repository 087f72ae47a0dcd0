use crate::{
    abstract_trait::{AuthServiceTrait, DynHashing, DynJwtService, DynOrderQueryRepository},
    domain::{
        requests::LoginRequest,
        responses::{ApiResponse, LoginResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct AuthService {
    hash: DynHashing,
    jwt: DynJwtService,
    query: DynOrderQueryRepository,
}

impl AuthService {
    pub fn new(hash: DynHashing, jwt: DynJwtService, query: DynOrderQueryRepository) -> Self {
        Self { hash, jwt, query }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn login(&self, req: &LoginRequest) -> Result<ApiResponse<LoginResponse>, ServiceError> {
        let email = &req.client_email;

        info!("🔐 Attempting login for clientEmail={email}");

        // unknown email, missing hash and bad password all return the same
        // error so account existence does not leak
        let order = match self.query.find_by_client_email(email).await {
            Ok(Some(order)) => order,
            Ok(None) => {
                error!("❌ No order found for clientEmail={email}");
                return Err(ServiceError::InvalidCredentials);
            }
            Err(e) => {
                error!("❌ Failed to look up clientEmail={email}: {e:?}");
                return Err(ServiceError::Repo(e));
            }
        };

        let Some(stored_hash) = order.client_password_hash.as_deref() else {
            error!("❌ Order with ID={} has no stored credentials", order.id);
            return Err(ServiceError::InvalidCredentials);
        };

        if self
            .hash
            .compare_password(stored_hash, &req.client_password)
            .await
            .is_err()
        {
            error!("❌ Invalid password for clientEmail={email}");
            return Err(ServiceError::InvalidCredentials);
        }

        let client_email = order.client_email.clone().unwrap_or_else(|| email.clone());

        let token = self.jwt.generate_token(order.id as i64, &client_email)?;

        info!("✅ Login successful for clientEmail={email}");

        Ok(ApiResponse::success(
            "Login successful",
            LoginResponse {
                id: order.id,
                status: order.status,
                client_email,
                token,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{HashingTrait, JwtServiceTrait, MockOrderQueryRepositoryTrait},
        config::{Hashing, JwtConfig, JwtSettings},
        errors::RepositoryError,
        model::Order,
    };
    use std::sync::Arc;

    fn jwt_config() -> JwtConfig {
        JwtConfig::new(JwtSettings {
            secret: "test-secret".to_string(),
            ttl_secs: 604_800,
            audience: None,
            issuer: None,
        })
    }

    async fn order_with_password(id: i32, email: &str, password: &str) -> Order {
        let hash = Hashing::new().hash_password(password).await.unwrap();
        Order {
            id,
            status: "PENDING".to_string(),
            client_email: Some(email.to_string()),
            client_password_hash: Some(hash),
            created: chrono::Utc::now().naive_utc(),
        }
    }

    fn request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            client_email: email.to_string(),
            client_password: password.to_string(),
        }
    }

    fn service(query: MockOrderQueryRepositoryTrait) -> AuthService {
        AuthService::new(
            Arc::new(Hashing::new()),
            Arc::new(jwt_config()),
            Arc::new(query),
        )
    }

    #[tokio::test]
    async fn login_issues_verifiable_token() {
        let order = order_with_password(7, "client@example.com", "s3cret").await;

        let mut query = MockOrderQueryRepositoryTrait::new();
        query
            .expect_find_by_client_email()
            .withf(|email| email == "client@example.com")
            .return_once(move |_| Ok(Some(order)));

        let response = service(query)
            .login(&request("client@example.com", "s3cret"))
            .await
            .unwrap();

        assert_eq!(response.data.id, 7);
        assert_eq!(response.data.status, "PENDING");
        assert_eq!(response.data.client_email, "client@example.com");

        let claims = jwt_config().verify_token(&response.data.token).unwrap();
        assert_eq!(claims.sub, 7);
        assert_eq!(claims.client_email, "client@example.com");
    }

    #[tokio::test]
    async fn unknown_email_is_invalid_credentials() {
        let mut query = MockOrderQueryRepositoryTrait::new();
        query.expect_find_by_client_email().returning(|_| Ok(None));

        let err = service(query)
            .login(&request("nobody@example.com", "s3cret"))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidCredentials));
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let order = order_with_password(7, "client@example.com", "s3cret").await;

        let mut query = MockOrderQueryRepositoryTrait::new();
        query
            .expect_find_by_client_email()
            .return_once(move |_| Ok(Some(order)));

        let err = service(query)
            .login(&request("client@example.com", "wrong"))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidCredentials));
    }

    #[tokio::test]
    async fn order_without_stored_hash_is_invalid_credentials() {
        let mut query = MockOrderQueryRepositoryTrait::new();
        query.expect_find_by_client_email().returning(|_| {
            Ok(Some(Order {
                id: 7,
                status: "PENDING".to_string(),
                client_email: Some("client@example.com".to_string()),
                client_password_hash: None,
                created: chrono::Utc::now().naive_utc(),
            }))
        });

        let err = service(query)
            .login(&request("client@example.com", "s3cret"))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidCredentials));
    }

    #[tokio::test]
    async fn store_failure_is_not_reported_as_invalid_credentials() {
        let mut query = MockOrderQueryRepositoryTrait::new();
        query
            .expect_find_by_client_email()
            .returning(|_| Err(RepositoryError::Sqlx(sqlx::Error::PoolClosed)));

        let err = service(query)
            .login(&request("client@example.com", "s3cret"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::Sqlx(_))
        ));
    }
}
