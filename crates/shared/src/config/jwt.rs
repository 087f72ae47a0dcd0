use crate::{abstract_trait::JwtServiceTrait, config::JwtSettings, errors::ServiceError};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    #[serde(rename = "clientEmail")]
    pub client_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    pub iat: usize,
    pub exp: usize,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    settings: JwtSettings,
}

impl JwtConfig {
    pub fn new(settings: JwtSettings) -> Self {
        JwtConfig { settings }
    }
}

impl JwtServiceTrait for JwtConfig {
    fn generate_token(&self, order_id: i64, client_email: &str) -> Result<String, ServiceError> {
        let now = Utc::now();
        let iat = now.timestamp() as usize;
        let exp = (now + Duration::seconds(self.settings.ttl_secs)).timestamp() as usize;

        let claims = Claims {
            sub: order_id,
            client_email: client_email.to_string(),
            aud: self.settings.audience.clone(),
            iss: self.settings.issuer.clone(),
            iat,
            exp,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.settings.secret.as_ref()),
        )
        .map_err(ServiceError::Jwt)
    }

    fn verify_token(&self, token: &str) -> Result<Claims, ServiceError> {
        let mut validation = Validation::default();

        match &self.settings.audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }
        if let Some(issuer) = &self.settings.issuer {
            validation.set_issuer(&[issuer]);
        }

        let decoding_key = DecodingKey::from_secret(self.settings.secret.as_ref());
        let token_data = decode::<Claims>(token, &decoding_key, &validation)
            .map_err(ServiceError::Jwt)?;

        Ok(token_data.claims)
    }
}
