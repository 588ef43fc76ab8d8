use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use uuid::Uuid;

use crate::domain::{
    authentication::{
        ports::SessionProvider,
        value_objects::{Session, User},
    },
    common::entities::app_errors::CoreError,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: Uuid,
    pub email: Option<String>,
    pub exp: i64,
}

/// Reads the user from an HS256 bearer token signed with the shared secret.
#[derive(Clone)]
pub struct JwtSessionProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtSessionProvider {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    pub fn issue(&self, user: &User, ttl: Duration) -> Result<String, CoreError> {
        let claims = SessionClaims {
            sub: user.id,
            email: user.email.clone(),
            exp: (Utc::now() + ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            error!("Failed to sign session token: {}", e);
            CoreError::InternalServerError
        })
    }
}

impl SessionProvider for JwtSessionProvider {
    async fn get_current_user(&self, session: &Session) -> Result<Option<User>, CoreError> {
        let Some(token) = session.token.as_deref() else {
            return Ok(None);
        };

        match decode::<SessionClaims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => Ok(Some(User {
                id: data.claims.sub,
                email: data.claims.email,
            })),
            Err(e) => {
                debug!("Rejected session token: {}", e);
                Ok(None)
            }
        }
    }
}
