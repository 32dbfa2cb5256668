use crate::auth::Identity;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use roster_repo::user_repo::{Role, User, UserId};
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashSet;
use std::time::UNIX_EPOCH;

#[derive(Clone)]
pub struct JWTAuth {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[derive(Serialize, Deserialize)]
struct Claims {
    exp: usize,
    sub: UserId,
    roles: HashSet<Role>,
}

impl JWTAuth {
    const EXPIRE_TIME: u64 = 30 * 24 * 60 * 60;

    pub fn from_secret(secret: Vec<u8>) -> JWTAuth {
        JWTAuth {
            encoding_key: EncodingKey::from_secret(&secret),
            decoding_key: DecodingKey::from_secret(&secret),
        }
    }

    pub fn create_token(&self, user: &User) -> String {
        let claims = Claims {
            exp: Self::generate_exp(),
            sub: user.id,
            roles: user.roles.clone(),
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding_key).unwrap()
    }

    pub fn validate_token(&self, token: &str) -> Result<Identity, jsonwebtoken::errors::Error> {
        let claims =
            jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &Validation::default())?
                .claims;
        Ok(Identity {
            user_id: claims.sub,
            roles: claims.roles,
        })
    }

    fn generate_exp() -> usize {
        (std::time::SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs()
            + Self::EXPIRE_TIME) as usize
    }
}
