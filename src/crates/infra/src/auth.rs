use application::auth::{TokenService, UserClaims};
use application::error::AppError;
use bcrypt::hash as bcrypt_hash;
use bcrypt::verify as bcrypt_verify;
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

pub trait AuthConfig {
    fn jwt_secret(&self) -> &str;
    fn jwt_expire_secs(&self) -> i64;
    fn salt_cost(&self) -> i32;
}

#[derive(Debug, Clone)]
pub struct BcryptPasswordHasher {
    salt_cost: i32,
}

impl BcryptPasswordHasher {
    pub fn new(salt_cost: i32) -> Self {
        Self { salt_cost }
    }
}

impl application::auth::PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plain: &str) -> Result<String, AppError> {
        bcrypt_hash(plain, self.salt_cost as u32).map_err(|e| AppError::AuthError(e.to_string()))
    }

    fn verify(&self, pwd: &str, hashed_pwd: &str) -> Result<(), AppError> {
        if bcrypt_verify(pwd, hashed_pwd).unwrap_or(false) {
            Ok(())
        } else {
            Err(AppError::AuthError("invalid password".to_string()))
        }
    }
}

#[derive(Debug, Clone)]
pub struct JwtTokenService {
    jwt_secret: String,
    exp_secs: i64,
}

impl JwtTokenService {
    pub fn new(jwt_secret: &str, exp_secs: i64) -> Self {
        Self {
            jwt_secret: jwt_secret.to_string(),
            exp_secs,
        }
    }

    fn encode_claims<T: Serialize>(&self, claims: &T) -> Result<String, AppError> {
        let key = EncodingKey::from_secret(self.jwt_secret.as_bytes());
        encode(&Header::new(Algorithm::HS256), claims, &key)
            .map_err(|e| AppError::AuthError(e.to_string()))
    }

    fn decode_claims<T: for<'de> Deserialize<'de>>(&self, token: &str) -> Result<T, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        let token_data = decode::<T>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &validation,
        )
        .map_err(|e| AppError::AuthError(e.to_string()))?;

        Ok(token_data.claims)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JwtClaims {
    pub sub: String,
    pub adm: bool,
    pub exp: i64,
    pub iat: i64,
}

impl TokenService for JwtTokenService {
    fn issue(&self, claims: &UserClaims) -> Result<String, AppError> {
        let now = Utc::now().timestamp();
        let jwt_claims = JwtClaims {
            sub: claims.user_name.clone(),
            adm: claims.is_admin,
            exp: now + self.exp_secs,
            iat: now,
        };
        self.encode_claims(&jwt_claims)
    }

    fn verify(&self, token: &str) -> Result<UserClaims, AppError> {
        let jwt_claims: JwtClaims = self.decode_claims(token)?;
        Ok(UserClaims {
            user_name: jwt_claims.sub,
            is_admin: jwt_claims.adm,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use application::auth::PasswordHasher;

    #[test]
    fn test_token_roundtrip() {
        let svc = JwtTokenService::new("test_secret_key", 3600);
        let claims = UserClaims {
            user_name: "admin".to_string(),
            is_admin: true,
        };

        let token = svc.issue(&claims).unwrap();
        let verified = svc.verify(&token).unwrap();

        assert_eq!(verified.user_name, "admin");
        assert!(verified.is_admin);
    }

    #[test]
    fn test_token_wrong_secret_rejected() {
        let svc = JwtTokenService::new("test_secret_key", 3600);
        let other = JwtTokenService::new("another_secret", 3600);
        let claims = UserClaims {
            user_name: "admin".to_string(),
            is_admin: false,
        };

        let token = svc.issue(&claims).unwrap();
        assert!(other.verify(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        // negative expiry puts exp in the past
        let svc = JwtTokenService::new("test_secret_key", -120);
        let claims = UserClaims {
            user_name: "admin".to_string(),
            is_admin: false,
        };

        let token = svc.issue(&claims).unwrap();
        assert!(svc.verify(&token).is_err());
    }

    #[test]
    fn test_bcrypt_hash_and_verify() {
        let hasher = BcryptPasswordHasher::new(4);
        let hashed = hasher.hash("my_secret_password").unwrap();

        assert!(hasher.verify("my_secret_password", &hashed).is_ok());
        assert!(hasher.verify("wrong_password", &hashed).is_err());
    }
}
