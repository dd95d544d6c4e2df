//! Password hashing, session tokens, and the authentication service.
//!
//! Passwords are hashed with Argon2 (fresh OS-random salt per hash) and
//! verified against the stored PHC string. Sessions are stateless HS256
//! JWTs whose only subject claim is the user id; nothing is persisted
//! server-side, so "logout" is the client discarding its token.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::store::{CredentialStore, NewUser};
use crate::types::{User, UserId};

/// JWT claims carried by a session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User ID (subject).
    pub sub: UserId,
    /// Issued at (unix timestamp).
    pub iat: usize,
    /// Expiration time (unix timestamp).
    pub exp: usize,
}

/// Hash a password using Argon2.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| Error::internal(format!("failed to hash password: {e}")))?;
    Ok(password_hash.to_string())
}

/// Verify a password against a stored hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| Error::internal(format!("invalid password hash: {e}")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Sign a session token for a user.
pub fn sign_token(user_id: UserId, secret: &str, expiry_hours: u64) -> Result<String> {
    let now = chrono::Utc::now();
    let exp = (now + chrono::Duration::hours(expiry_hours as i64)).timestamp() as usize;

    let claims = Claims {
        sub: user_id,
        iat: now.timestamp() as usize,
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| Error::internal(format!("failed to sign token: {e}")))
}

/// Decode and validate a session token, returning its claims.
///
/// Malformed, mis-signed, and expired tokens all collapse into the one
/// authentication error; the caller learns nothing about which it was.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| Error::Authentication)?;

    Ok(token_data.claims)
}

/// Registration, login, and token verification over a credential store.
///
/// The signing secret and token lifetime are injected at construction, so
/// the service reads no ambient configuration and tests can pick their own.
#[derive(Debug, Clone)]
pub struct Authenticator<C> {
    store: C,
    secret: String,
    token_expiry_hours: u64,
}

impl<C: CredentialStore> Authenticator<C> {
    /// Create an authenticator over `store` signing tokens with `secret`.
    pub fn new(store: C, secret: impl Into<String>, token_expiry_hours: u64) -> Self {
        Self {
            store,
            secret: secret.into(),
            token_expiry_hours,
        }
    }

    /// Register a new account and issue its first session token.
    ///
    /// The email is trimmed before validation and storage; the password is
    /// taken verbatim.
    pub async fn register(&self, email: &str, password: &str) -> Result<(User, String)> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(Error::validation("email and password are required"));
        }

        let password_hash = hash_password(password)?;
        let user = self
            .store
            .insert_user(NewUser {
                email: email.to_string(),
                password_hash,
            })
            .await?;
        let token = sign_token(user.id, &self.secret, self.token_expiry_hours)?;

        Ok((user, token))
    }

    /// Verify credentials and issue a fresh session token.
    ///
    /// Unknown email and wrong password fail identically. No store writes.
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, String)> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(Error::validation("email and password are required"));
        }

        let user = self
            .store
            .find_user_by_email(email)
            .await?
            .ok_or(Error::Authentication)?;

        if !verify_password(password, &user.password_hash)? {
            return Err(Error::Authentication);
        }

        let token = sign_token(user.id, &self.secret, self.token_expiry_hours)?;

        Ok((user, token))
    }

    /// Resolve a session token to its user.
    ///
    /// Fails with the uniform authentication error if the token does not
    /// validate or its subject no longer exists.
    pub async fn verify(&self, token: &str) -> Result<User> {
        let claims = decode_token(token, &self.secret)?;
        self.store
            .find_user_by_id(claims.sub)
            .await?
            .ok_or(Error::Authentication)
    }
}
