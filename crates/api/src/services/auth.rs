//! Authentication service for admin registration, login, and token management.
//!
//! Registration does not open a session: an account must verify its email
//! before login succeeds. Sessions are backed by rows in `admin_sessions`
//! keyed by hashed token JTIs, so refresh tokens can be revoked.

use chrono::Utc;
use shared::crypto::{generate_secure_token, sha256_hex};
use shared::jwt::{extract_user_id, JwtConfig, JwtError};
use shared::password::{hash_password, verify_password, PasswordError};
use shared::validation::{check_password_strength, normalize_email};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

/// Errors that can occur during authentication operations.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Password does not meet requirements")]
    WeakPassword(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Email address is not verified")]
    EmailNotVerified,

    #[error("Account is disabled")]
    UserDisabled,

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Session not found")]
    SessionNotFound,

    #[error("Invalid or expired verification token")]
    InvalidVerificationToken,

    #[error("Email already verified")]
    EmailAlreadyVerified,

    #[error("Token error: {0}")]
    TokenError(#[from] JwtError),

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

/// Outcome of a successful registration.
///
/// No tokens are issued yet; the caller must verify the email first.
#[derive(Debug, Clone)]
pub struct RegistrationOutcome {
    pub user_id: Uuid,
    pub email: String,
    /// Raw verification token. Logged (MVP) or emailed in production;
    /// only its hash is stored.
    pub verification_token: String,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub user_id: Uuid,
    pub email: String,
    pub access_token: String,
    pub refresh_token: String,
    pub access_token_expires_in: i64,
}

/// Result of a successful token refresh.
#[derive(Debug, Clone)]
pub struct RefreshResult {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
}

/// Current session details for an authenticated admin.
#[derive(Debug, Clone)]
pub struct SessionInfo {
    pub user_id: Uuid,
    pub email: String,
    pub email_verified: bool,
    pub created_at: chrono::DateTime<Utc>,
    pub last_login_at: Option<chrono::DateTime<Utc>>,
}

/// Token pair with the JTIs needed for session bookkeeping.
#[derive(Debug, Clone)]
struct TokenPair {
    access_token: String,
    access_token_jti: String,
    refresh_token: String,
    refresh_token_jti: String,
}

/// Database row for admin user query.
#[derive(Debug, sqlx::FromRow)]
struct AdminUserRow {
    id: Uuid,
    email: String,
    password_hash: String,
    is_active: bool,
    email_verified: bool,
}

/// Database row for session query.
#[derive(Debug, sqlx::FromRow)]
struct SessionRow {
    id: Uuid,
    expires_at: chrono::DateTime<Utc>,
}

/// Authentication service.
pub struct AuthService {
    pool: PgPool,
    jwt: Arc<JwtConfig>,
}

impl AuthService {
    /// Creates a new AuthService with the given database pool and JWT config.
    pub fn new(pool: PgPool, jwt: Arc<JwtConfig>) -> Self {
        Self { pool, jwt }
    }

    /// Register a new admin account.
    ///
    /// The account is created unverified and no tokens are issued; login
    /// is refused until the verification token is redeemed. Registering an
    /// email that exists but is still unverified reissues the token rather
    /// than conflicting; only a verified account returns `EmailAlreadyExists`.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
    ) -> Result<RegistrationOutcome, AuthError> {
        check_password_strength(password).map_err(AuthError::WeakPassword)?;

        let password_hash = hash_password(password)?;
        let email = normalize_email(email);

        let existing: Option<(Uuid, bool)> =
            sqlx::query_as("SELECT id, email_verified FROM admin_users WHERE email = $1")
                .bind(&email)
                .fetch_optional(&self.pool)
                .await?;

        if let Some((user_id, email_verified)) = existing {
            if email_verified {
                return Err(AuthError::EmailAlreadyExists);
            }
            // The email is still unproven, so registering again replaces the
            // credentials and reissues the verification token. Without this an
            // account whose token expired could never be verified.
            return self.reissue_verification(user_id, email, &password_hash).await;
        }

        let user_id = Uuid::new_v4();
        let now = Utc::now();

        let verification_token = generate_secure_token();
        let token_hash = sha256_hex(&verification_token);
        let token_expires_at = now + chrono::Duration::hours(24);

        let insert_result = sqlx::query(
            r#"
            INSERT INTO admin_users
                (id, email, password_hash, is_active, email_verified,
                 email_verification_token, email_verification_expires_at,
                 created_at, updated_at)
            VALUES ($1, $2, $3, true, false, $4, $5, $6, $6)
            "#,
        )
        .bind(user_id)
        .bind(&email)
        .bind(&password_hash)
        .bind(&token_hash)
        .bind(token_expires_at)
        .bind(now)
        .execute(&self.pool)
        .await;

        // Unique constraint violation means a concurrent registration won
        if let Err(sqlx::Error::Database(db_err)) = &insert_result {
            if db_err.code().as_deref() == Some("23505") {
                return Err(AuthError::EmailAlreadyExists);
            }
        }
        insert_result?;

        // Never log the actual token
        tracing::info!(
            user_id = %user_id,
            email = %email,
            "Admin account registered, verification token generated"
        );

        Ok(RegistrationOutcome {
            user_id,
            email,
            verification_token,
        })
    }

    /// Replace an unverified account's credentials and verification token.
    async fn reissue_verification(
        &self,
        user_id: Uuid,
        email: String,
        password_hash: &str,
    ) -> Result<RegistrationOutcome, AuthError> {
        let verification_token = generate_secure_token();
        let token_hash = sha256_hex(&verification_token);
        let now = Utc::now();

        sqlx::query(
            r#"
            UPDATE admin_users
            SET password_hash = $1,
                email_verification_token = $2,
                email_verification_expires_at = $3,
                updated_at = $4
            WHERE id = $5 AND email_verified = false
            "#,
        )
        .bind(password_hash)
        .bind(&token_hash)
        .bind(now + chrono::Duration::hours(24))
        .bind(now)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        tracing::info!(
            user_id = %user_id,
            email = %email,
            "Unverified admin re-registered, verification token reissued"
        );

        Ok(RegistrationOutcome {
            user_id,
            email,
            verification_token,
        })
    }

    /// Verify an admin email using a valid verification token.
    ///
    /// Marks the account verified and clears the token.
    pub async fn verify_email(&self, token: &str) -> Result<Uuid, AuthError> {
        let token_hash = sha256_hex(token);

        let user: Option<(Uuid, chrono::DateTime<Utc>, bool)> = sqlx::query_as(
            r#"
            SELECT id, email_verification_expires_at, email_verified
            FROM admin_users
            WHERE email_verification_token = $1 AND is_active = true
            "#,
        )
        .bind(&token_hash)
        .fetch_optional(&self.pool)
        .await?;

        let (user_id, expires_at, email_verified) = match user {
            Some((id, exp, verified)) => (id, exp, verified),
            None => return Err(AuthError::InvalidVerificationToken),
        };

        if email_verified {
            // Stale token on an already-verified account
            self.clear_verification_token(user_id).await?;
            return Err(AuthError::EmailAlreadyVerified);
        }

        if expires_at < Utc::now() {
            self.clear_verification_token(user_id).await?;
            return Err(AuthError::InvalidVerificationToken);
        }

        let now = Utc::now();
        sqlx::query(
            r#"
            UPDATE admin_users
            SET email_verified = true,
                email_verification_token = NULL,
                email_verification_expires_at = NULL,
                updated_at = $1
            WHERE id = $2
            "#,
        )
        .bind(now)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        tracing::info!(user_id = %user_id, "Admin email verified");

        Ok(user_id)
    }

    async fn clear_verification_token(&self, user_id: Uuid) -> Result<(), AuthError> {
        sqlx::query(
            "UPDATE admin_users SET email_verification_token = NULL, email_verification_expires_at = NULL WHERE id = $1",
        )
        .bind(user_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Login with email and password.
    ///
    /// Unverified accounts are refused with `EmailNotVerified`.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResult, AuthError> {
        let user: Option<AdminUserRow> = sqlx::query_as(
            r#"
            SELECT id, email, password_hash, is_active, email_verified
            FROM admin_users
            WHERE email = $1
            "#,
        )
        .bind(normalize_email(email))
        .fetch_optional(&self.pool)
        .await?;

        let user = match user {
            Some(u) => u,
            None => return Err(AuthError::InvalidCredentials),
        };

        if !user.is_active {
            return Err(AuthError::UserDisabled);
        }

        let is_valid = verify_password(password, &user.password_hash)?;
        if !is_valid {
            return Err(AuthError::InvalidCredentials);
        }

        if !user.email_verified {
            return Err(AuthError::EmailNotVerified);
        }

        let now = Utc::now();
        sqlx::query("UPDATE admin_users SET last_login_at = $1 WHERE id = $2")
            .bind(now)
            .bind(user.id)
            .execute(&self.pool)
            .await?;

        let tokens = self.generate_tokens(user.id)?;
        self.create_session(user.id, &tokens).await?;

        Ok(AuthResult {
            user_id: user.id,
            email: user.email,
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            access_token_expires_in: self.jwt.access_token_expiry_secs,
        })
    }

    /// Refresh access token using a valid refresh token.
    ///
    /// Implements token rotation: the old refresh token is invalidated and
    /// a new one is issued against the same session row.
    pub async fn refresh(&self, refresh_token: &str) -> Result<RefreshResult, AuthError> {
        let claims = self
            .jwt
            .validate_refresh_token(refresh_token)
            .map_err(|e| match e {
                JwtError::TokenExpired | JwtError::InvalidToken => AuthError::InvalidRefreshToken,
                _ => AuthError::TokenError(e),
            })?;

        let user_id = extract_user_id(&claims).map_err(|_| AuthError::InvalidRefreshToken)?;
        let jti_hash = sha256_hex(&claims.jti);

        let session: Option<SessionRow> = sqlx::query_as(
            r#"
            SELECT id, expires_at
            FROM admin_sessions
            WHERE refresh_token_hash = $1 AND user_id = $2
            "#,
        )
        .bind(&jti_hash)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        let session = session.ok_or(AuthError::SessionNotFound)?;

        if session.expires_at < Utc::now() {
            sqlx::query("DELETE FROM admin_sessions WHERE id = $1")
                .bind(session.id)
                .execute(&self.pool)
                .await?;
            return Err(AuthError::InvalidRefreshToken);
        }

        let user_active: Option<(bool,)> =
            sqlx::query_as("SELECT is_active FROM admin_users WHERE id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;

        let (is_active,) = user_active.ok_or(AuthError::UserNotFound)?;
        if !is_active {
            return Err(AuthError::UserDisabled);
        }

        let new_tokens = self.generate_tokens(user_id)?;

        let now = Utc::now();
        let new_expires_at = now + chrono::Duration::seconds(self.jwt.refresh_token_expiry_secs);
        let new_token_hash = sha256_hex(&new_tokens.access_token_jti);
        let new_refresh_hash = sha256_hex(&new_tokens.refresh_token_jti);

        sqlx::query(
            r#"
            UPDATE admin_sessions
            SET token_hash = $1, refresh_token_hash = $2, expires_at = $3, last_used_at = $4
            WHERE id = $5
            "#,
        )
        .bind(&new_token_hash)
        .bind(&new_refresh_hash)
        .bind(new_expires_at)
        .bind(now)
        .bind(session.id)
        .execute(&self.pool)
        .await?;

        Ok(RefreshResult {
            access_token: new_tokens.access_token,
            refresh_token: new_tokens.refresh_token,
            expires_in: self.jwt.access_token_expiry_secs,
        })
    }

    /// Logout by invalidating the session associated with the refresh token.
    pub async fn logout(&self, refresh_token: &str) -> Result<(), AuthError> {
        let claims = self
            .jwt
            .validate_refresh_token(refresh_token)
            .map_err(|e| match e {
                JwtError::TokenExpired | JwtError::InvalidToken => AuthError::InvalidRefreshToken,
                _ => AuthError::TokenError(e),
            })?;

        let user_id = extract_user_id(&claims).map_err(|_| AuthError::InvalidRefreshToken)?;
        let jti_hash = sha256_hex(&claims.jti);

        let result = sqlx::query(
            "DELETE FROM admin_sessions WHERE refresh_token_hash = $1 AND user_id = $2",
        )
        .bind(&jti_hash)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        // Already logged out is not an error
        if result.rows_affected() == 0 {
            tracing::debug!(user_id = %user_id, "Session not found during logout");
        }

        Ok(())
    }

    /// Fetch session details for an authenticated admin.
    pub async fn current_user(&self, user_id: Uuid) -> Result<SessionInfo, AuthError> {
        let user: Option<(Uuid, String, bool, chrono::DateTime<Utc>, Option<chrono::DateTime<Utc>>)> =
            sqlx::query_as(
                r#"
                SELECT id, email, email_verified, created_at, last_login_at
                FROM admin_users
                WHERE id = $1 AND is_active = true
                "#,
            )
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        let (id, email, email_verified, created_at, last_login_at) =
            user.ok_or(AuthError::UserNotFound)?;

        Ok(SessionInfo {
            user_id: id,
            email,
            email_verified,
            created_at,
            last_login_at,
        })
    }

    /// Generate access and refresh tokens for an admin user.
    fn generate_tokens(&self, user_id: Uuid) -> Result<TokenPair, AuthError> {
        let (access_token, access_jti) = self.jwt.generate_access_token(user_id)?;
        let (refresh_token, refresh_jti) = self.jwt.generate_refresh_token(user_id)?;

        Ok(TokenPair {
            access_token,
            access_token_jti: access_jti,
            refresh_token,
            refresh_token_jti: refresh_jti,
        })
    }

    /// Create a session row for the user with the generated tokens.
    ///
    /// JTIs are hashed before storage so a database leak does not expose
    /// usable session identifiers.
    async fn create_session(&self, user_id: Uuid, tokens: &TokenPair) -> Result<(), AuthError> {
        let session_id = Uuid::new_v4();
        let now = Utc::now();
        let expires_at = now + chrono::Duration::seconds(self.jwt.refresh_token_expiry_secs);

        let token_hash = sha256_hex(&tokens.access_token_jti);
        let refresh_hash = sha256_hex(&tokens.refresh_token_jti);

        sqlx::query(
            r#"
            INSERT INTO admin_sessions (id, user_id, token_hash, refresh_token_hash, expires_at, created_at, last_used_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            "#,
        )
        .bind(session_id)
        .bind(user_id)
        .bind(&token_hash)
        .bind(&refresh_hash)
        .bind(expires_at)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use shared::crypto::{generate_secure_token, sha256_hex};
    use shared::validation::check_password_strength;

    #[test]
    fn test_verification_token_shape() {
        let token = generate_secure_token();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_verification_token_hash_differs_from_token() {
        let token = generate_secure_token();
        assert_ne!(sha256_hex(&token), token);
    }

    #[test]
    fn test_password_strength_rules() {
        assert!(check_password_strength("Secret123!").is_ok());
        assert!(check_password_strength("short1A").is_err());
        assert!(check_password_strength("nouppercase1").is_err());
        assert!(check_password_strength("NOLOWERCASE1").is_err());
        assert!(check_password_strength("NoDigitsHere").is_err());
    }
}
