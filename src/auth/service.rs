// Authentication service - registration and login flows

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::auth::{
    error::AuthError,
    models::{NewUser, UserProfile},
    password::PasswordService,
    repository::CredentialStore,
    token::TokenService,
};

/// Coordinates the credential store, password hasher and token service
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    password_service: PasswordService,
    token_service: Arc<TokenService>,
}

impl AuthService {
    pub fn new(
        store: Arc<dyn CredentialStore>,
        password_service: PasswordService,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            store,
            password_service,
            token_service,
        }
    }

    /// Register a new user.
    ///
    /// An existing email yields `EmailAlreadyExists` without hashing or writing.
    /// A duplicate that slips past the lookup is caught by the store's own
    /// uniqueness check and reported the same way.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<UserProfile, AuthError> {
        debug!("Registering user: {}", email);

        if self.store.find_by_email(email).await?.is_some() {
            warn!("Registration attempted for existing email: {}", email);
            return Err(AuthError::EmailAlreadyExists);
        }

        let password_hash = self.password_service.hash_password(password)?;

        let user = self
            .store
            .insert(NewUser {
                email: email.to_string(),
                password_hash,
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
            })
            .await?;

        info!("Registered user id={} email={}", user.id, user.email);
        Ok(user.into())
    }

    /// Verify credentials and issue a bearer token bound to the email.
    ///
    /// Unknown email and wrong password both return `InvalidCredentials`.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AuthError> {
        debug!("Login attempt for: {}", email);

        let user = match self.store.find_by_email(email).await? {
            Some(user) => user,
            None => {
                self.password_service.verify_without_account(password)?;
                debug!("Login failed: no account for {}", email);
                return Err(AuthError::InvalidCredentials);
            }
        };

        if !self
            .password_service
            .verify_password(password, &user.password_hash)?
        {
            debug!("Login failed: password mismatch for {}", email);
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.token_service.issue(&user.email)?;
        info!("User logged in: {}", user.email);
        Ok(token)
    }
}
