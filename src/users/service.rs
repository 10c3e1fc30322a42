use std::sync::Arc;

use tracing::{debug, warn};

use crate::auth::{
    bearer::bearer_token, error::AuthError, models::UserProfile, repository::CredentialStore,
    token::TokenService,
};

/// Resolves a bearer token to the profile of the user it names
pub struct ProfileService {
    store: Arc<dyn CredentialStore>,
    token_service: Arc<TokenService>,
}

impl ProfileService {
    pub fn new(store: Arc<dyn CredentialStore>, token_service: Arc<TokenService>) -> Self {
        Self {
            store,
            token_service,
        }
    }

    /// Look up the current user from a raw Authorization header value.
    ///
    /// Missing or non-bearer header -> `MissingToken`; bad or expired token ->
    /// `InvalidToken`; verified subject without an account -> `UserNotFound`.
    pub async fn get_profile(&self, authorization: Option<&str>) -> Result<UserProfile, AuthError> {
        let token = bearer_token(authorization)?;

        let verified = self.token_service.verify(token).map_err(|e| {
            warn!("Profile request with rejected token: {}", e);
            AuthError::from(e)
        })?;

        let user = self
            .store
            .find_by_email(verified.subject())
            .await?
            .ok_or_else(|| {
                debug!("Token subject {} has no account", verified.subject());
                AuthError::UserNotFound
            })?;

        Ok(user.into())
    }
}
