// Authentication module
// Password-based registration and login issuing stateless JWT bearer tokens

pub mod bearer;
pub mod error;
pub mod handlers;
pub mod models;
pub mod password;
pub mod repository;
pub mod service;
pub mod token;

// Re-export commonly used types
pub use error::AuthError;
pub use handlers::{login_handler, register_handler};
pub use models::{
    LoginRequest, MessageResponse, NewUser, RegisterRequest, TokenResponse, User, UserProfile,
};
pub use password::PasswordService;
pub use repository::{CredentialStore, InMemoryUserRepository, PgUserRepository};
pub use service::AuthService;
pub use token::{TokenError, TokenService, VerifiedToken};
