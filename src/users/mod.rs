// Current-user profile lookup

pub mod handlers;
pub mod service;

pub use handlers::me_handler;
pub use service::ProfileService;
