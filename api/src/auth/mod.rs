//! Authentication
//!
//! Password hashing, access tokens and the bearer middleware guarding
//! account routes.

pub mod middleware;
pub mod password;
pub mod token;

pub use middleware::auth_middleware;
pub use password::{hash_password, verify_password};
pub use token::TokenKeys;
