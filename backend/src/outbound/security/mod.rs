//! Security adapters: token signing and password hashing.

mod jwt;
mod password;

pub use jwt::HsTokenCodec;
pub use password::BcryptPasswordHasher;
