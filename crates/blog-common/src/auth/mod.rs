//! Password hashing and access policies

mod password;
mod policy;

pub use password::{hash_password, verify_password, Argon2PasswordHasher};
pub use policy::{AllowAllPolicy, RoleBasedPolicy};
