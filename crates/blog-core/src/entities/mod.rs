//! Domain entities - core business objects

mod post;
mod role;
mod tag;
mod user;

use chrono::{DateTime, SubsecRound, Utc};

pub use post::{Author, Post, PostKind, PostKindParseError};
pub use role::Role;
pub use tag::Tag;
pub use user::User;

/// Current time truncated to microseconds, the precision the store keeps
pub(crate) fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
