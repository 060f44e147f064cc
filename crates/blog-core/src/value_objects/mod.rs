//! Value objects - immutable types that represent domain concepts

mod ids;
mod principal;

pub use ids::{IdParseError, PostId, TagId, UserId};
pub use principal::Principal;
