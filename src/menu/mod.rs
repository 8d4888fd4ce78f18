//! Menu link visibility for role-restricted content
//!
//! Published, role-restricted nodes stay visible in navigation so anonymous
//! visitors can follow the link into the login redirect.

pub mod filter;
pub mod types;

pub use filter::{MenuVisibilityFilter, is_published_restricted};
pub use types::{CANONICAL_NODE_ROUTE, LinkAccess, LinkUrl, Menu, MenuAccess, MenuLink};
