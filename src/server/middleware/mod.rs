//! HTTP middleware implementations
//!
//! - Degenerate-account guard (request hook)
//! - Login redirect for denied anonymous requests (403 hook)

mod account_guard;
mod denied_redirect;
mod helpers;

#[cfg(test)]
mod tests;

pub use account_guard::{AccountGuardMiddleware, AccountGuardMiddlewareService};
pub use denied_redirect::{DeniedContext, DeniedRedirectMiddleware, DeniedRedirectMiddlewareService};
pub use helpers::{USER_ID_HEADER, extract_user_id, is_public_route, principal_for};
