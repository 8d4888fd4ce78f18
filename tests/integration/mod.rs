//! Integration tests for access-by-role
//!
//! These tests drive the public API end to end, from YAML configuration
//! through storage, decisions and the HTTP surface.

pub mod admin_tests;
pub mod config_tests;
pub mod decision_tests;
pub mod http_tests;
pub mod menu_tests;
pub mod redirect_tests;
