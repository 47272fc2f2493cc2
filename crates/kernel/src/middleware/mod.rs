//! HTTP request plumbing.
//!
//! Identity is established upstream; this layer only reads what the
//! gateway forwards.

pub mod current_user;

pub use current_user::{
    CurrentUser, HEADER_USER_EMAIL, HEADER_USER_FIRST_NAME, HEADER_USER_LAST_NAME,
    HEADER_USER_ROLE,
};
