//! Profile Proxy Backend library.
//!
//! This crate provides the backend functionality as a library, allowing it
//! to be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod directory;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod shopify;
pub mod state;
