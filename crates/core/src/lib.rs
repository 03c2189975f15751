//! Profile Proxy Core - Shared types library.
//!
//! This crate provides the types shared by the backend binary and its
//! integration tests.
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Customer global IDs and the profile payload served to the frontend

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
