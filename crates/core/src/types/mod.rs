//! Core types for the profile proxy.

pub mod gid;
pub mod user_data;

pub use gid::{CustomerGid, GidError};
pub use user_data::{AssignedProduct, UserData};
