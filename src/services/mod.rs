//! Backend communication services.
//!
//! Thin mappings from semantic operations to HTTP calls:
//!
//! - [`token`] - bearer token persistence in localStorage
//! - [`api`] - request building and response normalization
//! - [`auth`] - login, signup, logout, profile, password
//! - [`media`] - media listing, uploads, updates, deletion

pub mod api;
pub mod auth;
pub mod media;
pub mod token;
