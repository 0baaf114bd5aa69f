//! Application configuration.
//!
//! Centralized configuration for the Multimídia Manager frontend.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

/// Backend API base URL.
///
/// The media backend serving auth, media CRUD and presigned URLs.
/// A trailing slash is stripped before paths are appended.
pub const API_BASE_URL: &str = "http://localhost:8000";

/// Application name, shown in the header and document title.
pub const APP_NAME: &str = "Multimídia Manager";

/// localStorage key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Maximum bio length accepted client-side.
pub const MAX_BIO_LENGTH: usize = 300;

/// Default page size for media list requests.
pub const DEFAULT_LIST_LIMIT: u32 = 50;

/// Delay before successfully uploaded entries leave the queue (ms).
pub const SUCCESS_CLEAR_DELAY_MS: u32 = 4_000;
