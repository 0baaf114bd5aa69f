//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Domain Types** - User, MediaItem and friends
//! - **Wire Types** - Backend payload structures (serde)
//! - **Error Types** - Frontend error handling

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Domain Types
// =============================================================================

/// Coarse media classification derived from the MIME prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaType {
    Image,
    Audio,
    Video,
}

impl MediaType {
    /// Classify a MIME type by its prefix.
    ///
    /// Returns `None` for anything outside image/audio/video, which is
    /// how the file picker rejects unsupported selections before any
    /// network call.
    pub fn from_mime(mime: &str) -> Option<Self> {
        if mime.starts_with("image/") {
            Some(MediaType::Image)
        } else if mime.starts_with("audio/") {
            Some(MediaType::Audio)
        } else if mime.starts_with("video/") {
            Some(MediaType::Video)
        } else {
            None
        }
    }

    /// Classification used for server records: unrecognized or empty
    /// mimetypes fall back to image.
    pub fn from_mime_or_image(mime: &str) -> Self {
        Self::from_mime(mime).unwrap_or(MediaType::Image)
    }

    /// Portuguese label for display.
    pub fn label(&self) -> &'static str {
        match self {
            MediaType::Image => "Imagem",
            MediaType::Audio => "Áudio",
            MediaType::Video => "Vídeo",
        }
    }

    /// Emoji icon for list and grid cells.
    pub fn icon(&self) -> &'static str {
        match self {
            MediaType::Image => "🖼️",
            MediaType::Audio => "🎵",
            MediaType::Video => "🎬",
        }
    }
}

/// The authenticated user, as held by the auth store.
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub username: String,
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Client-side projection of a server media record.
///
/// `url` stays `None` until a presigned URL is fetched on demand; it may
/// remain absent indefinitely if the item is never previewed.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaItem {
    pub id: u64,
    pub filename: String,
    pub description: Option<String>,
    pub media_type: MediaType,
    pub url: Option<String>,
    pub thumbnail: Option<String>,
    pub file_size: u64,
    /// Seconds, audio/video only.
    pub duration: Option<f64>,
    pub genre: Option<String>,
    pub tags: Vec<String>,
    pub uploaded_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MediaItem {
    /// File size in megabytes, for display.
    pub fn size_mb(&self) -> f64 {
        self.file_size as f64 / 1024.0 / 1024.0
    }
}

// =============================================================================
// Wire Types
// =============================================================================

/// One entry of the `GET /media/` list response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiMediaSummary {
    pub id: u64,
    pub filename: String,
    pub size: u64,
    #[serde(default, alias = "mime_type")]
    pub mimetype: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ApiMediaSummary {
    /// Map a server summary into the client-side projection.
    pub fn into_media_item(self, now: DateTime<Utc>) -> MediaItem {
        let uploaded_at = self
            .created_at
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or(now);

        MediaItem {
            id: self.id,
            filename: self.filename,
            description: None,
            media_type: MediaType::from_mime_or_image(&self.mimetype),
            url: None,
            thumbnail: self.thumbnail,
            file_size: self.size,
            duration: None,
            genre: None,
            tags: Vec::new(),
            uploaded_at,
            updated_at: uploaded_at,
        }
    }
}

/// The `GET /users/me` payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiUser {
    pub id: u64,
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ApiUser {
    /// Normalize a raw user payload into the auth store's `User`.
    ///
    /// The display username falls back from the explicit field to the
    /// full name to the local part of the email, in that order.
    pub fn into_user(self) -> User {
        let username = self
            .username
            .clone()
            .filter(|s| !s.is_empty())
            .or_else(|| self.full_name.clone().filter(|s| !s.is_empty()))
            .unwrap_or_else(|| {
                self.email
                    .split('@')
                    .next()
                    .unwrap_or_default()
                    .to_string()
            });

        User {
            id: self.id,
            email: self.email,
            username,
            full_name: self.full_name,
            bio: self.bio,
            avatar_url: self.avatar_url,
            created_at: self
                .created_at
                .as_deref()
                .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }
}

/// The `POST /auth/login` response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}

/// The `GET /media/{id}/url` response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PresignedUrl {
    pub url: String,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all service operations.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiError {
    /// Transport failed before an HTTP status was obtained.
    Network(String),
    /// Non-2xx response; `message` holds the server's `detail` field
    /// when present, the raw body otherwise.
    Http { status: u16, message: String },
    /// Response body could not be decoded into the expected shape.
    Decode(String),
    /// File rejected client-side before any network call.
    UnsupportedType(String),
    /// Login succeeded but the response carried no access token.
    MissingToken,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Http { message, .. } => write!(f, "{}", message),
            ApiError::Decode(msg) => write!(f, "Invalid response: {}", msg),
            ApiError::UnsupportedType(mime) => {
                write!(f, "Unsupported file type: {}", mime)
            }
            ApiError::MissingToken => write!(f, "No access token returned"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Result type alias for service operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_prefixes_classify() {
        assert_eq!(MediaType::from_mime("image/png"), Some(MediaType::Image));
        assert_eq!(MediaType::from_mime("audio/mpeg"), Some(MediaType::Audio));
        assert_eq!(MediaType::from_mime("video/mp4"), Some(MediaType::Video));
        assert_eq!(MediaType::from_mime("application/pdf"), None);
        assert_eq!(MediaType::from_mime(""), None);
    }

    #[test]
    fn server_records_default_to_image() {
        for mime in ["application/pdf", "", "imagex/png"] {
            assert_eq!(MediaType::from_mime_or_image(mime), MediaType::Image);
        }
        assert_eq!(
            MediaType::from_mime_or_image("video/webm"),
            MediaType::Video
        );
    }

    #[test]
    fn list_payload_maps_to_media_items() {
        let json = r#"[
            {"id": 1, "filename": "a.png", "size": 1024, "mimetype": "image/png",
             "thumbnail": "thumb/a.jpg", "created_at": "2025-06-01T12:00:00Z"},
            {"id": 2, "filename": "b.mp3", "size": 2048, "mimetype": "audio/mpeg"},
            {"id": 3, "filename": "c.mp4", "size": 4096, "mimetype": "video/mp4"},
            {"id": 4, "filename": "d.pdf", "size": 512, "mimetype": "application/pdf"}
        ]"#;

        let now = Utc::now();
        let items: Vec<MediaItem> = serde_json::from_str::<Vec<ApiMediaSummary>>(json)
            .unwrap()
            .into_iter()
            .map(|s| s.into_media_item(now))
            .collect();

        let types: Vec<MediaType> = items.iter().map(|i| i.media_type).collect();
        assert_eq!(
            types,
            vec![
                MediaType::Image,
                MediaType::Audio,
                MediaType::Video,
                MediaType::Image,
            ]
        );
        assert_eq!(items[0].thumbnail.as_deref(), Some("thumb/a.jpg"));
        assert_eq!(items[0].uploaded_at.to_rfc3339(), "2025-06-01T12:00:00+00:00");
        // No created_at falls back to the mapping instant.
        assert_eq!(items[1].uploaded_at, now);
        assert!(items.iter().all(|i| i.url.is_none()));
    }

    #[test]
    fn username_falls_back_in_priority_order() {
        let base = ApiUser {
            id: 7,
            email: "ana.silva@example.com".into(),
            username: None,
            full_name: None,
            bio: None,
            avatar_url: None,
            created_at: None,
        };

        let explicit = ApiUser {
            username: Some("ana".into()),
            full_name: Some("Ana Silva".into()),
            ..base.clone()
        };
        assert_eq!(explicit.into_user().username, "ana");

        let full_name_only = ApiUser {
            full_name: Some("Ana Silva".into()),
            ..base.clone()
        };
        assert_eq!(full_name_only.into_user().username, "Ana Silva");

        assert_eq!(base.into_user().username, "ana.silva");
    }

    #[test]
    fn user_payload_deserializes_with_optional_fields() {
        let json = r#"{"id": 3, "email": "x@y.z"}"#;
        let user: ApiUser = serde_json::from_str(json).unwrap();
        assert!(user.username.is_none());
        assert!(user.bio.is_none());
        assert_eq!(user.into_user().username, "x");
    }

    #[test]
    fn token_response_tolerates_absence() {
        let resp: TokenResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.access_token.is_none());
    }
}
