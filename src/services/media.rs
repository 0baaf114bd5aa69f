//! Media endpoints: listing, presigned URLs, uploads, updates, deletion.
//!
//! Uploads are multipart and bypass the JSON-default request layer: the
//! request is issued with only the bearer header attached so the
//! transport can set the multipart boundary, exactly like the backend
//! expects.

use gloo_net::http::{Method, RequestBuilder};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use web_sys::{File, FormData};

use crate::services::api::{api_request, api_url, fetch_json, send};
use crate::services::token::get_token;
use crate::types::{ApiError, ApiMediaSummary, ApiResult, MediaType, PresignedUrl};

/// Type-specific detail payload from `GET /media/{id}`.
///
/// The backend returns different shapes per media type; only the fields
/// the dashboard renders are decoded here.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiMediaDetail {
    pub id: u64,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "genero")]
    pub genre: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub duration: Option<f64>,
}

/// Optional fields accompanying an upload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadOptions {
    pub description: Option<String>,
    pub genre: Option<String>,
    pub tags: Vec<String>,
    pub is_profile: bool,
}

/// Partial update for `PUT /media/{image|video|audio}/{id}`.
///
/// Absent fields are omitted from the JSON body; the backend keeps
/// their current values.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct MediaUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "genero", skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Split a comma-separated tag string into trimmed, deduplicated tags.
/// Empty segments are dropped; first occurrence wins.
pub fn parse_tags(input: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for raw in input.split(',') {
        let tag = raw.trim();
        if tag.is_empty() {
            continue;
        }
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

/// `GET /media/` with optional free-text query and paging parameters.
pub async fn list_media(
    q: Option<&str>,
    limit: u32,
    offset: u32,
) -> ApiResult<Vec<ApiMediaSummary>> {
    let mut params: Vec<(&str, String)> = Vec::new();
    if let Some(q) = q.filter(|q| !q.is_empty()) {
        params.push(("q", q.to_string()));
    }
    params.push(("limit", limit.to_string()));
    params.push(("offset", offset.to_string()));

    let request = api_request(Method::GET, "/media/")
        .query(params.iter().map(|(k, v)| (*k, v.as_str())))
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))?;
    fetch_json(request).await
}

/// `GET /media/{id}`.
pub async fn get_media(media_id: u64) -> ApiResult<ApiMediaDetail> {
    let request = api_request(Method::GET, &format!("/media/{}", media_id))
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))?;
    fetch_json(request).await
}

/// `GET /media/{id}/url`: time-limited direct link to the stored object.
pub async fn get_presigned_url(media_id: u64) -> ApiResult<PresignedUrl> {
    let request = api_request(Method::GET, &format!("/media/{}/url", media_id))
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))?;
    fetch_json(request).await
}

/// `DELETE /media/{id}`.
pub async fn delete_media(media_id: u64) -> ApiResult<()> {
    let request = api_request(Method::DELETE, &format!("/media/{}", media_id))
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))?;
    send(request).await?;
    Ok(())
}

fn base_form(file: &File, options: &UploadOptions) -> ApiResult<FormData> {
    let form =
        FormData::new().map_err(|e| ApiError::Network(format!("Failed to create FormData: {:?}", e)))?;
    form.append_with_blob("file", file)
        .map_err(|e| ApiError::Network(format!("Failed to append file: {:?}", e)))?;

    if let Some(description) = options.description.as_deref().filter(|d| !d.is_empty()) {
        let _ = form.append_with_str("description", description);
    }
    if !options.tags.is_empty() {
        let _ = form.append_with_str("tags", &options.tags.join(","));
    }
    Ok(form)
}

/// POST a multipart body with only the bearer header attached.
async fn upload_multipart(path: &str, form: FormData) -> ApiResult<Value> {
    let mut builder = RequestBuilder::new(&api_url(path)).method(Method::POST);
    if let Some(token) = get_token() {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }

    let request = builder
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let status_text = response.status_text();
        let text = response.text().await.unwrap_or_default();
        let message = if text.trim().is_empty() { status_text } else { text };
        return Err(ApiError::Http { status, message });
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// `POST /media/upload/image`. Carries the profile-avatar flag.
pub async fn upload_image(file: &File, options: &UploadOptions) -> ApiResult<Value> {
    let form = base_form(file, options)?;
    if options.is_profile {
        let _ = form.append_with_str("is_profile", "true");
    }
    upload_multipart("/media/upload/image", form).await
}

/// `POST /media/upload/video`. Carries the genre field.
pub async fn upload_video(file: &File, options: &UploadOptions) -> ApiResult<Value> {
    let form = base_form(file, options)?;
    if let Some(genre) = options.genre.as_deref().filter(|g| !g.is_empty()) {
        let _ = form.append_with_str("genero", genre);
    }
    upload_multipart("/media/upload/video", form).await
}

/// `POST /media/upload/audio`. Carries the genre field.
pub async fn upload_audio(file: &File, options: &UploadOptions) -> ApiResult<Value> {
    let form = base_form(file, options)?;
    if let Some(genre) = options.genre.as_deref().filter(|g| !g.is_empty()) {
        let _ = form.append_with_str("genero", genre);
    }
    upload_multipart("/media/upload/audio", form).await
}

/// Route an upload by the file's declared MIME prefix.
///
/// Files outside image/audio/video are rejected here, before any
/// network call is made.
pub async fn upload_media(file: &File, options: &UploadOptions) -> ApiResult<Value> {
    match MediaType::from_mime(&file.type_()) {
        Some(MediaType::Image) => upload_image(file, options).await,
        Some(MediaType::Video) => upload_video(file, options).await,
        Some(MediaType::Audio) => upload_audio(file, options).await,
        None => Err(ApiError::UnsupportedType(file.type_())),
    }
}

/// `PUT /media/image/{id}`.
pub async fn update_image(media_id: u64, update: &MediaUpdate) -> ApiResult<Value> {
    let request = api_request(Method::PUT, &format!("/media/image/{}", media_id))
        .json(update)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    fetch_json(request).await
}

/// `PUT /media/video/{id}`.
pub async fn update_video(media_id: u64, update: &MediaUpdate) -> ApiResult<Value> {
    let request = api_request(Method::PUT, &format!("/media/video/{}", media_id))
        .json(update)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    fetch_json(request).await
}

/// `PUT /media/audio/{id}`.
pub async fn update_audio(media_id: u64, update: &MediaUpdate) -> ApiResult<Value> {
    let request = api_request(Method::PUT, &format!("/media/audio/{}", media_id))
        .json(update)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    fetch_json(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_trimmed_and_empties_dropped() {
        assert_eq!(
            parse_tags("rock, pop ,  ,jazz"),
            vec!["rock", "pop", "jazz"]
        );
    }

    #[test]
    fn tags_deduplicate_keeping_first_occurrence() {
        assert_eq!(
            parse_tags("rock, jazz, rock, Rock"),
            vec!["rock", "jazz", "Rock"]
        );
        assert!(parse_tags(" , ,,").is_empty());
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn media_update_omits_absent_fields() {
        let update = MediaUpdate {
            description: Some("férias".into()),
            genre: None,
            tags: None,
        };
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"description":"férias"}"#
        );
    }

    #[test]
    fn media_update_renames_genre_on_the_wire() {
        let update = MediaUpdate {
            description: None,
            genre: Some("mpb".into()),
            tags: Some(vec!["ao-vivo".into()]),
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value["genero"], "mpb");
        assert!(value.get("genre").is_none());
        assert_eq!(value["tags"][0], "ao-vivo");
    }

    #[test]
    fn detail_payload_tolerates_sparse_fields() {
        let detail: ApiMediaDetail =
            serde_json::from_str(r#"{"id": 9, "genero": "samba"}"#).unwrap();
        assert_eq!(detail.genre.as_deref(), Some("samba"));
        assert!(detail.tags.is_empty());
        assert!(detail.duration.is_none());
    }
}
