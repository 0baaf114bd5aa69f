//! Media state store: the current user's gallery.

use chrono::Utc;
use leptos::*;

use crate::config::DEFAULT_LIST_LIMIT;
use crate::services::media;
use crate::types::{ApiResult, MediaItem};

/// Local-only merge of editable metadata into a gallery item.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MediaPatch {
    pub description: Option<String>,
    pub genre: Option<String>,
    pub tags: Option<Vec<String>>,
    pub url: Option<String>,
    pub duration: Option<f64>,
}

/// Context-provided store owning the media list.
#[derive(Clone, Copy)]
pub struct MediaStore {
    items: RwSignal<Vec<MediaItem>>,
    loading: RwSignal<bool>,
}

/// Fetch the store from context. Panics outside the `App` tree.
pub fn use_media() -> MediaStore {
    expect_context::<MediaStore>()
}

impl MediaStore {
    pub fn new() -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
            loading: create_rw_signal(false),
        }
    }

    /// Reactive read access to the gallery.
    pub fn items(&self) -> ReadSignal<Vec<MediaItem>> {
        self.items.read_only()
    }

    pub fn is_loading(&self) -> ReadSignal<bool> {
        self.loading.read_only()
    }

    /// Fetch the full list and replace the in-memory gallery wholesale.
    /// Runs on dashboard mount and after every mutation the UI wants
    /// reflected immediately.
    pub async fn refresh(&self) -> ApiResult<()> {
        self.loading.set(true);
        let result = media::list_media(None, DEFAULT_LIST_LIMIT, 0).await;
        self.loading.set(false);

        let summaries = result?;
        let now = Utc::now();
        let items: Vec<MediaItem> = summaries
            .into_iter()
            .map(|s| s.into_media_item(now))
            .collect();
        log::debug!("gallery refreshed: {} items", items.len());
        self.items.set(items);
        Ok(())
    }

    /// Prepend an item without a backend call.
    pub fn add(&self, item: MediaItem) {
        self.items.update(|items| items.insert(0, item));
    }

    /// Merge fields into the matching item, stamping a new update time.
    ///
    /// A cache hint only: callers persist through the media service
    /// first, and the next `refresh` overwrites whatever is here.
    pub fn update_local(&self, id: u64, patch: MediaPatch) {
        self.items.update(|items| {
            if let Some(item) = items.iter_mut().find(|i| i.id == id) {
                if let Some(description) = patch.description {
                    item.description = Some(description);
                }
                if let Some(genre) = patch.genre {
                    item.genre = Some(genre);
                }
                if let Some(tags) = patch.tags {
                    item.tags = tags;
                }
                if let Some(url) = patch.url {
                    item.url = Some(url);
                }
                if let Some(duration) = patch.duration {
                    item.duration = Some(duration);
                }
                item.updated_at = Utc::now();
            }
        });
    }

    /// Delete on the backend, then drop the item locally. The item
    /// stays in place when the backend call fails.
    pub async fn delete(&self, id: u64) -> ApiResult<()> {
        media::delete_media(id).await?;
        self.items.update(|items| items.retain(|i| i.id != id));
        Ok(())
    }

    /// Synchronous lookup by id.
    pub fn get(&self, id: u64) -> Option<MediaItem> {
        self.items
            .with_untracked(|items| items.iter().find(|i| i.id == id).cloned())
    }

    /// On-demand presigned URL fetch. Failures are logged and swallowed;
    /// the caller renders without a URL.
    pub async fn url_for(&self, id: u64) -> Option<String> {
        match media::get_presigned_url(id).await {
            Ok(presigned) => Some(presigned.url),
            Err(e) => {
                log::warn!("presigned URL fetch failed for media {}: {}", id, e);
                None
            }
        }
    }
}

impl Default for MediaStore {
    fn default() -> Self {
        Self::new()
    }
}
