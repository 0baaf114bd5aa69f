//! Application state containers.
//!
//! Two context-provided stores own all shared mutable state (the
//! current user and the media list) and expose narrow operation sets;
//! components read through signals and mutate only through store
//! methods. The upload queue is a pure state machine driven by the
//! upload component.

pub mod auth;
pub mod media;
pub mod queue;

pub use auth::{use_auth, AuthStore};
pub use media::{use_media, MediaPatch, MediaStore};
pub use queue::{entry_id, QueueAction, QueueEntry, QueueState, UploadMeta, UploadStatus};
