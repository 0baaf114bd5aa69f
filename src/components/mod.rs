//! UI Components for the Multimídia Manager application.
//!
//! # Pages
//! - [`LoginPage`] - login / signup tabs
//! - [`DashboardPage`] - protected layout with header and sidebar
//!
//! # Feature Components
//! - [`MediaGallery`] - search, filter and browse the gallery
//! - [`MediaPreview`] - modal player/viewer via presigned URL
//! - [`MediaActions`] - per-item edit and delete dialogs
//! - [`UploadSection`] - staged upload queue
//! - [`ProfileSettings`] - profile, avatar and password management

mod actions;
mod gallery;
mod layout;
mod login;
mod preview;
mod profile;
mod sidebar;
mod upload;

pub use actions::*;
pub use gallery::*;
pub use layout::*;
pub use login::*;
pub use preview::*;
pub use profile::*;
pub use sidebar::*;
pub use upload::*;
