//! Mediagrid Core Library
//!
//! This crate provides the record model, field normalization, URL resolution,
//! media classification and configuration shared by the gallery renderer,
//! the API client and the CLI.

pub mod classify;
pub mod config;
pub mod error;
pub mod escape;
pub mod models;
pub mod normalize;
pub mod url_resolver;

// Re-export commonly used types
pub use classify::is_video;
pub use config::GalleryConfig;
pub use error::{RecordError, ValidationError};
pub use escape::{escape_handler_arg, escape_html};
pub use models::{MediaRecord, ResolvedMediaItem, SelectedFile, UploadRequest, UploadResponse};
pub use normalize::{normalize, Field, RawField};
pub use url_resolver::{build_blob_url, proxy_url, ResolveInput, UrlResolver};
