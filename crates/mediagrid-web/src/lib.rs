//! Gallery rendering and upload submission.
//!
//! The list region and the upload form are modelled as explicit state instead
//! of a live document: [`Gallery`] owns the rendered cards and replaces them on
//! every fetch, [`FallbackHandler`] swaps failed images for links by card id,
//! and [`UploadPanel`] drives the busy/disabled submit control around a
//! single upload request.

pub mod card;
pub mod fallback;
pub mod gallery;
pub mod page;
pub mod render;
pub mod upload;

pub use card::{Card, CardId, ImageCard, ImageThumb, VideoCard};
pub use fallback::{CardRegistry, FallbackHandler, IMAGE_FALLBACK_MESSAGE};
pub use gallery::{region_markup, FetchOutcome, Gallery, ListContent, LIST_REGION_ID};
pub use page::render_document;
pub use render::GalleryRenderer;
pub use upload::{Notice, Notifier, SubmitControl, SubmitOutcome, UploadForm, UploadPanel};

#[cfg(test)]
pub(crate) mod test_helpers;
