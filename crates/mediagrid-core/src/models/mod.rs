//! Data models for the gallery
//!
//! Raw list records, the per-render resolved items derived from them, and the
//! upload request/response shapes.

mod record;
mod resolved;
mod upload;

// Re-export all models for convenient imports
pub use record::*;
pub use resolved::*;
pub use upload::*;
