//! The gallery list region: fetch, render and replace.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use mediagrid_api_client::MediaApi;

use crate::card::CardId;
use crate::fallback::{CardRegistry, FallbackHandler};
use crate::render::GalleryRenderer;

/// Element id of the list region.
pub const LIST_REGION_ID: &str = "ImageList";

const LOADING_HTML: &str = r#"<div class="spinner-border" role="status"><span>Loading...</span></div>"#;
const EMPTY_HTML: &str = "<p>No media found or invalid data format.</p>";
const FETCH_FAILED_HTML: &str = "<p style='color:red;'>Error loading media. Check console.</p>";

/// What the list region currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListContent {
    Loading,
    Empty,
    FetchFailed,
    Cards(CardRegistry),
}

impl ListContent {
    pub fn cards(&self) -> Option<&CardRegistry> {
        match self {
            ListContent::Cards(registry) => Some(registry),
            _ => None,
        }
    }
}

impl fmt::Display for ListContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListContent::Loading => f.write_str(LOADING_HTML),
            ListContent::Empty => f.write_str(EMPTY_HTML),
            ListContent::FetchFailed => f.write_str(FETCH_FAILED_HTML),
            ListContent::Cards(registry) => f.write_str(&registry.to_html()),
        }
    }
}

/// Markup of the list region container holding `content`.
pub fn region_markup(content: &ListContent) -> String {
    format!(
        r#"<div id="{}" class="media-grid">{}</div>"#,
        LIST_REGION_ID, content
    )
}

/// Result of one `fetch_and_render` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Rendered { cards: usize, errors: usize },
    Empty,
    Failed,
    /// A fetch started later already replaced the list; this response was dropped.
    Superseded,
}

#[derive(Debug)]
struct ListState {
    content: ListContent,
    shown_generation: u64,
}

/// Owns the list region and keeps it in sync with `GET /api/images`.
pub struct Gallery {
    api: Arc<dyn MediaApi>,
    renderer: GalleryRenderer,
    generation: AtomicU64,
    state: Mutex<ListState>,
}

impl Gallery {
    pub fn new(api: Arc<dyn MediaApi>, renderer: GalleryRenderer) -> Self {
        Self {
            api,
            renderer,
            generation: AtomicU64::new(0),
            state: Mutex::new(ListState {
                content: ListContent::Empty,
                shown_generation: 0,
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, ListState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Show the loading placeholder, fetch the list and replace the region.
    ///
    /// Never retries. When fetches overlap, a response is applied only if no
    /// fetch started after it has already been applied.
    pub async fn fetch_and_render(&self) -> FetchOutcome {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state();
            if generation > state.shown_generation {
                state.content = ListContent::Loading;
            }
        }

        let content = match self.api.list_media().await {
            Ok(body) => self.renderer.render_response(&body),
            Err(err) => {
                tracing::error!(error = %err, "Error fetching media");
                ListContent::FetchFailed
            }
        };

        let outcome = match &content {
            ListContent::Cards(registry) => FetchOutcome::Rendered {
                cards: registry.len(),
                errors: registry.cards().iter().filter(|c| c.is_error()).count(),
            },
            ListContent::FetchFailed => FetchOutcome::Failed,
            ListContent::Empty | ListContent::Loading => FetchOutcome::Empty,
        };

        let mut state = self.state();
        if generation < state.shown_generation {
            tracing::debug!(generation, shown = state.shown_generation, "Dropping stale media list");
            return FetchOutcome::Superseded;
        }
        state.shown_generation = generation;
        state.content = content;
        outcome
    }

    /// Image `onerror` entry point. See [`FallbackHandler::on_image_load_failure`].
    pub fn on_image_error(&self, card_id: CardId, url: &str, label: &str) -> bool {
        let mut state = self.state();
        match &mut state.content {
            ListContent::Cards(registry) => {
                FallbackHandler::on_image_load_failure(registry, card_id, url, label)
            }
            _ => false,
        }
    }

    pub fn content(&self) -> ListContent {
        self.state().content.clone()
    }

    /// Markup of the list region including its container.
    pub fn markup(&self) -> String {
        region_markup(&self.state().content)
    }
}
