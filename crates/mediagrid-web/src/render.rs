//! Gallery renderer: raw list records to cards.

use mediagrid_core::{MediaRecord, RecordError, ResolvedMediaItem, UrlResolver};
use serde_json::Value;

use crate::card::{Card, CardId, ImageCard, VideoCard};
use crate::fallback::CardRegistry;
use crate::gallery::ListContent;

/// Builds one card per record, in input order.
#[derive(Debug, Clone, Default)]
pub struct GalleryRenderer {
    resolver: UrlResolver,
}

/// Sequential `videoN` labels for one render pass.
#[derive(Debug, Default)]
struct VideoLabels {
    count: usize,
}

impl VideoLabels {
    fn next(&mut self) -> String {
        self.count += 1;
        format!("video{}", self.count)
    }
}

impl GalleryRenderer {
    pub fn new(resolver: UrlResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &UrlResolver {
        &self.resolver
    }

    /// Render a list response body. Anything other than an array is "no media".
    pub fn render_response(&self, body: &Value) -> ListContent {
        match body {
            Value::Array(records) => ListContent::Cards(self.render(records)),
            other => {
                tracing::info!(
                    body_type = mediagrid_core::error::json_type_name(other),
                    "Media list response is not an array"
                );
                ListContent::Empty
            }
        }
    }

    /// Render records into cards. A record that fails becomes an error card and
    /// the remaining records are still rendered.
    pub fn render(&self, records: &[Value]) -> CardRegistry {
        let mut labels = VideoLabels::default();
        let mut registry = CardRegistry::new();

        for (index, raw) in records.iter().enumerate() {
            let id = CardId(index + 1);
            let card = match self.build_card(id, raw, &mut labels) {
                Ok(card) => card,
                Err(err) => {
                    tracing::warn!(card = %id, error = %err, "Error building card");
                    Card::Error(id)
                }
            };
            registry.push(card);
        }

        tracing::debug!(
            cards = registry.len(),
            videos = labels.count,
            "Rendered media list"
        );
        registry
    }

    fn build_card(
        &self,
        id: CardId,
        raw: &Value,
        labels: &mut VideoLabels,
    ) -> Result<Card, RecordError> {
        let record = MediaRecord::from_value(raw)?;
        let mut item = ResolvedMediaItem::resolve(record, &self.resolver);

        if item.is_video {
            let label = labels.next();
            item.video_label = Some(label.clone());
            Ok(Card::Video(VideoCard { id, label, item }))
        } else {
            Ok(Card::Image(ImageCard::new(id, item)))
        }
    }
}
