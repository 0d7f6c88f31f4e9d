//! Image load failure fallback.
//!
//! When an `<img>` fails in the browser its `onerror` hook reports the card
//! id. The card's regions are found through the [`CardRegistry`] built at
//! render time, not by walking the document.

use std::collections::HashMap;

use crate::card::{Card, CardId, ImageThumb};

pub const IMAGE_FALLBACK_MESSAGE: &str = "Image failed to load — opened as link instead.";

/// Cards of one render pass, addressable by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardRegistry {
    cards: Vec<Card>,
    index: HashMap<CardId, usize>,
}

impl CardRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, card: Card) {
        self.index.insert(card.id(), self.cards.len());
        self.cards.push(card);
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.index.get(&id).map(|&i| &self.cards[i])
    }

    pub fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.index.get(&id).map(|&i| &mut self.cards[i])
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Concatenated markup of all cards, in render order.
    pub fn to_html(&self) -> String {
        self.cards.iter().map(|card| card.to_string()).collect()
    }
}

pub struct FallbackHandler;

impl FallbackHandler {
    /// Replace a failed image with a link to `url` labelled `label` (or the URL
    /// when the label is empty) and show the failure message on the card.
    ///
    /// Returns false without changing anything when the card is unknown, is
    /// not an image card, or has already been replaced.
    pub fn on_image_load_failure(
        registry: &mut CardRegistry,
        card_id: CardId,
        url: &str,
        label: &str,
    ) -> bool {
        let Some(Card::Image(card)) = registry.get_mut(card_id) else {
            tracing::debug!(card = %card_id, "Image fallback for unknown or non-image card ignored");
            return false;
        };
        if !matches!(card.thumb, ImageThumb::Image { .. }) {
            return false;
        }

        let label = if label.is_empty() { url } else { label };
        card.thumb = ImageThumb::Link {
            href: url.to_string(),
            label: label.to_string(),
        };
        card.error_message = Some(IMAGE_FALLBACK_MESSAGE.to_string());

        tracing::warn!(card = %card_id, url = %url, "Image failed to load, replaced with link");
        true
    }
}
