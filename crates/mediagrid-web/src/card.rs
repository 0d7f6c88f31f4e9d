//! Gallery cards and their markup.
//!
//! Every card is `div.media-card#card-N` with a `div.media-thumb` region and a
//! `div.media-body` region. Image cards also carry a `div.image-error` region
//! that the fallback handler fills in.

use std::fmt;

use mediagrid_core::{escape_handler_arg, escape_html, ResolvedMediaItem};

/// Name of the browser hook an image's `onerror` calls.
pub const IMAGE_FALLBACK_HOOK: &str = "imageFallbackToLink";

const UNNAMED: &str = "(unnamed)";
const UNKNOWN: &str = "(unknown)";
const ERROR_TITLE: &str = "Error displaying this item";

/// Position of a card within one render pass, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardId(pub usize);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "card-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Card {
    Video(VideoCard),
    Image(ImageCard),
    /// Placeholder for a record that could not be rendered.
    Error(CardId),
}

impl Card {
    pub fn id(&self) -> CardId {
        match self {
            Card::Video(card) => card.id,
            Card::Image(card) => card.id,
            Card::Error(id) => *id,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Card::Error(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoCard {
    pub id: CardId,
    pub label: String,
    pub item: ResolvedMediaItem,
}

impl VideoCard {
    /// Download name: the file name, or the label when there is none.
    pub fn download_name(&self) -> &str {
        if self.item.file_name.is_empty() {
            &self.label
        } else {
            &self.item.file_name
        }
    }
}

/// Contents of an image card's thumbnail region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageThumb {
    Image { src: String },
    /// Set by the fallback handler after the image failed to load.
    Link { href: String, label: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCard {
    pub id: CardId,
    pub item: ResolvedMediaItem,
    pub thumb: ImageThumb,
    pub error_message: Option<String>,
}

impl ImageCard {
    pub fn new(id: CardId, item: ResolvedMediaItem) -> Self {
        let thumb = ImageThumb::Image {
            src: item.url.clone(),
        };
        Self {
            id,
            item,
            thumb,
            error_message: None,
        }
    }

    /// Caption text: the file name, or the URL when there is none.
    pub fn label(&self) -> &str {
        if self.item.file_name.is_empty() {
            &self.item.url
        } else {
            &self.item.file_name
        }
    }
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

fn write_uploader(f: &mut fmt::Formatter<'_>, item: &ResolvedMediaItem) -> fmt::Result {
    write!(
        f,
        "<div>Uploaded by: {} (id: {})</div>",
        escape_html(or_fallback(&item.user_name, UNKNOWN)),
        escape_html(or_fallback(&item.user_id, UNKNOWN)),
    )
}

impl fmt::Display for VideoCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, r#"<div class="media-card" id="{}">"#, self.id)?;
        write!(
            f,
            r#"<div class="media-thumb"><a class="video-link" href="{}" target="_blank" download="{}">{}</a></div>"#,
            self.item.url,
            escape_html(self.download_name()),
            escape_html(&self.label),
        )?;
        write!(
            f,
            r#"<div class="media-body"><span class="media-title">{}</span>"#,
            escape_html(or_fallback(&self.item.file_name, UNNAMED)),
        )?;
        write_uploader(f, &self.item)?;
        f.write_str("</div></div>")
    }
}

impl fmt::Display for ImageCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let safe_label = escape_html(self.label());

        write!(f, r#"<div class="media-card" id="{}">"#, self.id)?;
        f.write_str(r#"<div class="media-thumb">"#)?;
        match &self.thumb {
            ImageThumb::Image { src } => write!(
                f,
                r#"<img src="{src}" alt="{alt}" onerror="{hook}('{id}', '{url}', '{label}')" />"#,
                src = src,
                alt = safe_label,
                hook = IMAGE_FALLBACK_HOOK,
                id = self.id,
                url = escape_handler_arg(src),
                label = escape_handler_arg(&safe_label),
            )?,
            ImageThumb::Link { href, label } => write!(
                f,
                r#"<a href="{}" target="_blank" rel="noopener" class="video-link">{}</a>"#,
                href,
                escape_html(label),
            )?,
        }
        f.write_str("</div>")?;

        write!(
            f,
            r#"<div class="media-body"><span class="media-title">{}</span>"#,
            safe_label
        )?;
        write_uploader(f, &self.item)?;
        match &self.error_message {
            Some(message) => write!(
                f,
                r#"<div class="image-error" style="display:block">{}</div>"#,
                escape_html(message)
            )?,
            None => f.write_str(r#"<div class="image-error"></div>"#)?,
        }
        f.write_str("</div></div>")
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Video(card) => fmt::Display::fmt(card, f),
            Card::Image(card) => fmt::Display::fmt(card, f),
            Card::Error(id) => write!(
                f,
                r#"<div class="media-card media-card-error" id="{}"><div class="media-body"><span class="media-title" style="color:#b91c1c;">{}</span></div></div>"#,
                id, ERROR_TITLE
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::item;

    #[test]
    fn card_id_renders_as_element_id() {
        assert_eq!(CardId(3).to_string(), "card-3");
    }

    #[test]
    fn video_card_is_a_download_link() {
        let card = VideoCard {
            id: CardId(1),
            label: "video1".to_string(),
            item: item("clip.mp4", "/api/blob?path=clip.mp4", true),
        };
        let html = card.to_string();
        assert!(html.contains(
            r#"<a class="video-link" href="/api/blob?path=clip.mp4" target="_blank" download="clip.mp4">video1</a>"#
        ));
        assert!(html.contains(r#"<span class="media-title">clip.mp4</span>"#));
        assert!(!html.contains("<video"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn unnamed_video_downloads_as_label() {
        let item = ResolvedMediaItem {
            user_name: String::new(),
            user_id: String::new(),
            ..item("", "/api/blob?path=x", true)
        };
        let card = VideoCard {
            id: CardId(2),
            label: "video4".to_string(),
            item,
        };
        let html = card.to_string();
        assert!(html.contains(r#"download="video4""#));
        assert!(html.contains(r#"<span class="media-title">(unnamed)</span>"#));
        assert!(html.contains("Uploaded by: (unknown) (id: (unknown))"));
    }

    #[test]
    fn image_card_registers_fallback_hook() {
        let card = ImageCard::new(CardId(5), item("it's.png", "/api/blob?path=it's.png", false));
        let html = card.to_string();
        assert!(html.contains(r#"<img src="/api/blob?path=it's.png" alt="it's.png""#));
        assert!(html.contains(
            r#"onerror="imageFallbackToLink('card-5', '/api/blob?path=it\'s.png', 'it\'s.png')""#
        ));
        assert!(html.contains(r#"<div class="image-error"></div>"#));
    }

    #[test]
    fn unnamed_image_is_labelled_by_url() {
        let card = ImageCard::new(CardId(1), item("", "https://cdn.example.net/a.png", false));
        assert_eq!(card.label(), "https://cdn.example.net/a.png");
        assert!(card
            .to_string()
            .contains(r#"<span class="media-title">https://cdn.example.net/a.png</span>"#));
    }

    #[test]
    fn user_text_is_escaped() {
        let mut image = item(r#"<script>"x"&</script>"#, "/api/blob?path=a", false);
        image.user_name = "<b>Mallory</b>".to_string();
        image.user_id = r#""1" & 2"#.to_string();
        let html = ImageCard::new(CardId(1), image.clone()).to_string();
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;script&gt;&quot;x&quot;&amp;&lt;/script&gt;"));
        assert!(html.contains("Uploaded by: &lt;b&gt;Mallory&lt;/b&gt; (id: &quot;1&quot; &amp; 2)"));

        image.is_video = true;
        let html = VideoCard {
            id: CardId(2),
            label: "video1".to_string(),
            item: image,
        }
        .to_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains(r#"download="&lt;script&gt;"#));
    }

    #[test]
    fn error_card_is_marked() {
        let card = Card::Error(CardId(3));
        assert!(card.is_error());
        assert_eq!(card.id(), CardId(3));
        let html = card.to_string();
        assert!(html.contains(r#"class="media-card media-card-error" id="card-3""#));
        assert!(html.contains("Error displaying this item"));
    }
}
