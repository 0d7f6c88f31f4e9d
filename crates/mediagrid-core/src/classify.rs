//! Video/image classification.
//!
//! Only videos are detected. Everything else is attempted as an image and
//! falls back to a link in the browser if it does not load.

use regex::Regex;
use std::sync::LazyLock;

static VIDEO_EXTENSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.(mp4|m4v|webm|og[gv]|mov|avi)(\?|#|$)")
        .expect("video extension pattern is a valid regex")
});

/// True when the item should be rendered as a video link.
pub fn is_video(content_type: &str, url: &str, file_name: &str) -> bool {
    if content_type.trim().to_ascii_lowercase().starts_with("video/") {
        return true;
    }
    let target = format!("{} {}", url, file_name).to_lowercase();
    VIDEO_EXTENSION.is_match(&target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_content_type_wins() {
        assert!(is_video("video/mp4", "", ""));
        assert!(is_video("VIDEO/QuickTime", "/api/blob?path=x.png", "x.png"));
    }

    #[test]
    fn video_extensions_are_detected() {
        assert!(is_video("", "", "clip.mp4"));
        assert!(is_video("", "", "CLIP.MOV"));
        assert!(is_video("", "https://cdn.example.net/a.webm?x=1", ""));
        assert!(is_video("", "https://cdn.example.net/a.ogv#t=10", ""));
        assert!(is_video("", "", "old.avi"));
        assert!(is_video("application/octet-stream", "", "song.ogg"));
    }

    #[test]
    fn url_extension_followed_by_display_name_is_not_video() {
        let url = crate::url_resolver::proxy_url("u1/clip.mp4");
        assert!(!is_video("", &url, "Holiday"));
        assert!(!is_video("", "/api/blob?path=a.png", "my.mov trailer"));
        assert!(is_video("", &url, "clip.mp4"));
    }

    #[test]
    fn non_video_items_are_images() {
        assert!(!is_video("image/png", "/api/blob?path=cat.png", "cat.png"));
        assert!(!is_video("application/pdf", "", "report.pdf"));
        assert!(!is_video("", "", "no_extension"));
        assert!(!is_video("", "", ""));
    }

    #[test]
    fn extension_must_end_the_name() {
        assert!(!is_video("", "", "clip.mp4.png"));
        assert!(!is_video("", "", "movie.mpeg"));
        assert!(!is_video("", "", "mp4"));
    }
}
