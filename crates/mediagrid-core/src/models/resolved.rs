use super::MediaRecord;
use crate::classify::is_video;
use crate::url_resolver::UrlResolver;

/// A record resolved for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMediaItem {
    pub file_name: String,
    pub user_name: String,
    pub user_id: String,
    pub url: String,
    pub is_video: bool,
    /// `videoN`, assigned by the renderer for videos only.
    pub video_label: Option<String>,
}

impl ResolvedMediaItem {
    pub fn resolve(record: MediaRecord, resolver: &UrlResolver) -> Self {
        let url = resolver.resolve(&record.resolve_input());
        let is_video = is_video(&record.content_type, &url, &record.file_name);

        Self {
            file_name: record.file_name,
            user_name: record.user_name,
            user_id: record.user_id,
            url,
            is_video,
            video_label: None,
        }
    }
}
