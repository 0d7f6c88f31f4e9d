//! Standalone gallery document.

use mediagrid_core::escape_html;

use crate::card::IMAGE_FALLBACK_HOOK;
use crate::fallback::IMAGE_FALLBACK_MESSAGE;

const STYLE: &str = ".media-grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(220px,1fr));gap:1rem}\
.media-card{border:1px solid #e5e7eb;border-radius:8px;overflow:hidden}\
.media-thumb{display:flex;align-items:center;justify-content:center;min-height:160px;background:#f9fafb}\
.media-thumb img{max-width:100%;max-height:240px}\
.media-body{padding:.5rem}\
.image-error{display:none;color:#b91c1c}";

/// Wrap list-region markup in a full HTML page. The inline hook swaps a failed
/// image for a link inside the card named by the hook's first argument.
pub fn render_document(title: &str, list_markup: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{style}</style>
<script>
function {hook}(cardId, url, label) {{
  var card = document.getElementById(cardId);
  if (!card) return;
  var thumb = card.querySelector(".media-thumb");
  var err = card.querySelector(".image-error");
  if (thumb) {{
    var link = document.createElement("a");
    link.href = url;
    link.target = "_blank";
    link.rel = "noopener";
    link.className = "video-link";
    link.textContent = label || url;
    thumb.replaceChildren(link);
  }}
  if (err) {{
    err.textContent = "{message}";
    err.style.display = "block";
  }}
}}
</script>
</head>
<body>
{list}
</body>
</html>
"#,
        title = escape_html(title),
        style = STYLE,
        hook = IMAGE_FALLBACK_HOOK,
        message = IMAGE_FALLBACK_MESSAGE,
        list = list_markup,
    )
}
