//! SVG extraction from raw model output.

use std::sync::OnceLock;

use regex::Regex;

static SVG_SPAN: OnceLock<Regex> = OnceLock::new();

fn svg_span() -> &'static Regex {
    SVG_SPAN.get_or_init(|| Regex::new(r"(?s)<svg.*?</svg>").expect("valid svg regex"))
}

/// Pull the SVG document out of raw model output.
///
/// If the trimmed text begins with `<svg`, the entire trimmed text is the
/// document. Otherwise the first `<svg ...>...</svg>` span (non-greedy) is
/// returned. `None` means no document was found — a normal outcome the
/// caller must handle, not an error. Never panics on malformed input.
pub fn extract_svg(content: &str) -> Option<&str> {
    let trimmed = content.trim();
    if trimmed.starts_with("<svg") {
        return Some(trimmed);
    }
    svg_span().find(content).map(|m| m.as_str())
}
