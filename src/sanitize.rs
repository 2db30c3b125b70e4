//! Display-side sanitization of model-produced SVG.
//!
//! Backend output is untrusted input. Committed versions keep the artifact
//! verbatim (the history is the authoritative record of what the model
//! produced); this pass runs at projection time, before anything reaches a
//! display or export surface.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

static SCRIPT_BLOCK: OnceLock<Regex> = OnceLock::new();
static EVENT_HANDLER: OnceLock<Regex> = OnceLock::new();
static JS_URL: OnceLock<Regex> = OnceLock::new();

fn script_block() -> &'static Regex {
    SCRIPT_BLOCK.get_or_init(|| {
        Regex::new(r"(?is)<script\b.*?(?:</script\s*>|/>)").expect("valid script regex")
    })
}

fn event_handler() -> &'static Regex {
    EVENT_HANDLER.get_or_init(|| {
        Regex::new(r#"(?i)\s+on[a-z]+\s*=\s*(?:"[^"]*"|'[^']*'|[^\s>]+)"#)
            .expect("valid handler regex")
    })
}

fn js_url() -> &'static Regex {
    JS_URL.get_or_init(|| {
        Regex::new(r#"(?i)(href|xlink:href)\s*=\s*(?:"\s*javascript:[^"]*"|'\s*javascript:[^']*')"#)
            .expect("valid url regex")
    })
}

/// Strip active content from an SVG document.
///
/// Removes `<script>` elements, inline `on*` event-handler attributes, and
/// `javascript:` link targets. Everything else passes through untouched.
pub fn sanitize_svg(svg: &str) -> String {
    let no_scripts: Cow<'_, str> = script_block().replace_all(svg, "");
    let no_handlers: Cow<'_, str> = event_handler().replace_all(no_scripts.as_ref(), "");
    js_url()
        .replace_all(no_handlers.as_ref(), r##"${1}="#""##)
        .into_owned()
}
