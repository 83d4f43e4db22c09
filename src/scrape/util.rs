use html_escape::decode_html_entities;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::Display;

static TITLE_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[.,a-zA-Z()&#;'/\- 0-9]*$").expect("title character class is a valid regex")
});
static LABEL_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z ]*$").expect("label character class is a valid regex"));

pub fn notify_parse_fail<T: Display>(msg: &str, item: T) {
    tracing::debug!("Skipping cell while parsing HTML: {} at {}", msg, item);
}

pub fn strip_line_breaks(html: &str) -> String {
    html.replace(['\n', '\r'], "")
}

/// Escapes every `&` so the parser leaves entity references in text nodes untouched.
pub fn keep_entities_literal(html: &str) -> String {
    html.replace('&', "&amp;")
}

/// Decodes entity references left by `keep_entities_literal`, turning no-break spaces into spaces.
pub fn decode_text(raw: &str) -> String {
    decode_html_entities(raw).replace('\u{a0}', " ")
}

pub fn is_title_text(text: &str) -> bool {
    TITLE_CHARS.is_match(text)
}

pub fn is_label_text(text: &str) -> bool {
    LABEL_CHARS.is_match(text)
}
