//! Utility functions for pulling text and links out of the page.

use once_cell::sync::Lazy;
use percent_encoding::percent_decode_str;
use regex::Regex;
use scraper::ElementRef;

/// Path prefix of links routed through the site's redirector
pub const REDIRECT_PREFIX: &str = "/redirect";

/// Query parameter carrying the real target of a redirect link
const REDIRECT_PARAM: &str = "url";

/// Leading task number such as `3. ` or `10.`
static TITLE_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9. ]+").unwrap());

/// `language-X` class; `X` stops at the next dash
static LANGUAGE_CLASS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^language-([^-]*)").unwrap());

/// Strip the leading run of digits, periods and spaces from a task title
pub fn strip_title_prefix(title: &str) -> &str {
    match TITLE_PREFIX.find(title) {
        Some(m) => &title[m.end()..],
        None => title,
    }
}

/// Get the language tag from a `class` attribute.
///
/// The first class of the form `language-X` wins; empty if there is none.
pub fn code_language(class: Option<&str>) -> String {
    class
        .unwrap_or("")
        .split_whitespace()
        .find_map(|c| LANGUAGE_CLASS.captures(c))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Resolve the target of a resource link.
///
/// Redirect links give back their decoded `url` parameter; every other href,
/// and a redirect without a usable `url`, is returned verbatim.
pub fn resolve_href(href: &str) -> String {
    if !href.starts_with(REDIRECT_PREFIX) {
        return href.to_string();
    }

    let query = href
        .split_once('?')
        .map(|(_, rest)| rest)
        .unwrap_or("");
    let query = query.split_once('#').map(|(q, _)| q).unwrap_or(query);

    match query_param(query, REDIRECT_PARAM) {
        Some(value) => percent_decode_str(&value).decode_utf8_lossy().into_owned(),
        None => href.to_string(),
    }
}

/// First non-empty value of `name` in a query string, form-decoded
fn query_param(query: &str, name: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .map(|(key, value)| (form_decode(key), form_decode(value)))
        .find(|(key, value)| key == name && !value.is_empty())
        .map(|(_, value)| value)
}

/// Decode one `application/x-www-form-urlencoded` component
fn form_decode(s: &str) -> String {
    let plus_as_space = s.replace('+', " ");
    percent_decode_str(&plus_as_space)
        .decode_utf8_lossy()
        .into_owned()
}

/// Text of an element with every text node trimmed and empty ones dropped
pub fn stripped_text(element: ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Full text of an element, whitespace untouched
pub fn text_content(element: ElementRef) -> String {
    element.text().collect()
}
