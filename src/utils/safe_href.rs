// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Scheme allow-list for link targets taken from user-authored Markdown.

use std::borrow::Cow;

use url::Url;

/// Neutral link target substituted for anything outside the allow-list.
pub const PLACEHOLDER_HREF: &str = "#";

/// Schemes (with their trailing separator) that may be rendered as clickable links.
pub const ALLOWED_SCHEMES: [&str; 3] = ["http:", "https:", "mailto:"];

/// Return `true` when `href` may be used as a link target as-is.
///
/// Absolute URLs pass only with an allow-listed scheme. Inputs that do not
/// parse as absolute URLs (relative paths, fragments, bare file names) cannot
/// carry a scheme and are accepted.
pub fn is_safe_href(href: &str) -> bool {
    match Url::parse(href) {
        Ok(url) => {
            // `Url` normalizes the scheme to lowercase, so `JavaScript:` is caught too.
            let protocol = format!("{}:", url.scheme());
            ALLOWED_SCHEMES.contains(&protocol.as_str())
        }
        Err(_) => true,
    }
}

/// Neutralize a link target unless its scheme is allow-listed.
///
/// Returns the input unchanged for `http:`, `https:`, `mailto:` and relative
/// references, and [`PLACEHOLDER_HREF`] for every other absolute scheme
/// (`javascript:`, `data:`, `file:`, ...). Never fails.
///
/// # Examples
///
/// ```
/// use notefold::utils::sanitize_href;
///
/// assert_eq!(sanitize_href("https://example.com"), "https://example.com");
/// assert_eq!(sanitize_href("javascript:alert(1)"), "#");
/// assert_eq!(sanitize_href("/local/page"), "/local/page");
/// ```
pub fn sanitize_href(href: &str) -> Cow<'_, str> {
    if is_safe_href(href) {
        Cow::Borrowed(href)
    } else {
        tracing::debug!(href, "replacing link target with disallowed scheme");
        Cow::Borrowed(PLACEHOLDER_HREF)
    }
}
