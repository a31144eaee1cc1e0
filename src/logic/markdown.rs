// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Markdown rendering with link targets restricted to safe schemes.

use std::borrow::Cow;
use std::collections::HashSet;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

use crate::utils::safe_href::{ALLOWED_SCHEMES, PLACEHOLDER_HREF};
use crate::utils::{is_safe_href, sanitize_href};

/// Render markdown to sanitized HTML suitable for display.
///
/// Every link destination is checked with [`is_safe_href`] and replaced by
/// `#` when its scheme is not allow-listed. The resulting HTML is then cleaned
/// by Ammonia under the same allow-list, so raw `<a href>` tags in the note
/// follow the same policy as Markdown links. When `parse_math` is true,
/// pulldown-cmark math extensions are enabled and the KaTeX/MathJax-style span
/// classes survive sanitization.
pub fn markdown_to_html(body: &str, parse_math: bool) -> String {
    let mut builder = ammonia::Builder::default();
    builder
        .url_schemes(
            ALLOWED_SCHEMES
                .iter()
                .map(|scheme| scheme.trim_end_matches(':'))
                .collect::<HashSet<_>>(),
        )
        .attribute_filter(restrict_anchor_href);
    let mut options = Options::empty();
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    if parse_math {
        options.insert(Options::ENABLE_MATH);
        builder.add_allowed_classes("span", &["math", "math-inline", "math-display"]);
    }

    let parser = Parser::new_ext(body, options).map(restrict_link_target);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    builder.clean(&html_output).to_string()
}

/// Swap the destination of a link start event for the placeholder when unsafe.
fn restrict_link_target(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => {
            let dest_url = if is_safe_href(&dest_url) {
                dest_url
            } else {
                tracing::debug!(dest = &*dest_url, "neutralized markdown link");
                CowStr::Borrowed(PLACEHOLDER_HREF)
            };
            Event::Start(Tag::Link {
                link_type,
                dest_url,
                title,
                id,
            })
        }
        other => other,
    }
}

/// Route raw HTML anchor targets through the same sanitizer as Markdown links.
fn restrict_anchor_href<'u>(
    element: &str,
    attribute: &str,
    value: &'u str,
) -> Option<Cow<'u, str>> {
    if element == "a" && attribute == "href" {
        Some(sanitize_href(value))
    } else {
        Some(Cow::Borrowed(value))
    }
}
