// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! UI-layer helpers for a Markdown notes app.
//!
//! - [`utils::sanitize_href`] keeps link targets to `http:`, `https:` and `mailto:`.
//! - [`logic::markdown::markdown_to_html`] renders notes with those targets enforced.
//! - [`models::UNFILED_FOLDER`] is the virtual "no folder" entry.
//! - [`models::ApiResponse`] is the envelope returned by the notes backend.

pub mod app;
pub mod config;
pub mod logging;
pub mod logic;
pub mod models;
pub mod utils;
