// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Shared helper utilities reused by rendering and the CLI.

pub mod safe_href;

/// Decide whether a link target may be rendered unchanged.
pub use safe_href::is_safe_href;
/// Replace link targets with disallowed schemes by a neutral placeholder.
pub use safe_href::sanitize_href;
