// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: pure data types shared between rendering and the CLI.

pub mod api_response;
pub mod folder;

pub use api_response::{ApiErrorDetail, ApiResponse};
pub use folder::{Folder, UNFILED_FOLDER};
