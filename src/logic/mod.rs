// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Rendering logic kept free of CLI concerns.

pub mod markdown;
