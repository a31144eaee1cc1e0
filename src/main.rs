// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

fn main() -> anyhow::Result<()> {
    notefold::app::run()
}
