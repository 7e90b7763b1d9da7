// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Side-effectful helpers run from background commands: catalog files and cover images.

pub mod catalog_loader;
pub mod covers;
