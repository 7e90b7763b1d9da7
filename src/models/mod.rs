// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: catalog, cart, and price types shared between UI and logic.

pub mod book;
pub mod cart;
pub mod price;
