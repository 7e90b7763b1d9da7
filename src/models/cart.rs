// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Shopping cart domain model (UI-agnostic).

use crate::models::book::Book;
use crate::models::price::Price;

/// Identity of a single cart row; unique for the lifetime of a [`Cart`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CartItemId(u64);

/// Snapshot of a book taken when it was added.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartItem {
    pub id: CartItemId,
    pub title: String,
    pub author: String,
    pub cost: Price,
}

/// Insertion-ordered cart. The same book may be added any number of times.
#[derive(Clone, Debug, Default)]
pub struct Cart {
    items: Vec<CartItem>,
    next_id: u64,
}

impl Cart {
    /// Append a copy of `book` and return the id of the new row.
    pub fn add(&mut self, book: &Book) -> CartItemId {
        let id = CartItemId(self.next_id);
        self.next_id += 1;
        self.items.push(CartItem {
            id,
            title: book.title.clone(),
            author: book.author.clone(),
            cost: book.cost,
        });
        id
    }

    /// Remove exactly the row with `id`, keeping the order of the others.
    pub fn remove(&mut self, id: CartItemId) -> Option<CartItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total(&self) -> Price {
        self.items.iter().map(|item| item.cost).sum()
    }
}
