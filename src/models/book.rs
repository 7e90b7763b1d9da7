// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Book catalog domain model and JSON catalog parsing (UI-agnostic).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use serde_json::Value;

use crate::models::price::Price;
use crate::utils::{contains_ignore_case, resolve_relative};

/// A single catalog entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub cost: Price,
    /// Cover image on disk; `None` renders the placeholder cover.
    pub image_path: Option<PathBuf>,
}

impl Book {
    pub fn new(title: &str, author: &str, cost: Price, image_path: Option<PathBuf>) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            cost,
            image_path,
        }
    }
}

/// Ordered list of books shown on the catalog tab.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// The catalog shipped with the application. Cover paths are relative to the working directory.
    pub fn builtin() -> Self {
        let entry = |title: &str, author: &str, dollars: u64, image: &str| {
            Book::new(
                title,
                author,
                Price::from_cents(dollars * 100),
                Some(PathBuf::from(image)),
            )
        };
        Self::new(vec![
            entry("1984", "George", 10, "book1.jpg"),
            entry("The catcher in the rye", "salinger", 15, "book2.jpg"),
            entry("castby", "leonardo", 20, "book3.jpg"),
            entry("harry potter", "rowling", 25, "book4.jpg"),
            entry("to kill a mockingbird", "harper lee", 30, "book5.jpg"),
        ])
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn get(&self, index: usize) -> Option<&Book> {
        self.books.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// First book (in catalog order) whose title contains `query`, ignoring case.
    ///
    /// An empty query matches the first book.
    pub fn find_first_by_title(&self, query: &str) -> Option<(usize, &Book)> {
        self.books
            .iter()
            .enumerate()
            .find(|(_, book)| contains_ignore_case(&book.title, query))
    }
}

#[derive(Debug, Deserialize)]
struct CatalogEnvelope {
    books: Vec<BookRaw>,
}

#[derive(Debug, Deserialize)]
struct BookRaw {
    title: String,
    #[serde(default)]
    author: String,
    cost: Value,
    #[serde(default)]
    image_path: Option<String>,
}

/// Parse a JSON catalog of the form `{"books": [{"title", "author", "cost", "image_path"}]}`.
///
/// `cost` may be a string such as `"$10"` or a plain JSON number. Relative
/// `image_path` values are resolved against `base_dir`; blank paths mean "no cover".
///
/// # Errors
///
/// Fails when the JSON is malformed, a title is blank, or a cost cannot be parsed.
pub fn parse_catalog(json: &str, base_dir: &Path) -> Result<Catalog> {
    let env: CatalogEnvelope =
        serde_json::from_str(json).context("Failed to parse catalog JSON")?;

    let mut books = Vec::with_capacity(env.books.len());
    for (index, raw) in env.books.into_iter().enumerate() {
        let title = raw.title.trim();
        if title.is_empty() {
            bail!("Catalog entry {} has an empty title", index + 1);
        }
        let cost = cost_from_value(&raw.cost)
            .with_context(|| format!("Catalog entry {} ({title}) has an invalid cost", index + 1))?;
        let image_path = raw
            .image_path
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| resolve_relative(base_dir, Path::new(p)));

        books.push(Book::new(title, raw.author.trim(), cost, image_path));
    }

    Ok(Catalog::new(books))
}

fn cost_from_value(value: &Value) -> Result<Price> {
    match value {
        Value::String(s) => Price::parse(s),
        Value::Number(n) => Price::parse(&n.to_string()),
        other => Err(anyhow!("Expected a string or number, found {other}")),
    }
}
