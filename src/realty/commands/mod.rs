//! # Command Layer
//!
//! This module contains the **core business logic** of realty. Each command lives in its
//! own submodule and implements plain Rust functions over a [`Catalog`](crate::catalog::Catalog).
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Validate input the store does not check (non-empty name, sane price)
//! - Go through the catalog binding for every mutation, so the snapshot stays in sync
//! - Return structured [`CmdResult`] with products and messages
//! - Are completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O**: No stdout, stderr, or terminal concerns
//! - **Argument parsing**: That's the CLI layer's job
//! - **Exit codes**: Return `Result`, let the caller decide
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests use
//! `MemBackend` and check `CmdResult` contents plus the persisted collection.
//!
//! ## Command Modules
//!
//! - [`add`]: Create a listing
//! - [`list`]: List listings, optionally filtered
//! - [`view`]: Show one listing
//! - [`update`]: Edit fields of a listing
//! - [`delete`]: Remove listings
//! - [`categories`]: Distinct categories
//! - [`schema`]: JSON-LD for one listing
//! - [`sitemap`]: Sitemap XML for the catalog
//! - [`robots`]: robots.txt pointing at the sitemap
//! - [`config`]: Show the effective configuration
//! - [`helpers`]: Shared lookups

use crate::model::Product;
use serde::Serialize;

pub mod add;
pub mod categories;
pub mod config;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod robots;
pub mod schema;
pub mod sitemap;
pub mod update;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Products created, changed, or removed by the command.
    pub affected_products: Vec<Product>,
    /// Products to display.
    pub listed_products: Vec<Product>,
    pub categories: Vec<String>,
    /// A rendered document (JSON-LD, sitemap XML, robots.txt, config listing).
    pub document: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_products(mut self, products: Vec<Product>) -> Self {
        self.affected_products = products;
        self
    }

    pub fn with_listed_products(mut self, products: Vec<Product>) -> Self {
        self.listed_products = products;
        self
    }

    pub fn with_document(mut self, document: String) -> Self {
        self.document = Some(document);
        self
    }
}
