//! # Configuration
//!
//! Realty configuration is managed by [`confique`], which handles layered
//! loading from TOML files, environment variables, and compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `REALTY_STORAGE_KEY`, `REALTY_DATA_DIR`, `REALTY_BASE_URL`.
//! 2. **Explicit file**: the path given with `--config`.
//! 3. **User config**: `realty.toml` in the OS config directory (via `directories`).
//! 4. **Compiled defaults**: built-in fallbacks via `#[config(default = ...)]`.
//!
//! Missing files are skipped.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `storage_key` | `products` | Name of the storage slot |
//! | `data_dir` | OS data dir | Directory holding the slot files |
//! | `on_malformed` | `fail` | `fail` or `empty` for unreadable slot data |
//! | `duplicate_ids` | `reject` | `reject` or `allow` on insert |
//! | `zero_bound_is_unset` | `true` | Treat a price bound of 0 as "no bound" |
//! | `base_url` | unset | Site root used by `realty sitemap` |
//! | `currency` | `USD` | `priceCurrency` in JSON-LD output |

use crate::error::Result;
use crate::store::{DuplicateIdPolicy, MalformedPolicy, StoreOptions, DEFAULT_STORAGE_KEY};
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "realty.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RealtyConfig {
    /// Name of the storage slot holding the catalog.
    #[config(default = "products", env = "REALTY_STORAGE_KEY")]
    pub storage_key: String,

    /// Directory for slot files. When absent the OS data directory is used.
    #[config(env = "REALTY_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// `fail` propagates a parse error, `empty` logs and reads nothing.
    #[config(default = "fail")]
    pub on_malformed: MalformedPolicy,

    /// `reject` refuses to insert an id that is already stored.
    #[config(default = "reject")]
    pub duplicate_ids: DuplicateIdPolicy,

    /// Price bounds of exactly 0 mean "no bound" when filtering.
    #[config(default = true)]
    pub zero_bound_is_unset: bool,

    /// Site root for sitemap URLs, e.g. `https://homes.example`.
    #[config(env = "REALTY_BASE_URL")]
    pub base_url: Option<String>,

    #[config(default = "USD")]
    pub currency: String,
}

impl Default for RealtyConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            data_dir: None,
            on_malformed: MalformedPolicy::Fail,
            duplicate_ids: DuplicateIdPolicy::Reject,
            zero_bound_is_unset: true,
            base_url: None,
            currency: "USD".to_string(),
        }
    }
}

impl RealtyConfig {
    /// Loads env, then each existing file in `files` (earlier wins), then defaults.
    pub fn load<P: AsRef<Path>>(files: &[P]) -> Result<Self> {
        let mut builder = Self::builder().env();
        for file in files {
            builder = builder.file(file.as_ref());
        }
        Ok(builder.load()?)
    }

    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            on_malformed: self.on_malformed,
            duplicate_ids: self.duplicate_ids,
        }
    }

    /// `key = value` lines for display.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let unset = || "(unset)".to_string();
        vec![
            ("storage_key", self.storage_key.clone()),
            (
                "data_dir",
                self.data_dir
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(unset),
            ),
            ("on_malformed", policy_name(&self.on_malformed)),
            ("duplicate_ids", policy_name(&self.duplicate_ids)),
            ("zero_bound_is_unset", self.zero_bound_is_unset.to_string()),
            ("base_url", self.base_url.clone().unwrap_or_else(unset)),
            ("currency", self.currency.clone()),
        ]
    }
}

fn policy_name<T: Serialize>(policy: &T) -> String {
    serde_json::to_value(policy)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default()
}
