//! Test fixture loader for Tome catalog/profile datasets.
//!
//! Each dataset is a directory holding `items.json` and `profiles.json`.
//! Available datasets:
//!
//! - `bookstore`: twelve books across five genres, eight profiles including a
//!   cold-start profile (Grace, id 7) and an isolated reader (Frank, id 6).
//! - `minimal`: three books and two overlapping profiles.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

use tome_core::models::{Item, Profile};

/// Root directory of the test-fixtures crate.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    if path.ends_with("test-fixtures") {
        return path;
    }
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// A catalog plus its profiles, in file order.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub items: Vec<Item>,
    pub profiles: Vec<Profile>,
}

impl Dataset {
    pub fn item(&self, id: u64) -> &Item {
        self.items
            .iter()
            .find(|i| i.id == id)
            .unwrap_or_else(|| panic!("fixture item {id} missing"))
    }

    pub fn profile(&self, id: u64) -> &Profile {
        self.profiles
            .iter()
            .find(|p| p.id == id)
            .unwrap_or_else(|| panic!("fixture profile {id} missing"))
    }
}

/// Load the dataset stored under `name/`.
pub fn load_dataset(name: &str) -> Dataset {
    Dataset {
        items: load_fixture(&format!("{name}/items.json")),
        profiles: load_fixture(&format!("{name}/profiles.json")),
    }
}

/// The twelve-book bookstore dataset.
pub fn bookstore() -> Dataset {
    load_dataset("bookstore")
}

/// The three-book, two-profile dataset.
pub fn minimal() -> Dataset {
    load_dataset("minimal")
}
