//! Icon section of a browser-extension `manifest.json`
//!
//! Written next to the generated PNGs so it can be pasted into the
//! extension manifest as-is.

use anyhow::{Context, Result};
use serde::{Serialize, Serializer};
use std::path::Path;

/// Root of the `icons.json` fragment
#[derive(Serialize, Debug, Clone)]
pub struct ManifestIcons {
    /// Icons shown on the extensions page and in the store
    pub icons: IconMap,

    /// Toolbar button icons
    pub action: Action,
}

#[derive(Serialize, Debug, Clone)]
pub struct Action {
    pub default_icon: IconMap,
}

/// Size to path, serialized as a JSON object ordered by ascending size
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconMap(Vec<(u32, String)>);

impl IconMap {
    pub fn insert(&mut self, size: u32, path: String) {
        match self.0.binary_search_by_key(&size, |(s, _)| *s) {
            Ok(pos) => self.0[pos].1 = path,
            Err(pos) => self.0.insert(pos, (size, path)),
        }
    }
}

impl Serialize for IconMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(size, path)| (size.to_string(), path)))
    }
}

impl ManifestIcons {
    /// Build the fragment for icons stored under `dir_name`.
    ///
    /// Paths use forward slashes regardless of platform, as the manifest
    /// format requires.
    pub fn new(dir_name: &str, sizes: &[u32]) -> Self {
        let mut icons = IconMap::default();
        for &size in sizes {
            icons.insert(size, format!("{dir_name}/icon{size}.png"));
        }

        ManifestIcons {
            action: Action {
                default_icon: icons.clone(),
            },
            icons,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize icons.json")
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?).context("Failed to write icons.json file")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_map_orders_numerically() {
        let manifest = ManifestIcons::new("images", &[128, 48, 16]);
        let json = manifest.to_json().unwrap();

        let at = |needle: &str| json.find(needle).unwrap();
        assert!(at("\"16\"") < at("\"48\""));
        assert!(at("\"48\"") < at("\"128\""));
    }

    #[test]
    fn test_manifest_structure() {
        let manifest = ManifestIcons::new("images", &[128, 48, 16]);
        let value: serde_json::Value = serde_json::from_str(&manifest.to_json().unwrap()).unwrap();

        assert_eq!(value["icons"]["16"], "images/icon16.png");
        assert_eq!(value["icons"]["48"], "images/icon48.png");
        assert_eq!(value["icons"]["128"], "images/icon128.png");
        assert_eq!(value["action"]["default_icon"], value["icons"]);
    }

    #[test]
    fn test_duplicate_sizes_collapse() {
        let mut icons = IconMap::default();
        icons.insert(32, "a/icon32.png".to_string());
        icons.insert(16, "a/icon16.png".to_string());
        icons.insert(16, "b/icon16.png".to_string());
        assert_eq!(
            icons,
            IconMap(vec![
                (16, "b/icon16.png".to_string()),
                (32, "a/icon32.png".to_string()),
            ])
        );
    }
}
