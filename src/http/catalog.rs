//! JSON listing of every known status, for documentation and validation tooling.

use crate::http::status::{registry, Entry};
use crate::http::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CatalogEntry {
    #[serde(flatten)]
    pub entry: &'static Entry,
    /// Another entry declared earlier owns this code.
    pub shadowed: bool,
}

/// Every entry in declaration order.
pub fn entries() -> Vec<CatalogEntry> {
    let registry = registry();
    let shadowed: Vec<&'static Entry> = registry.shadowed().collect();
    registry
        .iter()
        .map(|entry| CatalogEntry {
            entry,
            shadowed: shadowed.iter().any(|s| std::ptr::eq(*s, entry)),
        })
        .collect()
}

pub fn to_json(pretty: bool) -> Result<String> {
    let entries = entries();
    let json = match pretty {
        true => serde_json::to_string_pretty(&entries)?,
        false => serde_json::to_string(&entries)?,
    };
    Ok(json)
}
