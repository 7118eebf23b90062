//! Sidebar configuration and document identifier collection.
//!
//! A sidebar maps top-level section labels to trees of items. Items are either
//! bare identifier strings or objects: `category` nodes with nested `items` and
//! an optional linked doc, `doc` nodes with an `id`, or any other object that
//! carries an `id`.

use crate::docs_gen::errors::{DocsGenError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeSet;
use std::path::Path;

/// One node of a sidebar tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawSidebarItem")]
pub enum SidebarItem {
    /// A bare document identifier.
    Id(String),
    /// A category with an optional linked doc and nested items.
    Category { link: Option<String>, items: Vec<SidebarItem> },
    /// An explicit `doc` node.
    Doc { id: String },
    /// Any other node. Contributes its `id` when it has one.
    Other { id: Option<String> },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSidebarItem {
    Id(String),
    Node(RawSidebarNode),
    Unknown(serde::de::IgnoredAny),
}

#[derive(Deserialize)]
struct RawSidebarNode {
    #[serde(rename = "type")]
    kind: Option<String>,
    id: Option<Value>,
    link: Option<RawSidebarLink>,
    #[serde(default)]
    items: Vec<SidebarItem>,
}

#[derive(Deserialize)]
struct RawSidebarLink {
    #[serde(rename = "type")]
    kind: Option<String>,
    id: Option<Value>,
}

/// String form of a scalar `id`. Numbers and booleans are accepted; null, arrays and objects are not.
fn scalar_id(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(id) => Some(id),
        Value::Number(id) => Some(id.to_string()),
        Value::Bool(id) => Some(id.to_string()),
        _ => None,
    }
}

impl From<RawSidebarItem> for SidebarItem {
    fn from(raw: RawSidebarItem) -> Self {
        match raw {
            RawSidebarItem::Id(id) => SidebarItem::Id(id),
            RawSidebarItem::Unknown(_) => {
                tracing::debug!("[SKIP] Sidebar item is neither an identifier nor an object, ignoring it");
                SidebarItem::Other { id: None }
            }
            RawSidebarItem::Node(node) => match (node.kind.as_deref(), scalar_id(node.id)) {
                (Some("category"), _) => SidebarItem::Category {
                    link: node.link.and_then(|l| match l.kind.as_deref() {
                        Some("doc") => scalar_id(l.id),
                        _ => None,
                    }),
                    items: node.items,
                },
                (Some("doc"), Some(id)) => SidebarItem::Doc { id },
                (_, id) => SidebarItem::Other { id },
            },
        }
    }
}

impl SidebarItem {
    /// Adds every document identifier reachable from this node to `acc`.
    pub fn visit(&self, acc: &mut BTreeSet<String>) {
        match self {
            SidebarItem::Id(id) | SidebarItem::Doc { id } | SidebarItem::Other { id: Some(id) } => {
                acc.insert(id.clone());
            }
            SidebarItem::Category { link, items } => {
                if let Some(id) = link {
                    acc.insert(id.clone());
                }
                for item in items {
                    item.visit(acc);
                }
            }
            SidebarItem::Other { id: None } => {}
        }
    }
}

/// Collects the unique document identifiers referenced by a list of sidebar items.
pub fn collect_doc_ids(items: &[SidebarItem]) -> BTreeSet<String> {
    let mut acc = BTreeSet::new();
    for item in items {
        item.visit(&mut acc);
    }
    acc
}

/// A single sidebar: labeled sections in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sidebar {
    pub sections: Vec<SidebarSection>,
}

/// A top-level sidebar section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarSection {
    pub label: String,
    pub items: Vec<SidebarItem>,
}

impl SidebarSection {
    /// The unique identifiers referenced anywhere in this section.
    pub fn doc_ids(&self) -> BTreeSet<String> {
        collect_doc_ids(&self.items)
    }
}

impl Sidebar {
    /// Reads the sidebar named `key` from a JSON sidebar configuration file.
    pub async fn load(path: &Path, key: &str) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        Self::from_json_str(&content, key)
    }

    /// Parses the sidebar named `key` out of a JSON sidebar configuration.
    ///
    /// Sections whose value is not a list of items are skipped with a warning.
    pub fn from_json_str(content: &str, key: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(content)?;
        let sidebar = root.get(key).ok_or_else(|| DocsGenError::MissingSidebar(key.to_string()))?;
        let labeled = sidebar
            .as_object()
            .ok_or_else(|| DocsGenError::InvalidSidebar(format!("sidebar '{key}' is not a mapping of labels to items")))?;

        let mut sections = Vec::with_capacity(labeled.len());
        for (label, items) in labeled {
            match serde_json::from_value::<Vec<SidebarItem>>(items.clone()) {
                Ok(items) => sections.push(SidebarSection {
                    label: label.clone(),
                    items,
                }),
                Err(e) => tracing::warn!("[SKIP] Sidebar section '{}' is not a list of items: {}", label, e),
            }
        }
        Ok(Self { sections })
    }

    /// Every unique identifier across all sections.
    pub fn all_doc_ids(&self) -> BTreeSet<String> {
        let mut acc = BTreeSet::new();
        for section in &self.sections {
            for item in &section.items {
                item.visit(&mut acc);
            }
        }
        acc
    }
}
