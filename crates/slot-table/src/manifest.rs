//! Manifest of the namespaces a deployment uses, and the table built from it.
//!
//! ```json
//! {
//!   "namespaces": [
//!     { "id": "erc7201:acme.Counter", "fields": [{ "name": "count", "type": "uint256" }] }
//!   ]
//! }
//! ```

use anyhow::{anyhow, Result};
use erc7201_slots::{FieldType, LayoutDescriptor, NamespaceRegistry, SlotHasher};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct Manifest {
    pub namespaces: Vec<NamespaceSpec>,
}

#[derive(Debug, Deserialize)]
pub struct NamespaceSpec {
    pub id: String,

    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

#[derive(Debug, Deserialize)]
pub struct FieldSpec {
    pub name: String,

    /// Solidity type name, eg. `uint128` or `address`
    #[serde(rename = "type")]
    pub field_type: String,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct TableRow {
    pub namespace: String,
    pub slot: String,
    pub words: usize,
    pub fields: Vec<String>,
}

impl Manifest {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl NamespaceSpec {
    pub fn layout(&self) -> Result<LayoutDescriptor> {
        let mut builder = LayoutDescriptor::builder();
        for field in &self.fields {
            let field_type: FieldType = field
                .field_type
                .parse()
                .map_err(|e| anyhow!("{}: field {}: {:?}", self.id, field.name, e))?;
            builder = builder.field(field.name.as_str(), field_type);
        }

        builder
            .build()
            .map_err(|e| anyhow!("{}: invalid layout: {:?}", self.id, e))
    }
}

/// Register every namespace in manifest order. Stops at the first collision.
pub fn build_registry<H: SlotHasher>(manifest: &Manifest) -> Result<NamespaceRegistry<H>> {
    let mut registry = NamespaceRegistry::<H>::new();

    for namespace in &manifest.namespaces {
        let layout = namespace.layout()?;
        registry
            .register(namespace.id.as_str(), layout)
            .map_err(|e| anyhow!("{}: {:?}", namespace.id, e))?;
    }

    Ok(registry)
}

pub fn table<H: SlotHasher>(registry: &NamespaceRegistry<H>) -> Vec<TableRow> {
    registry
        .all()
        .map(|entry| TableRow {
            namespace: entry.namespace.to_string(),
            slot: entry.slot.to_string(),
            words: entry.layout.word_count(),
            fields: entry.layout.describe(),
        })
        .collect()
}
