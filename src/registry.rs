//! Deduplication of suppliers by name, handing out identifiers in order of first appearance.

use crate::aliases::SupplierAliases;
use crate::field::{Fields, Row};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: usize,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub default_category: String,
    pub default_sub_category: String,
}

/// All suppliers seen during one conversion.
///
/// Suppliers are identified by their trimmed, lower-cased name. Once registered, a supplier
/// is never changed.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    aliases: SupplierAliases,
    suppliers: Vec<Supplier>,
    ids_by_name: HashMap<String, usize>,
}

impl Registry {
    pub fn new(aliases: SupplierAliases) -> Self {
        Registry {
            aliases,
            ..Default::default()
        }
    }

    /// Return the id of the supplier called `name`, registering it first if it wasn't seen yet.
    ///
    /// A new supplier takes its address, phone and default categories from `row`, or leaves them
    /// empty without one. Returns `None` if `name` is blank.
    pub fn ensure(&mut self, name: &str, row: Option<&Row>) -> Option<usize> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let key = name.to_lowercase();
        if let Some(id) = self.ids_by_name.get(&key) {
            return Some(*id);
        }

        let id = self.suppliers.len() + 1;
        let fields = row.map(Fields::new).unwrap_or_default();
        let aliases = &self.aliases;
        self.suppliers.push(Supplier {
            id,
            name: name.to_owned(),
            address: fields.pick_or(&aliases.address, ""),
            phone: fields.pick_or(&aliases.phone, ""),
            default_category: fields.pick_or(&aliases.default_category, ""),
            default_sub_category: fields.pick_or(&aliases.default_sub_category, ""),
        });
        self.ids_by_name.insert(key, id);
        log::debug!(
            "Registered supplier {id} '{name}' from {}",
            if row.is_some() {
                "supplier table"
            } else {
                "invoice"
            }
        );
        Some(id)
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    pub fn len(&self) -> usize {
        self.suppliers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suppliers.is_empty()
    }

    pub fn into_suppliers(self) -> Vec<Supplier> {
        self.suppliers
    }
}
