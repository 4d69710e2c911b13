//! The column names accepted for each field, most preferred first.
//!
//! The defaults can be partially overridden with a RON file like this:
//!
//! ```text
//! (
//!     invoice: (
//!         amount: ["Gross", "amount"],
//!     ),
//! )
//! ```

use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to open alias file for reading")]
    Open(#[from] std::io::Error),
    #[error("Could not decode the alias file")]
    Decode(#[from] ron::de::SpannedError),
}

#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Aliases {
    pub supplier: SupplierAliases,
    pub invoice: InvoiceAliases,
}

/// Columns read from the supplier table.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SupplierAliases {
    pub name: Vec<String>,
    pub address: Vec<String>,
    pub phone: Vec<String>,
    pub default_category: Vec<String>,
    pub default_sub_category: Vec<String>,
}

/// Columns read from the invoice table.
///
/// Note that `supplier_name` prefers other columns over `name`, unlike [`SupplierAliases::name`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct InvoiceAliases {
    pub supplier_name: Vec<String>,
    pub date: Vec<String>,
    pub amount: Vec<String>,
    pub category: Vec<String>,
    pub sub_category: Vec<String>,
    pub description: Vec<String>,
}

impl Default for SupplierAliases {
    fn default() -> Self {
        SupplierAliases {
            name: list(&["name", "supplier", "supplier_name", "vendor", "company"]),
            address: list(&["address", "supplier_address"]),
            phone: list(&["phone", "supplier_phone", "mobile"]),
            default_category: list(&["default_category", "category"]),
            default_sub_category: list(&["default_sub_category", "subcategory", "sub_category"]),
        }
    }
}

impl Default for InvoiceAliases {
    fn default() -> Self {
        InvoiceAliases {
            supplier_name: list(&["supplier", "supplier_name", "vendor", "name", "company"]),
            date: list(&["date", "invoice_date", "transaction_date"]),
            amount: list(&["amount", "total", "invoice_total", "value"]),
            category: list(&["category", "expense_category"]),
            sub_category: list(&["subcategory", "sub_category", "expense_subcategory"]),
            description: list(&["description", "memo", "notes", "item"]),
        }
    }
}

impl Aliases {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        Ok(ron::de::from_reader(std::fs::File::open(path)?)?)
    }
}

fn list(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}
