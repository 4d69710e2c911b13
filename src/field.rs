//! Column lookup that is forgiving about how headers are spelled.
//!
//! Headers and aliases are compared after [`normalize_key()`], so `Supplier Name`, `supplier_name`
//! and `SUPPLIER-NAME` all refer to the same column.

use std::collections::HashMap;

/// One data line of a table, keyed by the header of each column.
///
/// Columns keep the order of the header line. Inserting a column name that is already present
/// replaces its value but keeps its original position.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<(String, String)>,
}

impl Row {
    /// Pair `headers` with the cells of `record`, using an empty value for cells the record lacks.
    /// Cells beyond the last header are dropped.
    pub fn from_record(headers: &csv::StringRecord, record: &csv::StringRecord) -> Self {
        headers
            .iter()
            .enumerate()
            .map(|(idx, header)| (header, record.get(idx).unwrap_or_default()))
            .collect()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let column = column.into();
        let value = value.into();
        match self.cells.iter_mut().find(|(name, _)| *name == column) {
            Some(cell) => cell.1 = value,
            None => self.cells.push((column, value)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut row = Row::default();
        for (column, value) in iter {
            row.insert(column, value);
        }
        row
    }
}

/// Lower-case `name` and drop everything that isn't a letter or a digit.
pub fn normalize_key(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// The values of a [`Row`] indexed by normalized column name, with values trimmed.
///
/// If two columns normalize to the same key, the one further right wins.
#[derive(Debug, Default, Clone)]
pub struct Fields<'a> {
    by_key: HashMap<String, &'a str>,
}

impl<'a> Fields<'a> {
    pub fn new(row: &'a Row) -> Self {
        Fields {
            by_key: row
                .iter()
                .map(|(name, value)| (normalize_key(name), value.trim()))
                .collect(),
        }
    }

    /// Return the value of the first alias that names a non-empty column, trying `aliases` in order.
    pub fn pick(&self, aliases: &[impl AsRef<str>]) -> Option<&'a str> {
        aliases.iter().find_map(|alias| {
            self.by_key
                .get(&normalize_key(alias.as_ref()))
                .copied()
                .filter(|value| !value.is_empty())
        })
    }

    /// Like [`pick()`][Fields::pick()], but fall back to `default`.
    pub fn pick_or(&self, aliases: &[impl AsRef<str>], default: &str) -> String {
        self.pick(aliases).unwrap_or(default).to_owned()
    }
}

/// Resolve the value of the first of `aliases` present and non-empty in `row`, or `default`.
pub fn resolve(row: &Row, aliases: &[impl AsRef<str>], default: &str) -> String {
    if row.is_empty() {
        return default.to_owned();
    }
    Fields::new(row).pick_or(aliases, default)
}
