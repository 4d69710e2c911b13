use crate::aliases::Aliases;
use crate::registry::Supplier;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("Could not write the output document")]
    Json(#[from] serde_json::Error),
}

/// The category of an expense whose invoice row doesn't name one.
pub const DEFAULT_CATEGORY: &str = "Uncategorised";
/// The raw amount of an invoice row without an amount column.
pub const DEFAULT_AMOUNT: &str = "0";

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: usize,
    pub date: String,
    /// `None` only if the invoice row had no supplier name.
    pub supplier_id: Option<usize>,
    pub supplier_name: String,
    pub category: String,
    pub sub_category: String,
    pub amount: f64,
    pub description: String,
    /// Attachments aren't linked by this tool, so this is always `None`.
    pub invoice_file_id: Option<usize>,
}

/// The import document understood by the accounting application.
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Document {
    pub suppliers: Vec<Supplier>,
    pub expenses: Vec<Expense>,
    /// Always empty.
    pub files: Vec<serde_json::Value>,
}

#[derive(Debug, Default, Clone)]
pub struct Options {
    pub aliases: Aliases,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// The amount of suppliers written, from both tables.
    pub suppliers: usize,
    /// The amount of expenses written, one per invoice row.
    pub expenses: usize,
}

pub(crate) mod function {
    use crate::convert::{
        Document, Error, Expense, Options, Outcome, DEFAULT_AMOUNT, DEFAULT_CATEGORY,
    };
    use crate::field::{Fields, Row};
    use crate::registry::Registry;
    use crate::{parse_amount, Aliases};

    /// Read all rows of a CSV table with a header line.
    pub fn read_rows(csv: impl std::io::Read) -> Result<Vec<Row>, Error> {
        let mut csv = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv);
        let headers = csv.headers()?.clone();
        let mut rows = Vec::new();
        let mut record = csv::StringRecord::new();
        while csv.read_record(&mut record)? {
            rows.push(Row::from_record(&headers, &record));
        }
        Ok(rows)
    }

    /// Turn supplier and invoice rows into a [`Document`].
    ///
    /// All supplier rows are registered before the first invoice row is looked at, so suppliers
    /// that only appear on invoices are numbered after those of the supplier table.
    pub fn build(supplier_rows: &[Row], invoice_rows: &[Row], aliases: &Aliases) -> Document {
        let mut registry = Registry::new(aliases.supplier.clone());
        for row in supplier_rows {
            let name = Fields::new(row).pick_or(&aliases.supplier.name, "");
            registry.ensure(&name, Some(row));
        }

        let aliases = &aliases.invoice;
        let expenses = invoice_rows
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                let fields = Fields::new(row);
                let supplier_name = fields.pick_or(&aliases.supplier_name, "");
                let supplier_id = registry.ensure(&supplier_name, None);
                Expense {
                    id: idx + 1,
                    date: fields.pick_or(&aliases.date, ""),
                    supplier_id,
                    supplier_name,
                    category: fields.pick_or(&aliases.category, DEFAULT_CATEGORY),
                    sub_category: fields.pick_or(&aliases.sub_category, ""),
                    amount: parse_amount(&fields.pick_or(&aliases.amount, DEFAULT_AMOUNT)),
                    description: fields.pick_or(&aliases.description, ""),
                    invoice_file_id: None,
                }
            })
            .collect();

        Document {
            suppliers: registry.into_suppliers(),
            expenses,
            files: Vec::new(),
        }
    }

    /// Convert the `suppliers_csv` and `invoices_csv` tables into a pretty-printed JSON [`Document`]
    /// written to `out`.
    ///
    /// Both tables are parsed completely before anything is written.
    pub fn convert(
        suppliers_csv: impl std::io::Read,
        invoices_csv: impl std::io::Read,
        out: impl std::io::Write,
        Options { aliases }: Options,
    ) -> Result<Outcome, Error> {
        let supplier_rows = read_rows(suppliers_csv)?;
        log::debug!("Read {} supplier rows", supplier_rows.len());
        let invoice_rows = read_rows(invoices_csv)?;
        log::debug!("Read {} invoice rows", invoice_rows.len());

        let document = build(&supplier_rows, &invoice_rows, &aliases);
        serde_json::to_writer_pretty(out, &document)?;

        Ok(Outcome {
            suppliers: document.suppliers.len(),
            expenses: document.expenses.len(),
        })
    }
}
