use serde::{Deserialize, Serialize};

/// A parsed TIV table: a label column plus one value column per year.
///
/// Depending on the summarize mode the labels are entity codes and the
/// columns years, or the other way around. The table is kept positional
/// rather than decoded into typed rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TivTable {
    /// Column headers, excluding the leading label column.
    pub columns: Vec<String>,
    /// Rows in export order.
    pub rows: Vec<TivRow>,
}

/// One row of a TIV table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TivRow {
    pub label: String,
    /// One value per column, `None` where the export cell is empty.
    pub values: Vec<Option<f64>>,
}

impl TivTable {
    /// Looks up a value by row label and column header.
    pub fn value(&self, label: &str, column: &str) -> Option<f64> {
        let col = self.columns.iter().position(|c| c == column)?;
        let row = self.rows.iter().find(|r| r.label == label)?;
        row.values.get(col).copied().flatten()
    }
}
