use std::collections::BTreeMap;

/// Column names that must all be present in an uploaded CSV, in the order
/// they are checked. Extra columns are ignored.
pub const REQUIRED_HEADERS: [&str; 7] = [
    "id",
    "draw",
    "equipament",
    "sku",
    "description",
    "qte",
    "supplier",
];

/// One inventory line item parsed from CSV.
///
/// Field values are kept verbatim as they appeared in the file; in
/// particular `qte` stays textual and is only interpreted numerically via
/// [`Record::quantity`] and [`Record::copy_count`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    pub id: String,
    pub draw: String,
    pub equipament: String,
    pub sku: String,
    pub description: String,
    pub qte: String,
    pub supplier: String,
}

impl Record {
    /// Build a record from a header-keyed row, defaulting absent cells to "".
    pub fn from_cells(cells: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| cells.get(key).cloned().unwrap_or_default();
        Self {
            id: get("id"),
            draw: get("draw"),
            equipament: get("equipament"),
            sku: get("sku"),
            description: get("description"),
            qte: get("qte"),
            supplier: get("supplier"),
        }
    }

    /// All field values in declared column order, for whole-record search.
    pub fn field_values(&self) -> [&str; 7] {
        [
            &self.id,
            &self.draw,
            &self.equipament,
            &self.sku,
            &self.description,
            &self.qte,
            &self.supplier,
        ]
    }

    /// Description clipped to 30 characters for table cells; the full text
    /// still goes on the printed label.
    pub fn short_description(&self) -> String {
        self.description.chars().take(30).collect()
    }

    /// Numeric reading of `qte`, or `None` when it does not parse.
    pub fn quantity(&self) -> Option<f64> {
        self.qte.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }

    /// How many printable copies this record contributes.
    ///
    /// Non-numeric and non-positive quantities contribute zero copies;
    /// fractional quantities are floored.
    pub fn copy_count(&self) -> usize {
        match self.quantity() {
            Some(value) if value > 0.0 => value.floor() as usize,
            _ => 0,
        }
    }
}

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Danger,
}
