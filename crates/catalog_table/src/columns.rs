use catalog_host::{CatalogField, CatalogRecord};

/// Turns a snake_case field key into a column header: `"place_of_origin"` → `"Place Of Origin"`.
pub fn header_for_key(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogColumn {
    pub field: CatalogField,
    pub header: String,
}

pub fn catalog_columns() -> Vec<CatalogColumn> {
    CatalogField::ALL
        .iter()
        .map(|&field| CatalogColumn {
            field,
            header: header_for_key(field.key()),
        })
        .collect()
}

/// Display text for each column of `record`, in column order.
pub fn row_cells(record: &CatalogRecord) -> Vec<String> {
    CatalogField::ALL
        .iter()
        .map(|&field| record.display_value(field))
        .collect()
}
