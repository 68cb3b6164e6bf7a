//! Catalog record and pagination models shared by the fetcher and the table runtime.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One artwork entry projected down to the fields the table displays.
///
/// Every display field is optional because the upstream catalog publishes `null` freely.
pub struct CatalogRecord {
    /// Stable upstream identifier used as the table row key.
    pub id: u64,
    /// Artwork title.
    #[serde(default)]
    pub title: Option<String>,
    /// Free-form place of origin.
    #[serde(default)]
    pub place_of_origin: Option<String>,
    /// Artist display string (name, nationality, life dates).
    #[serde(default)]
    pub artist_display: Option<String>,
    /// Inscription text.
    #[serde(default)]
    pub inscriptions: Option<String>,
    /// Earliest year of creation.
    #[serde(default)]
    pub date_start: Option<i64>,
    /// Latest year of creation.
    #[serde(default)]
    pub date_end: Option<i64>,
}

impl CatalogRecord {
    /// Creates a record with only an id; display fields start empty.
    pub fn new(id: u64) -> Self {
        Self {
            id,
            title: None,
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }

    /// Returns the cell text for one display field, or an empty string for `null`.
    pub fn display_value(&self, field: CatalogField) -> String {
        match field {
            CatalogField::Title => self.title.clone().unwrap_or_default(),
            CatalogField::PlaceOfOrigin => self.place_of_origin.clone().unwrap_or_default(),
            CatalogField::ArtistDisplay => self.artist_display.clone().unwrap_or_default(),
            CatalogField::Inscriptions => self.inscriptions.clone().unwrap_or_default(),
            CatalogField::DateStart => self.date_start.map(|y| y.to_string()).unwrap_or_default(),
            CatalogField::DateEnd => self.date_end.map(|y| y.to_string()).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Display fields of a [`CatalogRecord`] in table column order.
pub enum CatalogField {
    /// `title`
    Title,
    /// `place_of_origin`
    PlaceOfOrigin,
    /// `artist_display`
    ArtistDisplay,
    /// `inscriptions`
    Inscriptions,
    /// `date_start`
    DateStart,
    /// `date_end`
    DateEnd,
}

impl CatalogField {
    /// All display fields in column order.
    pub const ALL: [CatalogField; 6] = [
        Self::Title,
        Self::PlaceOfOrigin,
        Self::ArtistDisplay,
        Self::Inscriptions,
        Self::DateStart,
        Self::DateEnd,
    ];

    /// Returns the upstream JSON key for the field.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::PlaceOfOrigin => "place_of_origin",
            Self::ArtistDisplay => "artist_display",
            Self::Inscriptions => "inscriptions",
            Self::DateStart => "date_start",
            Self::DateEnd => "date_end",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Pagination block exactly as supplied by the upstream response.
///
/// Values are trusted; `offset == limit * (current_page - 1)` holds for a well-behaved upstream
/// but is never recomputed here.
pub struct PageMetadata {
    /// Total record count across all pages.
    pub total: u64,
    /// Page size used for this page.
    pub limit: u32,
    /// Zero-based offset of the first record in this page.
    pub offset: u64,
    /// Total page count.
    pub total_pages: u32,
    /// One-based page number.
    pub current_page: u32,
    /// Link to the previous page, when upstream supplies one.
    #[serde(default)]
    pub prev_url: Option<String>,
    /// Link to the next page, when upstream supplies one.
    #[serde(default)]
    pub next_url: Option<String>,
}

impl PageMetadata {
    /// Metadata used on the failure path: every counter zeroed and no links.
    pub fn zeroed() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// One fetched page: projected records plus upstream pagination.
pub struct CatalogPage {
    /// Records in upstream order.
    pub records: Vec<CatalogRecord>,
    /// Pagination metadata for this page.
    pub pagination: PageMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_value_renders_null_fields_as_empty_text() {
        let mut record = CatalogRecord::new(7);
        record.title = Some("Nocturne".to_string());
        record.date_start = Some(1890);

        assert_eq!(record.display_value(CatalogField::Title), "Nocturne");
        assert_eq!(record.display_value(CatalogField::DateStart), "1890");
        assert_eq!(record.display_value(CatalogField::DateEnd), "");
        assert_eq!(record.display_value(CatalogField::Inscriptions), "");
    }

    #[test]
    fn field_keys_follow_column_order() {
        let keys: Vec<_> = CatalogField::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(
            keys,
            vec![
                "title",
                "place_of_origin",
                "artist_display",
                "inscriptions",
                "date_start",
                "date_end"
            ]
        );
    }
}
