//! Response decoding for the `GET /artworks` endpoint.

use serde::Deserialize;

use crate::{CatalogPage, CatalogRecord, FetchError, PageMetadata};

#[derive(Deserialize)]
struct ArtworksResponse {
    data: Vec<CatalogRecord>,
    pagination: PageMetadata,
}

/// Decodes an `/artworks` response body into a [`CatalogPage`].
///
/// Records are projected to the seven table fields (every other upstream key is dropped) and the
/// pagination block is returned as supplied.
///
/// # Errors
///
/// Returns [`FetchError::Decode`] when the body is not JSON or lacks `data`/`pagination`.
pub fn decode_catalog_page(body: &str) -> Result<CatalogPage, FetchError> {
    let response: ArtworksResponse =
        serde_json::from_str(body).map_err(|err| FetchError::Decode {
            message: err.to_string(),
        })?;
    Ok(CatalogPage {
        records: response.data,
        pagination: response.pagination,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decode_projects_records_and_keeps_pagination_verbatim() {
        let body = json!({
            "pagination": {
                "total": 129884,
                "limit": 2,
                "offset": 2,
                "total_pages": 64942,
                "current_page": 2,
                "prev_url": "https://api.artic.edu/api/v1/artworks?page=1&limit=2",
                "next_url": "https://api.artic.edu/api/v1/artworks?page=3&limit=2"
            },
            "data": [
                {
                    "id": 27992,
                    "title": "A Sunday on La Grande Jatte",
                    "place_of_origin": "France",
                    "artist_display": "Georges Seurat\nFrench, 1859-1891",
                    "inscriptions": null,
                    "date_start": 1884,
                    "date_end": 1886,
                    "image_id": "2d484387",
                    "thumbnail": { "width": 3000 }
                },
                {
                    "id": 4,
                    "title": null,
                    "place_of_origin": null,
                    "artist_display": "Unknown",
                    "inscriptions": "signed",
                    "date_start": null,
                    "date_end": null
                }
            ],
            "info": { "license_text": "CC0" }
        })
        .to_string();

        let page = decode_catalog_page(&body).expect("decode");

        assert_eq!(page.records.len(), 2);
        assert_eq!(page.records[0].id, 27992);
        assert_eq!(page.records[0].date_end, Some(1886));
        assert_eq!(page.records[1].title, None);
        assert_eq!(page.pagination.current_page, 2);
        assert_eq!(page.pagination.offset, 2);
        assert_eq!(page.pagination.total_pages, 64942);
    }

    #[test]
    fn decode_accepts_missing_page_links() {
        let body = r#"{"data":[],"pagination":{"total":0,"limit":12,"offset":0,"total_pages":0,"current_page":1}}"#;
        let page = decode_catalog_page(body).expect("decode");
        assert!(page.records.is_empty());
        assert_eq!(page.pagination.prev_url, None);
        assert_eq!(page.pagination.next_url, None);
    }

    #[test]
    fn decode_rejects_non_catalog_bodies() {
        assert!(matches!(
            decode_catalog_page("<html>502 Bad Gateway</html>"),
            Err(FetchError::Decode { .. })
        ));
        assert!(matches!(
            decode_catalog_page(r#"{"detail":"not found"}"#),
            Err(FetchError::Decode { .. })
        ));
    }
}
