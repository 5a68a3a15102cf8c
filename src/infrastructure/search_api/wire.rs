// SPDX-License-Identifier: MPL-2.0
//! JSON shapes returned by the search endpoint.

use crate::domain::search::{ImageResult, SearchPage, TotalCount};
use crate::error::SearchRequestError;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    total_hits: u64,
    #[serde(default)]
    hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
struct Hit {
    id: u64,
    #[serde(rename = "webformatURL")]
    webformat_url: String,
    #[serde(rename = "largeImageURL")]
    large_image_url: String,
    #[serde(default)]
    tags: String,
}

impl From<Hit> for ImageResult {
    fn from(hit: Hit) -> Self {
        ImageResult {
            id: hit.id,
            thumbnail_url: hit.webformat_url,
            full_size_url: hit.large_image_url,
            tags: hit.tags,
        }
    }
}

/// Decodes a successful response body into a [`SearchPage`].
pub fn decode_search_page(body: &[u8]) -> Result<SearchPage, SearchRequestError> {
    let response: SearchResponse =
        serde_json::from_slice(body).map_err(SearchRequestError::malformed)?;

    Ok(SearchPage {
        results: response.hits.into_iter().map(ImageResult::from).collect(),
        total: TotalCount::new(response.total_hits),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "total": 4692,
        "totalHits": 500,
        "hits": [
            {
                "id": 195893,
                "pageURL": "https://pixabay.com/en/blossom-bloom-flower-195893/",
                "type": "photo",
                "tags": "blossom, bloom, flower",
                "previewURL": "https://cdn.pixabay.com/photo/2013/10/15/09/12/flower-195893_150.jpg",
                "webformatURL": "https://pixabay.com/get/35bbf209e13e39d2_640.jpg",
                "largeImageURL": "https://pixabay.com/get/ed6a99fd0a76647_1280.jpg",
                "likes": 1924
            },
            {
                "id": 73424,
                "webformatURL": "https://pixabay.com/get/b_640.jpg",
                "largeImageURL": "https://pixabay.com/get/b_1280.jpg"
            }
        ]
    }"#;

    #[test]
    fn decodes_hits_and_total() {
        let page = decode_search_page(SAMPLE.as_bytes()).expect("sample should decode");

        assert_eq!(page.total, TotalCount::new(500));
        assert_eq!(page.results.len(), 2);

        let first = &page.results[0];
        assert_eq!(first.id, 195893);
        assert_eq!(first.tags, "blossom, bloom, flower");
        assert!(first.thumbnail_url.ends_with("_640.jpg"));
        assert!(first.full_size_url.ends_with("_1280.jpg"));
    }

    #[test]
    fn missing_tags_default_to_empty() {
        let page = decode_search_page(SAMPLE.as_bytes()).expect("sample should decode");
        assert_eq!(page.results[1].tags, "");
    }

    #[test]
    fn missing_hits_is_an_empty_page() {
        let page = decode_search_page(br#"{"totalHits": 0}"#).expect("should decode");
        assert!(page.results.is_empty());
        assert_eq!(page.total.value(), 0);
    }

    #[test]
    fn missing_total_is_malformed() {
        let err = decode_search_page(br#"{"hits": []}"#).expect_err("should fail");
        assert!(err.message().starts_with("Malformed response"));
        assert!(err.message().contains("totalHits"));
    }

    #[test]
    fn non_json_body_is_malformed() {
        let err = decode_search_page(b"[ERROR 400] \"key\" is a required parameter.")
            .expect_err("should fail");
        assert!(err.message().starts_with("Malformed response"));
    }
}
