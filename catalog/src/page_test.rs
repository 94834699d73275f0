use super::*;
use crate::model::Genre;

#[test]
fn page_reads_content_and_total_pages() {
    let page: Page<Genre> = serde_json::from_value(serde_json::json!({
        "content": [{ "id": 1, "name": "Horror" }, { "id": 2, "name": "Drama" }],
        "totalPages": 4,
        "totalElements": 17,
        "number": 0
    }))
    .expect("page");
    assert_eq!(page.content.len(), 2);
    assert_eq!(page.total_pages, 4);
}

#[test]
fn page_missing_fields_default_to_empty() {
    let page: Page<Genre> = serde_json::from_value(serde_json::json!({})).expect("page");
    assert!(page.content.is_empty());
    assert_eq!(page.total_pages, 0);
}

#[test]
fn page_request_formats_query() {
    assert_eq!(PageRequest::new(2, 5).query(), "page=2&size=5");
}
