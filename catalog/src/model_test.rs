use super::*;

#[test]
fn book_reads_camel_case_fields() {
    let book: Book = serde_json::from_value(serde_json::json!({
        "id": 7,
        "title": "Dune",
        "author": "Frank Herbert",
        "genreId": 2,
        "genreName": "Sci-Fi",
        "publisherId": 3,
        "publisherName": "Chilton"
    }))
    .expect("book");
    assert_eq!(book.genre_id, 2);
    assert_eq!(book.publisher_name, "Chilton");
    assert!(book.has_publisher());
}

#[test]
fn book_null_publisher_reads_as_none() {
    let book: Book = serde_json::from_value(serde_json::json!({
        "id": 1,
        "title": "Untitled",
        "author": "Anon",
        "genreId": 4,
        "publisherId": null,
        "publisherName": null
    }))
    .expect("book");
    assert_eq!(book.publisher_id, 0);
    assert_eq!(book.publisher_name, "");
    assert_eq!(book.genre_name, "");
    assert!(!book.has_publisher());
}

#[test]
fn book_input_without_id_omits_id_key() {
    let input = BookInput {
        id: None,
        title: "Dune".to_owned(),
        author: "Frank Herbert".to_owned(),
        genre_id: 2,
        genre_name: "Sci-Fi".to_owned(),
        publisher_id: 0,
        publisher_name: String::new(),
    };
    assert_eq!(
        serde_json::to_value(&input).expect("json"),
        serde_json::json!({
            "title": "Dune",
            "author": "Frank Herbert",
            "genreId": 2,
            "genreName": "Sci-Fi",
            "publisherId": 0,
            "publisherName": ""
        })
    );
}

#[test]
fn book_to_input_carries_id_for_edits() {
    let book = Book {
        id: 9,
        title: "Emma".to_owned(),
        author: "Jane Austen".to_owned(),
        genre_id: 1,
        genre_name: "Classic".to_owned(),
        publisher_id: 5,
        publisher_name: "Murray".to_owned(),
    };
    let input = book.to_input();
    assert_eq!(input.id, Some(9));
    assert_eq!(input.publisher_id, 5);
    assert_eq!(serde_json::to_value(&input).expect("json")["id"], 9);
}

#[test]
fn name_input_serializes_id_only_when_present() {
    let create = NameInput { id: None, name: "Poetry".to_owned() };
    assert_eq!(serde_json::to_value(&create).expect("json"), serde_json::json!({ "name": "Poetry" }));

    let edit = Genre { id: 3, name: "Poetry".to_owned() }.to_input();
    assert_eq!(serde_json::to_value(&edit).expect("json"), serde_json::json!({ "id": 3, "name": "Poetry" }));
}

#[test]
fn resource_labels_match_collections() {
    assert_eq!(Book::COLLECTION, "books");
    assert_eq!(Genre::COLLECTION, "genres");
    assert_eq!(Publisher::COLLECTION, "publishers");
    assert_eq!(Publisher::LABEL, "Publisher");
    assert_eq!(Genre::PLURAL, "Genres");
}

#[test]
fn name_for_resolves_matching_id() {
    let genres = [Genre { id: 1, name: "Horror".to_owned() }, Genre { id: 2, name: "Drama".to_owned() }];
    let name = name_for(genres.iter().map(|g| (g.id, g.name.as_str())), 2);
    assert_eq!(name, "Drama");
}

#[test]
fn name_for_dangling_reference_is_blank() {
    let genres = [Genre { id: 1, name: "Horror".to_owned() }];
    assert_eq!(name_for(genres.iter().map(|g| (g.id, g.name.as_str())), 42), "");
}
