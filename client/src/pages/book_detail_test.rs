use super::*;

fn book(id: i64, title: &str) -> Book {
    Book {
        id,
        title: title.to_owned(),
        author: "Frank Herbert".to_owned(),
        genre_id: 1,
        genre_name: "Sci-Fi".to_owned(),
        publisher_id: 0,
        publisher_name: String::new(),
    }
}

#[test]
fn parse_book_id_accepts_integers() {
    assert_eq!(parse_book_id("42"), Some(42));
    assert_eq!(parse_book_id(" 7 "), Some(7));
}

#[test]
fn parse_book_id_rejects_garbage() {
    assert_eq!(parse_book_id("abc"), None);
    assert_eq!(parse_book_id(""), None);
}

#[test]
fn lookup_finds_matching_book() {
    let books = vec![book(1, "Dune"), book(2, "Emma")];
    assert_eq!(lookup(books, 2), DetailState::Found(book(2, "Emma")));
}

#[test]
fn lookup_reports_missing_book() {
    assert_eq!(lookup(vec![book(1, "Dune")], 9), DetailState::NotFound);
}
