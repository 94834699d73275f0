use super::*;

fn option(value: i64, label: &str) -> SelectOption {
    SelectOption { value, label: label.to_owned() }
}

#[test]
fn build_book_input_requires_genre() {
    let publisher = option(3, "Penguin");
    let input = build_book_input(None, "Dune".into(), "Herbert".into(), None, Some(&publisher));
    assert!(input.is_none());
}

#[test]
fn build_book_input_without_publisher_sends_zero_and_blank() {
    let genre = option(2, "Sci-Fi");
    let input = build_book_input(None, "Dune".into(), "Herbert".into(), Some(&genre), None)
        .expect("genre chosen");
    assert_eq!(input.genre_id, 2);
    assert_eq!(input.genre_name, "Sci-Fi");
    assert_eq!(input.publisher_id, 0);
    assert_eq!(input.publisher_name, "");
    assert_eq!(input.id, None);
}

#[test]
fn build_book_input_keeps_id_when_editing() {
    let genre = option(2, "Sci-Fi");
    let publisher = option(3, "Penguin");
    let input = build_book_input(
        Some(41),
        "Dune Messiah".into(),
        "Herbert".into(),
        Some(&genre),
        Some(&publisher),
    )
    .expect("genre chosen");
    assert_eq!(input.id, Some(41));
    assert_eq!(input.title, "Dune Messiah");
    assert_eq!(input.publisher_id, 3);
    assert_eq!(input.publisher_name, "Penguin");
}

#[cfg(feature = "ssr")]
#[test]
fn dropdown_captions_point_at_their_inputs() {
    use leptos::reactive::owner::Owner;

    let owner = Owner::new();
    owner.set();
    let html = view! {
        <BookForm
            initial=None
            on_submit=Callback::new(|_: BookInput| {})
            submitting=false
            error={None::<String>}
        />
    }
    .to_html();

    assert!(html.contains(r#"for="genre""#));
    assert!(html.contains(r#"id="genre""#));
    assert!(html.contains(r#"for="publisher""#));
    assert!(html.contains(r#"id="publisher""#));
}
