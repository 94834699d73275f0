use super::*;
use catalog::{Genre, NameInput, Publisher};

#[test]
fn describe_formats_method_and_absolute_url() {
    let endpoint = Endpoint::list::<Genre>(PageRequest::new(0, 5));
    assert_eq!(describe(&endpoint), "GET http://localhost:8082/api/genres/list?page=0&size=5");
}

#[test]
fn describe_delete_uses_get() {
    let endpoint = Endpoint::delete::<Publisher>(3);
    assert_eq!(describe(&endpoint), "GET http://localhost:8082/api/publishers/delete/3");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_calls_are_unavailable() {
    let input = NameInput { id: None, name: "Drama".to_owned() };
    assert_eq!(futures::executor::block_on(fetch_all::<Genre>()), Err(ApiError::Unavailable));
    assert_eq!(futures::executor::block_on(store::<Genre>(&input)), Err(ApiError::Unavailable));
    assert_eq!(futures::executor::block_on(delete::<Genre>(1)), Err(ApiError::Unavailable));
}
