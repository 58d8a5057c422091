use crate::catalog::Catalog;
use crate::errors::ServerError;
use crate::router::route;
use crate::tests::utils::{body_string, fixed_now, get};

fn demo() -> Catalog {
    Catalog::demo(fixed_now()).unwrap()
}

#[test]
fn catalog_page_lists_every_shoe() {
    let catalog = demo();
    let resp = route(&get("/"), &catalog, fixed_now()).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/html; charset=utf-8"
    );

    let body = body_string(resp);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert_eq!(body.matches(r#"class="shoe-card""#).count(), catalog.len());
    assert!(body.contains("Tech Challenge Air"));
    assert!(body.contains("Legend Essential"));
}

#[test]
fn catalog_page_filters_by_variant() {
    let catalog = demo();
    let resp = route(&get("/?variant=new-release"), &catalog, fixed_now()).unwrap();
    let body = body_string(resp);

    assert_eq!(body.matches(r#"data-variant="new-release""#).count(), 2);
    assert!(body.contains("Tech Challenge Air"));
    assert!(body.contains("Zoom Freak 2"));
    assert!(!body.contains("Legend Essential"));
    assert!(!body.contains(r#"data-variant="on-sale""#));
}

#[test]
fn unknown_variant_is_a_bad_request() {
    let catalog = demo();
    let result = route(&get("/?variant=clearance"), &catalog, fixed_now());

    match result {
        Err(ServerError::BadRequest(msg)) => assert!(msg.contains("clearance")),
        Err(other) => panic!("expected BadRequest, got {other:?}"),
        Ok(_) => panic!("expected BadRequest, got a page"),
    }
}

#[test]
fn empty_catalog_renders_empty_message() {
    let catalog = Catalog::default();
    let resp = route(&get("/"), &catalog, fixed_now()).unwrap();

    assert!(body_string(resp).contains("No shoes match this filter."));
}

#[test]
fn unknown_paths_and_methods_are_not_found() {
    let catalog = demo();

    assert!(matches!(
        route(&get("/shoe/tech-challenge-air"), &catalog, fixed_now()),
        Err(ServerError::NotFound)
    ));

    let post = http::Request::builder()
        .method(http::Method::POST)
        .uri("/")
        .body(astra::Body::from(String::new()))
        .unwrap();
    assert!(matches!(
        route(&post, &catalog, fixed_now()),
        Err(ServerError::NotFound)
    ));
}
