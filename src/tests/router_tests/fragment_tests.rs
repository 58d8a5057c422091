use crate::catalog::Catalog;
use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::route;
use crate::tests::utils::{body_string, fixed_now, get};

#[test]
fn card_fragment_renders_single_card() {
    let catalog = Catalog::demo(fixed_now()).unwrap();
    let resp = route(&get("/cards/air-zoom-tempo"), &catalog, fixed_now()).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);

    assert!(body.starts_with(r#"<a class="shoe-card" href="/shoe/air-zoom-tempo""#));
    assert!(body.contains(">Sale</div>"));
    assert!(body.contains("3 Colors"));
    assert!(!body.contains("<!DOCTYPE html>"));
}

#[test]
fn unknown_card_is_not_found() {
    let catalog = Catalog::demo(fixed_now()).unwrap();

    for uri in ["/cards/nope", "/cards/"] {
        assert!(matches!(
            route(&get(uri), &catalog, fixed_now()),
            Err(ServerError::NotFound)
        ));
    }
}

#[test]
fn errors_render_as_html_pages_with_status() {
    let resp = error_to_response(ServerError::NotFound);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));

    let resp = error_to_response(ServerError::BadRequest("bad tag".into()));
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("Bad Request: bad tag"));

    let resp = error_to_response(ServerError::InternalError);
    assert_eq!(resp.status(), 500);
}
