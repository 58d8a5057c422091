use crate::catalog::Catalog;
use crate::domain::Variant;
use crate::errors::ServerError;
use crate::responses::{html_response, ResultResp};
use crate::templates::{pages, shoe_card};
use astra::Request;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tracing::{debug, warn};

pub fn handle(req: Request, catalog: &Catalog) -> ResultResp {
    let result = route(&req, catalog, Utc::now());

    match &result {
        Ok(resp) => debug!(
            method = %req.method(),
            path = req.uri().path(),
            status = resp.status().as_u16(),
            "request served"
        ),
        Err(err) => warn!(
            method = %req.method(),
            path = req.uri().path(),
            status = err.status(),
            error = %err,
            "request failed"
        ),
    }

    result
}

/// Dispatches a request with the clock fixed at `now`.
pub fn route(req: &Request, catalog: &Catalog, now: DateTime<Utc>) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => {
            let params = parse_query(req);
            let variant = params
                .get("variant")
                .map(|tag| tag.parse::<Variant>())
                .transpose()?;

            let shoes = catalog.filter(variant, now);
            html_response(pages::catalog_page(&shoes, variant, now))
        }
        ("GET", _) if path.starts_with("/cards/") => {
            let slug = path.trim_start_matches("/cards/");
            let shoe = catalog.find(slug).ok_or(ServerError::NotFound)?;
            html_response(shoe_card(shoe, now))
        }
        _ => Err(ServerError::NotFound),
    }
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    let mut map = HashMap::new();

    if let Some(q) = req.uri().query() {
        for pair in q.split('&') {
            let mut parts = pair.splitn(2, '=');
            if let (Some(k), Some(v)) = (parts.next(), parts.next()) {
                map.insert(k.to_string(), v.to_string());
            }
        }
    }

    map
}
