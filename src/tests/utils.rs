use crate::domain::{Money, Shoe};
use astra::{Body, Request, Response};
use chrono::{DateTime, Duration, TimeZone, Utc};
use http::Method;
use std::io::Read;

/// Fixed clock shared by every test.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
}

pub fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

pub fn days_ago(days: i64) -> DateTime<Utc> {
    fixed_now() - Duration::days(days)
}

pub fn dollars(amount: f64) -> Money {
    Money::from_cents((amount * 100.0).round() as u64)
}

pub fn make_shoe(
    slug: &str,
    sale_price: Option<Money>,
    release_date: DateTime<Utc>,
    num_of_colors: u32,
) -> Shoe {
    Shoe {
        slug: slug.to_string(),
        name: format!("Shoe {slug}"),
        image_src: format!("/images/{slug}.jpg"),
        price: dollars(165.0),
        sale_price,
        release_date,
        num_of_colors,
    }
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::from(String::new()))
        .unwrap()
}

pub fn body_string(mut resp: Response) -> String {
    let mut body = String::new();
    resp.body_mut().reader().read_to_string(&mut body).unwrap();
    body
}
