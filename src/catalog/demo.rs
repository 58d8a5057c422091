// src/catalog/demo.rs

use crate::domain::{Money, Shoe};
use chrono::{DateTime, Duration, Utc};

// (slug, name, price, sale price, released days ago, colors)
const DEMO: &[(&str, &str, u64, Option<u64>, i64, u32)] = &[
    ("tech-challenge-air", "Tech Challenge Air", 16500, None, 5, 2),
    ("air-zoom-tempo", "Air Zoom Tempo NEXT%", 25000, Some(17500), 12, 3),
    ("air-max-270-react", "Air Max 270 React", 15000, None, 90, 4),
    ("react-infinity-run", "React Infinity Run Flyknit", 16000, Some(12000), 400, 1),
    ("legend-essential", "Legend Essential", 6000, None, 720, 5),
    ("zoom-freak-2", "Zoom Freak 2", 12000, None, 20, 1),
    ("air-force-1-shadow", "Air Force 1 Shadow", 11000, None, 1500, 3),
    ("pegasus-trail-2", "Pegasus Trail 2", 13000, Some(9900), 45, 2),
];

pub fn demo_shoes(now: DateTime<Utc>) -> Vec<Shoe> {
    DEMO.iter()
        .map(|&(slug, name, price, sale, days_ago, colors)| Shoe {
            slug: slug.to_string(),
            name: name.to_string(),
            image_src: format!("/static/shoes/{slug}.jpg"),
            price: Money::from_cents(price),
            sale_price: sale.map(Money::from_cents),
            release_date: now - Duration::days(days_ago),
            num_of_colors: colors,
        })
        .collect()
}
