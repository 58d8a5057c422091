use super::utils::{date, dollars, fixed_now, make_shoe};
use crate::domain::Variant;
use crate::templates::shoe_card;

#[test]
fn scenario_on_sale_card() {
    let now = fixed_now();
    let shoe = make_shoe("tempo", Some(dollars(119.99)), date(2019, 1, 1), 3);

    assert_eq!(shoe.variant(now), Variant::OnSale);

    let html = shoe_card(&shoe, now).into_string();
    assert!(html.contains(r#"href="/shoe/tempo""#));
    assert!(html.contains(r#"data-variant="on-sale""#));
    assert!(html.contains(">Sale</div>"));
    assert!(html.contains("3 Colors"));
    assert!(html.contains("text-decoration: line-through;"));
    assert!(html.contains(r#"class="shoe-card__sale-price""#));
}

#[test]
fn sale_label_repeats_the_regular_price() {
    let now = fixed_now();
    let shoe = make_shoe("tempo", Some(dollars(119.99)), date(2019, 1, 1), 3);

    let html = shoe_card(&shoe, now).into_string();
    assert_eq!(html.matches("$165.00").count(), 2);
    assert!(!html.contains("$119.99"));
}

#[test]
fn scenario_new_release_card() {
    let now = fixed_now();
    let shoe = make_shoe("freak", None, now, 1);

    assert_eq!(shoe.variant(now), Variant::NewRelease);

    let html = shoe_card(&shoe, now).into_string();
    assert!(html.contains("Just Released!"));
    assert!(html.contains("1 Color<"));
    assert!(html.contains("text-decoration: none;"));
    assert!(!html.contains("shoe-card__sale-price"));
}

#[test]
fn scenario_default_card_has_no_banner() {
    let now = fixed_now();
    let shoe = make_shoe("legend", None, date(2015, 1, 1), 5);

    assert_eq!(shoe.variant(now), Variant::Default);

    let html = shoe_card(&shoe, now).into_string();
    assert!(!html.contains("shoe-card__banner"));
    assert!(!html.contains("shoe-card__sale-price"));
    assert!(html.contains("5 Colors"));
    assert!(html.contains("$165.00"));
}

#[test]
fn scenario_sale_beats_recency() {
    let now = fixed_now();
    let shoe = make_shoe("pegasus", Some(dollars(50.0)), now, 2);

    assert_eq!(shoe.variant(now), Variant::OnSale);
    let html = shoe_card(&shoe, now).into_string();
    assert!(html.contains(">Sale</div>"));
    assert!(!html.contains("Just Released!"));
}

#[test]
fn rendering_is_idempotent() {
    let now = fixed_now();
    let shoe = make_shoe("tempo", Some(dollars(119.99)), date(2019, 1, 1), 3);

    assert_eq!(
        shoe_card(&shoe, now).into_string(),
        shoe_card(&shoe, now).into_string()
    );
}

#[test]
fn card_text_is_escaped() {
    let now = fixed_now();
    let mut shoe = make_shoe("odd", None, date(2015, 1, 1), 2);
    shoe.name = "<Runner & Co>".to_string();

    let html = shoe_card(&shoe, now).into_string();
    assert!(html.contains("&lt;Runner &amp; Co&gt;"));
}
