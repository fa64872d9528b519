use super::*;
use crate::domain::Price;

fn price(raw: &str) -> Price {
    raw.parse().expect("decimal literal")
}

#[test]
fn embedded_menu_has_nine_desserts_in_display_order() {
    let catalog = Catalog::embedded().expect("embedded catalog");

    assert_eq!(catalog.len(), 9);
    assert_eq!(catalog.items()[0].name, "Waffle with Berries");
    assert_eq!(catalog.items()[8].name, "Vanilla Panna Cotta");
    assert_eq!(catalog.position("Classic Tiramisu"), Some(3));
}

#[test]
fn json_prices_are_read_as_exact_decimals() {
    let catalog = Catalog::embedded().expect("embedded catalog");

    let waffle = catalog.get("Waffle with Berries").expect("waffle");
    assert_eq!(waffle.price, price("6.50"));
    assert_eq!(waffle.category, "Waffle");
    assert_eq!(
        waffle.image.thumbnail,
        "./assets/images/image-waffle-thumbnail.jpg"
    );

    let brulee = catalog.get("Vanilla Bean Crème Brûlée").expect("brulee");
    assert_eq!(brulee.price, price("7"));
}

#[test]
fn rejects_duplicate_names() {
    let err = Catalog::new(vec![
        Item::new("Tart", "Pie", price("5.00")),
        Item::new("Tart", "Pie", price("6.00")),
    ])
    .expect_err("duplicate should be rejected");

    assert!(matches!(err, CatalogError::DuplicateName { name } if name == "Tart"));
}

#[test]
fn rejects_negative_prices_but_allows_free_items() {
    let err = Catalog::new(vec![Item::new("Tart", "Pie", price("-0.01"))])
        .expect_err("negative price should be rejected");
    assert!(matches!(err, CatalogError::NegativePrice { .. }));

    let free = Catalog::new(vec![Item::new("Sample", "Cake", price("0"))]).expect("free item");
    assert_eq!(free.len(), 1);
}

#[test]
fn rejects_empty_and_blank_named_catalogs() {
    assert!(matches!(Catalog::new(Vec::new()), Err(CatalogError::Empty)));

    let err = Catalog::new(vec![
        Item::new("Tart", "Pie", price("5")),
        Item::new("   ", "Cake", price("3.5")),
    ])
    .expect_err("blank name");
    assert!(matches!(err, CatalogError::BlankName { index: 1 }));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = Catalog::from_json(r#"[{"name": "Tart"}]"#).expect_err("missing fields");
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[test]
fn missing_file_reports_path() {
    let path = std::env::temp_dir().join("storefront_catalog_does_not_exist.json");
    let err = Catalog::load(&path).expect_err("missing file");

    assert!(err.to_string().contains("storefront_catalog_does_not_exist.json"));
    assert!(matches!(err, CatalogError::Io { .. }));
}

#[test]
fn rejects_prices_above_the_maximum() {
    let err = Catalog::new(vec![Item::new(
        "Gold Leaf Cake",
        "Cake",
        price("50000000000000000000000000000"),
    )])
    .expect_err("price far above the maximum");
    assert!(matches!(err, CatalogError::PriceTooHigh { .. }));

    let at_limit = Catalog::new(vec![Item::new("Gold Leaf Cake", "Cake", MAX_PRICE)])
        .expect("maximum price is allowed");
    assert_eq!(at_limit.items()[0].price, price("1000000"));
}

#[test]
fn rejects_names_with_surrounding_whitespace() {
    let err = Catalog::new(vec![Item::new(" Tart", "Pie", price("5"))])
        .expect_err("leading space");
    assert!(matches!(err, CatalogError::UntrimmedName { name } if name == " Tart"));

    let err = Catalog::new(vec![Item::new("Tart\t", "Pie", price("5"))])
        .expect_err("trailing tab");
    assert!(matches!(err, CatalogError::UntrimmedName { .. }));
}

#[test]
fn prices_serialize_as_json_numbers() {
    let catalog = Catalog::embedded().expect("embedded catalog");

    let json = serde_json::to_value(catalog.items()).expect("serialize");

    assert!(json[0]["price"].is_number());
    assert_eq!(json[0]["price"], 6.5);
    assert_eq!(json[1]["price"], 7.0);
}
