use serde_json::json;

use super::*;

#[test]
fn builtin_catalog_has_three_items_per_category() {
    let catalog = Catalog::builtin();
    for category in Category::ALL {
        assert_eq!(catalog.items(category).len(), 3, "{category}");
    }
}

#[test]
fn builtin_prices_match_house_menu() {
    let catalog = Catalog::builtin();
    assert!(catalog.dishes.iter().all(|item| item.price == Price::from_cents(1490)));
    assert!(catalog.drinks.iter().all(|item| item.price == Price::from_cents(490)));
    assert!(catalog.desserts.iter().all(|item| item.price == Price::from_cents(790)));
}

#[test]
fn find_matches_exact_name_within_category() {
    let catalog = Catalog::builtin();
    let item = catalog.find(Category::Dessert, "Pudim").expect("pudim");
    assert_eq!(item.description, "Gosto de doce de leite");

    let err = catalog.find(Category::Drink, "Pudim").expect_err("wrong category");
    assert!(matches!(err, OrderError::UnknownItem { category: Category::Drink, .. }));
    assert_eq!(err.error_code(), "E_UNKNOWN_ITEM");
}

#[test]
fn category_labels_and_display() {
    assert_eq!(Category::Dish.label(), "Prato");
    assert_eq!(Category::Drink.label(), "Bebida");
    assert_eq!(Category::Dessert.label(), "Sobremesa");
    assert_eq!(Category::Dessert.to_string(), "dessert");
}

// =============================================================
// Price
// =============================================================

#[test]
fn price_displays_two_decimals() {
    assert_eq!(Price::from_cents(1490).to_string(), "14.90");
    assert_eq!(Price::from_cents(5).to_string(), "0.05");
    assert_eq!(Price::from_cents(0).to_string(), "0.00");
}

#[test]
fn price_from_float_rounds_to_cents() {
    assert_eq!(Price::try_from(14.9).expect("price").cents(), 1490);
    assert_eq!(Price::try_from(4.9).expect("price").cents(), 490);
    assert_eq!(Price::try_from(0.125).expect("price").cents(), 13);
}

#[test]
fn price_rejects_negative_and_non_finite() {
    assert!(matches!(Price::try_from(-1.0), Err(OrderError::InvalidPrice(_))));
    assert!(Price::try_from(f64::NAN).is_err());
    assert!(Price::try_from(f64::INFINITY).is_err());
}

#[test]
fn prices_add_exactly() {
    let total = Price::from_cents(1490) + Price::from_cents(490) + Price::from_cents(790);
    assert_eq!(total.to_string(), "27.70");
}

// =============================================================
// JSON
// =============================================================

#[test]
fn catalog_loads_from_json() {
    let raw = json!({
        "dishes": [{ "name": "Feijoada", "image": "img/f.png", "description": "Completa", "price": 32.5 }],
        "drinks": [{ "name": "Suco", "image": "img/s.png", "description": "Laranja", "price": 6 }],
        "desserts": [{ "name": "Quindim", "image": "img/q.png", "description": "Um", "price": 5.25 }]
    })
    .to_string();

    let catalog = Catalog::from_json(&raw).expect("catalog");
    assert_eq!(catalog.find(Category::Dish, "Feijoada").expect("dish").price.to_string(), "32.50");
    assert_eq!(catalog.drinks[0].price.cents(), 600);
}

#[test]
fn catalog_rejects_negative_price() {
    let raw = json!({
        "dishes": [{ "name": "x", "image": "", "description": "", "price": -3.0 }],
        "drinks": [],
        "desserts": []
    })
    .to_string();

    let err = Catalog::from_json(&raw).expect_err("negative price");
    assert_eq!(err.error_code(), "E_CATALOG");
}

#[test]
fn catalog_requires_every_list() {
    let err = Catalog::from_json(r#"{ "dishes": [] }"#).expect_err("missing lists");
    assert!(matches!(err, OrderError::Catalog(_)));
}

#[test]
fn price_serializes_as_decimal_number() {
    let value = serde_json::to_value(Price::from_cents(790)).expect("serialize");
    assert_eq!(value, json!(7.9));
}
