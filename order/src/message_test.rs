use super::*;
use crate::catalog::{Catalog, Category};

fn full_selection() -> OrderSelection {
    let catalog = Catalog::builtin();
    let mut selection = OrderSelection::new();
    for (category, name) in [
        (Category::Dish, "Asa de Boi"),
        (Category::Drink, "Caldo de Cana"),
        (Category::Dessert, "Pudim"),
    ] {
        selection.select(category, catalog.find(category, name).expect("item").clone());
    }
    selection
}

#[test]
fn order_link_encodes_summary_like_uri_component() {
    let link = order_link(&full_selection()).expect("link");
    assert_eq!(
        link,
        "https://wa.me/553299999999?text=Ol%C3%A1%2C%20gostaria%20de%20fazer%20o%20pedido%3A%20%0A\
         -%20Prato%3A%20Asa%20de%20Boi%20%0A\
         -%20Bebida%3A%20Caldo%20de%20Cana%20%0A\
         -%20Sobremesa%3A%20Pudim%20%0A\
         Total%3A%20R%24%2027.70"
    );
}

#[test]
fn order_link_requires_complete_selection() {
    let err = order_link(&OrderSelection::new()).expect_err("incomplete");
    assert!(matches!(err, OrderError::Incomplete { missing: Category::Dish }));
}

#[test]
fn uri_component_marks_stay_unescaped() {
    let link = message_link(1, "a-b_c.d!e~f*g'h(i)j k/l?m&n=o#p+");
    assert_eq!(link, "https://wa.me/1?text=a-b_c.d!e~f*g'h(i)j%20k%2Fl%3Fm%26n%3Do%23p%2B");
}
