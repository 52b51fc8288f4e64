//! Menu catalog: categories, prices, and the items on offer.

use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::error::OrderError;

// =============================================================================
// CATEGORY
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Dish,
    Drink,
    Dessert,
}

impl Category {
    /// Every category, in menu and summary order.
    pub const ALL: [Category; 3] = [Category::Dish, Category::Drink, Category::Dessert];

    /// Label used in the order message and confirmation overlay.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dish => "Prato",
            Self::Drink => "Bebida",
            Self::Dessert => "Sobremesa",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dish => "dish",
            Self::Drink => "drink",
            Self::Dessert => "dessert",
        })
    }
}

// =============================================================================
// PRICE
// =============================================================================

/// Non-negative amount in cents. Reads and writes as a decimal JSON number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(u32);

impl Price {
    #[must_use]
    pub const fn from_cents(cents: u32) -> Self {
        Self(cents)
    }

    #[must_use]
    pub const fn cents(self) -> u32 {
        self.0
    }
}

impl TryFrom<f64> for Price {
    type Error = OrderError;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        let cents = (value * 100.0).round();
        if !cents.is_finite() || cents < 0.0 || cents > f64::from(u32::MAX) {
            return Err(OrderError::InvalidPrice(value));
        }
        Ok(Self(cents as u32))
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        f64::from(price.0) / 100.0
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl fmt::Display for Price {
    /// Always two decimals, e.g. `27.70`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

// =============================================================================
// ITEM / CATALOG
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub image: String,
    pub description: String,
    pub price: Price,
}

impl Item {
    fn new(name: &str, image: &str, description: &str, cents: u32) -> Self {
        Self {
            name: name.to_owned(),
            image: image.to_owned(),
            description: description.to_owned(),
            price: Price::from_cents(cents),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub dishes: Vec<Item>,
    pub drinks: Vec<Item>,
    pub desserts: Vec<Item>,
}

impl Catalog {
    /// The house menu.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            dishes: vec![
                Item::new(
                    "Estrombelete de Frango",
                    "img/frango_yin_yang.png",
                    "Um pouco de batata, um pouco de salada",
                    1490,
                ),
                Item::new("Asa de Boi", "img/frango_yin_yang.png", "Com molho shoyu", 1490),
                Item::new("Carne de Monstro", "img/frango_yin_yang.png", "Com batata assada e farofa", 1490),
            ],
            drinks: vec![
                Item::new("Coquinha gelada", "img/coquinha_gelada.png", "Lata 350ml", 490),
                Item::new("Caldo de Cana", "img/coquinha_gelada.png", "Copo 600ml", 490),
                Item::new("Corote Gelado", "img/coquinha_gelada.png", "Garrafa 400ml", 490),
            ],
            desserts: vec![
                Item::new("Pudim", "img/pudim.png", "Gosto de doce de leite", 790),
                Item::new("Flam", "img/pudim.png", "Gosto de chocolate", 790),
                Item::new("Brigadeiro", "img/pudim.png", "3 unidades", 790),
            ],
        }
    }

    /// Parse a catalog from JSON with `dishes`, `drinks` and `desserts` lists.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Catalog`] for malformed JSON, missing lists, or
    /// negative prices.
    pub fn from_json(raw: &str) -> Result<Self, OrderError> {
        Ok(serde_json::from_str(raw)?)
    }

    #[must_use]
    pub fn items(&self, category: Category) -> &[Item] {
        match category {
            Category::Dish => &self.dishes,
            Category::Drink => &self.drinks,
            Category::Dessert => &self.desserts,
        }
    }

    /// Look up an item by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::UnknownItem`] when no item in `category` has that name.
    pub fn find(&self, category: Category, name: &str) -> Result<&Item, OrderError> {
        self.items(category)
            .iter()
            .find(|item| item.name == name)
            .ok_or_else(|| OrderError::UnknownItem { category, name: name.to_owned() })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
