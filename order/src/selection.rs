//! Current order: at most one item per category.

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Item, Price};
use crate::error::OrderError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSelection {
    dish: Option<Item>,
    drink: Option<Item>,
    dessert: Option<Item>,
}

/// One row of the confirmation overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub category: Category,
    pub label: String,
    pub name: String,
    pub price: String,
}

/// Everything the confirmation overlay shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub lines: Vec<ReceiptLine>,
    pub total: String,
}

impl OrderSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose `item` for `category`, replacing any earlier choice.
    pub fn select(&mut self, category: Category, item: Item) {
        *self.slot_mut(category) = Some(item);
    }

    #[must_use]
    pub fn get(&self, category: Category) -> Option<&Item> {
        match category {
            Category::Dish => self.dish.as_ref(),
            Category::Drink => self.drink.as_ref(),
            Category::Dessert => self.dessert.as_ref(),
        }
    }

    fn slot_mut(&mut self, category: Category) -> &mut Option<Item> {
        match category {
            Category::Dish => &mut self.dish,
            Category::Drink => &mut self.drink,
            Category::Dessert => &mut self.dessert,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        Category::ALL.iter().all(|category| self.get(*category).is_some())
    }

    /// All three items in category order, or the first missing category.
    fn items(&self) -> Result<[&Item; 3], OrderError> {
        let pick = |category| self.get(category).ok_or(OrderError::Incomplete { missing: category });
        Ok([pick(Category::Dish)?, pick(Category::Drink)?, pick(Category::Dessert)?])
    }

    /// Sum of the three selected prices.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Incomplete`] until every category is selected.
    pub fn total_price(&self) -> Result<Price, OrderError> {
        let [dish, drink, dessert] = self.items()?;
        Ok(dish.price + drink.price + dessert.price)
    }

    /// The order message sent to the restaurant.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Incomplete`] until every category is selected.
    pub fn summary_text(&self) -> Result<String, OrderError> {
        let [dish, drink, dessert] = self.items()?;
        let total = self.total_price()?;
        Ok(format!(
            "Olá, gostaria de fazer o pedido: \n- {}: {} \n- {}: {} \n- {}: {} \nTotal: R$ {total}",
            Category::Dish.label(),
            dish.name,
            Category::Drink.label(),
            drink.name,
            Category::Dessert.label(),
            dessert.name,
        ))
    }

    /// Rows for the confirmation overlay.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Incomplete`] until every category is selected.
    pub fn receipt(&self) -> Result<Receipt, OrderError> {
        let items = self.items()?;
        let lines = Category::ALL
            .into_iter()
            .zip(items)
            .map(|(category, item)| ReceiptLine {
                category,
                label: category.label().to_owned(),
                name: item.name.clone(),
                price: item.price.to_string(),
            })
            .collect();
        Ok(Receipt { lines, total: self.total_price()?.to_string() })
    }
}

#[cfg(test)]
#[path = "selection_test.rs"]
mod tests;
