//! Order reducer. One action in, render effects out.
//!
//! DESIGN
//! ======
//! `OrderState` pairs the read-only catalog with the mutable selection. The
//! presentation layer forwards option clicks and the order/confirm/cancel
//! buttons as `OrderAction` values and applies the returned `OrderEffect`
//! list. Anything that fails becomes a single `Alert`; state is unchanged.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::{Catalog, Category, Item};
use crate::error::OrderError;
use crate::message::order_link;
use crate::selection::{OrderSelection, Receipt};

/// Label shown on the order button once every category is chosen.
pub const ORDER_BUTTON_LABEL: &str = "Fazer pedido";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderState {
    pub catalog: Catalog,
    pub selection: OrderSelection,
}

impl OrderState {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog, selection: OrderSelection::new() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum OrderAction {
    /// Initial render of the three option lists.
    Load,
    Select { category: Category, name: String },
    /// The order button: open the confirmation overlay.
    RequestOrder,
    /// The confirm button inside the overlay.
    Confirm,
    /// The cancel button inside the overlay.
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum OrderEffect {
    RenderOptions { category: Category, items: Vec<Item> },
    /// Mark `name` as the chosen option, clearing any other mark in `category`.
    HighlightOption { category: Category, name: String },
    EnableOrderButton { label: String },
    ShowConfirmation { receipt: Receipt },
    HideConfirmation,
    /// Open `url` in a new browsing context.
    OpenLink { url: String },
    Alert { code: String, message: String },
}

impl From<OrderError> for OrderEffect {
    fn from(error: OrderError) -> Self {
        Self::Alert { code: error.error_code().to_owned(), message: error.to_string() }
    }
}

/// Apply one action and return the effects to render.
pub fn dispatch(state: &mut OrderState, action: OrderAction) -> Vec<OrderEffect> {
    match apply(state, action) {
        Ok(effects) => effects,
        Err(error) => {
            warn!(code = error.error_code(), %error, "order action rejected");
            vec![error.into()]
        }
    }
}

fn apply(state: &mut OrderState, action: OrderAction) -> Result<Vec<OrderEffect>, OrderError> {
    let effects = match action {
        OrderAction::Load => Category::ALL
            .into_iter()
            .map(|category| OrderEffect::RenderOptions {
                category,
                items: state.catalog.items(category).to_vec(),
            })
            .collect(),
        OrderAction::Select { category, name } => {
            let item = state.catalog.find(category, &name)?.clone();
            state.selection.select(category, item);
            debug!(%category, name = %name, complete = state.selection.is_complete(), "option selected");

            let mut effects = vec![OrderEffect::HighlightOption { category, name }];
            if state.selection.is_complete() {
                effects.push(OrderEffect::EnableOrderButton { label: ORDER_BUTTON_LABEL.to_owned() });
            }
            effects
        }
        OrderAction::RequestOrder => {
            vec![OrderEffect::ShowConfirmation { receipt: state.selection.receipt()? }]
        }
        OrderAction::Confirm => {
            let url = order_link(&state.selection)?;
            debug!(url = %url, "order confirmed");
            vec![OrderEffect::OpenLink { url }]
        }
        OrderAction::Cancel => vec![OrderEffect::HideConfirmation],
    };
    Ok(effects)
}

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod tests;
