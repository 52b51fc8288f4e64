//! Restaurant ordering core: menu catalog, one-per-category selection, and the
//! pre-filled messaging link sent on confirmation.
//!
//! DESIGN
//! ======
//! Prices are integer cents so totals are exact. The selection holds owned
//! copies of catalog items; the catalog itself is never mutated after load.
//! [`dispatch`] is the only entry point the presentation layer needs.

pub mod catalog;
pub mod dispatch;
pub mod error;
pub mod message;
pub mod selection;

pub use catalog::{Catalog, Category, Item, Price};
pub use dispatch::{OrderAction, OrderEffect, OrderState, dispatch};
pub use error::OrderError;
pub use message::{RESTAURANT_PHONE, order_link};
pub use selection::{OrderSelection, Receipt, ReceiptLine};
