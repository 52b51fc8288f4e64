use crate::catalog::Category;

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    /// Totals and summaries need one item in every category.
    #[error("order is incomplete: no {missing} selected")]
    Incomplete { missing: Category },
    #[error("no {category} named {name:?} on the menu")]
    UnknownItem { category: Category, name: String },
    #[error("invalid price: {0}")]
    InvalidPrice(f64),
    #[error("invalid catalog: {0}")]
    Catalog(#[from] serde_json::Error),
}

impl OrderError {
    /// Grepable code carried on alert effects.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Incomplete { .. } => "E_ORDER_INCOMPLETE",
            Self::UnknownItem { .. } => "E_UNKNOWN_ITEM",
            Self::InvalidPrice(_) => "E_INVALID_PRICE",
            Self::Catalog(_) => "E_CATALOG",
        }
    }
}
