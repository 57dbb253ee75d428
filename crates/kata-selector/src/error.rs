use thiserror::Error;

use crate::category::Category;

/// Errors raised while building or combining selectors.
///
/// Every error is raised at the offending call and leaves the builder as it
/// was before that call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A singleton category (element, id, pseudo-element) was written twice.
    #[error("duplicate {category} fragment: a selector holds at most one")]
    Duplicate {
        /// The category that already holds a fragment.
        category: Category,
    },

    /// A category was written after a later category was already populated.
    #[error("{category} fragment cannot follow a {after} fragment")]
    Order {
        /// The category being written.
        category: Category,
        /// The latest category already written.
        after: Category,
    },

    /// A combinator token other than `" "`, `"+"`, `"~"` or `">"`.
    #[error("unknown combinator {0:?}")]
    UnknownCombinator(String),
}
