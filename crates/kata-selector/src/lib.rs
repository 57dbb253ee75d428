//! Fluent construction of CSS-like selector strings.
//!
//! # Scope
//!
//! This crate implements:
//! - **Fragment categories** ([Selectors Level 4 § 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, ID, class, attribute, pseudo-class and pseudo-element fragments
//!   - A fixed canonical order between the categories
//!
//! - **Selector builder**
//!   - Singleton categories (type, ID, pseudo-element) reject duplicates
//!   - Categories must be written in non-decreasing canonical order
//!   - Rejected calls leave the builder untouched
//!
//! - **Facade and combinators** ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators))
//!   - One entry point per category
//!   - Joining two rendered selectors with a combinator token
//!
//! # Not Implemented
//!
//! - Parsing or validating real CSS. Fragment values are stored verbatim.

/// Selector builder with ordering and uniqueness checks.
pub mod builder;
/// Fragment categories and their canonical order.
pub mod category;
/// Error types for selector construction.
pub mod error;
/// Facade entry points and selector combination.
pub mod facade;

pub use builder::SelectorBuilder;
pub use category::Category;
pub use error::SelectorError;
pub use facade::{CombinedSelector, Combinator, Selectors};

/// Anything that can render itself as selector text.
///
/// Both ends of [`Selectors::combine`] only need this capability, so built
/// chains and previously combined selectors can be mixed freely.
pub trait Stringify {
    /// Render the selector text.
    fn stringify(&self) -> String;
}
