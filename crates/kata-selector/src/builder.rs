use std::fmt;

use strum::EnumCount;

use crate::Stringify;
use crate::category::Category;
use crate::error::SelectorError;

/// Accumulates selector fragments in canonical category order.
///
/// Each fluent method consumes the builder and hands it back on success, so
/// chains compose with `?`:
///
/// ```
/// use kata_selector::Selectors;
///
/// let selector = Selectors::id("main")?.class("container")?.class("editable")?;
/// assert_eq!(selector.stringify(), "#main.container.editable");
/// # Ok::<(), kata_selector::SelectorError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    /// Rendered fragments, one list per category, indexed by [`Category::rank`].
    fragments: [Vec<String>; Category::COUNT],
    /// The latest category written so far.
    cursor: Option<Category>,
}

impl SelectorBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a fragment and store it.
    ///
    /// The builder is only modified once every check has passed.
    ///
    /// # Errors
    ///
    /// - [`SelectorError::Duplicate`] if `category` is a singleton that
    ///   already holds a fragment.
    /// - [`SelectorError::Order`] if a category after `category` in
    ///   canonical order has already been written.
    pub fn push(&mut self, category: Category, value: &str) -> Result<(), SelectorError> {
        // STEP 1: Singleton categories hold at most one fragment.
        if category.is_singleton() && !self.fragments[category.rank()].is_empty() {
            return Err(SelectorError::Duplicate { category });
        }

        // STEP 2: Categories are written in non-decreasing order.
        //
        // The cursor only ever moves forward, so comparing against it is
        // the same as checking every later category for fragments.
        if let Some(after) = self.cursor.filter(|&written| written > category) {
            return Err(SelectorError::Order { category, after });
        }

        // STEP 3: Mutate.
        self.fragments[category.rank()].push(category.render(value));
        self.cursor = Some(category);
        Ok(())
    }

    fn with(mut self, category: Category, value: &str) -> Result<Self, SelectorError> {
        self.push(category, value)?;
        Ok(self)
    }

    /// Set the type selector, stored verbatim.
    ///
    /// # Errors
    ///
    /// See [`SelectorBuilder::push`].
    pub fn element(self, value: &str) -> Result<Self, SelectorError> {
        self.with(Category::Element, value)
    }

    /// Set the ID selector, rendered as `#value`.
    ///
    /// # Errors
    ///
    /// See [`SelectorBuilder::push`].
    pub fn id(self, value: &str) -> Result<Self, SelectorError> {
        self.with(Category::Id, value)
    }

    /// Append a class selector, rendered as `.value`.
    ///
    /// # Errors
    ///
    /// See [`SelectorBuilder::push`].
    pub fn class(self, value: &str) -> Result<Self, SelectorError> {
        self.with(Category::Class, value)
    }

    /// Append an attribute selector, rendered as `[value]`.
    ///
    /// # Errors
    ///
    /// See [`SelectorBuilder::push`].
    pub fn attr(self, value: &str) -> Result<Self, SelectorError> {
        self.with(Category::Attribute, value)
    }

    /// Append a pseudo-class, rendered as `:value`.
    ///
    /// # Errors
    ///
    /// See [`SelectorBuilder::push`].
    pub fn pseudo_class(self, value: &str) -> Result<Self, SelectorError> {
        self.with(Category::PseudoClass, value)
    }

    /// Set the pseudo-element, rendered as `::value`.
    ///
    /// Nothing follows a pseudo-element in canonical order, so only the
    /// duplicate check can fail here.
    ///
    /// # Errors
    ///
    /// See [`SelectorBuilder::push`].
    pub fn pseudo_element(self, value: &str) -> Result<Self, SelectorError> {
        self.with(Category::PseudoElement, value)
    }

    /// Rendered fragments stored for `category`, in call order.
    #[must_use]
    pub fn fragments(&self, category: Category) -> &[String] {
        &self.fragments[category.rank()]
    }

    /// The latest category written, if any.
    #[must_use]
    pub const fn cursor(&self) -> Option<Category> {
        self.cursor
    }

    /// Whether no fragment has been written yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cursor.is_none()
    }

    /// Concatenate every fragment in canonical order, without separators.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.fragments.iter().flatten().map(String::as_str).collect()
    }
}

impl Stringify for SelectorBuilder {
    fn stringify(&self) -> String {
        Self::stringify(self)
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in self.fragments.iter().flatten() {
            f.write_str(fragment)?;
        }
        Ok(())
    }
}
