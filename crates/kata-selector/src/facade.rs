use std::fmt;
use std::str::FromStr;

use kata_common::warning::warn_once;

use crate::Stringify;
use crate::builder::SelectorBuilder;
use crate::error::SelectorError;

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound
    /// selectors."
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound
    /// selectors."
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound
    /// selectors."
    SubsequentSibling,
}

impl Combinator {
    /// The token written between the two selectors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }
}

impl FromStr for Combinator {
    type Err = SelectorError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            " " => Ok(Self::Descendant),
            ">" => Ok(Self::Child),
            "+" => Ok(Self::NextSibling),
            "~" => Ok(Self::SubsequentSibling),
            other => Err(SelectorError::UnknownCombinator(other.to_string())),
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Two selectors joined by a combinator, already rendered.
///
/// Implements [`Stringify`], so it can itself be one side of a further
/// combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedSelector {
    text: String,
}

impl CombinedSelector {
    fn join(left: &str, token: &str, right: &str) -> Self {
        Self {
            text: format!("{left} {token} {right}"),
        }
    }

    /// The rendered selector text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The rendered selector text, as an owned string.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.text.clone()
    }
}

impl Stringify for CombinedSelector {
    fn stringify(&self) -> String {
        Self::stringify(self)
    }
}

impl fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Entry points for building and combining selectors.
///
/// Each category method starts a fresh [`SelectorBuilder`]. The facade keeps
/// no state: [`Selectors::combine`] returns its result instead of storing it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Selectors;

impl Selectors {
    /// Start a selector with a type selector.
    ///
    /// # Errors
    ///
    /// Never fails on a fresh builder; the `Result` mirrors [`SelectorBuilder::element`].
    pub fn element(value: &str) -> Result<SelectorBuilder, SelectorError> {
        SelectorBuilder::new().element(value)
    }

    /// Start a selector with an ID selector.
    ///
    /// # Errors
    ///
    /// Never fails on a fresh builder; the `Result` mirrors [`SelectorBuilder::id`].
    pub fn id(value: &str) -> Result<SelectorBuilder, SelectorError> {
        SelectorBuilder::new().id(value)
    }

    /// Start a selector with a class selector.
    ///
    /// # Errors
    ///
    /// Never fails on a fresh builder; the `Result` mirrors [`SelectorBuilder::class`].
    pub fn class(value: &str) -> Result<SelectorBuilder, SelectorError> {
        SelectorBuilder::new().class(value)
    }

    /// Start a selector with an attribute selector.
    ///
    /// # Errors
    ///
    /// Never fails on a fresh builder; the `Result` mirrors [`SelectorBuilder::attr`].
    pub fn attr(value: &str) -> Result<SelectorBuilder, SelectorError> {
        SelectorBuilder::new().attr(value)
    }

    /// Start a selector with a pseudo-class.
    ///
    /// # Errors
    ///
    /// Never fails on a fresh builder; the `Result` mirrors [`SelectorBuilder::pseudo_class`].
    pub fn pseudo_class(value: &str) -> Result<SelectorBuilder, SelectorError> {
        SelectorBuilder::new().pseudo_class(value)
    }

    /// Start a selector with a pseudo-element.
    ///
    /// # Errors
    ///
    /// Never fails on a fresh builder; the `Result` mirrors [`SelectorBuilder::pseudo_element`].
    pub fn pseudo_element(value: &str) -> Result<SelectorBuilder, SelectorError> {
        SelectorBuilder::new().pseudo_element(value)
    }

    /// Join two selectors as `left combinator right`, with one space on
    /// each side of the token.
    ///
    /// Any token is accepted. Tokens other than the four CSS combinators are
    /// passed through unchanged and reported once on stderr; use
    /// [`Selectors::combine_with`] to rule them out at compile time.
    #[must_use]
    pub fn combine<L, R>(left: &L, combinator: &str, right: &R) -> CombinedSelector
    where
        L: Stringify + ?Sized,
        R: Stringify + ?Sized,
    {
        if combinator.parse::<Combinator>().is_err() {
            let _ = warn_once(
                "Selector",
                &format!("non-standard combinator {combinator:?} passed through unchanged"),
            );
        }
        CombinedSelector::join(&left.stringify(), combinator, &right.stringify())
    }

    /// Join two selectors with a known CSS combinator.
    #[must_use]
    pub fn combine_with<L, R>(left: &L, combinator: Combinator, right: &R) -> CombinedSelector
    where
        L: Stringify + ?Sized,
        R: Stringify + ?Sized,
    {
        CombinedSelector::join(&left.stringify(), combinator.as_str(), &right.stringify())
    }
}
