use std::fmt::Write;

use tap::Tap;

use crate::{error::FormatError, escape::escape_quote};

pub const SEPARATOR: &str = ", ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote<'a>(&'a str);

impl<'a> Quote<'a> {
    pub fn new(value: Option<&'a str>) -> Result<Self, FormatError> {
        match value {
            Some(value) if !value.is_empty() => Ok(Self(value)),
            _ => Err(FormatError::InvalidQuote),
        }
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }

    pub fn wrap(&self, item: &str) -> String {
        let quote = self.0;
        format!("{quote}{}{quote}", escape_quote(item, quote))
    }
}

impl<'a> TryFrom<&'a str> for Quote<'a> {
    type Error = FormatError;

    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        Self::new(Some(value))
    }
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Strategy {
    Builder,
    Interpolated,
    #[default]
    Joined,
}

impl Strategy {
    /// An absent or empty sequence always yields an empty string, even when `quote` is invalid.
    /// Otherwise the quote is checked before the items.
    pub fn format_list<S: AsRef<str>>(
        self,
        items: Option<&[Option<S>]>,
        quote: Option<&str>,
    ) -> Result<String, FormatError> {
        let Some(items) = items.filter(|items| !items.is_empty()) else {
            return Ok(String::new());
        };

        let quote = Quote::new(quote)?;

        let items = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                item.as_ref()
                    .map(|item| item.as_ref())
                    .ok_or(FormatError::InvalidItem { index })
            })
            .collect::<Result<Vec<&str>, _>>()?;

        Ok(self.join(&items, quote))
    }

    pub fn quote_list<S: AsRef<str>>(self, items: &[S], quote: &str) -> Result<String, FormatError> {
        if items.is_empty() {
            return Ok(String::new());
        }

        let quote = Quote::try_from(quote)?;

        Ok(self.join(items, quote))
    }

    pub fn join<S: AsRef<str>>(self, items: &[S], quote: Quote<'_>) -> String {
        let joined = match self {
            Self::Builder => join_with_builder(items, quote),
            Self::Interpolated => join_with_interpolation(items, quote),
            Self::Joined => items
                .iter()
                .map(|item| quote.wrap(item.as_ref()))
                .collect::<Vec<_>>()
                .join(SEPARATOR),
        };

        joined.tap(|joined| {
            log::trace!(
                "joined {} items into {} bytes using the {self} strategy",
                items.len(),
                joined.len()
            )
        })
    }
}

// exact size when no item needs escaping
fn joined_capacity<S: AsRef<str>>(items: &[S], quote: &str) -> usize {
    items
        .iter()
        .map(|item| item.as_ref().len() + quote.len() * 2)
        .sum::<usize>()
        + SEPARATOR.len() * items.len().saturating_sub(1)
}

fn join_with_builder<S: AsRef<str>>(items: &[S], quote: Quote<'_>) -> String {
    let quote = quote.as_str();
    let mut joined = String::with_capacity(joined_capacity(items, quote));

    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            joined.push_str(SEPARATOR);
        }

        joined.push_str(quote);
        joined.push_str(&escape_quote(item.as_ref(), quote));
        joined.push_str(quote);
    }

    joined
}

fn join_with_interpolation<S: AsRef<str>>(items: &[S], quote: Quote<'_>) -> String {
    let quote = quote.as_str();
    let mut joined = String::with_capacity(joined_capacity(items, quote));

    for (i, item) in items.iter().enumerate() {
        let separator = if i > 0 { SEPARATOR } else { "" };
        let escaped = escape_quote(item.as_ref(), quote);

        // writing to a String cannot fail
        let _ = write!(joined, "{separator}{quote}{escaped}{quote}");
    }

    joined
}

pub fn format_list<S: AsRef<str>>(
    items: Option<&[Option<S>]>,
    quote: Option<&str>,
) -> Result<String, FormatError> {
    Strategy::default().format_list(items, quote)
}

pub fn quote_list<S: AsRef<str>>(items: &[S], quote: &str) -> Result<String, FormatError> {
    Strategy::default().quote_list(items, quote)
}
