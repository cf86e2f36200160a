//! Joins text items into a comma-separated list, wrapping each item in a quote string and
//! escaping any occurrence of that quote inside the item with a backslash.
//!
//! ```
//! let list = quotelist::quote_list(&["he said \"hi\"", "test"], "\"").unwrap();
//! assert_eq!(list, r#""he said \"hi\"", "test""#);
//! ```

pub mod error;
pub mod escape;
pub mod list;

pub use error::FormatError;
pub use escape::escape_quote;
pub use list::{Quote, SEPARATOR, Strategy, format_list, quote_list};
