//! Typed header values.
//!
//! A [`Header`] knows its lowercase name and how to parse and render its
//! value. [`ContentType`] is a single-value header; the comma separated
//! list headers are built on [`ValueList`].
//!
//! ```
//! use httpmime::header::{Header, SecWebSocketProtocol, Te};
//! use httpmime::TransferEncoding;
//!
//! let protocols = SecWebSocketProtocol::parse_value("chat, superchat").unwrap();
//! assert_eq!(SecWebSocketProtocol::NAME, "sec-websocket-protocol");
//! assert!(protocols.contains("superchat"));
//!
//! let te = Te::parse_value("trailers, deflate;q=0.5").unwrap();
//! assert!(te.accepts(&TransferEncoding::Deflate));
//! assert_eq!(te.render_value(), "trailers, deflate; q=0.5");
//! ```

use std::fmt;
use std::slice;

use httpmime_parse::{is_token_str, split_list};

use crate::{ContentType, Error, ErrorKind, TransferEncoding};

pub use self::sec_websocket_protocol::SecWebSocketProtocol;
pub use self::te::Te;

#[macro_use]
mod macros;
mod sec_websocket_protocol;
mod te;

/// A header with a name and a typed value.
pub trait Header: Sized {
    /// The lowercase header name.
    const NAME: &'static str;

    /// Parses a header value.
    fn parse_value(value: &str) -> Result<Self, Error>;

    /// Renders the header value.
    fn render_value(&self) -> String;
}

/// A value that can appear as an item of a [`ValueList`].
pub trait ListValue: Sized + fmt::Display {
    /// Parses a single, already trimmed, list item.
    fn parse_item(item: &str) -> Result<Self, Error>;

    /// Checks a value that was built directly rather than parsed.
    fn validate(&self) -> Result<(), Error> {
        Ok(())
    }
}

/// HTTP tokens, as used by `Sec-WebSocket-Protocol`.
impl ListValue for String {
    fn parse_item(item: &str) -> Result<String, Error> {
        let value = item.to_owned();
        value.validate()?;
        Ok(value)
    }

    fn validate(&self) -> Result<(), Error> {
        if is_token_str(self) {
            Ok(())
        } else {
            Err(Error::new(
                ErrorKind::InvalidHeaderSyntax,
                self.as_str(),
                "not a token",
            ))
        }
    }
}

impl ListValue for TransferEncoding {
    fn parse_item(item: &str) -> Result<TransferEncoding, Error> {
        TransferEncoding::parse(item)
    }
}

/// An ordered, non-empty, immutable list of header values.
///
/// Duplicates are kept, and the order of the values is the order they
/// were given or parsed in.
///
/// # Example
///
/// ```
/// use httpmime::header::ValueList;
///
/// let list = ValueList::<String>::parse("b, a, b").unwrap();
/// assert_eq!(list.values(), ["b", "a", "b"]);
/// assert_eq!(list.to_string(), "b, a, b");
///
/// let err = ValueList::<String>::new(Vec::<String>::new()).unwrap_err();
/// assert_eq!(err.kind(), httpmime::ErrorKind::EmptyHeaderValue);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValueList<T> {
    values: Vec<T>,
}

impl<T: ListValue> ValueList<T> {
    /// Creates a list from the given values.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::EmptyHeaderValue`] if there are no values,
    /// and with [`ErrorKind::InvalidHeaderSyntax`] if a value is invalid.
    pub fn new<I>(values: I) -> Result<ValueList<T>, Error>
    where
        I: IntoIterator,
        I::Item: Into<T>,
    {
        let values = values.into_iter().map(Into::into).collect::<Vec<T>>();
        if values.is_empty() {
            return Err(Error::new(
                ErrorKind::EmptyHeaderValue,
                "",
                "a list header needs at least one value",
            ));
        }
        for value in &values {
            value.validate().map_err(|err| invalid_item(value.to_string(), err))?;
        }
        Ok(ValueList { values })
    }

    /// Parses a comma separated list.
    ///
    /// Commas inside quoted-strings do not separate items.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::InvalidHeaderSyntax`] if an item is empty
    /// or cannot be parsed; the item's own error is the
    /// [`source`](std::error::Error::source).
    pub fn parse(source: &str) -> Result<ValueList<T>, Error> {
        let result = parse_list(source);
        if let Err(ref err) = result {
            tracing::debug!(input = source, error = %err, "failed to parse list header value");
        }
        result
    }

    /// Returns a new list with `value` appended.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::InvalidHeaderSyntax`] if `value` is invalid.
    pub fn with_value(&self, value: impl Into<T>) -> Result<ValueList<T>, Error>
    where
        T: Clone,
    {
        let value = value.into();
        value.validate().map_err(|err| invalid_item(value.to_string(), err))?;
        let mut values = self.values.clone();
        values.push(value);
        Ok(ValueList { values })
    }
}

impl<T> ValueList<T> {
    /// The values, in order.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Iterates over the values, in order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.values.iter()
    }

    /// The number of values, which is never zero.
    #[allow(clippy::len_without_is_empty)]
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// The first value.
    #[inline]
    pub fn first(&self) -> &T {
        // never empty
        &self.values[0]
    }
}

fn parse_list<T: ListValue>(source: &str) -> Result<ValueList<T>, Error> {
    let mut values = Vec::new();
    for item in split_list(source, b',') {
        if item.is_empty() {
            return Err(Error::new(
                ErrorKind::InvalidHeaderSyntax,
                source,
                "empty list item",
            ));
        }
        let value = T::parse_item(item).map_err(|err| invalid_item(source.to_owned(), err))?;
        values.push(value);
    }
    Ok(ValueList { values })
}

fn invalid_item(input: String, err: Error) -> Error {
    Error::new(
        ErrorKind::InvalidHeaderSyntax,
        input,
        format!("invalid list item {:?}", err.input()),
    )
    .with_source(err)
}

impl<'a, T> IntoIterator for &'a ValueList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Writes the values separated by `, `.
impl<T: fmt::Display> fmt::Display for ValueList<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut iter = self.values.iter();
        if let Some(first) = iter.next() {
            fmt::Display::fmt(first, f)?;
        }
        for value in iter {
            f.write_str(", ")?;
            fmt::Display::fmt(value, f)?;
        }
        Ok(())
    }
}

impl Header for ContentType {
    const NAME: &'static str = "content-type";

    fn parse_value(value: &str) -> Result<ContentType, Error> {
        ContentType::parse(value)
    }

    fn render_value(&self) -> String {
        self.to_string()
    }
}
