//! # httpmime
//!
//! Strongly typed HTTP media types, content types, charsets, and list
//! headers.
//!
//! A [`MediaType`] knows whether a charset applies to it. Turning one into
//! a [`ContentType`] checks that the charset rules are followed, so a
//! `ContentType` can always be rendered into a valid `Content-Type`
//! header.
//!
//! ```
//! use httpmime::{charset, content_types, media_types, ContentType};
//!
//! let ct: ContentType = "text/html; charset=utf-8".parse().unwrap();
//! assert_eq!(ct, content_types::TEXT_HTML_UTF8);
//!
//! // text/plain takes a charset
//! let ct = media_types::TEXT_PLAIN.with_charset(charset::ISO_8859_1).unwrap();
//! assert_eq!(ct.to_string(), "text/plain; charset=ISO-8859-1");
//!
//! // application/json is always UTF-8
//! let ct = media_types::APPLICATION_JSON.to_content_type().unwrap();
//! assert_eq!(ct.charset(), Some(charset::UTF_8));
//! assert_eq!(ct.to_string(), "application/json");
//! ```
//!
//! ## Inspecting media types
//!
//! ```
//! use httpmime::{content_types, names};
//!
//! let ct = content_types::TEXT_CSV_UTF8;
//! let mt = ct.media_type().unwrap();
//! match (mt.main_type(), mt.sub_type()) {
//!     (names::TEXT, names::CSV) => (),
//!     (names::TEXT, _) => unreachable!("other text"),
//!     _ => unreachable!("not text"),
//! }
//! ```
//!
//! ## List headers
//!
//! ```
//! use httpmime::header::{Header, Te};
//!
//! let te = Te::parse_value("gzip, trailers").unwrap();
//! assert!(te.accepts_trailers());
//! assert_eq!(te.render_value(), "gzip, trailers");
//! ```
//!
//! ## Features
//!
//! - `serde1`: `Serialize` and `Deserialize` through the string forms.

#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub use self::charset::Charset;
pub use self::content_type::{Binary, ContentType, WithCharset, WithFixedCharset};
pub use self::error::{Error, ErrorKind};
pub use self::media_type::{MediaType, MediaTypeKind};
pub use self::params::Params;
pub use self::transfer_encoding::{Extension, TransferEncoding};

pub mod charset;
pub mod content_types;
pub mod header;
pub mod media_types;
pub mod names;

mod content_type;
mod error;
mod media_type;
mod params;
#[cfg(feature = "serde1")]
mod serde_impl;
mod transfer_encoding;
