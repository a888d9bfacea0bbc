//! Registered charsets.
//!
//! Each constant is a [`Charset`] that [`Charset::resolve`] can return.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::{Error, ErrorKind};

/// A named character encoding.
///
/// Every `Charset` comes from a fixed registry of process-lifetime
/// constants; [`Charset::resolve`] is the only way to look one up by name.
/// Two charsets are equal when their canonical names are equal, ignoring
/// ASCII case.
///
/// # Example
///
/// ```
/// use httpmime::Charset;
///
/// let utf8 = Charset::resolve("utf-8").unwrap();
/// assert_eq!(utf8, Charset::resolve("UTF-8").unwrap());
/// assert_eq!(utf8, httpmime::charset::UTF_8);
/// assert_eq!(utf8.name(), "UTF-8");
///
/// // aliases resolve to the canonical charset
/// assert_eq!(Charset::resolve("utf8").unwrap(), utf8);
/// ```
#[derive(Clone, Copy)]
pub struct Charset {
    name: &'static str,
    aliases: &'static [&'static str],
}

macro_rules! charsets {
    ($($id:ident, $name:expr, [$($alias:expr),*];)+) => (
        $(
            #[doc = "`"]
            #[doc = $name]
            #[doc = "`"]
            pub const $id: Charset = Charset {
                name: $name,
                aliases: &[$($alias),*],
            };
        )+

        static REGISTRY: &[Charset] = &[$($id),+];
    )
}

charsets! {
    US_ASCII, "US-ASCII", ["us", "ascii", "iso646-us", "iso-ir-6", "ansi_x3.4-1968", "cp367", "ibm367", "csascii"];
    ISO_8859_1, "ISO-8859-1", ["iso_8859-1", "iso8859-1", "latin1", "l1", "iso-ir-100", "cp819", "ibm819", "csisolatin1"];
    ISO_8859_15, "ISO-8859-15", ["iso_8859-15", "iso8859-15", "latin-9", "latin9"];
    UTF_8, "UTF-8", ["utf8", "unicode-1-1-utf-8"];
    UTF_16, "UTF-16", ["utf16"];
    UTF_16BE, "UTF-16BE", ["utf16be", "x-utf-16be"];
    UTF_16LE, "UTF-16LE", ["utf16le", "x-utf-16le"];
    UTF_32, "UTF-32", ["utf32"];
    WINDOWS_1252, "windows-1252", ["cp1252", "x-cp1252"];
    SHIFT_JIS, "Shift_JIS", ["shift-jis", "sjis", "ms_kanji", "csshiftjis"];
    EUC_JP, "EUC-JP", ["eucjp", "x-euc-jp", "cseucpkdfmtjapanese"];
    GB2312, "GB2312", ["gb_2312-80", "euc-cn", "csgb2312"];
}

impl Charset {
    /// Looks up a charset by its canonical name or one of its aliases,
    /// ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorKind::UnknownCharset`] error if no registered
    /// charset goes by `name`.
    pub fn resolve(name: &str) -> Result<Charset, Error> {
        REGISTRY
            .iter()
            .find(|charset| charset.is_named(name))
            .copied()
            .ok_or_else(|| Error::new(ErrorKind::UnknownCharset, name, "not a registered charset"))
    }

    /// The canonical name, as it is rendered in a `charset` parameter.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Other names this charset is known by.
    #[inline]
    pub fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    /// Whether `name` is the canonical name or an alias of this charset.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    }

    /// Every registered charset.
    pub fn all() -> &'static [Charset] {
        REGISTRY
    }
}

impl PartialEq for Charset {
    #[inline]
    fn eq(&self, other: &Charset) -> bool {
        self.name.eq_ignore_ascii_case(other.name)
    }
}

impl Eq for Charset {}

impl Hash for Charset {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for b in self.name.bytes() {
            state.write_u8(b.to_ascii_lowercase());
        }
        state.write_u8(0xff);
    }
}

impl FromStr for Charset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Charset, Self::Err> {
        Charset::resolve(s)
    }
}

impl AsRef<str> for Charset {
    fn as_ref(&self) -> &str {
        self.name
    }
}

impl fmt::Debug for Charset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Charset").field(&self.name).finish()
    }
}

impl fmt::Display for Charset {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name)
    }
}
