//! Internal syntax layer for the `httpmime` crate.
//!
//! Everything in here works on borrowed slices of the input. Giving those
//! slices meaning (lowercasing, unquoting, charset lookup, catalog lookup) is
//! left to `httpmime`.

use std::error::Error;
use std::fmt;

/// Inputs longer than this are rejected before any scanning happens.
pub const MAX_LEN: usize = std::u16::MAX as usize;

/// A syntax error, with the byte offset where scanning stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing but whitespace was found.
    Empty,
    /// A slash (`/`) was missing between the type and subtype.
    MissingSlash,
    /// An equals sign (`=`) was missing between a parameter and its value.
    MissingEqual,
    /// A quoted-string was not terminated.
    MissingQuote,
    /// A token was expected but the input ended.
    MissingToken {
        /// Offset of the end of input.
        pos: usize,
    },
    /// A byte that is not allowed at this position.
    InvalidToken {
        /// Offset of the offending byte.
        pos: usize,
        /// The offending byte.
        byte: u8,
    },
    /// The input is longer than [`MAX_LEN`].
    TooLong,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseError::Empty => f.write_str("the value is empty"),
            ParseError::MissingSlash => {
                f.write_str("a slash (/) was missing between the type and subtype")
            }
            ParseError::MissingEqual => {
                f.write_str("an equals sign (=) was missing between a parameter and its value")
            }
            ParseError::MissingQuote => f.write_str("a quote (\") was missing from a parameter value"),
            ParseError::MissingToken { pos } => write!(f, "expected a token at position {}", pos),
            ParseError::InvalidToken { pos, byte } => {
                write!(f, "invalid token, {:X} at position {}", byte, pos)
            }
            ParseError::TooLong => f.write_str("the string is too long"),
        }
    }
}

impl Error for ParseError {}

/// A `name=value` parameter.
///
/// `value` is the raw representation: a quoted-string keeps its surrounding
/// quotes and quoted-pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

impl<'a> Param<'a> {
    /// Whether the value was written as a quoted-string.
    #[inline]
    pub fn is_quoted(&self) -> bool {
        self.value.as_bytes().first() == Some(&b'"')
    }
}

/// The pieces of `type "/" subtype *( OWS ";" OWS parameter )`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaType<'a> {
    pub type_: &'a str,
    pub subtype: &'a str,
    pub params: Vec<Param<'a>>,
}

/// Parses a media type, as found in a `Content-Type` header.
///
/// Leading and trailing whitespace is allowed, as is whitespace around each
/// `;`. Empty parameters (`text/plain;`) are skipped.
pub fn parse_media_type(s: &str) -> Result<MediaType<'_>, ParseError> {
    let mut cursor = Cursor::start(s)?;

    let type_ = cursor.token()?;
    if !cursor.eat(b'/') {
        return Err(match cursor.peek() {
            None => ParseError::MissingSlash,
            Some(byte) => ParseError::InvalidToken {
                pos: cursor.pos,
                byte,
            },
        });
    }
    let subtype = cursor.token()?;
    let params = cursor.params()?;

    Ok(MediaType {
        type_,
        subtype,
        params,
    })
}

/// Parses `token *( OWS ";" OWS parameter )`, the shape of a transfer coding.
pub fn parse_token_with_params(s: &str) -> Result<(&str, Vec<Param<'_>>), ParseError> {
    let mut cursor = Cursor::start(s)?;
    let token = cursor.token()?;
    let params = cursor.params()?;
    Ok((token, params))
}

/// Splits a list header value on `sep`, ignoring separators inside
/// quoted-strings.
///
/// Every item is trimmed of surrounding whitespace. Empty items are
/// yielded as empty strings, so `""` yields a single empty item.
pub fn split_list(s: &str, sep: u8) -> Split<'_> {
    Split {
        source: s,
        pos: 0,
        sep,
        done: false,
    }
}

/// Iterator returned by [`split_list`].
#[derive(Debug, Clone)]
pub struct Split<'a> {
    source: &'a str,
    pos: usize,
    sep: u8,
    done: bool,
}

impl<'a> Iterator for Split<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.done {
            return None;
        }

        let bytes = self.source.as_bytes();
        let start = self.pos;
        let mut end = start;
        let mut in_quotes = false;
        let mut escaped = false;

        while end < bytes.len() {
            let b = bytes[end];
            if in_quotes {
                if escaped {
                    escaped = false;
                } else if b == b'\\' {
                    escaped = true;
                } else if b == b'"' {
                    in_quotes = false;
                }
            } else if b == b'"' {
                in_quotes = true;
            } else if b == self.sep {
                break;
            }
            end += 1;
        }

        if end < bytes.len() {
            self.pos = end + 1;
        } else {
            self.done = true;
        }

        Some(trim_ows(&self.source[start..end]))
    }
}

/// Trims optional whitespace (SP / HTAB) from both ends.
#[inline]
pub fn trim_ows(s: &str) -> &str {
    s.trim_matches(|c| c == ' ' || c == '\t')
}

struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn start(source: &'a str) -> Result<Cursor<'a>, ParseError> {
        if source.len() > MAX_LEN {
            return Err(ParseError::TooLong);
        }
        let mut cursor = Cursor { source, pos: 0 };
        cursor.skip_ows();
        if cursor.peek().is_none() {
            return Err(ParseError::Empty);
        }
        Ok(cursor)
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn skip_ows(&mut self) {
        while let Some(b' ') | Some(b'\t') = self.peek() {
            self.pos += 1;
        }
    }

    fn token(&mut self) -> Result<&'a str, ParseError> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !is_token(c) {
                break;
            }
            self.pos += 1;
        }
        if self.pos == start {
            return Err(match self.peek() {
                None => ParseError::MissingToken { pos: self.pos },
                Some(byte) => ParseError::InvalidToken {
                    pos: self.pos,
                    byte,
                },
            });
        }
        Ok(&self.source[start..self.pos])
    }

    fn quoted_string(&mut self) -> Result<&'a str, ParseError> {
        let start = self.pos;
        // opening quote
        self.pos += 1;
        loop {
            match self.peek() {
                None => return Err(ParseError::MissingQuote),
                Some(b'"') => {
                    self.pos += 1;
                    return Ok(&self.source[start..self.pos]);
                }
                Some(b'\\') => {
                    self.pos += 1;
                    match self.peek() {
                        None => return Err(ParseError::MissingQuote),
                        Some(c) if is_restricted_quoted_char(c) => self.pos += 1,
                        Some(byte) => {
                            return Err(ParseError::InvalidToken {
                                pos: self.pos,
                                byte,
                            })
                        }
                    }
                }
                Some(c) if is_restricted_quoted_char(c) => self.pos += 1,
                Some(byte) => {
                    return Err(ParseError::InvalidToken {
                        pos: self.pos,
                        byte,
                    })
                }
            }
        }
    }

    fn params(&mut self) -> Result<Vec<Param<'a>>, ParseError> {
        let mut params = Vec::new();
        loop {
            self.skip_ows();
            match self.peek() {
                None => return Ok(params),
                Some(b';') => self.pos += 1,
                Some(byte) => {
                    return Err(ParseError::InvalidToken {
                        pos: self.pos,
                        byte,
                    })
                }
            }

            self.skip_ows();
            match self.peek() {
                None | Some(b';') => continue,
                Some(_) => (),
            }

            let name = self.token()?;
            if !self.eat(b'=') {
                return Err(match self.peek() {
                    None | Some(b';') => ParseError::MissingEqual,
                    Some(byte) => ParseError::InvalidToken {
                        pos: self.pos,
                        byte,
                    },
                });
            }

            let value = if self.peek() == Some(b'"') {
                self.quoted_string()?
            } else {
                self.token()?
            };

            params.push(Param { name, value });
        }
    }
}

// From [RFC 9110](https://www.rfc-editor.org/rfc/rfc9110#section-5.6.2):
//
// >     token = 1*tchar
// >     tchar = "!" / "#" / "$" / "%" / "&" / "'" / "*" / "+" / "-" / "." /
// >        "^" / "_" / "`" / "|" / "~" / DIGIT / ALPHA

macro_rules! byte_map {
    ($($flag:expr,)*) => ([
        $($flag != 0,)*
    ])
}

static TOKEN_MAP: [bool; 256] = byte_map![
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 1, 1, 1, 1, 1, 0, 0, 1, 1, 0, 1, 1, 0,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 0, 1, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

/// Whether `c` is a `tchar`.
#[inline]
pub fn is_token(c: u8) -> bool {
    TOKEN_MAP[c as usize]
}

/// Whether `s` is a non-empty `token`.
pub fn is_token_str(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(is_token)
}

/// Whether `c` may appear inside a quoted-string, either bare or as the
/// second half of a quoted-pair.
#[inline]
pub fn is_restricted_quoted_char(c: u8) -> bool {
    c == 9 || (c > 31 && c != 127)
}
