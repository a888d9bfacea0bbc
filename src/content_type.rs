use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::media_type::kind_for;
use crate::names::{CHARSET, STAR};
use crate::params::content;
use crate::{Charset, Error, ErrorKind, MediaType, MediaTypeKind, Params};

/// A media type together with how its charset is resolved.
///
/// The variants follow [`MediaTypeKind`]. Their payloads can only be built
/// through the checked constructors, by parsing, or by using one of the
/// constants in [`content_types`](crate::content_types), so a `WithCharset`
/// always wraps a media type with an open charset, and so on.
///
/// # Example
///
/// ```
/// use httpmime::{charset, content_types, ContentType};
///
/// let ct = ContentType::parse("text/plain; charset=utf-8").unwrap();
/// assert_eq!(ct, content_types::TEXT_PLAIN_UTF8);
/// assert_eq!(ct.charset(), Some(charset::UTF_8));
/// assert_eq!(ct.to_string(), "text/plain; charset=UTF-8");
///
/// match ct {
///     ContentType::WithCharset(ref text) => assert_eq!(text.charset(), charset::UTF_8),
///     _ => unreachable!(),
/// }
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// Content that has no charset, e.g. `image/png`.
    Binary(Binary),
    /// Content whose media type implies its charset, e.g. `application/json`.
    WithFixedCharset(WithFixedCharset),
    /// Content whose media type takes a charset, along with that charset.
    WithCharset(WithCharset),
    /// No content type was given.
    ///
    /// This stands for an absent header; it renders as an empty string
    /// and parsing never produces it.
    NoContentType,
}

/// The payload of [`ContentType::Binary`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Binary {
    pub(crate) media_type: MediaType,
}

/// The payload of [`ContentType::WithFixedCharset`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WithFixedCharset {
    pub(crate) media_type: MediaType,
}

/// The payload of [`ContentType::WithCharset`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WithCharset {
    pub(crate) media_type: MediaType,
    pub(crate) charset: Charset,
}

impl Binary {
    /// The binary media type.
    #[inline]
    pub fn media_type(&self) -> &MediaType {
        &self.media_type
    }
}

impl WithFixedCharset {
    /// The media type, which has a fixed charset.
    #[inline]
    pub fn media_type(&self) -> &MediaType {
        &self.media_type
    }

    /// The charset implied by the media type.
    ///
    /// This payload is only ever built around a media type of kind
    /// [`MediaTypeKind::WithFixedCharset`], so the charset is always there.
    pub fn charset(&self) -> Charset {
        match self.media_type.fixed_charset() {
            Some(charset) => charset,
            None => unreachable!("WithFixedCharset is only built from a fixed charset media type"),
        }
    }
}

impl WithCharset {
    /// The media type, which has an open charset.
    #[inline]
    pub fn media_type(&self) -> &MediaType {
        &self.media_type
    }

    /// The charset given for the media type.
    #[inline]
    pub fn charset(&self) -> Charset {
        self.charset
    }
}

impl ContentType {
    /// Creates a binary content type.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::MediaTypeVariantMismatch`] unless
    /// `media_type` is binary, and with
    /// [`ErrorKind::InvalidContentTypeSyntax`] if it is a wildcard range.
    pub fn binary(media_type: MediaType) -> Result<ContentType, Error> {
        reject_range(&media_type)?;
        match media_type.kind() {
            MediaTypeKind::Binary => Ok(ContentType::Binary(Binary { media_type })),
            MediaTypeKind::WithFixedCharset(_) | MediaTypeKind::WithOpenCharset => {
                Err(mismatch(&media_type, "binary"))
            }
        }
    }

    /// Creates a content type whose charset is implied by `media_type`.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::MediaTypeVariantMismatch`] unless
    /// `media_type` has a fixed charset.
    pub fn with_fixed_charset(media_type: MediaType) -> Result<ContentType, Error> {
        reject_range(&media_type)?;
        match media_type.kind() {
            MediaTypeKind::WithFixedCharset(_) => {
                Ok(ContentType::WithFixedCharset(WithFixedCharset { media_type }))
            }
            MediaTypeKind::Binary | MediaTypeKind::WithOpenCharset => {
                Err(mismatch(&media_type, "fixed charset"))
            }
        }
    }

    /// Creates a content type for `media_type` in the given charset.
    ///
    /// ```
    /// use httpmime::{charset, media_types, ContentType};
    ///
    /// let ct = ContentType::with_charset(media_types::TEXT_CSV, charset::ISO_8859_1).unwrap();
    /// assert_eq!(ct.to_string(), "text/csv; charset=ISO-8859-1");
    ///
    /// let err = ContentType::with_charset(media_types::IMAGE_GIF, charset::UTF_8).unwrap_err();
    /// assert_eq!(err.kind(), httpmime::ErrorKind::MediaTypeVariantMismatch);
    /// ```
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::MediaTypeVariantMismatch`] unless
    /// `media_type` has an open charset, and with
    /// [`ErrorKind::InvalidContentTypeSyntax`] if it is a wildcard range.
    pub fn with_charset(media_type: MediaType, charset: Charset) -> Result<ContentType, Error> {
        reject_range(&media_type)?;
        match media_type.kind() {
            MediaTypeKind::WithOpenCharset => {
                Ok(ContentType::WithCharset(WithCharset { media_type, charset }))
            }
            MediaTypeKind::Binary | MediaTypeKind::WithFixedCharset(_) => {
                Err(mismatch(&media_type, "open charset"))
            }
        }
    }

    /// Parses a `Content-Type` header value.
    ///
    /// ```
    /// use httpmime::{content_types, ContentType, ErrorKind};
    ///
    /// assert_eq!(ContentType::parse("application/json").unwrap(), content_types::APPLICATION_JSON);
    ///
    /// let err = ContentType::parse("text/plain; charset=bogus-charset").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::UnknownCharset);
    ///
    /// let err = ContentType::parse("image/png; charset=utf-8").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidContentTypeSyntax);
    /// ```
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::UnknownCharset`] if the charset is not
    /// registered, and with [`ErrorKind::InvalidContentTypeSyntax`] if the
    /// value is malformed, is a wildcard, repeats `charset`, gives a charset
    /// to a media type that takes none, or leaves it out for one that
    /// needs it.
    pub fn parse(source: &str) -> Result<ContentType, Error> {
        let result = parse_content_type(source);
        if let Err(ref err) = result {
            tracing::debug!(input = source, error = %err, "failed to parse content type");
        }
        result
    }

    /// The media type, unless this is [`ContentType::NoContentType`].
    pub fn media_type(&self) -> Option<&MediaType> {
        match self {
            ContentType::Binary(ct) => Some(&ct.media_type),
            ContentType::WithFixedCharset(ct) => Some(&ct.media_type),
            ContentType::WithCharset(ct) => Some(&ct.media_type),
            ContentType::NoContentType => None,
        }
    }

    /// The charset of the content, whether implied or given.
    pub fn charset(&self) -> Option<Charset> {
        match self {
            ContentType::WithFixedCharset(ct) => Some(ct.charset()),
            ContentType::WithCharset(ct) => Some(ct.charset),
            ContentType::Binary(_) | ContentType::NoContentType => None,
        }
    }

    /// Whether this is a binary content type.
    #[inline]
    pub fn is_binary(&self) -> bool {
        match self {
            ContentType::Binary(_) => true,
            _ => false,
        }
    }

    /// Whether this is [`ContentType::NoContentType`].
    #[inline]
    pub fn is_none(&self) -> bool {
        match self {
            ContentType::NoContentType => true,
            _ => false,
        }
    }
}

fn reject_range(media_type: &MediaType) -> Result<(), Error> {
    if media_type.is_wildcard() || media_type.main_type() == STAR {
        return Err(Error::new(
            ErrorKind::InvalidContentTypeSyntax,
            media_type.to_string(),
            "a media range is not a content type",
        ));
    }
    Ok(())
}

fn mismatch(media_type: &MediaType, expected: &str) -> Error {
    Error::new(
        ErrorKind::MediaTypeVariantMismatch,
        media_type.to_string(),
        format!("expected a {} media type, found {:?}", expected, media_type.kind()),
    )
}

fn parse_content_type(source: &str) -> Result<ContentType, Error> {
    let invalid =
        |reason: Cow<'static, str>| Error::new(ErrorKind::InvalidContentTypeSyntax, source, reason);

    let parsed = httpmime_parse::parse_media_type(source)
        .map_err(|err| invalid(err.to_string().into()).with_source(err))?;
    if parsed.type_ == STAR || parsed.subtype == STAR {
        return Err(invalid("a media range is not a content type".into()));
    }

    let mut charset = None;
    let mut rest = Vec::with_capacity(parsed.params.len());
    for param in &parsed.params {
        if param.name.eq_ignore_ascii_case(CHARSET) {
            if charset.is_some() {
                return Err(invalid("charset is given more than once".into()));
            }
            charset = Some(content(param));
        } else {
            rest.push(*param);
        }
    }

    let params = Params::try_from_parsed(&rest).map_err(&invalid)?;
    let kind = kind_for(parsed.type_, parsed.subtype, charset.is_some());
    let media_type = MediaType::build(parsed.type_, parsed.subtype, params, kind)
        .map_err(&invalid)?;

    match (kind, charset) {
        (MediaTypeKind::Binary, None) => Ok(ContentType::Binary(Binary { media_type })),
        (MediaTypeKind::WithFixedCharset(_), None) => {
            Ok(ContentType::WithFixedCharset(WithFixedCharset { media_type }))
        }
        (MediaTypeKind::WithOpenCharset, Some(name)) => {
            let charset = Charset::resolve(&name).map_err(|err| {
                Error::new(
                    ErrorKind::UnknownCharset,
                    source,
                    format!("charset {:?} is not registered", name),
                )
                .with_source(err)
            })?;
            Ok(ContentType::WithCharset(WithCharset { media_type, charset }))
        }
        (MediaTypeKind::WithOpenCharset, None) => {
            Err(invalid(format!("{} needs a charset parameter", media_type).into()))
        }
        (MediaTypeKind::Binary, Some(_)) | (MediaTypeKind::WithFixedCharset(_), Some(_)) => {
            Err(invalid(format!("{} does not take a charset parameter", media_type).into()))
        }
    }
}

impl FromStr for ContentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<ContentType, Self::Err> {
        ContentType::parse(s)
    }
}

impl fmt::Debug for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let variant = match self {
            ContentType::Binary(_) => "Binary",
            ContentType::WithFixedCharset(_) => "WithFixedCharset",
            ContentType::WithCharset(_) => "WithCharset",
            ContentType::NoContentType => return f.write_str("NoContentType"),
        };
        f.debug_tuple(variant).field(&self.to_string()).finish()
    }
}

/// Renders `type/subtype`, then each parameter, then the charset when one
/// was given. Fixed charsets are implied and never rendered.
impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ContentType::Binary(ct) => fmt::Display::fmt(&ct.media_type, f),
            ContentType::WithFixedCharset(ct) => fmt::Display::fmt(&ct.media_type, f),
            ContentType::WithCharset(ct) => write!(f, "{}; {}={}", ct.media_type, CHARSET, ct.charset),
            ContentType::NoContentType => Ok(()),
        }
    }
}
