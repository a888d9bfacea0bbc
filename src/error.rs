use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

type Source = Box<dyn StdError + Send + Sync>;

/// The category of an [`Error`].
///
/// None of these are transient: retrying the same input gives the same
/// result. Callers usually recover by falling back to a default such as
/// [`NO_CONTENT_TYPE`](crate::content_types::NO_CONTENT_TYPE).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A media type name, parameter, or kind was invalid.
    InvalidMediaTypeSyntax,
    /// A content type string could not be interpreted.
    InvalidContentTypeSyntax,
    /// A charset name is not in the registry.
    UnknownCharset,
    /// A media type with an open charset was used without one.
    CharsetRequired,
    /// A media type was given to a constructor for a different kind.
    MediaTypeVariantMismatch,
    /// A list header was created without any values.
    EmptyHeaderValue,
    /// A list header value could not be interpreted.
    InvalidHeaderSyntax,
}

impl ErrorKind {
    fn description(self) -> &'static str {
        match self {
            ErrorKind::InvalidMediaTypeSyntax => "invalid media type",
            ErrorKind::InvalidContentTypeSyntax => "invalid content type",
            ErrorKind::UnknownCharset => "unknown charset",
            ErrorKind::CharsetRequired => "charset required",
            ErrorKind::MediaTypeVariantMismatch => "media type variant mismatch",
            ErrorKind::EmptyHeaderValue => "empty header value",
            ErrorKind::InvalidHeaderSyntax => "invalid header value",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// An error building or parsing one of this crate's values.
///
/// Carries the offending input and a human readable reason, suitable for
/// logging at the boundary where the header was received.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    input: Box<str>,
    reason: Cow<'static, str>,
    source: Option<Source>,
}

impl Error {
    pub(crate) fn new(
        kind: ErrorKind,
        input: impl Into<Box<str>>,
        reason: impl Into<Cow<'static, str>>,
    ) -> Error {
        Error {
            kind,
            input: input.into(),
            reason: reason.into(),
            source: None,
        }
    }

    pub(crate) fn with_source(mut self, source: impl Into<Source>) -> Error {
        self.source = Some(source.into());
        self
    }

    /// The category of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The input that was rejected.
    #[inline]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Why the input was rejected.
    #[inline]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {} (in {:?})", self.kind, self.reason, self.input)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| &**source as &(dyn StdError + 'static))
    }
}
