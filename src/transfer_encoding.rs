use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use httpmime_parse::is_token_str;

use crate::params::content;
use crate::{Error, ErrorKind, Params};

/// A transfer coding, as listed in the `TE` and `Transfer-Encoding`
/// headers.
///
/// # Example
///
/// ```
/// use httpmime::TransferEncoding;
///
/// assert_eq!(TransferEncoding::parse("GZIP").unwrap(), TransferEncoding::Gzip);
///
/// let weighted = TransferEncoding::parse("gzip;q=0.5").unwrap();
/// assert_eq!(weighted.name(), "gzip");
/// assert_eq!(weighted.to_string(), "gzip; q=0.5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TransferEncoding {
    /// `chunked`
    Chunked,
    /// `compress`
    Compress,
    /// `deflate`
    Deflate,
    /// `gzip`
    Gzip,
    /// Any other coding, or a known coding with parameters.
    Extension(Extension),
}

/// A transfer coding with a name and parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Extension {
    name: String,
    params: Params,
}

impl Extension {
    /// The lowercase coding name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The coding parameters.
    #[inline]
    pub fn params(&self) -> &Params {
        &self.params
    }
}

impl TransferEncoding {
    /// Builds a transfer coding from a name and parameters.
    ///
    /// Without parameters, a known name gives the matching variant.
    ///
    /// ```
    /// use httpmime::TransferEncoding;
    ///
    /// assert_eq!(TransferEncoding::extension("Chunked", &[]).unwrap(), TransferEncoding::Chunked);
    ///
    /// let trailers = TransferEncoding::extension("trailers", &[]).unwrap();
    /// assert_eq!(trailers.to_string(), "trailers");
    /// ```
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::InvalidHeaderSyntax`] if the name is not a
    /// token or a parameter is invalid.
    pub fn extension(name: &str, params: &[(&str, &str)]) -> Result<TransferEncoding, Error> {
        let params = Params::try_from_pairs(params.iter().map(|&(n, v)| (n, Cow::Borrowed(v))))
            .map_err(|reason| Error::new(ErrorKind::InvalidHeaderSyntax, name, reason))?;
        build(name, params).map_err(|reason| Error::new(ErrorKind::InvalidHeaderSyntax, name, reason))
    }

    /// Parses a single transfer coding, such as `gzip` or `deflate;q=0.5`.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::InvalidHeaderSyntax`] on malformed input.
    pub fn parse(source: &str) -> Result<TransferEncoding, Error> {
        let invalid =
            |reason: Cow<'static, str>| Error::new(ErrorKind::InvalidHeaderSyntax, source, reason);

        let (name, parsed) = httpmime_parse::parse_token_with_params(source)
            .map_err(|err| invalid(err.to_string().into()).with_source(err))?;
        let params = Params::try_from_pairs(parsed.iter().map(|param| (param.name, content(param))))
            .map_err(&invalid)?;
        build(name, params).map_err(&invalid)
    }

    /// The lowercase coding name.
    pub fn name(&self) -> &str {
        match self {
            TransferEncoding::Chunked => "chunked",
            TransferEncoding::Compress => "compress",
            TransferEncoding::Deflate => "deflate",
            TransferEncoding::Gzip => "gzip",
            TransferEncoding::Extension(ext) => &ext.name,
        }
    }

    /// The coding parameters, if this is an extension.
    pub fn params(&self) -> Option<&Params> {
        match self {
            TransferEncoding::Extension(ext) => Some(&ext.params),
            _ => None,
        }
    }
}

fn build(name: &str, params: Params) -> Result<TransferEncoding, Cow<'static, str>> {
    if !is_token_str(name) {
        return Err(format!("transfer coding {:?} is not a token", name).into());
    }
    let name = name.to_ascii_lowercase();
    if params.is_empty() {
        match name.as_str() {
            "chunked" => return Ok(TransferEncoding::Chunked),
            "compress" => return Ok(TransferEncoding::Compress),
            "deflate" => return Ok(TransferEncoding::Deflate),
            "gzip" => return Ok(TransferEncoding::Gzip),
            _ => (),
        }
    }
    Ok(TransferEncoding::Extension(Extension { name, params }))
}

impl FromStr for TransferEncoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<TransferEncoding, Self::Err> {
        TransferEncoding::parse(s)
    }
}

impl fmt::Display for TransferEncoding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TransferEncoding::Extension(ext) => write!(f, "{}{}", ext.name, ext.params),
            known => f.write_str(known.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names() {
        assert_eq!(TransferEncoding::parse("chunked").unwrap(), TransferEncoding::Chunked);
        assert_eq!(TransferEncoding::parse("Compress").unwrap(), TransferEncoding::Compress);
        assert_eq!(TransferEncoding::parse("DEFLATE").unwrap(), TransferEncoding::Deflate);
        assert_eq!(TransferEncoding::parse("gzip").unwrap(), TransferEncoding::Gzip);
    }

    #[test]
    fn test_known_name_with_params_is_extension() {
        let te = TransferEncoding::parse("deflate ; q=0.5").unwrap();
        match te {
            TransferEncoding::Extension(ref ext) => {
                assert_eq!(ext.name(), "deflate");
                assert_eq!(ext.params().get("q"), Some("0.5"));
            }
            _ => panic!("expected an extension, got {:?}", te),
        }
        assert_eq!(te.to_string(), "deflate; q=0.5");
        assert_ne!(te, TransferEncoding::Deflate);
    }

    #[test]
    fn test_unknown_names() {
        let te = TransferEncoding::parse("Trailers").unwrap();
        assert_eq!(te.name(), "trailers");
        assert_eq!(te.params().map(Params::len), Some(0));
        assert_eq!(te.to_string(), "trailers");
    }

    #[test]
    fn test_extension_constructor() {
        assert_eq!(TransferEncoding::extension("GZIP", &[]).unwrap(), TransferEncoding::Gzip);

        let te = TransferEncoding::extension("x-custom", &[("level", "a b")]).unwrap();
        assert_eq!(te.to_string(), "x-custom; level=\"a b\"");
        assert_eq!(TransferEncoding::parse(&te.to_string()).unwrap(), te);

        let err = TransferEncoding::extension("no good", &[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidHeaderSyntax);
        TransferEncoding::extension("x", &[("a", "1"), ("A", "1")]).unwrap_err();
    }

    #[test]
    fn test_parse_errors() {
        for bad in &["", "gzip deflate", "gzip; q", ";q=1", "gzip; q=\"open"] {
            let err = TransferEncoding::parse(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidHeaderSyntax, "{:?}", bad);
        }
    }
}
