use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use httpmime_parse::is_token_str;

use crate::names::{CHARSET, STAR, TEXT};
use crate::{media_types, Charset, ContentType, Error, ErrorKind, Params};

/// Which charset rules apply to a [`MediaType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaTypeKind {
    /// No charset ever applies, e.g. `image/png`.
    Binary,
    /// The type implies exactly one charset, e.g. `application/json` is
    /// always UTF-8.
    WithFixedCharset(Charset),
    /// A charset is required, and any charset may be used, e.g.
    /// `text/plain`.
    WithOpenCharset,
}

/// A media type: a main type, a sub type, parameters, and the charset
/// rules that apply to it.
///
/// Values are immutable, every "modifier" returns a new `MediaType`.
/// Names are stored lowercase.
///
/// Two media types are equal when their kind, names and parameters are
/// equal. Parameter order is ignored. Use
/// [`is_compatible`](MediaType::is_compatible) to compare without
/// parameters.
#[derive(Clone)]
pub struct MediaType {
    main_type: Cow<'static, str>,
    sub_type: Cow<'static, str>,
    params: Params,
    kind: MediaTypeKind,
}

impl MediaType {
    pub(crate) const fn predefined(
        main_type: &'static str,
        sub_type: &'static str,
        kind: MediaTypeKind,
    ) -> MediaType {
        MediaType {
            main_type: Cow::Borrowed(main_type),
            sub_type: Cow::Borrowed(sub_type),
            params: Params::new(),
            kind,
        }
    }

    /// Builds a media type from its parts.
    ///
    /// # Example
    ///
    /// ```
    /// use httpmime::{MediaType, MediaTypeKind};
    ///
    /// let png = MediaType::for_name("image", "png", &[], MediaTypeKind::Binary).unwrap();
    /// assert_eq!(png, httpmime::media_types::IMAGE_PNG);
    ///
    /// let custom = MediaType::for_name(
    ///     "Application",
    ///     "vnd.example+json",
    ///     &[("version", "2")],
    ///     MediaTypeKind::Binary,
    /// ).unwrap();
    /// assert_eq!(custom.to_string(), "application/vnd.example+json; version=2");
    /// ```
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::InvalidMediaTypeSyntax`] if a name is not an
    /// HTTP token, a parameter is invalid or named `charset`, or `kind`
    /// disagrees with a predefined media type of the same name. Types that
    /// are not predefined may have an open charset; otherwise `text` types
    /// cannot be binary and none can have a fixed charset.
    pub fn for_name(
        main_type: &str,
        sub_type: &str,
        params: &[(&str, &str)],
        kind: MediaTypeKind,
    ) -> Result<MediaType, Error> {
        let invalid = |reason: Cow<'static, str>| {
            Error::new(
                ErrorKind::InvalidMediaTypeSyntax,
                format!("{}/{}", main_type, sub_type),
                reason,
            )
        };

        let params = Params::try_from_pairs(params.iter().map(|&(n, v)| (n, Cow::Borrowed(v))))
            .map_err(&invalid)?;
        let media_type = MediaType::build(main_type, sub_type, params, kind).map_err(&invalid)?;

        // A kind that parsing would not infer from the name cannot be
        // rendered and read back. An open charset is always rendered.
        if media_types::lookup(main_type, sub_type).is_none()
            && kind != MediaTypeKind::WithOpenCharset
            && kind != kind_for(main_type, sub_type, false)
        {
            return Err(invalid(
                format!(
                    "{}/{} is not predefined and cannot be {:?}",
                    media_type.main_type, media_type.sub_type, kind
                )
                .into(),
            ));
        }
        Ok(media_type)
    }

    /// Parses a media type, such as `text/html` or
    /// `multipart/form-data; boundary=x`.
    ///
    /// The kind is taken from the predefined catalog. Other `text` types
    /// have an open charset, everything else is binary.
    ///
    /// # Example
    ///
    /// ```
    /// use httpmime::{MediaType, MediaTypeKind};
    ///
    /// let mt = MediaType::parse("TEXT/Plain").unwrap();
    /// assert_eq!(mt, httpmime::media_types::TEXT_PLAIN);
    ///
    /// let mt = MediaType::parse("application/x-thing").unwrap();
    /// assert_eq!(mt.kind(), MediaTypeKind::Binary);
    /// ```
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::InvalidMediaTypeSyntax`] on malformed input
    /// and on a `charset` parameter.
    pub fn parse(source: &str) -> Result<MediaType, Error> {
        let result = parse_media_type(source);
        if let Err(ref err) = result {
            tracing::debug!(input = source, error = %err, "failed to parse media type");
        }
        result
    }

    /// Validates and normalizes the parts of a media type.
    pub(crate) fn build(
        main_type: &str,
        sub_type: &str,
        params: Params,
        kind: MediaTypeKind,
    ) -> Result<MediaType, Cow<'static, str>> {
        if !is_token_str(main_type) {
            return Err(format!("type {:?} is not a token", main_type).into());
        }
        if !is_token_str(sub_type) {
            return Err(format!("subtype {:?} is not a token", sub_type).into());
        }
        if main_type == STAR && sub_type != STAR {
            return Err("a wildcard type needs a wildcard subtype".into());
        }
        if params.get(CHARSET).is_some() {
            return Err("charset is not a media type parameter".into());
        }

        if let Some(known) = media_types::lookup(main_type, sub_type) {
            if known.kind != kind {
                return Err(format!("{} is predefined as {:?}, not {:?}", known, known.kind, kind).into());
            }
            return Ok(MediaType {
                main_type: known.main_type.clone(),
                sub_type: known.sub_type.clone(),
                params,
                kind,
            });
        }

        Ok(MediaType {
            main_type: Cow::Owned(main_type.to_ascii_lowercase()),
            sub_type: Cow::Owned(sub_type.to_ascii_lowercase()),
            params,
            kind,
        })
    }

    /// The top level media type, e.g. `text` for `text/plain`.
    #[inline]
    pub fn main_type(&self) -> &str {
        &self.main_type
    }

    /// The sub type, e.g. `svg+xml` for `image/svg+xml`.
    #[inline]
    pub fn sub_type(&self) -> &str {
        &self.sub_type
    }

    /// The structured syntax suffix, e.g. `json` for
    /// `application/problem+json`.
    ///
    /// ```
    /// assert_eq!(httpmime::media_types::APPLICATION_PROBLEM_JSON.suffix(), Some("json"));
    /// assert_eq!(httpmime::media_types::TEXT_PLAIN.suffix(), None);
    /// ```
    pub fn suffix(&self) -> Option<&str> {
        let plus = self.sub_type.rfind('+')?;
        match &self.sub_type[plus + 1..] {
            "" => None,
            suffix => Some(suffix),
        }
    }

    /// The parameters, in the order they were given.
    #[inline]
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Looks up a parameter by name, ignoring ASCII case.
    #[inline]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    /// The charset rules of this media type.
    #[inline]
    pub fn kind(&self) -> MediaTypeKind {
        self.kind
    }

    /// Whether no charset applies to this media type.
    #[inline]
    pub fn is_binary(&self) -> bool {
        self.kind == MediaTypeKind::Binary
    }

    /// The charset implied by this media type, if it has a fixed one.
    pub fn fixed_charset(&self) -> Option<Charset> {
        match self.kind {
            MediaTypeKind::WithFixedCharset(charset) => Some(charset),
            MediaTypeKind::Binary | MediaTypeKind::WithOpenCharset => None,
        }
    }

    /// Whether the sub type is the `*` wildcard.
    #[inline]
    pub fn is_wildcard(&self) -> bool {
        self.sub_type == STAR
    }

    /// Returns a copy of this media type with its parameters replaced.
    ///
    /// ```
    /// let mt = httpmime::media_types::MULTIPART_FORM_DATA
    ///     .with_params(&[("boundary", "AaB03x")])
    ///     .unwrap();
    /// assert_eq!(mt.to_string(), "multipart/form-data; boundary=AaB03x");
    /// assert!(httpmime::media_types::MULTIPART_FORM_DATA.params().is_empty());
    /// ```
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::InvalidMediaTypeSyntax`] on an invalid or
    /// `charset` parameter.
    pub fn with_params(&self, params: &[(&str, &str)]) -> Result<MediaType, Error> {
        let invalid = |reason: Cow<'static, str>| {
            Error::new(ErrorKind::InvalidMediaTypeSyntax, self.to_string(), reason)
        };

        let params = Params::try_from_pairs(params.iter().map(|&(n, v)| (n, Cow::Borrowed(v))))
            .map_err(&invalid)?;
        if params.get(CHARSET).is_some() {
            return Err(invalid("charset is not a media type parameter".into()));
        }

        Ok(MediaType {
            params,
            ..self.clone()
        })
    }

    /// Turns this media type into a [`ContentType`] without a charset.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::CharsetRequired`] if this media type has an
    /// open charset; use [`with_charset`](MediaType::with_charset) for those.
    pub fn to_content_type(&self) -> Result<ContentType, Error> {
        match self.kind {
            MediaTypeKind::Binary => ContentType::binary(self.clone()),
            MediaTypeKind::WithFixedCharset(_) => ContentType::with_fixed_charset(self.clone()),
            MediaTypeKind::WithOpenCharset => Err(Error::new(
                ErrorKind::CharsetRequired,
                self.to_string(),
                "a charset must be given for this media type",
            )),
        }
    }

    /// Turns this media type into a [`ContentType`] with the given charset.
    ///
    /// ```
    /// use httpmime::{charset, content_types, media_types};
    ///
    /// let ct = media_types::TEXT_PLAIN.with_charset(charset::UTF_8).unwrap();
    /// assert_eq!(ct, content_types::TEXT_PLAIN_UTF8);
    /// assert_eq!(ct.charset(), Some(charset::UTF_8));
    /// ```
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::MediaTypeVariantMismatch`] unless this media
    /// type has an open charset.
    pub fn with_charset(&self, charset: Charset) -> Result<ContentType, Error> {
        ContentType::with_charset(self.clone(), charset)
    }

    /// Checks if this media type, used as a range, matches `other`.
    ///
    /// `*/*` matches everything, and a wildcard sub type matches every sub
    /// type of the same main type. Parameters are not considered.
    ///
    /// ```
    /// use httpmime::{media_types, MediaType};
    ///
    /// let text = MediaType::parse("text/*").unwrap();
    /// assert!(text.matches(&media_types::TEXT_HTML));
    /// assert!(!text.matches(&media_types::IMAGE_PNG));
    ///
    /// let any = MediaType::parse("*/*").unwrap();
    /// assert!(any.matches(&media_types::IMAGE_PNG));
    /// ```
    pub fn matches(&self, other: &MediaType) -> bool {
        if self.main_type == STAR {
            return true;
        }
        if self.main_type != other.main_type {
            return false;
        }
        self.sub_type == STAR || self.sub_type == other.sub_type
    }

    /// Whether `other` is the same media type, ignoring parameters.
    pub fn is_compatible(&self, other: &MediaType) -> bool {
        self.kind == other.kind
            && self.main_type == other.main_type
            && self.sub_type == other.sub_type
    }
}

/// The kind to use for a type that may not be in the catalog.
pub(crate) fn kind_for(main_type: &str, sub_type: &str, has_charset: bool) -> MediaTypeKind {
    if let Some(known) = media_types::lookup(main_type, sub_type) {
        return known.kind;
    }
    if has_charset || main_type.eq_ignore_ascii_case(TEXT) {
        MediaTypeKind::WithOpenCharset
    } else {
        MediaTypeKind::Binary
    }
}

fn parse_media_type(source: &str) -> Result<MediaType, Error> {
    let invalid =
        |reason: Cow<'static, str>| Error::new(ErrorKind::InvalidMediaTypeSyntax, source, reason);

    let parsed = httpmime_parse::parse_media_type(source)
        .map_err(|err| invalid(err.to_string().into()).with_source(err))?;
    let params = Params::try_from_parsed(&parsed.params).map_err(&invalid)?;
    let kind = kind_for(parsed.type_, parsed.subtype, false);

    MediaType::build(parsed.type_, parsed.subtype, params, kind).map_err(&invalid)
}

impl PartialEq for MediaType {
    fn eq(&self, other: &MediaType) -> bool {
        self.is_compatible(other) && self.params == other.params
    }
}

impl Eq for MediaType {}

impl Hash for MediaType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.main_type.hash(state);
        self.sub_type.hash(state);
        self.kind.hash(state);
        self.params.hash(state);
    }
}

impl FromStr for MediaType {
    type Err = Error;

    fn from_str(s: &str) -> Result<MediaType, Self::Err> {
        MediaType::parse(s)
    }
}

impl fmt::Debug for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("MediaType")
            .field(&self.to_string())
            .field(&self.kind)
            .finish()
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}{}", self.main_type, self.sub_type, self.params)
    }
}

#[cfg(test)]
mod tests {
    use crate::charset::{UTF_16, UTF_8};
    use crate::media_types::*;
    use crate::names::{APPLICATION, JSON, PLAIN, TEXT};
    use crate::*;

    #[test]
    fn test_for_name_normalizes() {
        let mt = MediaType::for_name("TEXT", "X-Custom", &[("Foo", "BAR")], MediaTypeKind::WithOpenCharset)
            .unwrap();
        assert_eq!(mt.main_type(), "text");
        assert_eq!(mt.sub_type(), "x-custom");
        assert_eq!(mt.param("foo"), Some("BAR"));
        assert_eq!(mt.to_string(), "text/x-custom; foo=BAR");
    }

    #[test]
    fn test_for_name_predefined() {
        let png = MediaType::for_name("image", "png", &[], MediaTypeKind::Binary).unwrap();
        assert_eq!(png, IMAGE_PNG);

        let json = MediaType::for_name("application", "json", &[], MediaTypeKind::WithFixedCharset(UTF_8))
            .unwrap();
        assert_eq!(json, APPLICATION_JSON);
    }

    #[test]
    fn test_for_name_rejects_conflicting_kind() {
        let err = MediaType::for_name("image", "png", &[], MediaTypeKind::WithOpenCharset).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidMediaTypeSyntax);
        assert_eq!(err.input(), "image/png");

        MediaType::for_name("application", "json", &[], MediaTypeKind::WithFixedCharset(UTF_16))
            .unwrap_err();
        MediaType::for_name("text", "plain", &[], MediaTypeKind::Binary).unwrap_err();
    }

    #[test]
    fn test_for_name_unregistered_kinds() {
        let fixed = MediaTypeKind::WithFixedCharset(UTF_8);
        let err = MediaType::for_name("application", "x-thing", &[], fixed).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidMediaTypeSyntax);
        assert_eq!(err.input(), "application/x-thing");

        let err = MediaType::for_name("text", "x-foo", &[], MediaTypeKind::Binary).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidMediaTypeSyntax);

        MediaType::for_name("application", "x-thing", &[], MediaTypeKind::Binary).unwrap();
        MediaType::for_name("application", "x-thing", &[], MediaTypeKind::WithOpenCharset).unwrap();
        MediaType::for_name("text", "x-foo", &[], MediaTypeKind::WithOpenCharset).unwrap();
    }

    #[test]
    fn test_for_name_rejects_bad_syntax() {
        let bad = [
            ("te xt", "plain"),
            ("text", "pl/ain"),
            ("", "plain"),
            ("text", ""),
            ("*", "plain"),
            ("text\r\n", "plain"),
        ];
        for &(main, sub) in &bad {
            let err = MediaType::for_name(main, sub, &[], MediaTypeKind::Binary).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidMediaTypeSyntax, "{:?}/{:?}", main, sub);
        }

        let err = MediaType::for_name("text", "x", &[("charset", "utf-8")], MediaTypeKind::WithOpenCharset)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidMediaTypeSyntax);

        MediaType::for_name("text", "x", &[("a", "1"), ("A", "2")], MediaTypeKind::WithOpenCharset)
            .unwrap_err();
    }

    #[test]
    fn test_wildcards() {
        let any = MediaType::for_name("*", "*", &[], MediaTypeKind::Binary).unwrap();
        assert!(any.is_wildcard());
        assert!(any.matches(&TEXT_PLAIN));
        assert!(any.matches(&APPLICATION_JSON));

        let text = MediaType::parse("text/*").unwrap();
        assert!(text.is_wildcard());
        assert!(text.matches(&TEXT_PLAIN));
        assert!(text.matches(&TEXT_CSV));
        assert!(!text.matches(&APPLICATION_JSON));

        assert!(TEXT_PLAIN.matches(&TEXT_PLAIN));
        assert!(!TEXT_PLAIN.matches(&TEXT_HTML));
        assert!(!TEXT_PLAIN.matches(&text), "a concrete type is not a range");
        assert!(!TEXT_PLAIN.is_wildcard());
    }

    #[test]
    fn test_matches_ignores_params() {
        let with_params = TEXT_PLAIN.with_params(&[("format", "flowed")]).unwrap();
        assert!(TEXT_PLAIN.matches(&with_params));
        assert!(with_params.matches(&TEXT_PLAIN));
    }

    #[test]
    fn test_params_are_part_of_equality() {
        let a = MULTIPART_FORM_DATA.with_params(&[("boundary", "a")]).unwrap();
        let b = MULTIPART_FORM_DATA.with_params(&[("boundary", "b")]).unwrap();
        assert_ne!(a, b);
        assert!(a.is_compatible(&b));
        assert!(a.is_compatible(&MULTIPART_FORM_DATA));
        assert!(!a.is_compatible(&APPLICATION_OCTET_STREAM));
    }

    #[test]
    fn test_parameter_eq_is_order_independent() {
        let a = MediaType::parse("application/x-custom; param1=a; param2=b").unwrap();
        let b = MediaType::parse("application/x-custom; param2=b; param1=a").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_with_params_does_not_mutate() {
        let before = TEXT_HTML;
        let after = before.with_params(&[("level", "1")]).unwrap();
        assert!(before.params().is_empty());
        assert_eq!(after.param("level"), Some("1"));
        assert_eq!(after.kind(), before.kind());

        before.with_params(&[("charset", "utf-8")]).unwrap_err();
    }

    #[test]
    fn test_to_content_type() {
        let ct = IMAGE_PNG.to_content_type().unwrap();
        assert!(ct.is_binary());
        assert_eq!(ct.charset(), None);

        let ct = APPLICATION_JSON.to_content_type().unwrap();
        assert_eq!(ct, content_types::APPLICATION_JSON);
        assert_eq!(ct.charset(), Some(UTF_8));
    }

    #[test]
    fn test_open_charset_requires_charset() {
        for mt in &[TEXT_PLAIN, TEXT_HTML, TEXT_XML, TEXT_CSV, APPLICATION_XML] {
            let err = mt.to_content_type().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::CharsetRequired, "{:?}", mt);

            let ct = mt.with_charset(UTF_16).unwrap();
            assert_eq!(ct.charset(), Some(UTF_16));
            assert_eq!(ct.media_type(), Some(mt));
        }
    }

    #[test]
    fn test_with_charset_on_wrong_kind() {
        let err = IMAGE_PNG.with_charset(UTF_8).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MediaTypeVariantMismatch);

        let err = APPLICATION_JSON.with_charset(UTF_8).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MediaTypeVariantMismatch);
    }

    #[test]
    fn test_parse() {
        assert_eq!(MediaType::parse("text/plain").unwrap(), TEXT_PLAIN);
        assert_eq!(MediaType::parse("TEXT/PLAIN").unwrap(), TEXT_PLAIN);
        assert_eq!(MediaType::parse("application/json").unwrap(), APPLICATION_JSON);

        let custom_text = MediaType::parse("text/x-foo").unwrap();
        assert_eq!(custom_text.kind(), MediaTypeKind::WithOpenCharset);

        let custom = MediaType::parse("application/vnd.foo+xml; v=1").unwrap();
        assert_eq!(custom.kind(), MediaTypeKind::Binary);
        assert_eq!(custom.suffix(), Some("xml"));
        assert_eq!(custom.param("v"), Some("1"));

        let quoted = MediaType::parse(r#"application/x-custom; title="the \" char""#).unwrap();
        assert_eq!(quoted.param("title"), Some("the \" char"));
    }

    #[test]
    fn test_parse_errors() {
        for bad in &["", "text", "text/", "f o o / bar", "text/plain; charset=utf-8", "*/plain"] {
            let err = MediaType::parse(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidMediaTypeSyntax, "{:?}", bad);
            assert_eq!(err.input(), *bad);
        }
    }

    #[test]
    fn test_matching_on_names() {
        match (APPLICATION_JSON.main_type(), APPLICATION_JSON.sub_type()) {
            (APPLICATION, JSON) => (),
            _ => unreachable!(),
        }
        match (TEXT_PLAIN.main_type(), TEXT_PLAIN.sub_type()) {
            (TEXT, PLAIN) => (),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_display_quotes_params() {
        let mt = TEXT_PLAIN.with_params(&[("title", "a b")]).unwrap();
        assert_eq!(mt.to_string(), "text/plain; title=\"a b\"");
        assert_eq!(MediaType::parse(&mt.to_string()).unwrap(), mt);
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", IMAGE_PNG), "MediaType(\"image/png\", Binary)");
    }
}
