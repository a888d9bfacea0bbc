use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use httpmime_parse::{is_restricted_quoted_char, is_token_str, Param};

/// The ordered `name=value` parameters of a media type or transfer coding.
///
/// Names are lowercased and compared case-insensitively. Values are kept
/// as their content, with any quoting removed, and compared exactly.
/// Equality ignores order.
#[derive(Clone, Default)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    /// No parameters.
    pub const fn new() -> Params {
        Params { pairs: Vec::new() }
    }

    /// Builds parameters from `(name, value)` content pairs.
    ///
    /// Fails with a reason if a name is not a token, a name repeats, or a
    /// value holds a character that cannot be written in a header.
    pub(crate) fn try_from_pairs<'a, I>(pairs: I) -> Result<Params, Cow<'static, str>>
    where
        I: IntoIterator<Item = (&'a str, Cow<'a, str>)>,
    {
        let mut params = Params::new();
        for (name, value) in pairs {
            if !is_token_str(name) {
                return Err(format!("parameter name {:?} is not a token", name).into());
            }
            if params.get(name).is_some() {
                return Err(format!("parameter {:?} is given more than once", name).into());
            }
            if !value.bytes().all(is_restricted_quoted_char) {
                return Err(format!("parameter {:?} has a value that cannot be quoted", name).into());
            }
            params.pairs.push((name.to_ascii_lowercase(), value.into_owned()));
        }
        Ok(params)
    }

    /// Builds parameters from parsed, possibly quoted, parameters.
    pub(crate) fn try_from_parsed(parsed: &[Param<'_>]) -> Result<Params, Cow<'static, str>> {
        Params::try_from_pairs(parsed.iter().map(|param| (param.name, content(param))))
    }

    /// Looks up a parameter value by name, ignoring ASCII case.
    ///
    /// # Example
    ///
    /// ```
    /// let mt = httpmime::MediaType::parse("multipart/form-data; Boundary=AbCd").unwrap();
    /// assert_eq!(mt.params().get("boundary"), Some("AbCd"));
    /// assert_eq!(mt.params().get("BOUNDARY"), Some("AbCd"));
    /// assert_eq!(mt.params().get("charset"), None);
    /// ```
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// The number of parameters.
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether there are no parameters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// The content of a parsed value: quotes and quoted-pairs are undone.
pub(crate) fn content<'a>(param: &Param<'a>) -> Cow<'a, str> {
    if param.is_quoted() {
        quoted_string::unquote_unchecked(param.value)
    } else {
        Cow::Borrowed(param.value)
    }
}

/// Writes `value` as a token when it is one, and as a quoted-string
/// otherwise.
pub(crate) fn fmt_value(f: &mut fmt::Formatter, value: &str) -> fmt::Result {
    if is_token_str(value) {
        return f.write_str(value);
    }
    f.write_str("\"")?;
    for c in value.chars() {
        if c == '"' || c == '\\' {
            f.write_str("\\")?;
        }
        fmt::Write::write_char(f, c)?;
    }
    f.write_str("\"")
}

impl PartialEq for Params {
    fn eq(&self, other: &Params) -> bool {
        // Order doesn't matter, and names are unique, so each parameter
        // only has to be found in the other.
        self.len() == other.len() && self.iter().all(|(name, value)| other.get(name) == Some(value))
    }
}

impl Eq for Params {}

impl Hash for Params {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut sorted = self.iter().collect::<Vec<_>>();
        sorted.sort_unstable();
        sorted.hash(state);
    }
}

impl fmt::Debug for Params {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Writes each parameter as `; name=value`.
impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (name, value) in self.iter() {
            write!(f, "; {}=", name)?;
            fmt_value(f, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Params {
        Params::try_from_pairs(pairs.iter().map(|&(n, v)| (n, Cow::Borrowed(v)))).unwrap()
    }

    #[test]
    fn test_names_are_lowercased() {
        let p = params(&[("Boundary", "AbCd")]);
        assert_eq!(p.iter().collect::<Vec<_>>(), [("boundary", "AbCd")]);
        assert_eq!(p.get("BOUNDARY"), Some("AbCd"));
    }

    #[test]
    fn test_eq_is_order_independent() {
        let a = params(&[("a", "1"), ("b", "2")]);
        let b = params(&[("B", "2"), ("a", "1")]);
        assert_eq!(a, b);

        let c = params(&[("a", "1"), ("b", "3")]);
        assert_ne!(a, c);

        let d = params(&[("a", "1")]);
        assert_ne!(a, d);
    }

    #[test]
    fn test_values_are_case_sensitive() {
        assert_ne!(params(&[("a", "abc")]), params(&[("a", "ABC")]));
    }

    #[test]
    fn test_hash_is_order_independent() {
        use std::collections::hash_map::DefaultHasher;

        fn hash_of(p: &Params) -> u64 {
            let mut h = DefaultHasher::new();
            p.hash(&mut h);
            h.finish()
        }

        let a = params(&[("a", "1"), ("b", "2")]);
        let b = params(&[("b", "2"), ("a", "1")]);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_rejects_bad_pairs() {
        let bad_name = Params::try_from_pairs(vec![("a b", Cow::Borrowed("1"))]);
        assert!(bad_name.is_err());

        let dup = Params::try_from_pairs(vec![("a", Cow::Borrowed("1")), ("A", Cow::Borrowed("2"))]);
        assert!(dup.is_err());

        let bad_value = Params::try_from_pairs(vec![("a", Cow::Borrowed("line\r\nbreak"))]);
        assert!(bad_value.is_err());
    }

    #[test]
    fn test_from_parsed_unquotes() {
        let parsed = httpmime_parse::parse_media_type(r#"text/x; a="the \" char"; b="x y"; c=plain"#).unwrap();
        let p = Params::try_from_parsed(&parsed.params).unwrap();
        assert_eq!(p.get("a"), Some("the \" char"));
        assert_eq!(p.get("b"), Some("x y"));
        assert_eq!(p.get("c"), Some("plain"));
    }

    #[test]
    fn test_display_quotes_when_needed() {
        let p = params(&[("a", "token"), ("b", "two words"), ("c", "q\"uote"), ("d", "")]);
        assert_eq!(p.to_string(), r#"; a=token; b="two words"; c="q\"uote"; d="""#);
    }
}
