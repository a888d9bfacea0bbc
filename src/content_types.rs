//! Predefined content types.
//!
//! ```
//! use httpmime::{charset, content_types, ContentType};
//!
//! assert_eq!(content_types::TEXT_HTML_UTF8.charset(), Some(charset::UTF_8));
//! assert!(content_types::APPLICATION_OCTET_STREAM.is_binary());
//!
//! let header = content_types::APPLICATION_JSON.to_string();
//! assert_eq!(ContentType::parse(&header).unwrap(), content_types::APPLICATION_JSON);
//! ```

use crate::charset::UTF_8;
use crate::content_type::{Binary, WithCharset, WithFixedCharset};
use crate::media_types;
use crate::ContentType;

macro_rules! content_types {
    ($(@ $variant:ident: $($id:ident, $media_type:ident $(, $charset:expr)?;)+)+) => (
        $($(
            #[doc = "A `ContentType::"]
            #[doc = stringify!($variant)]
            #[doc = "` for `media_types::"]
            #[doc = stringify!($media_type)]
            #[doc = "`."]
            pub const $id: ContentType = content_type_variant!(
                $variant, media_types::$media_type $(, $charset)?
            );
        )+)+

        #[test]
        fn test_content_types_macro_consts() {
            $($(
            {
                let ct = $id;
                let mt = ct.media_type().expect("media type");
                assert_eq!(mt, &media_types::$media_type);
                assert!(mt.params().is_empty(), "{:?} has parameters", ct);

                let source = ct.to_string();
                let parsed = ContentType::parse(&source).expect("parse const");
                assert_eq!(parsed, ct, "{:?} does not round trip", source);
            }
            )+)+
        }
    )
}

macro_rules! content_type_variant {
    (Binary, $media_type:expr) => (
        ContentType::Binary(Binary { media_type: $media_type })
    );
    (WithFixedCharset, $media_type:expr) => (
        ContentType::WithFixedCharset(WithFixedCharset { media_type: $media_type })
    );
    (WithCharset, $media_type:expr, $charset:expr) => (
        ContentType::WithCharset(WithCharset { media_type: $media_type, charset: $charset })
    );
}

content_types! {
    @ Binary:
    APPLICATION_OCTET_STREAM, APPLICATION_OCTET_STREAM;
    APPLICATION_GRPC_PROTO, APPLICATION_GRPC_PROTO;

    @ WithFixedCharset:
    APPLICATION_JSON, APPLICATION_JSON;
    APPLICATION_X_WWW_FORM_URLENCODED, APPLICATION_X_WWW_FORM_URLENCODED;

    @ WithCharset:
    TEXT_PLAIN_UTF8, TEXT_PLAIN, UTF_8;
    TEXT_HTML_UTF8, TEXT_HTML, UTF_8;
    TEXT_XML_UTF8, TEXT_XML, UTF_8;
    TEXT_CSV_UTF8, TEXT_CSV, UTF_8;
}

/// The absence of a content type.
pub const NO_CONTENT_TYPE: ContentType = ContentType::NoContentType;

/// Parses a `Content-Type` header value.
///
/// Shorthand for [`ContentType::parse`].
pub fn parse(source: &str) -> Result<ContentType, crate::Error> {
    ContentType::parse(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MediaTypeKind;

    #[test]
    fn test_variant_agrees_with_media_type_kind() {
        let all = [
            APPLICATION_JSON,
            APPLICATION_OCTET_STREAM,
            TEXT_PLAIN_UTF8,
            TEXT_HTML_UTF8,
            TEXT_XML_UTF8,
            TEXT_CSV_UTF8,
            APPLICATION_GRPC_PROTO,
            APPLICATION_X_WWW_FORM_URLENCODED,
        ];
        for ct in all.iter() {
            let kind = ct.media_type().map(|mt| mt.kind());
            match (ct, kind) {
                (ContentType::Binary(_), Some(MediaTypeKind::Binary)) => (),
                (ContentType::WithFixedCharset(_), Some(MediaTypeKind::WithFixedCharset(_))) => (),
                (ContentType::WithCharset(_), Some(MediaTypeKind::WithOpenCharset)) => (),
                _ => panic!("{:?} does not agree with {:?}", ct, kind),
            }
        }
    }

    #[test]
    fn test_form_urlencoded_is_utf8() {
        assert_eq!(APPLICATION_X_WWW_FORM_URLENCODED.charset(), Some(UTF_8));
        assert_eq!(
            APPLICATION_X_WWW_FORM_URLENCODED.to_string(),
            "application/x-www-form-urlencoded"
        );
    }

    #[test]
    fn test_parse_shorthand() {
        assert_eq!(parse("application/grpc+proto").unwrap(), APPLICATION_GRPC_PROTO);
        assert!(parse("").is_err());
    }
}
