//! Predefined media types.
//!
//! These are the only media types with a fixed kind: building or parsing
//! a media type with one of these names always yields the kind listed here.
//!
//! ```
//! use httpmime::{media_types, MediaTypeKind};
//!
//! assert_eq!(media_types::IMAGE_PNG.kind(), MediaTypeKind::Binary);
//! assert_eq!(media_types::TEXT_HTML.kind(), MediaTypeKind::WithOpenCharset);
//! assert_eq!(
//!     media_types::lookup("Application", "JSON"),
//!     Some(&media_types::APPLICATION_JSON),
//! );
//! ```

use crate::charset::UTF_8;
use crate::names::*;
use crate::{MediaType, MediaTypeKind};

macro_rules! media_types {
    ($(@ $kind:ident $(($charset:expr))?: $($id:ident, $main:expr, $sub:expr;)+)+) => (
        $(
            media_type_group! {
                ($kind $(, $charset)?) $($id, $main, $sub;)+
            }
        )+

        static CATALOG: &[MediaType] = &[$($($id,)+)+];

        #[test]
        fn test_media_types_macro_consts() {
            $($(
            media_type_constant_test! {
                $id, $main, $sub
            }
            )+)+
        }
    )
}

macro_rules! media_type_group {
    ($kind:tt $($id:ident, $main:expr, $sub:expr;)+) => (
        $(
            media_type_constant! {
                $id, $main, $sub, media_type_kind! $kind
            }
        )+
    )
}

macro_rules! media_type_kind {
    (Binary) => (MediaTypeKind::Binary);
    (Fixed, $charset:expr) => (MediaTypeKind::WithFixedCharset($charset));
    (Open) => (MediaTypeKind::WithOpenCharset);
}

macro_rules! media_type_constant {
    ($id:ident, $main:expr, $sub:expr, $kind:expr) => (
        #[doc = "`"]
        #[doc = $main]
        #[doc = "/"]
        #[doc = $sub]
        #[doc = "`"]
        pub const $id: MediaType = MediaType::predefined($main, $sub, $kind);
    )
}

#[cfg(test)]
macro_rules! media_type_constant_test {
    ($id:ident, $main:expr, $sub:expr) => ({
        let mt = $id;

        assert_eq!(mt.main_type(), $main.to_ascii_lowercase(), "{:?} main type is not lowercase", mt);
        assert_eq!(mt.sub_type(), $sub.to_ascii_lowercase(), "{:?} sub type is not lowercase", mt);
        assert!(!mt.is_wildcard(), "{:?} is a wildcard", mt);
        assert!(mt.params().is_empty(), "{:?} has parameters", mt);

        // the catalog resolves back to this constant, and only to it
        let found = lookup($main, $sub).expect("constant is in the catalog");
        assert_eq!(found, &mt);
        let count = CATALOG.iter().filter(|other| other.is_compatible(&mt)).count();
        assert_eq!(count, 1, "{:?} is in the catalog {} times", mt, count);

        // parsing interprets the name with the catalog kind
        let source = concat!($main, "/", $sub);
        let parsed = MediaType::parse(source).expect("parse const");
        assert_eq!(parsed, mt);
        assert_eq!(parsed.to_string(), source);
    })
}

/// Finds a predefined media type by name, ignoring ASCII case.
pub fn lookup(main_type: &str, sub_type: &str) -> Option<&'static MediaType> {
    CATALOG.iter().find(|mt| {
        mt.main_type().eq_ignore_ascii_case(main_type) && mt.sub_type().eq_ignore_ascii_case(sub_type)
    })
}

/// Every predefined media type.
pub fn all() -> &'static [MediaType] {
    CATALOG
}

media_types! {
    @ Binary:
    APPLICATION_OCTET_STREAM, "application", "octet-stream";
    APPLICATION_GRPC_PROTO, "application", "grpc+proto";
    APPLICATION_PDF, "application", "pdf";
    APPLICATION_ZIP, "application", "zip";
    APPLICATION_GZIP, "application", "gzip";
    IMAGE_PNG, "image", "png";
    IMAGE_JPEG, "image", "jpeg";
    IMAGE_GIF, "image", "gif";
    IMAGE_WEBP, "image", "webp";
    AUDIO_MPEG, "audio", "mpeg";
    VIDEO_MP4, "video", "mp4";
    FONT_WOFF, "font", "woff";
    FONT_WOFF2, "font", "woff2";
    MULTIPART_FORM_DATA, "multipart", "form-data";

    @ Fixed(UTF_8):
    APPLICATION_JSON, "application", "json";
    APPLICATION_PROBLEM_JSON, "application", "problem+json";
    APPLICATION_X_WWW_FORM_URLENCODED, "application", "x-www-form-urlencoded";
    TEXT_EVENT_STREAM, "text", "event-stream";

    @ Open:
    TEXT_PLAIN, "text", "plain";
    TEXT_HTML, "text", "html";
    TEXT_XML, "text", "xml";
    TEXT_CSV, "text", "csv";
    TEXT_CSS, "text", "css";
    TEXT_JAVASCRIPT, "text", "javascript";
    TEXT_MARKDOWN, "text", "markdown";
    APPLICATION_XML, "application", "xml";
    APPLICATION_JAVASCRIPT, "application", "javascript";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(lookup("TEXT", "Plain"), Some(&TEXT_PLAIN));
        assert_eq!(lookup("application", "GRPC+PROTO"), Some(&APPLICATION_GRPC_PROTO));
        assert_eq!(lookup("text", "x-unknown"), None);
    }

    #[test]
    fn test_fixed_charsets_are_utf8() {
        for mt in all() {
            if let MediaTypeKind::WithFixedCharset(charset) = mt.kind() {
                assert_eq!(charset, UTF_8, "{:?}", mt);
            }
        }
    }

    #[test]
    fn test_names_match_constants() {
        assert_eq!(TEXT_PLAIN.main_type(), TEXT);
        assert_eq!(TEXT_PLAIN.sub_type(), PLAIN);
        assert_eq!(APPLICATION_X_WWW_FORM_URLENCODED.sub_type(), WWW_FORM_URLENCODED);
        assert_eq!(APPLICATION_GRPC_PROTO.sub_type(), GRPC_PROTO);
        assert_eq!(MULTIPART_FORM_DATA.sub_type(), FORM_DATA);
    }
}
