//! Lowercase names used by the predefined catalogs.
//!
//! Parsed media types are lowercased, so these can be compared against
//! [`MediaType::main_type`](crate::MediaType::main_type) and
//! [`MediaType::sub_type`](crate::MediaType::sub_type) directly, including
//! in `match` patterns.
//!
//! ```
//! use httpmime::names::{APPLICATION, JSON, TEXT};
//!
//! let mt = httpmime::media_types::APPLICATION_JSON;
//! match (mt.main_type(), mt.sub_type()) {
//!     (APPLICATION, JSON) => (),
//!     (TEXT, _) => unreachable!("structured text"),
//!     _ => unreachable!("something else"),
//! }
//! ```

macro_rules! names {
    ($($id:ident, $e:expr;)*) => (
        $(
        #[doc = "`"]
        #[doc = $e]
        #[doc = "`"]
        pub const $id: &str = $e;
        )*

        #[test]
        fn test_names_macro_consts() {
            $(
            assert_eq!($id.to_ascii_lowercase(), $id);
            assert!($id == STAR || httpmime_parse::is_token_str($id), "{:?} is not a token", $id);
            )*
        }
    )
}

names! {
    STAR, "*";

    TEXT, "text";
    IMAGE, "image";
    AUDIO, "audio";
    VIDEO, "video";
    APPLICATION, "application";
    MULTIPART, "multipart";
    FONT, "font";

    // text/*
    PLAIN, "plain";
    HTML, "html";
    XML, "xml";
    CSV, "csv";
    CSS, "css";
    JAVASCRIPT, "javascript";
    MARKDOWN, "markdown";
    EVENT_STREAM, "event-stream";

    // application/*
    JSON, "json";
    PROBLEM_JSON, "problem+json";
    OCTET_STREAM, "octet-stream";
    WWW_FORM_URLENCODED, "x-www-form-urlencoded";
    GRPC_PROTO, "grpc+proto";
    PDF, "pdf";
    ZIP, "zip";
    GZIP, "gzip";

    // image/*
    PNG, "png";
    JPEG, "jpeg";
    GIF, "gif";
    WEBP, "webp";

    // audio/*, video/*
    MPEG, "mpeg";
    MP4, "mp4";

    // font/*
    WOFF, "woff";
    WOFF2, "woff2";

    // multipart/*
    FORM_DATA, "form-data";

    // parameters
    CHARSET, "charset";
    BOUNDARY, "boundary";
}
