use std::fmt;

use serde1::de::{self, Deserialize, Deserializer};
use serde1::ser::{Serialize, Serializer};

use crate::header::{SecWebSocketProtocol, Te};
use crate::{Charset, ContentType, MediaType, TransferEncoding};

macro_rules! serde_str {
    ($ty:ty, $expecting:expr, $from_str:expr) => (
        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                struct Visitor;

                impl<'de> de::Visitor<'de> for Visitor {
                    type Value = $ty;

                    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                        formatter.write_str($expecting)
                    }

                    fn visit_str<E>(self, value: &str) -> Result<$ty, E>
                    where
                        E: de::Error,
                    {
                        $from_str(value).map_err(E::custom)
                    }
                }

                deserializer.deserialize_str(Visitor)
            }
        }
    )
}

serde_str!(Charset, "a registered charset name", Charset::resolve);
serde_str!(MediaType, "a valid media type", MediaType::parse);
serde_str!(ContentType, "a valid content type", content_type_from_str);
serde_str!(TransferEncoding, "a valid transfer coding", TransferEncoding::parse);
serde_str!(SecWebSocketProtocol, "a list of WebSocket sub protocols", SecWebSocketProtocol::parse);
serde_str!(Te, "a list of transfer codings", Te::parse);

// `NoContentType` serializes as the empty string.
fn content_type_from_str(value: &str) -> Result<ContentType, crate::Error> {
    if value.is_empty() {
        Ok(ContentType::NoContentType)
    } else {
        ContentType::parse(value)
    }
}

#[cfg(test)]
mod tests {
    use serde_test::{assert_de_tokens_error, assert_tokens, Token};

    use super::*;
    use crate::{charset, content_types, media_types};

    #[test]
    fn test_charset() {
        assert_tokens(&charset::UTF_8, &[Token::Str("UTF-8")]);
        assert_de_tokens_error::<Charset>(
            &[Token::Str("bogus-charset")],
            "unknown charset: not a registered charset (in \"bogus-charset\")",
        );
    }

    #[test]
    fn test_media_type() {
        let mt = media_types::MULTIPART_FORM_DATA
            .with_params(&[("boundary", "AaB03x")])
            .unwrap();
        assert_tokens(&mt, &[Token::Str("multipart/form-data; boundary=AaB03x")]);
    }

    #[test]
    fn test_content_type() {
        assert_tokens(&content_types::TEXT_PLAIN_UTF8, &[Token::Str("text/plain; charset=UTF-8")]);
        assert_tokens(&content_types::APPLICATION_JSON, &[Token::Str("application/json")]);
        assert_tokens(&content_types::NO_CONTENT_TYPE, &[Token::Str("")]);
    }

    #[test]
    fn test_headers() {
        let te = Te::new(vec![TransferEncoding::Gzip, TransferEncoding::Chunked]).unwrap();
        assert_tokens(&te, &[Token::Str("gzip, chunked")]);
        assert_tokens(&TransferEncoding::Deflate, &[Token::Str("deflate")]);

        let protocols = SecWebSocketProtocol::new(vec!["chat"]).unwrap();
        assert_tokens(&protocols, &[Token::Str("chat")]);
    }
}
