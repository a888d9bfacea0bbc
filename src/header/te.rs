use super::{Header, ValueList};
use crate::{Error, TransferEncoding};

list_header! {
    /// The `TE` header, the transfer codings a client is willing to accept.
    ///
    /// ```text
    /// TE        = #t-codings
    /// t-codings = "trailers" / ( transfer-coding [ weight ] )
    /// ```
    ///
    /// # Example
    ///
    /// ```
    /// use httpmime::header::Te;
    /// use httpmime::TransferEncoding;
    ///
    /// let te = Te::new(vec![TransferEncoding::Gzip, TransferEncoding::Deflate]).unwrap();
    /// assert_eq!(te.to_string(), "gzip, deflate");
    /// ```
    Te(TransferEncoding), "te"
}

impl Te {
    /// Whether a coding with the same name as `encoding` is listed.
    ///
    /// Parameters such as weights are not compared.
    pub fn accepts(&self, encoding: &TransferEncoding) -> bool {
        self.iter().any(|listed| listed.name() == encoding.name())
    }

    /// Whether the client accepts trailer fields.
    pub fn accepts_trailers(&self) -> bool {
        self.iter().any(|listed| listed.name() == "trailers")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_parse_compress() {
        let te = Te::parse("compress").unwrap();
        assert_eq!(te.values(), [TransferEncoding::Compress]);
    }

    #[test]
    fn test_parse_trailers_deflate() {
        let te = Te::parse("trailers, deflate;q=0.5").unwrap();
        assert_eq!(te.values().len(), 2);
        assert_eq!(te.values()[0].name(), "trailers");
        assert_eq!(te.values()[1].name(), "deflate");
        assert_eq!(te.values()[1].params().and_then(|p| p.get("q")), Some("0.5"));

        assert!(te.accepts_trailers());
        assert!(te.accepts(&TransferEncoding::Deflate));
        assert!(!te.accepts(&TransferEncoding::Gzip));
    }

    #[test]
    fn test_round_trip() {
        let te = Te::new(vec![
            TransferEncoding::Gzip,
            TransferEncoding::extension("trailers", &[]).unwrap(),
            TransferEncoding::extension("deflate", &[("q", "0.5")]).unwrap(),
        ])
        .unwrap();
        assert_eq!(te.render_value(), "gzip, trailers, deflate; q=0.5");
        assert_eq!(Te::parse_value(&te.render_value()).unwrap(), te);
        assert_eq!(Te::NAME, "te");
    }

    #[test]
    fn test_errors() {
        let err = Te::new(Vec::<TransferEncoding>::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyHeaderValue);

        let err = Te::parse("gzip,").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidHeaderSyntax);

        let err = Te::parse("gzip deflate").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidHeaderSyntax);
    }
}
