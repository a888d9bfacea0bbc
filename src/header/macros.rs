macro_rules! list_header {
    ($(#[$attr:meta])* $name:ident($item:ty), $header:expr) => (
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(ValueList<$item>);

        impl $name {
            /// Creates the header from the given values.
            ///
            /// # Errors
            ///
            /// Fails with [`ErrorKind::EmptyHeaderValue`](crate::ErrorKind::EmptyHeaderValue)
            /// if there are no values, and with
            /// [`ErrorKind::InvalidHeaderSyntax`](crate::ErrorKind::InvalidHeaderSyntax)
            /// if a value is invalid.
            pub fn new<I>(values: I) -> Result<$name, Error>
            where
                I: IntoIterator,
                I::Item: Into<$item>,
            {
                ValueList::new(values).map($name)
            }

            /// Parses the header value.
            pub fn parse(source: &str) -> Result<$name, Error> {
                ValueList::parse(source).map($name)
            }

            /// The values, in order.
            #[inline]
            pub fn values(&self) -> &[$item] {
                self.0.values()
            }

            /// Iterates over the values, in order.
            #[inline]
            pub fn iter(&self) -> std::slice::Iter<'_, $item> {
                self.0.iter()
            }

            /// Returns a new header with `value` appended.
            pub fn with_value(&self, value: impl Into<$item>) -> Result<$name, Error> {
                self.0.with_value(value).map($name)
            }

            /// The underlying list.
            #[inline]
            pub fn as_list(&self) -> &ValueList<$item> {
                &self.0
            }
        }

        impl Header for $name {
            const NAME: &'static str = $header;

            fn parse_value(value: &str) -> Result<$name, Error> {
                $name::parse(value)
            }

            fn render_value(&self) -> String {
                self.0.to_string()
            }
        }

        impl From<$name> for ValueList<$item> {
            fn from(header: $name) -> ValueList<$item> {
                header.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<$name, Self::Err> {
                $name::parse(s)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }
    )
}
