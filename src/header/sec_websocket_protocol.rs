use super::{Header, ValueList};
use crate::Error;

list_header! {
    /// The `Sec-WebSocket-Protocol` header, the sub protocols a WebSocket
    /// client offers or the one a server accepted.
    ///
    /// Every protocol is an HTTP token.
    ///
    /// # Example
    ///
    /// ```
    /// use httpmime::header::SecWebSocketProtocol;
    ///
    /// let header = SecWebSocketProtocol::new(vec!["chat", "superchat"]).unwrap();
    /// assert_eq!(header.to_string(), "chat, superchat");
    /// assert!(header.contains("Chat"));
    /// ```
    SecWebSocketProtocol(String), "sec-websocket-protocol"
}

impl SecWebSocketProtocol {
    /// Whether `protocol` is one of the listed protocols, ignoring ASCII
    /// case.
    pub fn contains(&self, protocol: &str) -> bool {
        let protocol = protocol.trim();
        self.iter().any(|candidate| candidate.eq_ignore_ascii_case(protocol))
    }

    /// The first listed protocol that is also in `supported`.
    ///
    /// Searched in the order of this header.
    pub fn first_supported<'a>(&'a self, supported: &[&str]) -> Option<&'a str> {
        self.iter()
            .map(String::as_str)
            .find(|candidate| supported.iter().any(|s| s.eq_ignore_ascii_case(candidate)))
    }
}
