// Request Framing
// GET vs POST selection by method-name convention

/// Method-name prefixes that mark a state-changing call
pub const MUTATING_PREFIXES: [&str; 6] = ["add", "post", "submit", "set", "update", "delete"];

/// How a call is carried over HTTP
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    /// Parameters in the query string, no body
    Read,
    /// Parameters as a URL-encoded body
    Mutating,
}

impl Framing {
    /// Classify a method by its name (case-sensitive prefix match)
    pub fn classify(method: &str) -> Self {
        if MUTATING_PREFIXES
            .iter()
            .any(|prefix| method.starts_with(prefix))
        {
            Framing::Mutating
        } else {
            Framing::Read
        }
    }

    pub fn is_mutating(self) -> bool {
        self == Framing::Mutating
    }
}

impl std::fmt::Display for Framing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Framing::Read => write!(f, "GET"),
            Framing::Mutating => write!(f, "POST"),
        }
    }
}

/// A fully built request, ready for the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    pub method: String,
    pub framing: Framing,
    pub url: String,
    pub body: Option<String>,
}

impl PreparedRequest {
    /// Decoded parameter pairs, from the body or the query string
    pub fn params(&self) -> Vec<(String, String)> {
        let encoded = match (&self.body, self.url.split_once('?')) {
            (Some(body), _) => body.as_str(),
            (None, Some((_, query))) => query,
            (None, None) => "",
        };

        form_urlencoded::parse(encoded.as_bytes())
            .into_owned()
            .collect()
    }

    /// Decoded value of one parameter
    pub fn param(&self, key: &str) -> Option<String> {
        self.params()
            .into_iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}
