//! Configuration types for annotation emission.

/// Root namespace of the LÖVE API.
pub const DEFAULT_NAMESPACE: &str = "love";

/// Base URL of the LÖVE wiki; page names are appended verbatim.
pub const DEFAULT_DOC_BASE_URL: &str = "https://love2d.org/wiki/";

/// Configuration for annotation emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Namespace token prefixed to known type names
    pub(crate) namespace: String,
    /// Prefix of every documentation link
    pub(crate) doc_base_url: String,
    /// Skip functions without variants instead of failing
    pub(crate) skip_malformed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            doc_base_url: DEFAULT_DOC_BASE_URL.to_string(),
            skip_malformed: false,
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the namespace token used for prefixing.
    pub fn namespace(mut self, value: impl Into<String>) -> Self {
        self.namespace = value.into();
        self
    }

    /// Set the documentation base URL.
    pub fn doc_base_url(mut self, value: impl Into<String>) -> Self {
        self.doc_base_url = value.into();
        self
    }

    /// Set whether malformed functions are skipped with a warning.
    pub fn skip_malformed(mut self, value: bool) -> Self {
        self.skip_malformed = value;
        self
    }
}
