//! Terminal styling for the classification listing.

const RESET: &str = "\x1b[0m";

/// What a painted span shows in the listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    /// Section titles, counts, the version line.
    Heading,
    /// Bare or namespaced type names.
    TypeName,
    /// Descriptive phrases, passed through verbatim.
    Phrase,
}

impl Tone {
    fn code(self) -> &'static str {
        match self {
            Tone::Heading => "\x1b[2m",
            Tone::TypeName => "\x1b[34m",
            Tone::Phrase => "\x1b[32m",
        }
    }
}

/// Whether listing output carries ANSI styling. Off by default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Colors {
    enabled: bool,
}

impl Colors {
    pub const ON: Self = Self { enabled: true };
    pub const OFF: Self = Self { enabled: false };

    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Wrap `text` in the escape codes for `tone`, or return it unchanged.
    pub fn paint(&self, tone: Tone, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", tone.code(), text, RESET)
        } else {
            text.to_string()
        }
    }
}
