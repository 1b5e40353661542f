//! Whole-string patterns
//!
//! Every pattern is compiled anchored at both ends, so a value only passes
//! when the expression matches all of it. Substring hits do not count.

use std::sync::LazyLock;

use regex::Regex;

// ============================================================================
// BUILT-IN SOURCES
// ============================================================================

const EMAIL_SOURCE: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";
const PHONE_SOURCE: &str = r"\+?([0-9]{1,3})?[-.\s]?(\(?[0-9]{1,4}\)?)?[-.\s]?[0-9]{1,4}[-.\s]?[0-9]{1,4}[-.\s]?[0-9]{0,9}";
const URL_WITH_SCHEME_SOURCE: &str = r"[a-zA-Z]+:\/\/{1}[a-zA-Z0-9_\-.?=&\/]+";
const URL_NO_SCHEME_SOURCE: &str = r"[a-zA-Z0-9-_.?=&\/]+";

static EMAIL_REGEX: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| whole_match(EMAIL_SOURCE));
static PHONE_REGEX: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| whole_match(PHONE_SOURCE));
static URL_WITH_SCHEME_REGEX: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| whole_match(URL_WITH_SCHEME_SOURCE));
static URL_NO_SCHEME_REGEX: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| whole_match(URL_NO_SCHEME_SOURCE));

/// The built-in patterns behind the `Email`, `PhoneNumber`, `UrlWithScheme`
/// and `UrlNoScheme` operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultPattern {
    Email,
    Phone,
    UrlWithScheme,
    UrlNoScheme,
}

impl DefaultPattern {
    /// Every built-in pattern.
    pub const ALL: [Self; 4] = [
        Self::Email,
        Self::Phone,
        Self::UrlWithScheme,
        Self::UrlNoScheme,
    ];

    /// The unanchored regular-expression source.
    #[must_use]
    pub fn source(self) -> &'static str {
        match self {
            Self::Email => EMAIL_SOURCE,
            Self::Phone => PHONE_SOURCE,
            Self::UrlWithScheme => URL_WITH_SCHEME_SOURCE,
            Self::UrlNoScheme => URL_NO_SCHEME_SOURCE,
        }
    }

    fn regex(self) -> Result<Regex, regex::Error> {
        let cell = match self {
            Self::Email => &EMAIL_REGEX,
            Self::Phone => &PHONE_REGEX,
            Self::UrlWithScheme => &URL_WITH_SCHEME_REGEX,
            Self::UrlNoScheme => &URL_NO_SCHEME_REGEX,
        };
        LazyLock::force(cell).clone()
    }
}

// ============================================================================
// PATTERN
// ============================================================================

/// A compiled whole-string pattern that remembers its source.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compiles `source` so that it must match the entire input.
    pub fn new(source: impl Into<String>) -> Result<Self, regex::Error> {
        let source = source.into();
        let regex = whole_match(&source)?;
        Ok(Self { source, regex })
    }

    /// One of the built-in patterns. Compiled once per process.
    pub fn builtin(kind: DefaultPattern) -> Result<Self, regex::Error> {
        Ok(Self {
            source: kind.source().to_owned(),
            regex: kind.regex()?,
        })
    }

    /// The source as configured, without the anchors.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the pattern matches all of `input`.
    #[must_use]
    pub fn matches(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}

fn whole_match(source: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{source})$"))
}
