/// The kind of an inline text span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A typed run of inline text.
///
/// Spans are immutable value objects: produced once by the inline parser,
/// consumed once by conversion into HTML nodes, compared structurally.
/// `url` is `Some` exactly for `Link` and `Image` spans; for an image the
/// `text` field carries the alt text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub text: String,
    pub kind: SpanKind,
    pub url: Option<String>,
}

impl TextSpan {
    /// A span of the given kind with no url.
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
            url: None,
        }
    }

    /// Plain text shorthand.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Plain)
    }

    /// A link span labelled `text`, pointing at `url`.
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: SpanKind::Link,
            url: Some(url.into()),
        }
    }

    /// An image span with alt text `text`, sourced from `url`.
    pub fn image(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: SpanKind::Image,
            url: Some(url.into()),
        }
    }
}
