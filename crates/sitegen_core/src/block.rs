/// Inline span formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A run of inline text with a single formatting kind.
///
/// `target` is only ever set for links and images, which is why the fields
/// are private and spans are built through the constructors below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    content: String,
    kind: SpanKind,
    target: Option<String>,
}

impl TextSpan {
    pub fn plain(content: impl Into<String>) -> Self {
        Self::styled(content, SpanKind::Plain)
    }

    /// Build a span of a kind that carries no target.
    ///
    /// Link and image kinds are downgraded to plain text here, since they
    /// need a target; use [`TextSpan::link`] or [`TextSpan::image`] instead.
    pub fn styled(content: impl Into<String>, kind: SpanKind) -> Self {
        let kind = match kind {
            SpanKind::Link | SpanKind::Image => SpanKind::Plain,
            other => other,
        };
        Self {
            content: content.into(),
            kind,
            target: None,
        }
    }

    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: label.into(),
            kind: SpanKind::Link,
            target: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            content: alt.into(),
            kind: SpanKind::Image,
            target: Some(src.into()),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}

/// Structural kind of a blank-line-delimited block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    Heading(u8),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// A block of raw markdown together with its classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub raw: String,
    pub kind: BlockKind,
}
