use thiserror::Error;

/// Structural problems found while serializing an [`HtmlNode`](crate::HtmlNode).
///
/// The tree builder never produces these; they only show up for nodes
/// assembled by hand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HtmlError {
    #[error("parent node has no tag")]
    MissingTag,

    #[error("parent node has no children")]
    MissingChildren,

    #[error("leaf node has no value")]
    MissingValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("malformed inline markup: unbalanced `{delimiter}`")]
    MalformedInlineMarkup { delimiter: String },

    #[error(transparent)]
    Html(#[from] HtmlError),
}
