mod block;
mod builder;
mod classify;
mod config;
mod error;
mod html;
mod inline;
mod page;
mod site;

pub use block::{Block, BlockKind, SpanKind, TextSpan};
pub use builder::{block_to_html_node, span_to_html_node};
pub use classify::{block_to_block_type, classify, markdown_to_blocks};
pub use config::{Config, ConfigError, PathsConfig, SiteConfig};
pub use error::{ConvertError, HtmlError};
pub use html::{Attributes, HtmlNode};
pub use inline::split_inline;
pub use page::{PageError, extract_title, render_page, rewrite_base_path};
pub use site::{BuildReport, Site, SiteError};

/// Convert a markdown document into a single `div` holding one node per block.
pub fn convert(markdown: &str) -> Result<HtmlNode, ConvertError> {
    let children = classify(markdown)
        .iter()
        .map(block_to_html_node)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent("div", children))
}

/// Serialize a node tree to an HTML string.
pub fn serialize(node: &HtmlNode) -> Result<String, HtmlError> {
    node.serialize()
}

/// Convert markdown straight to an HTML string.
pub fn markdown_to_html(markdown: &str) -> Result<String, ConvertError> {
    let node = convert(markdown)?;
    Ok(serialize(&node)?)
}
