use crate::block::{Block, BlockKind, SpanKind, TextSpan};
use crate::error::ConvertError;
use crate::html::HtmlNode;
use crate::inline::split_inline;

/// Build the HTML subtree for one classified block.
pub fn block_to_html_node(block: &Block) -> Result<HtmlNode, ConvertError> {
    let raw = block.raw.as_str();
    match block.kind {
        BlockKind::Heading(level) => heading_to_html(raw, level),
        BlockKind::Code => Ok(code_to_html(raw)),
        BlockKind::Quote => quote_to_html(raw),
        BlockKind::UnorderedList => list_to_html(raw, false),
        BlockKind::OrderedList => list_to_html(raw, true),
        BlockKind::Paragraph => paragraph_to_html(raw),
    }
}

/// Map one inline span onto its HTML leaf.
pub fn span_to_html_node(span: &TextSpan) -> HtmlNode {
    let content = span.content();
    match span.kind() {
        SpanKind::Plain => HtmlNode::text(content),
        SpanKind::Bold => HtmlNode::leaf("b", content),
        SpanKind::Italic => HtmlNode::leaf("i", content),
        SpanKind::Code => HtmlNode::leaf("code", content),
        SpanKind::Link => {
            HtmlNode::leaf("a", content).with_attribute("href", span.target().unwrap_or_default())
        }
        SpanKind::Image => HtmlNode::leaf("img", "")
            .with_attribute("src", span.target().unwrap_or_default())
            .with_attribute("alt", content),
    }
}

fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, ConvertError> {
    Ok(split_inline(text)?.iter().map(span_to_html_node).collect())
}

fn heading_to_html(raw: &str, level: u8) -> Result<HtmlNode, ConvertError> {
    let text = raw.trim_start_matches('#');
    let text = text.strip_prefix(' ').unwrap_or(text);
    Ok(HtmlNode::parent(format!("h{level}"), text_to_children(text)?))
}

fn code_to_html(raw: &str) -> HtmlNode {
    let lines: Vec<&str> = raw.split('\n').collect();
    let inner = match lines.len() {
        0..=2 => &[][..],
        n => &lines[1..n - 1],
    };
    let mut text = inner.join("\n");
    text.push('\n');
    HtmlNode::parent("pre", vec![HtmlNode::leaf("code", text)])
}

fn quote_to_html(raw: &str) -> Result<HtmlNode, ConvertError> {
    let text = raw
        .split('\n')
        .map(|line| {
            let line = line.strip_prefix('>').unwrap_or(line);
            line.strip_prefix(' ').unwrap_or(line)
        })
        .collect::<Vec<_>>()
        .join(" ");
    Ok(HtmlNode::parent("blockquote", text_to_children(&text)?))
}

fn list_to_html(raw: &str, ordered: bool) -> Result<HtmlNode, ConvertError> {
    let mut items = Vec::new();
    for (i, line) in raw.split('\n').enumerate() {
        let prefix = if ordered {
            format!("{}. ", i + 1)
        } else {
            "- ".to_string()
        };
        let text = line.strip_prefix(prefix.as_str()).unwrap_or(line);
        items.push(HtmlNode::parent("li", text_to_children(text)?));
    }
    let tag = if ordered { "ol" } else { "ul" };
    Ok(HtmlNode::parent(tag, items))
}

fn paragraph_to_html(raw: &str) -> Result<HtmlNode, ConvertError> {
    let text = raw.split('\n').collect::<Vec<_>>().join(" ");
    Ok(HtmlNode::parent("p", text_to_children(&text)?))
}
