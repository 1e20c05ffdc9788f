use std::sync::OnceLock;

use regex::Regex;

use crate::block::{SpanKind, TextSpan};
use crate::error::ConvertError;

fn image_regex() -> &'static Regex {
    static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
    IMAGE_REGEX.get_or_init(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("Invalid image regex"))
}

fn link_regex() -> &'static Regex {
    static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
    LINK_REGEX.get_or_init(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("Invalid link regex"))
}

/// Split inline markdown text into formatted spans.
///
/// Stages run in a fixed order (images, links, code, italic, bold) and each
/// one only re-splits spans that are still plain, so markup inside an
/// already recognised span is left alone.
pub fn split_inline(text: &str) -> Result<Vec<TextSpan>, ConvertError> {
    let spans = vec![TextSpan::plain(text)];
    let spans = split_pattern(spans, image_regex(), |alt: &str, src: &str| {
        TextSpan::image(alt, src)
    });
    let spans = split_pattern(spans, link_regex(), |label: &str, url: &str| {
        TextSpan::link(label, url)
    });
    let spans = split_delimiter(spans, "`", SpanKind::Code)?;
    let spans = split_delimiter(spans, "_", SpanKind::Italic)?;
    split_delimiter(spans, "**", SpanKind::Bold)
}

/// Cut every match of a `[label](target)`-style pattern out of plain spans.
fn split_pattern<F>(spans: Vec<TextSpan>, pattern: &Regex, make: F) -> Vec<TextSpan>
where
    F: Fn(&str, &str) -> TextSpan,
{
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let mut pieces = Vec::new();
        let text = span.content();
        let mut rest = 0;

        for caps in pattern.captures_iter(text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let before = &text[rest..whole.start()];
            if !before.is_empty() {
                pieces.push(TextSpan::plain(before));
            }
            pieces.push(make(&caps[1], &caps[2]));
            rest = whole.end();
        }

        if pieces.is_empty() {
            out.push(span);
            continue;
        }

        let tail = &text[rest..];
        if !tail.is_empty() {
            pieces.push(TextSpan::plain(tail));
        }
        out.extend(pieces);
    }

    out
}

/// Split plain spans on a paired delimiter such as `**` or `` ` ``.
fn split_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>, ConvertError> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() || span.content().len() < delimiter.len() {
            out.push(span);
            continue;
        }

        let text = span.content();
        let starts = text.starts_with(delimiter);
        let ends = text.ends_with(delimiter);
        let fragments: Vec<&str> = text.split(delimiter).filter(|f| !f.is_empty()).collect();

        // Opening and closing delimiters on the same side of the text shift
        // the expected fragment count by one.
        let expected_parity = if starts ^ ends { 0 } else { 1 };
        if fragments.len() % 2 != expected_parity {
            return Err(ConvertError::MalformedInlineMarkup {
                delimiter: delimiter.to_string(),
            });
        }

        let mut styled = starts;
        for fragment in fragments {
            if styled {
                out.push(TextSpan::styled(fragment, kind));
            } else {
                out.push(TextSpan::plain(fragment));
            }
            styled = !styled;
        }
    }

    Ok(out)
}
