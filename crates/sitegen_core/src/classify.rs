use crate::block::{Block, BlockKind};

const FENCE: &str = "```";

/// Split a document into trimmed, non-empty blocks separated by blank lines.
pub fn markdown_to_blocks(markdown: &str) -> Vec<String> {
    markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}

/// Classify one block. Falls back to a paragraph when nothing else matches.
pub fn block_to_block_type(block: &str) -> BlockKind {
    if let Some(level) = heading_level(block) {
        return BlockKind::Heading(level);
    }

    if block.starts_with(FENCE) && block.ends_with("\n```") {
        return BlockKind::Code;
    }

    if every_line(block, |line| line.starts_with('>')) {
        return BlockKind::Quote;
    }

    if every_line(block, |line| line.starts_with('-')) {
        return BlockKind::UnorderedList;
    }

    if is_ordered_list(block) {
        return BlockKind::OrderedList;
    }

    BlockKind::Paragraph
}

/// Split and classify a whole document.
pub fn classify(markdown: &str) -> Vec<Block> {
    markdown_to_blocks(markdown)
        .into_iter()
        .map(|raw| {
            let kind = block_to_block_type(&raw);
            log::debug!("classified block as {:?}", kind);
            Block { raw, kind }
        })
        .collect()
}

/// Level of a `#`-prefixed heading: 1 to 6 hashes followed by a space.
pub(crate) fn heading_level(block: &str) -> Option<u8> {
    let hashes = block.bytes().take(7).take_while(|&b| b == b'#').count();
    if (1..=6).contains(&hashes) && block.as_bytes().get(hashes) == Some(&b' ') {
        Some(hashes as u8)
    } else {
        None
    }
}

fn is_ordered_list(block: &str) -> bool {
    block
        .split('\n')
        .enumerate()
        .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)))
}

// Lines are split on `\n` only; a trailing `\r` stays part of the line.
fn every_line(block: &str, pred: impl Fn(&str) -> bool) -> bool {
    block.split('\n').all(pred)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn splits_on_blank_lines() {
        let md = "\n# I'm a header\n\nTable of contents:\n  - item 1\n  - item 2\n\nand finally the rest\n";
        assert_eq!(
            markdown_to_blocks(md),
            vec![
                "# I'm a header",
                "Table of contents:\n  - item 1\n  - item 2",
                "and finally the rest",
            ]
        );
    }

    #[test]
    fn never_yields_empty_blocks() {
        let blocks = markdown_to_blocks("\n\n\n\n  \n\nfirst\n\n\n\n\n\nsecond\n\n   \n\n");
        assert_eq!(blocks, vec!["first", "second"]);
    }

    #[test]
    fn empty_document_has_no_blocks() {
        assert!(markdown_to_blocks("").is_empty());
    }

    #[rstest]
    #[case::h1("# heading", 1)]
    #[case::h2("## heading", 2)]
    #[case::h3("### heading", 3)]
    #[case::h4("#### heading", 4)]
    #[case::h5("##### heading", 5)]
    #[case::h6("###### heading", 6)]
    #[case::trailing_newline("# heading\n", 1)]
    fn headings(#[case] input: &str, #[case] level: u8) {
        assert_eq!(block_to_block_type(input), BlockKind::Heading(level));
    }

    #[rstest]
    #[case::bare_hash("#")]
    #[case::bare_hashes("######")]
    #[case::seven_hashes("####### heading7")]
    #[case::no_space("#nospace")]
    #[case::no_space_h6("######nospace6")]
    #[case::hash_later("a # b")]
    #[case::mixed_run("#a# b")]
    fn not_headings(#[case] input: &str) {
        assert_eq!(block_to_block_type(input), BlockKind::Paragraph);
    }

    #[rstest]
    #[case::fenced("```\ncode\n```", BlockKind::Code)]
    #[case::with_language("```rust\nlet x = 1;\n```", BlockKind::Code)]
    #[case::fence_not_on_own_line("```\ncode```", BlockKind::Paragraph)]
    #[case::unterminated("```\ncode", BlockKind::Paragraph)]
    #[case::quote("> a\n> b", BlockKind::Quote)]
    #[case::quote_no_space(">a\n>b", BlockKind::Quote)]
    #[case::quote_broken("> a\nb", BlockKind::Paragraph)]
    #[case::unordered("- a\n- b\n- c", BlockKind::UnorderedList)]
    #[case::unordered_broken("- a\nb", BlockKind::Paragraph)]
    #[case::ordered("1. a\n2. b\n3. c", BlockKind::OrderedList)]
    #[case::ordered_single("1. a", BlockKind::OrderedList)]
    #[case::ordered_out_of_sequence("1. a\n3. b\n2. c", BlockKind::Paragraph)]
    #[case::ordered_wrong_start("2. a\n3. b\n4. c", BlockKind::Paragraph)]
    #[case::ordered_repeat("1. a\n1. b", BlockKind::Paragraph)]
    #[case::ordered_no_space("1.a\n2.b", BlockKind::Paragraph)]
    #[case::paragraph("just some text\nover two lines", BlockKind::Paragraph)]
    fn block_kinds(#[case] input: &str, #[case] expected: BlockKind) {
        assert_eq!(block_to_block_type(input), expected);
    }

    #[test]
    fn heading_wins_over_other_rules() {
        assert_eq!(block_to_block_type("# a\n- b"), BlockKind::Heading(1));
    }

    #[test]
    fn classify_keeps_order() {
        let blocks = classify("# Title\n\npara\n\n- a\n- b\n\n1. x");
        let kinds: Vec<_> = blocks.iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Heading(1),
                BlockKind::Paragraph,
                BlockKind::UnorderedList,
                BlockKind::OrderedList,
            ]
        );
        assert_eq!(blocks[1].raw, "para");
    }
}
