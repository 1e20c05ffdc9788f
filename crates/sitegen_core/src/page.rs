use thiserror::Error;

const TITLE_PLACEHOLDER: &str = "{{ Title }}";
const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("markdown document must start with an h1 heading (`# Title`)")]
    MissingTitle,
}

/// Title of a page, taken from a leading `# ` line.
pub fn extract_title(markdown: &str) -> Result<&str, PageError> {
    let first_line = markdown.split('\n').next().unwrap_or_default();
    first_line
        .strip_prefix("# ")
        .ok_or(PageError::MissingTitle)
}

/// Fill the template placeholders and point root-relative links at `base_path`.
pub fn render_page(template: &str, title: &str, content: &str, base_path: &str) -> String {
    let page = template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content);
    rewrite_base_path(&page, base_path)
}

/// Rewrite `href="/` and `src="/` prefixes to start with `base_path` instead.
pub fn rewrite_base_path(html: &str, base_path: &str) -> String {
    let base = normalize_base_path(base_path);
    if base == "/" {
        return html.to_string();
    }
    html.replace("href=\"/", &format!("href=\"{base}"))
        .replace("src=\"/", &format!("src=\"{base}"))
}

fn normalize_base_path(base_path: &str) -> String {
    if base_path.ends_with('/') {
        base_path.to_string()
    } else {
        format!("{base_path}/")
    }
}
