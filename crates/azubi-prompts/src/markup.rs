//! Small text helpers shared by all templates.

/// Stand-in for an absent optional value.
pub const PLACEHOLDER: &str = "—";

/// One `- item` line per non-blank item.
pub fn bullets<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(AsRef::as_ref)
        .filter(|item| !item.trim().is_empty())
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Like [`bullets`], but renders the placeholder when nothing is listed.
pub fn bullets_or_placeholder<S: AsRef<str>>(items: &[S]) -> String {
    let out = bullets(items);
    if out.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        out
    }
}

/// Comma-separated items on one line, or the placeholder.
pub fn inline<S: AsRef<str>>(items: &[S]) -> String {
    let joined = items
        .iter()
        .map(AsRef::as_ref)
        .filter(|item| !item.trim().is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        joined
    }
}

/// Value of an optional scalar, or the placeholder when absent or blank.
pub fn or_placeholder(value: Option<&str>) -> &str {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => PLACEHOLDER,
    }
}

/// Markdown level-two heading, padded so parts joined by `\n` get blank lines around it.
pub fn section(title: &str) -> String {
    format!("\n## {title}\n")
}
