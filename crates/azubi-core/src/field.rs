use serde::{Deserialize, Serialize};

/// Merge catalog picks with free-text lines.
///
/// Picks come first, in the order `catalog` declares them; anything in
/// `selected` that the catalog does not know is ignored. Cleaned free-text
/// lines follow in the order they were entered. Never fails: blank input
/// just contributes nothing.
pub fn collect<C, S>(catalog: &[C], selected: &[S], free_text: &str) -> Vec<String>
where
    C: AsRef<str>,
    S: AsRef<str>,
{
    let mut merged: Vec<String> = catalog
        .iter()
        .map(AsRef::as_ref)
        .filter(|option| selected.iter().any(|s| s.as_ref() == *option))
        .map(str::to_string)
        .collect();
    merged.extend(clean_lines(free_text));
    merged
}

/// Split a free-text block into items, one per non-blank line.
///
/// Leading list markers (`-` and spaces in any combination) are stripped.
pub fn clean_lines(block: &str) -> Vec<String> {
    block
        .lines()
        .map(clean_line)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn clean_line(line: &str) -> &str {
    line.trim().trim_start_matches(['-', ' ']).trim()
}

/// One catalog-plus-free-text input as filled in by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionField {
    pub label: String,
    pub suggested_options: Vec<String>,
    pub selected: Vec<String>,
    pub free_text: String,
}

impl SelectionField {
    pub fn new(label: impl Into<String>, suggested_options: &[&str]) -> Self {
        Self {
            label: label.into(),
            suggested_options: suggested_options.iter().map(|s| s.to_string()).collect(),
            selected: Vec::new(),
            free_text: String::new(),
        }
    }

    pub fn with_selected<I, S>(mut self, selected: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected = selected.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_free_text(mut self, free_text: impl Into<String>) -> Self {
        self.free_text = free_text.into();
        self
    }

    /// Selected options that are not part of the catalog.
    pub fn unknown_selections(&self) -> impl Iterator<Item = &str> {
        self.selected
            .iter()
            .map(String::as_str)
            .filter(|s| !self.suggested_options.iter().any(|o| o == s))
    }

    pub fn merged(&self) -> Vec<String> {
        collect(&self.suggested_options, &self.selected, &self.free_text)
    }
}
