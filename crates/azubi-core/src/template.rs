use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AzubiError;

/// The fixed document shapes the assembler can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    /// Berichtsheft entry.
    JournalEntry,
    /// Arbeitsauftrag prompt.
    TaskPrompt,
    /// Prüfungsübungen prompt.
    ExamPrompt,
    /// Coaching prompt for an AI assistant (metalworking).
    AssistantPrompt,
}

impl TemplateKind {
    pub const ALL: &[TemplateKind] = &[
        TemplateKind::JournalEntry,
        TemplateKind::TaskPrompt,
        TemplateKind::ExamPrompt,
        TemplateKind::AssistantPrompt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::JournalEntry => "journal",
            TemplateKind::TaskPrompt => "task",
            TemplateKind::ExamPrompt => "exam",
            TemplateKind::AssistantPrompt => "assistant",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TemplateKind::JournalEntry => "Berichtsheft",
            TemplateKind::TaskPrompt => "Arbeitsauftrag (Prompt)",
            TemplateKind::ExamPrompt => "Prüfungsübungen",
            TemplateKind::AssistantPrompt => "Prompt Metallhandwerk",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "journal" | "berichtsheft" => Some(TemplateKind::JournalEntry),
            "task" | "arbeitsauftrag" => Some(TemplateKind::TaskPrompt),
            "exam" | "pruefung" => Some(TemplateKind::ExamPrompt),
            "assistant" | "prompt" => Some(TemplateKind::AssistantPrompt),
            _ => None,
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TemplateKind {
    type Err = AzubiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateKind::parse_str(&s.trim().to_lowercase())
            .ok_or_else(|| AzubiError::UnknownKind(s.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_str_all() {
        for kind in TemplateKind::ALL {
            assert_eq!(TemplateKind::parse_str(kind.as_str()), Some(*kind));
        }
        assert_eq!(
            TemplateKind::parse_str("berichtsheft"),
            Some(TemplateKind::JournalEntry)
        );
        assert_eq!(TemplateKind::parse_str("memo"), None);
    }

    #[test]
    fn from_str_reports_unknown() {
        let err = "memo".parse::<TemplateKind>().unwrap_err();
        assert!(err.to_string().contains("memo"));
    }
}
