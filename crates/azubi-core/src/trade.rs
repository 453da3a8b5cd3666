use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AzubiError;
use crate::template::TemplateKind;

/// The occupation a builder is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trade {
    Bueromanagement,
    Metall,
}

impl Trade {
    pub const ALL: &[Trade] = &[Trade::Bueromanagement, Trade::Metall];

    /// Lowercase ASCII identifier, also used in artifact file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Trade::Bueromanagement => "bueromanagement",
            Trade::Metall => "metall",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Trade::Bueromanagement => "Kaufmann/-frau für Büromanagement",
            Trade::Metall => "Metallhandwerk",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "bueromanagement" | "büromanagement" | "buero" => Some(Trade::Bueromanagement),
            "metall" | "metal" => Some(Trade::Metall),
            _ => None,
        }
    }

    /// Document kinds the trade's builder offers, default first.
    pub fn template_kinds(&self) -> &'static [TemplateKind] {
        match self {
            Trade::Bueromanagement => &[
                TemplateKind::JournalEntry,
                TemplateKind::TaskPrompt,
                TemplateKind::ExamPrompt,
            ],
            Trade::Metall => &[TemplateKind::AssistantPrompt],
        }
    }

    pub fn default_kind(&self) -> TemplateKind {
        self.template_kinds()[0]
    }
}

impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for Trade {
    type Err = AzubiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Trade::parse_str(&s.trim().to_lowercase())
            .ok_or_else(|| AzubiError::UnknownTrade(s.into()))
    }
}

/// Apprenticeship proper versus the pre-vocational track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Ausbildung,
    Berufsvorbereitung,
}

impl Mode {
    pub const ALL: &[Mode] = &[Mode::Ausbildung, Mode::Berufsvorbereitung];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Ausbildung => "ausbildung",
            Mode::Berufsvorbereitung => "berufsvorbereitung",
        }
    }

    /// Label shown in rendered documents.
    pub fn label(&self, trade: Trade) -> &'static str {
        match (self, trade) {
            (Mode::Ausbildung, Trade::Bueromanagement) => "Ausbildung (Büromanagement)",
            (Mode::Ausbildung, Trade::Metall) => "Ausbildung (Metallhandwerk)",
            (Mode::Berufsvorbereitung, _) => "Berufsvorbereitung",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "ausbildung" => Some(Mode::Ausbildung),
            "berufsvorbereitung" | "bv" => Some(Mode::Berufsvorbereitung),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mode {
    type Err = AzubiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::parse_str(&s.trim().to_lowercase())
            .ok_or_else(|| AzubiError::UnknownMode(s.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trade_parse_accepts_aliases() {
        assert_eq!("Metall".parse::<Trade>().unwrap(), Trade::Metall);
        assert_eq!("büromanagement".parse::<Trade>().unwrap(), Trade::Bueromanagement);
        assert!("schreiner".parse::<Trade>().is_err());
    }

    #[test]
    fn trade_as_str_roundtrip() {
        for trade in Trade::ALL {
            assert_eq!(Trade::parse_str(trade.as_str()), Some(*trade));
        }
    }

    #[test]
    fn default_kind_per_trade() {
        assert_eq!(Trade::Bueromanagement.default_kind(), TemplateKind::JournalEntry);
        assert_eq!(Trade::Metall.default_kind(), TemplateKind::AssistantPrompt);
    }

    #[test]
    fn mode_labels() {
        assert_eq!(
            Mode::Ausbildung.label(Trade::Bueromanagement),
            "Ausbildung (Büromanagement)"
        );
        assert_eq!(
            Mode::Ausbildung.label(Trade::Metall),
            "Ausbildung (Metallhandwerk)"
        );
        assert_eq!(
            Mode::Berufsvorbereitung.label(Trade::Bueromanagement),
            "Berufsvorbereitung"
        );
        assert_eq!(Mode::Berufsvorbereitung.to_string(), "berufsvorbereitung");
        assert_eq!(Mode::default(), Mode::Ausbildung);
        assert_eq!("BV".parse::<Mode>().unwrap(), Mode::Berufsvorbereitung);
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&Trade::Bueromanagement).unwrap();
        assert_eq!(json, "\"bueromanagement\"");
        let mode: Mode = serde_json::from_str("\"berufsvorbereitung\"").unwrap();
        assert_eq!(mode, Mode::Berufsvorbereitung);
    }
}
