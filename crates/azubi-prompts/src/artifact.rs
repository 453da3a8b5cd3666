use azubi_core::{TemplateKind, Trade};
use chrono::NaiveDateTime;

/// File name a rendered document is saved under.
///
/// Office documents carry the date only; the metal prompt also carries the
/// time of day, since several prompts are usually built per session.
pub fn artifact_filename(kind: TemplateKind, trade: Trade, at: NaiveDateTime) -> String {
    let day = at.format("%Y%m%d");
    match kind {
        TemplateKind::JournalEntry => format!("berichtsheft_{}_{day}.txt", trade.as_str()),
        TemplateKind::TaskPrompt => format!("arbeitsauftrag_prompt_{day}.txt"),
        TemplateKind::ExamPrompt => format!("pruefung_uebungen_{day}.txt"),
        TemplateKind::AssistantPrompt => {
            format!("prompt_metall_azubis_{}.txt", at.format("%Y%m%d_%H%M"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(9, 4, 59)
            .unwrap()
    }

    #[test]
    fn filename_mapping() {
        let cases = vec![
            (
                TemplateKind::JournalEntry,
                Trade::Bueromanagement,
                "berichtsheft_bueromanagement_20240307.txt",
            ),
            (
                TemplateKind::TaskPrompt,
                Trade::Bueromanagement,
                "arbeitsauftrag_prompt_20240307.txt",
            ),
            (
                TemplateKind::ExamPrompt,
                Trade::Bueromanagement,
                "pruefung_uebungen_20240307.txt",
            ),
            (
                TemplateKind::AssistantPrompt,
                Trade::Metall,
                "prompt_metall_azubis_20240307_0904.txt",
            ),
        ];
        for (kind, trade, expected) in cases {
            assert_eq!(artifact_filename(kind, trade, at()), expected, "{kind}");
        }
    }

    #[test]
    fn journal_name_carries_trade_slug() {
        assert_eq!(
            artifact_filename(TemplateKind::JournalEntry, Trade::Metall, at()),
            "berichtsheft_metall_20240307.txt"
        );
    }
}
