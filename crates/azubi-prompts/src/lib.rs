pub mod artifact;
pub mod assistant;
pub mod companion;
pub mod exam;
pub mod journal;
pub mod markup;
pub mod task;

pub use artifact::artifact_filename;
pub use companion::{companion_json, CompanionPayload};

use azubi_core::{DocumentContext, TemplateKind};

/// Render the document for a given kind and context.
///
/// Pure and total: any context, including a completely empty one,
/// yields a well-formed document.
pub fn assemble(kind: TemplateKind, ctx: &DocumentContext) -> String {
    match kind {
        TemplateKind::JournalEntry => journal::render(ctx),
        TemplateKind::TaskPrompt => task::render(ctx),
        TemplateKind::ExamPrompt => exam::render(ctx),
        TemplateKind::AssistantPrompt => assistant::render(ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use azubi_core::schema::{TAETIGKEITEN, TOOLS};
    use azubi_core::{Mode, ReportingPeriod, Trade};
    use chrono::NaiveDate;

    fn ctx() -> DocumentContext {
        let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        DocumentContext::new(Trade::Bueromanagement, Mode::Ausbildung)
            .with_period(ReportingPeriod::new(from, to))
            .with_field(TAETIGKEITEN, ["E-Mail-Korrespondenz"])
            .with_field(TOOLS, ["MS Outlook", "MS Teams"])
    }

    #[test]
    fn assemble_is_deterministic() {
        for kind in TemplateKind::ALL {
            assert_eq!(assemble(*kind, &ctx()), assemble(*kind, &ctx()));
        }
    }

    #[test]
    fn assemble_never_empty_for_empty_context() {
        let empty = DocumentContext::new(Trade::Metall, Mode::Berufsvorbereitung);
        for kind in TemplateKind::ALL {
            let out = assemble(*kind, &empty);
            assert!(!out.trim().is_empty(), "{kind} rendered nothing");
        }
    }

    #[test]
    fn assemble_dispatches_by_kind() {
        let c = ctx();
        assert!(assemble(TemplateKind::JournalEntry, &c).starts_with("**Modus:**"));
        assert!(assemble(TemplateKind::TaskPrompt, &c).starts_with("Rolle: Ausbilder:in"));
        assert!(assemble(TemplateKind::ExamPrompt, &c).starts_with("Rolle: Prüfer:in"));
        assert!(assemble(TemplateKind::AssistantPrompt, &c).starts_with("Rolle & Ziel:"));
    }
}
