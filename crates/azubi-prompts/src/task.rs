use azubi_core::schema::{KOMPETENZEN, NACHWEISE, SCHWERPUNKTE, TAETIGKEITEN, TOOLS};
use azubi_core::DocumentContext;

use crate::markup::{bullets_or_placeholder, or_placeholder};

const BLOCKS: &[(&str, &str)] = &[
    (SCHWERPUNKTE, "Schwerpunkte"),
    (TAETIGKEITEN, "Tätigkeiten"),
    (TOOLS, "Werkzeuge"),
    (KOMPETENZEN, "Kompetenzen (Ziele)"),
    (NACHWEISE, "Nachweise"),
];

/// Render the prompt asking an AI assistant to draft an Arbeitsauftrag.
pub fn render(ctx: &DocumentContext) -> String {
    let mut prompt = String::new();
    prompt.push_str("Rolle: Ausbilder:in\n");
    prompt.push_str("Auftrag: Detaillierten Arbeitsauftrag formulieren.\n\n");

    let period = ctx.period_label();
    prompt.push_str("Rahmen:\n");
    prompt.push_str(&format!("- Modus: {}\n", ctx.mode_label()));
    prompt.push_str(&format!(
        "- Zeitraum: {}\n\n",
        or_placeholder(period.as_deref())
    ));

    for (field, heading) in BLOCKS {
        prompt.push_str(&format!(
            "{heading}:\n{}\n\n",
            bullets_or_placeholder(ctx.field(field))
        ));
    }

    append_instructions(&mut prompt);
    prompt.trim().to_string()
}

fn append_instructions(prompt: &mut String) {
    prompt.push_str(
        "Bitte gib aus:\n\
         1) Ziel(e) in beobachtbaren Kriterien\n\
         2) Schritt-für-Schritt-Ablauf (mit Zeitindikationen, wo sinnvoll)\n\
         3) Qualitätskriterien & typische Fehler\n\
         4) Übergabe/Abnahme (inkl. Checkliste kurz)\n\
         5) Reflexionsfragen für den Azubi\n\
         Klar, prägnant, handlungsorientiert, max. 500 Wörter.\n",
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use azubi_core::{Mode, ReportingPeriod, Trade};
    use chrono::NaiveDate;

    fn minimal_ctx() -> DocumentContext {
        DocumentContext::new(Trade::Bueromanagement, Mode::Ausbildung).with_period(
            ReportingPeriod::single_day(NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()),
        )
    }

    #[test]
    fn frame_lists_mode_and_period() {
        let out = render(&minimal_ctx());
        assert!(out.starts_with(
            "Rolle: Ausbilder:in\nAuftrag: Detaillierten Arbeitsauftrag formulieren.\n\n"
        ));
        assert!(out.contains("- Modus: Ausbildung (Büromanagement)\n- Zeitraum: 07.03.2024\n"));
    }

    #[test]
    fn every_block_present_even_when_empty() {
        let out = render(&minimal_ctx());
        for (_, heading) in BLOCKS {
            assert!(out.contains(&format!("{heading}:\n—\n")), "missing {heading}");
        }
    }

    #[test]
    fn items_render_as_bullets() {
        let ctx = minimal_ctx()
            .with_field(KOMPETENZEN, ["Sorgfalt/Genauigkeit", "Digitale Zusammenarbeit"]);
        let out = render(&ctx);
        assert!(out.contains(
            "Kompetenzen (Ziele):\n- Sorgfalt/Genauigkeit\n- Digitale Zusammenarbeit\n\nNachweise:"
        ));
    }

    #[test]
    fn ends_with_length_constraint() {
        let out = render(&minimal_ctx());
        assert!(out.contains("Bitte gib aus:\n1) Ziel(e) in beobachtbaren Kriterien\n"));
        assert!(out.ends_with("Klar, prägnant, handlungsorientiert, max. 500 Wörter."));
    }

    #[test]
    fn missing_period_uses_placeholder() {
        let ctx = DocumentContext::new(Trade::Bueromanagement, Mode::Ausbildung);
        assert!(render(&ctx).contains("- Zeitraum: —\n"));
    }
}
