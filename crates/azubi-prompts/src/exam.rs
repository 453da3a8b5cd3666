use azubi_core::catalog::PRUEFUNGSUEBUNGEN;
use azubi_core::schema::{SCHULE, SCHWERPUNKTE, TOOLS};
use azubi_core::DocumentContext;

use crate::markup::{bullets, bullets_or_placeholder, or_placeholder, section};

const RUBRIC: &[&str] = &[
    "Vollständigkeit & Nachvollziehbarkeit",
    "Form & Layout (professionell, CI falls vorhanden)",
    "Korrektheit (fachlich, rechnerisch)",
    "Begründungen/Entscheidungen kurz erläutert",
    "Zeitmanagement eingehalten",
];

/// Context blocks drawn from the practice week: (field name, label).
const CONTEXT_BLOCKS: &[(&str, &str)] = &[
    (SCHWERPUNKTE, "Schwerpunkte"),
    (TOOLS, "Werkzeuge"),
    (SCHULE, "Bezug Berufsschule"),
];

/// Render the exam-practice prompt: fixed exercise pool, practice-week context, rubric.
pub fn render(ctx: &DocumentContext) -> String {
    let period = ctx.period_label();
    let mut parts = vec![
        "Rolle: Prüfer:in (Übungsaufgaben)".to_string(),
        format!(
            "Modus: {} · Zeitraum: {}",
            ctx.mode_label(),
            or_placeholder(period.as_deref())
        ),
        section("Aufgabenpool (wähle 2–3)"),
        bullets(PRUEFUNGSUEBUNGEN),
        section("Kontext aus der Praxiswoche"),
    ];

    let context = CONTEXT_BLOCKS
        .iter()
        .map(|(field, label)| {
            format!("**{label}:**\n{}", bullets_or_placeholder(ctx.field(field)))
        })
        .collect::<Vec<_>>()
        .join("\n\n");
    parts.push(context);

    parts.push(section("Abgabe & Bewertung (Kurzrubrik)"));
    parts.push(bullets(RUBRIC));

    parts.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use azubi_core::{Mode, Trade};

    #[test]
    fn pool_and_rubric_always_present() {
        let out = render(&DocumentContext::new(Trade::Bueromanagement, Mode::Ausbildung));
        for item in PRUEFUNGSUEBUNGEN.iter().chain(RUBRIC) {
            assert!(out.contains(&format!("- {item}")), "missing {item}");
        }
        assert!(out.starts_with(
            "Rolle: Prüfer:in (Übungsaufgaben)\n\
             Modus: Ausbildung (Büromanagement) · Zeitraum: —"
        ));
    }

    #[test]
    fn context_blocks_render_placeholder_when_empty() {
        let ctx = DocumentContext::new(Trade::Bueromanagement, Mode::Ausbildung)
            .with_field(TOOLS, ["MS Excel"]);
        let out = render(&ctx);
        assert!(out.contains(
            "## Kontext aus der Praxiswoche\n\n\
             **Schwerpunkte:**\n—\n\n\
             **Werkzeuge:**\n- MS Excel\n\n\
             **Bezug Berufsschule:**\n—\n\n\
             ## Abgabe & Bewertung (Kurzrubrik)\n\n"
        ));
    }

    #[test]
    fn ends_with_rubric() {
        let out = render(&DocumentContext::new(Trade::Bueromanagement, Mode::Ausbildung));
        assert!(out.ends_with("- Zeitmanagement eingehalten"));
    }
}
