use azubi_core::schema::{
    AUFGABENTYP, AUSBILDUNGSJAHR, BERUF, DIDAKTIK, KONTEXT, LERNORT, LERNZIEL, MASCHINEN,
    MATERIALIEN, MESSMITTEL, NORMEN, OUTPUT, SICHERHEIT, SPRACHE, TOLERANZEN, TON, VERFAHREN,
    WERKSTOFFE, ZEICHNUNG, ZEIT_MIN, ZEIT_MIN_DEFAULT,
};
use azubi_core::DocumentContext;

use crate::markup::{inline, or_placeholder};

pub const GOAL: &str = "Unterstütze die/den Auszubildende:n mit klaren, sicheren, \
                        normgerechten und prüfungsnahen Anweisungen.";

/// Language the assistant is asked to answer in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    German,
    English,
}

impl Language {
    pub fn of(ctx: &DocumentContext) -> Self {
        match ctx.scalar(SPRACHE) {
            Some("Englisch") => Language::English,
            _ => Language::German,
        }
    }

    fn address(&self) -> &'static str {
        match self {
            Language::German => "mich",
            Language::English => "me",
        }
    }

    fn working_language(&self) -> &'static str {
        match self {
            Language::German => "auf Deutsch",
            Language::English => "in English",
        }
    }
}

/// Opening role sentence naming the occupation and training year.
pub fn role_line(ctx: &DocumentContext) -> String {
    format!(
        "Du bist Ausbilder:in/Coach im Metallhandwerk für {} (AJ {}).",
        or_placeholder(ctx.scalar(BERUF)),
        or_placeholder(ctx.scalar(AUSBILDUNGSJAHR))
    )
}

/// Planned time in minutes; the form layer guarantees a valid number.
pub fn minutes(ctx: &DocumentContext) -> u32 {
    ctx.scalar(ZEIT_MIN)
        .and_then(|m| m.parse().ok())
        .unwrap_or(ZEIT_MIN_DEFAULT)
}

/// Render the coaching prompt for metalworking apprentices.
pub fn render(ctx: &DocumentContext) -> String {
    let mut prompt = String::new();
    append_role(&mut prompt, ctx);
    append_context(&mut prompt, ctx);
    append_instructions(&mut prompt, ctx);
    append_output_structure(&mut prompt);
    prompt.trim().to_string()
}

fn append_role(prompt: &mut String, ctx: &DocumentContext) {
    let lang = Language::of(ctx);
    prompt.push_str("Rolle & Ziel:\n");
    prompt.push_str(&format!(
        "{} Sprich {} im Stil: {}. Arbeite {}. Ziel: {GOAL}\n\n",
        role_line(ctx),
        lang.address(),
        or_placeholder(ctx.scalar(TON)),
        lang.working_language(),
    ));
}

fn append_context(prompt: &mut String, ctx: &DocumentContext) {
    let scalar = |name| or_placeholder(ctx.scalar(name)).to_string();
    let list = |name| inline(ctx.field(name));

    let lines = [
        ("Lernort", scalar(LERNORT)),
        ("Aufgabentyp", scalar(AUFGABENTYP)),
        ("Ausbildungsjahr", scalar(AUSBILDUNGSJAHR)),
        ("Verfahren/Arbeitsgänge", list(VERFAHREN)),
        ("Maschinen/Steuerungen", list(MASCHINEN)),
        ("Werkstoffe", list(WERKSTOFFE)),
        ("Normen/Regeln", list(NORMEN)),
        ("Messmittel/Prüfkriterien", list(MESSMITTEL)),
        ("Toleranzen", scalar(TOLERANZEN)),
        ("Sicherheitsaspekte", list(SICHERHEIT)),
        ("Zeitrahmen", format!("{} Minuten", minutes(ctx))),
        ("Materialien/Werkzeuge", list(MATERIALIEN)),
        ("Zeichnung/Referenz", scalar(ZEICHNUNG)),
        ("Startlage/typische Fehler", scalar(KONTEXT)),
        ("Didaktik", list(DIDAKTIK)),
        ("Lernziel(e)", scalar(LERNZIEL)),
    ];

    prompt.push_str("Kontext:\n");
    for (label, value) in lines {
        prompt.push_str(&format!("- {label}: {value}\n"));
    }
    prompt.push('\n');
}

fn append_instructions(prompt: &mut String, ctx: &DocumentContext) {
    prompt.push_str("Aufgaben an die KI:\n");
    prompt.push_str(&format!(
        "1) Erstelle die Ausgabe im/als: {}.\n",
        inline(ctx.field(OUTPUT))
    ));
    prompt.push_str(
        "2) Nenne zuerst Sicherheits-Hinweise (DGUV-konform), dann Material/Setup, dann Vorgehen.\n\
         3) Verwende Nummerierung und, wo sinnvoll, Tabellen.\n\
         4) Mache Maße, Toleranzen, Werkstoff und Messmittel konkret; verweise auf Normstellen \
         (z. B. DIN ISO 2768, ISO 1302) ohne zu erfinden.\n\
         5) Baue Qualitätskriterien ein (z. B. Ø, Längen, Ra, Form-/Lagetoleranzen) und Hinweise \
         zur Selbstkontrolle.\n\
         6) Gib typische Fehlerbilder + Ursachen + Gegenmaßnahmen an (Fehlerkatalog).\n\
         7) Schließe mit Reflexionsfragen fürs Berichtsheft.\n\
         8) Wenn Informationen fehlen, frage gezielt nach (max. 3 Rückfragen).\n\n",
    );
}

fn append_output_structure(prompt: &mut String) {
    prompt.push_str(
        "Ausgabeformat (Beispielstruktur):\n\
         - **Sicherheit**\n\
         - **Material & Rüstung** (Tabelle)\n\
         - **Arbeitsablauf** (Schritte 1..n)\n\
         - **Qualitätsprüfung** (Toleranzen/Messmittel)\n\
         - **Fehlerkatalog**\n\
         - **Reflexion** (3–5 Fragen)\n",
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use azubi_core::{FormInput, Mode, Trade};
    use chrono::NaiveDate;

    fn default_ctx() -> DocumentContext {
        FormInput::new(Trade::Metall, Mode::Ausbildung)
            .into_context(NaiveDate::from_ymd_opt(2024, 3, 7).unwrap())
            .unwrap()
    }

    #[test]
    fn role_and_goal_in_german_by_default() {
        let out = render(&default_ctx());
        assert!(out.starts_with(
            "Rolle & Ziel:\n\
             Du bist Ausbilder:in/Coach im Metallhandwerk für Industriemechaniker:in (AJ 1). \
             Sprich mich im Stil: instruktiv & geduldig. Arbeite auf Deutsch. \
             Ziel: Unterstütze die/den Auszubildende:n mit klaren, sicheren, normgerechten \
             und prüfungsnahen Anweisungen.\n\n"
        ));
    }

    #[test]
    fn english_switches_address_and_language() {
        let ctx = default_ctx().with_scalar(SPRACHE, "Englisch");
        let out = render(&ctx);
        assert!(out.contains("Sprich me im Stil"));
        assert!(out.contains("Arbeite in English."));
    }

    #[test]
    fn empty_context_entries_use_placeholder() {
        let out = render(&default_ctx());
        assert!(out.contains("- Verfahren/Arbeitsgänge: —\n"));
        assert!(out.contains("- Toleranzen: —\n"));
        assert!(out.contains("- Materialien/Werkzeuge: —\n"));
        assert!(out.contains("- Zeitrahmen: 60 Minuten\n"));
        assert!(out.contains("- Didaktik: 4-Stufen-Methode\n"));
    }

    #[test]
    fn lists_are_comma_joined() {
        let ctx = default_ctx()
            .with_field(VERFAHREN, ["Drehen", "Fräsen"])
            .with_field(OUTPUT, ["Checkliste Sicherheit", "Quiz (10 Fragen, gemischt)"])
            .with_scalar(TOLERANZEN, "Ø20 H7, Ra 1,6");
        let out = render(&ctx);
        assert!(out.contains("- Verfahren/Arbeitsgänge: Drehen, Fräsen\n"));
        assert!(out.contains("- Toleranzen: Ø20 H7, Ra 1,6\n"));
        assert!(out.contains(
            "1) Erstelle die Ausgabe im/als: Checkliste Sicherheit, Quiz (10 Fragen, gemischt).\n"
        ));
    }

    #[test]
    fn context_lines_in_fixed_order() {
        let out = render(&default_ctx());
        let order = [
            "- Lernort:",
            "- Aufgabentyp:",
            "- Ausbildungsjahr:",
            "- Zeitrahmen:",
            "- Lernziel(e):",
        ];
        let positions: Vec<usize> = order.iter().map(|l| out.find(l).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn ends_with_output_structure() {
        let out = render(&default_ctx());
        assert!(out.contains("(max. 3 Rückfragen).\n\nAusgabeformat (Beispielstruktur):\n"));
        assert!(out.ends_with("- **Reflexion** (3–5 Fragen)"));
    }

    #[test]
    fn minutes_falls_back_to_default() {
        let ctx = DocumentContext::new(Trade::Metall, Mode::Ausbildung);
        assert_eq!(minutes(&ctx), 60);
        assert_eq!(minutes(&ctx.with_scalar(ZEIT_MIN, "45")), 45);
    }
}
