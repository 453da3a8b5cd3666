use azubi_core::schema::{KOMPETENZEN, NACHWEISE, SCHULE, SCHWERPUNKTE, TAETIGKEITEN, TOOLS};
use azubi_core::DocumentContext;

use crate::markup::{bullets, or_placeholder, section};

/// Journal sections in print order: (field name, heading).
const SECTIONS: &[(&str, &str)] = &[
    (SCHWERPUNKTE, "Schwerpunkte"),
    (TAETIGKEITEN, "Tätigkeiten"),
    (TOOLS, "Eingesetzte Werkzeuge/Tools"),
    (KOMPETENZEN, "Erworbene Kompetenzen"),
    (NACHWEISE, "Nachweise/Belege"),
    (SCHULE, "Verknüpfung zur Berufsschule"),
];

/// Render a Berichtsheft entry. Sections without entries are left out.
pub fn render(ctx: &DocumentContext) -> String {
    let period = ctx.period_label();
    let mut parts = vec![format!(
        "**Modus:** {}\n**Zeitraum:** {}",
        ctx.mode_label(),
        or_placeholder(period.as_deref())
    )];

    for (field, heading) in SECTIONS {
        let items = ctx.field(field);
        if items.is_empty() {
            continue;
        }
        parts.push(section(heading));
        parts.push(bullets(items));
    }

    parts.join("\n").trim().to_string()
}
