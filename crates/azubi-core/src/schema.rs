//! Declarative description of every input a builder offers.
//!
//! The same table drives the form skeleton, input validation and the
//! collector calls, so adding a field is a one-line change here.

use crate::catalog;
use crate::trade::{Mode, Trade};

// Field names shared between the schema, forms and templates.
pub const SCHWERPUNKTE: &str = "schwerpunkte";
pub const TAETIGKEITEN: &str = "taetigkeiten";
pub const TOOLS: &str = "tools";
pub const KOMPETENZEN: &str = "kompetenzen";
pub const NACHWEISE: &str = "nachweise";
pub const SCHULE: &str = "schule";

pub const VERFAHREN: &str = "verfahren";
pub const MASCHINEN: &str = "maschinen";
pub const WERKSTOFFE: &str = "werkstoffe";
pub const NORMEN: &str = "normen";
pub const MESSMITTEL: &str = "messmittel";
pub const SICHERHEIT: &str = "sicherheit";
pub const DIDAKTIK: &str = "didaktik";
pub const OUTPUT: &str = "output";
pub const MATERIALIEN: &str = "materialien";

// Scalar names.
pub const BERUF: &str = "beruf";
pub const AUSBILDUNGSJAHR: &str = "ausbildungsjahr";
pub const LERNORT: &str = "lernort";
pub const AUFGABENTYP: &str = "aufgabentyp";
pub const SPRACHE: &str = "sprache";
pub const TON: &str = "ton";
pub const TOLERANZEN: &str = "toleranzen";
pub const LERNZIEL: &str = "lernziel";
pub const ZEIT_MIN: &str = "zeit_min";
pub const ZEICHNUNG: &str = "zeichnung";
pub const KONTEXT: &str = "kontext";

pub const ZEIT_MIN_RANGE: std::ops::RangeInclusive<u32> = 5..=480;
pub const ZEIT_MIN_DEFAULT: u32 = 60;

/// A list-valued input: catalog picks, free-text lines, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub catalog: &'static [&'static str],
    pub free_text: bool,
    /// Pre-selected catalog entries of an untouched form.
    pub defaults: &'static [&'static str],
}

/// A single-valued input. An empty `choices` list means free input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalarSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub choices: &'static [&'static str],
    pub default: &'static str,
}

impl ScalarSpec {
    pub fn is_choice(&self) -> bool {
        !self.choices.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub fields: &'static [FieldSpec],
    pub scalars: &'static [ScalarSpec],
}

impl Schema {
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn scalar(&self, name: &str) -> Option<&'static ScalarSpec> {
        self.scalars.iter().find(|s| s.name == name)
    }
}

/// Look up the input table for a trade. `mode` only matters for the office builder.
pub fn schema_for(trade: Trade, mode: Mode) -> Schema {
    match (trade, mode) {
        (Trade::Bueromanagement, Mode::Ausbildung) => Schema {
            fields: OFFICE_AUSBILDUNG,
            scalars: &[],
        },
        (Trade::Bueromanagement, Mode::Berufsvorbereitung) => Schema {
            fields: OFFICE_BERUFSVORBEREITUNG,
            scalars: &[],
        },
        (Trade::Metall, _) => Schema {
            fields: METALL_FIELDS,
            scalars: METALL_SCALARS,
        },
    }
}

/// Catalog field that also takes free-text lines and starts empty.
const fn open_field(
    name: &'static str,
    label: &'static str,
    catalog: &'static [&'static str],
) -> FieldSpec {
    FieldSpec {
        name,
        label,
        catalog,
        free_text: true,
        defaults: &[],
    }
}

const OFFICE_TAIL: [FieldSpec; 5] = [
    open_field(TAETIGKEITEN, "Tätigkeiten/Aufgaben", catalog::TAETIGKEITEN),
    open_field(TOOLS, "Werkzeuge/Tools", catalog::TOOLS),
    open_field(KOMPETENZEN, "Kompetenzen/Ziele", catalog::KOMPETENZEN),
    open_field(NACHWEISE, "Nachweise/Dokumente", catalog::NACHWEISE),
    open_field(SCHULE, "Berufsschule/Verknüpfung", catalog::BERUFSSCHULE),
];

const OFFICE_AUSBILDUNG: &[FieldSpec] = &[
    open_field(SCHWERPUNKTE, "Lernfelder/Schwerpunkte", catalog::LERNFELDER_BUERO),
    OFFICE_TAIL[0],
    OFFICE_TAIL[1],
    OFFICE_TAIL[2],
    OFFICE_TAIL[3],
    OFFICE_TAIL[4],
];

const OFFICE_BERUFSVORBEREITUNG: &[FieldSpec] = &[
    open_field(
        SCHWERPUNKTE,
        "Schwerpunkte (Berufsvorbereitung)",
        catalog::SCHWERPUNKTE_BERUFSVORBEREITUNG,
    ),
    OFFICE_TAIL[0],
    OFFICE_TAIL[1],
    OFFICE_TAIL[2],
    OFFICE_TAIL[3],
    OFFICE_TAIL[4],
];

const METALL_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: OUTPUT,
        label: "Gewünschtes Output-Format",
        catalog: catalog::OUTPUTFORMATE,
        free_text: false,
        defaults: &["Schritt-für-Schritt-Anleitung"],
    },
    open_field(VERFAHREN, "Verfahren/Arbeitsgänge", catalog::VERFAHREN),
    open_field(MASCHINEN, "Maschinen/Steuerungen", catalog::MASCHINEN),
    open_field(WERKSTOFFE, "Werkstoffe", catalog::WERKSTOFFE),
    open_field(NORMEN, "Normen/Regeln", catalog::NORMEN),
    open_field(MESSMITTEL, "Messmittel/Prüfkriterien", catalog::MESSMITTEL),
    open_field(
        SICHERHEIT,
        "Sicherheitsaspekte (PSA, Gefahren, Unterweisung)",
        catalog::SICHERHEIT,
    ),
    FieldSpec {
        name: DIDAKTIK,
        label: "Didaktischer Ansatz",
        catalog: catalog::DIDAKTIK,
        free_text: false,
        defaults: &["4-Stufen-Methode"],
    },
    FieldSpec {
        name: MATERIALIEN,
        label: "Material-/Werkzeugliste (eine Position pro Zeile)",
        catalog: &[],
        free_text: true,
        defaults: &[],
    },
];

const fn choice(
    name: &'static str,
    label: &'static str,
    choices: &'static [&'static str],
    default: &'static str,
) -> ScalarSpec {
    ScalarSpec {
        name,
        label,
        choices,
        default,
    }
}

const fn free(name: &'static str, label: &'static str, default: &'static str) -> ScalarSpec {
    ScalarSpec {
        name,
        label,
        choices: &[],
        default,
    }
}

const METALL_SCALARS: &[ScalarSpec] = &[
    choice(
        BERUF,
        "Ausbildungsberuf",
        catalog::AUSBILDUNGSBERUFE_METALL,
        "Industriemechaniker:in",
    ),
    choice(AUSBILDUNGSJAHR, "Ausbildungsjahr", catalog::AUSBILDUNGSJAHRE, "1"),
    choice(LERNORT, "Lernort", catalog::LERNORTE, "Betrieb"),
    choice(
        AUFGABENTYP,
        "Aufgabentyp",
        catalog::AUFGABENTYPEN,
        "Arbeitsauftrag erstellen",
    ),
    choice(SPRACHE, "Sprache", catalog::SPRACHEN, "Deutsch"),
    choice(TON, "Ton & Stil", catalog::TON, "instruktiv & geduldig"),
    free(
        TOLERANZEN,
        "Maß-/Form-/Lagetoleranzen (z. B. Ø20 H7, Ra 1,6, Ⓜ⌀0,02)",
        "",
    ),
    free(LERNZIEL, "Lernziel(e) (beobachtbar, SMART)", ""),
    free(ZEIT_MIN, "Geplante Zeit (Minuten)", "60"),
    free(
        ZEICHNUNG,
        "Link/Referenz: Zeichnung/Skizze/Foto (optional)",
        "",
    ),
    free(
        KONTEXT,
        "Kontext/Startlage (z. B. Werkstückbeschreibung, Ist-Stand, typische Fehler)",
        "",
    ),
];
