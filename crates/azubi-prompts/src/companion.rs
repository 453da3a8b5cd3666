use azubi_core::schema::{
    AUFGABENTYP, DIDAKTIK, KONTEXT, LERNORT, LERNZIEL, MASCHINEN, MATERIALIEN, MESSMITTEL,
    NORMEN, OUTPUT, SICHERHEIT, SPRACHE, TOLERANZEN, TON, VERFAHREN, WERKSTOFFE, ZEICHNUNG,
};
use azubi_core::DocumentContext;
use chrono::NaiveDateTime;
use serde::Serialize;

use crate::assistant::{minutes, role_line, GOAL};

pub const BUILDER_NAME: &str = "Promptbuilder Metall (Azubis)";

/// Machine-readable mirror of every collected field of a metal prompt.
#[derive(Debug, Clone, Serialize)]
pub struct CompanionPayload<'a> {
    pub rolle: String,
    pub ziel: &'static str,
    pub lernort: &'a str,
    pub aufgabentyp: &'a str,
    pub sprache: &'a str,
    pub ton: &'a str,
    pub didaktik: &'a [String],
    pub lernziel: &'a str,
    pub verfahren: &'a [String],
    pub maschinen: &'a [String],
    pub werkstoffe: &'a [String],
    pub normen: &'a [String],
    pub messmittel: &'a [String],
    pub toleranzen: &'a str,
    pub sicherheit: &'a [String],
    pub zeit_min: u32,
    pub materialliste: &'a [String],
    pub zeichnung_ref: &'a str,
    pub kontext: &'a str,
    #[serde(rename = "gewünschter_output")]
    pub gewuenschter_output: &'a [String],
    pub meta: Meta,
}

#[derive(Debug, Clone, Serialize)]
pub struct Meta {
    pub erstellt: String,
    pub builder: &'static str,
}

impl<'a> CompanionPayload<'a> {
    pub fn new(ctx: &'a DocumentContext, created_at: NaiveDateTime) -> Self {
        let text = |name| ctx.scalar(name).unwrap_or("");
        Self {
            rolle: role_line(ctx),
            ziel: GOAL,
            lernort: text(LERNORT),
            aufgabentyp: text(AUFGABENTYP),
            sprache: text(SPRACHE),
            ton: text(TON),
            didaktik: ctx.field(DIDAKTIK),
            lernziel: text(LERNZIEL),
            verfahren: ctx.field(VERFAHREN),
            maschinen: ctx.field(MASCHINEN),
            werkstoffe: ctx.field(WERKSTOFFE),
            normen: ctx.field(NORMEN),
            messmittel: ctx.field(MESSMITTEL),
            toleranzen: text(TOLERANZEN),
            sicherheit: ctx.field(SICHERHEIT),
            zeit_min: minutes(ctx),
            materialliste: ctx.field(MATERIALIEN),
            zeichnung_ref: text(ZEICHNUNG),
            kontext: text(KONTEXT),
            gewuenschter_output: ctx.field(OUTPUT),
            meta: Meta {
                erstellt: created_at.format("%Y-%m-%d %H:%M").to_string(),
                builder: BUILDER_NAME,
            },
        }
    }
}

/// Pretty-printed JSON companion for a metal prompt. Non-ASCII stays as is.
pub fn companion_json(
    ctx: &DocumentContext,
    created_at: NaiveDateTime,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&CompanionPayload::new(ctx, created_at))
}
