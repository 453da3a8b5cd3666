use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use azubi_core::schema::schema_for;
use azubi_core::{FormInput, Mode, PeriodInput, TemplateKind, Trade};
use azubi_prompts::{artifact_filename, assemble, companion_json};
use chrono::NaiveDateTime;
use tracing::{info, warn};

use crate::clipboard::{Clipboard, MANUAL_COPY_HINT};
use crate::config::RenderArgs;

/// Shown when the reporting period ends before it starts. The document is still rendered.
pub const INVERTED_PERIOD_HINT: &str =
    "Das Startdatum liegt nach dem Enddatum. Bitte korrigieren.";

/// A document ready to be saved or copied.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub kind: TemplateKind,
    pub filename: String,
    pub text: String,
    /// JSON companion, only produced for metal prompts.
    pub companion: Option<String>,
    /// The form's period ends before it starts.
    pub inverted_period: bool,
}

/// Validate a form and render the requested document kind.
pub fn render_form(
    form: FormInput,
    kind: Option<TemplateKind>,
    now: NaiveDateTime,
) -> Result<Rendered> {
    let trade = form.trade;
    let kind = kind.unwrap_or_else(|| trade.default_kind());
    if !trade.template_kinds().contains(&kind) {
        bail!(
            "{} does not offer {kind} documents (available: {})",
            trade.as_str(),
            trade
                .template_kinds()
                .iter()
                .map(TemplateKind::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    let ctx = form.into_context(now.date())?;
    let inverted_period = ctx.period.is_some_and(|p| p.is_inverted());
    let text = assemble(kind, &ctx);
    let companion = match trade {
        Trade::Metall => Some(companion_json(&ctx, now).context("serialize JSON companion")?),
        Trade::Bueromanagement => None,
    };

    Ok(Rendered {
        kind,
        filename: artifact_filename(kind, trade, now),
        text,
        companion,
        inverted_period,
    })
}

/// Run the `render` subcommand. Returns the written file, if any.
pub fn run_render(
    args: &RenderArgs,
    clipboard: &dyn Clipboard,
    now: NaiveDateTime,
    out: &mut dyn Write,
) -> Result<Option<PathBuf>> {
    let raw = std::fs::read_to_string(&args.form)
        .with_context(|| format!("read form {}", args.form.display()))?;
    let mut form = FormInput::from_json(&raw)
        .with_context(|| format!("parse form {}", args.form.display()))?;
    if let (Some(from), Some(to)) = (args.from, args.to) {
        form.period = Some(PeriodInput { from, to });
    }

    let rendered = render_form(form, args.kind, now)
        .with_context(|| format!("render form {}", args.form.display()))?;
    if rendered.inverted_period {
        warn!("reporting period ends before it starts, rendering anyway");
        eprintln!("{INVERTED_PERIOD_HINT}");
    }
    info!("rendered {} ({} bytes)", rendered.kind, rendered.text.len());

    let written = if args.stdout {
        writeln!(out, "{}", rendered.text)?;
        None
    } else {
        std::fs::create_dir_all(&args.out_dir)
            .with_context(|| format!("create {}", args.out_dir.display()))?;
        let path = args.out_dir.join(&rendered.filename);
        std::fs::write(&path, &rendered.text)
            .with_context(|| format!("write {}", path.display()))?;
        info!("wrote {}", path.display());
        Some(path)
    };

    if args.copy {
        match clipboard.copy(&rendered.text) {
            Ok(()) => info!("copied to clipboard"),
            Err(e) => {
                warn!("clipboard: {e}");
                eprintln!("{MANUAL_COPY_HINT}");
            }
        }
    }

    if args.show_json {
        match &rendered.companion {
            Some(json) => writeln!(out, "{json}")?,
            None => warn!("JSON companion is only available for metal prompts"),
        }
    }

    Ok(written)
}

/// Print every field and scalar of a builder with its catalog.
pub fn print_catalog(trade: Trade, mode: Mode, out: &mut dyn Write) -> Result<()> {
    let schema = schema_for(trade, mode);
    writeln!(out, "# {} · {}", trade.display_name(), mode.label(trade))?;

    for field in schema.fields {
        writeln!(out, "\n{} [{}]", field.label, field.name)?;
        for option in field.catalog {
            let marker = if field.defaults.contains(option) { "*" } else { "-" };
            writeln!(out, "  {marker} {option}")?;
        }
        if field.free_text {
            writeln!(out, "  (eigene Eingaben, eine pro Zeile)")?;
        }
    }

    for scalar in schema.scalars {
        if scalar.default.is_empty() {
            writeln!(out, "\n{} [{}]", scalar.label, scalar.name)?;
        } else {
            writeln!(
                out,
                "\n{} [{}] (Standard: {})",
                scalar.label, scalar.name, scalar.default
            )?;
        }
        for choice in scalar.choices {
            writeln!(out, "  - {choice}")?;
        }
    }
    Ok(())
}

/// Print the default form as pretty JSON, ready to be filled in.
pub fn print_form(trade: Trade, mode: Mode, out: &mut dyn Write) -> Result<()> {
    let form = FormInput::skeleton(trade, mode);
    let json = serde_json::to_string_pretty(&form).context("serialize form")?;
    writeln!(out, "{json}")?;
    Ok(())
}
