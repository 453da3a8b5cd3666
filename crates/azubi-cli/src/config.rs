use std::path::PathBuf;

use azubi_core::{Mode, TemplateKind, Trade};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "azubi",
    about = "Berichtsheft, Arbeitsauftrag und KI-Prompts für die Ausbildung"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every field with its suggestion catalog
    Catalog(SchemaArgs),
    /// Print an empty form (all defaults) as JSON
    Form(SchemaArgs),
    /// Render a filled-in form into a document
    Render(RenderArgs),
}

#[derive(Debug, Args)]
pub struct SchemaArgs {
    /// Trade: bueromanagement or metall
    #[arg(long, env = "AZUBI_TRADE", default_value = "bueromanagement")]
    pub trade: Trade,

    /// Mode: ausbildung or berufsvorbereitung (office only)
    #[arg(long, default_value = "ausbildung")]
    pub mode: Mode,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Path to the filled-in JSON form
    #[arg(long, short)]
    pub form: PathBuf,

    /// Document kind: journal, task, exam or assistant.
    /// Defaults to the first kind the form's trade offers.
    #[arg(long, short)]
    pub kind: Option<TemplateKind>,

    /// First day of the reporting period (YYYY-MM-DD), overrides the form
    #[arg(long, requires = "to")]
    pub from: Option<NaiveDate>,

    /// Last day of the reporting period (YYYY-MM-DD), overrides the form
    #[arg(long, requires = "from")]
    pub to: Option<NaiveDate>,

    /// Directory the text file is written to
    #[arg(long, env = "AZUBI_OUT_DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Print the document instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Also copy the document to the system clipboard
    #[arg(long)]
    pub copy: bool,

    /// Print the machine-readable JSON companion (metal prompts only)
    #[arg(long)]
    pub show_json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_defaults() {
        let cli = Cli::try_parse_from(["azubi", "render", "--form", "woche.json"]).unwrap();
        let Command::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.form, PathBuf::from("woche.json"));
        assert_eq!(args.kind, None);
        assert!(!args.stdout && !args.copy && !args.show_json);
    }

    #[test]
    fn render_parses_kind_and_period() {
        let cli = Cli::try_parse_from([
            "azubi", "render", "-f", "w.json", "-k", "exam", "--from", "2024-01-01", "--to",
            "2024-01-05",
        ])
        .unwrap();
        let Command::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.kind, Some(TemplateKind::ExamPrompt));
        assert_eq!(args.from, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(args.to, NaiveDate::from_ymd_opt(2024, 1, 5));
    }

    #[test]
    fn from_requires_to() {
        let res = Cli::try_parse_from(["azubi", "render", "-f", "w.json", "--from", "2024-01-01"]);
        assert!(res.is_err());
    }

    #[test]
    fn schema_args_parse_trade() {
        let cli = Cli::try_parse_from(["azubi", "catalog", "--trade", "metall"]).unwrap();
        let Command::Catalog(args) = cli.command else {
            panic!("expected catalog");
        };
        assert_eq!(args.trade, Trade::Metall);
        assert_eq!(args.mode, Mode::Ausbildung);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let res = Cli::try_parse_from(["azubi", "render", "-f", "w.json", "-k", "memo"]);
        assert!(res.is_err());
    }
}
