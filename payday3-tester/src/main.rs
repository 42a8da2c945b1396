mod logic;
mod util;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use payday3_game::{DlcOwned, Payday3Game, Payday3Options, option_schema};
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};

use logic::{CatalogReport, draw_previews, reports};
use util::split_csv;

#[derive(Debug, Parser)]
#[command(name = "payday3-tester", version = "0.1.0")]
#[command(
    about = "QA tool for the PAYDAY 3 objective plugin - resolves options, prints datasets and previews objectives"
)]
struct Args {
    /// JSON options file keyed by option name (defaults apply when omitted)
    #[arg(long)]
    options: Option<PathBuf>,

    /// Force Overkill into the difficulty pool
    #[arg(long)]
    overkill: bool,

    /// Override owned DLC (comma-separated, "none" for no DLC)
    #[arg(long)]
    dlc: Option<String>,

    /// Number of preview objectives to draw
    #[arg(long, default_value_t = 5)]
    samples: usize,

    /// Seed for preview draws
    #[arg(long, default_value_t = 1337)]
    seed: u64,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// List all declared options and exit
    #[arg(long)]
    list_options: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_options(&args)? {
        return Ok(());
    }

    let options = resolve_options(&args)?;
    if args.verbose {
        eprintln!(
            "{} overkill={} dlc={} weighting={}",
            "🔧 Options".bright_blue().bold(),
            options.include_overkill(),
            options.dlc_owned().len(),
            options.weighting().key()
        );
    }

    let game = Payday3Game::new(options);
    let previews = draw_previews(&game, args.samples, args.seed);
    log::info!("drew {} preview objectives with seed {}", previews.len(), args.seed);
    let report = CatalogReport::build(&game, previews);

    write_report(&args, &report)
}

fn maybe_list_options(args: &Args) -> Result<bool> {
    if !args.list_options {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    reports::generate_schema_listing(output_target.writer(), &option_schema())?;
    output_target.flush_inner()?;
    Ok(true)
}

fn load_options_file(path: &Path) -> Result<Payday3Options> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Payday3Options::from_json(&json)
        .with_context(|| format!("invalid options in {}", path.display()))
}

fn resolve_options(args: &Args) -> Result<Payday3Options> {
    let mut options = match &args.options {
        Some(path) => load_options_file(path)?,
        None => Payday3Options::default(),
    };
    if args.overkill {
        options = options.with_overkill(true);
    }
    if let Some(dlc) = &args.dlc {
        let labels = split_csv(dlc);
        let owned = if labels.iter().any(|l| l.eq_ignore_ascii_case("none")) {
            DlcOwned::none()
        } else {
            DlcOwned::from_labels(&labels)
        };
        options = options.with_dlc_owned(owned);
    }
    Ok(options)
}

fn write_report(args: &Args, report: &CatalogReport) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => reports::generate_json_report(&mut output_target, report)?,
        "markdown" => reports::generate_markdown_report(&mut output_target, report)?,
        _ => reports::generate_console_report(&mut output_target, report)?,
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payday3_game::Dlc;

    fn base_args() -> Args {
        Args {
            options: None,
            overkill: false,
            dlc: None,
            samples: 5,
            seed: 1337,
            report: "console".to_string(),
            list_options: false,
            verbose: false,
            output: None,
        }
    }

    fn temp_path(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "payday3-tester-{label}-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ))
    }

    #[test]
    fn defaults_without_options_file() {
        let options = resolve_options(&base_args()).unwrap();
        assert_eq!(options, Payday3Options::default());
    }

    #[test]
    fn cli_flags_override_file() {
        let path = temp_path("options.json");
        std::fs::write(
            &path,
            r#"{"payday_3_include_overkill": false, "payday_3_dlc_owned": ["Syntax Error"]}"#,
        )
        .unwrap();
        let mut args = base_args();
        args.options = Some(path);
        args.overkill = true;
        args.dlc = Some("Boys In Blue, Party Powder".to_string());

        let options = resolve_options(&args).unwrap();
        assert!(options.include_overkill());
        assert!(options.has_dlc(Dlc::BoysInBlue));
        assert!(options.has_dlc(Dlc::PartyPowder));
        assert!(!options.has_dlc(Dlc::SyntaxError));
    }

    #[test]
    fn dlc_none_clears_ownership() {
        let mut args = base_args();
        args.dlc = Some("none".to_string());
        assert!(resolve_options(&args).unwrap().dlc_owned().is_empty());
    }

    #[test]
    fn missing_options_file_reports_path() {
        let mut args = base_args();
        let path = temp_path("missing.json");
        args.options = Some(path.clone());
        let err = resolve_options(&args).unwrap_err();
        assert!(format!("{err:#}").contains(&path.display().to_string()));
    }

    #[test]
    fn invalid_options_file_is_rejected() {
        let path = temp_path("invalid.json");
        std::fs::write(&path, r#"{"payday_3_loud_weight": 250}"#).unwrap();
        let err = load_options_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("payday_3_loud_weight must be between 0 and 100"));
    }

    #[test]
    fn report_written_to_output_file() {
        let path = temp_path("report.json");
        let mut args = base_args();
        args.report = "json".to_string();
        args.output = Some(path.clone());
        let game = Payday3Game::default();
        let report = CatalogReport::build(&game, draw_previews(&game, 2, 1));
        write_report(&args, &report).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("\"previews\""));
    }
}
