use std::env;
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum, error::ErrorKind};
use tracing::info;

use crate::config::PipelineConfig;
use crate::constants::messages::NO_DATA_MSG;
use crate::constants::store::{DEFAULT_STORE_CANDIDATES, STORE_URI_ENV};
use crate::errors::DashboardError;
use crate::pipeline::DashboardPipeline;
use crate::pipeline::filter::{DashboardFilters, YearSelection};
use crate::render::TextReport;
use crate::source::open_store;
use crate::types::StoreUri;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "utercare_dashboard",
    disable_help_subcommand = true,
    about = "Dashboard of articles about uterine prolapse",
    long_about = "Load articles from a document store, keep those about uterine prolapse, and render monthly counts, word-count distribution, word-cloud words, and the most recent articles.",
    after_help = "The store is resolved in order by --store, the UTERCARE_STORE_URI environment variable, then project defaults."
)]
/// CLI for `utercare_dashboard`.
///
/// Common usage:
/// - Render the text dashboard: `--store data/articles.jsonl`
/// - Narrow to one year and a title query: `--year 2023 --search senam`
/// - Write the CSV next to the output: `--export out/`
struct DashboardCli {
    #[arg(
        long,
        value_name = "URI",
        help = "Store URI or path (jsonl://, json://, dir://, file://, or a bare path)"
    )]
    store: Option<String>,
    #[arg(
        long,
        default_value = "Semua",
        value_parser = parse_year_arg,
        help = "Year filter: 'Semua'/'all' or a calendar year"
    )]
    year: YearSelection,
    #[arg(
        long,
        default_value = "",
        help = "Case-insensitive substring matched against article titles"
    )]
    search: String,
    #[arg(
        long = "keyword",
        value_name = "TEXT",
        help = "Topic keyword override, repeat as needed (defaults to the built-in set)"
    )]
    keywords: Vec<String>,
    #[arg(long = "list-years", help = "Print year choices and exit")]
    list_years: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, help = "Output format")]
    format: OutputFormat,
    #[arg(
        long,
        value_name = "PATH",
        help = "Write the filtered table as CSV (a directory receives prolaps_articles.csv)"
    )]
    export: Option<PathBuf>,
}

/// Run the dashboard CLI, writing to stdout.
///
/// `resolve_store` receives the optional `--store` value and returns the
/// store URI to open.
pub fn run_dashboard<Resolve, I>(args_iter: I, resolve_store: Resolve) -> Result<(), Box<dyn Error>>
where
    Resolve: FnOnce(Option<String>) -> Result<StoreUri, Box<dyn Error>>,
    I: Iterator<Item = String>,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_dashboard_to(args_iter, resolve_store, &mut out)
}

/// Same as [`run_dashboard`] with an explicit output sink.
pub fn run_dashboard_to<Resolve, I>(
    args_iter: I,
    resolve_store: Resolve,
    out: &mut dyn Write,
) -> Result<(), Box<dyn Error>>
where
    Resolve: FnOnce(Option<String>) -> Result<StoreUri, Box<dyn Error>>,
    I: Iterator<Item = String>,
{
    let Some(cli) = parse_cli::<DashboardCli, _>(
        std::iter::once("utercare_dashboard".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let uri = resolve_store(cli.store)?;
    let mut config = PipelineConfig::default();
    if !cli.keywords.is_empty() {
        config = config.with_keywords(&cli.keywords);
    }
    let pipeline = DashboardPipeline::new(open_store(&uri)?, config)?;

    let prepared = match pipeline.prepare() {
        Ok(prepared) => prepared,
        Err(DashboardError::NoData) => {
            writeln!(out, "Peringatan: {NO_DATA_MSG}")?;
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    if cli.list_years {
        for choice in prepared.year_choices() {
            writeln!(out, "{choice}")?;
        }
        return Ok(());
    }

    let filters = DashboardFilters::new(cli.year, cli.search);
    let view = pipeline.render_prepared(&prepared, &filters);
    match cli.format {
        OutputFormat::Text => write!(out, "{}", TextReport(&view.report))?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &view.report)?;
            writeln!(out)?;
        }
    }

    if let Some(target) = cli.export {
        let artifact = view.export()?;
        let path = artifact.write_to(&target)?;
        info!(
            path = %path.display(),
            rows = view.filtered.len(),
            media_type = artifact.media_type,
            "exported filtered articles"
        );
    }
    Ok(())
}

/// Resolve the store URI by explicit arg, environment variable, then the
/// first existing project default.
pub fn resolve_store_uri(store_override: Option<String>) -> Result<StoreUri, Box<dyn Error>> {
    if let Some(uri) = store_override {
        return Ok(uri);
    }
    if let Ok(value) = env::var(STORE_URI_ENV)
        && !value.trim().is_empty()
    {
        return Ok(value);
    }
    if let Some(path) = DEFAULT_STORE_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|path| path.exists())
    {
        return Ok(path.display().to_string());
    }
    Err(format!(
        "No article store found. Pass --store, set {STORE_URI_ENV}, or create one of: {}",
        DEFAULT_STORE_CANDIDATES.join(", ")
    )
    .into())
}

fn parse_year_arg(raw: &str) -> Result<YearSelection, String> {
    raw.parse::<YearSelection>().map_err(|err| err.to_string())
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_store(dir: &std::path::Path) -> PathBuf {
        let path = dir.join("articles.jsonl");
        fs::write(
            &path,
            concat!(
                r#"{"title":"Senam Kegel","isi":"latihan otot panggul","tanggal_publish":"2023-01-10","sumber":"A"}"#,
                "\n",
                r#"{"title":"Prolaps","isi":"prolaps uteri pada lansia","tanggal_publish":"2024-02-01","sumber":"B"}"#,
                "\n",
                r#"{"title":"Flu","isi":"demam","tanggal_publish":"2024-03-01"}"#,
                "\n",
            ),
        )
        .unwrap();
        path
    }

    fn run(args: &[&str], store: PathBuf) -> Result<String, Box<dyn Error>> {
        let mut out = Vec::new();
        run_dashboard_to(
            args.iter().map(|arg| arg.to_string()),
            move |explicit| Ok(explicit.unwrap_or_else(|| store.display().to_string())),
            &mut out,
        )?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn help_exits_cleanly() {
        let temp = tempfile::tempdir().unwrap();
        let output = run(&["--help"], temp.path().join("missing.jsonl")).unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn list_years_prints_choices() {
        let temp = tempfile::tempdir().unwrap();
        let store = write_store(temp.path());
        let output = run(&["--list-years"], store).unwrap();
        assert_eq!(output, "Semua\n2023\n2024\n");
    }

    #[test]
    fn json_output_and_export() {
        let temp = tempfile::tempdir().unwrap();
        let store = write_store(temp.path());
        let export_dir = temp.path().join("out");
        fs::create_dir(&export_dir).unwrap();
        let output = run(
            &[
                "--year",
                "2024",
                "--format",
                "json",
                "--export",
                export_dir.to_str().unwrap(),
            ],
            store,
        )
        .unwrap();
        let report: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(report["filters"]["year"], "2024");
        assert_eq!(report["counts"]["filtered"], 1);
        assert_eq!(report["recent"][0]["Judul"], "Prolaps");

        let csv = fs::read_to_string(export_dir.join("prolaps_articles.csv")).unwrap();
        assert_eq!(csv.lines().count(), 2);
        assert!(csv.starts_with("title,isi,tanggal_publish,sumber,jumlah_kata,bulan\n"));
    }

    #[test]
    fn empty_store_prints_warning() {
        let temp = tempfile::tempdir().unwrap();
        let store = temp.path().join("empty.jsonl");
        fs::write(&store, "").unwrap();
        let output = run(&[], store).unwrap();
        assert_eq!(output, format!("Peringatan: {NO_DATA_MSG}\n"));
    }

    #[test]
    fn invalid_year_is_a_usage_error() {
        let temp = tempfile::tempdir().unwrap();
        let store = write_store(temp.path());
        assert!(run(&["--year", "tahun lalu"], store).is_err());
    }

    #[test]
    fn explicit_store_wins_resolution() {
        let uri = resolve_store_uri(Some("jsonl://x.jsonl".into())).unwrap();
        assert_eq!(uri, "jsonl://x.jsonl");
    }
}
