//! partmatch CLI: export a blank request form, or match a filled form
//! against the remote product catalog.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};

use partmatch::services::catalog::{CatalogSource, RedashSource};
use partmatch::services::forms;
use partmatch::services::matcher::{self, Haystack, Metric};

/// Environment variable holding the catalog query endpoint.
const CATALOG_URL_ENV: &str = "PARTMATCH_CATALOG_URL";

#[derive(Parser)]
#[command(
    name = "partmatch",
    version,
    about = "Resolve part records against the product catalog"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Export a blank request-form template.
    Template {
        /// Output path for the template CSV.
        #[arg(long, default_value = "request_form.csv")]
        out: PathBuf,
    },
    /// Match a filled request form against the catalog.
    Match {
        /// Filled request-form CSV.
        #[arg(long)]
        input: PathBuf,
        /// Output path for the result CSV.
        #[arg(long, default_value = "request_result.csv")]
        out: PathBuf,
        /// Catalog query endpoint; falls back to PARTMATCH_CATALOG_URL.
        #[arg(long)]
        catalog_url: Option<String>,
        /// Similarity metric.
        #[arg(long, value_enum, default_value_t = MetricArg::Jaccard)]
        metric: MetricArg,
        /// Include ids, scores, delta and relative error in the output.
        #[arg(long)]
        full: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MetricArg {
    Jaccard,
    Levenshtein,
}

impl From<MetricArg> for Metric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Jaccard => Metric::Jaccard,
            MetricArg::Levenshtein => Metric::Levenshtein,
        }
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Template { out } => {
            forms::write_template_file(&out)?;
            println!("Blank request form written to {}", out.display());
        }
        Command::Match {
            input,
            out,
            catalog_url,
            metric,
            full,
        } => {
            let endpoint = match catalog_url.or_else(|| std::env::var(CATALOG_URL_ENV).ok()) {
                Some(url) => url,
                None => bail!("no catalog endpoint: pass --catalog-url or set {CATALOG_URL_ENV}"),
            };

            let records = forms::read_request_form_file(&input)
                .with_context(|| format!("reading request form {}", input.display()))?;
            let needles = matcher::prepare_needle(records);

            let rows = RedashSource::new(endpoint).fetch()?;
            let haystack = Haystack::new(rows);

            let results = matcher::match_all(&needles, &haystack, metric.into())?;
            forms::write_results_file(&out, &results, full)?;
            println!(
                "Matched {} rows; results written to {}",
                results.len(),
                out.display()
            );
        }
    }
    Ok(())
}
