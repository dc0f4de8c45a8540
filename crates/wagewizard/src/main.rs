use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use itertools::Itertools;
use mimalloc::MiMalloc;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use wagewizard_charts::chart_bundle;
use wagewizard_client::ServiceClient;
use wagewizard_session::Session;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Drive the WageWizard salary-prediction pipeline: submit employee
/// attributes to the prediction service and turn the model-quality
/// metrics into chart-ready JSON for a renderer.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,

    /// Base address of the prediction service
    #[arg(long, global = true, default_value = "http://localhost:8000")]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit one employee form and print the predicted salary
    ///
    /// The form starts from the schema defaults; --set overrides
    /// individual fields. Unknown field names fail before any request
    /// is sent.
    Predict {
        /// Override a form field, as FIELD=VALUE (repeatable)
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        set: Vec<String>,

        /// Print the raw full-precision result as JSON instead of the
        /// rounded display rendering
        #[arg(long)]
        json: bool,
    },
    /// Fetch model metrics and emit the derived chart bundle as JSON
    Charts {
        /// Output file path (writes to stdout if not specified)
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize structured logging. Output goes to stderr so JSON output
    // on stdout remains clean for piping. Default to warn, allowlist our crates.
    const CRATES: &[&str] = &[
        "wagewizard",
        "wagewizard_charts",
        "wagewizard_client",
        "wagewizard_schemas",
        "wagewizard_session",
    ];
    let level = cli.verbose.tracing_level_filter();
    let allowlist = CRATES.iter().map(|c| format!("{c}={level}")).join(",");
    let filter = EnvFilter::new(format!("warn,{allowlist}"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_span_events(FmtSpan::ENTER | FmtSpan::CLOSE)
        .init();

    let client = ServiceClient::new(cli.base_url);
    match cli.command {
        Commands::Predict { set, json } => run_predict(&client, &set, json).await,
        Commands::Charts { output } => run_charts(&client, output).await,
    }
}

/// Builds the form from defaults plus overrides, submits it, applies
/// the result to the session, and prints the prediction.
async fn run_predict(client: &ServiceClient, overrides: &[String], json: bool) -> Result<()> {
    let mut session = Session::new();

    for assignment in overrides {
        let Some((name, value)) = assignment.split_once('=') else {
            bail!("malformed --set {assignment:?}, expected FIELD=VALUE");
        };
        session.form.set_field(name, value)?;
    }

    let request = session.form.to_request();
    let result = client
        .predict(&request)
        .await
        .context("prediction request failed")?;
    session.apply_prediction(request, result);

    if json {
        println!("{}", serde_json::to_string(&result)?);
    } else {
        println!("Predicted Salary: {result}");
    }
    Ok(())
}

/// Fetches the metrics once and writes the chart bundle. A failed fetch
/// degrades to a warning with no output rather than an error exit —
/// chart data being unavailable is a non-fatal state.
async fn run_charts(client: &ServiceClient, output: Option<String>) -> Result<()> {
    let metrics = match client.fetch_metrics().await {
        Ok(metrics) => metrics,
        Err(err) => {
            warn!(%err, "model metrics unavailable, no charts emitted");
            return Ok(());
        }
    };

    let bundle = chart_bundle(&metrics);

    // Lock stdout once up front rather than on each write call.
    // Stdout must outlive the lock, so we bind it here first.
    let stdout = std::io::stdout();
    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(&path).with_context(|| format!("failed to create {path}"))?,
        )),
        None => Box::new(stdout.lock()),
    };
    serde_json::to_writer_pretty(&mut writer, &bundle)?;
    writeln!(writer)?;
    Ok(())
}
