//! estate-advisor binary: collect investment preferences, request a report from Gemini,
//! and print it as text or JSON.
//!
//! Subcommands: `prompt` (print the model prompt), `schema` (print the response schema).
//! Without a subcommand the report is requested.

mod logging;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;

use advisor::{
    build_prompt, report_schema, AdvisorSession, GeminiClient, InvestmentHorizon, PaymentMode,
    PreferenceForm, PropertyType, ReportRequester, UserPreferences,
};
use clap::{Parser, Subcommand};
use cli::{
    format_preferences, format_report, report_json, write_json_output, CliError, DisplayOptions,
    FormPrompter,
};
use tracing::{error, info};

const APP_NAME: &str = "estate-advisor";

#[derive(Parser, Debug)]
#[command(name = "estate-advisor")]
#[command(about = "Real-estate investment advisor: budget + location in, AI market report out")]
struct Args {
    #[command(subcommand)]
    cmd: Option<Command>,

    /// Budget in PKR, free text (e.g. "50 Lac", "2 Crore")
    #[arg(long, global = true, value_name = "TEXT")]
    budget: Option<String>,

    /// Target city or area (e.g. "DHA Lahore")
    #[arg(long, global = true, value_name = "TEXT")]
    location: Option<String>,

    /// residential, commercial, plot, apartment or file (default: residential)
    #[arg(long, global = true, value_name = "TYPE")]
    property_type: Option<PropertyType>,

    /// cash or installments (default: cash)
    #[arg(long, global = true, value_name = "MODE")]
    payment_mode: Option<PaymentMode>,

    /// short, medium or long (default: medium)
    #[arg(long, global = true, value_name = "HORIZON")]
    horizon: Option<InvestmentHorizon>,

    /// Gemini model (overrides GEMINI_MODEL)
    #[arg(long, value_name = "NAME")]
    model: Option<String>,

    /// Interactive: prompt for each field, show the report, then start over
    #[arg(short, long)]
    interactive: bool,

    /// Output the report as JSON ({"preferences": .., "report": ..})
    #[arg(long)]
    json: bool,

    /// When using --json, write output to this file instead of stdout
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// When using --json, pretty-print (multi-line). Default: compact, one line
    #[arg(long)]
    pretty: bool,

    /// Disable coloured growth ratings
    #[arg(long)]
    no_color: bool,

    /// Verbose: log requests to stderr (LOG_FILE takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the prompt that would be sent for the given preferences
    Prompt,
    /// Print the JSON response schema sent with every request
    Schema,
}

impl Args {
    /// Form seeded from the flags; unset enumerations keep their defaults.
    fn form(&self) -> PreferenceForm {
        let mut form = PreferenceForm::new();
        if let Some(b) = &self.budget {
            form.set_budget(b.clone());
        }
        if let Some(l) = &self.location {
            form.set_location(l.clone());
        }
        if let Some(t) = self.property_type {
            form.set_property_type(t);
        }
        if let Some(m) = self.payment_mode {
            form.set_payment_mode(m);
        }
        if let Some(h) = self.horizon {
            form.set_horizon(h);
        }
        form
    }

    fn display_options(&self) -> DisplayOptions {
        let color = !self.no_color
            && std::env::var_os("NO_COLOR").is_none()
            && std::io::stdout().is_terminal();
        DisplayOptions { color }
    }
}

/// Preferences from the flags, or an error naming the missing flags.
fn flag_preferences(args: &Args) -> Result<UserPreferences, CliError> {
    args.form().try_preferences().map_err(|e| {
        eprintln!("hint: pass --budget and --location, or use -i for the interactive form");
        e.into()
    })
}

fn make_session(args: &Args) -> Result<AdvisorSession, CliError> {
    let mut client = GeminiClient::from_env()?;
    if let Some(model) = &args.model {
        client = client.with_model(model.clone());
    }
    info!(model = %client.model(), "gemini client ready");
    Ok(AdvisorSession::new(ReportRequester::new(Arc::new(client))))
}

async fn request_and_print(
    session: &AdvisorSession,
    prefs: UserPreferences,
    args: &Args,
) -> Result<(), CliError> {
    eprintln!("Analyzing Market Data... ({})", format_preferences(&prefs));
    let report = session.submit(prefs.clone()).await?;
    if args.json {
        write_json_output(&report_json(&prefs, &report)?, args.file.as_deref(), args.pretty)?;
    } else {
        println!("{}", format_report(&report, args.display_options()));
    }
    Ok(())
}

async fn run_interactive(session: &AdvisorSession, args: &Args) -> Result<(), CliError> {
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut prompter = FormPrompter::new(stdin, std::io::stderr());
    let mut form = args.form();
    eprintln!("Type quit or exit at any prompt to leave.");
    loop {
        let Some(filled) = prompter.fill(form.clone()).await? else {
            return Ok(());
        };
        form = filled;
        let prefs = match form.try_preferences() {
            Ok(p) => p,
            Err(e) => {
                eprintln!("error: {}", e);
                continue;
            }
        };
        if let Err(e) = request_and_print(session, prefs, args).await {
            error!(error = %e, "report request failed");
            eprintln!("error: {}", e);
        }
        eprintln!();
    }
}

async fn run(args: &Args) -> Result<(), CliError> {
    match &args.cmd {
        Some(Command::Schema) => {
            let schema = report_schema();
            println!("{}", serde_json::to_string_pretty(&schema)?);
            return Ok(());
        }
        Some(Command::Prompt) => {
            let prefs = flag_preferences(args)?;
            println!("{}", build_prompt(&prefs));
            return Ok(());
        }
        None => {}
    }

    if args.interactive {
        let session = make_session(args)?;
        return run_interactive(&session, args).await;
    }

    let prefs = flag_preferences(args)?;
    let session = make_session(args)?;
    request_and_print(&session, prefs, args).await
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_result = config::load_and_apply(APP_NAME, None::<&std::path::Path>);
    let args = Args::parse();
    let guard = logging::init(args.verbose)?;
    match config_result {
        Ok(applied) => info!(keys = ?applied, "config applied"),
        Err(e) => eprintln!("warning: config not loaded: {}", e),
    }

    let result = run(&args).await;
    if let Err(e) = &result {
        error!(error = %e, "estate-advisor failed");
    }
    drop(guard);
    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
    Ok(())
}
