//! `thindown`: submit and check THINDOWN® site forms from the terminal.
//!
//! # Usage
//!
//! ```text
//! thindown contact --first-name Jane --last-name Doe --email jane@x.com \
//!   --area military --message "Please send me specs." --accept-privacy
//! thindown check sample-request draft.json
//! thindown catalog products
//! thindown --config ~/.config/thindown/config.toml sample ...
//! ```

mod config;
mod submit;

use std::{
  io::Write,
  path::{Path, PathBuf},
  process::ExitCode,
  sync::Arc,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use config::ConfigFile;
use submit::{ContactArgs, SampleArgs};
use thindown_core::{
  catalog::{APPLICATION_CATEGORIES, CERTIFICATIONS, FEATURES, PRODUCT_LINES},
  forms::{ContactDraft, FormKind, SampleDraft},
};
use thindown_forms::{FormController, HttpTransport, SubmitOutcome};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "thindown", about = "Submit and check THINDOWN site forms")]
struct Args {
  /// Path to a TOML config file (url, timeout_secs).
  #[arg(short, long, value_name = "FILE", global = true)]
  config: Option<PathBuf>,

  /// Site root the forms post to (default: http://localhost:3000).
  #[arg(long, env = "THINDOWN_URL", global = true)]
  url: Option<String>,

  /// Request timeout in seconds (default: 30).
  #[arg(long, global = true)]
  timeout_secs: Option<u64>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Send the contact form.
  Contact(ContactArgs),
  /// Send a sample request.
  Sample(SampleArgs),
  /// Validate a JSON draft offline.
  Check {
    form: FormArg,
    file: PathBuf,
  },
  /// Print a static dataset as JSON.
  Catalog { dataset: Dataset },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FormArg {
  Contact,
  SampleRequest,
  MilitaryAccess,
}

impl From<FormArg> for FormKind {
  fn from(arg: FormArg) -> Self {
    match arg {
      FormArg::Contact => FormKind::Contact,
      FormArg::SampleRequest => FormKind::SampleRequest,
      FormArg::MilitaryAccess => FormKind::MilitaryAccess,
    }
  }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Dataset {
  Products,
  Applications,
  Features,
  Certifications,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<ExitCode> {
  // Logs go to stderr so command output stays pipeable.
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();
  let mut stdout = std::io::stdout().lock();

  match args.command {
    Command::Contact(form_args) => {
      let transport = connect(args.config, args.url, args.timeout_secs)?;
      let mut form = FormController::<ContactDraft, _>::new(transport);
      submit::fill_contact(&mut form, form_args)?;
      let outcome = submit::submit(&mut form, submit::contact_summary, &mut stdout).await?;
      Ok(exit_code(&outcome))
    }
    Command::Sample(form_args) => {
      let transport = connect(args.config, args.url, args.timeout_secs)?;
      let mut form = FormController::<SampleDraft, _>::new(transport);
      submit::fill_sample(&mut form, form_args)?;
      let outcome = submit::submit(&mut form, submit::sample_summary, &mut stdout).await?;
      Ok(exit_code(&outcome))
    }
    Command::Check { form, file } => {
      let valid = check(form.into(), &file, &mut stdout)?;
      Ok(if valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
    }
    Command::Catalog { dataset } => {
      let json = match dataset {
        Dataset::Products => serde_json::to_string_pretty(PRODUCT_LINES),
        Dataset::Applications => serde_json::to_string_pretty(APPLICATION_CATEGORIES),
        Dataset::Features => serde_json::to_string_pretty(FEATURES),
        Dataset::Certifications => serde_json::to_string_pretty(CERTIFICATIONS),
      }
      .context("serialising catalog")?;
      writeln!(stdout, "{json}")?;
      Ok(ExitCode::SUCCESS)
    }
  }
}

/// Build the transport: CLI flags override the config file, which overrides
/// defaults.
fn connect(
  config_path: Option<PathBuf>,
  url: Option<String>,
  timeout_secs: Option<u64>,
) -> Result<Arc<HttpTransport>> {
  let file = ConfigFile::load(config_path.as_deref())?;
  let transport = HttpTransport::new(config::resolve(url, timeout_secs, file))
    .context("failed to build HTTP client")?;
  let settings = transport.config();
  tracing::debug!(base_url = %settings.base_url, timeout = ?settings.timeout, "using site");
  Ok(Arc::new(transport))
}

fn exit_code<D>(outcome: &SubmitOutcome<D>) -> ExitCode {
  match outcome {
    SubmitOutcome::Accepted(_) => ExitCode::SUCCESS,
    SubmitOutcome::Invalid | SubmitOutcome::Busy | SubmitOutcome::Failed => ExitCode::FAILURE,
  }
}

/// Validate a JSON draft file, printing each field error. Returns whether the
/// draft is valid.
fn check(kind: FormKind, file: &Path, out: &mut impl Write) -> Result<bool> {
  let raw = std::fs::read_to_string(file)
    .with_context(|| format!("reading draft {}", file.display()))?;
  let draft: serde_json::Value = serde_json::from_str(&raw).context("parsing draft JSON")?;
  let errors = kind
    .check_json(draft)
    .with_context(|| format!("draft does not match the {kind} form"))?;

  if errors.is_empty() {
    writeln!(out, "{kind}: valid")?;
    return Ok(true);
  }
  for (field, message) in &errors {
    writeln!(out, "  {field}: {message}")?;
  }
  Ok(false)
}
