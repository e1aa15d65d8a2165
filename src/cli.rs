//! Command-line surface for the `sign-lookup` binary

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};

use crate::config::{
    ENV_API_BASE, ENV_API_KEY, ENV_HISTORY_PATH, ENV_RANGE, ENV_SHEET_ID, LookupConfig,
    default_history_path,
};
use crate::history::{HistoryStore, format_relative};
use crate::sheets::{LookupOutcome, SheetsClient};
use crate::translate::Translator;
use crate::utils::{
    DEFAULT_MAX_RECENT_QUESTIONS, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SHEET_RANGE,
    DEFAULT_SHEETS_API_BASE, SHEETS_API_CONSOLE_URL, convert_drive_url_to_direct_link,
    sheet_edit_url,
};

/// Exit status when the command succeeded
const EXIT_FOUND: u8 = 0;
/// Exit status when the word is not in the table
const EXIT_NOT_FOUND: u8 = 1;
/// Exit status when the lookup itself failed
const EXIT_LOOKUP_FAILED: u8 = 2;

#[derive(Debug, Parser)]
#[command(
    name = "sign-lookup",
    about = "Look up sign-language videos for words and phrases",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub sheet: SheetArgs,

    /// Log debug output to stderr (RUST_LOG overrides).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Args)]
pub struct SheetArgs {
    /// Spreadsheet id of the lookup table.
    #[arg(long, env = ENV_SHEET_ID, global = true)]
    pub sheet_id: Option<String>,

    /// Google API key with the Sheets API enabled.
    #[arg(long, env = ENV_API_KEY, hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// A1 range holding words (column A) and video URLs (column B).
    #[arg(long, env = ENV_RANGE, default_value = DEFAULT_SHEET_RANGE, global = true)]
    pub range: String,

    #[arg(long, env = ENV_API_BASE, default_value = DEFAULT_SHEETS_API_BASE, hide = true, global = true)]
    pub api_base: String,

    /// File recent questions are kept in.
    #[arg(long, env = ENV_HISTORY_PATH, global = true)]
    pub history_path: Option<PathBuf>,

    #[arg(long, default_value_t = DEFAULT_MAX_RECENT_QUESTIONS, global = true)]
    pub max_history: usize,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS, global = true)]
    pub timeout_secs: u64,
}

impl SheetArgs {
    /// Full lookup configuration; requires sheet id and API key
    pub fn lookup_config(&self) -> Result<LookupConfig> {
        let Some(sheet_id) = self.sheet_id.as_deref() else {
            bail!("No sheet id given: pass --sheet-id or set {ENV_SHEET_ID}");
        };
        let Some(api_key) = self.api_key.as_deref() else {
            bail!("No API key given: pass --api-key or set {ENV_API_KEY}");
        };

        let mut builder = LookupConfig::builder()
            .sheet_id(sheet_id)
            .api_key(api_key)
            .range(self.range.as_str())
            .api_base(self.api_base.as_str())
            .request_timeout(Duration::from_secs(self.timeout_secs))
            .max_history(self.max_history);
        if let Some(path) = &self.history_path {
            builder = builder.history_path(path.clone());
        }

        builder.build().context("Invalid lookup configuration")
    }

    /// History store alone; needs no credentials
    #[must_use]
    pub fn history_store(&self) -> HistoryStore {
        let path = self
            .history_path
            .clone()
            .unwrap_or_else(default_history_path);
        HistoryStore::open(path, self.max_history)
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Find the sign video for a word or phrase.
    Lookup {
        /// Word or phrase; multiple arguments are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },

    /// Print every word and video in the table.
    List,

    /// Rewrite a sharing link into a direct video link (offline).
    Convert { url: String },

    /// Show or edit recent questions.
    History {
        #[command(subcommand)]
        action: Option<HistoryCommand>,
    },

    /// Explain how to prepare the lookup sheet.
    Setup,
}

#[derive(Debug, Subcommand)]
pub enum HistoryCommand {
    /// List recent questions, most recent first.
    List,

    /// Remove one question.
    Remove {
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },

    /// Forget all recent questions.
    Clear,
}

pub async fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Lookup { words } => {
            Ok(ExitCode::from(run_lookup(&cli.sheet, &words.join(" ")).await))
        }
        Commands::List => Ok(ExitCode::from(run_list(&cli.sheet).await)),
        Commands::Convert { url } => {
            println!("{}", convert_drive_url_to_direct_link(&url));
            Ok(ExitCode::SUCCESS)
        }
        Commands::History { action } => {
            run_history(&cli.sheet, action.unwrap_or(HistoryCommand::List)).await
        }
        Commands::Setup => {
            print!("{}", setup_text(cli.sheet.sheet_id.as_deref()));
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Client and history for a lookup command, or a printable setup error
fn lookup_components(sheet: &SheetArgs) -> Result<(SheetsClient, HistoryStore)> {
    let config = sheet.lookup_config()?;
    let history = HistoryStore::from_config(&config);
    let client = SheetsClient::new(config).context("Failed to create Sheets client")?;
    Ok((client, history))
}

fn report_setup_error(error: &anyhow::Error) -> u8 {
    eprintln!("Error: {error:#}");
    EXIT_LOOKUP_FAILED
}

async fn run_lookup(sheet: &SheetArgs, word: &str) -> u8 {
    let (client, history) = match lookup_components(sheet) {
        Ok(components) => components,
        Err(e) => return report_setup_error(&e),
    };
    let translator = Translator::new(client, history);

    match translator.translate(word).await {
        Ok(translation) => {
            println!("{}", translation.message());
            match translation.outcome {
                LookupOutcome::Found(_) => EXIT_FOUND,
                LookupOutcome::NotFound { .. } => EXIT_NOT_FOUND,
            }
        }
        Err(e) => {
            eprintln!("{}", e.user_message());
            eprintln!("({e})");
            EXIT_LOOKUP_FAILED
        }
    }
}

async fn run_list(sheet: &SheetArgs) -> u8 {
    let (client, _) = match lookup_components(sheet) {
        Ok(components) => components,
        Err(e) => return report_setup_error(&e),
    };

    match client.fetch_all().await {
        Ok(videos) => {
            for video in videos {
                println!("{}\t{}", video.word, video.video_url);
            }
            EXIT_FOUND
        }
        Err(e) => {
            eprintln!("{}", e.user_message());
            eprintln!("({e})");
            EXIT_LOOKUP_FAILED
        }
    }
}

async fn run_history(sheet: &SheetArgs, action: HistoryCommand) -> Result<ExitCode> {
    let store = sheet.history_store();

    match action {
        HistoryCommand::List => {
            let questions = store.list().await;
            if questions.is_empty() {
                println!("No recent questions yet.");
            }
            let now = Utc::now();
            for question in questions {
                println!(
                    "{}\t{}",
                    question.word,
                    format_relative(question.timestamp, now)
                );
            }
        }
        HistoryCommand::Remove { words } => {
            let word = words.join(" ");
            if store.remove(&word).await {
                println!("Removed \"{}\" from history.", word.trim());
            } else {
                println!("\"{}\" is not in history.", word.trim());
            }
        }
        HistoryCommand::Clear => {
            store.clear().await;
            println!("History cleared.");
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Setup instructions for a lookup sheet
#[must_use]
pub fn setup_text(sheet_id: Option<&str>) -> String {
    let sheet_line = match sheet_id {
        Some(id) => format!("Configured sheet: {}\n", sheet_edit_url(id)),
        None => format!("No sheet configured yet (set {ENV_SHEET_ID}).\n"),
    };

    format!(
        "\
Sheet layout
  Column A: word or phrase (e.g. \"hello\", \"thank you\")
  Column B: video URL (Google Drive sharing link or direct video URL)
  Row 1:    headers, skipped by lookups

Steps
  1. Share the sheet as \"Anyone with the link can view\".
  2. Copy the SHEET_ID from https://docs.google.com/spreadsheets/d/SHEET_ID/edit
     and set {ENV_SHEET_ID}.
  3. Enable the Google Sheets API at {SHEETS_API_CONSOLE_URL},
     create an API key restricted to it, and set {ENV_API_KEY}.
  4. Share each Drive video as \"Anyone with the link\" and paste its link
     (https://drive.google.com/file/d/FILE_ID/view) into column B.

{sheet_line}"
    )
}
