use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use quiz_flow::{QuestionSource, SubmitSink};
use quiz_ratatui_wizard::{Outcome, RatatuiError, RatatuiWizard};
use quiz_transport::{CsvSink, HttpSink, HttpSource, JsonFileSource};
use tracing_subscriber::EnvFilter;

/// Run the compliance questionnaire in the terminal.
///
/// Questions come from a local file and answers go to a CSV log, unless
/// `--server` points at a questionnaire backend, which then serves both.
#[derive(Parser, Debug)]
#[command(name = "quiz", version, about)]
struct Args {
    /// Question file: a flat question list or the nested authoring format.
    #[arg(long, env = "QUIZ_QUESTIONS", default_value = "questions.json")]
    questions: PathBuf,

    /// Base URL of the questionnaire backend.
    #[arg(long, env = "QUIZ_SERVER")]
    server: Option<String>,

    /// CSV file every submission is appended to.
    #[arg(long, env = "QUIZ_RESPONSES", default_value = "responses.csv")]
    responses: PathBuf,

    #[arg(long, env = "QUIZ_TITLE", default_value = "Cybersecurity Assessment")]
    title: String,

    /// Write logs here. The terminal belongs to the wizard, so nothing is
    /// logged without it. Filter with RUST_LOG.
    #[arg(long, env = "QUIZ_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Timeout for backend requests.
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run<S, K>(wizard: &RatatuiWizard, source: &S, sink: &K) -> Result<()>
where
    S: QuestionSource,
    K: SubmitSink,
{
    match wizard.run(source, sink) {
        Ok(Outcome::Submitted) => {
            println!("Thank you! Your responses have been recorded.");
            Ok(())
        }
        Ok(Outcome::LoadFailed(message) | Outcome::SubmitFailed(message)) => {
            anyhow::bail!(message)
        }
        Err(RatatuiError::Cancelled) => {
            println!("Assessment cancelled.");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }
    tracing::info!(?args, "starting quiz");

    let wizard = RatatuiWizard::new().with_title(&args.title);

    match &args.server {
        Some(base) => {
            let timeout = Duration::from_secs(args.timeout_secs);
            let source = HttpSource::with_timeout(base.as_str(), timeout)?;
            let sink = HttpSink::with_timeout(base.as_str(), timeout)?;
            run(&wizard, &source, &sink)
        }
        None => run(
            &wizard,
            &JsonFileSource::new(&args.questions),
            &CsvSink::new(&args.responses),
        ),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn server_options() {
        let args = Args::try_parse_from([
            "quiz",
            "--server",
            "http://localhost:5000",
            "--timeout-secs",
            "5",
            "--title",
            "Audit",
        ])
        .unwrap();

        assert_eq!(args.server.as_deref(), Some("http://localhost:5000"));
        assert_eq!(args.timeout_secs, 5);
        assert_eq!(args.title, "Audit");
    }

    #[test]
    fn file_options() {
        let args = Args::try_parse_from([
            "quiz",
            "--questions",
            "data/questions.json",
            "--responses",
            "out.csv",
            "--log-file",
            "quiz.log",
        ])
        .unwrap();

        assert_eq!(args.questions, PathBuf::from("data/questions.json"));
        assert_eq!(args.responses, PathBuf::from("out.csv"));
        assert_eq!(args.log_file, Some(PathBuf::from("quiz.log")));
    }

    #[test]
    fn bad_timeout_is_rejected() {
        assert!(Args::try_parse_from(["quiz", "--timeout-secs", "soon"]).is_err());
    }
}
