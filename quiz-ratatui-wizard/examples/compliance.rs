//! The cybersecurity assessment in the terminal, with answers kept in memory.
//!
//! Run with: cargo run -p quiz-ratatui-wizard --example compliance

use example_catalogs::cybersecurity_assessment;
use quiz_flow::test_support::{RecordingSink, StaticSource};
use quiz_ratatui_wizard::{Outcome, RatatuiError, RatatuiWizard};

fn main() -> anyhow::Result<()> {
    let source = StaticSource::new(cybersecurity_assessment().questions().to_vec());
    let sink = RecordingSink::new();
    let wizard = RatatuiWizard::new().with_title("Cybersecurity Assessment");

    match wizard.run(&source, &sink) {
        Ok(Outcome::Submitted) => {}
        Ok(other) => {
            println!("Finished without submitting: {other:?}");
            return Ok(());
        }
        Err(RatatuiError::Cancelled) => {
            println!("Cancelled.");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    }

    println!("\n=== Responses ===");
    for submission in sink.submissions() {
        for answer in &submission.responses {
            println!("{}: {}", answer.question, answer.answer);
        }
    }

    Ok(())
}
