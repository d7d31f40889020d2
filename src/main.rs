//! Line-oriented harness that drives one role-play session from stdin.
//!
//! Each line is a salesperson utterance. Lines starting with `agent:` are
//! the counterpart's replies. The instructions are re-printed after every
//! salesperson turn. `/end` or end of input finishes the session
//! and prints the evaluation report. Logs go to stderr.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use sales_roleplay::adapters::{load_character, FileRecordSink, InMemoryRecordSink};
use sales_roleplay::application::{
    FinishSessionHandler, RecordUtteranceCommand, RecordUtteranceHandler, RoleplaySession,
    UtteranceEffect,
};
use sales_roleplay::config::AppConfig;
use sales_roleplay::ports::SessionRecordSink;

const AGENT_PREFIX: &str = "agent:";
const END_COMMAND: &str = "/end";

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if config.logging.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn parse_line(line: &str) -> Option<RecordUtteranceCommand> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    match line.strip_prefix(AGENT_PREFIX) {
        Some(reply) => Some(RecordUtteranceCommand::agent(reply)),
        None => Some(RecordUtteranceCommand::user(line)),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config);

    let character = match &config.session.character_file {
        Some(path) => load_character(path).await?,
        None => config.session.character_type.profile(),
    };

    let sink: Arc<dyn SessionRecordSink> = match &config.storage.data_dir {
        Some(dir) => Arc::new(FileRecordSink::new(dir)),
        None => Arc::new(InMemoryRecordSink::new()),
    };

    tracing::info!(
        agent_name = %config.session.agent_name,
        character = %character.name,
        voice = %config.session.voice,
        temperature = config.session.temperature,
        "Bank sales agent started"
    );

    let record = RecordUtteranceHandler::new(sink.clone());
    let finish = FinishSessionHandler::new(sink);
    let mut session = RoleplaySession::new(character);

    println!("{}", session.instructions());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim() == END_COMMAND {
            break;
        }
        let Some(cmd) = parse_line(&line) else {
            continue;
        };

        let result = match record.handle(&mut session, cmd).await {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(error = %err, "Skipping utterance");
                continue;
            }
        };

        if let UtteranceEffect::User(outcome) = result.effect {
            let marker = if outcome.guidance_changed { " (guidance updated)" } else { "" };
            println!("[turn {}] {}{}", outcome.turn, outcome.phase, marker);
            println!("{}", session.instructions());
            if outcome.ready_to_close() {
                println!("[turn {}] ready to close", outcome.turn);
            }
        }
    }

    let report = finish.handle(&mut session).await?;
    println!("{}", report.feedback);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sales_roleplay::domain::transcript::Speaker;

    #[test]
    fn blank_lines_are_skipped() {
        assert!(parse_line("   ").is_none());
    }

    #[test]
    fn agent_prefix_marks_counterpart() {
        let cmd = parse_line("agent: ふむ…").unwrap();
        assert_eq!(cmd.speaker, Speaker::Agent);
        assert_eq!(cmd.text, " ふむ…");
    }

    #[test]
    fn plain_lines_are_salesperson() {
        let cmd = parse_line("費用は20万円です").unwrap();
        assert_eq!(cmd.speaker, Speaker::User);
    }
}
