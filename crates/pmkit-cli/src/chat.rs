//! Interactive chat REPL.
//!
//! Plain lines go to the agent as conversational turns; slash commands
//! generate documents from the conversation so far and export them.

use std::io::{BufRead, Write};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use pmkit_core::{AgentError, DocKind, PmAgent};

const HELP: &str = "\
Commands:
  /gather            start a guided requirement-gathering session
  /brief             generate a Product Brief from the conversation
  /brd               generate a Business Requirements Document
  /market [data]     generate a Market Research Report (optional market data)
  /requirements      show the conversation as requirements text
  /save <kind>       write a generated document to <kind>.txt (brief|brd|market)
  /help              show this help
  /quit              exit
Anything else is sent to the assistant as a chat message.";

/// Canned opener for the requirement-gathering task. Sent through the
/// agent as an ordinary turn, so the guidance it elicits lands in the
/// transcript like any other exchange.
const GATHER_PROMPT: &str = "I want to start gathering requirements for a new product. \
    Please guide me through the process by asking relevant questions about the product \
    idea, target audience, key features, and business objectives.";

pub async fn run(mut agent: PmAgent) -> Result<(), String> {
    println!("pmkit chat - type /help for commands");

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("you> ");
        std::io::stdout().flush().ok();

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.map_err(|e| e.to_string())?;
        let input = line.trim();

        if input.is_empty() {
            continue;
        }

        match input.split_once(' ').unwrap_or((input, "")) {
            ("/quit", _) | ("/exit", _) => break,
            ("/help", _) => println!("{}", HELP),
            ("/requirements", _) => {
                let requirements = agent.requirements_from_transcript();
                if requirements.is_empty() {
                    println!("(no conversation yet)");
                } else {
                    println!("{}", requirements);
                }
            }
            ("/gather", _) => turn(&mut agent, GATHER_PROMPT).await,
            ("/brief", _) => generate(&mut agent, DocKind::ProductBrief, "").await,
            ("/brd", _) => generate(&mut agent, DocKind::Brd, "").await,
            ("/market", data) => generate(&mut agent, DocKind::MarketResearch, data).await,
            ("/save", kind) => save(&agent, kind),
            _ => turn(&mut agent, input).await,
        }
    }

    Ok(())
}

async fn turn(agent: &mut PmAgent, input: &str) {
    let spinner = start_spinner("thinking...");
    let result = agent.run_turn(input).await;
    spinner.finish_and_clear();

    match result {
        Ok(answer) => println!("assistant> {}\n", answer),
        Err(e) => report(e),
    }
}

async fn generate(agent: &mut PmAgent, kind: DocKind, market_data: &str) {
    let requirements = agent.requirements_from_transcript();
    if requirements.is_empty() {
        println!("Chat about your product first, then generate documents from the conversation.");
        return;
    }

    let spinner = start_spinner(&format!("generating {}...", kind.display_name()));
    let result = if kind == DocKind::MarketResearch {
        agent.generate_market_research(&requirements, market_data).await
    } else {
        agent.generate_document(kind, &requirements).await
    };
    spinner.finish_and_clear();

    match result {
        Ok(content) => {
            println!("{}\n", content);
            println!("(saved in session; /save {} to export)", short_name(kind));
        }
        Err(e) => report(e),
    }
}

fn save(agent: &PmAgent, kind: &str) {
    let Some(kind) = DocKind::parse(kind) else {
        println!("Unknown kind. Use one of: brief, brd, market.");
        return;
    };

    let Some(doc) = agent.document(kind) else {
        println!(
            "No {} generated yet. Run /{} first.",
            kind.display_name(),
            short_name(kind)
        );
        return;
    };

    let path = kind.file_name();
    match std::fs::write(&path, &doc.content) {
        Ok(()) => println!("Wrote {}", path),
        Err(e) => println!("Failed to write {}: {}", path, e),
    }
}

fn report(e: AgentError) {
    // Failures are displayed, never fatal; the user can retry or rephrase.
    println!("error: {}\n", e);
}

fn short_name(kind: DocKind) -> &'static str {
    match kind {
        DocKind::ProductBrief => "brief",
        DocKind::Brd => "brd",
        DocKind::MarketResearch => "market",
    }
}

fn start_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
