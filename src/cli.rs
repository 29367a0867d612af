//! Terminal chat front end.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use clap::Parser;

use crate::config::ParleyConfig;
use crate::conversation::{ChatSession, SubmitOutcome};
use crate::provider::groq::GroqClient;
use crate::reflow::{reflow, DEFAULT_MAX_PARAGRAPH_LEN};
use crate::types::Role;

/// Parley terminal chat.
#[derive(Parser, Debug)]
#[command(name = "parley", version, about = "Chat with an OpenAI-compatible model endpoint")]
pub struct Cli {
    /// Percent-encoded initial message, submitted as soon as the session starts
    #[arg(short, long)]
    pub query: Option<String>,

    /// Model identifier (default: llama3-8b-8192, or PARLEY_MODEL)
    #[arg(short, long)]
    pub model: Option<String>,

    /// System prompt override
    #[arg(short, long)]
    pub system: Option<String>,

    /// Temperature (0.0 - 2.0)
    #[arg(short, long)]
    pub temperature: Option<f64>,

    /// Max tokens
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Soft cap on displayed paragraph length, in characters
    #[arg(long, default_value_t = DEFAULT_MAX_PARAGRAPH_LEN)]
    pub max_paragraph: usize,
}

/// Run the chat REPL until stdin closes.
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = ParleyConfig::from_env();
    if let Some(model) = cli.model {
        config = config.with_model(model);
    }
    if let Some(system) = cli.system {
        config = config.with_system_prompt(system);
    }
    if let Some(t) = cli.temperature {
        config.settings.temperature = Some(t);
    }
    if let Some(max) = cli.max_tokens {
        config.settings.max_tokens = Some(max);
    }

    let client = Arc::new(GroqClient::from_config(&config)?);
    let mut session = ChatSession::new(client, &config);

    // Bootstrap message, e.g. handed over from a URL query parameter.
    if let Some(query) = cli.query {
        let outcome = session.submit_encoded(&query).await;
        report(&session, outcome, cli.max_paragraph);
    }

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let outcome = session.submit(line.trim_end_matches('\n')).await;
        report(&session, outcome, cli.max_paragraph);
    }

    Ok(())
}

/// Print the newest assistant turn, or the failure, after a submit.
fn report(session: &ChatSession, outcome: SubmitOutcome, max_paragraph: usize) {
    match outcome {
        SubmitOutcome::Completed => {
            if let Some(reply) = session
                .messages()
                .iter()
                .rev()
                .find(|m| m.role == Role::Assistant)
            {
                for paragraph in reflow(&reply.content, max_paragraph) {
                    println!("{paragraph}");
                    println!();
                }
            }
        }
        SubmitOutcome::Failed(error) => {
            eprintln!("(request failed: {error})");
        }
        SubmitOutcome::Ignored => {}
    }
}
