//! CLI command execution.
//!
//! Everything here is presentation: the library does the work and this module
//! prints results, notices and loading indicators.

use std::io::Write;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use pastel::config::SynthConfig;
use pastel::models::{Message, SearchResult};
use pastel::shell::{Shell, SUGGESTED_QUERIES};
use pastel::{ChatError, Conversation, ReplyGenerator, ResponseSynthesizer};

use super::args::{Cli, Commands};

/// Notice shown when a reply could not be produced.
const REPLY_FAILED: &str = "Failed to get AI response. Please try again.";
const EMPTY_MESSAGE: &str = "Type a message before sending.";

/// Execute the CLI command.
pub async fn execute(cli: Cli) -> Result<()> {
    let config = cli.synth_config();

    match cli.command {
        Some(Commands::Search {
            json,
            chat,
            follow_up,
            ask,
            query,
        }) => {
            let next = if follow_up {
                Continue::FollowUp
            } else if let Some(n) = ask {
                Continue::Related(usize::from(n) - 1)
            } else if chat {
                Continue::Query
            } else {
                Continue::Stay
            };
            search(&config, &query.join(" "), json, next).await
        }
        Some(Commands::Chat { message }) => {
            let mut shell = Shell::new();
            let message = message.join(" ");
            shell.start_chat(Some(&message));
            chat_loop(&config, shell.initial_message()).await
        }
        Some(Commands::Suggestions) => {
            for query in SUGGESTED_QUERIES {
                println!("{query}");
            }
            Ok(())
        }
        None => {
            println!("PastelAI");
            println!("Your intelligent companion for human-like conversations, smart search, and instant summarization");
            println!();
            println!("Usage: pastel [OPTIONS] <COMMAND>");
            println!();
            println!("Commands:");
            println!("  search <QUERY>   Search and show results");
            println!("  chat [MESSAGE]   Start a conversation");
            println!("  suggestions      List suggested queries");
            println!();
            println!("Try asking:");
            for query in SUGGESTED_QUERIES {
                println!("  {query}");
            }
            Ok(())
        }
    }
}

/// What to do after showing search results.
#[derive(Debug, Clone, Copy)]
enum Continue {
    Stay,
    Query,
    FollowUp,
    Related(usize),
}

async fn search(config: &SynthConfig, query: &str, json: bool, next: Continue) -> Result<()> {
    let mut shell = Shell::new();
    let query = match shell.search(query) {
        Ok(query) => query.to_string(),
        Err(_) => {
            notice("Nothing to search", "Type a question first.");
            return Ok(());
        }
    };

    info!(%query, "searching");
    if !json {
        println!("Searching...");
    }
    tokio::time::sleep(config.search_delay()).await;

    let synth = ResponseSynthesizer::new(config);
    let results = synth.synthesize_search_results(&query);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&results).context("Failed to serialize results")?
        );
        return Ok(());
    }

    println!("Results for \"{query}\"");
    for result in &results {
        print_result(result);
    }

    println!();
    println!("Related questions:");
    for (n, question) in shell.related_questions().iter().enumerate() {
        println!("  {}. {question}", n + 1);
    }

    let initial = match next {
        Continue::Stay => return Ok(()),
        Continue::Query => {
            shell.start_chat(Some(&query));
            shell.initial_message()
        }
        Continue::FollowUp => shell.ask_follow_up(),
        Continue::Related(index) => shell.ask_related(index),
    };
    chat_loop(config, initial).await
}

fn print_result(result: &SearchResult) {
    println!();
    println!("[{}] {}", result.kind, result.title);
    if let Some(source) = &result.source {
        println!("Source: {source}");
    }
    if let Some(timestamp) = result.timestamp {
        println!("{}", timestamp.format("%Y-%m-%d %H:%M"));
    }
    println!("{}", result.content);
}

async fn chat_loop(config: &SynthConfig, initial: Option<&str>) -> Result<()> {
    let convo = Conversation::new(ResponseSynthesizer::new(config));

    println!("PastelAI Chat - Always ready to help");
    println!("Commands: /summarize, /transcript [json], /copy, /back");

    if let Some(text) = initial {
        send(&convo, text).await;
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };

        match line.trim() {
            "/back" | "/quit" => break,
            "/summarize" => match convo.summarize().await {
                Ok(summary) => {
                    print_message(&summary);
                    notice("Summary generated", "Conversation summary has been added to the chat.");
                }
                Err(ChatError::NoContent) => notice(
                    "No conversation to summarize",
                    "Start a conversation first to generate a summary.",
                ),
                Err(e) => notice("Error", &e.to_string()),
            },
            "/transcript" => print!("{}", convo.transcript().await),
            "/transcript json" => println!(
                "{}",
                serde_json::to_string_pretty(&convo.messages().await)
                    .context("Failed to serialize transcript")?
            ),
            "/copy" => match convo.last_reply().await {
                Some(message) => println!("{}", message.content),
                None => notice("Nothing to copy", "No reply yet."),
            },
            text => send(&convo, text).await,
        }
    }

    info!(messages = convo.len().await, "chat closed");
    Ok(())
}

async fn send<G: ReplyGenerator>(convo: &Conversation<G>, text: &str) {
    println!("...");
    match convo.submit(text).await {
        Ok(reply) => print_message(&reply),
        Err(ChatError::Busy) => notice("Please wait", "A reply is still on its way."),
        Err(ChatError::EmptyInput) => notice("Empty message", EMPTY_MESSAGE),
        Err(_) => notice("Error", REPLY_FAILED),
    }
}

fn print_message(message: &Message) {
    println!(
        "{} [{}]: {}",
        message.sender.label(),
        message.created_at.format("%H:%M"),
        message.content
    );
}

fn notice(title: &str, description: &str) {
    eprintln!("{title}: {description}");
}
