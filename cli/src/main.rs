//! Terminal client for the store assistant.
//!
//! Talks to the same `/api` endpoints as the browser widget, through the
//! widget host or directly to the backend, and prints replies with the
//! plain-text renderer.

mod http;
mod render;
mod repl;

use chatcore::session::{ConversationSession, SendOutcome};
use chatcore::status::{ConnectionStatus, check_connection, fetch_store_info, load_store_stats};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::http::HttpApi;
use crate::repl::{HELP, ReplInput, parse_line};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http client build failed: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("assistant is not reachable ({0})")]
    Disconnected(&'static str),
    #[error("store info failed: {0}")]
    StoreInfo(#[from] chatcore::status::StoreInfoError),
    #[error("message is empty")]
    EmptyMessage,
    #[error("chat request failed")]
    ChatFailed,
    #[error("stdin read failed: {0}")]
    Stdin(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "shopchat-cli", about = "Store assistant terminal client")]
struct Cli {
    #[arg(long, env = "SHOPCHAT_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the assistant health endpoint.
    Ping,
    /// Send one message and print the reply.
    Ask { message: String },
    /// Interactive conversation over stdin.
    Chat,
    /// Probe products, orders and customers.
    Stats,
    /// Print the shop record.
    StoreInfo,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let api = HttpApi::new(&cli.base_url)?;

    match cli.command {
        Command::Ping => run_ping(&api).await,
        Command::Ask { message } => run_ask(&api, &message).await,
        Command::Chat => run_chat(&api).await,
        Command::Stats => {
            println!("{}", render::stats_text(&load_store_stats(&api).await));
            Ok(())
        }
        Command::StoreInfo => {
            let shop = fetch_store_info(&api).await?;
            println!("{}", chatcore::Reply::Shop(shop).to_text());
            Ok(())
        }
    }
}

async fn run_ping(api: &HttpApi) -> Result<(), CliError> {
    match check_connection(api).await {
        ConnectionStatus::Connected => {
            println!("ok");
            Ok(())
        }
        status => Err(CliError::Disconnected(status.label())),
    }
}

async fn run_ask(api: &HttpApi, message: &str) -> Result<(), CliError> {
    let mut session = ConversationSession::new();
    match session.send(api, message).await {
        SendOutcome::Rejected(_) => Err(CliError::EmptyMessage),
        outcome => {
            print_last_turn(&session);
            if outcome == SendOutcome::Failed { Err(CliError::ChatFailed) } else { Ok(()) }
        }
    }
}

async fn run_chat(api: &HttpApi) -> Result<(), CliError> {
    let mut session = ConversationSession::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    eprintln!("{HELP}");

    while let Some(line) = lines.next_line().await? {
        let message = match parse_line(&line) {
            ReplInput::Quit => break,
            ReplInput::Empty => continue,
            ReplInput::Unknown(command) => {
                eprintln!("unknown command {command}; {HELP}");
                continue;
            }
            ReplInput::Send(text) => text,
            ReplInput::Action(action) => action.message(),
        };

        if !matches!(session.send(api, message).await, SendOutcome::Rejected(_)) {
            print_last_turn(&session);
        }
    }
    Ok(())
}

fn print_last_turn(session: &ConversationSession) {
    if let Some(turn) = session.transcript().last() {
        if turn.is_error {
            eprintln!("{}", render::turn_text(turn));
        } else {
            println!("{}\n", render::turn_text(turn));
        }
    }
}

