mod config;
mod error;
mod menubar;
mod models;
mod services;

use crate::config::{Config, ConfigArgs};
use crate::error::AppError;
use crate::menubar::MenuBar;
use crate::models::PlayPauseAction;
use crate::services::KodiClient;
use clap::{Parser, Subcommand};
use serde_json::{Map, Value};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "kodi-menubar", version)]
#[command(about = "Kodi playback status for the menu bar", long_about = None)]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Set the play/pause state of a player
    PlayPause {
        /// Player id (defaults to the first active player)
        #[arg(short, long)]
        player: Option<i64>,

        #[arg(value_enum, default_value_t = PlayPauseAction::Toggle)]
        action: PlayPauseAction,
    },

    /// Send a raw JSON-RPC call and print its result
    Call {
        /// RPC method name, e.g. JSONRPC.Version
        method: String,

        /// Positional JSON values, or key=<json> named params
        args: Vec<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match Config::from_args(cli.config).and_then(|c| init_tracing(&c).map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!("config={:?}", config);

    let kodi = KodiClient::new(&config)?;

    match cli.command {
        None => show_status(&kodi, &config).await?,
        Some(Commands::PlayPause { player, action }) => play_pause(&kodi, player, action).await?,
        Some(Commands::Call { method, args }) => {
            let (positional, named) = parse_call_args(args);
            let result = kodi.call_with(&method, positional, named).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}

fn init_tracing(config: &Config) -> error::Result<()> {
    let file_layer = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    AppError::Config(format!("Cannot open log file {}: {}", path.display(), e))
                })?;
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,kodi_menubar=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    Ok(())
}

async fn show_status(kodi: &KodiClient, config: &Config) -> anyhow::Result<()> {
    let now_playing = kodi.now_playing().await?;
    tracing::debug!("now_playing={:?}", now_playing);

    let executable = std::env::current_exe()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "kodi-menubar".to_string());

    let menu = MenuBar::new(&config.url, &executable, menubar::icon());
    for line in menu.render(now_playing.as_ref()) {
        println!("{}", line);
    }

    Ok(())
}

async fn play_pause(
    kodi: &KodiClient,
    player: Option<i64>,
    action: PlayPauseAction,
) -> anyhow::Result<()> {
    let player_id = match player {
        Some(id) => id,
        None => match kodi.first_active_player().await? {
            Some(active) => active.player_id,
            None => {
                tracing::info!("No active player, nothing to {}", action.as_arg());
                return Ok(());
            }
        },
    };

    let speed = kodi.play_pause(player_id, action).await?;
    tracing::info!("Player {} speed is now {}", player_id, speed);

    Ok(())
}

/// Splits `call` arguments into positional values and `key=value` pairs.
/// Values are parsed as JSON, falling back to plain strings.
fn parse_call_args(args: Vec<String>) -> (Vec<Value>, Map<String, Value>) {
    let mut positional = Vec::new();
    let mut named = Map::new();

    for arg in args {
        match arg.split_once('=') {
            Some((key, value)) if is_param_name(key) => {
                named.insert(key.to_string(), parse_json_arg(value));
            }
            _ => positional.push(parse_json_arg(&arg)),
        }
    }

    (positional, named)
}

fn is_param_name(key: &str) -> bool {
    let mut chars = key.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn parse_json_arg(value: &str) -> Value {
    serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()))
}
