// src/bin/secret_link.rs
//! secret-link CLI — seal a secret from stdin, or open one with its key

use std::io::Read;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use secret_link::link::{fragment_of, key_from_fragment, share_url_for};
use secret_link::{load_config, Sealer};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "secret-link", version, about = "Share a secret through a link")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Encrypt stdin; prints {"key", "encryptedBytes"} as JSON
    Seal {
        /// Secret id to build the share URL with
        #[arg(long)]
        id: Option<String>,
    },
    /// Decrypt the sealed text read from stdin
    Open {
        /// Key text (the part after `#`)
        #[arg(long, conflicts_with = "link")]
        key: Option<String>,
        /// Full share link; the key is taken from its fragment
        #[arg(long)]
        link: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config();
    let sealer = Sealer::from_config(config);

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;

    match cli.command {
        Command::Seal { id } => {
            let secret = sealer
                .encrypt_secret(&input)
                .context("Failed to encrypt secret")?;
            info!(alphabet = ?sealer.alphabet(), "secret sealed");

            println!("{}", serde_json::to_string_pretty(&secret)?);
            if let Some(id) = id {
                println!("{}", share_url_for(config, &id, &secret));
            }
        }
        Command::Open { key, link } => {
            let key_text = match (key.as_deref(), link.as_deref()) {
                (Some(key), _) => key.to_owned(),
                (None, Some(link)) => fragment_of(link)
                    .and_then(key_from_fragment)
                    .context("Link has no key fragment")?
                    .to_owned(),
                (None, None) => bail!("Either --key or --link is required"),
            };

            let plaintext = sealer
                .decrypt_secret(&key_text, input.trim())
                .context("Cannot decrypt")?;
            print!("{plaintext}");
        }
    }

    Ok(())
}
