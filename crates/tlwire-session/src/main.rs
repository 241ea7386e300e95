//! tlwire-dump
//!
//! Decodes captured packets and prints each inbound frame as JSON.

use std::io;

use bytes::Bytes;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use tlwire_core::inspect::to_json;
use tlwire_core::{Result, TlError};
use tlwire_session::cli::Args;
use tlwire_session::config::{self, SessionConfig};
use tlwire_session::state::SessionState;
use tlwire_session::transport::Inbound;

fn print(inbound: &[Inbound]) {
    for frame in inbound {
        let mut json = serde_json::json!({ "body": to_json(frame.body()) });
        if let Inbound::Framed { msg_id, seq_no, .. } = frame {
            json["msg_id"] = msg_id.to_string().into();
            json["seq_no"] = (*seq_no).into();
        }
        println!("{json}");
    }
}

async fn run() -> Result<()> {
    let args = Args::parse();
    let cfg = match &args.config {
        Some(path) => config::load_from_file(path)?,
        None => SessionConfig::default(),
    };
    let state = SessionState::new(cfg)?;

    if let Some(path) = args.dump {
        let text = tokio::fs::read_to_string(&path).await?;
        let digits: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        let raw = hex::decode(digits)
            .map_err(|e| TlError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))?;
        tracing::info!(%path, bytes = raw.len(), "decoding dump");
        print(&state.decode(Bytes::from(raw))?);
        return Ok(());
    }

    let mut reader = state.reader(tokio::io::stdin());
    let mut packets = 0usize;
    while let Some(inbound) = state.next_inbound(&mut reader).await? {
        packets += 1;
        print(&inbound);
    }
    tracing::info!(packets, "stream finished");
    Ok(())
}

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run().await {
        tracing::error!(kind = e.kind().as_str(), error = %e, "tlwire-dump failed");
        std::process::exit(1);
    }
}
