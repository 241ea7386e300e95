//! Command line of the `tlwire-dump` binary.
//!
//! - `tlwire-dump [--config FILE] DUMP.hex` decodes one packet from a hex dump
//! - `tlwire-dump [--config FILE]` reads length-prefixed packets from stdin

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tlwire-dump")]
#[command(about = "Decode captured MTProto packets and print each frame as JSON")]
pub struct Args {
    /// Session config (YAML); defaults apply when omitted
    #[arg(long, value_name = "FILE")]
    pub config: Option<String>,

    /// Hex dump of a single packet payload; stdin is read when omitted
    #[arg(value_name = "DUMP")]
    pub dump: Option<String>,
}
