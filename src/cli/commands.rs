use crate::catalog::{AgentKind, AgentStatus};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ioa")]
#[command(author, version, about = "Internet of Agents discovery console", long_about = None)]
pub struct Cli {
    /// Directory holding staged registrations (overrides config)
    #[arg(long, global = true)]
    pub staging_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank agents against a free-text request
    Search {
        query: String,

        /// Only show this type (agent, llm, tool, compute)
        #[arg(short = 't', long = "type")]
        kind: Option<AgentKind>,

        /// Only show this status (default: active)
        #[arg(short, long, default_value = "active")]
        status: AgentStatus,

        /// Show every status
        #[arg(long)]
        any_status: bool,

        /// Disable the random score floor
        #[arg(short, long)]
        deterministic: bool,

        /// Seed the random score floor for repeatable output
        #[arg(long, conflicts_with = "deterministic")]
        seed: Option<u64>,
    },

    /// List the catalog through the type and status filters
    List {
        #[arg(short = 't', long = "type")]
        kind: Option<AgentKind>,

        #[arg(short, long, default_value = "active")]
        status: AgentStatus,

        #[arg(long)]
        any_status: bool,
    },

    /// Stage a new agent for the next catalog load
    Register {
        #[arg(long)]
        name: String,

        #[arg(short = 't', long = "type")]
        kind: String,

        #[arg(short, long)]
        layer: String,

        #[arg(short, long)]
        description: String,

        /// Comma-separated capabilities
        #[arg(short, long)]
        capabilities: String,

        #[arg(long, default_value = "0")]
        cpu: u8,

        #[arg(long, default_value = "0")]
        memory: u8,

        #[arg(long)]
        endpoint: Option<String>,
    },

    /// Chat with the orchestrator; each message re-runs discovery
    Chat,

    /// Show node counts and average resource usage
    Stats,

    /// Print the topology graph
    Topology,
}
