//! Terminal session for stock-agent-tools
//!
//! Stands in for an agent runtime: each line names a tool and a ticker, the
//! call runs against one session context, and the tool's answer is printed.
//!
//! # Usage
//!
//! ```bash
//! # Optional: enables company info and target prices
//! export ALPHA_VANTAGE_API_KEY=your_key_here
//!
//! cargo run --bin stock-agent -- --agent multi-tool
//! cargo run --bin stock-agent -- --offline --command "analyze AAPL"
//! ```

mod commands;

use agent_core::Context;
use agent_finance::{
    AgentKind, AgentSpec, CachedProvider, DataProvider, FinanceConfig, MarketDataClient,
    SearchHistory, StaticProvider,
};
use anyhow::Context as _;
use clap::Parser;
use commands::{Command, HELP};
use serde_json::{Value, json};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "stock-agent")]
#[command(about = "Run stock lookup tools in a terminal session", long_about = None)]
struct Args {
    /// Agent configuration: basic, tool, stateful, multi-tool, structured
    #[arg(short, long, default_value = "multi-tool")]
    agent: AgentKind,

    /// Use built-in sample data instead of live market data
    #[arg(long)]
    offline: bool,

    /// Run a single command and exit
    #[arg(short, long)]
    command: Option<String>,

    /// Maximum recent searches kept for the session
    #[arg(long, conflicts_with = "unbounded_history")]
    history_capacity: Option<usize>,

    /// Keep every searched ticker for the whole session
    #[arg(long)]
    unbounded_history: bool,
}

impl Args {
    fn config(&self) -> anyhow::Result<FinanceConfig> {
        let mut builder = FinanceConfig::builder().with_env_api_key();
        if let Some(capacity) = self.history_capacity {
            builder = builder.history_capacity(capacity);
        }
        if self.unbounded_history {
            builder = builder.unbounded_history();
        }
        Ok(builder.build()?)
    }

    fn provider(&self, config: &FinanceConfig) -> anyhow::Result<Arc<dyn DataProvider>> {
        if self.offline {
            return Ok(Arc::new(StaticProvider::sample()?));
        }
        let client = MarketDataClient::new(config).context("failed to create market data client")?;
        Ok(Arc::new(CachedProvider::new(client, config.cache_ttl)))
    }
}

/// One interactive session: an agent definition plus its state
struct Session {
    agent: AgentSpec,
    context: Context,
}

impl Session {
    /// Handle one input line; `false` means the session is over
    async fn handle(&mut self, line: &str, out: &mut impl Write) -> anyhow::Result<bool> {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{e}. Type 'help' for commands.")?;
                return Ok(true);
            }
        };

        match command {
            Command::Exit => return Ok(false),
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Tools => {
                if self.agent.tools.is_empty() {
                    writeln!(out, "{} has no tools.", self.agent.name)?;
                }
                for def in self.agent.tools.definitions() {
                    writeln!(out, "  {:<20} {}", def.name, def.description)?;
                }
            }
            Command::History => {
                let recent = SearchHistory::recent(&self.context)?;
                if recent.is_empty() {
                    writeln!(out, "No recent searches.")?;
                } else {
                    let list: Vec<String> = recent.into_iter().map(String::from).collect();
                    writeln!(out, "Recent searches: {}", list.join(", "))?;
                }
            }
            Command::Call { tool, ticker } => {
                if !self.agent.tools.contains(&tool) {
                    writeln!(out, "{} does not expose {tool}.", self.agent.name)?;
                    return Ok(true);
                }
                let result = self
                    .agent
                    .tools
                    .execute(&tool, json!({ "ticker": ticker }), &mut self.context)
                    .await;
                match result {
                    Ok(Value::String(text)) => writeln!(out, "{text}")?,
                    Ok(value) => writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?,
                    Err(e) => writeln!(out, "{e}")?,
                }
            }
        }
        Ok(true)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    agent_utils::init_tracing_with("warn,agent_finance=info");

    let args = Args::parse();
    let config = args.config()?;
    let provider = args.provider(&config)?;

    let agent = AgentSpec::build(args.agent, provider, &config);
    let session_id = uuid::Uuid::new_v4().to_string();
    info!(agent = agent.name, session = %session_id, offline = args.offline, "Starting session");

    let mut session = Session {
        agent,
        context: Context::new().with_session_id(session_id),
    };
    let mut stdout = io::stdout();

    if let Some(command) = args.command {
        session.handle(&command, &mut stdout).await?;
        return Ok(());
    }

    println!("{} ({})", session.agent.name, session.agent.description);
    println!("{}", session.agent.instruction);
    println!("Type 'help' for commands.\n");

    let stdin = io::stdin();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }
        if !session.handle(&line, &mut stdout).await? {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn run(kind: AgentKind, lines: &[&str]) -> (String, Context) {
        let provider: Arc<dyn DataProvider> = Arc::new(StaticProvider::sample().unwrap());
        let mut session = Session {
            agent: AgentSpec::build(kind, provider, &FinanceConfig::default()),
            context: Context::new(),
        };
        let mut out = Vec::new();
        for line in lines {
            session.handle(line, &mut out).await.unwrap();
        }
        (String::from_utf8(out).unwrap(), session.context)
    }

    #[tokio::test]
    async fn test_price_and_history() {
        let (out, _) = run(AgentKind::Stateful, &["price aapl", "price TSLA", "history"]).await;
        assert!(out.contains("The current price of AAPL is 189.84 USD."));
        assert!(out.contains("Recent searches: AAPL, TSLA"));
    }

    #[tokio::test]
    async fn test_structured_output_is_pretty_json() {
        let (out, ctx) = run(AgentKind::Structured, &["analyze tsla"]).await;
        assert!(out.contains("\"recommendation\": \"Sell\""));
        assert!(ctx.contains_key("stock_analysis"));
    }

    #[tokio::test]
    async fn test_tool_not_exposed() {
        let (out, _) = run(AgentKind::Tool, &["info AAPL"]).await;
        assert_eq!(out.trim(), "tool_agent does not expose get_stock_info.");
    }

    #[tokio::test]
    async fn test_exit_and_bad_input() {
        let provider: Arc<dyn DataProvider> = Arc::new(StaticProvider::new());
        let mut session = Session {
            agent: AgentSpec::build(AgentKind::Basic, provider, &FinanceConfig::default()),
            context: Context::new(),
        };
        let mut out = Vec::new();

        assert!(session.handle("price", &mut out).await.unwrap());
        assert!(!session.handle("exit", &mut out).await.unwrap());
        assert!(String::from_utf8(out).unwrap().contains("Missing ticker"));
    }

    #[test]
    fn test_args_config() {
        let args = Args::parse_from(["stock-agent", "--agent", "structured", "--history-capacity", "3"]);
        assert_eq!(args.agent, AgentKind::Structured);
        assert_eq!(args.config().unwrap().history_capacity, Some(3));

        let args = Args::parse_from(["stock-agent", "--unbounded-history"]);
        assert_eq!(args.agent, AgentKind::MultiTool);
        assert_eq!(args.config().unwrap().history_capacity, None);
    }
}
