//! Command parsing for the interactive session

use anyhow::{Result, bail};

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Call a tool with a ticker argument
    Call { tool: String, ticker: String },
    /// Show the session's recent searches
    History,
    /// List the tools the current agent exposes
    Tools,
    /// Show help
    Help,
    /// Exit the session
    Exit,
}

impl Command {
    /// Parse a command from user input
    ///
    /// `price`, `info` and `analyze` are shorthands for the tool names;
    /// any other word followed by a ticker is taken as a tool name.
    pub fn parse(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let Some((first, args)) = parts.split_first() else {
            bail!("Empty input");
        };

        let cmd = first.trim_start_matches('/').to_lowercase();

        match cmd.as_str() {
            "history" | "recent" => return Ok(Command::History),
            "tools" => return Ok(Command::Tools),
            "help" | "h" | "?" => return Ok(Command::Help),
            "exit" | "quit" | "q" => return Ok(Command::Exit),
            _ => {}
        }

        let tool = match cmd.as_str() {
            "price" | "p" => "get_stock_price".to_string(),
            "info" | "i" => "get_stock_info".to_string(),
            "analyze" | "a" => "get_stock_analysis".to_string(),
            other => other.to_string(),
        };

        let ticker = match args {
            [ticker] => (*ticker).to_string(),
            [] => bail!("Missing ticker for {cmd}"),
            _ => bail!("Expected a single ticker for {cmd}"),
        };

        Ok(Command::Call { tool, ticker })
    }
}

pub const HELP: &str = "\
Commands:
  price <TICKER>     current price            (get_stock_price)
  info <TICKER>      company name and sector  (get_stock_info)
  analyze <TICKER>   Buy/Sell recommendation  (get_stock_analysis)
  <tool> <TICKER>    call any tool by name
  history            recent searches in this session
  tools              tools exposed by the current agent
  help               this message
  exit               leave the session";
