//! Ready-made agent definitions
//!
//! Each `AgentKind` bundles an instruction, a model id and the tools it may
//! call. The agent runtime that drives the model consumes an `AgentSpec`;
//! this crate only describes it.

use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use agent_tools::ToolRegistry;

use crate::config::FinanceConfig;
use crate::error::FinanceError;
use crate::history::SearchHistory;
use crate::provider::DataProvider;
use crate::recommendation::Recommendation;
use crate::tools::analysis::STOCK_ANALYSIS;
use crate::tools::{StockAnalysisTool, StockInfoTool, StockPriceTool};

const PRICE_INSTRUCTION: &str =
    "Answer user questions about stock prices using the get_stock_price tool.";

const MULTI_TOOL_INSTRUCTION: &str = "Answer user questions about stock prices and info \
using the get_stock_price and get_stock_info tools.";

const STRUCTURED_INSTRUCTION: &str = r"You are a stock advisor. Analyze the stock ticker provided by the user.
Return Buy or Sell recommendation in JSON format.

For each ticker, look at the price and target price to make a decision.
If target price > current price: recommend Buy
Otherwise: recommend Sell";

/// The available agent configurations, from plain chat to structured output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentKind {
    /// No tools
    Basic,
    /// Stateless price lookups
    Tool,
    /// Price lookups that record recent searches
    Stateful,
    /// Price (with history) and company info
    MultiTool,
    /// Buy/Sell record with a fixed schema
    Structured,
}

impl AgentKind {
    pub const ALL: [AgentKind; 5] = [
        AgentKind::Basic,
        AgentKind::Tool,
        AgentKind::Stateful,
        AgentKind::MultiTool,
        AgentKind::Structured,
    ];

    /// Agent name as registered with the runtime
    pub fn agent_name(self) -> &'static str {
        match self {
            Self::Basic => "root_agent",
            Self::Tool => "tool_agent",
            Self::Stateful => "stateful_agent",
            Self::MultiTool => "multi_tool_agent",
            Self::Structured => "structured_agent",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::Basic => "A helpful assistant.",
            Self::Tool | Self::Stateful => "An agent that provides current stock prices.",
            Self::MultiTool => "An agent that provides current stock prices and company info.",
            Self::Structured => "An agent with structured output",
        }
    }

    fn instruction(self) -> &'static str {
        match self {
            Self::Basic => "Give Answer to the user query",
            Self::Tool | Self::Stateful => PRICE_INSTRUCTION,
            Self::MultiTool => MULTI_TOOL_INSTRUCTION,
            Self::Structured => STRUCTURED_INSTRUCTION,
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.agent_name())
    }
}

impl FromStr for AgentKind {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "basic" | "root-agent" => Ok(Self::Basic),
            "tool" | "tool-agent" => Ok(Self::Tool),
            "stateful" | "stateful-agent" => Ok(Self::Stateful),
            "multi-tool" | "multi-tool-agent" => Ok(Self::MultiTool),
            "structured" | "structured-agent" => Ok(Self::Structured),
            other => Err(FinanceError::ConfigError(format!("Unknown agent kind: {other}"))),
        }
    }
}

/// Everything an agent runtime needs to instantiate one agent
#[derive(Debug)]
pub struct AgentSpec {
    pub kind: AgentKind,
    pub name: &'static str,
    pub model: String,
    pub description: &'static str,
    pub instruction: &'static str,
    pub tools: ToolRegistry,
    /// JSON Schema the final answer must satisfy
    pub output_schema: Option<Value>,
    /// Context key the structured answer is stored under
    pub output_key: Option<&'static str>,
}

impl AgentSpec {
    /// Build `kind` with its tools wired to `provider`
    pub fn build(kind: AgentKind, provider: Arc<dyn DataProvider>, config: &FinanceConfig) -> Self {
        let tools = ToolRegistry::new();
        let history = SearchHistory::new(config.history_limit());
        let price = || StockPriceTool::new(Arc::clone(&provider), config.currency.clone());

        match kind {
            AgentKind::Basic => {}
            AgentKind::Tool => tools.register(Arc::new(price())),
            AgentKind::Stateful => tools.register(Arc::new(price().with_history(history))),
            AgentKind::MultiTool => {
                tools.register(Arc::new(price().with_history(history)));
                tools.register(Arc::new(StockInfoTool::new(Arc::clone(&provider))));
            }
            AgentKind::Structured => {
                tools.register(Arc::new(StockAnalysisTool::new(Arc::clone(&provider))));
            }
        }

        let structured = kind == AgentKind::Structured;

        tracing::debug!(agent = kind.agent_name(), tools = ?tools.names(), "Built agent spec");

        Self {
            kind,
            name: kind.agent_name(),
            model: config.model.clone(),
            description: kind.description(),
            instruction: kind.instruction(),
            tools,
            output_schema: structured.then(Recommendation::output_schema),
            output_key: structured.then_some(STOCK_ANALYSIS),
        }
    }
}
