//! End-to-end tool sessions against offline fixtures

use agent_core::Context;
use agent_finance::history::RECENT_SEARCHES;
use agent_finance::{
    AgentKind, AgentSpec, CachedProvider, DataProvider, FinanceConfig, Recommendation,
    SearchHistory, StaticProvider, Ticker, Verdict,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

fn provider() -> Arc<dyn DataProvider> {
    let fixtures = StaticProvider::sample()
        .unwrap()
        .with_failure(Ticker::new("DOWN").unwrap(), "provider offline");
    Arc::new(CachedProvider::new(fixtures, Duration::from_secs(60)))
}

#[tokio::test]
async fn multi_tool_session_tracks_searches_and_answers_in_text() {
    let config = FinanceConfig::builder().history_capacity(10).build().unwrap();
    let agent = AgentSpec::build(AgentKind::MultiTool, provider(), &config);
    let mut session = Context::new().with_session_id("it-session");

    let price = agent
        .tools
        .execute("get_stock_price", json!({"ticker": "aapl"}), &mut session)
        .await
        .unwrap();
    assert_eq!(price, json!("The current price of AAPL is 189.84 USD."));

    let info = agent
        .tools
        .execute("get_stock_info", json!({"ticker": "AAPL"}), &mut session)
        .await
        .unwrap();
    assert!(info.as_str().unwrap().contains("Apple Inc."));

    for ticker in ["TSLA", "AAPL", "NOPE", "DOWN"] {
        let answer = agent
            .tools
            .execute("get_stock_price", json!({ "ticker": ticker }), &mut session)
            .await
            .unwrap();
        assert!(answer.is_string());
    }

    let recent: Vec<String> = SearchHistory::recent(&session)
        .unwrap()
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(recent, vec!["AAPL", "TSLA", "NOPE"]);
    assert_eq!(session.session_id(), Some("it-session"));
}

#[tokio::test]
async fn sessions_do_not_share_state() {
    let agent = AgentSpec::build(AgentKind::Stateful, provider(), &FinanceConfig::default());
    let mut first = Context::new();
    let mut second = Context::new();

    agent
        .tools
        .execute("get_stock_price", json!({"ticker": "MSFT"}), &mut first)
        .await
        .unwrap();

    assert!(first.contains_key(RECENT_SEARCHES));
    assert!(!second.contains_key(RECENT_SEARCHES));

    agent
        .tools
        .execute("get_stock_price", json!({"ticker": "TSLA"}), &mut second)
        .await
        .unwrap();
    assert_eq!(second.get(RECENT_SEARCHES), Some(&json!(["TSLA"])));
}

#[tokio::test]
async fn structured_agent_output_round_trips_through_validation() {
    let agent = AgentSpec::build(AgentKind::Structured, provider(), &FinanceConfig::default());
    let mut session = Context::new();

    let output = agent
        .tools
        .execute("get_stock_analysis", json!({"ticker": "msft"}), &mut session)
        .await
        .unwrap();

    let parsed = Recommendation::from_json(&output.to_string()).unwrap();
    assert_eq!(parsed.recommendation, Verdict::Buy);

    let key = agent.output_key.unwrap();
    let stored: Recommendation = session.get_typed(key).unwrap().unwrap();
    assert_eq!(stored, parsed);

    let err = agent
        .tools
        .execute("get_stock_analysis", json!({"ticker": "DOWN"}), &mut session)
        .await;
    assert!(err.is_err());
}

#[tokio::test]
async fn tools_outside_the_agent_are_not_found() {
    let agent = AgentSpec::build(AgentKind::Tool, provider(), &FinanceConfig::default());
    let mut session = Context::new();

    let result = agent
        .tools
        .execute("get_stock_info", json!({"ticker": "AAPL"}), &mut session)
        .await;
    assert!(matches!(result, Err(agent_core::Error::ToolNotFound(_))));
}
