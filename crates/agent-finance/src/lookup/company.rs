//! Company description lookup

use super::LookupError;
use crate::profile::fields;
use crate::provider::DataProvider;
use crate::ticker::Ticker;
use serde::{Deserialize, Serialize};

/// Descriptive fields for a listed company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub ticker: Ticker,
    pub name: String,
    pub sector: Option<String>,
    pub industry: Option<String>,
}

/// Fetch name, sector and industry for `ticker`
///
/// Only the name is required; sector and industry may be missing.
pub async fn lookup_company<P>(provider: &P, ticker: &Ticker) -> Result<CompanyProfile, LookupError>
where
    P: DataProvider + ?Sized,
{
    let profile = provider.profile(ticker).await?;

    let name = profile
        .text(fields::LONG_NAME)
        .ok_or_else(|| LookupError::Unavailable {
            ticker: ticker.clone(),
            field: fields::LONG_NAME,
        })?;

    Ok(CompanyProfile {
        ticker: ticker.clone(),
        name: name.to_string(),
        sector: profile.text(fields::SECTOR).map(str::to_string),
        industry: profile.text(fields::INDUSTRY).map(str::to_string),
    })
}

/// Sentence shown to the user for a company lookup
pub fn render_company(outcome: &Result<CompanyProfile, LookupError>) -> String {
    match outcome {
        Ok(company) => format!(
            "The company name for {} is {}. The sector is {} and the industry is {}.",
            company.ticker,
            company.name,
            company.sector.as_deref().unwrap_or("unknown"),
            company.industry.as_deref().unwrap_or("unknown"),
        ),
        Err(LookupError::Unavailable { ticker, .. }) => {
            format!("Could not retrieve the company name for {ticker}.")
        }
        Err(LookupError::Provider(e)) => format!("Error fetching stock info: {e}"),
    }
}
