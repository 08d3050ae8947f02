//! Current price lookup

use super::LookupError;
use crate::profile::fields;
use crate::provider::DataProvider;
use crate::ticker::Ticker;
use serde::{Deserialize, Serialize};

/// Price of a ticker at lookup time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub ticker: Ticker,
    pub price: f64,
}

/// Fetch the current market price for `ticker`
pub async fn lookup_quote<P>(provider: &P, ticker: &Ticker) -> Result<Quote, LookupError>
where
    P: DataProvider + ?Sized,
{
    let profile = provider.profile(ticker).await?;

    let price = profile
        .number(fields::REGULAR_MARKET_PRICE)
        .ok_or_else(|| LookupError::Unavailable {
            ticker: ticker.clone(),
            field: fields::REGULAR_MARKET_PRICE,
        })?;

    Ok(Quote {
        ticker: ticker.clone(),
        price,
    })
}

/// Sentence shown to the user for a quote lookup
pub fn render_quote(outcome: &Result<Quote, LookupError>, currency: &str) -> String {
    match outcome {
        Ok(quote) => format!(
            "The current price of {} is {} {currency}.",
            quote.ticker,
            format_price(quote.price)
        ),
        Err(LookupError::Unavailable { ticker, .. }) => {
            format!("Could not retrieve the price for {ticker}.")
        }
        Err(LookupError::Provider(e)) => format!("Error fetching stock price: {e}"),
    }
}

/// Plain decimal notation; whole numbers keep one fractional digit
fn format_price(price: f64) -> String {
    if price.is_finite() && price.fract() == 0.0 {
        format!("{price:.1}")
    } else {
        price.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FinanceError;
    use crate::profile::ProviderProfile;
    use crate::provider::{MockDataProvider, StaticProvider};

    fn ticker(s: &str) -> Ticker {
        Ticker::new(s).unwrap()
    }

    #[tokio::test]
    async fn test_present_price() {
        let provider = StaticProvider::new().with_profile(
            ticker("AAPL"),
            ProviderProfile::new().with(fields::REGULAR_MARKET_PRICE, 189.84),
        );

        let outcome = lookup_quote(&provider, &ticker("aapl")).await;
        assert_eq!(outcome.as_ref().unwrap().price, 189.84);
        assert_eq!(
            render_quote(&outcome, "USD"),
            "The current price of AAPL is 189.84 USD."
        );
    }

    #[tokio::test]
    async fn test_whole_number_price_keeps_fraction() {
        let provider = StaticProvider::new().with_profile(
            ticker("IBM"),
            ProviderProfile::new().with(fields::REGULAR_MARKET_PRICE, 150.0),
        );

        let outcome = lookup_quote(&provider, &ticker("IBM")).await;
        assert_eq!(render_quote(&outcome, "USD"), "The current price of IBM is 150.0 USD.");
    }

    #[tokio::test]
    async fn test_absent_price() {
        let provider = StaticProvider::new();

        let outcome = lookup_quote(&provider, &ticker("zzzz")).await;
        assert!(outcome.as_ref().unwrap_err().is_unavailable());
        assert_eq!(
            render_quote(&outcome, "USD"),
            "Could not retrieve the price for ZZZZ."
        );
    }

    #[tokio::test]
    async fn test_provider_failure() {
        let mut mock = MockDataProvider::new();
        mock.expect_profile()
            .returning(|_| Err(FinanceError::YahooFinanceError("connection reset".to_string())));

        let outcome = lookup_quote(&mock, &ticker("AAPL")).await;
        assert!(matches!(outcome, Err(LookupError::Provider(_))));

        let message = render_quote(&outcome, "USD");
        assert!(message.starts_with("Error fetching stock price: "));
        assert!(message.contains("connection reset"));
    }

    #[test]
    fn test_price_never_uses_exponent() {
        let quote = |price: f64| -> Result<Quote, LookupError> {
            Ok(Quote {
                ticker: ticker("PNY"),
                price,
            })
        };

        assert_eq!(
            render_quote(&quote(0.000_012_34), "USD"),
            "The current price of PNY is 0.00001234 USD."
        );
        assert_eq!(
            render_quote(&quote(1.5e16), "USD"),
            "The current price of PNY is 15000000000000000.0 USD."
        );
        assert_eq!(render_quote(&quote(42.0), "EUR"), "The current price of PNY is 42.0 EUR.");
    }
}
