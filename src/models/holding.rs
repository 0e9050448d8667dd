use serde::{Deserialize, Serialize};

use super::instrument::AssetKind;

/// A user's position in one instrument. `buy_price` is the
/// cost-basis-weighted average across all buys still held;
/// `current_price` is refreshed with simulated movement on each load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holding {
    pub symbol: String,
    pub name: String,
    pub kind: AssetKind,
    pub shares: f64,
    pub buy_price: f64,
    pub current_price: f64,
}

impl Holding {
    /// Market value of this position at the current price.
    pub fn market_value(&self) -> f64 {
        self.shares * self.current_price
    }

    /// Cumulative amount paid for the shares still held.
    pub fn cost_basis(&self) -> f64 {
        self.shares * self.buy_price
    }

    /// Unrealized profit or loss.
    pub fn unrealized_profit(&self) -> f64 {
        self.market_value() - self.cost_basis()
    }
}

/// Aggregate valuation of a set of holdings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub market_value: f64,
    pub cost_basis: f64,
    pub profit: f64,
    pub profit_percent: f64,
}

/// Result of a buy or sell. Holdings are returned as a new value;
/// the shell applies `cash_delta` to the stored balance (negative for
/// buys, positive for sells).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeOutcome {
    pub holdings: Vec<Holding>,
    pub cash_delta: f64,
    /// Realized profit against cost basis. Always 0 for buys.
    pub realized_profit: f64,
}
