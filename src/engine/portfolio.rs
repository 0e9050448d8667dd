use tracing::debug;

use crate::errors::AppError;
use crate::models::holding::{Holding, PortfolioSummary, TradeOutcome};
use crate::models::instrument::InstrumentCatalog;

/// Buy `shares` of `symbol` at its catalog price.
///
/// Rejects non-positive or non-finite share counts, symbols missing
/// from the catalog, and orders whose cost exceeds `available_cash`;
/// on any rejection the input holdings are untouched. A repeat buy of
/// a held symbol merges into the existing position with a
/// cost-basis-weighted average buy price.
pub fn buy(
    holdings: &[Holding],
    catalog: &InstrumentCatalog,
    symbol: &str,
    shares: f64,
    available_cash: f64,
) -> Result<TradeOutcome, AppError> {
    if !shares.is_finite() || shares <= 0.0 {
        return Err(AppError::Validation(format!(
            "Share count must be positive, got {}",
            shares
        )));
    }

    let instrument = catalog
        .get(symbol)
        .ok_or_else(|| AppError::UnknownInstrument(symbol.to_string()))?;

    let cost = shares * instrument.base_price;
    if cost > available_cash {
        return Err(AppError::InsufficientFunds {
            cost,
            available: available_cash,
        });
    }

    let mut updated: Vec<Holding> = holdings.to_vec();
    match updated.iter_mut().find(|h| h.symbol == symbol) {
        Some(position) => {
            let new_shares = position.shares + shares;
            position.buy_price =
                (position.shares * position.buy_price + cost) / new_shares;
            position.shares = new_shares;
            position.current_price = instrument.base_price;
        }
        None => {
            updated.push(Holding {
                symbol: instrument.symbol.clone(),
                name: instrument.name.clone(),
                kind: instrument.kind,
                shares,
                buy_price: instrument.base_price,
                current_price: instrument.base_price,
            });
        }
    }

    debug!(symbol, shares, cost, "position bought");
    Ok(TradeOutcome {
        holdings: updated,
        cash_delta: -cost,
        realized_profit: 0.0,
    })
}

/// Sell the entire position in `symbol` at its current price.
///
/// Only full liquidation is supported; the holding is removed and the
/// proceeds are returned as a positive cash delta.
pub fn sell(holdings: &[Holding], symbol: &str) -> Result<TradeOutcome, AppError> {
    let position = holdings
        .iter()
        .find(|h| h.symbol == symbol)
        .ok_or_else(|| AppError::PositionNotFound(symbol.to_string()))?;

    let proceeds = position.market_value();
    let profit = proceeds - position.cost_basis();

    let updated: Vec<Holding> = holdings
        .iter()
        .filter(|h| h.symbol != symbol)
        .cloned()
        .collect();

    debug!(symbol, proceeds, profit, "position sold");
    Ok(TradeOutcome {
        holdings: updated,
        cash_delta: proceeds,
        realized_profit: profit,
    })
}

/// Aggregate valuation across all holdings. Profit percent is defined
/// as 0 when the cost basis is 0 (empty portfolio), never NaN.
pub fn summarize(holdings: &[Holding]) -> PortfolioSummary {
    let market_value: f64 = holdings.iter().map(Holding::market_value).sum();
    let cost_basis: f64 = holdings.iter().map(Holding::cost_basis).sum();
    let profit = market_value - cost_basis;
    let profit_percent = if cost_basis > 0.0 {
        profit / cost_basis * 100.0
    } else {
        0.0
    };

    PortfolioSummary {
        market_value,
        cost_basis,
        profit,
        profit_percent,
    }
}
