use serde::{Deserialize, Serialize};

/// Kind of tradable instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Stock,
    Fund,
}

/// A simulated tradable instrument. Base price is the quoted catalog
/// price; volatility is the per-step relative magnitude of random
/// price movement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instrument {
    pub symbol: String,
    pub name: String,
    pub kind: AssetKind,
    pub base_price: f64,
    pub volatility: f64,
}

impl Instrument {
    fn new(symbol: &str, name: &str, kind: AssetKind, base_price: f64, volatility: f64) -> Self {
        Instrument {
            symbol: symbol.to_string(),
            name: name.to_string(),
            kind,
            base_price,
            volatility,
        }
    }
}

/// One point of a generated price history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricePoint {
    /// Short month/day label, e.g. "Jan 5".
    pub date: String,
    pub price: f64,
}

/// The set of instruments available to trade. Fixed at runtime but
/// injectable so tests can swap the listing without touching pricing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstrumentCatalog {
    instruments: Vec<Instrument>,
}

impl InstrumentCatalog {
    pub fn new(instruments: Vec<Instrument>) -> Self {
        InstrumentCatalog { instruments }
    }

    pub fn get(&self, symbol: &str) -> Option<&Instrument> {
        self.instruments.iter().find(|i| i.symbol == symbol)
    }

    pub fn all(&self) -> &[Instrument] {
        &self.instruments
    }

    pub fn stocks(&self) -> impl Iterator<Item = &Instrument> {
        self.instruments
            .iter()
            .filter(|i| i.kind == AssetKind::Stock)
    }

    pub fn funds(&self) -> impl Iterator<Item = &Instrument> {
        self.instruments.iter().filter(|i| i.kind == AssetKind::Fund)
    }
}

impl Default for InstrumentCatalog {
    /// The built-in market: 5 stocks and 3 index funds.
    fn default() -> Self {
        use AssetKind::{Fund, Stock};
        InstrumentCatalog::new(vec![
            Instrument::new("TECH", "TechGrowth Inc.", Stock, 150.00, 0.03),
            Instrument::new("SAFE", "SafeBank Corp.", Stock, 45.00, 0.01),
            Instrument::new("GREEN", "EcoEnergy Ltd.", Stock, 78.50, 0.025),
            Instrument::new("GAME", "GameWorld Studios", Stock, 92.30, 0.04),
            Instrument::new("FOOD", "FreshFoods Co.", Stock, 34.20, 0.015),
            Instrument::new("INDEX", "Total Market Index Fund", Fund, 100.00, 0.008),
            Instrument::new("GROWTH", "Growth Leaders Fund", Fund, 85.00, 0.012),
            Instrument::new("STABLE", "Stable Income Fund", Fund, 50.00, 0.005),
        ])
    }
}
