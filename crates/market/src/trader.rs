// In crates/market/src/trader.rs

use std::fmt;
use std::rc::Rc;

use crate::Observer;
use core_types::{Price, Result, TraderName};
use strategies::TradingStrategy;

/// A named market participant that reacts to price updates through its strategy.
///
/// The name and strategy are fixed at construction. The strategy is shared,
/// so several traders may trade with the same instance.
pub struct Trader {
    name: TraderName,
    strategy: Rc<dyn TradingStrategy>,
}

impl Trader {
    /// Creates a new trader. A blank `name` is rejected with `Error::InvalidArgument`.
    pub fn new(name: impl Into<String>, strategy: Rc<dyn TradingStrategy>) -> Result<Self> {
        Ok(Self {
            name: TraderName::new(name)?,
            strategy,
        })
    }

    pub fn name(&self) -> &TraderName {
        &self.name
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }
}

impl Observer for Trader {
    fn on_update(&self, price: Price) -> Result<()> {
        tracing::trace!(trader = %self.name, strategy = self.strategy.name(), %price, "Trader reacting to price.");
        self.strategy.trade(price, &self.name)
    }
}

impl fmt::Debug for Trader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trader")
            .field("name", &self.name)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}
