// In crates/strategies/src/aggressive.rs

use std::rc::Rc;

use crate::{TradeSink, TradingStrategy};
use core_types::{Price, Result, TraderName};

/// Trades aggressively on every price update.
pub struct Aggressive {
    sink: Rc<dyn TradeSink>,
}

impl Aggressive {
    /// Creates a new `Aggressive` strategy that reports through `sink`.
    pub fn new(sink: Rc<dyn TradeSink>) -> Self {
        Self { sink }
    }
}

impl TradingStrategy for Aggressive {
    fn name(&self) -> &'static str {
        "aggressive"
    }

    fn trade(&self, price: Price, trader: &TraderName) -> Result<()> {
        self.sink
            .emit(&format!("{} is trading aggressively at price: {}", trader, price))
    }
}
