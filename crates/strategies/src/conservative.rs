// In crates/strategies/src/conservative.rs

use std::rc::Rc;

use crate::{TradeSink, TradingStrategy};
use core_types::{Price, Result, TraderName};

/// Trades conservatively on every price update.
pub struct Conservative {
    sink: Rc<dyn TradeSink>,
}

impl Conservative {
    pub fn new(sink: Rc<dyn TradeSink>) -> Self {
        Self { sink }
    }
}

impl TradingStrategy for Conservative {
    fn name(&self) -> &'static str {
        "conservative"
    }

    fn trade(&self, price: Price, trader: &TraderName) -> Result<()> {
        self.sink
            .emit(&format!("{} is trading conservatively at price: {}", trader, price))
    }
}
