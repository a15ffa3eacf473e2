// In crates/strategies/src/factory.rs

use std::rc::Rc;

use crate::{Aggressive, Conservative, TradeSink, TradingStrategy};
use core_types::{Error, Result};

/// Builds the strategy registered under `name`, reporting through `sink`.
pub fn create_strategy(name: &str, sink: Rc<dyn TradeSink>) -> Result<Rc<dyn TradingStrategy>> {
    let strategy: Rc<dyn TradingStrategy> = match name {
        "aggressive" => Rc::new(Aggressive::new(sink)),
        "conservative" => Rc::new(Conservative::new(sink)),
        unknown => return Err(Error::UnknownStrategy(unknown.to_string())),
    };
    Ok(strategy)
}
