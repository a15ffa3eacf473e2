// In app/src/scenario.rs

use std::rc::Rc;

use anyhow::Result;
use app_config::{ScenarioStep, TraderConfig};
use core_types::{Error, TraderName};
use market::{Observer, Stock, Subject, Trader};
use strategies::{TradeSink, create_strategy};

/// The composition root: one stock plus the traders that watch it.
pub struct Scenario {
    stock: Stock,
    traders: Vec<(TraderName, Rc<dyn Observer>)>,
}

impl Scenario {
    /// Creates every configured trader and registers them with a fresh stock,
    /// in declaration order. All strategies report through `sink`.
    pub fn build(traders: &[TraderConfig], sink: Rc<dyn TradeSink>) -> Result<Self> {
        let mut stock = Stock::new();
        let mut handles: Vec<(TraderName, Rc<dyn Observer>)> = Vec::with_capacity(traders.len());

        for config in traders {
            let strategy = create_strategy(&config.strategy, sink.clone())?;
            let trader = Trader::new(config.name.as_str(), strategy)?;
            let name = trader.name().clone();

            if handles.iter().any(|(existing, _)| *existing == name) {
                return Err(Error::InvalidArgument(format!("duplicate trader name: {}", name)).into());
            }

            tracing::debug!(trader = %name, strategy = trader.strategy_name(), "Trader created.");
            let handle: Rc<dyn Observer> = Rc::new(trader);
            stock.register(handle.clone());
            handles.push((name, handle));
        }

        Ok(Self { stock, traders: handles })
    }

    pub fn stock(&self) -> &Stock {
        &self.stock
    }

    /// Drives every step against the stock, stopping at the first failure.
    pub fn run(&mut self, steps: &[ScenarioStep]) -> Result<()> {
        for step in steps {
            match step {
                ScenarioStep::SetPrice { price } => {
                    tracing::info!(%price, "Setting price.");
                    self.stock.set_price(*price)?;
                }
                ScenarioStep::Register { trader } => {
                    let handle = self.lookup(trader)?;
                    tracing::info!(trader, "Registering trader.");
                    self.stock.register(handle);
                }
                ScenarioStep::Remove { trader } => {
                    let handle = self.lookup(trader)?;
                    let removed = self.stock.remove(&handle);
                    tracing::info!(trader, removed, "Removing trader.");
                }
            }
        }
        Ok(())
    }

    fn lookup(&self, name: &str) -> core_types::Result<Rc<dyn Observer>> {
        self.traders
            .iter()
            .find(|(trader, _)| trader.as_str() == name)
            .map(|(_, handle)| handle.clone())
            .ok_or_else(|| Error::UnknownTrader(name.to_string()))
    }
}
