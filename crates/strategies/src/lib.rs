// In crates/strategies/src/lib.rs

use core_types::{Price, Result, TraderName};

pub mod aggressive;
pub mod conservative;
pub mod factory;
pub mod sink;

pub use aggressive::Aggressive;
pub use conservative::Conservative;
pub use factory::create_strategy;
pub use sink::{MemorySink, StdoutSink, TradeSink};

/// The universal interface for a trading strategy.
///
/// A strategy decides how a trader reacts to a new price. Strategies hold no
/// mutable state, so a single instance can be shared by any number of traders.
pub trait TradingStrategy {
    /// The name of the strategy, as used in configuration files.
    fn name(&self) -> &'static str;

    /// Reacts to `price` on behalf of `trader`.
    ///
    /// Any failure is returned to the caller untouched; it aborts the
    /// notification pass that triggered it.
    fn trade(&self, price: Price, trader: &TraderName) -> Result<()>;
}
