// In crates/market/src/lib.rs

pub mod stock;
pub mod trader;

pub use stock::Stock;
pub use trader::Trader;

use core_types::{Price, Result};
use std::rc::Rc;

/// Anything that wants to hear about price changes.
pub trait Observer {
    /// Called once per notification pass with the newly set price.
    fn on_update(&self, price: Price) -> Result<()>;
}

/// The publishing side of the price feed.
///
/// Observers are held as shared handles; the subject never owns them
/// exclusively and compares them by identity, not by value.
pub trait Subject {
    /// Appends `observer` to the end of the notification list. Duplicates are kept.
    fn register(&mut self, observer: Rc<dyn Observer>);

    /// Removes the first entry that is the very same `observer`.
    ///
    /// Returns `false` and leaves the list untouched when it is not registered.
    fn remove(&mut self, observer: &Rc<dyn Observer>) -> bool;

    /// Runs one notification pass over the observers as they are right now.
    ///
    /// The first failing observer aborts the pass and its error is returned.
    fn notify_all(&self, price: Price) -> Result<()>;
}
