// In crates/market/src/stock.rs

use std::rc::Rc;

use crate::{Observer, Subject};
use core_types::{Price, Result};

/// A single stock whose price changes are broadcast to registered observers.
#[derive(Default)]
pub struct Stock {
    price: Option<Price>,
    observers: Vec<Rc<dyn Observer>>,
}

impl Stock {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last price set, or `None` before the first update.
    pub fn price(&self) -> Option<Price> {
        self.price
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Stores `price` and notifies every registered observer, in registration order.
    pub fn set_price(&mut self, price: Price) -> Result<()> {
        tracing::debug!(%price, observers = self.observers.len(), "Price updated.");
        self.price = Some(price);
        self.notify_all(price)
    }
}

impl Subject for Stock {
    fn register(&mut self, observer: Rc<dyn Observer>) {
        self.observers.push(observer);
        tracing::debug!(observers = self.observers.len(), "Observer registered.");
    }

    fn remove(&mut self, observer: &Rc<dyn Observer>) -> bool {
        match self.observers.iter().position(|o| Rc::ptr_eq(o, observer)) {
            Some(index) => {
                self.observers.remove(index);
                tracing::debug!(index, observers = self.observers.len(), "Observer removed.");
                true
            }
            None => {
                tracing::debug!("Observer not registered, nothing to remove.");
                false
            }
        }
    }

    fn notify_all(&self, price: Price) -> Result<()> {
        for (index, observer) in self.observers.iter().enumerate() {
            tracing::trace!(index, %price, "Notifying observer.");
            observer.on_update(price)?;
        }
        Ok(())
    }
}
