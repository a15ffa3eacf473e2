use std::rc::Rc;

use core_types::Price;
use market::{Observer, Stock, Subject, Trader};
use rust_decimal_macros::dec;
use strategies::{Aggressive, Conservative, MemorySink, TradeSink, TradingStrategy};

#[test]
fn stock_trading_scenario_matches_expected_output() {
    let sink = Rc::new(MemorySink::new());
    let mut stock = Stock::new();

    let john: Rc<dyn Observer> =
        Rc::new(Trader::new("John", Rc::new(Aggressive::new(sink.clone()))).unwrap());
    let alice: Rc<dyn Observer> =
        Rc::new(Trader::new("Alice", Rc::new(Conservative::new(sink.clone()))).unwrap());

    stock.register(john.clone());
    stock.register(alice.clone());

    stock.set_price(Price(dec!(100.0))).unwrap();
    stock.set_price(Price(dec!(105.0))).unwrap();
    stock.set_price(Price(dec!(95.0))).unwrap();

    assert_eq!(
        sink.take(),
        vec![
            "John is trading aggressively at price: 100.0",
            "Alice is trading conservatively at price: 100.0",
            "John is trading aggressively at price: 105.0",
            "Alice is trading conservatively at price: 105.0",
            "John is trading aggressively at price: 95.0",
            "Alice is trading conservatively at price: 95.0",
        ]
    );

    assert!(stock.remove(&alice));
    stock.set_price(Price(dec!(110.0))).unwrap();

    assert_eq!(sink.take(), vec!["John is trading aggressively at price: 110.0"]);
}

#[test]
fn removing_twice_is_a_no_op() {
    let sink = Rc::new(MemorySink::new());
    let mut stock = Stock::new();

    let john: Rc<dyn Observer> =
        Rc::new(Trader::new("John", Rc::new(Aggressive::new(sink.clone()))).unwrap());
    let alice: Rc<dyn Observer> =
        Rc::new(Trader::new("Alice", Rc::new(Conservative::new(sink.clone()))).unwrap());
    stock.register(john);
    stock.register(alice.clone());

    assert!(stock.remove(&alice));
    assert!(!stock.remove(&alice));
    assert_eq!(stock.observer_count(), 1);

    stock.set_price(Price(dec!(110.0))).unwrap();
    assert_eq!(sink.take(), vec!["John is trading aggressively at price: 110.0"]);
}

#[test]
fn one_strategy_shared_by_many_traders() {
    let sink = Rc::new(MemorySink::new());
    let shared: Rc<dyn TradingStrategy> = Rc::new(Conservative::new(sink.clone()));
    let mut stock = Stock::new();

    for name in ["Ann", "Bob", "Cid"] {
        stock.register(Rc::new(Trader::new(name, shared.clone()).unwrap()));
    }
    stock.set_price(Price(dec!(7))).unwrap();

    assert_eq!(
        sink.take(),
        vec![
            "Ann is trading conservatively at price: 7.0",
            "Bob is trading conservatively at price: 7.0",
            "Cid is trading conservatively at price: 7.0",
        ]
    );
}

#[test]
fn new_strategies_plug_in_without_touching_the_feed() {
    struct Contrarian {
        sink: Rc<dyn TradeSink>,
    }

    impl TradingStrategy for Contrarian {
        fn name(&self) -> &'static str {
            "contrarian"
        }

        fn trade(&self, price: Price, trader: &core_types::TraderName) -> core_types::Result<()> {
            self.sink.emit(&format!("{} is fading the move at price: {}", trader, price))
        }
    }

    let sink = Rc::new(MemorySink::new());
    let mut stock = Stock::new();
    let strategy = Rc::new(Contrarian { sink: sink.clone() });
    stock.register(Rc::new(Trader::new("Zed", strategy).unwrap()));

    stock.set_price(Price(dec!(3.25))).unwrap();

    assert_eq!(sink.take(), vec!["Zed is fading the move at price: 3.25"]);
}
