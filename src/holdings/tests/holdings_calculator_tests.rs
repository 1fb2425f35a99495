// Integration tests for HoldingsCalculator

use crate::errors::{CalculatorError, Error};
use crate::holdings::{HoldingKey, HoldingsCalculator};
use crate::models::DataPolicy;
use crate::transactions::Transaction;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// Helper to build dates without the Option noise
fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// Helper to create acquisition transactions easily
fn buy(scheme: &str, folio: &str, units: Decimal, price: Decimal, date: NaiveDate) -> Transaction {
    Transaction {
        scheme: scheme.to_string(),
        folio: folio.to_string(),
        units,
        amount: units * price,
        price,
        date,
    }
}

// Helper to create disposal transactions easily
fn sell(scheme: &str, folio: &str, units: Decimal, date: NaiveDate) -> Transaction {
    Transaction {
        scheme: scheme.to_string(),
        folio: folio.to_string(),
        units: -units,
        amount: Decimal::ZERO, // redemption proceeds are irrelevant to the ledger
        price: Decimal::ZERO,
        date,
    }
}

fn key(scheme: &str, folio: &str) -> HoldingKey {
    HoldingKey::new(scheme, folio)
}

#[test]
fn fifo_consumes_oldest_lots_first() {
    let calculator = HoldingsCalculator::new(DataPolicy::Lenient);
    let transactions = vec![
        buy("FUND-A", "F1", dec!(10), dec!(10), date(2023, 1, 1)),
        buy("FUND-A", "F1", dec!(20), dec!(11), date(2023, 2, 1)),
        buy("FUND-A", "F1", dec!(30), dec!(12), date(2023, 3, 1)),
        sell("FUND-A", "F1", dec!(25), date(2023, 4, 1)),
    ];

    let ledger = calculator.calculate_holdings(&transactions).unwrap();
    let holding = &ledger[&key("FUND-A", "F1")];

    // First lot fully consumed, second partially: 25 = 10 + 15.
    assert_eq!(holding.lots.len(), 2);
    assert_eq!(holding.lots[0].units, dec!(5));
    assert_eq!(holding.lots[0].price, dec!(11));
    assert_eq!(holding.lots[1].units, dec!(30));
    assert_eq!(holding.lots[1].price, dec!(12));
    assert_eq!(holding.units, dec!(35));
}

#[test]
fn conservation_without_oversell() {
    let calculator = HoldingsCalculator::new(DataPolicy::Lenient);
    let transactions = vec![
        buy("FUND-A", "F1", dec!(100), dec!(10), date(2023, 1, 1)),
        buy("FUND-A", "F1", dec!(50), dec!(12), date(2023, 2, 1)),
        sell("FUND-A", "F1", dec!(60), date(2023, 3, 1)),
        buy("FUND-A", "F1", dec!(25), dec!(13), date(2023, 4, 1)),
        sell("FUND-A", "F1", dec!(15), date(2023, 5, 1)),
    ];

    let ledger = calculator.calculate_holdings(&transactions).unwrap();
    let holding = &ledger[&key("FUND-A", "F1")];

    // acquisitions - disposals = 175 - 75
    assert_eq!(holding.units, dec!(100));
    // Net balance also equals the sum of remaining lot units.
    assert_eq!(holding.lot_units(), holding.units);
}

#[test]
fn reapplying_a_noop_set_leaves_ledger_unchanged() {
    let calculator = HoldingsCalculator::new(DataPolicy::Lenient);
    let transactions = vec![
        buy("FUND-A", "F1", dec!(100), dec!(10), date(2023, 1, 1)),
        sell("FUND-A", "F1", dec!(40), date(2023, 2, 1)),
    ];

    let mut ledger = calculator.calculate_holdings(&transactions).unwrap();
    let before = ledger.clone();

    let noop = vec![buy("FUND-A", "F1", Decimal::ZERO, Decimal::ZERO, date(2023, 3, 1))];
    calculator.apply_transactions(&mut ledger, &noop).unwrap();
    calculator.apply_transactions(&mut ledger, &[]).unwrap();

    assert_eq!(ledger, before);
}

#[test]
fn partial_lot_consumption_scenario() {
    // 100 @ 10 on day 0, 50 @ 12 on day 100, then a 120-unit disposal on
    // day 200: the first lot goes entirely, 20 units come off the second.
    let calculator = HoldingsCalculator::new(DataPolicy::Lenient);
    let transactions = vec![
        buy("FUND-A", "F1", dec!(100), dec!(10), date(2023, 1, 1)),
        buy("FUND-A", "F1", dec!(50), dec!(12), date(2023, 4, 11)),
        sell("FUND-A", "F1", dec!(120), date(2023, 7, 20)),
    ];

    let ledger = calculator.calculate_holdings(&transactions).unwrap();
    let holding = &ledger[&key("FUND-A", "F1")];

    assert_eq!(holding.units, dec!(30));
    assert_eq!(holding.lots.len(), 1);
    assert_eq!(holding.lots[0].units, dec!(30));
    assert_eq!(holding.lots[0].price, dec!(12));
    assert_eq!(holding.lots[0].date, date(2023, 4, 11));
    // Original acquisition amount survives partial relief.
    assert_eq!(holding.lots[0].amount, dec!(600));
}

#[test]
fn lenient_oversell_drops_remainder_but_keeps_net_balance() {
    let calculator = HoldingsCalculator::new(DataPolicy::Lenient);
    let transactions = vec![
        buy("FUND-A", "F1", dec!(50), dec!(10), date(2023, 1, 1)),
        sell("FUND-A", "F1", dec!(80), date(2023, 2, 1)),
    ];

    let ledger = calculator.calculate_holdings(&transactions).unwrap();
    let holding = &ledger[&key("FUND-A", "F1")];

    // Queue is exhausted; net balance still reflects the full disposal.
    assert!(holding.lots.is_empty());
    assert_eq!(holding.units, dec!(-30));
    assert_eq!(holding.lot_units(), Decimal::ZERO);
}

#[test]
fn strict_oversell_is_an_error() {
    let calculator = HoldingsCalculator::new(DataPolicy::Strict);
    let transactions = vec![
        buy("FUND-A", "F1", dec!(50), dec!(10), date(2023, 1, 1)),
        sell("FUND-A", "F1", dec!(80), date(2023, 2, 1)),
    ];

    let err = calculator.calculate_holdings(&transactions).unwrap_err();
    match err {
        Error::Calculator(CalculatorError::Oversold {
            scheme, shortfall, ..
        }) => {
            assert_eq!(scheme, "FUND-A");
            assert_eq!(shortfall, "30");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn strict_oversell_leaves_ledger_untouched() {
    let calculator = HoldingsCalculator::new(DataPolicy::Strict);
    let mut ledger = calculator
        .calculate_holdings(&[buy("FUND-A", "F1", dec!(50), dec!(10), date(2023, 1, 1))])
        .unwrap();
    let before = ledger.clone();

    let err = calculator
        .apply_transactions(
            &mut ledger,
            &[sell("FUND-A", "F1", dec!(80), date(2023, 2, 1))],
        )
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Calculator(CalculatorError::Oversold { .. })
    ));
    // The rejected disposal must not have drained lots or moved the balance.
    assert_eq!(ledger, before);
}

#[test]
fn strict_disposal_on_unknown_holding_adds_no_entry() {
    let calculator = HoldingsCalculator::new(DataPolicy::Strict);
    let mut ledger = calculator
        .calculate_holdings(&[buy("FUND-A", "F1", dec!(50), dec!(10), date(2023, 1, 1))])
        .unwrap();
    let before = ledger.clone();

    let err = calculator
        .apply_transactions(
            &mut ledger,
            &[sell("FUND-B", "F9", dec!(10), date(2023, 2, 1))],
        )
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Calculator(CalculatorError::Oversold { .. })
    ));
    assert_eq!(ledger, before);
}

#[test]
fn sub_threshold_lot_remainder_is_dropped() {
    // Partial relief leaving less than the quantity threshold pops the lot;
    // the net balance keeps the dust.
    let calculator = HoldingsCalculator::new(DataPolicy::Lenient);
    let transactions = vec![
        buy("FUND-A", "F1", dec!(10), dec!(10), date(2023, 1, 1)),
        sell("FUND-A", "F1", dec!(9.999999995), date(2023, 2, 1)),
    ];

    let ledger = calculator.calculate_holdings(&transactions).unwrap();
    let holding = &ledger[&key("FUND-A", "F1")];

    assert!(holding.lots.is_empty());
    assert_eq!(holding.units, dec!(0.000000005));
}

#[test]
fn folios_are_tracked_separately() {
    let calculator = HoldingsCalculator::new(DataPolicy::Lenient);
    let transactions = vec![
        buy("FUND-A", "F1", dec!(100), dec!(10), date(2023, 1, 1)),
        buy("FUND-A", "F2", dec!(40), dec!(11), date(2023, 1, 2)),
        sell("FUND-A", "F1", dec!(30), date(2023, 2, 1)),
    ];

    let ledger = calculator.calculate_holdings(&transactions).unwrap();
    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger[&key("FUND-A", "F1")].units, dec!(70));
    // The sale on F1 must not touch F2's lots.
    assert_eq!(ledger[&key("FUND-A", "F2")].units, dec!(40));
    assert_eq!(ledger[&key("FUND-A", "F2")].lots.len(), 1);
}

#[test]
fn cost_basis_tracks_remaining_units() {
    let calculator = HoldingsCalculator::new(DataPolicy::Lenient);
    let transactions = vec![
        buy("FUND-A", "F1", dec!(100), dec!(10), date(2023, 1, 1)),
        buy("FUND-A", "F1", dec!(50), dec!(12), date(2023, 2, 1)),
        sell("FUND-A", "F1", dec!(120), date(2023, 3, 1)),
    ];

    let ledger = calculator.calculate_holdings(&transactions).unwrap();
    let holding = &ledger[&key("FUND-A", "F1")];

    // 30 units left of the 12-priced lot.
    assert_eq!(holding.cost_basis(), dec!(360));
}
