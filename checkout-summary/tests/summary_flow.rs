use checkout_summary::screen::{RowKind, render_text};
use checkout_summary::{Config, ErrorCode, LoggingDispatcher, SummaryScreen, load_snapshot};
use rust_decimal::Decimal;
use shared::order::SummaryAction;
use std::cell::RefCell;
use std::fs;

const TWO_ITEM_ORDER: &str = r#"{
    "items": [
        {"id": "desk", "name": "Desk", "price": 20.00, "savings": 2.00, "tax": 5, "zipcode": "60601"},
        {"id": "mat", "name": "Mat", "price": 10.00, "savings": 0, "tax": 5, "zipcode": "60601"}
    ],
    "promo": 10
}"#;

fn write_snapshot(json: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("summary.json");
    fs::write(&path, json).unwrap();
    (dir, path)
}

#[test]
fn test_load_and_render_two_item_order() {
    let (_dir, path) = write_snapshot(TWO_ITEM_ORDER);
    let snapshot = load_snapshot(&path, &Config::default()).unwrap();

    let screen = SummaryScreen::new(LoggingDispatcher, "$");
    let view = screen.render(&snapshot);

    assert_eq!(view.breakdown.subtotal, Decimal::new(3000, 2));
    assert_eq!(view.breakdown.discount, Decimal::new(300, 2));
    assert_eq!(view.breakdown.savings, Decimal::new(200, 2));
    assert_eq!(view.breakdown.taxes, Decimal::new(150, 2));
    assert_eq!(view.breakdown.total, Decimal::new(2650, 2));

    let labels: Vec<&str> = view.rows.iter().map(|r| r.label).collect();
    assert_eq!(
        labels,
        vec!["Subtotal", "PROMO APPLIED", "Savings", "Est. taxes & fees", "Est. total"]
    );
    let taxes = view.rows.iter().find(|r| r.kind == RowKind::Taxes).unwrap();
    assert_eq!(taxes.note.as_deref(), Some("(Based on 60601)"));
}

#[test]
fn test_text_output() {
    let (_dir, path) = write_snapshot(r#"{"items":[{"name":"Lamp","price":10.00,"tax":8,"zipcode":"94107"}]}"#);
    let snapshot = load_snapshot(&path, &Config::default()).unwrap();

    let mut screen = SummaryScreen::new(LoggingDispatcher, "$");
    screen.toggle_details();
    let text = render_text(&screen.render(&snapshot), 30);

    let expected = "\
Subtotal                $10.00
Est. taxes & fees        $0.80
(Based on 94107)
------------------------------
Est. total              $10.80

Hide item details  -
  Lamp                  $10.00
  Total savings          $0.00
Apply promo code  +
";
    assert_eq!(text, expected);
}

#[test]
fn test_empty_snapshot_file() {
    let (_dir, path) = write_snapshot("{}");
    let snapshot = load_snapshot(&path, &Config::default()).unwrap();
    let view = SummaryScreen::new(LoggingDispatcher, "$").render(&snapshot);

    let values: Vec<&str> = view.rows.iter().map(|r| r.value.as_str()).collect();
    assert_eq!(values, vec!["$0.00", "$0.00", "$0.00"]);
    assert!(view.rows.iter().all(|r| r.note.is_none()));
}

#[test]
fn test_invalid_snapshot_file() {
    let (_dir, path) = write_snapshot(r#"{"items":[{"price":5,"tax":250}]}"#);
    let err = load_snapshot(&path, &Config::default()).unwrap_err();

    assert_eq!(err.code(), ErrorCode::InvalidTaxRate);
}

#[test]
fn test_promo_submission_flow() {
    let (_dir, path) = write_snapshot(TWO_ITEM_ORDER);
    let snapshot = load_snapshot(&path, &Config::default()).unwrap();

    let dispatched = RefCell::new(Vec::new());
    let mut screen = SummaryScreen::new(
        |action: SummaryAction| dispatched.borrow_mut().push(action),
        "€",
    );
    assert!(screen.toggle_promo());

    let view = screen.render(&snapshot);
    assert_eq!(view.rows[0].value, "€30.00");
    assert_eq!(
        view.promo_entry.and_then(|entry| entry.applied).as_deref(),
        Some("10%")
    );

    screen.submit_promo("WELCOME").unwrap();
    let mut desk = snapshot.items[0].clone();
    desk.name = "Standing desk".to_string();
    screen.update_item(desk.clone());

    assert_eq!(
        dispatched.borrow().as_slice(),
        &[
            SummaryAction::SubmitPromo {
                code: "WELCOME".to_string()
            },
            SummaryAction::UpdateItem { item: desk },
        ]
    );
}
