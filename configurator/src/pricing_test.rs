use super::*;

#[test]
fn default_duration_is_month() {
    assert_eq!(RentalDuration::default(), RentalDuration::Month);
}

#[test]
fn serde_uses_lowercase_names() {
    let json = serde_json::to_string(&RentalDuration::Week).unwrap();
    assert_eq!(json, "\"week\"");
    let back: RentalDuration = serde_json::from_str("\"day\"").unwrap();
    assert_eq!(back, RentalDuration::Day);
}

#[test]
fn labels_and_suffixes() {
    assert_eq!(RentalDuration::Day.label(), "Day");
    assert_eq!(RentalDuration::Month.suffix(), "/ month");
    assert_eq!(RentalDuration::Week.to_string(), "week");
}

#[test]
fn all_is_shortest_first() {
    assert_eq!(RentalDuration::ALL, [RentalDuration::Day, RentalDuration::Week, RentalDuration::Month]);
}

#[test]
fn format_price_prefixes_dollar_sign() {
    assert_eq!(format_price(0), "$0");
    assert_eq!(format_price(245), "$245");
}
