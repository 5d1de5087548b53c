use super::*;

#[test]
fn known_statuses_parse() {
    assert_eq!(OrderStatus::parse("Pending"), Some(OrderStatus::Pending));
    assert_eq!(OrderStatus::parse("Approved"), Some(OrderStatus::Approved));
    assert_eq!(OrderStatus::parse("Received"), Some(OrderStatus::Received));
    assert_eq!(OrderStatus::parse("Cancelled"), Some(OrderStatus::Cancelled));
}

#[test]
fn unknown_status_is_none_not_a_failure() {
    assert_eq!(OrderStatus::parse("Archived"), None);
    assert_eq!(OrderStatus::parse(""), None);
}

#[test]
fn every_status_has_a_distinct_badge_class() {
    let classes = [
        OrderStatus::Pending.css_class(),
        OrderStatus::Approved.css_class(),
        OrderStatus::Received.css_class(),
        OrderStatus::Cancelled.css_class(),
    ];
    for (i, a) in classes.iter().enumerate() {
        for b in &classes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
