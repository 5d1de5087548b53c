use super::*;

#[test]
fn count_by_preserves_first_seen_order() {
    let counts = count_by(["Pending", "Received", "Pending", "Cancelled", "Pending"]);
    assert_eq!(
        counts,
        vec![("Pending", 3), ("Received", 1), ("Cancelled", 1)]
    );
}

#[test]
fn count_by_of_nothing_is_empty() {
    assert!(count_by([]).is_empty());
}

#[test]
fn sum_where_filters_before_summing() {
    let invoices = [("Paid", 100.0), ("Unpaid", 250.5), ("Unpaid", 49.5)];
    let outstanding = sum_where(&invoices, |i| i.0 == "Unpaid", |i| i.1);
    assert!((outstanding - 300.0).abs() < f64::EPSILON);
}

#[test]
fn sum_where_over_no_matches_is_zero() {
    let invoices = [("Paid", 100.0)];
    let outstanding = sum_where(&invoices, |i| i.0 == "Unpaid", |i| i.1);
    assert_eq!(outstanding, 0.0);
}
