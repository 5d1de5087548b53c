use super::*;

#[test]
fn small_amounts_have_two_decimals() {
    assert_eq!(money(0.0), "0.00");
    assert_eq!(money(7.5), "7.50");
}

#[test]
fn thousands_are_grouped() {
    assert_eq!(money(1234.5), "1,234.50");
    assert_eq!(money(1_234_567.89), "1,234,567.89");
}

#[test]
fn rounding_is_to_the_nearest_cent() {
    assert_eq!(money(2.006), "2.01");
    assert_eq!(money(2.004), "2.00");
}

#[test]
fn negative_amounts_keep_the_sign() {
    assert_eq!(money(-1234.5), "-1,234.50");
}
