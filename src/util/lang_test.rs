use super::*;

#[test]
fn default_is_vietnamese() {
    assert_eq!(Lang::default(), Lang::Vi);
}

#[test]
fn parse_round_trips_both_languages() {
    for lang in [Lang::Vi, Lang::En] {
        assert_eq!(Lang::parse(lang.as_str()), Some(lang));
    }
}

#[test]
fn parse_rejects_unknown_codes() {
    assert_eq!(Lang::parse("fr"), None);
    assert_eq!(Lang::parse(""), None);
}

#[test]
fn toggle_alternates() {
    assert_eq!(toggle(Lang::Vi), Lang::En);
    assert_eq!(toggle(Lang::En), Lang::Vi);
}
