use super::*;

#[test]
fn plain_fields_pass_through() {
    let out = build(
        &["id", "name"],
        &[vec!["1".to_owned(), "Bolts".to_owned()]],
    );
    assert_eq!(out, "id,name\n1,Bolts\n");
}

#[test]
fn fields_with_commas_are_quoted() {
    let out = build(&["name"], &[vec!["Nuts, assorted".to_owned()]]);
    assert_eq!(out, "name\n\"Nuts, assorted\"\n");
}

#[test]
fn quotes_are_doubled() {
    let out = build(&["name"], &[vec![r#"2" washer"#.to_owned()]]);
    assert_eq!(out, "name\n\"2\"\" washer\"\n");
}

#[test]
fn newlines_are_quoted() {
    let out = build(&["note"], &[vec!["line one\nline two".to_owned()]]);
    assert_eq!(out, "note\n\"line one\nline two\"\n");
}

#[test]
fn short_rows_are_padded_to_header_width() {
    let out = build(&["a", "b", "c"], &[vec!["1".to_owned()]]);
    assert_eq!(out, "a,b,c\n1,,\n");
}

#[test]
fn empty_row_set_yields_header_only() {
    let out = build(&["a", "b"], &[]);
    assert_eq!(out, "a,b\n");
}
