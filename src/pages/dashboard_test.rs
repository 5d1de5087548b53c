use super::*;

fn invoice(status: &str, amount: f64) -> InvoiceSummary {
    InvoiceSummary {
        status: status.to_owned(),
        amount,
    }
}

#[test]
fn outstanding_excludes_paid_invoices() {
    let invoices = [
        invoice("Paid", 500.0),
        invoice("Unpaid", 120.0),
        invoice("Overdue", 80.0),
    ];
    assert!((outstanding_amount(&invoices) - 200.0).abs() < f64::EPSILON);
}

#[test]
fn outstanding_of_no_invoices_is_zero() {
    assert_eq!(outstanding_amount(&[]), 0.0);
}
