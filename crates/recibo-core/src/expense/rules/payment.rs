//! Payment method detection for Brazilian receipts.

use crate::models::expense::PaymentMethod;

/// Ordered payment method rule table. The first method with any
/// matching substring wins, regardless of where it appears in the text;
/// accent-stripped OCR variants are listed alongside the proper forms.
pub const PAYMENT_RULES: &[(PaymentMethod, &[&str])] = &[
    (PaymentMethod::Pix, &["pix"]),
    (PaymentMethod::Debit, &["débito", "debito"]),
    (PaymentMethod::Credit, &["crédito", "credito"]),
    (PaymentMethod::Cash, &["dinheiro", "espécie"]),
    (PaymentMethod::Boleto, &["boleto"]),
    (PaymentMethod::Transfer, &["transferência", "ted", "doc"]),
];

/// Detect the payment method mentioned in the text.
pub fn extract_payment_method(text: &str) -> PaymentMethod {
    let haystack = text.to_lowercase();

    for (method, keywords) in PAYMENT_RULES {
        for keyword in *keywords {
            if haystack.contains(keyword) {
                return *method;
            }
        }
    }

    PaymentMethod::NotIdentified
}
