//! Expense record data models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A structured expense record extracted from one document.
///
/// Every field always carries a value; extraction failures surface as
/// documented sentinels (zero amount, "não identificado" strings), never
/// as errors. See [`crate::expense::ExpenseParser`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Expense date, always formatted DD/MM/YYYY.
    pub date: String,

    /// User the expense belongs to.
    pub user: String,

    /// Merchant (establishment) name, never empty.
    pub merchant: String,

    /// Expense total, two-decimal precision; zero means "not found".
    pub amount: Decimal,

    /// Assigned category.
    pub category: Category,

    /// Short description of the purchased items, never empty.
    pub description: String,

    /// Detected payment method.
    pub payment_method: PaymentMethod,

    /// Leading excerpt from the source text, kept for audit (≤ 500 chars).
    pub source_excerpt: String,
}

/// Closed set of expense categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// Alimentação: restaurants, groceries, delivery.
    #[serde(rename = "Alimentação")]
    Food,
    /// Transporte: fuel, ride-hailing, public transit, tolls.
    #[serde(rename = "Transporte")]
    Transport,
    /// Moradia: rent, utilities, home goods, subscriptions billed at home.
    #[serde(rename = "Moradia")]
    Housing,
    /// Lazer: entertainment, travel, subscriptions.
    #[serde(rename = "Lazer")]
    Leisure,
    /// Saúde: pharmacies, clinics, health insurance.
    #[serde(rename = "Saúde")]
    Health,
    /// Outros: nothing matched.
    #[serde(rename = "Outros")]
    Other,
}

impl Category {
    /// Human-readable Portuguese label, also the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Alimentação",
            Category::Transport => "Transporte",
            Category::Housing => "Moradia",
            Category::Leisure => "Lazer",
            Category::Health => "Saúde",
            Category::Other => "Outros",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::Other
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Payment method detected on the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "PIX")]
    Pix,
    #[serde(rename = "Débito")]
    Debit,
    #[serde(rename = "Crédito")]
    Credit,
    #[serde(rename = "Dinheiro")]
    Cash,
    #[serde(rename = "Boleto")]
    Boleto,
    #[serde(rename = "Transferência")]
    Transfer,
    #[serde(rename = "Não identificado")]
    NotIdentified,
}

impl PaymentMethod {
    /// Human-readable Portuguese label, also the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Pix => "PIX",
            PaymentMethod::Debit => "Débito",
            PaymentMethod::Credit => "Crédito",
            PaymentMethod::Cash => "Dinheiro",
            PaymentMethod::Boleto => "Boleto",
            PaymentMethod::Transfer => "Transferência",
            PaymentMethod::NotIdentified => "Não identificado",
        }
    }
}

impl Default for PaymentMethod {
    fn default() -> Self {
        Self::NotIdentified
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_to_portuguese_label() {
        assert_eq!(
            serde_json::to_string(&Category::Food).unwrap(),
            "\"Alimentação\""
        );
        assert_eq!(
            serde_json::to_string(&Category::Health).unwrap(),
            "\"Saúde\""
        );
        let back: Category = serde_json::from_str("\"Moradia\"").unwrap();
        assert_eq!(back, Category::Housing);
    }

    #[test]
    fn test_payment_method_serializes_to_label() {
        assert_eq!(serde_json::to_string(&PaymentMethod::Pix).unwrap(), "\"PIX\"");
        let back: PaymentMethod = serde_json::from_str("\"Não identificado\"").unwrap();
        assert_eq!(back, PaymentMethod::NotIdentified);
    }

    #[test]
    fn test_display_matches_serialized_form() {
        assert_eq!(Category::Leisure.to_string(), "Lazer");
        assert_eq!(PaymentMethod::Boleto.to_string(), "Boleto");
    }

    #[test]
    fn test_record_round_trip() {
        let record = ExpenseRecord {
            date: "01/03/2024".to_string(),
            user: "Ana".to_string(),
            merchant: "SUPERMERCADO EXTRA".to_string(),
            amount: "152.30".parse().unwrap(),
            category: Category::Food,
            description: "Descrição não disponível".to_string(),
            payment_method: PaymentMethod::Pix,
            source_excerpt: "SUPERMERCADO EXTRA".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: ExpenseRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
