//! Purchased item / description extraction for Brazilian receipts.

use super::patterns::{ITEM_LABELED, ITEM_QUANTITY};
use super::{ExtractionMatch, FieldExtractor};

/// Sentinel returned when no item text could be determined.
pub const DESCRIPTION_UNAVAILABLE: &str = "Descrição não disponível";

const MAX_DESCRIPTION_LEN: usize = 200;
const MAX_ITEMS: usize = 3;

/// Item text extractor.
///
/// Two pattern families: keyword-labeled lines
/// (`descrição/item/produto/serviço: ...`) and itemized
/// `<qty> x <item> R$<price>` lines.
pub struct ItemExtractor;

impl ItemExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ItemExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for ItemExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for caps in ITEM_LABELED.captures_iter(text) {
            if let Some(item) = plausible_item(&caps[1]) {
                let full_match = caps.get(0).unwrap();
                results.push(ExtractionMatch::new(
                    item,
                    "labeled",
                    full_match.start(),
                    full_match.as_str(),
                ));
            }
        }

        for caps in ITEM_QUANTITY.captures_iter(text) {
            if let Some(item) = plausible_item(&caps[2]) {
                let full_match = caps.get(0).unwrap();
                results.push(ExtractionMatch::new(
                    item,
                    "quantity_line",
                    full_match.start(),
                    full_match.as_str(),
                ));
            }
        }

        results
    }
}

fn plausible_item(raw: &str) -> Option<String> {
    let item = raw.trim();
    let len = item.chars().count();
    if len > 2 && len < 100 {
        Some(item.to_string())
    } else {
        None
    }
}

/// Extract a short description: up to the first three collected items,
/// joined with ", " and truncated to 200 characters.
pub fn extract_description(text: &str) -> String {
    extract_description_with(text, MAX_ITEMS)
}

/// As [`extract_description`], with a caller-chosen item cap.
pub fn extract_description_with(text: &str, max_items: usize) -> String {
    let items = ItemExtractor::new().extract_all(text);
    if items.is_empty() {
        return DESCRIPTION_UNAVAILABLE.to_string();
    }

    let joined = items
        .iter()
        .take(max_items)
        .map(|m| m.value.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    joined.chars().take(MAX_DESCRIPTION_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labeled_items() {
        assert_eq!(
            extract_description("Descrição: Troca de óleo e filtro"),
            "Troca de óleo e filtro"
        );
        assert_eq!(
            extract_description("PRODUTO: Arroz tipo 1 5kg"),
            "Arroz tipo 1 5kg"
        );
        assert_eq!(
            extract_description("Serviço: consulta de rotina"),
            "consulta de rotina"
        );
    }

    #[test]
    fn test_quantity_lines() {
        assert_eq!(
            extract_description("2 x Pão francês R$ 1,50"),
            "Pão francês"
        );
    }

    #[test]
    fn test_items_joined_in_order_found() {
        let text = "Item: Caderno\n3 x Caneta azul R$ 2,00\n1 x Borracha R$ 1,00";
        assert_eq!(extract_description(text), "Caderno, Caneta azul, Borracha");
    }

    #[test]
    fn test_at_most_three_items() {
        let text = "Item: Um maior\nItem: Dois maior\nItem: Tres maior\nItem: Quatro maior";
        assert_eq!(extract_description(text), "Um maior, Dois maior, Tres maior");
    }

    #[test]
    fn test_too_short_items_skipped() {
        assert_eq!(extract_description("Item: ab"), DESCRIPTION_UNAVAILABLE);
    }

    #[test]
    fn test_sentinel_without_matches() {
        assert_eq!(extract_description(""), DESCRIPTION_UNAVAILABLE);
        assert_eq!(
            extract_description("CUPOM FISCAL\nTOTAL: R$ 10,00"),
            DESCRIPTION_UNAVAILABLE
        );
    }

    #[test]
    fn test_truncated_to_200_chars() {
        // Three near-limit items join past 200 chars
        let a = "a".repeat(90);
        let b = "b".repeat(90);
        let c = "c".repeat(90);
        let text = format!("Item: {a}\nItem: {b}\nItem: {c}");
        assert_eq!(extract_description(&text).chars().count(), 200);
    }

    #[test]
    fn test_overlong_single_item_rejected() {
        let text = format!("Descrição: {}", "x".repeat(120));
        assert_eq!(extract_description(&text), DESCRIPTION_UNAVAILABLE);
    }
}
