//! Merchant (establishment) name extraction for Brazilian receipts.

use super::patterns::{
    CNPJ_DIGITS, MERCHANT_AFTER_CNPJ, MERCHANT_LABEL, MERCHANT_NOME_FANTASIA,
    MERCHANT_RAZAO_SOCIAL,
};

/// Sentinel returned when no merchant name could be determined.
pub const MERCHANT_NOT_IDENTIFIED: &str = "Estabelecimento não identificado";

const MAX_MERCHANT_LEN: usize = 100;
const HEADER_LINES: usize = 5;

/// Extract the merchant name from text.
///
/// Labeled patterns are tried in fixed priority order: the name printed
/// after a CNPJ block, then `razão social`, `nome fantasia`, and
/// `estabelecimento` labels. When none match, the receipt header is
/// scanned: the first of the leading non-empty lines that still has a
/// plausible name after CNPJ digit groups are stripped wins.
pub fn extract_merchant(text: &str, lines: &[&str]) -> String {
    let labeled = [
        &*MERCHANT_AFTER_CNPJ,
        &*MERCHANT_RAZAO_SOCIAL,
        &*MERCHANT_NOME_FANTASIA,
        &*MERCHANT_LABEL,
    ];

    for pattern in labeled {
        if let Some(caps) = pattern.captures(text) {
            let name: String = caps[1].trim().chars().take(MAX_MERCHANT_LEN).collect();
            if !name.is_empty() {
                return name;
            }
        }
    }

    // Header fallback: first plausible line among the top of the receipt
    for line in lines.iter().take(HEADER_LINES) {
        let cleaned = CNPJ_DIGITS.replace_all(line, "");
        let cleaned = cleaned.trim();
        let len = cleaned.chars().count();
        if len > 3 && len < MAX_MERCHANT_LEN && !cleaned.chars().all(|c| c.is_ascii_digit()) {
            return cleaned.to_string();
        }
    }

    MERCHANT_NOT_IDENTIFIED.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines_of(text: &str) -> Vec<&str> {
        text.lines().map(str::trim).filter(|l| !l.is_empty()).collect()
    }

    #[test]
    fn test_after_cnpj_block() {
        let text = "CNPJ: 12.345.678/0001-90 - PADARIA CENTRAL LTDA";
        assert_eq!(
            extract_merchant(text, &lines_of(text)),
            "PADARIA CENTRAL LTDA"
        );
    }

    #[test]
    fn test_razao_social_label() {
        let text = "Cupom fiscal\nRazão Social: COMERCIO DE ALIMENTOS SILVA LTDA\n";
        assert_eq!(
            extract_merchant(text, &lines_of(text)),
            "COMERCIO DE ALIMENTOS SILVA LTDA"
        );
    }

    #[test]
    fn test_nome_fantasia_label() {
        let text = "nome fantasia: Mercadinho do Zé";
        assert_eq!(extract_merchant(text, &lines_of(text)), "Mercadinho do Zé");
    }

    #[test]
    fn test_header_fallback() {
        let text = "SUPERMERCADO EXTRA\nCNPJ 12.345.678/0001-90\nAv. Paulista 1000";
        assert_eq!(extract_merchant(text, &lines_of(text)), "SUPERMERCADO EXTRA");
    }

    #[test]
    fn test_header_fallback_strips_cnpj_digits() {
        // CNPJ embedded in the first line must not leak into the name
        let text = "12.345.678/0001-90 FARMACIA SAO JOAO\nrua x";
        assert_eq!(extract_merchant(text, &lines_of(text)), "FARMACIA SAO JOAO");
    }

    #[test]
    fn test_numeric_only_lines_skipped() {
        let text = "123456\n0987654321\nLANCHONETE BOA VISTA";
        assert_eq!(extract_merchant(text, &lines_of(text)), "LANCHONETE BOA VISTA");
    }

    #[test]
    fn test_short_lines_skipped() {
        let text = "ab\nxyz\nRESTAURANTE BOM PRATO";
        assert_eq!(extract_merchant(text, &lines_of(text)), "RESTAURANTE BOM PRATO");
    }

    #[test]
    fn test_sentinel_when_nothing_matches() {
        assert_eq!(extract_merchant("", &[]), MERCHANT_NOT_IDENTIFIED);
        let text = "12\n34";
        assert_eq!(extract_merchant(text, &lines_of(text)), MERCHANT_NOT_IDENTIFIED);
    }

    #[test]
    fn test_labeled_match_truncated() {
        let long_name = "A".repeat(150);
        let text = format!("Estabelecimento: {long_name}");
        let result = extract_merchant(&text, &lines_of(&text));
        assert_eq!(result.chars().count(), 100);
    }
}
