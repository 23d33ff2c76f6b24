//! Common regex patterns for Brazilian receipt extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Date patterns, in extraction priority order
    pub static ref DATE_DMY: Regex = Regex::new(
        r"(\d{1,2})[/\-](\d{1,2})[/\-](\d{2,4})"
    ).unwrap();

    pub static ref DATE_LONG_PT: Regex = Regex::new(
        r"(?i)(\d{1,2})\s+de\s+(janeiro|fevereiro|março|abril|maio|junho|julho|agosto|setembro|outubro|novembro|dezembro)\s+de\s+(\d{4})"
    ).unwrap();

    pub static ref DATE_YMD: Regex = Regex::new(
        r"(\d{4})[/\-](\d{1,2})[/\-](\d{1,2})"
    ).unwrap();

    // Monetary amount patterns (Brazilian format: 1.234,56)
    pub static ref AMOUNT_CURRENCY: Regex = Regex::new(
        r"(?i)R\$\s*(\d+(?:\.\d{3})*,\d{2})"
    ).unwrap();

    pub static ref AMOUNT_TOTAL_LABEL: Regex = Regex::new(
        r"(?i)(?:valor\s+total|total|valor\s+a\s+pagar|valor\s+pago)[\s:]*R?\$?\s*(\d+(?:\.\d{3})*,\d{2})"
    ).unwrap();

    pub static ref AMOUNT_GROUPED: Regex = Regex::new(
        r"\d{1,3}(?:\.\d{3})+,\d{2}"
    ).unwrap();

    pub static ref AMOUNT_PLAIN: Regex = Regex::new(
        r"\d+,\d{2}"
    ).unwrap();

    // CNPJ (company tax ID): 12.345.678/0001-90, with OCR-tolerant separators
    pub static ref CNPJ_DIGITS: Regex = Regex::new(
        r"\d{2}[\.\s]?\d{3}[\.\s]?\d{3}[/\s]?\d{4}[\-\s]?\d{2}"
    ).unwrap();

    // Merchant name patterns, in extraction priority order
    pub static ref MERCHANT_AFTER_CNPJ: Regex = Regex::new(
        r"(?i)CNPJ[\s:]*\d{2}[\.\s]?\d{3}[\.\s]?\d{3}[/\s]?\d{4}[\-\s]?\d{2}\s*[\-–]\s*([^\n]+)"
    ).unwrap();

    pub static ref MERCHANT_RAZAO_SOCIAL: Regex = Regex::new(
        r"(?i)raz[ãa]o\s+social[\s:]*([^\n]+)"
    ).unwrap();

    pub static ref MERCHANT_NOME_FANTASIA: Regex = Regex::new(
        r"(?i)nome\s+fantasia[\s:]*([^\n]+)"
    ).unwrap();

    pub static ref MERCHANT_LABEL: Regex = Regex::new(
        r"(?i)estabelecimento[\s:]*([^\n]+)"
    ).unwrap();

    // Itemized description patterns
    pub static ref ITEM_LABELED: Regex = Regex::new(
        r"(?i)(?:descri[çc][ãa]o|item|produto|servi[çc]o)[\s:]*([^\n]+)"
    ).unwrap();

    pub static ref ITEM_QUANTITY: Regex = Regex::new(
        r"(?i)(\d+)\s+x\s+([^\n]+?)\s+R?\$\s*[\d.,]+"
    ).unwrap();
}
