//! Keyword-based expense categorization.

use crate::models::expense::Category;

/// Ordered category rule table. Both the category order and the keyword
/// order within each category are tie-breaking: the first keyword found
/// as a substring wins. Some brands appear under more than one category
/// on purpose (e.g. streaming services under both Moradia and Lazer);
/// the earlier category takes them.
pub const CATEGORY_RULES: &[(Category, &[&str])] = &[
    (
        Category::Food,
        &[
            "restaurante", "lanchonete", "padaria", "mercado", "supermercado", "açougue",
            "peixaria", "hortifruti", "confeitaria", "pizzaria", "hamburgueria", "sorveteria",
            "cafeteria", "bar", "boteco", "ifood", "uber eats", "rappi", "delivery",
            "mcdonald", "burger king", "subway", "giraffas", "bob's", "habib's",
            "assai", "carrefour", "extra", "pão de açúcar", "sonda", "mambo", "dalben",
        ],
    ),
    (
        Category::Transport,
        &[
            "posto", "combustível", "gasolina", "álcool", "diesel", "etanol",
            "uber", "99", "cabify", "táxi", "transporte", "ônibus", "metrô", " trem",
            "estacionamento", "pedágio", "mecânica", "oficina", "auto center",
            "shell", "ipiranga", "br", "ale", "raizen", "petrobras",
        ],
    ),
    (
        Category::Housing,
        &[
            "aluguel", "condomínio", "iptu", "luz", "água", "gás", "energia",
            "eletricidade", "internet", "telefone", "tv a cabo", "streaming",
            "netflix", "spotify", "amazon prime", "disney", "hbo max",
            "material de construção", "madeireira", "depósito", "leroy merlin",
            "casas bahia", "magazine luiza", "ponto frio", "extra", "leroy",
        ],
    ),
    (
        Category::Leisure,
        &[
            "cinema", "teatro", "show", "evento", "parque", "museu", "zoológico",
            "viagem", "hotel", "pousada", "hostel", "resort", "passagem aérea",
            "academia", "clube", "associação", "assinatura", "jogo", "passeio",
            "ingresso", "netflix", "spotify", "prime video", "disney+", "hbo",
        ],
    ),
    (
        Category::Health,
        &[
            "farmácia", "drogaria", "hospital", "clínica", "consultório", "médico",
            "dentista", "laboratório", "exame", "vacina", "remédio", "medicamento",
            "plano de saúde", "seguro saúde", "unimed", "amil", "bradesco saúde",
            "sulamérica", "hapvida", "notre dame", "intermédica", "raia", "drogasil",
        ],
    ),
];

/// Categorize an expense from its merchant, description, and full text.
///
/// The three inputs are concatenated and lowercased; rules are applied
/// in [`CATEGORY_RULES`] order and the first substring hit wins.
/// Falls back to [`Category::Other`].
pub fn categorize(merchant: &str, description: &str, full_text: &str) -> Category {
    let haystack = format!("{merchant} {description} {full_text}").to_lowercase();

    for (category, keywords) in CATEGORY_RULES {
        for keyword in *keywords {
            if haystack.contains(keyword) {
                return *category;
            }
        }
    }

    Category::Other
}
