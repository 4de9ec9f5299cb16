//! Declarative header alias table for the CSV credential source.
//!
//! Spreadsheet-maintained credential files arrive with whatever column
//! names the last editor typed. Instead of ad hoc string checks scattered
//! through the reader, every accepted synonym is folded to its canonical
//! name through this one table, consulted once per header at load time.

/// Accepted header synonyms, folded after trimming and lowercasing.
///
/// Canonical names are `email`, `senha`, `link`, and `nome`; `nome` has no
/// synonyms and passes through unchanged.
const HEADER_ALIASES: &[(&str, &str)] = &[
    ("e-mail", "email"),
    ("login", "email"),
    ("usuário", "email"),
    ("usuario", "email"),
    ("pass", "senha"),
    ("password", "senha"),
    ("key", "senha"),
    ("url", "link"),
    ("dashboard", "link"),
];

/// Fold a raw header into its canonical name.
///
/// Trims and lowercases first, then applies the alias table. Headers with
/// no alias come back lowercased and trimmed, unchanged otherwise.
pub fn canonical_header(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    HEADER_ALIASES
        .iter()
        .find(|(alias, _)| *alias == lowered)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or(lowered)
}
