//! Module name and column-selection helpers for the Zoho CRM API

/// Normalize a table name to the module spelling the service expects:
/// first letter uppercased, the rest lowercased ("leads" -> "Leads").
///
/// The record operations use the resource name they are given verbatim, so
/// callers holding already-cased module names ("Leads", "Potentials") never
/// need this. It exists for callers working from lowercase table names.
pub fn capitalize_module(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Render the `selectColumns` value for a query: `All` when no columns are
/// named, otherwise the `Resource(Col1,Col2)` selection syntax.
pub fn select_columns(resource: &str, columns: &[&str]) -> String {
    if columns.is_empty() {
        "All".to_string()
    } else {
        format!("{}({})", resource, columns.join(","))
    }
}
