//! Derivation of parameter names from declared field names.

/// Convert a declared field name into its camelCase parameter name.
///
/// `_` marks a word boundary and is dropped. The first emitted character is
/// always lower-cased and leaves a pending boundary in place, so the next
/// character is upper-cased. Every other character is lower-cased.
/// `MAX_NUMBER_OF_RETRIES` becomes `maxNumberOfRetries`, `Timeout` becomes
/// `timeout` and `_HIDDEN_FLAG` becomes `hIddenFlag`.
pub(crate) fn param_name(field_name: &str) -> String {
    let mut out = String::with_capacity(field_name.len());
    let mut boundary = false;
    for c in field_name.chars() {
        if c == '_' {
            boundary = true;
        } else if boundary && !out.is_empty() {
            out.extend(c.to_uppercase());
            boundary = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}
