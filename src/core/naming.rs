use regex::Regex;
use std::sync::LazyLock;

// 任何不能出現在變數名稱中的字元
static INVALID_VAR_NAME_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9A-Za-z_]").unwrap());

/// Converts `name` into a valid identifier.
///
/// Every character outside `[0-9A-Za-z_]` is replaced by `_`, and a leading
/// digit gets a `_` put in front of it.
pub fn escape_var_name(name: &str) -> String {
    let escaped = INVALID_VAR_NAME_CHAR.replace_all(name, "_");
    if escaped.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{}", escaped)
    } else {
        escaped.into_owned()
    }
}
