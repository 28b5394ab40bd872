use std::sync::OnceLock;

use regex::Regex;

fn placeholder_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid"))
}

/// Undo the escaping older SDK versions applied to logged payloads
///
/// Substitutions run in this order:
/// 1. `\"` becomes `"`
/// 2. `${NAME}` becomes `$NAME`
/// 3. `"{` becomes `{`
/// 4. `}"` becomes `}`
/// 5. `\\/` becomes `/`
///
/// These are plain text replacements with no knowledge of JSON structure.
///
/// # Examples
///
/// ```
/// use logcat_body_pretty::unescape;
///
/// assert_eq!(unescape(r#"{\"data\":\"{\"a\":1}\"}"#), r#"{"data":{"a":1}}"#);
/// ```
pub fn unescape(input: &str) -> String {
    let text = input.replace(r#"\""#, "\"");
    let text = placeholder_regex().replace_all(&text, "$$$1").into_owned();
    text.replace("\"{", "{").replace("}\"", "}").replace(r"\\/", "/")
}
