//! Placeholder substitution
//!
//! Templates use `$NAME` and `${NAME}` placeholders. Every substitution pass
//! binds exactly one name: matching placeholders are replaced, other
//! placeholders are left untouched, and `$$` collapses to `$`.
//!
//! List values are expanded sequentially. For all items but the last, the
//! placeholder is replaced by `item<delim>$NAME`, so a template that mentions
//! the placeholder several times receives the whole list at every occurrence.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$(?:(\$)|([_A-Za-z][_A-Za-z0-9]*)|\{([_A-Za-z][_A-Za-z0-9]*)\})")
        .expect("placeholder pattern is valid")
});

/// Replace `$name` / `${name}` with `value`
pub fn substitute(template: &str, name: &str, value: &str) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            if caps.get(1).is_some() {
                return "$".to_string();
            }
            match caps.get(2).or_else(|| caps.get(3)) {
                Some(ident) if ident.as_str() == name => value.to_string(),
                _ => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Like [`substitute`], but computes the value only if the placeholder occurs
pub fn substitute_with<E>(
    template: &str,
    name: &str,
    value: impl FnOnce() -> Result<String, E>,
) -> Result<String, E> {
    if contains_placeholder(template, name) {
        Ok(substitute(template, name, &value()?))
    } else {
        Ok(substitute(template, name, ""))
    }
}

/// Sequential list expansion; an empty list substitutes the empty string
pub fn substitute_list<S: AsRef<str>>(template: &str, name: &str, items: &[S], delim: &str) -> String {
    let Some((last, init)) = items.split_last() else {
        return substitute(template, name, "");
    };

    let mut text = template.to_string();
    for item in init {
        let chained = format!("{}{}${}", item.as_ref(), delim, name);
        text = substitute(&text, name, &chained);
    }
    substitute(&text, name, last.as_ref())
}

/// True if `$name` or `${name}` appears in `text`
pub fn contains_placeholder(text: &str, name: &str) -> bool {
    text.contains(&format!("${}", name)) || text.contains(&format!("${{{}}}", name))
}

/// Prefix every line of `text` with `spaces` spaces
pub fn indent(text: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    text.split('\n')
        .map(|line| format!("{}{}", pad, line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Upper-case the first letter of every run of letters, lower-case the rest
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_forms() {
        assert_eq!(substitute("f($ARG1, ${ARG1}x)", "ARG1", "a"), "f(a, ax)");
        assert_eq!(substitute("f($ARG1, $ARG2)", "ARG1", "a"), "f(a, $ARG2)");
        assert_eq!(substitute("$ARG10", "ARG1", "a"), "$ARG10");
        assert_eq!(substitute("cost: $$5 $ 1", "ARG1", "a"), "cost: $5 $ 1");
        assert_eq!(substitute("${1}", "ARG1", "a"), "${1}");
    }

    #[test]
    fn test_substituted_value_is_not_rescanned() {
        assert_eq!(substitute("$A", "A", "$A$$"), "$A$$");
    }

    #[test]
    fn test_substitute_with_is_lazy() {
        let mut called = false;
        let out: Result<String, ()> = substitute_with("no placeholder", "X", || {
            called = true;
            Ok("value".to_string())
        });
        assert_eq!(out.unwrap(), "no placeholder");
        assert!(!called);

        let out: Result<String, &str> = substitute_with("x=$X", "X", || Err("boom"));
        assert_eq!(out.unwrap_err(), "boom");
    }

    #[test]
    fn test_substitute_list() {
        assert_eq!(substitute_list("[$T]", "T", &["a", "b", "c"], ", "), "[a, b, c]");
        assert_eq!(substitute_list("[$T]", "T", &Vec::<String>::new(), ", "), "[]");
        assert_eq!(substitute_list("$T|$T", "T", &["a", "b"], ","), "a,b|a,b");
    }

    #[test]
    fn test_indent_and_title_case() {
        assert_eq!(indent("a\n\nb", 2), "  a\n  \n  b");
        assert_eq!(title_case("minimal_arith"), "Minimal_Arith");
        assert_eq!(title_case("LIBIEEE1788tests"), "Libieee1788Tests");
    }
}
