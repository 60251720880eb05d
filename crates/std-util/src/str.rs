use heck::{ToSnakeCase, ToUpperCamelCase};

pub fn snake_case(src: &str) -> String {
    src.to_snake_case()
}

pub fn upper_camel_case(src: &str) -> String {
    src.to_upper_camel_case()
}

/// Plural form of the last word in `src`, e.g. `line_item` -> `line_items`.
pub fn pluralize(src: &str) -> String {
    match src.rsplit_once('_') {
        Some((head, last)) => format!("{head}_{}", pluralizer::pluralize(last, 2, false)),
        None => pluralizer::pluralize(src, 2, false),
    }
}
