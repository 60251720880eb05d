use std_util::str;

use std::fmt;

/// A model name split into lowercase words, so it can be rendered in the
/// casing each consumer expects. The declared spelling is kept for display.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name {
    pub parts: Vec<String>,
    src: String,
}

impl Name {
    pub fn new(src: &str) -> Self {
        let parts = str::snake_case(src)
            .split('_')
            .filter(|part| !part.is_empty())
            .map(String::from)
            .collect();

        Self {
            parts,
            src: src.to_string(),
        }
    }

    pub fn snake_case(&self) -> String {
        self.parts.join("_")
    }

    pub fn upper_camel_case(&self) -> String {
        self.parts.iter().map(|part| str::upper_camel_case(part)).collect()
    }

    /// Snake case with the last word pluralized: `OrderLine` -> `order_lines`.
    pub fn plural_snake_case(&self) -> String {
        str::pluralize(&self.snake_case())
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words() {
        let name = Name::new("OrderLine");
        assert_eq!(name.parts, ["order", "line"]);
        assert_eq!(name.snake_case(), "order_line");
        assert_eq!(name.to_string(), "OrderLine");

        assert_eq!(Name::new("order_line").parts, name.parts);
        assert_eq!(Name::new("_order__line").parts, ["order", "line"]);
    }

    #[test]
    fn display_keeps_declared_spelling() {
        let name = Name::new("HTTPRequest");
        assert_eq!(name.to_string(), "HTTPRequest");
        assert_eq!(name.snake_case(), "http_request");
        assert_eq!(name.upper_camel_case(), "HttpRequest");

        assert_eq!(Name::new("order_line").to_string(), "order_line");
    }

    #[test]
    fn plural() {
        assert_eq!(Name::new("User").plural_snake_case(), "users");
        assert_eq!(Name::new("Category").plural_snake_case(), "categories");
        assert_eq!(Name::new("OrderLine").plural_snake_case(), "order_lines");
    }
}
