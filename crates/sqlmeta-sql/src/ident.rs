use super::Flavor;
use std::fmt;

/// An identifier rendered with a flavor's quoting rules. A closing quote
/// inside the identifier is escaped by doubling it.
#[derive(Debug, Clone)]
pub struct Ident<S = String> {
    flavor: Flavor,
    name: S,
}

impl<S: AsRef<str>> Ident<S> {
    pub fn new(flavor: Flavor, name: S) -> Self {
        Self { flavor, name }
    }
}

impl<S: AsRef<str>> fmt::Display for Ident<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        let (open, close) = self.flavor.quotes();

        f.write_char(open)?;
        for c in self.name.as_ref().chars() {
            if c == close {
                f.write_char(close)?;
            }
            f.write_char(c)?;
        }
        f.write_char(close)
    }
}
