use std::fmt;

/// Comma delimited, without padding: `a,b,c`
pub struct Comma<L>(pub L);

/// Period delimited: `a.b.c`
pub struct Period<L>(pub L);

/// Items of `L` joined by an arbitrary separator
pub struct Delimited<L>(pub L, pub &'static str);

impl<L> fmt::Display for Delimited<L>
where
    L: IntoIterator + Clone,
    L::Item: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = "";
        for i in self.0.clone() {
            write!(f, "{s}{i}")?;
            s = self.1;
        }
        Ok(())
    }
}

impl<L> fmt::Display for Comma<L>
where
    L: IntoIterator + Clone,
    L::Item: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Delimited(self.0.clone(), ",").fmt(f)
    }
}

impl<L> fmt::Display for Period<L>
where
    L: IntoIterator + Clone,
    L::Item: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Delimited(self.0.clone(), ".").fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_has_no_padding() {
        assert_eq!(Comma(["a", "b", "c"]).to_string(), "a,b,c");
        assert_eq!(Comma(Vec::<String>::new()).to_string(), "");
    }

    #[test]
    fn period_joins_segments() {
        assert_eq!(Period("dbo.Users".split('.')).to_string(), "dbo.Users");
        assert_eq!(Delimited(["x", "y"], " AND ").to_string(), "x AND y");
    }
}
