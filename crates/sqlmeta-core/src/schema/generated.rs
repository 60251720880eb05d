/// How the database populates a column on insert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Generated {
    /// The application supplies the value.
    #[default]
    None,

    /// The database assigns the value when the row is inserted.
    Identity,

    /// The database computes the value on every insert and update.
    Computed,
}

impl Generated {
    /// Returns `true` if the database supplies the value.
    #[must_use]
    pub fn is_generated(&self) -> bool {
        !matches!(self, Self::None)
    }
}
