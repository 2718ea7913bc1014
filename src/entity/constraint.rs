use crate::SchemaErr;
use itertools::Itertools;
use std::collections::BTreeSet;
use std::str::FromStr;
use strum::{Display, EnumIter};

/// Data constraints attachable to a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
#[cfg_attr(feature = "with-json", derive(serde::Serialize))]
pub enum ConstraintKind {
    /// `NOT NULL`
    #[strum(to_string = "NOT NULL")]
    NotNull,
    /// `PRIMARY KEY`
    #[strum(to_string = "PRIMARY KEY")]
    PrimaryKey,
    /// `FOREIGN KEY`; the column must also name a target table and column
    #[strum(to_string = "FOREIGN KEY")]
    ForeignKey,
    /// `AUTOINCREMENT`
    #[strum(to_string = "AUTOINCREMENT")]
    AutoIncrement,
    /// `UNIQUE`
    #[strum(to_string = "UNIQUE")]
    Unique,
}

impl FromStr for ConstraintKind {
    type Err = SchemaErr;

    /// Accepts both the short annotation spellings (`PK`, `FK`, `AI`, `NOTNULL`)
    /// and SQL spellings, ignoring ASCII case and `_` / `-` separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .map(|c| c.to_ascii_uppercase())
            .collect();
        match normalized.as_str() {
            "NOTNULL" => Ok(Self::NotNull),
            "PK" | "PRIMARYKEY" => Ok(Self::PrimaryKey),
            "FK" | "FOREIGNKEY" => Ok(Self::ForeignKey),
            "AI" | "AUTOINCREMENT" => Ok(Self::AutoIncrement),
            "UNIQUE" => Ok(Self::Unique),
            _ => Err(SchemaErr::UnknownConstraintKind(s.to_owned())),
        }
    }
}

/// Returns true only if `kind` is a member of `set`
pub fn belongs_to(kind: ConstraintKind, set: &ConstraintSet) -> bool {
    set.contains(kind)
}

/// An unordered set of [`ConstraintKind`].
///
/// Iterates in declaration order of the enum, whatever order the kinds were added in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "with-json", derive(serde::Serialize))]
pub struct ConstraintSet(BTreeSet<ConstraintKind>);

impl ConstraintSet {
    /// An empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a kind, returns false if it was already present
    pub fn insert(&mut self, kind: ConstraintKind) -> bool {
        self.0.insert(kind)
    }

    pub fn contains(&self, kind: ConstraintKind) -> bool {
        self.0.contains(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = ConstraintKind> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<ConstraintKind> for ConstraintSet {
    fn from_iter<I: IntoIterator<Item = ConstraintKind>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[ConstraintKind; N]> for ConstraintSet {
    fn from(kinds: [ConstraintKind; N]) -> Self {
        kinds.into_iter().collect()
    }
}

impl Extend<ConstraintKind> for ConstraintSet {
    fn extend<I: IntoIterator<Item = ConstraintKind>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl std::fmt::Display for ConstraintSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.iter().join(" "))
    }
}
