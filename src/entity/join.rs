use crate::SchemaErr;
use std::str::FromStr;
use strum::{Display, EnumIter};

/// Join strategy declared on a field for multi-table queries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "with-json", derive(serde::Serialize))]
pub enum JoinType {
    /// The field takes part in no join
    #[default]
    #[strum(to_string = "NONE")]
    None,
    #[strum(to_string = "INNER")]
    Inner,
    /// `LEFT OUTER`
    #[strum(to_string = "LEFT OUTER")]
    Left,
    #[strum(to_string = "CROSS")]
    Cross,
}

impl JoinType {
    /// The matching sea-query join, `None` for [`JoinType::None`]
    pub fn as_sea_query(&self) -> Option<sea_query::JoinType> {
        match self {
            Self::None => None,
            Self::Inner => Some(sea_query::JoinType::InnerJoin),
            Self::Left => Some(sea_query::JoinType::LeftJoin),
            Self::Cross => Some(sea_query::JoinType::CrossJoin),
        }
    }
}

impl FromStr for JoinType {
    type Err = SchemaErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .map(|c| c.to_ascii_uppercase())
            .collect();
        match normalized.as_str() {
            "NONE" => Ok(Self::None),
            "INNER" => Ok(Self::Inner),
            "LEFT" | "LEFTOUTER" => Ok(Self::Left),
            "CROSS" => Ok(Self::Cross),
            _ => Err(SchemaErr::UnknownJoinType(s.to_owned())),
        }
    }
}

/// The join annotation of a field.
///
/// Not checked against foreign keys; a query builder decides what to do with a
/// join on a field that references nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JoinDescriptor {
    join_type: JoinType,
}

impl JoinDescriptor {
    pub fn new(join_type: JoinType) -> Self {
        Self { join_type }
    }

    pub fn join_type(&self) -> JoinType {
        self.join_type
    }
}
