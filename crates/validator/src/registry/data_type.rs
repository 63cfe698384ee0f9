//! The closed vocabulary of field data types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Logical type of a custom field.
///
/// The set is closed: every variant has a preset in the
/// [registry](super::registry), and the preset table is matched
/// exhaustively so a new variant cannot be added without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    ShortText,
    LongText,
    Integer,
    Decimal,
    Money,
    Email,
    Url,
    EntityRef,
    Date,
    Datetime,
    Json,
    Boolean,
    Phone,
    Enum,
    MultiEnum,
    SingleSelect,
    MultiSelect,
    RichText,
    Currency,
    Formula,
    Relation,
    Binary,
    File,
}

impl DataType {
    /// Every data type, in declaration order.
    pub const ALL: [Self; 23] = [
        Self::ShortText,
        Self::LongText,
        Self::Integer,
        Self::Decimal,
        Self::Money,
        Self::Email,
        Self::Url,
        Self::EntityRef,
        Self::Date,
        Self::Datetime,
        Self::Json,
        Self::Boolean,
        Self::Phone,
        Self::Enum,
        Self::MultiEnum,
        Self::SingleSelect,
        Self::MultiSelect,
        Self::RichText,
        Self::Currency,
        Self::Formula,
        Self::Relation,
        Self::Binary,
        Self::File,
    ];

    /// The wire tag, e.g. `"short_text"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ShortText => "short_text",
            Self::LongText => "long_text",
            Self::Integer => "integer",
            Self::Decimal => "decimal",
            Self::Money => "money",
            Self::Email => "email",
            Self::Url => "url",
            Self::EntityRef => "entity_ref",
            Self::Date => "date",
            Self::Datetime => "datetime",
            Self::Json => "json",
            Self::Boolean => "boolean",
            Self::Phone => "phone",
            Self::Enum => "enum",
            Self::MultiEnum => "multi_enum",
            Self::SingleSelect => "single_select",
            Self::MultiSelect => "multi_select",
            Self::RichText => "rich_text",
            Self::Currency => "currency",
            Self::Formula => "formula",
            Self::Relation => "relation",
            Self::Binary => "binary",
            Self::File => "file",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|data_type| data_type.as_str() == tag)
            .ok_or_else(|| Error::UnknownDataType {
                tag: tag.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::collections::HashSet;

    #[test]
    fn tags_are_unique() {
        let tags: HashSet<_> = DataType::ALL.iter().map(|dt| dt.as_str()).collect();
        assert_eq!(tags.len(), DataType::ALL.len());
    }

    #[test]
    fn every_tag_parses_back() {
        for data_type in DataType::ALL {
            assert_eq!(data_type.as_str().parse::<DataType>().unwrap(), data_type);
        }
    }

    #[test]
    fn serde_uses_the_tag() {
        for data_type in DataType::ALL {
            let encoded = serde_json::to_value(data_type).unwrap();
            assert_eq!(encoded, serde_json::Value::from(data_type.as_str()));
        }
    }

    #[rstest]
    #[case("geo_point")]
    #[case("Integer")]
    #[case("")]
    fn unknown_tags_are_rejected(#[case] tag: &str) {
        let err = tag.parse::<DataType>().unwrap_err();
        assert!(matches!(err, Error::UnknownDataType { tag: t } if t == tag));
    }

    #[test]
    fn display_matches_tag() {
        assert_eq!(DataType::MultiSelect.to_string(), "multi_select");
    }
}
