use std::str::FromStr;

use rolekeeper_core::AppError;
use serde::{Deserialize, Serialize};

/// Kind of scoped resource an object assignment binds a role to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectType {
    /// A single user identifier.
    #[serde(rename = "UID")]
    Uid,
    /// An organisational department.
    #[serde(rename = "DEPARTMENT")]
    Department,
    /// A physical or logical location.
    #[serde(rename = "LOCATION")]
    Location,
    /// A team.
    #[serde(rename = "TEAM")]
    Team,
}

impl ObjectType {
    /// Returns the stable wire value for this object type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uid => "UID",
            Self::Department => "DEPARTMENT",
            Self::Location => "LOCATION",
            Self::Team => "TEAM",
        }
    }

    /// Returns all known object types in display order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[ObjectType] = &[
            ObjectType::Uid,
            ObjectType::Department,
            ObjectType::Location,
            ObjectType::Team,
        ];

        ALL
    }

    /// Parses a transport value into an object type.
    pub fn from_transport(value: &str) -> Result<Self, AppError> {
        Self::from_str(value)
    }
}

impl FromStr for ObjectType {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "UID" => Ok(Self::Uid),
            "DEPARTMENT" => Ok(Self::Department),
            "LOCATION" => Ok(Self::Location),
            "TEAM" => Ok(Self::Team),
            _ => Err(AppError::Validation(format!("unknown object type '{value}'"))),
        }
    }
}

/// Application an access group is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppId {
    /// MF application.
    #[serde(rename = "MF")]
    Mf,
    /// Human resources information system.
    #[serde(rename = "HRIS")]
    Hris,
    /// SNAP application.
    #[serde(rename = "SNAP")]
    Snap,
    /// Finance application.
    #[serde(rename = "FINANCE")]
    Finance,
}

impl AppId {
    /// Returns the stable wire value for this application.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mf => "MF",
            Self::Hris => "HRIS",
            Self::Snap => "SNAP",
            Self::Finance => "FINANCE",
        }
    }

    /// Returns all known applications in display order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[AppId] = &[AppId::Mf, AppId::Hris, AppId::Snap, AppId::Finance];

        ALL
    }

    /// Parses a transport value into an application identifier.
    pub fn from_transport(value: &str) -> Result<Self, AppError> {
        Self::from_str(value)
    }
}

impl FromStr for AppId {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "MF" => Ok(Self::Mf),
            "HRIS" => Ok(Self::Hris),
            "SNAP" => Ok(Self::Snap),
            "FINANCE" => Ok(Self::Finance),
            _ => Err(AppError::Validation(format!("unknown application '{value}'"))),
        }
    }
}

/// Permission verb granted inside an access group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessVerb {
    /// Allows opening a program.
    Open,
    /// Allows creating records.
    Create,
    /// Allows reading records.
    Read,
    /// Allows updating records.
    Update,
    /// Allows deleting records.
    Delete,
    /// Allows approving records.
    Approve,
}

impl AccessVerb {
    /// Returns the stable wire value for this verb.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Approve => "approve",
        }
    }

    /// Returns all known verbs in display order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[AccessVerb] = &[
            AccessVerb::Open,
            AccessVerb::Create,
            AccessVerb::Read,
            AccessVerb::Update,
            AccessVerb::Delete,
            AccessVerb::Approve,
        ];

        ALL
    }

    /// Parses a transport value into a verb.
    pub fn from_transport(value: &str) -> Result<Self, AppError> {
        Self::from_str(value)
    }
}

impl FromStr for AccessVerb {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "open" => Ok(Self::Open),
            "create" => Ok(Self::Create),
            "read" => Ok(Self::Read),
            "update" => Ok(Self::Update),
            "delete" => Ok(Self::Delete),
            "approve" => Ok(Self::Approve),
            _ => Err(AppError::Validation(format!("unknown access verb '{value}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{AccessVerb, AppId, ObjectType};

    #[test]
    fn every_variant_roundtrips_through_its_wire_value() {
        for object_type in ObjectType::all() {
            assert_eq!(
                ObjectType::from_str(object_type.as_str()).ok(),
                Some(*object_type)
            );
        }
        for app_id in AppId::all() {
            assert_eq!(AppId::from_str(app_id.as_str()).ok(), Some(*app_id));
        }
        for verb in AccessVerb::all() {
            assert_eq!(AccessVerb::from_str(verb.as_str()).ok(), Some(*verb));
        }
    }

    #[test]
    fn wire_values_are_case_sensitive() {
        assert!(ObjectType::from_transport("uid").is_err());
        assert!(AppId::from_transport("mf").is_err());
        assert!(AccessVerb::from_transport("READ").is_err());
    }

    #[test]
    fn serde_uses_wire_spelling() {
        let encoded =
            serde_json::to_string(&(ObjectType::Department, AppId::Hris, AccessVerb::Approve));
        assert!(encoded.is_ok());
        assert_eq!(
            encoded.unwrap_or_default(),
            r#"["DEPARTMENT","HRIS","approve"]"#
        );
    }
}
