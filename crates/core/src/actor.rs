use serde::{Deserialize, Serialize};

use crate::{AppResult, NonEmptyString};

const SYSTEM_SUBJECT: &str = "system";

/// Operator recorded as `created_by` on records it mints.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Actor {
    subject: NonEmptyString,
}

impl Actor {
    /// Creates an actor from a non-blank subject.
    pub fn new(subject: impl Into<String>) -> AppResult<Self> {
        Ok(Self {
            subject: NonEmptyString::new(subject)?,
        })
    }

    /// Returns the built-in actor used by seeded fixtures.
    #[must_use]
    pub fn system() -> Self {
        Self {
            subject: NonEmptyString(SYSTEM_SUBJECT.to_owned()),
        }
    }

    /// Returns the subject written into audit fields.
    #[must_use]
    pub fn subject(&self) -> &str {
        self.subject.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::Actor;

    #[test]
    fn blank_subject_is_rejected() {
        assert!(Actor::new("  ").is_err());
    }

    #[test]
    fn system_actor_subject() {
        assert_eq!(Actor::system().subject(), "system");
    }
}
