//! The two custodial parties.

use serde::{Deserialize, Serialize};

/// One of the two custodial adults.
///
/// Configuration refers to the parties by role: `user` is the person the
/// engine is answering for and `coparent` is the other parent.
///
/// # Example
///
/// ```
/// use custody_engine::models::Party;
///
/// assert_eq!(Party::User.other(), Party::Coparent);
/// assert_eq!(Party::Coparent.other(), Party::User);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Party {
    /// The engine's user.
    User,
    /// The other parent.
    Coparent,
}

impl Party {
    /// Returns the opposite party.
    pub fn other(self) -> Party {
        match self {
            Party::User => Party::Coparent,
            Party::Coparent => Party::User,
        }
    }
}

impl std::fmt::Display for Party {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Party::User => write!(f, "user"),
            Party::Coparent => write!(f, "coparent"),
        }
    }
}
