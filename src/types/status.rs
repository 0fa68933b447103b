//! Definition for the [`Status`] type, implemented by an enum.

use serde::{Deserialize, Serialize};

/// Represents whether a [`super::space::StudySpace`] is open at a given
/// moment. Markers and badges are coloured from this value.
#[derive(Debug, Copy, Clone, PartialEq, Hash, Eq, Serialize, Deserialize)]
pub enum Status {
    Open,
    Closed,
}

impl From<bool> for Status {
    fn from(is_open: bool) -> Self {
        if is_open {
            Status::Open
        } else {
            Status::Closed
        }
    }
}
