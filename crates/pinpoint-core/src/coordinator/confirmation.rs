//! Delete confirmations as values.
//!
//! A deletion is a two-step exchange: the coordinator hands out a
//! [`ConfirmationRequest`], the front end shows its prompt and answers with a
//! [`Decision`]. Only a confirmed request reaches the store.

use crate::models::{MapId, PointId};

/// The deletion waiting for an answer.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingDeletion {
    /// One point. The name is known when the point is in the current list.
    Point {
        point_id: PointId,
        name: Option<String>,
    },
    /// Every point of a map. The map record itself is kept.
    AllPoints { map_id: MapId, count: usize },
}

/// A blocking yes/no decision point. Only the coordinator creates these.
#[derive(Debug, Clone, PartialEq)]
#[must_use = "a deletion only happens once the request is resolved"]
pub struct ConfirmationRequest {
    action: PendingDeletion,
}

impl ConfirmationRequest {
    pub(crate) fn new(action: PendingDeletion) -> Self {
        Self { action }
    }

    pub fn action(&self) -> &PendingDeletion {
        &self.action
    }

    pub(crate) fn into_action(self) -> PendingDeletion {
        self.action
    }

    /// Question to put to the user.
    pub fn prompt(&self) -> String {
        match &self.action {
            PendingDeletion::Point {
                name: Some(name), ..
            } => format!("Are you sure you want to delete the point '{name}'?"),
            PendingDeletion::Point { point_id, .. } => {
                format!("Are you sure you want to delete point {point_id}?")
            }
            PendingDeletion::AllPoints { count, .. } => format!(
                "Are you sure you want to delete ALL {count} points of this map? The map itself is kept."
            ),
        }
    }
}

/// The user's answer to a [`ConfirmationRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirmed,
    Declined,
}

impl From<bool> for Decision {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Decision::Confirmed
        } else {
            Decision::Declined
        }
    }
}

/// What resolving a confirmation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionOutcome {
    /// The store performed the deletion and reloaded
    Deleted,
    /// The user declined; nothing was sent
    Declined,
}
