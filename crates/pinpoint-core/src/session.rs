//! The add/edit point modal as an explicit state machine.
//!
//! ```text
//!            open_for_create             open_for_edit
//!   Closed ──────────────────▶ Create    Closed ──────────────▶ Edit(id)
//!     ▲                          │  ▲                             │
//!     └─── cancel / complete ────┘  └── any open: draft discarded ┘
//! ```
//!
//! At most one session is open. Opening a new one while another is open
//! discards the previous draft without any remote call.

use log::debug;
use parking_lot::Mutex;

use crate::{
    busy::{BusyFlag, BusyGuard},
    error::{require_name, PinpointError, Result},
    models::{Coordinate, DraftPoint, Point, PointId},
};

/// State of the edit modal.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// No modal shown
    #[default]
    Closed,
    /// Adding a new point at a clicked or searched coordinate
    OpenForCreate { draft: DraftPoint },
    /// Renaming an existing point
    OpenForEdit { point_id: PointId, draft: DraftPoint },
}

impl SessionState {
    pub fn is_open(&self) -> bool {
        !matches!(self, SessionState::Closed)
    }

    /// The draft under edit, if a session is open.
    pub fn draft(&self) -> Option<&DraftPoint> {
        match self {
            SessionState::Closed => None,
            SessionState::OpenForCreate { draft } | SessionState::OpenForEdit { draft, .. } => {
                Some(draft)
            }
        }
    }

    /// ID of the point being edited, in edit mode only.
    pub fn editing(&self) -> Option<PointId> {
        match self {
            SessionState::OpenForEdit { point_id, .. } => Some(*point_id),
            _ => None,
        }
    }

    fn into_draft(self) -> Option<DraftPoint> {
        match self {
            SessionState::Closed => None,
            SessionState::OpenForCreate { draft } | SessionState::OpenForEdit { draft, .. } => {
                Some(draft)
            }
        }
    }
}

/// Remote mutation a validated session asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum CommitRequest {
    Create { name: String, coordinate: Coordinate },
    Rename { point_id: PointId, name: String },
}

/// A validated commit tied to the session that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingCommit {
    generation: u64,
    pub request: CommitRequest,
}

#[derive(Debug, Default)]
struct SessionInner {
    state: SessionState,
    validation_message: Option<String>,
    // Bumped on every open so a late commit cannot close a newer session
    generation: u64,
}

/// Single-slot edit session.
#[derive(Debug, Default)]
pub struct EditSession {
    inner: Mutex<SessionInner>,
    submitting: BusyFlag,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.inner.lock().state.clone()
    }

    pub fn is_open(&self) -> bool {
        self.inner.lock().state.is_open()
    }

    /// Inline message left by the last failed validation.
    pub fn validation_message(&self) -> Option<String> {
        self.inner.lock().validation_message.clone()
    }

    /// Whether a commit of this session is in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting.is_busy()
    }

    /// Open for creating a point. Returns the draft of a session that had to
    /// be force-closed, if any.
    pub fn open_for_create(&self, draft: DraftPoint) -> Option<DraftPoint> {
        self.replace(SessionState::OpenForCreate { draft })
    }

    /// Open for renaming `point`, seeded with its current name and position.
    pub fn open_for_edit(&self, point: &Point) -> Option<DraftPoint> {
        self.replace(SessionState::OpenForEdit {
            point_id: point.id,
            draft: DraftPoint::from(point),
        })
    }

    /// Update the draft's name. The coordinate is not editable.
    ///
    /// # Errors
    ///
    /// Returns `PinpointError::NoOpenSession` when the session is closed.
    pub fn set_name(&self, name: impl Into<String>) -> Result<()> {
        let mut inner = self.inner.lock();
        match &mut inner.state {
            SessionState::Closed => Err(PinpointError::NoOpenSession),
            SessionState::OpenForCreate { draft } | SessionState::OpenForEdit { draft, .. } => {
                draft.name = name.into();
                Ok(())
            }
        }
    }

    /// Close without committing, returning the discarded draft.
    pub fn cancel(&self) -> Option<DraftPoint> {
        let mut inner = self.inner.lock();
        inner.validation_message = None;
        let discarded = std::mem::take(&mut inner.state).into_draft();
        if discarded.is_some() {
            debug!("Edit session cancelled");
        }
        discarded
    }

    /// Validate the draft and describe the remote mutation it needs.
    ///
    /// # Errors
    ///
    /// * `PinpointError::NoOpenSession` - nothing to commit
    /// * `PinpointError::InvalidInput` - blank name; the session stays open and
    ///   the message is kept for inline display
    pub fn prepare_commit(&self) -> Result<PendingCommit> {
        let mut inner = self.inner.lock();
        let generation = inner.generation;
        let request = match &inner.state {
            SessionState::Closed => return Err(PinpointError::NoOpenSession),
            SessionState::OpenForCreate { draft } => {
                require_name("name", &draft.name).map(|name| CommitRequest::Create {
                    name: name.to_string(),
                    coordinate: draft.coordinate,
                })
            }
            SessionState::OpenForEdit { point_id, draft } => require_name("name", &draft.name)
                .map(|name| CommitRequest::Rename {
                    point_id: *point_id,
                    name: name.to_string(),
                }),
        };

        match request {
            Ok(request) => {
                inner.validation_message = None;
                Ok(PendingCommit {
                    generation,
                    request,
                })
            }
            Err(e) => {
                inner.validation_message = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Mark a commit as in flight.
    ///
    /// # Errors
    ///
    /// Returns `PinpointError::Busy` while another commit is outstanding.
    pub fn begin_submit(&self) -> Result<BusyGuard<'_>> {
        self.submitting.acquire("Saving a point")
    }

    /// Close the session after its commit succeeded.
    ///
    /// Returns false (and leaves the session alone) when a newer session was
    /// opened while the commit was in flight.
    pub fn complete(&self, commit: &PendingCommit) -> bool {
        let mut inner = self.inner.lock();
        if inner.generation != commit.generation {
            debug!("Commit finished for a superseded session");
            return false;
        }
        inner.state = SessionState::Closed;
        inner.validation_message = None;
        true
    }

    fn replace(&self, next: SessionState) -> Option<DraftPoint> {
        let mut inner = self.inner.lock();
        inner.generation += 1;
        inner.validation_message = None;
        let previous = std::mem::replace(&mut inner.state, next).into_draft();
        if let Some(draft) = &previous {
            debug!("Discarding open draft '{}'", draft.name);
        }
        previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(id: PointId, name: &str) -> Point {
        Point {
            id,
            name: name.to_string(),
            latitude: 10.0,
            longitude: 20.0,
            map_id: 1,
        }
    }

    #[test]
    fn test_open_for_create_seeds_empty_name() {
        let session = EditSession::new();
        assert_eq!(session.state(), SessionState::Closed);

        let discarded = session.open_for_create(DraftPoint::at(Coordinate::new(5.0, 6.0)));
        assert!(discarded.is_none());
        assert_eq!(
            session.state(),
            SessionState::OpenForCreate {
                draft: DraftPoint::named("", Coordinate::new(5.0, 6.0)),
            }
        );
    }

    #[test]
    fn test_open_for_edit_seeds_point_values() {
        let session = EditSession::new();
        session.open_for_edit(&point(1, "A"));

        let state = session.state();
        assert_eq!(state.editing(), Some(1));
        assert_eq!(
            state.draft(),
            Some(&DraftPoint::named("A", Coordinate::new(10.0, 20.0)))
        );
    }

    #[test]
    fn test_second_open_discards_first_draft() {
        let session = EditSession::new();
        session.open_for_create(DraftPoint::at(Coordinate::new(1.0, 1.0)));
        session.set_name("first").unwrap();

        let discarded = session.open_for_edit(&point(3, "C"));
        assert_eq!(
            discarded,
            Some(DraftPoint::named("first", Coordinate::new(1.0, 1.0)))
        );
        assert_eq!(session.state().editing(), Some(3));
    }

    #[test]
    fn test_set_name_requires_open_session() {
        let session = EditSession::new();
        assert!(matches!(
            session.set_name("x"),
            Err(PinpointError::NoOpenSession)
        ));
    }

    #[test]
    fn test_cancel_discards_draft() {
        let session = EditSession::new();
        session.open_for_create(DraftPoint::at(Coordinate::new(1.0, 2.0)));
        assert!(session.cancel().is_some());
        assert!(!session.is_open());
        assert!(session.cancel().is_none());
    }

    #[test]
    fn test_blank_name_keeps_session_open() {
        let session = EditSession::new();
        session.open_for_edit(&point(1, "A"));
        session.set_name("   ").unwrap();

        let err = session.prepare_commit().unwrap_err();
        assert!(err.is_validation());
        assert!(session.validation_message().is_some());
        assert_eq!(session.state().editing(), Some(1));

        session.set_name("Renamed").unwrap();
        let commit = session.prepare_commit().unwrap();
        assert_eq!(
            commit.request,
            CommitRequest::Rename {
                point_id: 1,
                name: "Renamed".to_string(),
            }
        );
        assert!(session.validation_message().is_none());
    }

    #[test]
    fn test_commit_request_trims_name() {
        let session = EditSession::new();
        session.open_for_create(DraftPoint::at(Coordinate::new(5.0, 6.0)));
        session.set_name("  B ").unwrap();

        let commit = session.prepare_commit().unwrap();
        assert_eq!(
            commit.request,
            CommitRequest::Create {
                name: "B".to_string(),
                coordinate: Coordinate::new(5.0, 6.0),
            }
        );
    }

    #[test]
    fn test_complete_ignores_superseded_session() {
        let session = EditSession::new();
        session.open_for_create(DraftPoint::named("old", Coordinate::new(0.0, 0.0)));
        let commit = session.prepare_commit().unwrap();

        session.open_for_create(DraftPoint::at(Coordinate::new(9.0, 9.0)));
        assert!(!session.complete(&commit));
        assert!(session.is_open());
    }

    #[test]
    fn test_complete_closes_matching_session() {
        let session = EditSession::new();
        session.open_for_create(DraftPoint::named("B", Coordinate::new(0.0, 0.0)));
        let commit = session.prepare_commit().unwrap();
        assert!(session.complete(&commit));
        assert_eq!(session.state(), SessionState::Closed);
    }

    #[test]
    fn test_prepare_commit_on_closed_session() {
        let session = EditSession::new();
        assert!(matches!(
            session.prepare_commit(),
            Err(PinpointError::NoOpenSession)
        ));
    }
}
