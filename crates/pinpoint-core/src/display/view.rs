//! Full map screen rendering.

use std::fmt;

use super::collections::Points;
use crate::{coordinator::ViewSnapshot, session::SessionState};

/// Renders a [`ViewSnapshot`] as one markdown screen: header, error banner,
/// viewport, search marker, point list, and the edit modal when open.
pub struct MapScreen<'a>(pub &'a ViewSnapshot);

impl fmt::Display for MapScreen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        writeln!(f, "# Map {} | Points: {}", view.map_id, view.points.len())?;
        writeln!(f)?;

        if let Some(error) = &view.load_error {
            writeln!(f, "> **Could not refresh points:** {error}")?;
            writeln!(f)?;
        }

        writeln!(f, "{}", view.viewport)?;
        if let Some(result) = &view.search_result {
            writeln!(f)?;
            writeln!(f, "## Search result")?;
            writeln!(f)?;
            write!(f, "{result}")?;
        }

        writeln!(f)?;
        writeln!(f, "## Points")?;
        writeln!(f)?;
        write!(f, "{}", Points(view.points.clone()))?;

        let (title, action) = match &view.session {
            SessionState::Closed => return Ok(()),
            SessionState::OpenForCreate { .. } => ("New point", "Save"),
            SessionState::OpenForEdit { .. } => ("Edit point", "Update"),
        };
        if let Some(draft) = view.session.draft() {
            writeln!(f)?;
            writeln!(f, "## {title}")?;
            writeln!(f)?;
            writeln!(f, "- Name: {}", draft.name)?;
            writeln!(f, "- {}", draft.coordinate)?;
            if let Some(message) = &view.validation_message {
                writeln!(f, "- **{message}**")?;
            }
            writeln!(f)?;
            writeln!(f, "[{action}] [Cancel]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{Coordinate, DraftPoint, Point, SearchResult},
        viewport::Viewport,
    };

    fn snapshot(session: SessionState) -> ViewSnapshot {
        ViewSnapshot {
            map_id: 7,
            points: vec![Point {
                id: 1,
                name: "A".to_string(),
                latitude: 10.0,
                longitude: 20.0,
                map_id: 7,
            }],
            load_error: None,
            session,
            validation_message: None,
            viewport: Viewport::default(),
            search_result: None,
            can_delete_all: true,
        }
    }

    #[test]
    fn test_closed_session_has_no_modal() {
        let output = MapScreen(&snapshot(SessionState::Closed)).to_string();
        assert!(output.starts_with("# Map 7 | Points: 1"));
        assert!(output.contains("- **A**"));
        assert!(!output.contains("[Cancel]"));
    }

    #[test]
    fn test_edit_modal_with_validation_message() {
        let mut view = snapshot(SessionState::OpenForEdit {
            point_id: 1,
            draft: DraftPoint::named("", Coordinate::new(10.0, 20.0)),
        });
        view.validation_message = Some("Invalid input for field 'name': must not be empty".into());

        let output = MapScreen(&view).to_string();
        assert!(output.contains("## Edit point"));
        assert!(output.contains("[Update] [Cancel]"));
        assert!(output.contains("must not be empty"));
    }

    #[test]
    fn test_load_error_and_search_result() {
        let mut view = snapshot(SessionState::Closed);
        view.load_error = Some("GET /maps/7/points returned 503".into());
        view.search_result = Some(SearchResult::new(
            "Copacabana, Rio de Janeiro",
            Coordinate::new(-22.97, -43.18),
        ));

        let output = MapScreen(&view).to_string();
        assert!(output.contains("Could not refresh points"));
        assert!(output.contains("## Search result"));
        assert!(output.contains("**Copacabana, Rio de Janeiro**"));
    }
}
