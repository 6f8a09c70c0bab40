//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::{MapRecord, Point};

/// Newtype wrapper for displaying a map's point list.
///
/// An empty list renders a hint on how to add the first point.
pub struct Points(pub Vec<Point>);

impl Points {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No points yet.")?;
            return writeln!(f, "Click the map to add the first point!");
        }
        for point in &self.0 {
            write!(f, "{point}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying the map list.
pub struct Maps(pub Vec<MapRecord>);

impl fmt::Display for Maps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No maps found.");
        }
        for (index, map) in self.0.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{map}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_points_hint() {
        let output = Points(vec![]).to_string();
        assert!(output.contains("No points yet."));
        assert!(output.contains("add the first point"));
    }

    #[test]
    fn test_points_one_line_each() {
        let points = Points(vec![
            Point {
                id: 1,
                name: "A".to_string(),
                latitude: 10.0,
                longitude: 20.0,
                map_id: 1,
            },
            Point {
                id: 2,
                name: "B".to_string(),
                latitude: 5.0,
                longitude: 6.0,
                map_id: 1,
            },
        ]);
        assert_eq!(points.len(), 2);
        assert_eq!(points.to_string().lines().count(), 2);
    }

    #[test]
    fn test_empty_maps() {
        assert_eq!(Maps(vec![]).to_string(), "No maps found.\n");
    }
}
