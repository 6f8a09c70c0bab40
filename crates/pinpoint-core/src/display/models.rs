//! Display implementations for domain models.
//!
//! Coordinates are shown with four decimals, about 11 m of latitude.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    models::{Coordinate, MapRecord, Point, SearchResult},
    viewport::Viewport,
};

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lat: {:.4}, Lng: {:.4}", self.latitude, self.longitude)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **{}** ({}) `#{}`", self.name, self.coordinate(), self.id)
    }
}

impl fmt::Display for MapRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.point_count == 1 { "point" } else { "points" };
        writeln!(f, "### {}. {}", self.id, self.name)?;
        writeln!(f)?;
        writeln!(f, "- {} {noun}", self.point_count)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "**{}**", self.label)?;
        writeln!(f, "{}", self.coordinate)
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Center {} at zoom {}", self.center, self.zoom)
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;

    #[test]
    fn test_point_display() {
        let point = Point {
            id: 2,
            name: "B".to_string(),
            latitude: 5.0,
            longitude: 6.123456,
            map_id: 1,
        };
        assert_eq!(point.to_string(), "- **B** (Lat: 5.0000, Lng: 6.1235) `#2`\n");
    }

    #[test]
    fn test_map_display_pluralizes() {
        let mut map = MapRecord {
            id: 3,
            name: "Viagem".to_string(),
            created_at: Timestamp::from_second(1640995200).unwrap(),
            point_count: 1,
        };
        let output = map.to_string();
        assert!(output.contains("### 3. Viagem"));
        assert!(output.contains("- 1 point\n"));

        map.point_count = 0;
        assert!(map.to_string().contains("- 0 points"));
    }

    #[test]
    fn test_viewport_display() {
        let viewport = Viewport::default();
        assert_eq!(
            viewport.to_string(),
            "Center Lat: -15.7880, Lng: -47.8790 at zoom 4"
        );
    }
}
