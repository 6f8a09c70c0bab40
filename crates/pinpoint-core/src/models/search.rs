//! Geocoding search results.

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// A resolved address with its coordinate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    /// Full address label as returned by the geocoder
    pub label: String,
    /// Position of the top-ranked match
    pub coordinate: Coordinate,
}

impl SearchResult {
    /// Creates a search result.
    pub fn new(label: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            label: label.into(),
            coordinate,
        }
    }

    /// Suggested point name: the first comma-delimited segment of the label.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pinpoint_core::models::{Coordinate, SearchResult};
    ///
    /// let result = SearchResult::new(
    ///     "Copacabana, Rio de Janeiro, Brazil",
    ///     Coordinate::new(-22.97, -43.18),
    /// );
    /// assert_eq!(result.suggested_name(), "Copacabana");
    /// ```
    pub fn suggested_name(&self) -> &str {
        self.label.split(',').next().unwrap_or_default().trim()
    }
}
