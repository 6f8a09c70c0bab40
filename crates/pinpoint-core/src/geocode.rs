//! Address search against a Nominatim-compatible geocoding service.

use std::future::Future;

use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    error::{require_name, PinpointError, RemoteResultExt, Result},
    models::{Coordinate, SearchResult},
};

/// Resolves free-text addresses to coordinates.
pub trait Geocoder: Send + Sync {
    /// Resolve `query` to its highest-ranked match.
    ///
    /// Fails with `NoMatch` when the service finds nothing.
    fn search(&self, query: &str) -> impl Future<Output = Result<SearchResult>> + Send;
}

/// HTTP geocoding client. Stateless: every search is a fresh request.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
    base_url: String,
}

impl GeocodeClient {
    /// Creates a client for the service rooted at `base_url`
    /// (e.g. `https://nominatim.openstreetmap.org`).
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }
}

impl Geocoder for GeocodeClient {
    async fn search(&self, query: &str) -> Result<SearchResult> {
        let query = require_name("query", query)?;
        debug!("Geocoding '{query}'");

        let matches: Vec<GeocodeMatch> = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .send()
            .await
            .remote_context("geocoding request failed")?
            .error_for_status()
            .remote_context("geocoding service rejected the request")?
            .json()
            .await
            .remote_context("geocoding service returned an unreadable body")?;

        first_match(query, matches)
    }
}

/// One ranked match as returned by the service.
#[derive(Debug, Deserialize)]
struct GeocodeMatch {
    lat: Degrees,
    lon: Degrees,
    display_name: String,
}

/// Nominatim sends degrees as strings; other services send numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Degrees {
    Number(f64),
    Text(String),
}

impl Degrees {
    fn value(&self) -> Option<f64> {
        match self {
            Degrees::Number(value) => Some(*value),
            Degrees::Text(text) => text.trim().parse().ok(),
        }
    }
}

/// Keep only the top-ranked match.
fn first_match(query: &str, matches: Vec<GeocodeMatch>) -> Result<SearchResult> {
    let Some(top) = matches.into_iter().next() else {
        return Err(PinpointError::NoMatch {
            query: query.to_string(),
        });
    };
    match (top.lat.value(), top.lon.value()) {
        (Some(latitude), Some(longitude)) => Ok(SearchResult::new(
            top.display_name,
            Coordinate::new(latitude, longitude),
        )),
        _ => Err(PinpointError::remote(format!(
            "geocoding service returned malformed coordinates for '{query}'"
        ))
        .without_source()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Vec<GeocodeMatch> {
        serde_json::from_str(json).expect("valid geocoder payload")
    }

    #[test]
    fn test_first_match_with_string_degrees() {
        let matches = parse(
            r#"[
                {"lat": "-22.97", "lon": "-43.18", "display_name": "Copacabana, Rio de Janeiro, Brasil"},
                {"lat": "-16.16", "lon": "-69.08", "display_name": "Copacabana, La Paz, Bolivia"}
            ]"#,
        );
        let result = first_match("Copacabana", matches).unwrap();

        assert_eq!(result.coordinate, Coordinate::new(-22.97, -43.18));
        assert_eq!(result.label, "Copacabana, Rio de Janeiro, Brasil");
    }

    #[test]
    fn test_first_match_with_numeric_degrees() {
        let matches = parse(r#"[{"lat": 38.72, "lon": -9.14, "display_name": "Lisboa"}]"#);
        let result = first_match("Lisboa", matches).unwrap();
        assert_eq!(result.coordinate, Coordinate::new(38.72, -9.14));
    }

    #[test]
    fn test_empty_result_is_no_match() {
        let err = first_match("Atlantis", parse("[]")).unwrap_err();
        assert!(matches!(err, PinpointError::NoMatch { ref query } if query == "Atlantis"));
    }

    #[test]
    fn test_malformed_degrees_are_remote_errors() {
        let matches = parse(r#"[{"lat": "north", "lon": "1.0", "display_name": "Nowhere"}]"#);
        let err = first_match("Nowhere", matches).unwrap_err();
        assert!(err.is_remote());
    }

    #[tokio::test]
    async fn test_blank_query_is_rejected_locally() {
        // An unroutable base URL proves no request is attempted.
        let client = GeocodeClient::new(Client::new(), "http://127.0.0.1:9");
        let err = client.search("   ").await.unwrap_err();
        assert!(err.is_validation());
    }
}
