use std::time::Duration;

use async_trait::async_trait;
use places::{Place, PlaceType};
use reqwest::Client;
use tracing::debug;
use validator::Validate;

use crate::orchestrator::SearchProvider;
use crate::types::{SearchError, SearchRequest};

/// Configuration for the HTTP search provider.
#[derive(Debug, Clone)]
pub struct HttpSearchConfig {
    /// Base URL of the search backend
    pub base_url: String,

    /// Request timeout (default: 30 seconds)
    pub timeout: Duration,
}

impl Default for HttpSearchConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Search provider backed by the planner's HTTP search endpoint.
pub struct HttpSearchProvider {
    client: Client,
    config: HttpSearchConfig,
}

impl HttpSearchProvider {
    /// Creates a new HTTP search provider.
    pub fn new(config: Option<HttpSearchConfig>) -> Result<Self, SearchError> {
        let config = config.unwrap_or_default();

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SearchError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    fn place_type_param(place_type: PlaceType) -> &'static str {
        match place_type {
            PlaceType::Campground => "campground",
            PlaceType::Trailhead => "trailhead",
        }
    }

    fn build_query(request: &SearchRequest) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("text", request.text.clone()),
            (
                "place_type",
                Self::place_type_param(request.place_type).to_string(),
            ),
        ];

        if let Some(bounds) = &request.bounds {
            params.push(("ne_lat", bounds.ne.latitude.to_string()));
            params.push(("ne_lng", bounds.ne.longitude.to_string()));
            params.push(("sw_lat", bounds.sw.latitude.to_string()));
            params.push(("sw_lng", bounds.sw.longitude.to_string()));
        }

        params
    }
}

#[async_trait]
impl SearchProvider for HttpSearchProvider {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<Place>, SearchError> {
        request
            .validate()
            .map_err(|e| SearchError::Validation(e.to_string()))?;

        let url = format!("{}/api/places/search", self.config.base_url);
        let params = Self::build_query(request);

        debug!(text = %request.text, ?request.place_type, "Dispatching search request");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| SearchError::Network(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            match status.as_u16() {
                429 => return Err(SearchError::RateLimited),
                401 | 403 => return Err(SearchError::AuthenticationFailed),
                404 => return Err(SearchError::NotFound),
                _ => return Err(SearchError::Api(format!("HTTP {}", status))),
            }
        }

        let places: Vec<Place> = response
            .json()
            .await
            .map_err(|e| SearchError::DataFormat(format!("Failed to parse places: {}", e)))?;

        debug!(count = places.len(), "Search response decoded");

        Ok(places)
    }
}
