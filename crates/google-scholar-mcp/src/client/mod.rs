//! SerpAPI Google Scholar client.
//!
//! One synchronous-in-effect HTTP GET per operation: no retry, no backoff,
//! no caching. Transport failures and malformed top-level responses surface
//! as [`ClientError`] immediately; callers decide whether to retry.

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::serp::{AuthorResponse, ProfilesResponse, SearchResponse};
use crate::models::{AuthorProfile, CitationResult, Paper, ScholarResult};

/// Client for the SerpAPI Google Scholar engines.
#[derive(Clone)]
pub struct ScholarClient {
    /// Pooled HTTP client.
    client: Client,

    /// SerpAPI key, read-only after construction.
    api_key: String,

    /// Base URL (mock server in tests).
    base_url: String,
}

impl ScholarClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self { client, api_key: config.api_key, base_url: config.base_url })
    }

    /// Search Google Scholar for papers.
    ///
    /// `query` must be non-empty after trimming, but is sent and echoed
    /// back exactly as given. `num_results` must be positive; values above
    /// the provider cap are clamped, not rejected. When both year bounds
    /// are given, `year_from` must not exceed `year_to`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` on failed validation, or an upstream error
    /// on transport or provider failure.
    pub async fn search_scholar(
        &self,
        query: &str,
        year_from: Option<i32>,
        year_to: Option<i32>,
        num_results: u32,
    ) -> ClientResult<ScholarResult> {
        if query.trim().is_empty() {
            return Err(ClientError::invalid_argument("query", "must not be empty"));
        }
        let num = clamp_num_results(num_results)?;
        if let (Some(from), Some(to)) = (year_from, year_to) {
            if from > to {
                return Err(ClientError::invalid_argument(
                    "year_from",
                    format!("must not exceed year_to ({from} > {to})"),
                ));
            }
        }

        tracing::info!(query, num, "searching Google Scholar");

        let mut params = vec![
            ("engine".to_string(), "google_scholar".to_string()),
            ("q".to_string(), query.to_string()),
            ("num".to_string(), num.to_string()),
        ];
        if let Some(from) = year_from {
            params.push(("as_ylo".to_string(), from.to_string()));
        }
        if let Some(to) = year_to {
            params.push(("as_yhi".to_string(), to.to_string()));
        }

        let response: SearchResponse = self.get(&params).await?;
        if let Some(error) = response.error {
            return Err(ClientError::upstream(200, &error));
        }

        let Some(organic) = response.organic_results else {
            return Err(ClientError::upstream(200, "response missing organic_results"));
        };

        let papers: Vec<Paper> = organic
            .into_iter()
            .take(num as usize)
            .map(|r| r.into_paper())
            .collect();

        tracing::info!(count = papers.len(), query, "search complete");

        Ok(ScholarResult {
            query: query.to_string(),
            papers,
            total_results: response.search_information.and_then(|i| i.total_results),
        })
    }

    /// Search for author profiles matching a name. Results are
    /// provider-ranked candidate matches.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an empty name, or an upstream error.
    pub async fn search_author(&self, name: &str) -> ClientResult<Vec<AuthorProfile>> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ClientError::invalid_argument("name", "must not be empty"));
        }

        tracing::info!(name, "searching for author");

        let params = vec![
            ("engine".to_string(), "google_scholar_profiles".to_string()),
            ("mauthors".to_string(), name.to_string()),
        ];

        let response: ProfilesResponse = self.get(&params).await?;
        if let Some(error) = response.error {
            return Err(ClientError::upstream(200, &error));
        }

        let Some(profiles) = response.profiles else {
            return Err(ClientError::upstream(200, "response missing profiles"));
        };

        Ok(profiles.into_iter().map(|p| p.into_profile()).collect())
    }

    /// Get an author's full profile by their Google Scholar id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the provider has no author for the id, or an
    /// upstream error.
    pub async fn get_author_profile(&self, author_id: &str) -> ClientResult<AuthorProfile> {
        let author_id = author_id.trim();
        if author_id.is_empty() {
            return Err(ClientError::invalid_argument("author_id", "must not be empty"));
        }

        tracing::info!(author_id, "fetching author profile");

        let params = vec![
            ("engine".to_string(), "google_scholar_author".to_string()),
            ("author_id".to_string(), author_id.to_string()),
        ];

        let response: AuthorResponse = self.get(&params).await?;
        if let Some(error) = response.error {
            return Err(ClientError::upstream(200, &error));
        }

        let mut profile = response
            .into_profile()
            .ok_or_else(|| ClientError::not_found(format!("author id '{author_id}'")))?;
        profile.author_id = Some(author_id.to_string());
        Ok(profile)
    }

    /// Get papers citing the paper identified by `citation_id`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` on failed validation, or an upstream error.
    pub async fn get_paper_citations(
        &self,
        citation_id: &str,
        num_results: u32,
    ) -> ClientResult<CitationResult> {
        let citation_id = citation_id.trim();
        if citation_id.is_empty() {
            return Err(ClientError::invalid_argument("citation_id", "must not be empty"));
        }
        let num = clamp_num_results(num_results)?;

        tracing::info!(citation_id, num, "fetching citing papers");

        let params = vec![
            ("engine".to_string(), "google_scholar".to_string()),
            ("cites".to_string(), citation_id.to_string()),
            ("num".to_string(), num.to_string()),
        ];

        let response: SearchResponse = self.get(&params).await?;
        if let Some(error) = response.error {
            return Err(ClientError::upstream(200, &error));
        }

        let Some(organic) = response.organic_results else {
            return Err(ClientError::upstream(200, "response missing organic_results"));
        };

        let citing_papers = organic
            .into_iter()
            .take(num as usize)
            .map(|r| r.into_paper())
            .collect();

        Ok(CitationResult { citation_id: citation_id.to_string(), citing_papers })
    }

    /// Issue one GET to the search endpoint and parse the JSON body.
    ///
    /// The body is read as text first so a non-JSON payload can be reported
    /// with its snippet rather than a bare decode error.
    async fn get<T>(&self, params: &[(String, String)]) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, api::SEARCH_PATH);

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::upstream(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|_| ClientError::upstream(status.as_u16(), &body))
    }
}

/// Clamp `num_results` to the provider cap; zero is an error.
fn clamp_num_results(num_results: u32) -> ClientResult<u32> {
    if num_results == 0 {
        return Err(ClientError::invalid_argument("num_results", "must be a positive integer"));
    }
    Ok(num_results.min(api::MAX_NUM_RESULTS))
}

impl std::fmt::Debug for ScholarClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScholarClient").field("base_url", &self.base_url).finish()
    }
}
