use rand::Rng;
use serde::Deserialize;
use thiserror::Error;

/// Default base URL of the repository search endpoint.
pub const SEARCH_URL: &str = "https://api.github.com/search/repositories";

/// Highest page the sampler will request. Together with `PER_PAGE` this
/// bounds sampling to the first 1000 most-starred matches, which keeps
/// responses fast and stays clear of GitHub's deep-pagination limits.
pub const MAX_PAGE: u32 = 10;
pub const PER_PAGE: u32 = 100;

/// One repository as returned by the search API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Repo {
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub open_issues_count: u64,
    pub html_url: String,
    pub language: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub total_count: u64,
    pub items: Vec<Repo>,
}

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("Failed to fetch repositories")]
    Http(#[from] reqwest::Error),
    #[error("Failed to fetch repositories")]
    Status(reqwest::StatusCode),
    #[error("No repositories found for the selected criteria")]
    Empty,
}

/// Builds the search query term: `language:<filter>` or empty for an
/// unfiltered search. An empty `q` relies on the API's default behavior.
pub fn build_query(filter: &str) -> String {
    if filter.is_empty() {
        String::new()
    } else {
        format!("language:{filter}")
    }
}

/// Fetches one pseudo-random page of the most-starred repositories matching
/// `filter` and picks one entry from it uniformly at random.
///
/// One outbound request per call; no retries, no caching. The random source
/// is injected so callers (and tests) control page and index selection.
pub async fn sample_repository<R: Rng>(
    client: &reqwest::Client,
    base_url: &str,
    filter: &str,
    max_page: u32,
    per_page: u32,
    rng: &mut R,
) -> Result<Repo, SampleError> {
    let page = rng.gen_range(1..=max_page);
    let response = client
        .get(base_url)
        .query(&[
            ("q", build_query(filter).as_str()),
            ("sort", "stars"),
            ("order", "desc"),
            ("per_page", &per_page.to_string()),
            ("page", &page.to_string()),
        ])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(SampleError::Status(response.status()));
    }

    let data: SearchResponse = response.json().await?;
    let mut items = data.items;
    if items.is_empty() {
        return Err(SampleError::Empty);
    }

    let index = rng.gen_range(0..items.len());
    Ok(items.swap_remove(index))
}
