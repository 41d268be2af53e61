use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;

/// Shown when the server answers without movies and without a usable message
pub const NO_RECOMMENDATIONS: &str = "No recommendations found.";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecommendedMovie {
    pub name: String,
    #[serde(default)]
    pub poster: String, // May be empty, the poster chain handles that
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    matches: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RecommendResponse {
    #[serde(default)]
    recommended_movies: Option<Vec<RecommendedMovie>>,
    #[serde(default)]
    error: Option<String>,
}

/// What a recommend call amounted to once the body is interpreted
#[derive(Debug, Clone, PartialEq)]
pub enum RecommendOutcome {
    /// At least one movie came back
    Recommended(Vec<RecommendedMovie>),
    /// The server answered but had nothing to offer, with its message
    Refused(String),
}

#[derive(Clone)]
pub struct MovieClient {
    base_url: String,
    client: Client,
}

impl MovieClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch title suggestions for a partial query
    pub async fn search(&self, query: &str) -> Result<Vec<String>> {
        let url = format!(
            "{}/search?q={}",
            self.base_url,
            urlencoding::encode(query)
        );
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to reach search endpoint")?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow::anyhow!("search returned {}", status));
        }

        let data: SearchResponse = response
            .json()
            .await
            .context("Failed to parse search response")?;

        Ok(data.matches)
    }

    /// Ask for recommendations seeded by a movie title.
    ///
    /// The body is read regardless of status: the server reports an unknown
    /// movie as a 404 whose body still carries the error message.
    pub async fn recommend(&self, title: &str) -> Result<RecommendOutcome> {
        let url = format!("{}/recommend", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&title)
            .send()
            .await
            .context("Failed to reach recommend endpoint")?;

        let data: RecommendResponse = response
            .json()
            .await
            .context("Failed to parse recommend response")?;

        Ok(interpret_recommend_body(data))
    }
}

fn interpret_recommend_body(data: RecommendResponse) -> RecommendOutcome {
    match (data.recommended_movies, data.error) {
        (Some(movies), _) if !movies.is_empty() => RecommendOutcome::Recommended(movies),
        (_, Some(message)) if !message.trim().is_empty() => RecommendOutcome::Refused(message),
        _ => RecommendOutcome::Refused(NO_RECOMMENDATIONS.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(name: &str, poster: &str) -> RecommendedMovie {
        RecommendedMovie {
            name: name.to_string(),
            poster: poster.to_string(),
        }
    }

    #[test]
    fn test_interpret_movies_win_over_error_field() {
        let data = RecommendResponse {
            recommended_movies: Some(vec![movie("Alien", "https://img.example/a.jpg")]),
            error: Some("ignored".to_string()),
        };
        assert_eq!(
            interpret_recommend_body(data),
            RecommendOutcome::Recommended(vec![movie("Alien", "https://img.example/a.jpg")])
        );
    }

    #[test]
    fn test_interpret_error_message_becomes_refusal() {
        let data = RecommendResponse {
            recommended_movies: None,
            error: Some("Movie not found".to_string()),
        };
        assert_eq!(
            interpret_recommend_body(data),
            RecommendOutcome::Refused("Movie not found".to_string())
        );
    }

    #[test]
    fn test_interpret_empty_movie_list_is_a_refusal() {
        let data = RecommendResponse {
            recommended_movies: Some(Vec::new()),
            error: None,
        };
        assert_eq!(
            interpret_recommend_body(data),
            RecommendOutcome::Refused(NO_RECOMMENDATIONS.to_string())
        );
    }

    #[test]
    fn test_interpret_blank_error_falls_back_to_generic() {
        let data = RecommendResponse {
            recommended_movies: None,
            error: Some("   ".to_string()),
        };
        assert_eq!(
            interpret_recommend_body(data),
            RecommendOutcome::Refused(NO_RECOMMENDATIONS.to_string())
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = MovieClient::new("http://127.0.0.1:5000/".to_string());
        assert_eq!(client.base_url(), "http://127.0.0.1:5000");
    }
}
