//! Remote source of historical answers
//!
//! The production source scrapes a community-maintained page listing every
//! past Wordle answer. Fetching is behind the [`AnswerSource`] trait so the
//! cache can be exercised without a network.

use std::time::Duration;

use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::AnswersError;

/// Page listing every past Wordle answer
pub const DEFAULT_ANSWERS_URL: &str = "https://www.rockpapershotgun.com/wordle-past-answers";

// The heading the answer list sits under, matched case-insensitively
const ANSWERS_HEADING: &str = "all wordle answers";

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT_VALUE: &str = concat!("wordle_guess_api/", env!("CARGO_PKG_VERSION"));

/// Produces the raw, order-irrelevant list of past answer words
#[async_trait]
pub trait AnswerSource: Send + Sync {
    /// Retrieve and parse the remote answers into lowercase words
    ///
    /// # Errors
    /// Returns `AnswersError` when the source is unreachable or its content
    /// cannot be parsed.
    async fn fetch(&self) -> Result<Vec<String>, AnswersError>;
}

/// Scrapes the historical-answers page over HTTPS
#[derive(Debug, Clone)]
pub struct ScrapedAnswerSource {
    client: reqwest::Client,
    url: String,
}

impl ScrapedAnswerSource {
    /// Create a source reading from `url`
    ///
    /// # Errors
    /// Returns `AnswersError::Http` if the HTTP client cannot be built.
    pub fn new(url: impl Into<String>) -> Result<Self, AnswersError> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(USER_AGENT_VALUE)
            .build()
            .map_err(|e| AnswersError::Http(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl AnswerSource for ScrapedAnswerSource {
    async fn fetch(&self) -> Result<Vec<String>, AnswersError> {
        debug!(url = %self.url, "fetching past answers page");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| AnswersError::Http(e.to_string()))?
            .error_for_status()
            .map_err(|e| AnswersError::Http(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| AnswersError::Http(e.to_string()))?;

        parse_answers(&body)
    }
}

/// Pull the answer words out of the page
///
/// Locates the heading whose text contains "all wordle answers"
/// (case-insensitive), then collects every list item of the list
/// immediately following it, trimmed and lowercased.
pub(crate) fn parse_answers(html: &str) -> Result<Vec<String>, AnswersError> {
    let document = Html::parse_document(html);

    let headings = Selector::parse("h2").expect("static selector");
    let items = Selector::parse("li").expect("static selector");

    let heading = document
        .select(&headings)
        .find(|h| {
            h.text()
                .collect::<String>()
                .to_lowercase()
                .contains(ANSWERS_HEADING)
        })
        .ok_or_else(|| {
            AnswersError::Parse(format!("no heading containing {ANSWERS_HEADING:?}"))
        })?;

    let list = heading
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .next()
        .filter(|el| el.value().name() == "ul")
        .ok_or_else(|| {
            AnswersError::Parse("no list immediately after the answers heading".to_string())
        })?;

    Ok(list
        .select(&items)
        .map(|li| li.text().collect::<String>().trim().to_lowercase())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_list_after_heading() {
        let html = r"
            <html><body>
            <h2>Some other heading</h2>
            <p>intro</p>
            <h2>All Wordle answers</h2>
            <ul>
                <li> COULD </li>
                <li>Stare</li>
                <li>crane</li>
            </ul>
            </body></html>";

        let answers = parse_answers(html).unwrap();
        assert_eq!(answers, ["could", "stare", "crane"]);
    }

    #[test]
    fn heading_match_is_case_insensitive_substring() {
        let html = r"
            <h2>Every single one of the ALL WORDLE ANSWERS so far</h2>
            <ul><li>could</li></ul>";

        let answers = parse_answers(html).unwrap();
        assert_eq!(answers, ["could"]);
    }

    #[test]
    fn missing_heading_is_parse_error() {
        let html = r"<h2>Unrelated</h2><ul><li>could</li></ul>";

        assert!(matches!(
            parse_answers(html),
            Err(AnswersError::Parse(_))
        ));
    }

    #[test]
    fn heading_without_following_list_is_parse_error() {
        let html = r"<h2>All Wordle answers</h2><p>no list here</p>";

        assert!(matches!(
            parse_answers(html),
            Err(AnswersError::Parse(_))
        ));
    }

    #[test]
    fn ignores_lists_before_the_heading() {
        let html = r"
            <ul><li>wrong</li></ul>
            <h2>All Wordle answers</h2>
            <ul><li>right</li></ul>";

        let answers = parse_answers(html).unwrap();
        assert_eq!(answers, ["right"]);
    }
}
