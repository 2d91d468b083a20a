//! Daily single-flight answer cache
//!
//! The upstream page changes at most once per day and fetching it is
//! expensive, so the fetched set is memoized until the next midnight in the
//! Wordle reference time zone (America/Los_Angeles). Concurrent callers
//! during a refresh all attach to one in-flight fetch and observe its
//! single outcome; failures are surfaced, never cached.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, NaiveTime, TimeDelta, TimeZone, Utc};
use chrono_tz::America::Los_Angeles;
use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use tracing::{info, warn};

use super::{AnswerSet, AnswerSource, AnswersError};

/// Minimum plausible number of historical answers
///
/// A scrape returning fewer entries than this means the page layout changed
/// or the wrong list was picked up.
pub const MIN_ANSWER_COUNT: usize = 1200;

/// Answers known to have occurred; their absence marks a broken scrape
pub const KNOWN_PAST_ANSWERS: [&str; 2] = ["could", "stare"];

type SharedFetch = Shared<BoxFuture<'static, Result<Arc<AnswerSet>, AnswersError>>>;

/// The published answer set and the instant it stops being current
struct CacheEntry {
    answers: Arc<AnswerSet>,
    expires_at: DateTime<Utc>,
}

impl CacheEntry {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[derive(Default)]
struct CacheState {
    entry: Option<CacheEntry>,
    inflight: Option<SharedFetch>,
}

struct Inner {
    source: Arc<dyn AnswerSource>,
    state: Mutex<CacheState>,
}

/// Process-wide cache over an [`AnswerSource`]
///
/// Cheap to clone; clones share the same state.
#[derive(Clone)]
pub struct AnswerCache {
    inner: Arc<Inner>,
}

impl AnswerCache {
    /// Create an empty cache over `source`
    #[must_use]
    pub fn new(source: Arc<dyn AnswerSource>) -> Self {
        Self {
            inner: Arc::new(Inner {
                source,
                state: Mutex::new(CacheState::default()),
            }),
        }
    }

    /// Get the current answer set, fetching if none is cached or the cached
    /// one has expired
    ///
    /// Returns immediately when a current entry exists. Otherwise at most
    /// one fetch runs at a time; every caller that arrives before it
    /// publishes receives its result.
    ///
    /// # Errors
    /// Returns `AnswersError` when the fetch attempt this call observes
    /// fails. Failures are not cached; the next call starts a fresh fetch.
    pub async fn get(&self) -> Result<Arc<AnswerSet>, AnswersError> {
        let fetch = {
            let mut state = self.inner.state.lock().expect("cache state poisoned");

            if let Some(entry) = &state.entry
                && !entry.is_expired(Utc::now())
            {
                return Ok(Arc::clone(&entry.answers));
            }

            match &state.inflight {
                Some(fetch) => fetch.clone(),
                None => {
                    let fetch = spawn_refresh(Arc::clone(&self.inner));
                    state.inflight = Some(fetch.clone());
                    fetch
                }
            }
        };

        fetch.await
    }
}

/// Run one refresh in a detached task and share its outcome
///
/// Detaching means a caller that stops waiting (client disconnect) does not
/// cancel the fetch; it still completes and populates the cache for
/// subsequent callers.
fn spawn_refresh(inner: Arc<Inner>) -> SharedFetch {
    let task = tokio::spawn(async move {
        let result = refresh(inner.source.as_ref()).await;

        let mut state = inner.state.lock().expect("cache state poisoned");
        state.inflight = None;
        match result {
            Ok(answers) => {
                let answers = Arc::new(answers);
                let expires_at = next_refresh_deadline(Utc::now());
                info!(answers = answers.len(), %expires_at, "published fresh answer set");
                state.entry = Some(CacheEntry {
                    answers: Arc::clone(&answers),
                    expires_at,
                });
                Ok(answers)
            }
            Err(err) => {
                warn!(error = %err, "answer refresh failed");
                Err(err)
            }
        }
    });

    async move {
        task.await.unwrap_or_else(|err| {
            Err(AnswersError::Http(format!(
                "answer refresh task failed: {err}"
            )))
        })
    }
    .boxed()
    .shared()
}

async fn refresh(source: &dyn AnswerSource) -> Result<AnswerSet, AnswersError> {
    info!("refreshing past answers");
    let words = source.fetch().await?;
    validate_answers(&words)?;
    Ok(AnswerSet::new(words))
}

/// Sanity-check a fetched answer list before publishing it
fn validate_answers(words: &[String]) -> Result<(), AnswersError> {
    if words.len() < MIN_ANSWER_COUNT {
        return Err(AnswersError::Integrity(format!(
            "expected at least {MIN_ANSWER_COUNT} answers, got {}",
            words.len()
        )));
    }
    for known in KNOWN_PAST_ANSWERS {
        if !words.iter().any(|word| word == known) {
            return Err(AnswersError::Integrity(format!(
                "known past answer {known:?} missing"
            )));
        }
    }
    Ok(())
}

/// The next wall-clock midnight in the Wordle reference time zone
///
/// The boundary is calendar midnight in America/Los_Angeles, not a rolling
/// 24-hour window; a set fetched at 23:59 local expires a minute later.
fn next_refresh_deadline(now: DateTime<Utc>) -> DateTime<Utc> {
    let local = now.with_timezone(&Los_Angeles);
    let Some(tomorrow) = local.date_naive().succ_opt() else {
        return now + TimeDelta::days(1);
    };
    Los_Angeles
        .from_local_datetime(&tomorrow.and_time(NaiveTime::MIN))
        .earliest()
        .map_or_else(|| now + TimeDelta::days(1), |dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;
    use chrono::Timelike;

    /// Source returning a canned result after a short pause, counting calls
    struct MockSource {
        words: Result<Vec<String>, AnswersError>,
        calls: AtomicUsize,
    }

    impl MockSource {
        fn with_words(words: Vec<String>) -> Arc<Self> {
            Arc::new(Self {
                words: Ok(words),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing(err: AnswersError) -> Arc<Self> {
            Arc::new(Self {
                words: Err(err),
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AnswerSource for MockSource {
        async fn fetch(&self) -> Result<Vec<String>, AnswersError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            // Long enough for concurrent callers to overlap the fetch
            tokio::time::sleep(Duration::from_millis(20)).await;
            self.words.clone()
        }
    }

    /// 1300 plausible words including both known past answers
    fn plausible_answers() -> Vec<String> {
        let mut words: Vec<String> = (0..1300).map(|i| format!("w{i:04}")).collect();
        words.push("could".to_string());
        words.push("stare".to_string());
        words
    }

    #[tokio::test]
    async fn get_fetches_validates_and_caches() {
        let source = MockSource::with_words(plausible_answers());
        let cache = AnswerCache::new(Arc::clone(&source) as Arc<dyn AnswerSource>);

        let answers = cache.get().await.unwrap();
        assert!(answers.contains("could"));
        assert!(answers.contains("stare"));
        assert_eq!(answers.len(), 1302);

        // Second call is served from the entry
        let again = cache.get().await.unwrap();
        assert_eq!(source.calls(), 1);
        assert!(Arc::ptr_eq(&answers, &again));
    }

    #[tokio::test]
    async fn concurrent_gets_share_one_fetch() {
        let source = MockSource::with_words(plausible_answers());
        let cache = AnswerCache::new(Arc::clone(&source) as Arc<dyn AnswerSource>);

        let (first, second) = tokio::join!(cache.get(), cache.get());
        let first = first.unwrap();
        let second = second.unwrap();

        assert_eq!(source.calls(), 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn concurrent_gets_share_one_failure() {
        let source = MockSource::failing(AnswersError::Http("connection refused".to_string()));
        let cache = AnswerCache::new(Arc::clone(&source) as Arc<dyn AnswerSource>);

        let (first, second) = tokio::join!(cache.get(), cache.get());

        assert_eq!(source.calls(), 1);
        assert_eq!(first, second);
        assert!(matches!(first, Err(AnswersError::Http(_))));
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let source = MockSource::failing(AnswersError::Http("connection refused".to_string()));
        let cache = AnswerCache::new(Arc::clone(&source) as Arc<dyn AnswerSource>);

        assert!(cache.get().await.is_err());
        assert!(cache.get().await.is_err());

        // Each call after a failure starts a fresh attempt
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn too_few_answers_is_integrity_error() {
        let source = MockSource::with_words(vec!["could".to_string(), "stare".to_string()]);
        let cache = AnswerCache::new(Arc::clone(&source) as Arc<dyn AnswerSource>);

        let result = cache.get().await;
        assert!(matches!(result, Err(AnswersError::Integrity(_))));

        // Nothing was published; the next call fetches again
        cache.get().await.unwrap_err();
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn missing_known_answer_is_integrity_error() {
        let words: Vec<String> = (0..1300).map(|i| format!("w{i:04}")).collect();
        let source = MockSource::with_words(words);
        let cache = AnswerCache::new(Arc::clone(&source) as Arc<dyn AnswerSource>);

        let result = cache.get().await;
        assert!(matches!(result, Err(AnswersError::Integrity(_))));
    }

    #[tokio::test]
    async fn expired_entry_triggers_one_refetch() {
        let source = MockSource::with_words(plausible_answers());
        let cache = AnswerCache::new(Arc::clone(&source) as Arc<dyn AnswerSource>);

        cache.get().await.unwrap();
        assert_eq!(source.calls(), 1);

        // Age the published entry past its deadline
        {
            let mut state = cache.inner.state.lock().unwrap();
            state.entry.as_mut().unwrap().expires_at = Utc::now() - TimeDelta::seconds(1);
        }

        cache.get().await.unwrap();
        assert_eq!(source.calls(), 2);

        // Fresh entry is current again
        cache.get().await.unwrap();
        assert_eq!(source.calls(), 2);
    }

    #[test]
    fn validate_answers_accepts_plausible_list() {
        assert!(validate_answers(&plausible_answers()).is_ok());
    }

    #[test]
    fn validate_answers_rejects_short_list() {
        let words: Vec<String> = vec!["could".to_string(); 100];
        assert!(matches!(
            validate_answers(&words),
            Err(AnswersError::Integrity(_))
        ));
    }

    #[test]
    fn deadline_is_midnight_in_reference_zone() {
        let now = Utc::now();
        let deadline = next_refresh_deadline(now);

        assert!(deadline > now);

        let local = deadline.with_timezone(&Los_Angeles);
        assert_eq!(local.hour(), 0);
        assert_eq!(local.minute(), 0);
        assert_eq!(local.second(), 0);
    }

    #[test]
    fn deadline_from_known_instant() {
        // 2024-06-15 12:00 UTC is 05:00 PDT; next LA midnight is
        // 2024-06-16 00:00 PDT = 07:00 UTC
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let deadline = next_refresh_deadline(now);
        let expected = Utc.with_ymd_and_hms(2024, 6, 16, 7, 0, 0).unwrap();
        assert_eq!(deadline, expected);
    }

    #[test]
    fn deadline_rolls_over_month_boundary() {
        // 2024-02-01 02:00 UTC is still 2024-01-31 18:00 PST
        let now = Utc.with_ymd_and_hms(2024, 2, 1, 2, 0, 0).unwrap();
        let deadline = next_refresh_deadline(now);
        let expected = Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap();
        assert_eq!(deadline, expected);
    }

    #[test]
    fn deadline_on_dst_transition_day() {
        // 2024-03-10 is the US spring-forward date; midnight still exists
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();
        let deadline = next_refresh_deadline(now);

        let local = deadline.with_timezone(&Los_Angeles);
        assert_eq!(local.hour(), 0);
        assert!(deadline > now);
    }
}
