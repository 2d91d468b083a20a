//! Guess query endpoints
//!
//! - `GET /api/guesses` — corpus counts
//! - `GET /api/guesses/check` — validate a word against corpus and answers
//! - `GET /api/guesses/guess` — random non-answer guesses
//! - `GET /api/guesses/match` — wildcard pattern matching
//! - `GET /api/guesses/regex` — regex matching
//! - `POST /api/guesses/find` — full structured constraints

use std::collections::BTreeMap;

use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use super::AppState;
use super::error::ApiError;
use crate::core::{ConstraintSpec, WORD_LEN, Word};
use crate::matcher::{WILDCARD, compile_word_regex, find_matches, find_regex_matches, pattern_spec};

// Per-endpoint result caps when the caller gives none
const DEFAULT_GUESS_LIMIT: usize = 1;
const DEFAULT_FIND_LIMIT: usize = 5;
const DEFAULT_MATCH_LIMIT: usize = 25;

const INVALID_WORD_REASON: &str =
    "Invalid query parameter: 'word' must be a string of 5 alphabetic characters.";

pub(super) fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/guesses", get(counts))
        .route("/api/guesses/check", get(check))
        .route("/api/guesses/guess", get(random_guesses))
        .route("/api/guesses/match", get(pattern_matches))
        .route("/api/guesses/regex", get(regex_matches))
        .route("/api/guesses/find", post(find))
}

// ─── GET /api/guesses ────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CountsResponse {
    guesses_length: usize,
    potentially_winning_guesses_length: usize,
}

async fn counts(State(state): State<AppState>) -> Result<Json<CountsResponse>, ApiError> {
    let answers = state.answers.get().await?;
    let potentially_winning = state
        .words
        .iter()
        .filter(|word| !answers.contains(word.text()))
        .count();

    Ok(Json(CountsResponse {
        guesses_length: state.words.len(),
        potentially_winning_guesses_length: potentially_winning,
    }))
}

// ─── GET /api/guesses/check ──────────────────────────────────

#[derive(Deserialize)]
struct CheckParams {
    word: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckResponse {
    is_past_answer: bool,
    is_valid_guess: bool,
}

async fn check(
    State(state): State<AppState>,
    Query(params): Query<CheckParams>,
) -> Result<Json<CheckResponse>, ApiError> {
    let word = Word::new(params.word.unwrap_or_default())
        .map_err(|_| ApiError::bad_request(INVALID_WORD_REASON))?;

    let is_valid_guess = state.words.iter().any(|w| w.text() == word.text());

    let answers = state.answers.get().await?;
    Ok(Json(CheckResponse {
        is_past_answer: answers.contains(word.text()),
        is_valid_guess,
    }))
}

// ─── GET /api/guesses/guess ──────────────────────────────────

#[derive(Deserialize)]
struct GuessParams {
    limit: Option<String>,
}

#[derive(Serialize)]
struct GuessesResponse {
    guesses: Vec<String>,
}

async fn random_guesses(
    State(state): State<AppState>,
    Query(params): Query<GuessParams>,
) -> Result<Json<GuessesResponse>, ApiError> {
    let limit = parse_limit(params.limit.as_deref(), DEFAULT_GUESS_LIMIT)?;
    let spec = unconstrained(limit)?;

    let answers = state.answers.get().await?;
    let guesses = find_matches(&state.words, &answers, &spec, &mut rand::rng());
    Ok(Json(GuessesResponse { guesses }))
}

// ─── GET /api/guesses/match ──────────────────────────────────

#[derive(Deserialize)]
struct MatchParams {
    pattern: Option<String>,
    exclude: Option<String>,
    limit: Option<String>,
}

#[derive(Serialize)]
struct MatchesResponse {
    matches: Vec<String>,
}

async fn pattern_matches(
    State(state): State<AppState>,
    Query(params): Query<MatchParams>,
) -> Result<Json<MatchesResponse>, ApiError> {
    let spec = validate_match_params(&params)?;

    let answers = state.answers.get().await?;
    let matches = find_matches(&state.words, &answers, &spec, &mut rand::rng());
    Ok(Json(MatchesResponse { matches }))
}

fn validate_match_params(params: &MatchParams) -> Result<ConstraintSpec, ApiError> {
    let Some(pattern) = params.pattern.as_deref() else {
        return Err(ApiError::bad_request("Expected to receive a string"));
    };
    if pattern.chars().count() != WORD_LEN {
        return Err(ApiError::bad_request("Pattern must be 5 characters long"));
    }
    if !pattern
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c == WILDCARD)
    {
        return Err(ApiError::bad_request(
            "Pattern can have only letters and asterisks",
        ));
    }

    let exclude = params.exclude.as_deref().unwrap_or_default();
    if !exclude.is_empty()
        && !(exclude.len() <= 25 && exclude.chars().all(|c| c.is_ascii_alphabetic()))
    {
        return Err(ApiError::bad_request(
            "Exclude can have only letters and at most 25 characters",
        ));
    }

    let limit = parse_limit(params.limit.as_deref(), DEFAULT_MATCH_LIMIT)?;
    pattern_spec(pattern, exclude, limit).map_err(|e| ApiError::bad_request(e.to_string()))
}

// ─── GET /api/guesses/regex ──────────────────────────────────

#[derive(Deserialize)]
struct RegexParams {
    regex: Option<String>,
    limit: Option<String>,
}

async fn regex_matches(
    State(state): State<AppState>,
    Query(params): Query<RegexParams>,
) -> Result<Json<MatchesResponse>, ApiError> {
    let Some(raw) = params.regex.as_deref() else {
        return Err(ApiError::bad_request("Expected to receive a regex"));
    };
    let limit = parse_limit(params.limit.as_deref(), DEFAULT_FIND_LIMIT)?;
    let pattern = compile_word_regex(raw).map_err(|e| ApiError::bad_request(e.to_string()))?;

    let answers = state.answers.get().await?;
    let matches = find_regex_matches(&state.words, &answers, &pattern, limit, &mut rand::rng());
    Ok(Json(MatchesResponse { matches }))
}

// ─── POST /api/guesses/find ──────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FindRequest {
    #[serde(default)]
    correct_letters: BTreeMap<String, String>,
    #[serde(default)]
    eliminated_letters: String,
    #[serde(default)]
    wrong_position_letters: Vec<WrongPositionDto>,
    limit: Option<u64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WrongPositionDto {
    letter: String,
    #[serde(default)]
    forbidden_positions: Vec<u64>,
    max_occurrences: Option<u64>,
}

async fn find(
    State(state): State<AppState>,
    Json(request): Json<FindRequest>,
) -> Result<Json<MatchesResponse>, ApiError> {
    let spec = build_find_spec(&request)?;

    let answers = state.answers.get().await?;
    let matches = find_matches(&state.words, &answers, &spec, &mut rand::rng());
    Ok(Json(MatchesResponse { matches }))
}

fn build_find_spec(request: &FindRequest) -> Result<ConstraintSpec, ApiError> {
    let limit = match request.limit {
        None => DEFAULT_FIND_LIMIT,
        Some(0) => return Err(ApiError::bad_request("Limit must be a positive number")),
        Some(n) => usize::try_from(n)
            .map_err(|_| ApiError::bad_request("Limit must be a positive number"))?,
    };
    let mut spec = unconstrained(limit)?;

    for (key, value) in &request.correct_letters {
        let position: usize = key.trim().parse().map_err(|_| {
            ApiError::bad_request("Correct letter positions must be integers between 0 and 4")
        })?;
        spec.require_at(position, single_letter(value)?)
            .map_err(|e| ApiError::bad_request(e.to_string()))?;
    }

    for letter in request.eliminated_letters.chars() {
        spec.eliminate(letter)
            .map_err(|e| ApiError::bad_request(e.to_string()))?;
    }

    for clause in &request.wrong_position_letters {
        let positions: Vec<usize> = clause
            .forbidden_positions
            .iter()
            .map(|&p| usize::try_from(p).unwrap_or(usize::MAX))
            .collect();
        let max = match clause.max_occurrences {
            Some(0) => {
                return Err(ApiError::bad_request(
                    "Max occurrences must be a positive number",
                ));
            }
            other => other.map(|n| usize::try_from(n).unwrap_or(usize::MAX)),
        };
        spec.require_present(single_letter(&clause.letter)?, &positions, max)
            .map_err(|e| ApiError::bad_request(e.to_string()))?;
    }

    Ok(spec)
}

// ─── Shared validation helpers ───────────────────────────────

fn parse_limit(raw: Option<&str>, default: usize) -> Result<usize, ApiError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|&n| n >= 1)
        .ok_or_else(|| ApiError::bad_request("Limit must be a positive number"))
}

fn unconstrained(limit: usize) -> Result<ConstraintSpec, ApiError> {
    ConstraintSpec::new(limit).map_err(|e| ApiError::bad_request(e.to_string()))
}

fn single_letter(value: &str) -> Result<char, ApiError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => Ok(letter),
        _ => Err(ApiError::bad_request(
            "Letters must be single alphabetic characters",
        )),
    }
}
