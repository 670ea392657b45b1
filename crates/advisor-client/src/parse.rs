//! Parsing helpers for advisor responses.
//!
//! The advisor returns free-form text. The ranking call is asked for a JSON
//! object but routinely wraps it in prose or markdown fences, so extraction
//! strips fences and takes the outermost brace-bounded substring before
//! handing it to serde.

use anyhow::{anyhow, Result};
use common::RankingResult;
use serde::Deserialize;

/// Strip markdown code blocks from a response.
pub(crate) fn strip_code_blocks(response: &str) -> &str {
    response
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}

/// Extract the outermost `{...}` substring, if any.
pub(crate) fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Parse query-expansion output: one keyword or phrase per line.
pub(crate) fn parse_keywords(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// The JSON shape the ranking prompt asks for. All fields are optional so a
/// partially-formed object still yields a usable result.
#[derive(Debug, Deserialize)]
struct RankingPayload {
    #[serde(default)]
    communities: Vec<String>,
    #[serde(default)]
    reasoning: Option<String>,
    #[serde(default)]
    categories: Vec<String>,
}

/// Parse ranking output into a `RankingResult`.
///
/// Returns `Err` when no JSON object can be extracted or parsed; the
/// orchestrator degrades on that.
pub(crate) fn parse_ranking(text: &str) -> Result<RankingResult> {
    let stripped = strip_code_blocks(text);
    let object = extract_json_object(stripped)
        .ok_or_else(|| anyhow!("No JSON object in ranking response"))?;

    let payload: RankingPayload =
        serde_json::from_str(object).map_err(|e| anyhow!("Malformed ranking JSON: {e}"))?;

    Ok(RankingResult {
        selected_names: payload.communities,
        reasoning: payload
            .reasoning
            .unwrap_or_else(|| "No reasoning provided".to_string()),
        categories: payload.categories,
    })
}
