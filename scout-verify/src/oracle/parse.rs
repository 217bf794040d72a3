//! Oracle response interpretation: strict JSON first, best-effort regex
//! extraction second, fixed fallback verdict last. Parsing never errors.

use std::sync::LazyLock;

use regex::Regex;
use scout_core::models::StageVerdict;
use serde_json::Value;
use tracing::debug;

const VERDICT_KEYS: [&str; 5] = ["verdict", "is_match", "is_plausible", "has_disqualifiers", "match"];
const RATIONALE_KEYS: [&str; 3] = ["rationale", "reasoning", "explanation"];
const EVIDENCE_KEYS: [&str; 2] = ["evidence", "supporting_evidence"];
const CONTRADICTION_KEYS: [&str; 3] = ["contradictions", "red_flags", "disqualifiers"];

static VERDICT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)"?(?:verdict|is_match|is_plausible|has_disqualifiers)"?\s*[:=]\s*(true|false)"#)
        .unwrap()
});
static CONFIDENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)"?confidence"?\s*[:=]\s*([0-9]+(?:\.[0-9]+)?)"#).unwrap());

/// Interpret a raw oracle response as a stage verdict.
pub fn interpret(raw: &str) -> StageVerdict {
    if let Some(verdict) = parse_strict(raw) {
        return verdict;
    }
    if let Some(verdict) = parse_loose(raw) {
        debug!(snippet = %raw.chars().take(80).collect::<String>(), "loose-parsed oracle response");
        return verdict;
    }
    debug!(snippet = %raw.chars().take(80).collect::<String>(), "unparsable oracle response");
    StageVerdict::parse_fallback(raw)
}

/// Models answer on a 0-100 scale often enough that values above 1 are
/// treated as percentages.
fn normalize_confidence(value: f64) -> f64 {
    if value > 1.0 {
        (value / 100.0).clamp(0.0, 1.0)
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// The JSON object may arrive wrapped in code fences or prose; take the
/// outermost braces.
fn json_body(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end > start).then(|| &raw[start..=end])
}

fn string_list(obj: &Value, keys: &[&str]) -> Vec<String> {
    for key in keys {
        if let Some(items) = obj.get(key).and_then(Value::as_array) {
            return items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect();
        }
    }
    Vec::new()
}

fn parse_strict(raw: &str) -> Option<StageVerdict> {
    let obj: Value = serde_json::from_str(json_body(raw)?).ok()?;
    let verdict = VERDICT_KEYS
        .iter()
        .find_map(|key| obj.get(key).and_then(Value::as_bool))?;
    let confidence = obj
        .get("confidence")
        .and_then(Value::as_f64)
        .map(normalize_confidence)?;
    let rationale = RATIONALE_KEYS
        .iter()
        .find_map(|key| obj.get(key).and_then(Value::as_str))
        .unwrap_or("")
        .to_string();

    let mut out = StageVerdict::new(verdict, confidence, rationale);
    out.evidence = string_list(&obj, &EVIDENCE_KEYS);
    out.contradictions = string_list(&obj, &CONTRADICTION_KEYS);
    Some(out)
}

fn parse_loose(raw: &str) -> Option<StageVerdict> {
    let verdict = VERDICT_RE.captures(raw)?.get(1)?.as_str() == "true";
    let confidence: f64 = CONFIDENCE_RE.captures(raw)?.get(1)?.as_str().parse().ok()?;
    let snippet: String = raw.chars().take(200).collect();
    Some(StageVerdict::new(
        verdict,
        normalize_confidence(confidence),
        snippet,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_core::models::verdict::PARSE_FALLBACK_CONFIDENCE;

    #[test]
    fn strict_json_with_lists() {
        let raw = r#"{"verdict": true, "confidence": 0.85, "rationale": "roster match",
                      "evidence": ["same school"], "contradictions": []}"#;
        let v = interpret(raw);
        assert!(v.verdict);
        assert!((v.confidence - 0.85).abs() < 1e-9);
        assert_eq!(v.evidence, vec!["same school"]);
    }

    #[test]
    fn fenced_json_and_alternate_keys() {
        let raw = "```json\n{\"is_match\": false, \"confidence\": 72, \"reasoning\": \"different school\"}\n```";
        let v = interpret(raw);
        assert!(!v.verdict);
        assert!((v.confidence - 0.72).abs() < 1e-9);
        assert_eq!(v.rationale, "different school");
    }

    #[test]
    fn loose_extraction_from_prose() {
        let raw = "Based on the evidence, verdict: true with confidence: 0.8 overall.";
        let v = interpret(raw);
        assert!(v.verdict);
        assert!((v.confidence - 0.8).abs() < 1e-9);
    }

    #[test]
    fn garbage_falls_back_to_fixed_verdict() {
        let v = interpret("I cannot help with that.");
        assert!(!v.verdict);
        assert_eq!(v.confidence, PARSE_FALLBACK_CONFIDENCE);
        assert!(v.rationale.starts_with("unparsable"));
    }

    #[test]
    fn percent_scale_is_normalized() {
        let v = interpret(r#"{"verdict": true, "confidence": 95, "rationale": "r"}"#);
        assert!((v.confidence - 0.95).abs() < 1e-9);
    }
}
