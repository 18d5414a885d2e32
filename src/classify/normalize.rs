//! Result normalization.
//!
//! The inference service is not required to return more than a single best
//! label, but the result view always needs three ranked entries to render
//! comparative confidence bars. This module owns the one place where a
//! partial response is turned into a full ranking, so the fallback cannot be
//! duplicated inconsistently by callers.

use anyhow::{anyhow, Result};

use crate::classify::response::{NormalizedResult, RankedEntry, RawPrediction};
use crate::labels::{self, CraftLabel};

/// Decay multipliers applied to the top confidence when the server omits a
/// ranking. Frozen values: downstream output must not drift.
const SYNTH_SECOND: f32 = 0.35;
const SYNTH_THIRD: f32 = 0.15;

/// Derive a display-ready ranking from an untrusted prediction.
///
/// When the server supplies a non-empty `top3`, it is authoritative: order,
/// values, and length are passed through untouched (no padding, no
/// re-sorting), and `top3[0]` wins over the top-level `class`/`confidence`
/// even when they disagree.
///
/// When `top3` is absent or empty, a three-entry ranking is synthesized
/// deterministically: the top entry, then the first two *other* labels in
/// enumeration order, with confidences scaled by fixed multipliers.
///
/// Pure and deterministic. The only failure is a label set with fewer than
/// three entries, which is a configuration defect rather than a runtime
/// condition.
pub fn normalize(raw: &RawPrediction, labels: &[CraftLabel]) -> Result<NormalizedResult> {
    if let Some(top3) = raw.top3.as_deref() {
        if !top3.is_empty() {
            return Ok(NormalizedResult {
                top: top3[0],
                ranking: top3.to_vec(),
            });
        }
    }

    if labels.len() < 3 {
        return Err(anyhow!(
            "label set has {} entries; synthesis needs at least 3",
            labels.len()
        ));
    }

    let top = RankedEntry::new(raw.class, raw.confidence);
    let others = labels::others(raw.class, labels);
    let ranking = vec![
        top,
        RankedEntry::new(others[0], raw.confidence * SYNTH_SECOND),
        RankedEntry::new(others[1], raw.confidence * SYNTH_THIRD),
    ];
    Ok(NormalizedResult { top, ranking })
}

/// `normalize` against the full built-in label set, which always satisfies
/// the synthesis precondition.
pub fn normalize_full(raw: &RawPrediction) -> NormalizedResult {
    normalize(raw, &CraftLabel::ALL).expect("built-in label set has 5 entries")
}
