// Offensiveness score formula.
//
// Sentiment polarity runs from -1.0 (very negative) to 1.0 (very positive).
// The offensiveness score flips and rescales it onto 0-100:
//
//   score = round((1 - polarity) * 50, 2)
//
// so p = 1 → 0, p = 0 → 50, p = -1 → 100. Anything strictly above 50 is
// flagged as likely offensive; exactly 50 (neutral) is safe.

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use crate::sentiment::traits::PolarityAnalyzer;

/// Scores strictly above this are classified as likely offensive.
pub const OFFENSIVE_THRESHOLD: f64 = 50.0;

/// Binary classification derived from an offensiveness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Safe,
    LikelyOffensive,
}

impl Classification {
    /// Classify a score (0-100). The threshold is strict: 50.0 is safe.
    pub fn from_score(score: f64) -> Self {
        if score > OFFENSIVE_THRESHOLD {
            Classification::LikelyOffensive
        } else {
            Classification::Safe
        }
    }

    /// The user-facing message returned by the API.
    pub fn message(&self) -> &'static str {
        match self {
            Classification::Safe => "This content seems safe.",
            Classification::LikelyOffensive => "This content is likely offensive.",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// A score paired with its classification message — the JSON shape of
/// `POST /api/predict`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub offensiveness: f64,
    pub message: &'static str,
}

impl Verdict {
    pub fn from_score(offensiveness: f64) -> Self {
        Self {
            offensiveness,
            message: Classification::from_score(offensiveness).message(),
        }
    }

    pub fn classification(&self) -> Classification {
        Classification::from_score(self.offensiveness)
    }
}

/// Map a polarity onto the 0-100 offensiveness scale, rounded to 2 decimals.
///
/// Polarity is clamped into [-1, 1] first, so the result is always in [0, 100]
/// even if an analyzer strays out of range.
pub fn offensiveness_from_polarity(polarity: f64) -> f64 {
    let polarity = polarity.clamp(-1.0, 1.0);
    round2((1.0 - polarity) * 50.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Score a single text: ask the analyzer for its polarity and build the verdict.
///
/// Analyzer errors propagate. A NaN polarity is treated as an analyzer error
/// rather than silently scored.
pub async fn score_text(analyzer: &dyn PolarityAnalyzer, text: &str) -> Result<Verdict> {
    let polarity = analyzer.polarity(text).await?;
    if polarity.is_nan() {
        anyhow::bail!("Sentiment analyzer returned an invalid polarity (NaN)");
    }

    let verdict = Verdict::from_score(offensiveness_from_polarity(polarity));
    debug!(
        polarity,
        offensiveness = verdict.offensiveness,
        "Scored text"
    );
    Ok(verdict)
}
