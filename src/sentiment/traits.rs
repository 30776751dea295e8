// Polarity analyzer trait — the injected sentiment capability.
//
// Everything downstream (scoring, batch pipeline, HTTP handlers) only sees
// this trait. The default implementation is the built-in LexiconAnalyzer;
// tests swap in fixed-value stubs.

use anyhow::Result;
use async_trait::async_trait;

/// Trait for computing sentiment polarity. Async so that implementations
/// backed by a remote service or a blocking model fit the same seam.
#[async_trait]
pub trait PolarityAnalyzer: Send + Sync {
    /// Average polarity of `text`, from -1.0 (very negative) to 1.0 (very
    /// positive). Text the analyzer can't make sense of returns 0.0.
    async fn polarity(&self, text: &str) -> Result<f64>;
}
