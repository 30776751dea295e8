// Sentiment polarity — trait-based abstraction for swappable analyzers.
//
// The PolarityAnalyzer trait defines the interface. LexiconAnalyzer is the
// built-in implementation: a word lexicon plus negation and intensifier rules.

pub mod lexicon;
pub mod traits;
mod words;
