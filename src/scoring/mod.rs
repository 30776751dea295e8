// Scoring — turning sentiment polarity into an offensiveness verdict.

pub mod offensiveness;
