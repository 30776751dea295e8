// Pipelines that apply the scoring function across many inputs.

pub mod batch;
pub mod file;
