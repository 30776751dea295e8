// tonemeter: offensiveness scoring for text and CSV uploads
//
// This is the library root. Each module corresponds to one stage of the
// request path: sentiment polarity → offensiveness scoring → batch pipeline,
// with CSV parsing and the HTTP layer around them.

pub mod config;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod sentiment;
pub mod table;
pub mod web;
