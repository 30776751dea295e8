// HTTP handlers, one module per endpoint.

pub mod predict;
pub mod predict_file;
