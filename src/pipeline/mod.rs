// Pipeline: composes article extraction and keyword scoring.

pub mod analyze;
