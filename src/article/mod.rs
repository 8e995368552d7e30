// Article extraction: URL -> readable body text, or a classified failure.

pub mod document;
pub mod extract;
pub mod fetcher;
