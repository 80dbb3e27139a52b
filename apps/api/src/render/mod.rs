// Markdown export of a generated bundle.

pub mod escape;
pub mod markdown;

pub use escape::escape_inline;
pub use markdown::compose;
