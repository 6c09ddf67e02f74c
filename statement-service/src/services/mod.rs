pub mod extractor;
pub mod prompt;
pub mod providers;

pub use extractor::{ExtractorError, HttpTextExtractor, TextExtractor, Utf8TextExtractor};
pub use providers::{ProviderError, Transcriber, TranscriptionResponse};
