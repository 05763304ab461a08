// Result text extraction: turns raw OCR output into a subject/mark table
pub mod fallback;
pub mod parser;
pub mod quality;
pub mod vocabulary;

pub use parser::{extract, ExtractionResult, SubjectResult};
pub use quality::quality_score;
