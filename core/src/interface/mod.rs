pub mod document;
pub mod report;

pub use document::MatrixDocument;
pub use report::HscoreReport;
