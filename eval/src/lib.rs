pub mod dataset;
pub mod embedding;
pub mod overlap;
pub mod report;

pub use embedding::{Embedder, EmbeddingEvaluator};
pub use overlap::TokenOverlapEvaluator;
pub use report::{save_report, EvalInput, EvalOutcome, EvalReport, Evaluator};
