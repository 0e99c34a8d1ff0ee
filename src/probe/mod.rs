//! URL classification and method probing

pub mod dispatcher;
pub mod prober;

// Re-export commonly used items
pub use dispatcher::{ClassifyInputs, Dispatcher, dedup_inputs, is_candidate_url};
pub use prober::{MethodProber, ProbeMethods};
