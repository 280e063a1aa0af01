// Response models for the analyze endpoint.
use serde::{Deserialize, Serialize};

/// Successful analysis payload: the rounded food total plus the fixed
/// identification fields coming from service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub answer: f64,
    pub email: String,
    pub exam: String,
}
