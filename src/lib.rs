pub mod config;
pub mod lexicon;
pub mod models;
pub mod server;
pub mod tokenize;
pub mod verifier;

pub use config::AppConfig;
pub use models::{ConfidenceLevel, VerificationRequest, VerificationResult};
pub use server::run_server;
pub use verifier::ReliabilityVerifier;
