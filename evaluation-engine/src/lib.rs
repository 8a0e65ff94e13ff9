//! Offline evaluation of triage predictions
//!
//! - **Classification metrics**: accuracy, weighted precision/recall/F1,
//!   confusion matrix and per-class breakdown for predicted conditions
//! - **Severity agreement**: exact and within-one-level accuracy, mean absolute error
//! - **Explainability**: confidence tier and key factors for one prediction
//! - **Consultation analytics**: how often the top prediction matched the diagnosis
//!
//! [`EvaluationService`] keeps an append-only history of classification runs
//! and builds reports from it.
//!
//! # Example
//!
//! ```rust
//! use evaluation_engine::EvaluationService;
//!
//! let service = EvaluationService::new();
//! let metrics = service
//!     .evaluate(&["ACL Tear", "Bursitis"], &["ACL Tear", "Arthritis"], "orthopaedic_classifier")
//!     .unwrap();
//! assert_eq!(metrics.accuracy, 0.5);
//! assert_eq!(service.generate_report().unwrap().total_evaluations, 1);
//! ```

pub mod analytics;
pub mod error;
pub mod explainability;
pub mod metrics;
pub mod service;
pub mod severity;

pub use analytics::ConsultationAccuracy;
pub use error::{EvaluationError, EvaluationResult};
pub use explainability::{explain, ConfidenceLevel, Explanation, FeatureImportance};
pub use metrics::{classification_metrics, ClassMetrics, ClassificationMetrics, DEFAULT_MODEL_NAME};
pub use service::{EvaluationReport, EvaluationService, HistoricalAverages};
pub use severity::{severity_metrics, SeverityMetrics};
