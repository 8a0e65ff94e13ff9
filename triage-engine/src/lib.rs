//! Orthopaedic triage engine
//!
//! Turns a free-text symptom narrative into a ranked list of candidate
//! conditions, a severity assessment, a care recommendation and an integer
//! queue priority.
//!
//! # Stages
//!
//! - **Entity extraction**: body parts, symptoms, a 0-10 pain rating and a duration phrase
//! - **Condition ranking**: rule-adjusted probabilities over a fixed per-body-part table
//! - **Severity scoring**: weighted pain, duration, functional impact and symptom intensity
//! - **Recommendation**: diagnostic tests, initial treatment, referral and urgency
//! - **Priority scoring**: integer in `1..=100` used to order the appointment queue
//!
//! Each stage is deterministic and free of I/O. Ties and table lookups follow
//! definition order, so the same narrative always yields the same outcome.
//!
//! # Example
//!
//! ```rust
//! use triage_engine::{TriagePipeline, TriageRequest};
//!
//! let pipeline = TriagePipeline::default();
//! let outcome = pipeline
//!     .run(&TriageRequest::new("Sharp pain in my wrist, 6/10, for 3 days").with_age(34))
//!     .unwrap();
//! assert_eq!(outcome.prediction.top_condition, "Carpal Tunnel Syndrome");
//! assert!((1..=100).contains(&outcome.priority_score.value()));
//! ```

pub mod config;
pub mod error;
pub mod extractor;
pub mod knowledge;
pub mod models;
pub mod pipeline;
pub mod priority;
pub mod queue;
pub mod ranker;
pub mod recommendation;
pub mod severity;

pub use config::TriageSettings;
pub use error::{TriageError, TriageResult};
pub use extractor::EntityExtractor;
pub use knowledge::OrthopaedicKnowledge;
pub use models::*;
pub use pipeline::TriagePipeline;
pub use priority::PriorityScorer;
pub use queue::{Appointment, AppointmentQueue, AppointmentStatus, ConsultationLog, QueueEntry};
pub use ranker::{ConditionRanker, Ranking};
pub use recommendation::RecommendationGenerator;
pub use severity::{SeverityScorer, SeverityWeights};
