//! # satya-core
//!
//! The pure verification core for SATYA document requests.
//!
//! This crate provides:
//! - The two trait seams (`DocumentClassifier`, `RequirementResolver`)
//! - The consistency checker and the priority-ordered decision engine
//! - The result assembler and the `VerificationPipeline` that wires the
//!   stages together with a classify-all barrier
//!
//! ## Usage
//!
//! ```rust,ignore
//! use satya_core::{
//!     pipeline::VerificationPipeline,
//!     traits::{DocumentClassifier, RequirementResolver},
//! };
//! ```

pub mod assemble;
pub mod consistency;
pub mod decision;
pub mod pipeline;
pub mod traits;

pub use pipeline::VerificationPipeline;
