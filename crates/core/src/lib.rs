//! Core types and contracts for spring-pack design search.
//!
//! This crate defines the data the search consumes and produces, and the
//! collaborator seams it calls through:
//!
//! - [`OptimizationRequest`] — template, target, envelope and constraints of
//!   one search run
//! - [`CandidateInput`] — the derived geometry of one design point
//! - [`PhysicalEvaluator`], [`AuditEvaluator`] — external collaborators that
//!   compute mechanical behaviour and a safety verdict for a candidate
//! - [`Candidate`] — an accepted, scored design
//! - [`Observer`] — receives search events and optionally returns control
//!   actions
//!
//! # Units
//!
//! Geometry is in millimetres, forces in newtons and stiffness in N/mm.
//! Material properties and stresses are [`uom`] quantities.
//!
//! # Features
//!
//! - `serde-derive` (default) — `Serialize`/`Deserialize` for request and
//!   result types, so requests can be loaded from configuration files.

mod candidate;
mod evaluate;
mod observer;
mod request;
mod template;

pub use candidate::{Bucket, Candidate, CandidateInput, ParamTuple, Score, TupleKey};
pub use evaluate::{
    AuditEvaluator, AuditResult, AuditStatus, FailureMode, PhysicalEvaluator, PhysicalResult,
};
pub use observer::Observer;
pub use request::{Constraints, Envelope, OptimizationRequest, RequestError, Target};
pub use template::{BaseTemplate, EndCondition, Material};
