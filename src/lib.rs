//! lint-gate - analysis submission gatekeeper
//!
//! Decides which editor files are eligible for static analysis, groups the
//! eligible ones by their owning module and hands them to a job manager.
//! Ineligible files are routed to a separate list so their previous results
//! can be cleared.
//!
//! The pipeline has three exclusion tiers:
//! 1. Local exclusions - file type, missing module, generated directories
//! 2. Project exclusions - glob excludes and test classification, skipped for
//!    explicit user actions
//! 3. Server exclusions - settings of the bound server project, queried once
//!    per module

pub mod binding;
pub mod config;
pub mod console;
pub mod error;
pub mod exclusions;
pub mod jobs;
pub mod submit;
pub mod trigger;
pub mod types;
pub mod workspace;
