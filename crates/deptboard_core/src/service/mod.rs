//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep page rendering decoupled from storage details.

pub mod project_service;
pub mod research_service;
