//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate model and repository calls into use-case level APIs.
//! - Keep UI layers decoupled from storage details.

pub mod comment_service;
pub mod form_service;
