//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store, search and persistence into use-case level APIs.
//! - Keep presentation callers decoupled from file formats.

pub mod catalog_service;
pub mod export;
