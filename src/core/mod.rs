//! Core domain logic for arnlint
//!
//! This module contains pure matching logic with no I/O dependencies.
//! Loading the catalog from disk is abstracted through a port trait.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`ArnPattern`, `Catalog`, `ResourceMatch`)
//! - `services/` - The ARN matcher and the resource type resolver
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
