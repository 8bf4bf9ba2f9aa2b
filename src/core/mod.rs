//! Core domain logic for duet
//!
//! This module contains the business logic of every component pair.
//! Consumers depend on their collaborators only through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Records held by collaborators and returned to callers
//! - `ports/` - One trait per collaborator
//! - `services/` - The consumers, generic over their port

pub mod models;
pub mod ports;
pub mod services;
