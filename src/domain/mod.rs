//! # Domain Layer
//!
//! Core reference-data model following Domain-Driven Design principles.
//!
//! This layer contains:
//! - **Beans**: generic runtime for immutable value objects with named
//!   properties and validating builders
//! - **Value Objects**: validated primitives (Currency, RedCode, SeniorityLevel)
//! - **Reference**: the reference-information abstraction and its variants
//! - **Errors**: domain-specific error types

pub mod beans;
pub mod errors;
pub mod reference;
pub mod value_objects;
