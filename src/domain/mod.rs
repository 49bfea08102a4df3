//! Domain Layer
//!
//! The core of Stackpilot - descriptors, rules and ports without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Resource descriptors (BuildArtifact, DeploymentParameters, Inventory)
//! - `value_objects/` - Immutable value types (ResourceCategory, StackStatus, NameFilters)
//! - `policies/` - Business rules (reserved template keys)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never spawns processes or touches the network
//! 2. **Ports & Adapters** - All external tools go through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod value_objects;
