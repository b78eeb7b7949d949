//! `statefeed-core` — entity snapshots held by the cluster state store.
//!
//! This crate contains **pure data** (no storage, no eventing). Each type here is
//! an immutable row snapshot as committed by a write transaction; the store shares
//! rows behind `Arc`, so nothing in this crate mutates in place.

pub mod acl;
pub mod alloc;
pub mod deployment;
pub mod entity;
pub mod error;
pub mod eval;
pub mod job;
pub mod node;
pub mod service;

pub use acl::{AclPolicy, AclToken, AclTokenType, AuthMethod};
pub use alloc::{AllocClientStatus, AllocDesiredStatus, Allocation};
pub use deployment::{Deployment, DeploymentStatus};
pub use entity::{Entity, Namespaced};
pub use error::{DomainError, DomainResult};
pub use eval::{EvalStatus, Evaluation};
pub use job::{Job, JobType, Task, TaskGroup};
pub use node::{Node, NodeEvent, NodeStatus, SchedulingEligibility};
pub use service::ServiceRegistration;
