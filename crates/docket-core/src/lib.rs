//! docket-core
//!
//! The task storage and mutation engine behind docket: identity generation,
//! record lifetime, partial-update semantics, and consistency of the
//! in-memory record set.
//!
//! # Module map
//! - **domain**: domain model (TaskId, Task, TaskStatus, TaskUpdate, errors)
//! - **store**: record store port + in-memory implementation
//! - **service**: TaskService (validation, id assignment, update merging)
//!
//! The crate is protocol-agnostic: a request-handling layer decodes wire
//! input into the domain types, calls the five `TaskService` operations, and
//! maps `DocketError` back out (`NotFound` -> not-found response,
//! `Validation` -> client error naming the field).

pub mod domain;
pub mod service;
pub mod store;
