//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` wraps request plumbing (base URL, bearer token, status mapping),
//! `api` lists one function per backend operation, `error` defines the shared
//! failure type, and `types` mirrors the backend's JSON records.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
