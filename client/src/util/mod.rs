//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns and pure view logic (filtering,
//! stock thresholds, photo slots, task rules) from page and component code to
//! improve reuse and testability.

pub mod auth;
pub mod format;
pub mod forms;
pub mod listing;
pub mod photo_slots;
pub mod stock;
pub mod storage;
pub mod task_flow;
