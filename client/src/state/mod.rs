//! Reactive application state provided through Leptos context.
//!
//! DESIGN
//! ======
//! Each module holds a plain struct wrapped in `RwSignal` by `App`. Session,
//! toast, and notification state are separated so pages can depend on only
//! what they render.

pub mod auth;
pub mod notifications;
pub mod ui;
