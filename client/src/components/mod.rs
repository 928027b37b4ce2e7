//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (navigation, toasts, list controls,
//! badges, dialogs, photo widgets) while reading shared state from Leptos
//! context providers.

pub mod confirm_dialog;
pub mod form_dialog;
pub mod form_field;
pub mod list_controls;
pub mod nav_bar;
pub mod page_frame;
pub mod photo_slots_view;
pub mod photo_upload;
pub mod stat_card;
pub mod status_badge;
pub mod task_card;
pub mod toast_stack;
