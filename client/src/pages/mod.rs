//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetch, mutate, dialogs) and
//! delegates rendering details to `components` and decisions to `util`.

pub mod admin_dashboard;
pub mod client_dashboard;
pub mod clients;
pub mod feedback;
pub mod inventory;
pub(crate) mod loader;
pub mod login;
pub mod notifications;
pub mod root;
pub mod site_detail;
pub mod sites;
pub mod task_detail;
pub mod tasks;
pub mod worker_dashboard;
pub mod workers;
