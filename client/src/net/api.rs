//! Endpoint catalogue for the backend REST API.
//!
//! Each function is a direct pass-through to one backend operation. Paths are
//! built by small pure helpers so the contract is visible in one place and
//! covered by unit tests.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` instead of panics so fetch failures
//! degrade into toasts without crashing hydration.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::{Deserialize, Serialize};

use super::error::ApiError;
use super::http::{ApiClient, UploadBatch};
use super::types::{
    Client, ClientDraft, Feedback, FeedbackDraft, InventoryDraft, InventoryItem, MediaAsset, Notification, PhotoKind,
    Section, SectionDraft, Session, Site, SiteDraft, StockAdjustment, Task, TaskDraft, TaskFilter, TaskStatus, User,
    Worker, WorkerDraft,
};

// =============================================================================
// PATHS
// =============================================================================

fn client_path(id: &str) -> String {
    format!("clients/{id}")
}

fn worker_path(id: &str) -> String {
    format!("workers/{id}")
}

fn site_path(id: &str) -> String {
    format!("sites/{id}")
}

fn site_sections_path(site_id: &str) -> String {
    format!("sites/{site_id}/sections")
}

fn section_path(id: &str) -> String {
    format!("sections/{id}")
}

fn task_path(id: &str) -> String {
    format!("tasks/{id}")
}

fn task_assign_path(id: &str) -> String {
    format!("tasks/{id}/assign")
}

fn task_status_path(id: &str) -> String {
    format!("tasks/{id}/status")
}

fn task_photos_path(id: &str) -> String {
    format!("tasks/{id}/photos")
}

fn inventory_path(id: &str) -> String {
    format!("inventory/{id}")
}

fn inventory_adjust_path(id: &str) -> String {
    format!("inventory/{id}/adjust")
}

fn notification_read_path(id: &str) -> String {
    format!("notifications/{id}/read")
}

fn task_filter_query(filter: &TaskFilter) -> Vec<(&'static str, String)> {
    vec![
        ("status", filter.status.map(|s| s.as_str().to_owned()).unwrap_or_default()),
        ("worker_id", filter.worker_id.clone().unwrap_or_default()),
        ("client_id", filter.client_id.clone().unwrap_or_default()),
        ("site_id", filter.site_id.clone().unwrap_or_default()),
    ]
}

// =============================================================================
// AUTH
// =============================================================================

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Exchange credentials for a session via `POST /auth/login`.
///
/// # Errors
///
/// `ApiError::Unauthorized` or `Validation` for bad credentials; transport
/// and decode errors otherwise.
pub async fn login(api: &ApiClient, email: &str, password: &str) -> Result<Session, ApiError> {
    api.post("auth/login", &LoginRequest { email, password }).await
}

/// Fetch the account behind the current token via `GET /auth/me`.
///
/// # Errors
///
/// `ApiError::Unauthorized` when the token is missing or expired.
pub async fn me(api: &ApiClient) -> Result<User, ApiError> {
    api.get("auth/me").await
}

/// Invalidate the token server-side. Best-effort: callers clear local state
/// regardless of the outcome.
pub async fn logout(api: &ApiClient) {
    let _ = api.post_empty("auth/logout", &serde_json::json!({})).await;
}

// =============================================================================
// CLIENTS
// =============================================================================

/// # Errors
///
/// Any `ApiError` from the request.
pub async fn list_clients(api: &ApiClient) -> Result<Vec<Client>, ApiError> {
    api.get("clients").await
}

/// # Errors
///
/// `ApiError::NotFound` for unknown ids; other request errors.
pub async fn get_client(api: &ApiClient, id: &str) -> Result<Client, ApiError> {
    api.get(&client_path(id)).await
}

/// # Errors
///
/// `ApiError::Validation` when the backend rejects the draft.
pub async fn create_client(api: &ApiClient, draft: &ClientDraft) -> Result<Client, ApiError> {
    api.post("clients", draft).await
}

/// # Errors
///
/// `ApiError::Validation` when the backend rejects the draft.
pub async fn update_client(api: &ApiClient, id: &str, draft: &ClientDraft) -> Result<Client, ApiError> {
    api.put(&client_path(id), draft).await
}

/// # Errors
///
/// Any `ApiError` from the request.
pub async fn delete_client(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete(&client_path(id)).await
}

// =============================================================================
// WORKERS
// =============================================================================

/// # Errors
///
/// Any `ApiError` from the request.
pub async fn list_workers(api: &ApiClient) -> Result<Vec<Worker>, ApiError> {
    api.get("workers").await
}

/// # Errors
///
/// `ApiError::NotFound` for unknown ids; other request errors.
pub async fn get_worker(api: &ApiClient, id: &str) -> Result<Worker, ApiError> {
    api.get(&worker_path(id)).await
}

/// # Errors
///
/// `ApiError::Validation` when the backend rejects the draft.
pub async fn create_worker(api: &ApiClient, draft: &WorkerDraft) -> Result<Worker, ApiError> {
    api.post("workers", draft).await
}

/// # Errors
///
/// `ApiError::Validation` when the backend rejects the draft.
pub async fn update_worker(api: &ApiClient, id: &str, draft: &WorkerDraft) -> Result<Worker, ApiError> {
    api.put(&worker_path(id), draft).await
}

/// # Errors
///
/// Any `ApiError` from the request.
pub async fn delete_worker(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete(&worker_path(id)).await
}

// =============================================================================
// SITES + SECTIONS
// =============================================================================

/// List sites, optionally only those of one client.
///
/// # Errors
///
/// Any `ApiError` from the request.
pub async fn list_sites(api: &ApiClient, client_id: Option<&str>) -> Result<Vec<Site>, ApiError> {
    api.get_with_query("sites", &[("client_id", client_id.unwrap_or_default().to_owned())])
        .await
}

/// Fetch one site with its sections.
///
/// # Errors
///
/// `ApiError::NotFound` for unknown ids; other request errors.
pub async fn get_site(api: &ApiClient, id: &str) -> Result<Site, ApiError> {
    api.get(&site_path(id)).await
}

/// # Errors
///
/// `ApiError::Validation` when the backend rejects the draft.
pub async fn create_site(api: &ApiClient, draft: &SiteDraft) -> Result<Site, ApiError> {
    api.post("sites", draft).await
}

/// # Errors
///
/// `ApiError::Validation` when the backend rejects the draft.
pub async fn update_site(api: &ApiClient, id: &str, draft: &SiteDraft) -> Result<Site, ApiError> {
    api.put(&site_path(id), draft).await
}

/// # Errors
///
/// Any `ApiError` from the request.
pub async fn delete_site(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete(&site_path(id)).await
}

/// # Errors
///
/// `ApiError::Validation` when the backend rejects the draft.
pub async fn create_section(api: &ApiClient, site_id: &str, draft: &SectionDraft) -> Result<Section, ApiError> {
    api.post(&site_sections_path(site_id), draft).await
}

/// # Errors
///
/// `ApiError::Validation` when the backend rejects the draft.
pub async fn update_section(api: &ApiClient, id: &str, draft: &SectionDraft) -> Result<Section, ApiError> {
    api.put(&section_path(id), draft).await
}

/// # Errors
///
/// Any `ApiError` from the request.
pub async fn delete_section(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete(&section_path(id)).await
}

// =============================================================================
// TASKS
// =============================================================================

#[derive(Serialize)]
struct AssignRequest<'a> {
    worker_id: &'a str,
}

#[derive(Serialize)]
struct StatusRequest {
    status: TaskStatus,
}

/// # Errors
///
/// Any `ApiError` from the request.
pub async fn list_tasks(api: &ApiClient, filter: &TaskFilter) -> Result<Vec<Task>, ApiError> {
    api.get_with_query("tasks", &task_filter_query(filter)).await
}

/// # Errors
///
/// `ApiError::NotFound` for unknown ids; other request errors.
pub async fn get_task(api: &ApiClient, id: &str) -> Result<Task, ApiError> {
    api.get(&task_path(id)).await
}

/// # Errors
///
/// `ApiError::Validation` when the backend rejects the draft.
pub async fn create_task(api: &ApiClient, draft: &TaskDraft) -> Result<Task, ApiError> {
    api.post("tasks", draft).await
}

/// # Errors
///
/// `ApiError::Validation` when the backend rejects the draft.
pub async fn update_task(api: &ApiClient, id: &str, draft: &TaskDraft) -> Result<Task, ApiError> {
    api.put(&task_path(id), draft).await
}

/// # Errors
///
/// Any `ApiError` from the request.
pub async fn delete_task(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete(&task_path(id)).await
}

/// Assign a worker; the backend moves the task to `assigned`.
///
/// # Errors
///
/// `ApiError::Validation` or `Status` (409) when the task cannot be assigned.
pub async fn assign_task(api: &ApiClient, id: &str, worker_id: &str) -> Result<Task, ApiError> {
    api.post(&task_assign_path(id), &AssignRequest { worker_id }).await
}

/// Move a task to `status`.
///
/// # Errors
///
/// `ApiError::Validation` or `Status` (409) when the transition is refused.
pub async fn set_task_status(api: &ApiClient, id: &str, status: TaskStatus) -> Result<Task, ApiError> {
    api.post(&task_status_path(id), &StatusRequest { status }).await
}

/// Upload before or after photos; returns the updated task.
///
/// # Errors
///
/// Any `ApiError` from the upload.
pub async fn upload_task_photos(api: &ApiClient, id: &str, kind: PhotoKind, batch: &UploadBatch) -> Result<Task, ApiError> {
    api.upload(&task_photos_path(id), kind.as_str(), batch).await
}

// =============================================================================
// INVENTORY
// =============================================================================

/// # Errors
///
/// Any `ApiError` from the request.
pub async fn list_inventory(api: &ApiClient) -> Result<Vec<InventoryItem>, ApiError> {
    api.get("inventory").await
}

/// # Errors
///
/// `ApiError::Validation` when the backend rejects the draft.
pub async fn create_inventory_item(api: &ApiClient, draft: &InventoryDraft) -> Result<InventoryItem, ApiError> {
    api.post("inventory", draft).await
}

/// # Errors
///
/// `ApiError::Validation` when the backend rejects the draft.
pub async fn update_inventory_item(api: &ApiClient, id: &str, draft: &InventoryDraft) -> Result<InventoryItem, ApiError> {
    api.put(&inventory_path(id), draft).await
}

/// # Errors
///
/// Any `ApiError` from the request.
pub async fn delete_inventory_item(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete(&inventory_path(id)).await
}

/// Add (positive) or remove (negative) stock with a reason for the ledger.
///
/// # Errors
///
/// `ApiError::Validation` when the backend refuses the adjustment.
pub async fn adjust_stock(api: &ApiClient, id: &str, delta: i64, reason: &str) -> Result<InventoryItem, ApiError> {
    let body = StockAdjustment { delta, reason: reason.to_owned() };
    api.post(&inventory_adjust_path(id), &body).await
}

// =============================================================================
// NOTIFICATIONS
// =============================================================================

/// # Errors
///
/// Any `ApiError` from the request.
pub async fn list_notifications(api: &ApiClient) -> Result<Vec<Notification>, ApiError> {
    api.get("notifications").await
}

/// # Errors
///
/// Any `ApiError` from the request.
pub async fn mark_notification_read(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.post_empty(&notification_read_path(id), &serde_json::json!({})).await
}

/// # Errors
///
/// Any `ApiError` from the request.
pub async fn mark_all_notifications_read(api: &ApiClient) -> Result<(), ApiError> {
    api.post_empty("notifications/read-all", &serde_json::json!({})).await
}

// =============================================================================
// FEEDBACK
// =============================================================================

/// # Errors
///
/// Any `ApiError` from the request.
pub async fn list_feedback(api: &ApiClient) -> Result<Vec<Feedback>, ApiError> {
    api.get("feedback").await
}

/// # Errors
///
/// `ApiError::Validation` when the task already has feedback or the rating is refused.
pub async fn submit_feedback(
    api: &ApiClient,
    task_id: &str,
    rating: u8,
    comment: Option<String>,
) -> Result<Feedback, ApiError> {
    let draft = FeedbackDraft { task_id: task_id.to_owned(), rating, comment };
    api.post("feedback", &draft).await
}

// =============================================================================
// MEDIA
// =============================================================================

#[derive(Deserialize)]
struct MediaUploadResponse {
    items: Vec<MediaAsset>,
}

/// Store files (task reference images) and return their media records.
///
/// # Errors
///
/// Any `ApiError` from the upload.
pub async fn upload_media(api: &ApiClient, batch: &UploadBatch) -> Result<Vec<MediaAsset>, ApiError> {
    let resp: MediaUploadResponse = api.upload("media", "reference", batch).await?;
    Ok(resp.items)
}
