//! Wire records mirrored from the backend REST API.
//!
//! DESIGN
//! ======
//! These types intentionally mirror backend JSON payloads so serde round-trips
//! stay lossless. The client never owns authoritative state: every record is
//! fetched, displayed, edited, and resubmitted as a `*Draft`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// IDENTITY
// =============================================================================

/// Account role that selects the dashboard and the allowed actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Worker,
    Client,
}

impl Role {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Worker => "Worker",
            Self::Client => "Client",
        }
    }
}

/// The authenticated account as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Backend identifier of the account.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Dashboard role.
    pub role: Role,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Bearer token plus the account it belongs to, as returned by login.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

// =============================================================================
// PEOPLE
// =============================================================================

/// A customer of the gardening service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
}

/// Create/update payload for a [`Client`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientDraft {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub active: bool,
}

impl From<&Client> for ClientDraft {
    fn from(client: &Client) -> Self {
        Self {
            name: client.name.clone(),
            email: client.email.clone(),
            phone: client.phone.clone(),
            address: client.address.clone(),
            notes: client.notes.clone(),
            active: client.active,
        }
    }
}

/// A field worker who gets tasks assigned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// Free-form trade focus (e.g. `"irrigation"`, `"tree care"`).
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
}

/// Create/update payload for a [`Worker`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkerDraft {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub specialty: Option<String>,
    pub active: bool,
    /// Initial password; only sent on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl From<&Worker> for WorkerDraft {
    fn from(worker: &Worker) -> Self {
        Self {
            name: worker.name.clone(),
            email: worker.email.clone(),
            phone: worker.phone.clone(),
            specialty: worker.specialty.clone(),
            active: worker.active,
            password: None,
        }
    }
}

// =============================================================================
// SITES
// =============================================================================

/// A property maintained for a client. Sections subdivide it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub id: String,
    pub client_id: String,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// A named area of a site (front lawn, greenhouse, hedge row).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub site_id: String,
    pub name: String,
    /// Surface in square metres, if surveyed.
    #[serde(default)]
    pub area_sqm: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteDraft {
    pub client_id: String,
    pub name: String,
    pub address: String,
    pub notes: Option<String>,
}

impl From<&Site> for SiteDraft {
    fn from(site: &Site) -> Self {
        Self {
            client_id: site.client_id.clone(),
            name: site.name.clone(),
            address: site.address.clone(),
            notes: site.notes.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionDraft {
    pub name: String,
    pub area_sqm: Option<f64>,
    pub notes: Option<String>,
}

impl From<&Section> for SectionDraft {
    fn from(section: &Section) -> Self {
        Self { name: section.name.clone(), area_sqm: section.area_sqm, notes: section.notes.clone() }
    }
}

// =============================================================================
// TASKS
// =============================================================================

/// Lifecycle stage of a task. See `util::task_flow` for allowed transitions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    Assigned,
    InProgress,
    Completed,
    Verified,
    Cancelled,
}

impl TaskStatus {
    pub const ALL: [Self; 6] =
        [Self::Pending, Self::Assigned, Self::InProgress, Self::Completed, Self::Verified, Self::Cancelled];

    /// Wire name, also used as the `<select>` option value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Assigned => "assigned",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Verified => "verified",
            Self::Cancelled => "cancelled",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Assigned => "Assigned",
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
            Self::Verified => "Verified",
            Self::Cancelled => "Cancelled",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

/// Which photo array of a task an upload targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhotoKind {
    Before,
    After,
}

impl PhotoKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Before => "before",
            Self::After => "after",
        }
    }
}

/// An uploaded photo.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    pub url: String,
}

/// An image describing what the worker should produce, with how many
/// instances of it (plants, beds, trees) the task covers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReferenceImage {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default = "default_quantity", deserialize_with = "deserialize_i64_from_number")]
    pub quantity: i64,
}

/// A unit of work at a site, optionally narrowed to one section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub site_id: String,
    #[serde(default)]
    pub section_id: Option<String>,
    pub client_id: String,
    #[serde(default)]
    pub worker_id: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    /// ISO 8601 date the visit is planned for.
    #[serde(default)]
    pub scheduled_for: Option<String>,
    #[serde(default)]
    pub reference_images: Vec<ReferenceImage>,
    #[serde(default)]
    pub before_photos: Vec<Photo>,
    #[serde(default)]
    pub after_photos: Vec<Photo>,
    #[serde(default)]
    pub has_feedback: bool,
}

/// Create/update payload for a [`Task`]. Reference images are attached by
/// media id after upload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub site_id: String,
    pub section_id: Option<String>,
    pub worker_id: Option<String>,
    pub scheduled_for: Option<String>,
    #[serde(default)]
    pub reference_images: Vec<ReferenceImageDraft>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReferenceImageDraft {
    pub media_id: String,
    pub label: Option<String>,
    pub quantity: i64,
}

impl From<&Task> for TaskDraft {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            site_id: task.site_id.clone(),
            section_id: task.section_id.clone(),
            worker_id: task.worker_id.clone(),
            scheduled_for: task.scheduled_for.clone(),
            reference_images: task
                .reference_images
                .iter()
                .map(|r| ReferenceImageDraft { media_id: r.id.clone(), label: r.label.clone(), quantity: r.quantity })
                .collect(),
        }
    }
}

/// Server-side narrowing for `GET /tasks`. Unset fields are omitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub worker_id: Option<String>,
    pub client_id: Option<String>,
    pub site_id: Option<String>,
}

// =============================================================================
// INVENTORY
// =============================================================================

/// A stocked material or tool (mulch, fertiliser, trimmer line).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    /// Unit of measure shown next to quantities (`"bag"`, `"kg"`).
    pub unit: String,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub quantity: i64,
    /// At or below this level the item needs reordering.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub min_threshold: i64,
    #[serde(default, deserialize_with = "deserialize_opt_i64_from_number")]
    pub max_threshold: Option<i64>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryDraft {
    pub name: String,
    pub unit: String,
    pub quantity: i64,
    pub min_threshold: i64,
    pub max_threshold: Option<i64>,
    pub category: Option<String>,
}

impl From<&InventoryItem> for InventoryDraft {
    fn from(item: &InventoryItem) -> Self {
        Self {
            name: item.name.clone(),
            unit: item.unit.clone(),
            quantity: item.quantity,
            min_threshold: item.min_threshold,
            max_threshold: item.max_threshold,
            category: item.category.clone(),
        }
    }
}

/// Body of `POST /inventory/{id}/adjust`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockAdjustment {
    pub delta: i64,
    pub reason: String,
}

// =============================================================================
// NOTIFICATIONS + FEEDBACK + MEDIA
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub message: String,
    /// ISO 8601 timestamp.
    pub created_at: String,
    #[serde(default)]
    pub read: bool,
    /// In-app path the notification refers to (e.g. `/tasks/t-1`).
    #[serde(default)]
    pub link: Option<String>,
}

/// A client's rating of a finished task.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: String,
    pub task_id: String,
    pub client_id: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackDraft {
    pub task_id: String,
    pub rating: u8,
    pub comment: Option<String>,
}

/// Upload response for a stored file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaAsset {
    pub id: String,
    pub url: String,
}

// =============================================================================
// SERDE HELPERS
// =============================================================================

fn default_true() -> bool {
    true
}

fn default_quantity() -> i64 {
    1
}

fn deserialize_opt_i64_from_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(value) => i64_from_value(value).map(Some).map_err(D::Error::custom),
    }
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    i64_from_value(value).map_err(D::Error::custom)
}

fn i64_from_value(value: serde_json::Value) -> Result<i64, &'static str> {
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err("expected integer-compatible number")
        }
        _ => Err("expected number"),
    }
}
