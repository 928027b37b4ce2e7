//! Task lifecycle rules per role.
//!
//! DESIGN
//! ======
//! The backend enforces transitions; these rules only decide which buttons a
//! page offers so users are not shown actions that will be refused.
//! `verified` and `cancelled` are final. Moving `pending` to `assigned`
//! happens only through worker assignment, never as a bare status change.

#[cfg(test)]
#[path = "task_flow_test.rs"]
mod task_flow_test;

use crate::net::types::{PhotoKind, Role, Task, TaskStatus};
use crate::util::photo_slots::split_photos;

/// A status change a user can trigger from the task page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TaskAction {
    Start,
    Complete,
    Verify,
    Reopen,
    Cancel,
}

impl TaskAction {
    pub const ALL: [Self; 5] = [Self::Start, Self::Complete, Self::Verify, Self::Reopen, Self::Cancel];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Start => "Start work",
            Self::Complete => "Mark completed",
            Self::Verify => "Verify",
            Self::Reopen => "Reopen",
            Self::Cancel => "Cancel task",
        }
    }

    #[must_use]
    pub fn target(self) -> TaskStatus {
        match self {
            Self::Start | Self::Reopen => TaskStatus::InProgress,
            Self::Complete => TaskStatus::Completed,
            Self::Verify => TaskStatus::Verified,
            Self::Cancel => TaskStatus::Cancelled,
        }
    }

    /// Actions that ask for confirmation first.
    #[must_use]
    pub fn needs_confirmation(self) -> bool {
        matches!(self, Self::Cancel | Self::Reopen)
    }

    fn source_statuses(self) -> &'static [TaskStatus] {
        match self {
            Self::Start => &[TaskStatus::Assigned],
            Self::Complete => &[TaskStatus::InProgress],
            Self::Verify | Self::Reopen => &[TaskStatus::Completed],
            Self::Cancel => &[TaskStatus::Pending, TaskStatus::Assigned, TaskStatus::InProgress, TaskStatus::Completed],
        }
    }

    fn allowed_role(self) -> Role {
        match self {
            Self::Start | Self::Complete => Role::Worker,
            Self::Verify | Self::Reopen | Self::Cancel => Role::Admin,
        }
    }
}

#[must_use]
pub fn is_final(status: TaskStatus) -> bool {
    matches!(status, TaskStatus::Verified | TaskStatus::Cancelled)
}

/// Work still to be done: pending, assigned, or in progress.
#[must_use]
pub fn is_open(status: TaskStatus) -> bool {
    matches!(status, TaskStatus::Pending | TaskStatus::Assigned | TaskStatus::InProgress)
}

/// Whether `role` may move `task` to `to` with a status change right now.
/// Completion also needs the after-photo slots filled.
#[must_use]
pub fn can_transition(task: &Task, role: Role, to: TaskStatus) -> bool {
    available_actions(task, role)
        .into_iter()
        .any(|action| action.target() == to && action_blocker(task, action).is_none())
}

/// Actions `role` may take on `task`, in display order.
#[must_use]
pub fn available_actions(task: &Task, role: Role) -> Vec<TaskAction> {
    TaskAction::ALL
        .into_iter()
        .filter(|action| action.allowed_role() == role && action.source_statuses().contains(&task.status))
        .collect()
}

/// Why an otherwise available action cannot run yet, if it cannot.
#[must_use]
pub fn action_blocker(task: &Task, action: TaskAction) -> Option<String> {
    if action != TaskAction::Complete {
        return None;
    }
    if task.reference_images.is_empty() {
        return task.after_photos.is_empty().then(|| "Upload at least one after photo.".to_owned());
    }
    let missing = split_photos(&task.after_photos, &task.reference_images).total_missing();
    match missing {
        0 => None,
        1 => Some("Upload 1 more after photo.".to_owned()),
        n => Some(format!("Upload {n} more after photos.")),
    }
}

/// Admins assign or reassign until work has started.
#[must_use]
pub fn can_assign(role: Role, status: TaskStatus) -> bool {
    role == Role::Admin && matches!(status, TaskStatus::Pending | TaskStatus::Assigned)
}

/// Workers add before photos before and during work, after photos during work.
#[must_use]
pub fn can_upload_photos(role: Role, status: TaskStatus, kind: PhotoKind) -> bool {
    if role != Role::Worker {
        return false;
    }
    match kind {
        PhotoKind::Before => matches!(status, TaskStatus::Assigned | TaskStatus::InProgress),
        PhotoKind::After => status == TaskStatus::InProgress,
    }
}

/// Clients rate finished work once.
#[must_use]
pub fn can_leave_feedback(task: &Task, role: Role) -> bool {
    role == Role::Client
        && !task.has_feedback
        && matches!(task.status, TaskStatus::Completed | TaskStatus::Verified)
}

/// A worker's tasks bucketed for the worker dashboard.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorkerBoard {
    pub to_start: Vec<Task>,
    pub in_progress: Vec<Task>,
    pub done: Vec<Task>,
}

/// Bucket tasks by status; each bucket is sorted by scheduled date, undated last.
#[must_use]
pub fn worker_board(tasks: &[Task]) -> WorkerBoard {
    let mut board = WorkerBoard::default();
    for task in tasks {
        match task.status {
            TaskStatus::Assigned => board.to_start.push(task.clone()),
            TaskStatus::InProgress => board.in_progress.push(task.clone()),
            TaskStatus::Completed | TaskStatus::Verified => board.done.push(task.clone()),
            TaskStatus::Pending | TaskStatus::Cancelled => {}
        }
    }
    for bucket in [&mut board.to_start, &mut board.in_progress, &mut board.done] {
        sort_by_schedule(bucket);
    }
    board
}

/// Sort by `scheduled_for` ascending; undated tasks go last.
pub fn sort_by_schedule(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| match (&a.scheduled_for, &b.scheduled_for) {
        (Some(x), Some(y)) => x.cmp(y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.title.cmp(&b.title),
    });
}

/// Share of tasks that are completed or verified, as a whole percentage.
#[must_use]
pub fn completion_percent(tasks: &[Task]) -> u8 {
    let relevant: Vec<&Task> = tasks.iter().filter(|t| t.status != TaskStatus::Cancelled).collect();
    if relevant.is_empty() {
        return 0;
    }
    let done = relevant
        .iter()
        .filter(|t| matches!(t.status, TaskStatus::Completed | TaskStatus::Verified))
        .count();
    u8::try_from(done * 100 / relevant.len()).unwrap_or(100)
}
