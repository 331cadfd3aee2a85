//! Task list management.
//!
//! The list owns every task. The timer refers to the current task only by
//! [`TaskId`], so all lookups go through here.

use serde::{Deserialize, Serialize};

/// Identifier of a task, assigned in creation order starting at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Trimmed, never empty
    pub text: String,
    pub completed: bool,
    pub selected: bool,
}

/// Ordered collection of tasks.
///
/// At most one task is selected at any time, and a selected task is never
/// completed.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskList {
    /// Create an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 0,
        }
    }

    /// Append a task.
    ///
    /// Returns `None` without changing anything when `text` is blank.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            text: text.to_string(),
            completed: false,
            selected: false,
        });
        Some(id)
    }

    /// Deselect everything, then select `id` if it exists and is still open.
    ///
    /// Returns the id that ended up selected.
    pub fn select(&mut self, id: TaskId) -> Option<TaskId> {
        for task in &mut self.tasks {
            task.selected = false;
        }

        let task = self.get_mut(id).filter(|t| !t.completed)?;
        task.selected = true;
        Some(task.id)
    }

    /// Flip the completion flag of `id`.
    ///
    /// Returns the new completion state, or `None` if no such task exists.
    pub fn toggle(&mut self, id: TaskId) -> Option<bool> {
        let task = self.get_mut(id)?;
        task.completed = !task.completed;
        if task.completed {
            task.selected = false;
        }
        Some(task.completed)
    }

    /// Mark `id` completed.
    ///
    /// Returns true if the task existed and was still open.
    pub fn complete(&mut self, id: TaskId) -> bool {
        match self.get_mut(id) {
            Some(task) if !task.completed => {
                task.completed = true;
                task.selected = false;
                true
            }
            _ => false,
        }
    }

    /// Remove `id`, keeping the order of the remaining tasks.
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(index))
    }

    /// Get a task by id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// The selected task, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&Task> {
        self.tasks.iter().find(|t| t.selected)
    }

    /// Tasks in list order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of tasks not yet completed.
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }
}
