use serde::{Deserialize, Serialize};
use std::fmt;

use crate::workflows::Priority;

/// Automation level recorded when a suggestion is put into practice.
pub const IMPLEMENTED_AUTOMATION_LEVEL: u8 = 80;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub String);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Automated,
}

impl TaskStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Automated => "Automated",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub category: String,
    pub estimated_time: u32,
    #[serde(default)]
    pub status: TaskStatus,
    /// Percentage delegated to tooling.
    #[serde(default)]
    pub automation_level: u8,
    #[serde(default)]
    pub dependencies: Vec<TaskId>,
}

/// Form input for a task that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub estimated_time: u32,
}

/// Ordered task list with the one-way pending to automated transition.
#[derive(Debug, Clone, Default)]
pub struct TaskBoard {
    tasks: Vec<Task>,
    sequence: u64,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, task: NewTask) -> Result<&Task, ExecutionError> {
        if task.title.trim().is_empty() {
            return Err(ExecutionError::MissingField("title"));
        }
        if task.description.trim().is_empty() {
            return Err(ExecutionError::MissingField("description"));
        }

        self.sequence += 1;
        self.tasks.push(Task {
            id: TaskId(format!("task-{:04}", self.sequence)),
            title: task.title,
            description: task.description,
            priority: task.priority,
            category: task.category,
            estimated_time: task.estimated_time,
            status: TaskStatus::Pending,
            automation_level: 0,
            dependencies: Vec::new(),
        });
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    /// Mark a pending task as automated. There is no way back.
    pub fn implement_automation(&mut self, id: &TaskId) -> Result<&Task, ExecutionError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| &task.id == id)
            .ok_or_else(|| ExecutionError::TaskNotFound(id.clone()))?;

        if task.status != TaskStatus::Pending {
            return Err(ExecutionError::InvalidTransition {
                task: id.clone(),
                from: task.status,
            });
        }

        task.status = TaskStatus::Automated;
        task.automation_level = IMPLEMENTED_AUTOMATION_LEVEL;
        Ok(task)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    #[error("add some tasks before analysing automation opportunities")]
    NoTasks,
    #[error("task field '{0}' must not be empty")]
    MissingField(&'static str),
    #[error("task {0} not found")]
    TaskNotFound(TaskId),
    #[error("task {task} is {from:?}; only pending tasks can be automated")]
    InvalidTransition { task: TaskId, from: TaskStatus },
}
