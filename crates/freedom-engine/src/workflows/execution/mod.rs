//! Task tracking and automation suggestions.

mod automation;
mod domain;
mod importer;

pub use automation::{
    suggest_automations, total_time_saved, AutomationDifficulty, AutomationSuggestion,
    AutomationTemplate, AUTOMATION_TEMPLATES,
};
pub use domain::{
    ExecutionError, NewTask, Task, TaskBoard, TaskId, TaskStatus, IMPLEMENTED_AUTOMATION_LEVEL,
};
pub use importer::{TaskImportError, TaskImporter};
