use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{ExecutionError, Task, TaskId};
use crate::selection::TemplateSelector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutomationDifficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy)]
pub struct AutomationTemplate {
    pub suggestion: &'static str,
    pub tools: &'static [&'static str],
    /// Share of the task's estimated time the template saves.
    pub savings_fraction: f64,
    pub difficulty: AutomationDifficulty,
}

pub const AUTOMATION_TEMPLATES: [AutomationTemplate; 3] = [
    AutomationTemplate {
        suggestion: "Script the repetitive steps",
        tools: &["Python script", "Batch file", "Shell script"],
        savings_fraction: 0.7,
        difficulty: AutomationDifficulty::Medium,
    },
    AutomationTemplate {
        suggestion: "Set up an automated workflow",
        tools: &["Zapier", "IFTTT", "Microsoft Power Automate"],
        savings_fraction: 0.8,
        difficulty: AutomationDifficulty::Easy,
    },
    AutomationTemplate {
        suggestion: "Use AI tools to assist with the work",
        tools: &["ChatGPT", "Claude", "Specialist AI tools"],
        savings_fraction: 0.6,
        difficulty: AutomationDifficulty::Easy,
    },
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutomationSuggestion {
    pub task_id: TaskId,
    pub suggestion: String,
    pub tools: Vec<String>,
    pub times_saved: u32,
    pub difficulty: AutomationDifficulty,
}

impl AutomationTemplate {
    pub fn apply(&self, task: &Task) -> AutomationSuggestion {
        AutomationSuggestion {
            task_id: task.id.clone(),
            suggestion: self.suggestion.to_string(),
            tools: self.tools.iter().map(|tool| (*tool).to_string()).collect(),
            times_saved: (f64::from(task.estimated_time) * self.savings_fraction).floor() as u32,
            difficulty: self.difficulty,
        }
    }
}

/// One suggestion per task, regenerated from scratch on every call.
pub fn suggest_automations<S>(
    tasks: &[Task],
    selector: &mut S,
) -> Result<Vec<AutomationSuggestion>, ExecutionError>
where
    S: TemplateSelector + ?Sized,
{
    if tasks.is_empty() {
        return Err(ExecutionError::NoTasks);
    }

    let suggestions: Vec<AutomationSuggestion> = tasks
        .iter()
        .map(|task| {
            let index = selector.select(AUTOMATION_TEMPLATES.len());
            AUTOMATION_TEMPLATES[index % AUTOMATION_TEMPLATES.len()].apply(task)
        })
        .collect();

    debug!(
        tasks = tasks.len(),
        minutes_saved = total_time_saved(&suggestions),
        "generated automation suggestions"
    );
    Ok(suggestions)
}

/// Total minutes saved, summed in `u64`.
pub fn total_time_saved(suggestions: &[AutomationSuggestion]) -> u64 {
    suggestions
        .iter()
        .map(|suggestion| u64::from(suggestion.times_saved))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{CyclingSelector, FixedSelector};
    use crate::workflows::execution::domain::TaskStatus;
    use crate::workflows::Priority;

    fn task(id: &str, estimated_time: u32) -> Task {
        Task {
            id: TaskId(id.to_string()),
            title: format!("Task {id}"),
            description: "recurring".to_string(),
            priority: Priority::Medium,
            category: "ops".to_string(),
            estimated_time,
            status: TaskStatus::Pending,
            automation_level: 0,
            dependencies: Vec::new(),
        }
    }

    #[test]
    fn savings_are_floored_template_fractions() {
        let tasks = vec![task("a", 45), task("b", 45), task("c", 45)];
        let suggestions =
            suggest_automations(&tasks, &mut CyclingSelector::default()).expect("tasks present");

        let saved: Vec<u32> = suggestions.iter().map(|s| s.times_saved).collect();
        // 31.5, 36, 27
        assert_eq!(saved, vec![31, 36, 27]);
        assert_eq!(total_time_saved(&suggestions), 94);
        assert_eq!(suggestions[1].difficulty, AutomationDifficulty::Easy);
        assert_eq!(suggestions[0].tools.len(), 3);
    }

    #[test]
    fn fixed_selector_is_reproducible() {
        let tasks = vec![task("a", 10), task("b", 0)];
        let first = suggest_automations(&tasks, &mut FixedSelector(1)).expect("tasks present");
        let second = suggest_automations(&tasks, &mut FixedSelector(1)).expect("tasks present");

        assert_eq!(first, second);
        assert_eq!(first[0].task_id, TaskId("a".to_string()));
        assert_eq!(first[0].times_saved, 8);
        assert_eq!(first[1].times_saved, 0);
    }

    #[test]
    fn totals_do_not_overflow_on_large_estimates() {
        let tasks = vec![task("a", 4_000_000_000), task("b", 4_000_000_000)];
        let suggestions =
            suggest_automations(&tasks, &mut FixedSelector(1)).expect("tasks present");

        // 0.8 of each estimate
        assert_eq!(suggestions[0].times_saved, 3_200_000_000);
        assert_eq!(total_time_saved(&suggestions), 6_400_000_000);
    }

    #[test]
    fn empty_task_list_is_rejected() {
        assert_eq!(
            suggest_automations(&[], &mut FixedSelector(0)),
            Err(ExecutionError::NoTasks)
        );
    }
}
