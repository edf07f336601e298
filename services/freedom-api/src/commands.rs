use crate::infra::{parse_answer, parse_date, parse_option, parse_priority};
use chrono::NaiveDate;
use clap::Args;
use freedom_engine::error::AppError;
use freedom_engine::selection::RandomSelector;
use freedom_engine::workflows::assessment::{
    score_answers, AnswerSheet, AssessmentInsights, AssessmentScores, Questionnaire,
};
use freedom_engine::workflows::decision::{recommend, DecisionBoard, DecisionOption};
use freedom_engine::workflows::execution::{
    suggest_automations, total_time_saved, AutomationSuggestion, Task, TaskBoard, TaskId,
    TaskImporter,
};
use freedom_engine::workflows::learning::{synthesize, LearningPath, Skill};
use freedom_engine::workflows::Priority;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct AssessArgs {
    /// Answer as <category>_<index>=<score>; repeat for each question
    #[arg(long = "answer", value_parser = parse_answer)]
    pub(crate) answers: Vec<(String, u8)>,
    /// JSON file holding an answer map, merged before --answer flags
    #[arg(long)]
    pub(crate) answers_file: Option<PathBuf>,
    /// Print JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DecideArgs {
    /// Option as name|description|risk|return|hours|probability; give at least two
    #[arg(long = "option", value_parser = parse_option)]
    pub(crate) options: Vec<DecisionOption>,
    /// Print JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct AutomateArgs {
    /// CSV export with Title,Description,Priority,Category,Estimated Time columns
    #[arg(long)]
    pub(crate) tasks_csv: PathBuf,
    /// Seed for template selection; random when omitted
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Mark these task ids as automated after suggesting
    #[arg(long = "implement")]
    pub(crate) implement: Vec<String>,
    /// Print JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct LearnArgs {
    /// Skill to learn
    #[arg(long)]
    pub(crate) skill: String,
    /// Skill category, e.g. programming
    #[arg(long, default_value = "")]
    pub(crate) category: String,
    /// Current level from 1 to 10
    #[arg(long)]
    pub(crate) current: u8,
    /// Target level from 1 to 10
    #[arg(long)]
    pub(crate) target: u8,
    /// high, medium, or low
    #[arg(long, value_parser = parse_priority, default_value = "medium")]
    pub(crate) priority: Priority,
    /// Market demand from 1 to 10
    #[arg(long, default_value_t = 5)]
    pub(crate) market_demand: u8,
    /// Date the plan starts (YYYY-MM-DD); milestones stay undated without it
    #[arg(long, value_parser = parse_date)]
    pub(crate) starts_on: Option<NaiveDate>,
    /// Seed for the career impact pick; random when omitted
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Print JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        answers,
        answers_file,
        json,
    } = args;

    let mut pairs: BTreeMap<String, u8> = match answers_file {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            serde_json::from_str(&raw).map_err(std::io::Error::from)?
        }
        None => BTreeMap::new(),
    };
    pairs.extend(answers);

    let questionnaire = Questionnaire::standard();
    let sheet = AnswerSheet::from_pairs(pairs);
    let scores = score_answers(&questionnaire, &sheet)?;
    let insights = scores.insights();

    if json {
        return print_json(&AssessmentOutput {
            scores: &scores,
            insights: &insights,
        });
    }
    render_assessment(&questionnaire, &scores, &insights);
    Ok(())
}

pub(crate) fn run_decide(args: DecideArgs) -> Result<(), AppError> {
    let mut board = DecisionBoard::new();
    for option in args.options {
        board.add(option)?;
    }

    let recommendation = recommend(board.options())?;
    if args.json {
        return print_json(&recommendation);
    }

    println!(
        "Recommended: {} (confidence {:.0}%)",
        recommendation.recommended_option,
        recommendation.confidence_score * 100.0
    );
    println!("{}", recommendation.reasoning);
    println!("{}", recommendation.risk_analysis);
    println!("\nRanking");
    for (position, scored) in recommendation.ranking.iter().enumerate() {
        println!("  {}. {} ({:.2})", position + 1, scored.name, scored.score);
    }
    println!("\nAction plan");
    for step in &recommendation.action_plan {
        println!("  {step}");
    }
    println!("\nSuccess metrics");
    for metric in &recommendation.success_metrics {
        println!("  - {metric}");
    }
    println!("\n{}", recommendation.fallback_plan);
    Ok(())
}

pub(crate) fn run_automate(args: AutomateArgs) -> Result<(), AppError> {
    let AutomateArgs {
        tasks_csv,
        seed,
        implement,
        json,
    } = args;

    let mut board = TaskImporter::from_path(tasks_csv)?;
    let suggestions = suggest_automations(
        board.tasks(),
        &mut RandomSelector::from_optional_seed(seed),
    )?;
    for id in implement {
        board.implement_automation(&TaskId(id))?;
    }

    if json {
        return print_json(&AutomationOutput {
            suggestions: &suggestions,
            total_time_saved: total_time_saved(&suggestions),
            tasks: board.tasks(),
        });
    }
    render_automation(&board, &suggestions);
    Ok(())
}

pub(crate) fn run_learn(args: LearnArgs) -> Result<(), AppError> {
    let skill = Skill {
        name: args.skill,
        category: args.category,
        current_level: args.current,
        target_level: args.target,
        priority: args.priority,
        market_demand: args.market_demand,
    };
    let path = synthesize(
        &skill,
        args.starts_on,
        &mut RandomSelector::from_optional_seed(args.seed),
    )?;

    if args.json {
        return print_json(&path);
    }
    render_learning_path(&path);
    Ok(())
}

#[derive(Serialize)]
struct AssessmentOutput<'a> {
    scores: &'a AssessmentScores,
    insights: &'a AssessmentInsights,
}

#[derive(Serialize)]
struct AutomationOutput<'a> {
    suggestions: &'a [AutomationSuggestion],
    total_time_saved: u64,
    tasks: &'a [Task],
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    println!("{rendered}");
    Ok(())
}

pub(crate) fn render_assessment(
    questionnaire: &Questionnaire,
    scores: &AssessmentScores,
    insights: &AssessmentInsights,
) {
    println!("Overall freedom score: {}% ({})", scores.overall, insights.level_label);
    println!("{}", insights.headline);
    println!("\nCategory scores");
    for result in &scores.categories {
        let title = questionnaire
            .category(result.category)
            .map(|category| category.title)
            .unwrap_or_else(|| result.category.label());
        println!("  - {}: {}% ({} answered)", title, result.score, result.answered);
    }
    println!("\nNext milestone: {}", insights.next_milestone);
    if let Some(priority) = insights.improvement_priority {
        println!("Improvement priority: {}", priority.label());
    }
    for advice in &insights.advice {
        println!("\n{} ({}%)", advice.category.label(), advice.score);
        for line in &advice.advice {
            println!("  - {line}");
        }
    }
}

pub(crate) fn render_automation(board: &TaskBoard, suggestions: &[AutomationSuggestion]) {
    println!("Automation suggestions");
    for suggestion in suggestions {
        let title = board
            .get(&suggestion.task_id)
            .map(|task| task.title.as_str())
            .unwrap_or("unknown task");
        println!(
            "  - [{}] {}: {} ({:?}, saves {} min)",
            suggestion.task_id,
            title,
            suggestion.suggestion,
            suggestion.difficulty,
            suggestion.times_saved
        );
        println!("      tools: {}", suggestion.tools.join(", "));
    }
    println!("Total time saved: {} min per run", total_time_saved(suggestions));

    let automated: Vec<_> = board
        .tasks()
        .iter()
        .filter(|task| task.automation_level > 0)
        .collect();
    if !automated.is_empty() {
        println!("\nAutomated tasks");
        for task in automated {
            println!(
                "  - {} {} -> {} ({}% automated)",
                task.id,
                task.title,
                task.status.label(),
                task.automation_level
            );
        }
    }
}

pub(crate) fn render_learning_path(path: &LearningPath) {
    println!(
        "Learning path: {} ({} weeks at {} h/week, {} hours total)",
        path.skill,
        path.total_weeks,
        path.weekly_hours,
        path.total_hours()
    );
    println!("\nPhases");
    for phase in &path.phases {
        println!("  - {} ({} weeks): {}", phase.title, phase.weeks, phase.focus);
    }
    println!("\nResources");
    for resource in &path.resources {
        println!("  - {:?}: {}", resource.kind, resource.title);
    }
    println!("\nMilestones");
    for milestone in &path.milestones {
        match milestone.target_date {
            Some(date) => println!("  - week {} ({date}): {}", milestone.week, milestone.title),
            None => println!("  - week {}: {}", milestone.week, milestone.title),
        }
    }
    println!("\nCareer impact: {}", path.career_impact);
}
