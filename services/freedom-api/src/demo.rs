use crate::commands::{render_assessment, render_automation, render_learning_path};
use chrono::{Local, NaiveDate};
use clap::Args;
use freedom_engine::error::AppError;
use freedom_engine::selection::RandomSelector;
use freedom_engine::workflows::assessment::{score_answers, AnswerSheet, Questionnaire};
use freedom_engine::workflows::decision::{recommend, DecisionBoard, DecisionOption};
use freedom_engine::workflows::execution::{suggest_automations, NewTask, TaskBoard};
use freedom_engine::workflows::learning::{synthesize, Skill};
use freedom_engine::workflows::opportunities::{
    explain_matches, ExclusionReason, ExperienceLevel, OpportunityCatalog, RiskTolerance,
    UserProfile,
};
use freedom_engine::workflows::Priority;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Seed for template selection so repeated demos print the same suggestions
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Learning plan start date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) starts_on: Option<NaiveDate>,
    /// Skip the opportunity matching section.
    #[arg(long)]
    pub(crate) skip_opportunities: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        seed,
        starts_on,
        skip_opportunities,
    } = args;
    let starts_on = starts_on.unwrap_or_else(|| Local::now().date_naive());
    let mut selector = RandomSelector::from_optional_seed(seed);

    println!("Freedom compass demo");
    println!("\n== Self-assessment ==");
    let questionnaire = Questionnaire::standard();
    let sheet = AnswerSheet::from_pairs([
        ("financial_0", 40),
        ("financial_1", 60),
        ("financial_2", 40),
        ("time_0", 80),
        ("time_1", 60),
        ("time_2", 80),
        ("location_0", 100),
        ("location_1", 80),
        ("location_2", 100),
        ("skill_0", 60),
        ("skill_1", 80),
        ("skill_2", 60),
        ("relationship_0", 60),
        ("relationship_1", 40),
        ("relationship_2", 60),
    ]);
    let scores = score_answers(&questionnaire, &sheet)?;
    render_assessment(&questionnaire, &scores, &scores.insights());

    if !skip_opportunities {
        println!("\n== Opportunity matching ==");
        let profile = demo_profile();
        let catalog = OpportunityCatalog::standard();
        let report = explain_matches(catalog.opportunities(), &profile)?;
        for opportunity in &report.matches {
            println!(
                "  - {} [{}] success {}% | risk {}/10 | {}-{} {}",
                opportunity.title,
                opportunity.category.label(),
                opportunity.success_rate,
                opportunity.risk_level,
                opportunity.potential_income.min,
                opportunity.potential_income.max,
                opportunity.potential_income.timeframe
            );
        }
        println!("Filtered out:");
        for exclusion in &report.exclusions {
            let reasons: Vec<String> = exclusion.reasons.iter().map(describe_reason).collect();
            println!("  - {}: {}", exclusion.title, reasons.join("; "));
        }
    }

    println!("\n== Decision support ==");
    let mut decisions = DecisionBoard::new();
    for option in demo_options() {
        decisions.add(option)?;
    }
    let recommendation = recommend(decisions.options())?;
    println!(
        "Recommended: {} (score {:.1}, {} risk)",
        recommendation.recommended_option,
        recommendation.score,
        recommendation.risk_band.label()
    );
    println!("{}", recommendation.reasoning);
    println!("{}", recommendation.fallback_plan);

    println!("\n== Execution assistant ==");
    let mut tasks = TaskBoard::new();
    for task in demo_tasks() {
        tasks.add(task)?;
    }
    let suggestions = suggest_automations(tasks.tasks(), &mut selector)?;
    if let Some(first) = suggestions.first() {
        tasks.implement_automation(&first.task_id)?;
    }
    render_automation(&tasks, &suggestions);

    println!("\n== Learning partner ==");
    let skill = Skill {
        name: "Data Analysis".to_string(),
        category: "analytics".to_string(),
        current_level: 3,
        target_level: 7,
        priority: Priority::High,
        market_demand: 8,
    };
    let path = synthesize(&skill, Some(starts_on), &mut selector)?;
    render_learning_path(&path);

    Ok(())
}

fn describe_reason(reason: &ExclusionReason) -> String {
    match reason {
        ExclusionReason::NoSharedSkill => "no matching skill".to_string(),
        ExclusionReason::TimeCommitment {
            required,
            available,
        } => format!("needs {required} h/week, {available} available"),
        ExclusionReason::InitialInvestment { required, capacity } => {
            format!("needs {required} up front, capacity {capacity}")
        }
        ExclusionReason::RiskAboveTolerance {
            risk_level,
            tolerance,
        } => format!("risk {risk_level}/10 above {tolerance:?} tolerance"),
    }
}

fn demo_profile() -> UserProfile {
    UserProfile {
        skills: vec!["Programming".to_string(), "Writing".to_string()],
        interests: vec!["remote work".to_string(), "technology".to_string()],
        experience: ExperienceLevel::Intermediate,
        time_available: 20,
        risk_tolerance: RiskTolerance::Medium,
        investment_capacity: 1_000,
    }
}

fn demo_options() -> Vec<DecisionOption> {
    vec![
        DecisionOption {
            name: "Launch a side business".to_string(),
            description: "Evenings and weekends on a niche online store".to_string(),
            risk_level: 6,
            potential_return: 12_000.0,
            time_investment: 300.0,
            success_probability: 0.4,
        },
        DecisionOption {
            name: "Take on freelance projects".to_string(),
            description: "Two small contracts per quarter".to_string(),
            risk_level: 3,
            potential_return: 8_000.0,
            time_investment: 120.0,
            success_probability: 0.75,
        },
        DecisionOption {
            name: "Negotiate a remote role".to_string(),
            description: "Ask the current employer for a remote arrangement".to_string(),
            risk_level: 2,
            potential_return: 3_000.0,
            time_investment: 20.0,
            success_probability: 0.5,
        },
    ]
}

fn demo_tasks() -> Vec<NewTask> {
    vec![
        NewTask {
            title: "Weekly sales report".to_string(),
            description: "Pull figures from three spreadsheets and email a summary".to_string(),
            priority: Priority::High,
            category: "reporting".to_string(),
            estimated_time: 90,
        },
        NewTask {
            title: "Invoice follow-ups".to_string(),
            description: "Remind clients about overdue invoices".to_string(),
            priority: Priority::Medium,
            category: "finance".to_string(),
            estimated_time: 45,
        },
        NewTask {
            title: "Social media posts".to_string(),
            description: "Draft and schedule posts for the week".to_string(),
            priority: Priority::Low,
            category: "marketing".to_string(),
            estimated_time: 60,
        },
    ]
}
