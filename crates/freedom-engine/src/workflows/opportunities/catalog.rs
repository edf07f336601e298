use super::domain::{
    Difficulty, IncomeRange, MarketTrend, Opportunity, OpportunityCategory, Requirements,
};

/// Static opportunity reference data bundled with the product.
#[derive(Debug, Clone)]
pub struct OpportunityCatalog {
    opportunities: Vec<Opportunity>,
}

impl OpportunityCatalog {
    pub fn standard() -> Self {
        Self {
            opportunities: standard_opportunities(),
        }
    }

    pub fn from_opportunities(opportunities: Vec<Opportunity>) -> Self {
        Self { opportunities }
    }

    pub fn opportunities(&self) -> &[Opportunity] {
        &self.opportunities
    }

    pub fn get(&self, id: u32) -> Option<&Opportunity> {
        self.opportunities
            .iter()
            .find(|opportunity| opportunity.id == id)
    }

    /// Free-text browse over title, category label, and required skills.
    pub fn search(&self, term: &str, category: Option<OpportunityCategory>) -> Vec<&Opportunity> {
        let needle = term.trim().to_lowercase();
        self.opportunities
            .iter()
            .filter(|opportunity| category.map_or(true, |wanted| opportunity.category == wanted))
            .filter(|opportunity| needle.is_empty() || mentions(opportunity, &needle))
            .collect()
    }
}

fn mentions(opportunity: &Opportunity, needle: &str) -> bool {
    opportunity.title.to_lowercase().contains(needle)
        || opportunity
            .category
            .label()
            .to_lowercase()
            .contains(needle)
        || opportunity
            .requirements
            .skills
            .iter()
            .any(|skill| skill.to_lowercase().contains(needle))
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

fn monthly(min: u32, max: u32) -> IncomeRange {
    IncomeRange {
        min,
        max,
        timeframe: "monthly".to_string(),
    }
}

fn standard_opportunities() -> Vec<Opportunity> {
    vec![
        Opportunity {
            id: 1,
            title: "Freelance Web Development".to_string(),
            category: OpportunityCategory::Freelancing,
            potential_income: monthly(3_000, 15_000),
            requirements: Requirements {
                skills: strings(&["Programming", "Web Development"]),
                time_commitment: 20,
                initial_investment: 500,
            },
            risk_level: 3,
            market_trend: MarketTrend::Rising,
            difficulty: Difficulty::Intermediate,
            success_rate: 75,
            steps: strings(&[
                "Assemble a portfolio of three representative projects",
                "Create profiles on two freelance marketplaces",
                "Land a first client at an introductory rate",
                "Collect testimonials and raise rates",
            ]),
            pros: strings(&["Flexible hours", "Location independent", "Steady demand"]),
            cons: strings(&["Irregular income", "Constant client acquisition"]),
            real_examples: strings(&["Developer billing 12k/month across four retainers"]),
        },
        Opportunity {
            id: 2,
            title: "Technical Blog and Newsletter".to_string(),
            category: OpportunityCategory::ContentCreation,
            potential_income: monthly(500, 8_000),
            requirements: Requirements {
                skills: strings(&["Writing", "Programming"]),
                time_commitment: 10,
                initial_investment: 200,
            },
            risk_level: 2,
            market_trend: MarketTrend::Stable,
            difficulty: Difficulty::Beginner,
            success_rate: 45,
            steps: strings(&[
                "Pick a narrow technical niche",
                "Publish one in-depth article per week",
                "Grow a newsletter list",
                "Add sponsorships and paid tiers",
            ]),
            pros: strings(&["Compounding audience", "Low cost to start"]),
            cons: strings(&["Slow early growth", "Requires consistency"]),
            real_examples: strings(&["Newsletter with 20k readers funded by two sponsors"]),
        },
        Opportunity {
            id: 3,
            title: "Online Course Creation".to_string(),
            category: OpportunityCategory::Education,
            potential_income: monthly(1_000, 20_000),
            requirements: Requirements {
                skills: strings(&["Teaching", "Video Production"]),
                time_commitment: 15,
                initial_investment: 2_000,
            },
            risk_level: 5,
            market_trend: MarketTrend::Rising,
            difficulty: Difficulty::Intermediate,
            success_rate: 55,
            steps: strings(&[
                "Validate a topic with a free workshop",
                "Script and record the course",
                "Launch to an early-access cohort",
                "Iterate and open evergreen sales",
            ]),
            pros: strings(&["Passive income", "Scales without extra hours"]),
            cons: strings(&["Heavy upfront production", "Marketing intensive"]),
            real_examples: strings(&["Instructor earning 6k/month from a data course"]),
        },
        Opportunity {
            id: 4,
            title: "Niche E-commerce Store".to_string(),
            category: OpportunityCategory::Ecommerce,
            potential_income: monthly(2_000, 30_000),
            requirements: Requirements {
                skills: strings(&["Marketing", "Sales"]),
                time_commitment: 25,
                initial_investment: 10_000,
            },
            risk_level: 7,
            market_trend: MarketTrend::Stable,
            difficulty: Difficulty::Intermediate,
            success_rate: 35,
            steps: strings(&[
                "Research an underserved product niche",
                "Source inventory and build the storefront",
                "Run paid acquisition experiments",
                "Optimize margins and fulfilment",
            ]),
            pros: strings(&["High revenue ceiling", "Sellable asset"]),
            cons: strings(&["Inventory risk", "Thin margins"]),
            real_examples: strings(&["Outdoor gear shop reaching 25k monthly revenue"]),
        },
        Opportunity {
            id: 5,
            title: "Remote Technical Consulting".to_string(),
            category: OpportunityCategory::Consulting,
            potential_income: monthly(8_000, 40_000),
            requirements: Requirements {
                skills: strings(&["Programming", "Project Management"]),
                time_commitment: 15,
                initial_investment: 0,
            },
            risk_level: 4,
            market_trend: MarketTrend::Rising,
            difficulty: Difficulty::Advanced,
            success_rate: 65,
            steps: strings(&[
                "Define a specialist offer",
                "Reach out to former colleagues and managers",
                "Package engagements as fixed-scope audits",
            ]),
            pros: strings(&["High day rate", "Few clients needed"]),
            cons: strings(&["Requires deep expertise", "Sales cycles are long"]),
            real_examples: strings(&["Architect running two audits per month"]),
        },
        Opportunity {
            id: 6,
            title: "Micro-SaaS Product".to_string(),
            category: OpportunityCategory::Saas,
            potential_income: monthly(1_000, 50_000),
            requirements: Requirements {
                skills: strings(&["Programming", "Product Design"]),
                time_commitment: 30,
                initial_investment: 5_000,
            },
            risk_level: 8,
            market_trend: MarketTrend::Rising,
            difficulty: Difficulty::Advanced,
            success_rate: 25,
            steps: strings(&[
                "Interview twenty potential customers",
                "Ship a minimal paid version",
                "Find a repeatable acquisition channel",
                "Automate support and onboarding",
            ]),
            pros: strings(&["Recurring revenue", "Equity value"]),
            cons: strings(&["Most products never find fit", "Long runway"]),
            real_examples: strings(&["Solo founder at 9k MRR after two years"]),
        },
        Opportunity {
            id: 7,
            title: "Social Media Management".to_string(),
            category: OpportunityCategory::Freelancing,
            potential_income: monthly(2_000, 10_000),
            requirements: Requirements {
                skills: strings(&["Marketing", "Writing"]),
                time_commitment: 20,
                initial_investment: 100,
            },
            risk_level: 3,
            market_trend: MarketTrend::Stable,
            difficulty: Difficulty::Beginner,
            success_rate: 70,
            steps: strings(&[
                "Offer a free audit to local businesses",
                "Standardize a monthly content package",
                "Use scheduling tools to serve several accounts",
            ]),
            pros: strings(&["Low barrier to entry", "Recurring retainers"]),
            cons: strings(&["Crowded market", "Client churn"]),
            real_examples: strings(&["Manager handling eight restaurant accounts"]),
        },
        Opportunity {
            id: 8,
            title: "Data Analysis Contracting".to_string(),
            category: OpportunityCategory::Consulting,
            potential_income: monthly(5_000, 20_000),
            requirements: Requirements {
                skills: strings(&["Data Analysis", "Python"]),
                time_commitment: 20,
                initial_investment: 300,
            },
            risk_level: 3,
            market_trend: MarketTrend::Rising,
            difficulty: Difficulty::Intermediate,
            success_rate: 75,
            steps: strings(&[
                "Publish two public analysis case studies",
                "Join a contractor network",
                "Productize recurring reporting work",
            ]),
            pros: strings(&["Strong demand", "Remote friendly"]),
            cons: strings(&["Tooling churn", "Project-based income"]),
            real_examples: strings(&["Analyst on a six-month retail contract"]),
        },
    ]
}
