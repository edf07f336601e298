use chrono::NaiveDate;
use freedom_engine::workflows::decision::DecisionOption;
use freedom_engine::workflows::Priority;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_priority(raw: &str) -> Result<Priority, String> {
    Priority::parse(raw).ok_or_else(|| format!("'{raw}' is not one of high, medium, low"))
}

/// `category_index=score`, e.g. `financial_0=80`.
pub(crate) fn parse_answer(raw: &str) -> Result<(String, u8), String> {
    let (key, score) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected <category>_<index>=<score>, got '{raw}'"))?;
    let score = score
        .trim()
        .parse::<u8>()
        .map_err(|err| format!("invalid score in '{raw}' ({err})"))?;
    Ok((key.trim().to_string(), score))
}

/// `name|description|risk|return|hours|probability`.
pub(crate) fn parse_option(raw: &str) -> Result<DecisionOption, String> {
    let fields: Vec<&str> = raw.split('|').map(str::trim).collect();
    let [name, description, risk, potential_return, hours, probability] = fields.as_slice() else {
        return Err(format!(
            "expected name|description|risk|return|hours|probability, got '{raw}'"
        ));
    };

    Ok(DecisionOption {
        name: (*name).to_string(),
        description: (*description).to_string(),
        risk_level: risk
            .parse()
            .map_err(|err| format!("invalid risk level '{risk}' ({err})"))?,
        potential_return: potential_return
            .parse()
            .map_err(|err| format!("invalid return '{potential_return}' ({err})"))?,
        time_investment: hours
            .parse()
            .map_err(|err| format!("invalid hours '{hours}' ({err})"))?,
        success_probability: probability
            .parse()
            .map_err(|err| format!("invalid probability '{probability}' ({err})"))?,
    })
}
