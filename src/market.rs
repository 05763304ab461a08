// Market-demand lookup over a small embedded dataset
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One skill with its labour-market demand score (0-100).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSkill {
    pub name: String,
    pub demand_score: u32,
}

/// Demand score returned for skills missing from the dataset.
pub const DEFAULT_DEMAND_SCORE: u32 = 50;

// Dataset ships inside the binary; a malformed file degrades to an empty
// table rather than failing startup.
static MARKET_DATA: Lazy<Vec<MarketSkill>> = Lazy::new(|| {
    serde_json::from_str(include_str!("../data/market_demand.json")).unwrap_or_default()
});

/// Demand score for a skill name, case-insensitive. Empty input scores 0;
/// unknown skills get the default medium score.
pub fn demand_score(skill_name: &str) -> u32 {
    if skill_name.trim().is_empty() {
        return 0;
    }
    MARKET_DATA
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(skill_name))
        .map(|s| s.demand_score)
        .unwrap_or(DEFAULT_DEMAND_SCORE)
}

/// Top skills by demand, minus any named in `exclude` (case-insensitive).
pub fn top_skills(exclude: &[String], limit: usize) -> Vec<&'static MarketSkill> {
    let mut skills: Vec<&MarketSkill> = MARKET_DATA
        .iter()
        .filter(|s| !exclude.iter().any(|e| e.eq_ignore_ascii_case(&s.name)))
        .collect();
    skills.sort_by(|a, b| b.demand_score.cmp(&a.demand_score));
    skills.truncate(limit);
    skills
}

/// The full dataset, highest demand first.
pub fn all_skills() -> Vec<&'static MarketSkill> {
    top_skills(&[], MARKET_DATA.len())
}
