// Grade 11-12 course and institution recommendations
//
// Works entirely off the bundled catalogue: each institution carries its
// admission requirements as structured data, and ranking blends employment
// outcomes, field demand, subject alignment and cost into one score.
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::extraction::SubjectResult;

/// One institution/program entry from the bundled catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Institution {
    pub name: &'static str,
    pub program: &'static str,
    pub field: &'static str,
    pub min_aps: u32,
    /// Required subjects as (canonical name, minimum percentage).
    pub subject_requirements: &'static [(&'static str, u8)],
    pub application_deadline: &'static str,
    pub estimated_cost: &'static str,
    pub employment_rate: u32,
    pub duration: &'static str,
    pub campus: &'static str,
    pub accreditation: &'static str,
    pub notes: &'static str,
    pub availability: &'static str,
    pub nsfas_funding: bool,
}

/// An institution with its computed recommendation score and band.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedInstitution {
    #[serde(flatten)]
    pub institution: &'static Institution,
    pub recommendation_score: u32,
    pub ranking: &'static str,
}

const MAX_COURSE_RECOMMENDATIONS: usize = 5;

pub static INSTITUTIONS: &[Institution] = &[
    Institution {
        name: "University of Cape Town (UCT)",
        program: "MBChB Medicine",
        field: "Healthcare",
        min_aps: 42,
        subject_requirements: &[
            ("Physical Science", 80),
            ("Life Science", 80),
            ("Mathematics", 70),
        ],
        application_deadline: "30 June 2024",
        estimated_cost: "R75,000 - R120,000 per year",
        employment_rate: 98,
        duration: "6 years",
        campus: "Health Sciences Campus, Observatory",
        accreditation: "HPCSA, WHO",
        notes: "National Benchmark Test (NBT) required. Highly competitive with limited spaces.",
        availability: "Limited",
        nsfas_funding: true,
    },
    Institution {
        name: "University of Pretoria",
        program: "BEng Electrical Engineering",
        field: "Engineering",
        min_aps: 38,
        subject_requirements: &[("Mathematics", 75), ("Physical Science", 70)],
        application_deadline: "30 September 2024",
        estimated_cost: "R55,000 - R85,000 per year",
        employment_rate: 92,
        duration: "4 years",
        campus: "Engineering Building, Hatfield",
        accreditation: "ECSA, Washington Accord",
        notes: "Largest engineering faculty in South Africa. Strong industry partnerships.",
        availability: "Available",
        nsfas_funding: true,
    },
    Institution {
        name: "University of Johannesburg",
        program: "BSc Computer Science",
        field: "Information Technology",
        min_aps: 34,
        subject_requirements: &[("Mathematics", 65)],
        application_deadline: "30 September 2024",
        estimated_cost: "R35,000 - R55,000 per year",
        employment_rate: 91,
        duration: "3 years",
        campus: "Auckland Park Kingsway",
        accreditation: "CHE, SAQA",
        notes: "Industry-aligned curriculum with internship opportunities.",
        availability: "Available",
        nsfas_funding: true,
    },
];

// Baseline employment rate per field of study; unknown fields score the
// same medium default as unknown market skills.
static FIELD_EMPLOYMENT_RATES: &[(&str, u32)] = &[
    ("Information Technology", 92),
    ("Engineering", 88),
    ("Healthcare", 95),
    ("Commerce", 78),
    ("Education", 82),
    ("Arts", 65),
];

const DEFAULT_FIELD_RATE: u32 = 50;

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Recommend programs the student's APS qualifies for, best fit first.
/// At most five entries; an empty list means no catalogue program admits
/// this APS, not a failure.
pub fn recommend_courses(aps_score: u32, subjects: &[SubjectResult]) -> Vec<RankedInstitution> {
    let mut ranked: Vec<RankedInstitution> = INSTITUTIONS
        .iter()
        .filter(|inst| aps_score >= inst.min_aps)
        .map(|inst| {
            let score = recommendation_score(inst, subjects);
            RankedInstitution {
                institution: inst,
                recommendation_score: score.round() as u32,
                ranking: ranking_category(score),
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.recommendation_score.cmp(&a.recommendation_score));
    ranked.truncate(MAX_COURSE_RECOMMENDATIONS);
    ranked
}

// Weighted blend in [0,100]: employment 40%, field demand 30%, subject
// alignment 20%, cost 10%.
fn recommendation_score(inst: &Institution, subjects: &[SubjectResult]) -> f64 {
    let employment = inst.employment_rate as f64 / 100.0 * 40.0;
    let demand = field_employment_rate(inst.field) as f64 / 100.0 * 30.0;
    let alignment = subject_alignment(inst, subjects) as f64 / 100.0 * 20.0;
    let cost = cost_score(inst.estimated_cost) as f64;

    employment + demand + alignment + cost
}

fn field_employment_rate(field: &str) -> u32 {
    FIELD_EMPLOYMENT_RATES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(field))
        .map(|(_, rate)| *rate)
        .unwrap_or(DEFAULT_FIELD_RATE)
}

// 20 points per required subject the student meets, capped at 100.
fn subject_alignment(inst: &Institution, subjects: &[SubjectResult]) -> u32 {
    let met = inst
        .subject_requirements
        .iter()
        .filter(|(name, min_mark)| {
            subjects
                .iter()
                .any(|s| s.name.eq_ignore_ascii_case(name) && s.mark >= *min_mark)
        })
        .count() as u32;

    (met * 20).min(100)
}

// Cheaper programs score higher, on a 0-10 scale.
fn cost_score(estimated_cost: &str) -> u32 {
    let avg = average_cost(estimated_cost);
    match avg {
        c if c < 30_000.0 => 10,
        c if c < 50_000.0 => 8,
        c if c < 75_000.0 => 6,
        c if c < 100_000.0 => 4,
        _ => 2,
    }
}

// Mean of the rand amounts in a cost string like "R55,000 - R85,000 per
// year". Thousands separators are stripped before scanning; amounts under
// R1,000 are treated as stray tokens.
fn average_cost(cost: &str) -> f64 {
    let stripped = cost.replace(',', "");
    let amounts: Vec<f64> = NUMBER_RE
        .find_iter(&stripped)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .filter(|n| *n > 1000.0)
        .collect();

    if amounts.is_empty() {
        return 50_000.0;
    }
    amounts.iter().sum::<f64>() / amounts.len() as f64
}

fn ranking_category(score: f64) -> &'static str {
    if score >= 85.0 {
        "Highly Recommended"
    } else if score >= 70.0 {
        "Recommended"
    } else if score >= 60.0 {
        "Good Option"
    } else {
        "Consider"
    }
}
