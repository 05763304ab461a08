// Grade 9 skill recommendations from a fixed catalogue
use serde::Serialize;

/// A recommendable foundational skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: &'static str,
    pub description: &'static str,
    pub demand_level: &'static str,
    pub category: &'static str,
}

const MAX_RECOMMENDATIONS: usize = 6;

pub static SKILL_CATALOGUE: &[Skill] = &[
    Skill {
        name: "Digital Literacy",
        description: "Basic computer skills and understanding of digital tools",
        demand_level: "High",
        category: "Technical",
    },
    Skill {
        name: "Problem Solving",
        description: "Analytical thinking and creative solution development",
        demand_level: "High",
        category: "Cognitive",
    },
    Skill {
        name: "Communication Skills",
        description: "Verbal and written communication in multiple languages",
        demand_level: "High",
        category: "Social",
    },
    Skill {
        name: "Critical Thinking",
        description: "Ability to analyze information and make reasoned judgments",
        demand_level: "High",
        category: "Cognitive",
    },
    Skill {
        name: "Teamwork",
        description: "Collaborating effectively with diverse groups",
        demand_level: "Medium",
        category: "Social",
    },
    Skill {
        name: "Adaptability",
        description: "Flexibility in changing environments and learning new skills",
        demand_level: "High",
        category: "Personal",
    },
    Skill {
        name: "Mathematics Skills",
        description: "Numerical reasoning and mathematical problem-solving",
        demand_level: "High",
        category: "Technical",
    },
    Skill {
        name: "Scientific Thinking",
        description: "Understanding scientific methods and principles",
        demand_level: "Medium",
        category: "Cognitive",
    },
];

/// Recommend up to six skills the student does not already claim.
/// Matching against `current_skills` is case-insensitive.
pub fn recommend_skills(current_skills: &[String]) -> Vec<&'static Skill> {
    SKILL_CATALOGUE
        .iter()
        .filter(|skill| {
            !current_skills
                .iter()
                .any(|c| c.eq_ignore_ascii_case(skill.name))
        })
        .take(MAX_RECOMMENDATIONS)
        .collect()
}
