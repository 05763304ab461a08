// Achievement bands and APS scoring for NSC marks
use serde::{Deserialize, Serialize};

use crate::extraction::SubjectResult;

/// Achievement band for a percentage mark, per the NSC seven-level scale.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AchievementLevel {
    Distinction,
    Merit,
    Achieved,
    Satisfactory,
    Elementary,
    #[serde(rename = "Not Achieved")]
    NotAchieved,
    Fail,
}

impl AchievementLevel {
    /// Band for a mark in [0,100]. Thresholds are inclusive lower bounds.
    pub fn from_mark(mark: u8) -> Self {
        match mark {
            80..=u8::MAX => Self::Distinction,
            70..=79 => Self::Merit,
            60..=69 => Self::Achieved,
            50..=59 => Self::Satisfactory,
            40..=49 => Self::Elementary,
            30..=39 => Self::NotAchieved,
            _ => Self::Fail,
        }
    }

    /// Admission Point Score contribution of this band.
    pub fn aps_points(self) -> u32 {
        match self {
            Self::Distinction => 7,
            Self::Merit => 6,
            Self::Achieved => 5,
            Self::Satisfactory => 4,
            Self::Elementary => 3,
            Self::NotAchieved => 2,
            Self::Fail => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Distinction => "Distinction",
            Self::Merit => "Merit",
            Self::Achieved => "Achieved",
            Self::Satisfactory => "Satisfactory",
            Self::Elementary => "Elementary",
            Self::NotAchieved => "Not Achieved",
            Self::Fail => "Fail",
        }
    }
}

impl std::fmt::Display for AchievementLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn level_of(mark: u8) -> AchievementLevel {
    AchievementLevel::from_mark(mark)
}

pub fn aps_points_of(mark: u8) -> u32 {
    AchievementLevel::from_mark(mark).aps_points()
}

/// APS total across a set of subject results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApsBreakdown {
    pub total_points: u32,
    pub total_subjects: usize,
    pub average_points: f64,
}

/// Sum per-subject APS points. Every subject counts; a failed subject still
/// contributes its 1 point, matching how institutions read a results sheet.
pub fn calculate_aps(subjects: &[SubjectResult]) -> ApsBreakdown {
    let total_points: u32 = subjects.iter().map(|s| aps_points_of(s.mark)).sum();
    let total_subjects = subjects.len();
    let average_points = if total_subjects > 0 {
        total_points as f64 / total_subjects as f64
    } else {
        0.0
    };

    ApsBreakdown {
        total_points,
        total_subjects,
        average_points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::SubjectResult;
    use rstest::rstest;

    #[rstest]
    #[case(100, AchievementLevel::Distinction, 7)]
    #[case(80, AchievementLevel::Distinction, 7)]
    #[case(79, AchievementLevel::Merit, 6)]
    #[case(70, AchievementLevel::Merit, 6)]
    #[case(69, AchievementLevel::Achieved, 5)]
    #[case(60, AchievementLevel::Achieved, 5)]
    #[case(59, AchievementLevel::Satisfactory, 4)]
    #[case(50, AchievementLevel::Satisfactory, 4)]
    #[case(49, AchievementLevel::Elementary, 3)]
    #[case(40, AchievementLevel::Elementary, 3)]
    #[case(39, AchievementLevel::NotAchieved, 2)]
    #[case(30, AchievementLevel::NotAchieved, 2)]
    #[case(29, AchievementLevel::Fail, 1)]
    #[case(0, AchievementLevel::Fail, 1)]
    fn band_boundaries(#[case] mark: u8, #[case] level: AchievementLevel, #[case] points: u32) {
        assert_eq!(level_of(mark), level);
        assert_eq!(aps_points_of(mark), points);
    }

    #[test]
    fn aps_breakdown_sums_points() {
        let subjects = vec![
            SubjectResult::new("Mathematics".into(), 85),
            SubjectResult::new("English".into(), 72),
            SubjectResult::new("Physical Science".into(), 63),
        ];
        let breakdown = calculate_aps(&subjects);
        assert_eq!(breakdown.total_points, 18);
        assert_eq!(breakdown.total_subjects, 3);
        assert!((breakdown.average_points - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn aps_breakdown_empty() {
        let breakdown = calculate_aps(&[]);
        assert_eq!(breakdown.total_points, 0);
        assert_eq!(breakdown.total_subjects, 0);
        assert_eq!(breakdown.average_points, 0.0);
    }

    #[test]
    fn level_serializes_with_spaces() {
        let json = serde_json::to_string(&AchievementLevel::NotAchieved).unwrap();
        assert_eq!(json, "\"Not Achieved\"");
    }
}
