// apscan - subject/mark extraction and APS scoring for OCR'd results sheets
//
// The extraction pipeline is pure and infallible over arbitrary text: the
// OCR engine upstream supplies `{ text, confidence }`, `extract` recovers a
// best-effort subject table, and the APS/recommendation modules consume it.

pub mod aps;
pub mod extraction;
pub mod market;
pub mod recommend;
pub mod types;

pub use aps::{aps_points_of, calculate_aps, level_of, AchievementLevel, ApsBreakdown};
pub use extraction::{extract, quality_score, ExtractionResult, SubjectResult};
pub use types::{ApscanError, Result};
