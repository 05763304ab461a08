// apscan CLI - parse OCR'd results sheets, score them, suggest next steps
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use apscan::{aps, extraction, market, recommend, ApscanError, SubjectResult};

#[derive(Parser)]
#[command(name = "apscan", version, about = "APS extraction and scoring for South African school results")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract subjects and marks from an OCR text dump
    Extract {
        /// Text file to parse, or "-" for stdin
        input: PathBuf,

        /// OCR engine confidence to carry through (0-100)
        #[arg(long, default_value_t = 100.0)]
        confidence: f32,

        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Score a JSON subject list on the APS scale
    Aps {
        /// JSON file of [{"name": ..., "mark": ...}] entries, or "-" for stdin
        input: PathBuf,
    },

    /// Recommend programs and institutions from an OCR text dump (Grade 11-12)
    Courses {
        /// Text file to parse, or "-" for stdin
        input: PathBuf,

        /// OCR engine confidence to carry through (0-100)
        #[arg(long, default_value_t = 100.0)]
        confidence: f32,
    },

    /// Recommend foundational skills (Grade 9)
    Skills {
        /// Skills the student already has; repeatable
        #[arg(long = "have")]
        have: Vec<String>,
    },

    /// List study streams and example schools (Grade 10)
    Streams,

    /// Look up market demand for a skill, or list the dataset
    Market {
        /// Skill name to look up; omit to list all
        skill: Option<String>,

        /// Limit the listing to the top N skills
        #[arg(long)]
        top: Option<usize>,
    },
}

#[derive(Copy, Clone, ValueEnum)]
enum Format {
    Json,
    Text,
}

/// Full report for one extraction run.
#[derive(Serialize)]
struct ExtractReport {
    #[serde(flatten)]
    extraction: extraction::ExtractionResult,
    quality: f32,
    aps: aps::ApsBreakdown,
    generated_at: String,
}

// Mark-only input shape for `apscan aps`; levels are always derived.
#[derive(Deserialize)]
struct SubjectInput {
    name: String,
    mark: u8,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Extract {
            input,
            confidence,
            format,
            pretty,
        } => run_extract(&input, confidence, format, pretty),
        Command::Aps { input } => run_aps(&input),
        Command::Courses { input, confidence } => run_courses(&input, confidence),
        Command::Skills { have } => run_skills(&have),
        Command::Streams => run_streams(),
        Command::Market { skill, top } => run_market(skill.as_deref(), top),
    }
}

fn run_extract(input: &Path, confidence: f32, format: Format, pretty: bool) -> Result<()> {
    if !(0.0..=100.0).contains(&confidence) {
        return Err(ApscanError::InvalidConfidence(confidence).into());
    }

    let text = read_input(input)?;
    debug!(bytes = text.len(), "read OCR text");

    let extraction = extraction::extract(&text, confidence);
    let quality = extraction::quality_score(&text);
    let mut aps = aps::calculate_aps(&extraction.subjects);
    aps.average_points = (aps.average_points * 100.0).round() / 100.0;

    info!(
        subjects = extraction.subjects.len(),
        average = extraction.overall_average,
        aps_total = aps.total_points,
        "extraction complete"
    );

    let report = ExtractReport {
        extraction,
        quality,
        aps,
        generated_at: chrono::Utc::now().to_rfc3339(),
    };

    match format {
        Format::Json => print_json(&report, pretty)?,
        Format::Text => print_report_text(&report),
    }
    Ok(())
}

fn run_aps(input: &Path) -> Result<()> {
    let raw = read_input(input)?;
    let entries: Vec<SubjectInput> = serde_json::from_str(&raw).map_err(ApscanError::Json)?;
    let subjects: Vec<SubjectResult> = entries
        .into_iter()
        .map(|e| SubjectResult::try_new(e.name, e.mark))
        .collect::<apscan::Result<_>>()?;

    let mut breakdown = aps::calculate_aps(&subjects);
    breakdown.average_points = (breakdown.average_points * 100.0).round() / 100.0;
    print_json(&breakdown, true)
}

fn run_courses(input: &Path, confidence: f32) -> Result<()> {
    if !(0.0..=100.0).contains(&confidence) {
        return Err(ApscanError::InvalidConfidence(confidence).into());
    }

    let text = read_input(input)?;
    let extraction = extraction::extract(&text, confidence);
    let breakdown = aps::calculate_aps(&extraction.subjects);
    let courses = recommend::recommend_courses(breakdown.total_points, &extraction.subjects);

    info!(
        subjects = extraction.subjects.len(),
        aps_total = breakdown.total_points,
        courses = courses.len(),
        "course recommendation complete"
    );

    print_json(&courses, true)
}

fn run_skills(have: &[String]) -> Result<()> {
    let recommended = recommend::recommend_skills(have);
    print_json(&recommended, true)
}

fn run_streams() -> Result<()> {
    print_json(&recommend::recommend_streams(), true)
}

fn run_market(skill: Option<&str>, top: Option<usize>) -> Result<()> {
    match skill {
        Some(name) => {
            println!("{}", market::demand_score(name));
            Ok(())
        }
        None => {
            let skills = match top {
                Some(n) => market::top_skills(&[], n),
                None => market::all_skills(),
            };
            print_json(&skills, true)
        }
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(ApscanError::Io)?;
        Ok(buf)
    } else {
        Ok(fs::read_to_string(path).map_err(ApscanError::Io)?)
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", out);
    Ok(())
}

fn print_report_text(report: &ExtractReport) {
    if report.extraction.subjects.is_empty() {
        println!("No subjects recognized.");
    } else {
        for subject in &report.extraction.subjects {
            println!("{:<24} {:>3}  {}", subject.name, subject.mark, subject.level);
        }
        println!();
        println!("Overall average: {}%", report.extraction.overall_average);
        println!(
            "APS: {} points over {} subjects (avg {:.2})",
            report.aps.total_points, report.aps.total_subjects, report.aps.average_points
        );
    }
    println!("OCR confidence: {:.1}  text quality: {:.2}", report.extraction.confidence, report.quality);
    for err in &report.extraction.errors {
        eprintln!("warning: {}", err);
    }
}
