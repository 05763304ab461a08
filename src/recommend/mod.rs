// Static career-guidance recommendations keyed off parsed results
pub mod courses;
pub mod skills;
pub mod streams;

pub use courses::{recommend_courses, Institution, RankedInstitution, INSTITUTIONS};
pub use skills::{recommend_skills, Skill, SKILL_CATALOGUE};
pub use streams::{recommend_streams, Stream, STREAMS};
