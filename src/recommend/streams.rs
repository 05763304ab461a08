// Grade 10 study-stream recommendations (Mpumalanga school data)
use serde::Serialize;

/// A study stream with example schools offering it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stream {
    pub name: &'static str,
    pub description: &'static str,
    pub schools: &'static [&'static str],
    pub suitability: &'static str,
}

pub static STREAMS: &[Stream] = &[
    Stream {
        name: "Science Stream",
        description: "Focus on Mathematics, Physical Sciences, and Life Sciences",
        schools: &[
            "Nelspruit High School, Nelspruit",
            "Hoërskool Bergvlam, Nelspruit",
            "Lowveld High School, Nelspruit",
            "Hoërskool Rob Ferreira, Nelspruit",
            "Penryn College, Nelspruit",
        ],
        suitability: "Excellent for students strong in Mathematics and Sciences",
    },
    Stream {
        name: "Commerce Stream",
        description: "Focus on Accounting, Business Studies, and Economics",
        schools: &[
            "Hoërskool Ligteland, Nelspruit",
            "Reyno Ridge College, Nelspruit",
            "Uplands College, White River",
            "Curro Nelspruit, Nelspruit",
            "Ermelo High School, Ermelo",
        ],
        suitability: "Ideal for students interested in business and finance",
    },
    Stream {
        name: "Arts & Humanities Stream",
        description: "Focus on Languages, History, and Geography",
        schools: &[
            "Hoërskool Nelspruit, Nelspruit",
            "Bella Vista High School, Nelspruit",
            "Witbank High School, Witbank",
            "Middelburg High School, Middelburg",
            "Barberton High School, Barberton",
        ],
        suitability: "Perfect for students with strong language and social science skills",
    },
    Stream {
        name: "Technical Stream",
        description: "Focus on Engineering, Technology and Design",
        schools: &[
            "Technical High School, Middelburg",
            "Witbank High School, Witbank",
            "Hoër Tegniese Skool Nelspruit, Nelspruit",
            "Ehlanzeni Technical College, Nelspruit",
            "Gert Sibande TVET College, Various campuses",
        ],
        suitability: "Great for students interested in practical and technical subjects",
    },
];

/// All streams, in catalogue order. Marks do not influence the list yet;
/// TODO: rank streams by the student's subject strengths once per-stream
/// subject weights are agreed.
pub fn recommend_streams() -> &'static [Stream] {
    STREAMS
}
