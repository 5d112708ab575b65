use serde_json::{json, Value};

/// One rubric line: what is checked and how many raw points it is worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Criterion {
    pub name: &'static str,
    pub weight: u32,
}

pub const ATS_RAW_MAXIMUM: u32 = 50;

pub const ATS_RUBRIC: [Criterion; 10] = [
    Criterion { name: "Contact information is complete and machine-readable", weight: 4 },
    Criterion { name: "Professional summary states a clear target role", weight: 4 },
    Criterion { name: "Standard section headings (Experience, Education, Skills)", weight: 5 },
    Criterion { name: "Keyword match with the target role or industry", weight: 8 },
    Criterion { name: "Quantified achievements in experience bullets", weight: 6 },
    Criterion { name: "Strong action verbs and concise bullet phrasing", weight: 5 },
    Criterion { name: "Consistent, parseable date formats", weight: 4 },
    Criterion { name: "Relevant hard and soft skills listed explicitly", weight: 5 },
    Criterion { name: "Simple layout free of tables, images or text in graphics", weight: 5 },
    Criterion { name: "Spelling, grammar and overall clarity", weight: 4 },
];

pub const ATS_PROMPT: &str = r#"You are an Applicant Tracking System (ATS) and an experienced technical recruiter.
Evaluate the resume provided {source} for ATS compatibility.

Score it against this rubric. Award each criterion between 0 and its points:
{rubric}

The raw total is out of {raw_max}. Normalise it to an integer from 0 to 100.
{target}
Return a JSON object with:
- score (integer 0-100)
- feedback (array of 3 to 5 short, specific, actionable suggestions, most important first)"#;

pub const TARGET_ROLE_SECTION: &str = r#"
Weigh keyword match and relevance against this target job description:
"""
{job_description}
"""
"#;

pub const GENERAL_TARGET_SECTION: &str =
    "\nNo job description was given; judge keyword match against the candidate's apparent field.\n";

pub fn rubric_lines() -> String {
    ATS_RUBRIC
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}. {} ({} points)", i + 1, c.name, c.weight))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn ats_prompt(source: &str, job_description: Option<&str>) -> String {
    let target = match job_description {
        Some(jd) => TARGET_ROLE_SECTION.replace("{job_description}", jd),
        None => GENERAL_TARGET_SECTION.to_string(),
    };
    ATS_PROMPT
        .replace("{source}", source)
        .replace("{rubric}", &rubric_lines())
        .replace("{raw_max}", &ATS_RAW_MAXIMUM.to_string())
        .replace("{target}", &target)
}

pub fn evaluation_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "score": { "type": "INTEGER" },
            "feedback": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
            },
        },
        "required": ["score", "feedback"],
    })
}
