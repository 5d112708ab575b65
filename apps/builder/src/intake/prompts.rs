use serde_json::{json, Value};

/// Parser instruction. `{text}` is replaced with the user's free text.
pub const PARSE_RESUME_PROMPT: &str = r#"You are an expert resume parser. Extract the following information from the provided text into a structured JSON format.

Text to parse:
"{text}"

Return a JSON object with:
- personalInfo (fullName, email, phone, linkedin, location, summary)
- experience (array of objects with company, role, startDate, endDate, description)
- education (array of objects with school, degree, year)
- skills (array of strings)

If specific fields are missing, leave them as empty strings or empty arrays.
Ensure dates are formatted as "Month Year" (e.g., "Jan 2023") if possible.
Summarize the 'description' for experience into bullet points if it is a paragraph."#;

pub fn parse_resume_prompt(text: &str) -> String {
    PARSE_RESUME_PROMPT.replace("{text}", text)
}

fn string() -> Value {
    json!({ "type": "STRING" })
}

/// Response schema: the resume document without entry ids.
pub fn resume_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "personalInfo": {
                "type": "OBJECT",
                "properties": {
                    "fullName": string(),
                    "email": string(),
                    "phone": string(),
                    "linkedin": string(),
                    "location": string(),
                    "summary": string(),
                },
            },
            "experience": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "company": string(),
                        "role": string(),
                        "startDate": string(),
                        "endDate": string(),
                        "description": string(),
                    },
                },
            },
            "education": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "school": string(),
                        "degree": string(),
                        "year": string(),
                    },
                },
            },
            "skills": {
                "type": "ARRAY",
                "items": string(),
            },
        },
    })
}
