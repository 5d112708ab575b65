use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Locally unique key of an experience or education entry.
///
/// Generated once when the entry is created and never recomputed. It is the
/// only handle the editor uses to find an entry for update or removal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Mints a fresh identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    /// Free-text handle or URL.
    pub linkedin: String,
    pub location: String,
    /// Multi-line free text.
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub id: EntryId,
    pub company: String,
    pub role: String,
    /// Display label, not a parsed date.
    pub start_date: String,
    /// Display label; "Present" is a valid value.
    pub end_date: String,
    /// Newline-separated bullet lines by convention.
    pub description: String,
}

impl ExperienceEntry {
    /// A new entry with a fresh id and every field empty.
    pub fn blank() -> Self {
        Self {
            id: EntryId::generate(),
            company: String::new(),
            role: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            description: String::new(),
        }
    }

    /// "start - end", dropping the separator when either side is missing.
    pub fn date_range(&self) -> String {
        match (self.start_date.trim(), self.end_date.trim()) {
            ("", "") => String::new(),
            (start, "") => start.to_string(),
            ("", end) => end.to_string(),
            (start, end) => format!("{start} - {end}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: EntryId,
    pub school: String,
    pub degree: String,
    pub year: String,
}

impl EducationEntry {
    pub fn blank() -> Self {
        Self {
            id: EntryId::generate(),
            school: String::new(),
            degree: String::new(),
            year: String::new(),
        }
    }
}

/// The normalized resume content every other component reads and writes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    /// Display order; most recent first by convention only.
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    /// Insertion order, duplicates allowed.
    pub skills: Vec<String>,
}

impl ResumeDocument {
    /// The document a new session starts with.
    pub fn seed() -> Self {
        Self {
            personal_info: PersonalInfo {
                full_name: "Alex Anderson".to_string(),
                email: "alex.anderson@example.com".to_string(),
                phone: "+1 (555) 123-4567".to_string(),
                linkedin: "linkedin.com/in/alexanderson".to_string(),
                location: "San Francisco, CA".to_string(),
                summary: "Experienced software engineer with a passion for building scalable web \
                          applications and intuitive user experiences. Proven track record in \
                          full-stack development and technical leadership."
                    .to_string(),
            },
            experience: vec![
                ExperienceEntry {
                    id: EntryId::new("1"),
                    company: "Tech Solutions Inc.".to_string(),
                    role: "Senior Developer".to_string(),
                    start_date: "Jan 2021".to_string(),
                    end_date: "Present".to_string(),
                    description: "• Led a team of 5 engineers to redesign the core product architecture.\n\
                                  • Improved system performance by 40% through code optimization.\n\
                                  • Mentored junior developers and conducted code reviews."
                        .to_string(),
                },
                ExperienceEntry {
                    id: EntryId::new("2"),
                    company: "WebCreate LLC".to_string(),
                    role: "Frontend Developer".to_string(),
                    start_date: "Jun 2018".to_string(),
                    end_date: "Dec 2020".to_string(),
                    description: "• Developed responsive user interfaces using React and Tailwind CSS.\n\
                                  • Collaborated with UX designers to implement pixel-perfect designs.\n\
                                  • Integrated RESTful APIs and managed application state."
                        .to_string(),
                },
            ],
            education: vec![EducationEntry {
                id: EntryId::new("1"),
                school: "University of California, Berkeley".to_string(),
                degree: "B.S. Computer Science".to_string(),
                year: "2018".to_string(),
            }],
            skills: [
                "React",
                "TypeScript",
                "Node.js",
                "Python",
                "AWS",
                "Docker",
                "UI/UX Design",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_distinct() {
        let a = EntryId::generate();
        let b = EntryId::generate();
        assert_ne!(a, b);
        assert!(!a.as_str().is_empty());
    }

    #[test]
    fn test_date_range_handles_missing_sides() {
        let mut entry = ExperienceEntry::blank();
        assert_eq!(entry.date_range(), "");
        entry.start_date = "Jan 2021".to_string();
        assert_eq!(entry.date_range(), "Jan 2021");
        entry.end_date = "Present".to_string();
        assert_eq!(entry.date_range(), "Jan 2021 - Present");
        entry.start_date.clear();
        assert_eq!(entry.date_range(), "Present");
    }

    #[test]
    fn test_document_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(ResumeDocument::seed()).unwrap();
        assert_eq!(json["personalInfo"]["fullName"], "Alex Anderson");
        assert_eq!(json["experience"][0]["startDate"], "Jan 2021");
        assert_eq!(json["experience"][0]["id"], "1");
        assert_eq!(json["skills"].as_array().unwrap().len(), 7);
    }

    #[test]
    fn test_personal_info_tolerates_missing_keys() {
        let info: PersonalInfo = serde_json::from_str(r#"{"fullName": "Ada"}"#).unwrap();
        assert_eq!(info.full_name, "Ada");
        assert!(info.email.is_empty());
    }
}
