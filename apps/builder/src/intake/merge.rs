use serde::{Deserialize, Serialize};

use crate::models::{EducationEntry, ExperienceEntry, PersonalInfo, ResumeDocument};

/// Personal-info keys the service returned. `None` means "not returned".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialPersonalInfo {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub location: Option<String>,
    pub summary: Option<String>,
}

impl PartialPersonalInfo {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    fn apply_to(&self, info: &mut PersonalInfo) {
        let pairs = [
            (&self.full_name, &mut info.full_name),
            (&self.email, &mut info.email),
            (&self.phone, &mut info.phone),
            (&self.linkedin, &mut info.linkedin),
            (&self.location, &mut info.location),
            (&self.summary, &mut info.summary),
        ];
        for (returned, current) in pairs {
            if let Some(value) = returned {
                *current = value.clone();
            }
        }
    }
}

/// A parsed resume holding only the top-level parts the service populated.
///
/// Entries already carry fresh ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialResume {
    pub personal_info: Option<PartialPersonalInfo>,
    pub experience: Option<Vec<ExperienceEntry>>,
    pub education: Option<Vec<EducationEntry>>,
    pub skills: Option<Vec<String>>,
}

/// Merges an intake result into the current document.
///
/// Personal info merges key by key. Experience, education and skills are
/// replaced wholesale, and only by a non-empty list.
pub fn apply_partial(current: &ResumeDocument, partial: &PartialResume) -> ResumeDocument {
    let mut next = current.clone();
    if let Some(info) = &partial.personal_info {
        info.apply_to(&mut next.personal_info);
    }
    if let Some(experience) = non_empty(&partial.experience) {
        next.experience = experience.to_vec();
    }
    if let Some(education) = non_empty(&partial.education) {
        next.education = education.to_vec();
    }
    if let Some(skills) = non_empty(&partial.skills) {
        next.skills = skills.to_vec();
    }
    next
}

fn non_empty<T>(list: &Option<Vec<T>>) -> Option<&[T]> {
    list.as_deref().filter(|l| !l.is_empty())
}
