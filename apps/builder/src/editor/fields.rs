//! Named fields the form can replace one at a time.

use serde::{Deserialize, Serialize};

use crate::models::{EducationEntry, ExperienceEntry, PersonalInfo};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PersonalField {
    FullName,
    Email,
    Phone,
    Linkedin,
    Location,
    Summary,
}

impl PersonalField {
    pub(crate) fn slot(self, info: &mut PersonalInfo) -> &mut String {
        match self {
            PersonalField::FullName => &mut info.full_name,
            PersonalField::Email => &mut info.email,
            PersonalField::Phone => &mut info.phone,
            PersonalField::Linkedin => &mut info.linkedin,
            PersonalField::Location => &mut info.location,
            PersonalField::Summary => &mut info.summary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExperienceField {
    Company,
    Role,
    StartDate,
    EndDate,
    Description,
}

impl ExperienceField {
    pub(crate) fn slot(self, entry: &mut ExperienceEntry) -> &mut String {
        match self {
            ExperienceField::Company => &mut entry.company,
            ExperienceField::Role => &mut entry.role,
            ExperienceField::StartDate => &mut entry.start_date,
            ExperienceField::EndDate => &mut entry.end_date,
            ExperienceField::Description => &mut entry.description,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EducationField {
    School,
    Degree,
    Year,
}

impl EducationField {
    pub(crate) fn slot(self, entry: &mut EducationEntry) -> &mut String {
        match self {
            EducationField::School => &mut entry.school,
            EducationField::Degree => &mut entry.degree,
            EducationField::Year => &mut entry.year,
        }
    }
}
