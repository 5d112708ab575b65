//! Form Editor — field-level edits of a [`ResumeDocument`].
//!
//! Every operation takes the current document and returns the next one for the
//! caller to adopt. There are no failure modes: values are stored exactly as
//! typed, and an identifier that matches nothing leaves the document unchanged.

pub mod fields;

use tracing::debug;

pub use fields::{EducationField, ExperienceField, PersonalField};

use crate::models::{EducationEntry, EntryId, ExperienceEntry, ResumeDocument};

/// Replaces one personal-info field.
pub fn update_personal_info(
    document: &ResumeDocument,
    field: PersonalField,
    value: &str,
) -> ResumeDocument {
    let mut next = document.clone();
    *field.slot(&mut next.personal_info) = value.to_string();
    next
}

// ────────────────────────────────────────────────────────────────────────────
// Experience
// ────────────────────────────────────────────────────────────────────────────

/// Appends a blank experience entry and returns its freshly minted id.
pub fn add_experience(document: &ResumeDocument) -> (ResumeDocument, EntryId) {
    let entry = ExperienceEntry::blank();
    let id = entry.id.clone();
    let mut next = document.clone();
    next.experience.push(entry);
    (next, id)
}

pub fn update_experience(
    document: &ResumeDocument,
    id: &EntryId,
    field: ExperienceField,
    value: &str,
) -> ResumeDocument {
    let mut next = document.clone();
    match next.experience.iter_mut().find(|e| &e.id == id) {
        Some(entry) => *field.slot(entry) = value.to_string(),
        None => debug!("update_experience: no entry with id {id}"),
    }
    next
}

pub fn remove_experience(document: &ResumeDocument, id: &EntryId) -> ResumeDocument {
    let mut next = document.clone();
    next.experience.retain(|e| &e.id != id);
    next
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

pub fn add_education(document: &ResumeDocument) -> (ResumeDocument, EntryId) {
    let entry = EducationEntry::blank();
    let id = entry.id.clone();
    let mut next = document.clone();
    next.education.push(entry);
    (next, id)
}

pub fn update_education(
    document: &ResumeDocument,
    id: &EntryId,
    field: EducationField,
    value: &str,
) -> ResumeDocument {
    let mut next = document.clone();
    match next.education.iter_mut().find(|e| &e.id == id) {
        Some(entry) => *field.slot(entry) = value.to_string(),
        None => debug!("update_education: no entry with id {id}"),
    }
    next
}

pub fn remove_education(document: &ResumeDocument, id: &EntryId) -> ResumeDocument {
    let mut next = document.clone();
    next.education.retain(|e| &e.id != id);
    next
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

/// Replaces the whole skills list from one comma-separated string.
pub fn update_skills(document: &ResumeDocument, raw: &str) -> ResumeDocument {
    let mut next = document.clone();
    next.skills = parse_skills(raw);
    next
}

/// Splits on commas, trims each token and drops the empty ones.
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// The text shown in the skills input for the current list.
pub fn skills_input_text(skills: &[String]) -> String {
    skills.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_skills_drops_empty_tokens_and_trims() {
        assert_eq!(parse_skills("A, B ,, C"), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_parse_skills_keeps_duplicates_in_order() {
        assert_eq!(parse_skills("Rust,Go,Rust"), vec!["Rust", "Go", "Rust"]);
    }

    #[test]
    fn test_parse_skills_empty_input_clears_list() {
        let doc = update_skills(&ResumeDocument::seed(), " , ,");
        assert!(doc.skills.is_empty());
    }

    #[test]
    fn test_update_personal_info_replaces_one_field() {
        let before = ResumeDocument::seed();
        let after = update_personal_info(&before, PersonalField::Email, "not-an-email");
        assert_eq!(after.personal_info.email, "not-an-email");
        assert_eq!(after.personal_info.full_name, before.personal_info.full_name);
        assert_eq!(after.experience, before.experience);
    }

    #[test]
    fn test_add_then_update_role_touches_only_that_entry() {
        let before = ResumeDocument::seed();
        let (added, id) = add_experience(&before);
        assert_eq!(added.experience.len(), before.experience.len() + 1);

        let after = update_experience(&added, &id, ExperienceField::Role, "Staff Engineer");

        for (old, new) in added.experience.iter().zip(after.experience.iter()) {
            assert_eq!(old.id, new.id);
            if old.id == id {
                assert_eq!(new.role, "Staff Engineer");
                assert_eq!(new.company, "");
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn test_new_entries_start_blank_with_unique_ids() {
        let (doc, first) = add_experience(&ResumeDocument::default());
        let (doc, second) = add_experience(&doc);
        assert_ne!(first, second);
        assert!(doc.experience.iter().all(|e| e.role.is_empty()));
    }

    #[test]
    fn test_remove_experience_by_id() {
        let before = ResumeDocument::seed();
        let after = remove_experience(&before, &EntryId::new("1"));
        assert_eq!(after.experience.len(), 1);
        assert_eq!(after.experience[0].company, "WebCreate LLC");
    }

    #[test]
    fn test_unknown_id_leaves_document_unchanged() {
        let before = ResumeDocument::seed();
        let missing = EntryId::new("missing");
        assert_eq!(
            update_experience(&before, &missing, ExperienceField::Company, "X"),
            before
        );
        assert_eq!(remove_education(&before, &missing), before);
    }

    #[test]
    fn test_education_add_update_remove() {
        let (doc, id) = add_education(&ResumeDocument::seed());
        let doc = update_education(&doc, &id, EducationField::Degree, "M.S. Physics");
        assert_eq!(doc.education.last().unwrap().degree, "M.S. Physics");
        assert_eq!(doc.education[0].degree, "B.S. Computer Science");

        let doc = remove_education(&doc, &id);
        assert_eq!(doc.education.len(), 1);
    }

    #[test]
    fn test_skills_input_text_joins_with_comma_space() {
        let skills = parse_skills("A,B");
        assert_eq!(skills_input_text(&skills), "A, B");
    }
}
