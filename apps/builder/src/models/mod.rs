pub mod evaluation;
pub mod resume;
pub mod style;

pub use evaluation::{AtsEvaluation, ScoreBand};
pub use resume::{EducationEntry, EntryId, ExperienceEntry, PersonalInfo, ResumeDocument};
pub use style::{FontFamily, StyleConfiguration, TemplateId};
