use serde::{Deserialize, Serialize};

use crate::document::DocumentFormat;

/// Upper bounds on repeated entries, matching the form the API replaces.
pub const MAX_JOBS: usize = 4;
pub const MAX_EDUCATIONS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    SoftwareEngineer,
    DataScientist,
    ProductManager,
    GraphicDesigner,
    Other,
}

impl JobType {
    pub fn label(self) -> &'static str {
        match self {
            JobType::SoftwareEngineer => "Software Engineer",
            JobType::DataScientist => "Data Scientist",
            JobType::ProductManager => "Product Manager",
            JobType::GraphicDesigner => "Graphic Designer",
            JobType::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    Professional,
    Friendly,
    Creative,
    Formal,
}

impl Tone {
    pub fn label(self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Friendly => "Friendly",
            Tone::Creative => "Creative",
            Tone::Formal => "Formal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResumeLength {
    Short,
    #[default]
    Medium,
    Detailed,
}

impl ResumeLength {
    pub fn label(self) -> &'static str {
        match self {
            ResumeLength::Short => "Short (1 page)",
            ResumeLength::Medium => "Medium (1-2 pages)",
            ResumeLength::Detailed => "Detailed (2+ pages)",
        }
    }
}

/// One work-history entry. Every field is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobEntry {
    pub company: String,
    pub location: String,
    pub date_joined: String,
    pub date_left: String,
    pub position: String,
    pub problems_solved: String,
    /// Whole number; `$` and thousands separators are tolerated.
    pub salary: String,
}

/// One education entry. Every field is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub subject: String,
    pub institution: String,
    pub date_joined: String,
    pub completion_date: String,
    pub grade: String,
}

/// Request body for resume generation.
#[derive(Debug, Clone, Deserialize)]
pub struct ResumeRequest {
    pub name: String,
    /// Comma-separated free text.
    pub skills: String,
    pub job_type: JobType,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub length: ResumeLength,
    pub jobs: Vec<JobEntry>,
    pub educations: Vec<EducationEntry>,
    /// Only used by the generate-and-download endpoint.
    #[serde(default)]
    pub format: DocumentFormat,
}

/// Request body for rendering text that was already generated.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderRequest {
    pub name: String,
    pub resume_text: String,
    #[serde(default)]
    pub format: DocumentFormat,
}
