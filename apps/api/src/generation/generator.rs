//! Resume Generation: validates the request, assembles the prompt, calls the model.
//!
//! Flow: validate_request → build_resume_prompt → ResumeWriter::write → GeneratedResume.
//!
//! The returned text is plain text with `###` headers and `-` bullets; rendering it is the
//! document module's job.

use async_trait::async_trait;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::prompts::{
    EDUCATION_ENTRY_TEMPLATE, EXPERIENCE_ENTRY_TEMPLATE, RESUME_PROMPT_TEMPLATE, RESUME_SYSTEM,
};
use crate::generation::validation::{parse_salary, validate_request};
use crate::llm_client::prompts::{FACTUALITY_INSTRUCTION, PLAIN_TEXT_FORMAT_INSTRUCTION};
use crate::llm_client::{LlmClient, LlmError};
use crate::models::resume::{EducationEntry, JobEntry, ResumeRequest};

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Anything that can turn a prompt into resume text.
///
/// Carried in `AppState` as `Arc<dyn ResumeWriter>`; `LlmClient` is the production backend.
#[async_trait]
pub trait ResumeWriter: Send + Sync {
    async fn write(&self, prompt: &str, system: &str) -> Result<String, LlmError>;

    /// Model identifier, for logs and the health endpoint.
    fn model(&self) -> &str;
}

#[async_trait]
impl ResumeWriter for LlmClient {
    async fn write(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        self.call_text(prompt, system).await
    }

    fn model(&self) -> &str {
        LlmClient::model(self)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Generation
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedResume {
    pub request_id: Uuid,
    pub name: String,
    pub resume_text: String,
}

/// Validates the request and asks the writer for a resume. One model call, no retries
/// beyond those the client performs internally.
pub async fn generate_resume(
    writer: &dyn ResumeWriter,
    request: &ResumeRequest,
) -> Result<GeneratedResume, AppError> {
    validate_request(request)?;

    let request_id = Uuid::new_v4();
    let prompt = build_resume_prompt(request);

    info!(
        %request_id,
        model = writer.model(),
        job_type = request.job_type.label(),
        jobs = request.jobs.len(),
        educations = request.educations.len(),
        "Generating resume"
    );

    let resume_text = writer
        .write(&prompt, RESUME_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Resume generation failed: {e}")))?;

    info!(%request_id, chars = resume_text.len(), "Resume text generated");

    Ok(GeneratedResume {
        request_id,
        name: request.name.trim().to_string(),
        resume_text,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Prompt builders
// ────────────────────────────────────────────────────────────────────────────

pub(crate) fn build_resume_prompt(request: &ResumeRequest) -> String {
    let name = request.name.trim();
    let skills = request.skills.trim();
    let experience = build_experience_block(&request.jobs);
    let education = build_education_block(&request.educations);
    let email = example_email(name);

    fill_template(
        RESUME_PROMPT_TEMPLATE,
        &[
            ("name", name),
            ("length", request.length.label()),
            ("job_type", request.job_type.label()),
            ("tone", request.tone.label()),
            ("skills", skills),
            ("email", &email),
            ("experience", &experience),
            ("education", &education),
            ("factuality_instruction", FACTUALITY_INSTRUCTION),
            ("format_instruction", PLAIN_TEXT_FORMAT_INSTRUCTION),
        ],
    )
}

pub(crate) fn build_experience_block(jobs: &[JobEntry]) -> String {
    jobs.iter()
        .map(|job| {
            let salary = format_salary(&job.salary);
            fill_template(
                EXPERIENCE_ENTRY_TEMPLATE,
                &[
                    ("position", job.position.trim()),
                    ("company", job.company.trim()),
                    ("location", job.location.trim()),
                    ("date_joined", job.date_joined.trim()),
                    ("date_left", job.date_left.trim()),
                    ("problems_solved", job.problems_solved.trim()),
                    ("salary", &salary),
                ],
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn build_education_block(educations: &[EducationEntry]) -> String {
    educations
        .iter()
        .map(|edu| {
            fill_template(
                EDUCATION_ENTRY_TEMPLATE,
                &[
                    ("subject", edu.subject.trim()),
                    ("institution", edu.institution.trim()),
                    ("date_joined", edu.date_joined.trim()),
                    ("completion_date", edu.completion_date.trim()),
                    ("grade", edu.grade.trim()),
                ],
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `Jane Doe` → `jane.doe@email.com`.
fn example_email(name: &str) -> String {
    let local = name
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(".");
    format!("{local}@email.com")
}

/// `80000` → `$80,000`. Unparseable input is passed through trimmed.
pub(crate) fn format_salary(raw: &str) -> String {
    match parse_salary(raw) {
        Some(amount) => format!("${}", group_thousands(amount)),
        None => raw.trim().to_string(),
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Single-pass `{key}` substitution. Substituted values are never rescanned, so user text
/// containing `{name}` or similar is inserted verbatim. Unknown keys are left as-is.
pub(crate) fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return out;
        };
        let key = &after[..end];
        match vars.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(key);
                out.push('}');
            }
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}
