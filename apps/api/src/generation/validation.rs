//! Request validation for resume generation.
//!
//! Collects every problem in one pass so the caller can fix the whole form at once.

use crate::errors::AppError;
use crate::models::resume::{EducationEntry, JobEntry, ResumeRequest, MAX_EDUCATIONS, MAX_JOBS};

/// Validates a generation request, returning all problems joined into one `Validation` error.
pub fn validate_request(request: &ResumeRequest) -> Result<(), AppError> {
    let problems = collect_problems(request);
    if problems.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(problems.join("; ")))
    }
}

pub(crate) fn collect_problems(request: &ResumeRequest) -> Vec<String> {
    let mut problems = Vec::new();

    if request.name.trim().is_empty() {
        problems.push("name is required".to_string());
    }
    if request.skills.trim().is_empty() {
        problems.push("skills is required".to_string());
    }

    if request.jobs.is_empty() {
        problems.push("at least one job entry is required".to_string());
    } else if request.jobs.len() > MAX_JOBS {
        problems.push(format!("at most {MAX_JOBS} job entries are allowed"));
    }
    for (i, job) in request.jobs.iter().enumerate() {
        check_job(i + 1, job, &mut problems);
    }

    if request.educations.is_empty() {
        problems.push("at least one education entry is required".to_string());
    } else if request.educations.len() > MAX_EDUCATIONS {
        problems.push(format!("at most {MAX_EDUCATIONS} education entries are allowed"));
    }
    for (i, education) in request.educations.iter().enumerate() {
        check_education(i + 1, education, &mut problems);
    }

    problems
}

fn check_job(n: usize, job: &JobEntry, problems: &mut Vec<String>) {
    let fields = [
        ("company", &job.company),
        ("location", &job.location),
        ("date_joined", &job.date_joined),
        ("date_left", &job.date_left),
        ("position", &job.position),
        ("problems_solved", &job.problems_solved),
        ("salary", &job.salary),
    ];
    for (field, value) in fields {
        if value.trim().is_empty() {
            problems.push(format!("job {n}: {field} is required"));
        }
    }
    if !job.salary.trim().is_empty() && parse_salary(&job.salary).is_none() {
        problems.push(format!("job {n}: salary must be a whole number"));
    }
}

fn check_education(n: usize, education: &EducationEntry, problems: &mut Vec<String>) {
    let fields = [
        ("subject", &education.subject),
        ("institution", &education.institution),
        ("date_joined", &education.date_joined),
        ("completion_date", &education.completion_date),
        ("grade", &education.grade),
    ];
    for (field, value) in fields {
        if value.trim().is_empty() {
            problems.push(format!("education {n}: {field} is required"));
        }
    }
}

/// Parses `80000`, `80,000` or `$80,000` into a whole number.
pub fn parse_salary(raw: &str) -> Option<u64> {
    let digits: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
