// All LLM prompt constants for the Generation module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for resume writing.
pub const RESUME_SYSTEM: &str = "You are an expert resume writer. \
    You write highly professional, well-structured resumes tailored to a target role. \
    Use clear, concise, and action-oriented language. \
    Avoid generic phrases unless supported by specific achievements.";

/// Resume prompt template.
/// Replace: {name}, {length}, {job_type}, {tone}, {skills}, {email},
///          {experience}, {education}, {format_instruction}, {factuality_instruction}
pub const RESUME_PROMPT_TEMPLATE: &str = r#"Create a {length}-length resume for {name} with the following details:
- Education:
{education}
- Experience:
{experience}
- Job Type: {job_type}
- Skills: {skills}
- Tone: {tone}

The resume should be highly professional, well-structured, and tailored for the {job_type} role. Include the following sections:
1. Personal Information: Include the name, a professional email (e.g., {email}), and a phone number (e.g., +1-555-123-4567).
2. Professional Summary: A concise 3-4 sentence summary highlighting the candidate's experience, skills, and career goals tailored for the {job_type} role.
3. Skills: List the provided skills ({skills}) and infer additional relevant skills for the {job_type} role.
4. Experience: Format each experience entry with the job title, company name, location, date range, problems solved, salary, and 2-3 bullet points detailing achievements inferred from problems solved.
5. Education: Format each education entry with the subject, institution, date range, and grade.
6. Certifications (optional): Infer relevant certifications for the {job_type} role if applicable.

{factuality_instruction}

{format_instruction}"#;

/// One experience entry. Replace: {position}, {company}, {location}, {date_joined},
/// {date_left}, {problems_solved}, {salary}
pub const EXPERIENCE_ENTRY_TEMPLATE: &str = "- **{position}** at {company}, {location}, {date_joined} to {date_left}
  - Problems Solved: {problems_solved}
  - Salary: {salary}
  - Achievements: [Infer 2-3 achievements based on problems solved]";

/// One education entry. Replace: {subject}, {institution}, {date_joined},
/// {completion_date}, {grade}
pub const EDUCATION_ENTRY_TEMPLATE: &str =
    "- **{subject}**, {institution}, {date_joined} to {completion_date}, Grade: {grade}";
