// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Output-format instruction shared by every prompt whose answer is rendered as a document.
/// The markers requested here are exactly the ones the line classifier recognises.
pub const PLAIN_TEXT_FORMAT_INSTRUCTION: &str = "\
    Format the answer as plain text, not a code block. \
    Start every section with a header line of the form `### Section Name`. \
    Write list items as lines starting with `- `. \
    Do NOT use tables, HTML, or numbered lists. \
    Do NOT add any commentary before or after the resume.";

/// Instruction that keeps the model from inventing employers, dates or grades.
pub const FACTUALITY_INSTRUCTION: &str = "\
    Use the employers, positions, dates, salaries and grades exactly as given. \
    You may infer achievements from the problems solved, but never invent new employers, \
    degrees or dates.";
