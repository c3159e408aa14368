//! Prompt template for transcript summaries.

/// Instruction appended when the caller supplies no custom prompt.
pub const DEFAULT_INSTRUCTION: &str =
    "Provide a comprehensive summary of the meeting transcript.";

const SYSTEM_PREAMBLE: &str = "You are an expert assistant that summarizes meeting transcripts \
accurately and concisely.

When summarizing:
- Identify key decisions and action items
- Highlight important discussion points
- Maintain a neutral, professional tone
- Structure the summary with clear headings";

/// System prompt: the fixed guidance followed by the caller's instruction, or
/// [`DEFAULT_INSTRUCTION`] when none (or an empty one) is given.
pub fn system_prompt(custom_instruction: Option<&str>) -> String {
    let instruction = custom_instruction
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_INSTRUCTION);
    format!("{}\n\n{}", SYSTEM_PREAMBLE, instruction)
}

pub fn user_prompt(transcript: &str) -> String {
    format!("Please summarize the following transcript:\n\n{}", transcript)
}
