// Prompt Enhancer LLM prompt templates.

/// Fixed instruction placed ahead of the user's Role / Context / Task block.
pub const ENHANCE_INSTRUCTION: &str = "Given the following Role, Context, and Task, \
generate an enhanced, structured prompt. \
The prompt must: \
1. Improve clarity and completeness. \
2. Request GPT to clarify assumptions before responding. \
3. Specify an expected output format (e.g., bullet points, JSON, structured text).";
