//! Prompt text for the reasoning loop.

/// Answer substituted when a reply matches neither the action format nor
/// a final answer. Returned as the assistant's text, never as an error.
pub const PARSING_RECOVERY_MESSAGE: &str =
    "I wasn't able to turn my reasoning into a well-formed answer for that request. \
     Could you rephrase it or add a bit more detail?";

/// Answer substituted when the loop reaches its step limit without
/// producing a final answer.
pub const STEP_LIMIT_MESSAGE: &str =
    "I stopped before reaching a final answer because this request took too many \
     reasoning steps. Try narrowing the question and asking again.";

/// Builds the system prompt describing the assistant and the tool format.
pub fn build_system_prompt(tool_name: &str, tool_description: &str) -> String {
    format!(
        r#"You are an experienced product manager assistant. You help with product
strategy, requirements gathering, market analysis, and writing business documents.

You have access to the following tool:

{tool_name}: {tool_description}

To use the tool, reply in exactly this format:

Thought: what you are considering
Action: {tool_name}
Action Input: the search query

After each Action you will receive an Observation with the tool's results.
When you know the answer, reply in exactly this format:

Thought: I now know the answer
Final Answer: the answer to give the user

Always end with either an Action or a Final Answer."#
    )
}

/// Builds the per-step user prompt from the chat history, the new input,
/// and the scratchpad of intermediate thoughts and observations so far.
pub fn build_step_prompt(history: &str, input: &str, scratchpad: &str) -> String {
    let mut prompt = String::new();

    if !history.is_empty() {
        prompt.push_str("Previous conversation:\n");
        prompt.push_str(history);
        prompt.push_str("\n\n");
    }

    prompt.push_str("New input: ");
    prompt.push_str(input);

    if !scratchpad.is_empty() {
        prompt.push_str("\n\n");
        prompt.push_str(scratchpad);
    }

    prompt
}
