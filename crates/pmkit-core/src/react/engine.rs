use async_trait::async_trait;

use super::prompts::{
    build_step_prompt, build_system_prompt, PARSING_RECOVERY_MESSAGE, STEP_LIMIT_MESSAGE,
};
use super::{ReasonError, Reasoner};
use crate::llm::LLM;
use crate::search::{SearchResult, SearchTool};
use crate::transcript::Transcript;

/// Concrete decide-then-act reasoning loop over one search tool.
///
/// Each step sends the chat history plus a scratchpad of intermediate
/// thoughts to the model, then either runs the requested search and
/// records an observation, or returns the model's final answer.
pub struct ReactLoop<L: LLM> {
    llm: L,
    tool: Box<dyn SearchTool>,
    max_results: u32,
    max_steps: u32,
}

impl<L: LLM> ReactLoop<L> {
    /// Creates a new loop over the given model and search tool.
    pub fn new(llm: L, tool: Box<dyn SearchTool>, max_results: u32, max_steps: u32) -> Self {
        Self {
            llm,
            tool,
            max_results,
            max_steps,
        }
    }

    fn format_observation(results: &[SearchResult]) -> String {
        if results.is_empty() {
            return "No results found.".to_string();
        }

        results
            .iter()
            .enumerate()
            .map(|(i, r)| format!("{}. {} ({})\n{}", i + 1, r.title, r.url, r.snippet))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[async_trait]
impl<L: LLM> Reasoner for ReactLoop<L> {
    async fn respond(&self, history: &Transcript, input: &str) -> Result<String, ReasonError> {
        let system = build_system_prompt(self.tool.name(), self.tool.description());
        let history_str = history.to_history_string();
        let mut scratchpad = String::new();

        for step in 0..self.max_steps {
            let prompt = build_step_prompt(&history_str, input, &scratchpad);
            let reply = self.llm.complete_with_system(&system, &prompt).await?;

            match parse_step(&reply) {
                StepOutcome::Final(answer) => {
                    tracing::debug!(step, "reasoning loop produced final answer");
                    return Ok(answer);
                }
                StepOutcome::Tool { name, input: query } => {
                    let observation = if name == self.tool.name() {
                        let results = self.tool.search(&query, self.max_results).await?;
                        Self::format_observation(&results)
                    } else {
                        format!("{} is not a valid tool.", name)
                    };

                    scratchpad.push_str(reply.trim());
                    scratchpad.push_str("\nObservation: ");
                    scratchpad.push_str(&observation);
                    scratchpad.push('\n');
                }
                StepOutcome::Unparseable => {
                    // Recovery policy: answer with a placeholder instead of
                    // failing, so the turn still completes normally.
                    tracing::warn!(step, "could not parse reasoning step, substituting recovery answer");
                    return Ok(PARSING_RECOVERY_MESSAGE.to_string());
                }
            }
        }

        tracing::warn!(max_steps = self.max_steps, "reasoning loop hit step limit");
        Ok(STEP_LIMIT_MESSAGE.to_string())
    }
}

/// What one model reply resolved to.
#[derive(Debug, PartialEq, Eq)]
enum StepOutcome {
    /// The model produced its final answer.
    Final(String),
    /// The model requested a tool invocation.
    Tool { name: String, input: String },
    /// The reply matched neither form.
    Unparseable,
}

/// Parses one model reply into a step outcome.
///
/// A `Final Answer:` marker wins over any action text, matching the
/// convention that the model ends its turn once it commits to an answer.
fn parse_step(reply: &str) -> StepOutcome {
    if let Some(pos) = reply.find("Final Answer:") {
        let answer = reply[pos + "Final Answer:".len()..].trim();
        return StepOutcome::Final(answer.to_string());
    }

    let mut action = None;
    let mut action_input = None;

    for line in reply.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("Action:") {
            action = Some(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix("Action Input:") {
            action_input = Some(rest.trim().to_string());
        }
    }

    match (action, action_input) {
        (Some(name), Some(input)) if !name.is_empty() => StepOutcome::Tool { name, input },
        _ => StepOutcome::Unparseable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_final_answer() {
        let reply = "Thought: I now know the answer\nFinal Answer: 42";
        assert_eq!(parse_step(reply), StepOutcome::Final("42".to_string()));
    }

    #[test]
    fn test_parse_action() {
        let reply = "Thought: need data\nAction: web_search\nAction Input: rust market share";
        assert_eq!(
            parse_step(reply),
            StepOutcome::Tool {
                name: "web_search".to_string(),
                input: "rust market share".to_string(),
            }
        );
    }

    #[test]
    fn test_final_answer_wins_over_action() {
        let reply = "Action: web_search\nAction Input: q\nFinal Answer: done";
        assert_eq!(parse_step(reply), StepOutcome::Final("done".to_string()));
    }

    #[test]
    fn test_parse_unparseable() {
        assert_eq!(parse_step("just some prose"), StepOutcome::Unparseable);
        assert_eq!(parse_step("Action: web_search"), StepOutcome::Unparseable);
        assert_eq!(parse_step(""), StepOutcome::Unparseable);
    }

    #[test]
    fn test_format_observation_empty() {
        let formatted = ReactLoop::<crate::llm::OpenAIClient>::format_observation(&[]);
        assert_eq!(formatted, "No results found.");
    }

    #[test]
    fn test_format_observation_numbers_results() {
        let results = vec![
            SearchResult {
                title: "A".to_string(),
                url: "https://a.example".to_string(),
                snippet: "alpha".to_string(),
            },
            SearchResult {
                title: "B".to_string(),
                url: "https://b.example".to_string(),
                snippet: "beta".to_string(),
            },
        ];
        let formatted = ReactLoop::<crate::llm::OpenAIClient>::format_observation(&results);
        assert!(formatted.starts_with("1. A (https://a.example)"));
        assert!(formatted.contains("2. B (https://b.example)"));
    }
}
