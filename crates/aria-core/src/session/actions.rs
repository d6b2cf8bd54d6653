//! Quick-action prompts.
//!
//! Canned submissions exposed as shortcuts by the chat client. Each goes
//! through the normal `submit` override path, so the busy guard and the
//! transcript rules apply unchanged.

/// Daily AI summary.
pub const DAILY_BRIEFING_PROMPT: &str = "Give me today's daily AI summary — breaking news, new releases, research, and anything interesting in the AI space.";

/// Most urgent current news.
pub const BREAKING_NEWS_PROMPT: &str =
    "What is the most breaking, urgent AI news happening right now today?";

/// Recent model releases.
pub const NEW_RELEASES_PROMPT: &str =
    "What new AI models have been released or announced recently?";

/// Wrap pasted forum content in the fixed analysis prompt.
pub fn forum_scan_prompt(content: &str) -> String {
    format!(
        "Please analyze these Moltbook forum posts and give me a structured summary of the most important AI developments, breaking news, and interesting discussions:\n\n{content}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forum_scan_prompt_embeds_content() {
        let prompt = forum_scan_prompt("post one\npost two");
        assert!(prompt.starts_with("Please analyze these Moltbook forum posts"));
        assert!(prompt.ends_with("post one\npost two"));
    }
}
