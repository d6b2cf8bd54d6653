//! Slash command parsing for the chat client.
//!
//! Commands start with `/` and cover session controls plus the quick-action
//! shortcuts (daily briefing, breaking news, new releases, forum scan).

use console::style;

/// Available slash commands in the chat client.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Clear the terminal screen.
    Clear,
    /// Exit the chat session.
    Exit,
    /// Submit the daily-briefing quick action.
    Briefing,
    /// Submit the breaking-news quick action.
    News,
    /// Submit the new-releases quick action.
    Releases,
    /// Enter forum-paste mode.
    Scan,
    /// Show the transcript so far.
    History,
    /// Unknown command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    match trimmed.to_lowercase().as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        "/briefing" | "/daily" => Some(ChatCommand::Briefing),
        "/news" => Some(ChatCommand::News),
        "/releases" => Some(ChatCommand::Releases),
        "/scan" | "/paste" => Some(ChatCommand::Scan),
        "/history" => Some(ChatCommand::History),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!(
        "  {} {}",
        style("/briefing").cyan(),
        "Today's AI briefing"
    );
    println!(
        "  {}     {}",
        style("/news").cyan(),
        "Most urgent AI news right now"
    );
    println!(
        "  {} {}",
        style("/releases").cyan(),
        "Recent model releases"
    );
    println!(
        "  {}     {}",
        style("/scan").cyan(),
        "Paste forum content to analyze"
    );
    println!(
        "  {}  {}",
        style("/history").cyan(),
        "Show the conversation so far"
    );
    println!("  {}    {}", style("/clear").cyan(), "Clear the screen");
    println!("  {}     {}", style("/help").cyan(), "Show this help message");
    println!("  {}     {}", style("/exit").cyan(), "End the chat session");
    println!();
    println!("  {}", style("Ctrl+D to exit").dim());
    println!();
}
