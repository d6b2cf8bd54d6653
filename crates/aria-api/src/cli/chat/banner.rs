//! Welcome banner display for chat sessions.
//!
//! Prints a styled banner when a chat session starts, showing the agent
//! identity, the relay endpoint, and the session id.

use console::style;

/// Print the welcome banner at the start of a chat session.
pub fn print_welcome_banner(endpoint: &str, session_id: &str) {
    println!();
    println!("  ⚡ {}", style("ARIA").cyan().bold());
    println!("  {}", style("AI Research Intelligence Agent").dim());
    println!();
    println!("  {}  {}", style("Relay:").bold(), style(endpoint).dim());
    println!(
        "  {}  {}",
        style("Session:").bold(),
        style(&session_id[..8.min(session_id.len())]).dim()
    );
    println!();
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
