//! Main chat loop orchestration.
//!
//! Coordinates the conversation lifecycle: session setup, welcome banner and
//! greeting, the input loop with slash commands, the forum-paste flow, and
//! the submit/relay/settle cycle with a spinner while a reply is
//! outstanding.

use std::time::Instant;

use console::style;
use tracing::debug;

use aria_core::session::actions::{
    BREAKING_NEWS_PROMPT, DAILY_BRIEFING_PROMPT, NEW_RELEASES_PROMPT, forum_scan_prompt,
};
use aria_core::session::relay::TranscriptRelay;
use aria_core::session::transcript::ChatSession;
use aria_types::message::MessageRole;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer::ChatRenderer;

/// Run the interactive chat loop against a relay endpoint.
pub async fn run_chat_loop<R: TranscriptRelay>(relay: &R, endpoint: &str) -> anyhow::Result<()> {
    let mut session = ChatSession::new();
    let renderer = ChatRenderer::new();

    print_welcome_banner(endpoint, &session.id().to_string());

    // The seeded greeting is the first rendered turn.
    if let Some(welcome) = session.transcript().first() {
        println!("{}", renderer.render(&welcome.content));
    }

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, _writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("failed to initialize input: {e}"))?;

    loop {
        let event = chat_input.read_line().await;
        match event {
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!(
                    "\n  {}",
                    style("Press Ctrl+D to exit, or keep chatting.").dim()
                );
                continue;
            }
            InputEvent::Message(text) => {
                if text.is_empty() {
                    continue;
                }

                if let Some(cmd) = commands::parse(&text) {
                    match cmd {
                        ChatCommand::Help => commands::print_help(),
                        ChatCommand::Clear => chat_input.clear(),
                        ChatCommand::Exit => {
                            println!("\n  {}", style("Session ended.").dim());
                            break;
                        }
                        ChatCommand::History => print_history(&session),
                        ChatCommand::Briefing => {
                            exchange(&mut session, relay, &renderer, Some(DAILY_BRIEFING_PROMPT))
                                .await;
                        }
                        ChatCommand::News => {
                            exchange(&mut session, relay, &renderer, Some(BREAKING_NEWS_PROMPT))
                                .await;
                        }
                        ChatCommand::Releases => {
                            exchange(&mut session, relay, &renderer, Some(NEW_RELEASES_PROMPT))
                                .await;
                        }
                        ChatCommand::Scan => {
                            println!(
                                "  {}",
                                style("Paste forum content below; finish with /end on its own line.")
                                    .dim()
                            );
                            match chat_input.read_paste().await {
                                Some(content) if !content.trim().is_empty() => {
                                    let prompt_text = forum_scan_prompt(&content);
                                    exchange(&mut session, relay, &renderer, Some(&prompt_text))
                                        .await;
                                }
                                Some(_) => {
                                    println!("  {}", style("Nothing to analyze.").dim());
                                }
                                None => {
                                    println!("  {}", style("Scan cancelled.").dim());
                                }
                            }
                        }
                        ChatCommand::Unknown(cmd) => {
                            println!(
                                "  {} Unknown command: {cmd}. Type /help for commands.",
                                style("!").yellow().bold()
                            );
                        }
                    }
                    continue;
                }

                session.set_pending(text);
                exchange(&mut session, relay, &renderer, None).await;
            }
        }
    }

    Ok(())
}

/// One submit/relay/settle cycle, printing the newest turns as they land.
async fn exchange<R: TranscriptRelay>(
    session: &mut ChatSession,
    relay: &R,
    renderer: &ChatRenderer,
    override_text: Option<&str>,
) {
    let Some(payload) = session.submit(override_text) else {
        return;
    };

    // Quick actions bypass the readline echo, so show the submitted turn.
    if override_text.is_some() {
        if let Some(turn) = session.transcript().last() {
            println!("  {} {}", style("You >").green().bold(), turn.content);
        }
    }

    let spinner = indicatif::ProgressBar::new_spinner();
    spinner.set_style(
        indicatif::ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message("thinking...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));

    let started = Instant::now();
    let outcome = relay.complete(payload).await;
    let response_ms = started.elapsed().as_millis() as u64;
    spinner.finish_and_clear();

    let reply = session.settle(outcome);
    println!("{}", renderer.render(&reply.content));
    renderer.print_latency_footer(response_ms);

    debug!(session = %session.id(), response_ms, "exchange settled");
}

/// Print the transcript so far, one preview line per turn.
fn print_history(session: &ChatSession) {
    println!();
    for turn in session.transcript() {
        let label = match turn.role {
            MessageRole::User => style("You").green().bold(),
            MessageRole::Assistant => style("ARIA").cyan().bold(),
        };
        let preview: String = if turn.content.chars().count() > 100 {
            let head: String = turn.content.chars().take(97).collect();
            format!("{head}...")
        } else {
            turn.content.clone()
        };
        println!("  {label} {}", preview.replace('\n', " "));
    }
    println!();
}
