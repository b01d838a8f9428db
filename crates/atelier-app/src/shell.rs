//! Interactive standalone shell.
//!
//! Each stdin line is a synthesized UI interaction: an element id to
//! dispatch, or one of a few utility commands. This is the executable
//! proof that every gated flow runs without a live console.

use std::io::{self, BufRead, Write};

use tracing::info;

use atelier_bridge::preview::present_local_preview;
use atelier_bridge::{ConsoleBridge, InteractionEvent, Page};
use atelier_platform::copy_text_to_clipboard;

/// What a processed line asks the loop to do next.
#[derive(Debug, PartialEq, Eq)]
enum LineOutcome {
    Continue,
    Quit,
}

pub fn run(bridge: &ConsoleBridge, page: &mut Page) -> io::Result<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "atelier standalone shell — element id per line, 'quit' to leave")?;
    print_actions(page, &mut stdout)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if handle_line(bridge, page, line.trim()) == LineOutcome::Quit {
            break;
        }
    }
    info!("shell finished");
    Ok(())
}

fn print_actions(page: &Page, out: &mut impl Write) -> io::Result<()> {
    let mut ids: Vec<&str> = page
        .elements()
        .filter(|element| element.handler().is_some())
        .map(|element| element.id())
        .collect();
    ids.sort_unstable();

    writeln!(out, "registered actions:")?;
    for id in ids {
        writeln!(out, "  {id}")?;
    }
    Ok(())
}

fn handle_line(bridge: &ConsoleBridge, page: &mut Page, line: &str) -> LineOutcome {
    match line {
        "" => LineOutcome::Continue,
        "quit" | "exit" => LineOutcome::Quit,
        _ => {
            if let Some(text) = line.strip_prefix("copy ") {
                copy_text_to_clipboard(text);
            } else if let Some(rest) = line.strip_prefix("preview ") {
                let (src, title) = match rest.split_once(' ') {
                    Some((src, title)) => (src, title),
                    None => (rest, ""),
                };
                bridge.facade().preview_image(src, title);
                present_local_preview(page, src, title);
            } else {
                let event = match page.element(line) {
                    Some(element) => InteractionEvent::from_element(element),
                    None => InteractionEvent::new(line),
                };
                bridge.dispatch(&event);
            }
            LineOutcome::Continue
        }
    }
}
