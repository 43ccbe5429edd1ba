use std::io::Write;

use glossa_types::AppEvent;

use crate::commands::{Command, HELP};
use crate::screen::Screen;
use crate::state::FormState;
use crate::DisplaySource;

/// What the loop should do after a line of input
#[derive(Debug)]
pub enum Flow {
    Continue,
    Send(AppEvent),
    Quit,
}

pub fn handle_command<W: Write>(
    command: Command,
    form: &mut FormState,
    screen: &mut Screen<W>,
) -> std::io::Result<Flow> {
    let flow = match command {
        Command::Translate(text) => {
            form.input = text;
            Flow::Send(AppEvent::TranslateRequested(form.snapshot()))
        }
        Command::Go => Flow::Send(AppEvent::TranslateRequested(form.snapshot())),
        Command::Clear => {
            form.input.clear();
            Flow::Continue
        }
        Command::From(code) => {
            if form.select_source(&code).is_some() {
                screen.label(&form.pair)?;
            } else {
                screen.line(&format!("Unknown language '{code}', see /langs"))?;
            }
            Flow::Continue
        }
        Command::To(code) => {
            if form.select_target(&code).is_some() {
                screen.label(&form.pair)?;
            } else {
                screen.line(&format!("Unknown language '{code}', see /langs"))?;
            }
            Flow::Continue
        }
        Command::Swap => {
            form.swap();
            screen.label(&form.pair)?;
            Flow::Continue
        }
        Command::Langs => {
            screen.languages(&form.pair)?;
            Flow::Continue
        }
        Command::Detect => Flow::Send(AppEvent::DetectRequested {
            text: form.input.clone(),
        }),
        Command::Help => {
            screen.line(HELP)?;
            Flow::Continue
        }
        Command::Quit => Flow::Quit,
        Command::Unknown(cmd) => {
            screen.line(&format!("Unknown command {cmd}, see /help"))?;
            Flow::Continue
        }
        Command::Empty => Flow::Continue,
    };

    Ok(flow)
}

pub fn handle_event<W: Write>(
    event: AppEvent,
    form: &mut FormState,
    screen: &mut Screen<W>,
    display: &impl DisplaySource,
) -> std::io::Result<()> {
    match event {
        AppEvent::Redraw => {
            screen.render(&display.current_display())?;
        }
        AppEvent::LanguageDetected { code } => match form.select_source(&code) {
            Some(lang) => {
                screen.line(&format!("Detected {} ({})", lang.name, lang.code))?;
                screen.label(&form.pair)?;
            }
            None => {
                screen.line(&format!("Detected unsupported language '{code}'"))?;
            }
        },
        AppEvent::Notice(message) => {
            screen.line(&message)?;
        }
        AppEvent::BackendReady => {
            tracing::debug!("Backend ready");
        }
        _ => {}
    }

    Ok(())
}
