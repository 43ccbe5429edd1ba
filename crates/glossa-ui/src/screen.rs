use std::io::{self, Write};

use glossa_core::DisplaySnapshot;
use glossa_types::{LanguagePair, SUPPORTED_LANGUAGES};

/// Line-oriented output. The prompt is only drawn for an interactive terminal.
pub struct Screen<W: Write> {
    out: W,
    interactive: bool,
    last_rendered: Option<DisplaySnapshot>,
}

impl<W: Write> Screen<W> {
    pub fn new(out: W, interactive: bool) -> Self {
        Self {
            out,
            interactive,
            last_rendered: None,
        }
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// Status wins over output: while translating or after a failure the
    /// previous output is already on screen above. Repeats of the last
    /// rendered display are skipped.
    pub fn render(&mut self, display: &DisplaySnapshot) -> io::Result<()> {
        if self.last_rendered.as_ref() == Some(display) {
            return Ok(());
        }

        if display.status.is_empty() {
            self.line(&display.output)?;
        } else {
            self.line(&display.status)?;
        }
        self.last_rendered = Some(display.clone());
        Ok(())
    }

    pub fn label(&mut self, pair: &LanguagePair) -> io::Result<()> {
        if self.interactive {
            self.line(&pair.action_label())?;
        }
        Ok(())
    }

    pub fn languages(&mut self, pair: &LanguagePair) -> io::Result<()> {
        for lang in SUPPORTED_LANGUAGES {
            let marker = match (lang.code == pair.source, lang.code == pair.target) {
                (true, true) => "from/to",
                (true, false) => "from",
                (false, true) => "to",
                (false, false) => "",
            };
            writeln!(self.out, "  {:<3} {:<8} {}", lang.code, lang.name, marker)?;
        }
        Ok(())
    }

    pub fn prompt(&mut self) -> io::Result<()> {
        if self.interactive {
            write!(self.out, "> ")?;
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(screen: Screen<Vec<u8>>) -> String {
        String::from_utf8(screen.into_inner()).unwrap()
    }

    #[test]
    fn render_prefers_status() {
        let mut screen = Screen::new(Vec::new(), false);
        screen
            .render(&DisplaySnapshot {
                status: "Error: connection refused".into(),
                output: "Hola".into(),
            })
            .unwrap();
        screen
            .render(&DisplaySnapshot {
                status: String::new(),
                output: "Hola Mundo".into(),
            })
            .unwrap();

        assert_eq!(text(screen), "Error: connection refused\nHola Mundo\n");
    }

    #[test]
    fn repeated_display_is_rendered_once() {
        let mut screen = Screen::new(Vec::new(), false);
        let done = DisplaySnapshot {
            status: String::new(),
            output: "Hola".into(),
        };
        let busy = DisplaySnapshot {
            status: "Translating...".into(),
            output: "Hola".into(),
        };

        for display in [&done, &done, &busy, &done] {
            screen.render(display).unwrap();
        }

        assert_eq!(text(screen), "Hola\nTranslating...\nHola\n");
    }

    #[test]
    fn non_interactive_skips_prompt_and_label() {
        let mut screen = Screen::new(Vec::new(), false);
        screen.label(&LanguagePair::default()).unwrap();
        screen.prompt().unwrap();
        assert_eq!(text(screen), "");
    }

    #[test]
    fn interactive_shows_prompt_and_label() {
        let mut screen = Screen::new(Vec::new(), true);
        screen.label(&LanguagePair::default()).unwrap();
        screen.prompt().unwrap();
        assert_eq!(text(screen), "Translate from English to Spanish\n> ");
    }

    #[test]
    fn language_list_marks_selection() {
        let mut screen = Screen::new(Vec::new(), false);
        screen.languages(&LanguagePair::new("en", "fr")).unwrap();
        let out = text(screen);

        assert!(out.contains("en  English  from"));
        assert!(out.contains("fr  French   to"));
        assert_eq!(out.lines().count(), SUPPORTED_LANGUAGES.len());
    }
}
