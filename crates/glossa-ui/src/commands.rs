/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Plain text: replace the input and translate it
    Translate(String),
    /// Translate the current input as-is
    Go,
    Clear,
    From(String),
    To(String),
    Swap,
    Langs,
    Detect,
    Help,
    Quit,
    Unknown(String),
    Empty,
}

pub const HELP: &str = "\
Type text and press Enter to translate it. Start it with // to
translate text that begins with /.
  /go          translate the current input again
  /clear       empty the input
  /from <code> select the source language
  /to <code>   select the target language
  /swap        swap source and target
  /langs       list languages
  /detect      detect the input language and use it as source
  /quit        exit";

pub fn parse_command(line: &str) -> Command {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Command::Empty;
    }

    let Some(rest) = line.trim_start().strip_prefix('/') else {
        return Command::Translate(line.to_string());
    };
    if rest.starts_with('/') {
        return Command::Translate(rest.to_string());
    }

    let mut parts = rest.split_whitespace();
    let name = parts.next().unwrap_or_default().to_ascii_lowercase();
    let arg = parts.next().map(|a| a.to_ascii_lowercase());

    match (name.as_str(), arg) {
        ("go", None) => Command::Go,
        ("clear", None) => Command::Clear,
        ("from", Some(code)) => Command::From(code),
        ("to", Some(code)) => Command::To(code),
        ("swap", None) => Command::Swap,
        ("langs", None) => Command::Langs,
        ("detect", None) => Command::Detect,
        ("help", None) => Command::Help,
        ("quit" | "exit", None) => Command::Quit,
        _ => Command::Unknown(line.trim().to_string()),
    }
}
