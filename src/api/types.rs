//! Parsed command for API interaction.

/// One request line split into a command name plus its arguments.
///
/// The name is normalized to upper-case; arguments keep their order and
/// original case. An empty line yields an empty command, which dispatch
/// treats as a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Command {
    pub name: String,
    pub args: Vec<String>,
}

impl Command {
    /// Splits `line` on runs of whitespace.
    ///
    /// The grammar has no quoting or escaping, so a value containing
    /// whitespace cannot be expressed as a single argument.
    pub fn parse(line: &str) -> Self {
        let mut tokens = line.split_whitespace();

        match tokens.next() {
            None => Command::default(),
            Some(name) => Command {
                name: name.to_uppercase(),
                args: tokens.map(str::to_owned).collect(),
            },
        }
    }
}
