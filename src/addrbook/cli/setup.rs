use clap::{Args, Parser, Subcommand};

/// One line typed at the prompt, parsed without a binary name.
#[derive(Parser, Debug)]
#[command(
    name = "addrbook",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct ReplLine {
    #[command(subcommand)]
    pub command: ReplCommand,
}

/// Free-form positional arguments; handlers check their shape.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    #[arg(num_args = 0.., allow_hyphen_values = true, trailing_var_arg = true)]
    pub values: Vec<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Greet
    Hello(Tokens),
    /// Add a contact or append phones: add <name> <phone>...
    Add(Tokens),
    /// Replace a contact's phones: change <name> <phone>...
    Change(Tokens),
    /// Show a contact's phones: phone <name>
    Phone(Tokens),
    /// List every contact
    All(Tokens),
    /// Set a birthday: add-birthday <name> <DD.MM.YYYY>
    AddBirthday(Tokens),
    /// Show a birthday: show-birthday <name>
    ShowBirthday(Tokens),
    /// Birthdays in the coming week
    Birthdays(Tokens),
    /// Save and quit
    #[command(alias = "close")]
    Exit(Tokens),
}

impl ReplCommand {
    fn tokens_mut(&mut self) -> &mut Tokens {
        match self {
            ReplCommand::Hello(t)
            | ReplCommand::Add(t)
            | ReplCommand::Change(t)
            | ReplCommand::Phone(t)
            | ReplCommand::All(t)
            | ReplCommand::AddBirthday(t)
            | ReplCommand::ShowBirthday(t)
            | ReplCommand::Birthdays(t)
            | ReplCommand::Exit(t) => t,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Blank,
    Command(ReplCommand),
    Invalid,
}

/// Split on whitespace and lowercase the command word.
///
/// Only the command word goes through clap; the remaining words are kept
/// verbatim, so `--` and leading dashes reach the handlers unchanged.
pub fn parse_line(line: &str) -> Input {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Input::Blank;
    };

    match ReplLine::try_parse_from([first.to_lowercase()]) {
        Ok(parsed) => {
            let mut command = parsed.command;
            command.tokens_mut().values = words.map(str::to_string).collect();
            Input::Command(command)
        }
        Err(_) => Input::Invalid,
    }
}
