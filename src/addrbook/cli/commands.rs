use super::render::{print_error, print_messages};
use super::setup::{parse_line, Input, ReplCommand};
use addrbook::api::{AddressBookApi, CmdResult};
use addrbook::error::Result;
use addrbook::init::initialize;
use addrbook::store::DataStore;
use log::{debug, info};
use std::io::{self, BufRead, Write};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const FAREWELL: &str = "Good bye!";
pub const INVALID_COMMAND: &str = "Invalid command.";

pub fn run() -> Result<()> {
    let mut ctx = initialize()?;
    info!("using data file {}", ctx.data_file.display());

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl(&mut ctx.api, &mut stdin.lock(), &mut stdout.lock())
}

/// Read-eval-print loop. Saves the book and returns on `exit`, `close` or end of input.
pub(crate) fn repl<S, R, W>(api: &mut AddressBookApi<S>, input: &mut R, out: &mut W) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}", WELCOME)?;

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        // Invalid UTF-8 is replaced, not fatal.
        let mut buf = Vec::new();
        if input.read_until(b'\n', &mut buf)? == 0 {
            debug!("end of input");
            writeln!(out)?;
            return shutdown(api, out);
        }
        let line = String::from_utf8_lossy(&buf);

        match parse_line(&line) {
            Input::Blank => continue,
            Input::Invalid => print_error(out, INVALID_COMMAND)?,
            Input::Command(ReplCommand::Exit(_)) => return shutdown(api, out),
            Input::Command(command) => {
                debug!("dispatching {:?}", command);
                match dispatch(api, command) {
                    Ok(result) => print_messages(out, &result.messages)?,
                    Err(e) if e.is_recoverable() => print_error(out, &e.to_string())?,
                    Err(e) => return Err(e),
                }
            }
        }
    }
}

fn dispatch<S: DataStore>(api: &mut AddressBookApi<S>, command: ReplCommand) -> Result<CmdResult> {
    match command {
        ReplCommand::Hello(_) => Ok(api.hello()),
        ReplCommand::Add(args) => api.add_contact(&args.values),
        ReplCommand::Change(args) => api.change_contact(&args.values),
        ReplCommand::Phone(args) => api.show_phone(&args.values),
        ReplCommand::All(_) => api.show_all(),
        ReplCommand::AddBirthday(args) => api.add_birthday(&args.values),
        ReplCommand::ShowBirthday(args) => api.show_birthday(&args.values),
        ReplCommand::Birthdays(_) => api.birthdays(),
        ReplCommand::Exit(_) => Ok(CmdResult::default()),
    }
}

fn shutdown<S: DataStore, W: Write>(api: &mut AddressBookApi<S>, out: &mut W) -> Result<()> {
    writeln!(out, "{}", FAREWELL)?;
    api.save()?;
    debug!("saved {} contact(s)", api.book().len());
    Ok(())
}
