//! Interactive command loop.
//!
//! Parses user input into a verb plus string arguments and dispatches to the
//! address book. Argument-count validation lives here; the core models
//! validate field values themselves. Every failure is rendered as a
//! user-facing message and the loop keeps going.

use crate::error::{BookError, CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use std::io::{self, BufRead, Write};
use tracing::debug;

const GREETING: &str = "How can I help you?";
const FAREWELL: &str = "Good bye!";

const HELP: &str = "Available commands:
  hello                                 greeting
  add <name> <phone>                    add a contact or a phone to an existing one
  change <name> <old phone> <new phone> replace a contact's phone
  phone <name>                          show a contact's phones
  all                                   list all contacts
  add-birthday <name> <DD.MM.YYYY>      set a contact's birthday
  show-birthday <name>                  show a contact's birthday
  birthdays                             birthdays within the next 7 days
  delete <name>                         remove a contact
  help                                  this summary
  close | exit                          quit";

/// Split an input line into a lowercased command word and argument tokens.
///
/// Returns `None` for blank lines.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    let args = tokens.map(str::to_string).collect();
    Some((command, args))
}

fn require_args(args: &[String], count: usize, usage: &str) -> CommandResult<()> {
    if args.len() < count {
        return Err(CommandError::Usage(usage.to_string()));
    }
    Ok(())
}

/// `add <name> <phone>`: adds the phone to an existing contact (matched
/// case-insensitively) or creates a new record holding it.
fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    require_args(args, 2, "Provide name and phone number.")?;
    let (name, phone) = (&args[0], &args[1]);

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(name.as_str())?;
    record.add_phone(phone)?;
    book.add_record(record)?;
    Ok("Contact added.".to_string())
}

/// `change <name> <old phone> <new phone>`
fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    require_args(args, 3, "Provide name, old phone and new phone.")?;
    let (name, old_phone, new_phone) = (&args[0], &args[1], &args[2]);

    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.clone()))?;
    record.edit_phone(old_phone, new_phone)?;
    Ok("Contact updated.".to_string())
}

/// `phone <name>`
fn show_phones(args: &[String], book: &AddressBook) -> CommandResult<String> {
    require_args(args, 1, "Provide name.")?;
    let name = &args[0];

    let record = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.clone()))?;
    Ok(record.to_string())
}

/// `all`
fn list_contacts(book: &AddressBook) -> String {
    if book.is_empty() {
        return "There are no contacts.".to_string();
    }
    book.iter()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-birthday <name> <DD.MM.YYYY>`
fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    require_args(args, 2, "Provide name and birthday.")?;
    let (name, birthday) = (&args[0], &args[1]);

    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.clone()))?;
    record.add_birthday(birthday)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`
fn show_birthday(args: &[String], book: &AddressBook) -> CommandResult<String> {
    require_args(args, 1, "Provide name.")?;
    let name = &args[0];

    let record = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.clone()))?;
    match record.birthday() {
        Some(birthday) => Ok(format!("Birthday: {}", birthday)),
        None => Ok(format!("No birthday set for {}.", record.name())),
    }
}

/// `birthdays`
fn upcoming_birthdays(book: &AddressBook) -> String {
    let upcoming = book.get_upcoming_birthdays();
    if upcoming.is_empty() {
        return "No upcoming birthdays.".to_string();
    }
    upcoming
        .iter()
        .map(|reminder| reminder.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// `delete <name>`
fn delete_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    require_args(args, 1, "Provide name.")?;
    let name = &args[0];

    book.delete(name)?;
    Ok("Contact deleted.".to_string())
}

/// Dispatch a parsed command against the book.
///
/// `close`/`exit` are handled by the loop itself, not here.
pub fn handle_command(
    command: &str,
    args: &[String],
    book: &mut AddressBook,
) -> CommandResult<String> {
    match command {
        "hello" => Ok(GREETING.to_string()),
        "add" => add_contact(args, book),
        "change" => change_contact(args, book),
        "phone" => show_phones(args, book),
        "all" => Ok(list_contacts(book)),
        "add-birthday" => add_birthday(args, book),
        "show-birthday" => show_birthday(args, book),
        "birthdays" => Ok(upcoming_birthdays(book)),
        "delete" => delete_contact(args, book),
        "help" => Ok(HELP.to_string()),
        other => Err(CommandError::Usage(format!(
            "Unknown command '{}'. Type 'help' for the command list.",
            other
        ))),
    }
}

/// Run the command loop over the given reader/writer until `close`/`exit`
/// or end of input.
///
/// Failures from the core are rendered as reply lines; the loop itself only
/// errs on I/O problems.
pub fn run<R: BufRead, W: Write>(
    book: &mut AddressBook,
    input: R,
    mut output: W,
) -> io::Result<()> {
    writeln!(output, "Welcome to the assistant bot!")?;

    for line in input.lines() {
        let line = line?;
        let Some((command, args)) = parse_input(&line) else {
            continue;
        };
        debug!(command = %command, args = args.len(), "dispatching command");

        if command == "close" || command == "exit" {
            writeln!(output, "{}", FAREWELL)?;
            return Ok(());
        }

        match handle_command(&command, &args, book) {
            Ok(reply) => writeln!(output, "{}", reply)?,
            Err(err) => writeln!(output, "{}", err)?,
        }
        output.flush()?;
    }

    // End of input without an explicit exit
    writeln!(output, "{}", FAREWELL)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_input_lowercases_command() {
        let (command, args) = parse_input("ADD Alice 5551234567").unwrap();
        assert_eq!(command, "add");
        assert_eq!(args, vec!["Alice", "5551234567"]);
    }

    #[test]
    fn test_parse_input_blank_line() {
        assert!(parse_input("").is_none());
        assert!(parse_input("   ").is_none());
    }

    #[test]
    fn test_add_creates_then_updates() {
        let mut book = AddressBook::new();

        let reply = handle_command("add", &args(&["Alice", "1111111111"]), &mut book).unwrap();
        assert_eq!(reply, "Contact added.");

        // Same name (any casing) appends a phone instead of conflicting
        let reply = handle_command("add", &args(&["alice", "2222222222"]), &mut book).unwrap();
        assert_eq!(reply, "Contact updated.");
        assert_eq!(book.find("Alice").unwrap().phones().len(), 2);
    }

    #[test]
    fn test_add_requires_two_args() {
        let mut book = AddressBook::new();
        let err = handle_command("add", &args(&["Alice"]), &mut book).unwrap_err();
        assert!(matches!(err, CommandError::Usage(_)));
    }

    #[test]
    fn test_change_edits_phone() {
        let mut book = AddressBook::new();
        handle_command("add", &args(&["Alice", "1111111111"]), &mut book).unwrap();

        let reply = handle_command(
            "change",
            &args(&["Alice", "1111111111", "3333333333"]),
            &mut book,
        )
        .unwrap();
        assert_eq!(reply, "Contact updated.");
        assert_eq!(
            book.find("Alice").unwrap().phones()[0].as_str(),
            "3333333333"
        );
    }

    #[test]
    fn test_change_unknown_contact() {
        let mut book = AddressBook::new();
        let err = handle_command(
            "change",
            &args(&["Bob", "1111111111", "2222222222"]),
            &mut book,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Contact Bob not found");
    }

    #[test]
    fn test_phone_and_all() {
        let mut book = AddressBook::new();
        handle_command("add", &args(&["Alice", "1111111111"]), &mut book).unwrap();

        let reply = handle_command("phone", &args(&["ALICE"]), &mut book).unwrap();
        assert!(reply.contains("1111111111"));

        let reply = handle_command("all", &[], &mut book).unwrap();
        assert!(reply.contains("Alice"));
    }

    #[test]
    fn test_all_empty_book() {
        let mut book = AddressBook::new();
        let reply = handle_command("all", &[], &mut book).unwrap();
        assert_eq!(reply, "There are no contacts.");
    }

    #[test]
    fn test_birthday_commands() {
        let mut book = AddressBook::new();
        handle_command("add", &args(&["Alice", "1111111111"]), &mut book).unwrap();

        let reply =
            handle_command("add-birthday", &args(&["Alice", "24.03.1990"]), &mut book).unwrap();
        assert_eq!(reply, "Birthday added.");

        let reply = handle_command("show-birthday", &args(&["Alice"]), &mut book).unwrap();
        assert_eq!(reply, "Birthday: 24.03.1990");
    }

    #[test]
    fn test_show_birthday_when_unset() {
        let mut book = AddressBook::new();
        handle_command("add", &args(&["Alice", "1111111111"]), &mut book).unwrap();

        let reply = handle_command("show-birthday", &args(&["Alice"]), &mut book).unwrap();
        assert_eq!(reply, "No birthday set for Alice.");
    }

    #[test]
    fn test_delete_command() {
        let mut book = AddressBook::new();
        handle_command("add", &args(&["Alice", "1111111111"]), &mut book).unwrap();

        let reply = handle_command("delete", &args(&["alice"]), &mut book).unwrap();
        assert_eq!(reply, "Contact deleted.");
        assert!(book.is_empty());
    }

    #[test]
    fn test_unknown_command() {
        let mut book = AddressBook::new();
        let err = handle_command("frobnicate", &[], &mut book).unwrap_err();
        assert!(err.to_string().contains("Unknown command"));
    }

    #[test]
    fn test_run_loop_exits_on_close() {
        let mut book = AddressBook::new();
        let input = b"hello\nadd Alice 1111111111\nclose\nadd Bob 2222222222\n" as &[u8];
        let mut output = Vec::new();

        run(&mut book, input, &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("How can I help you?"));
        assert!(output.contains("Contact added."));
        assert!(output.contains("Good bye!"));
        // Input after `close` is never processed
        assert!(book.find("Bob").is_none());
    }

    #[test]
    fn test_run_loop_reports_errors_and_continues() {
        let mut book = AddressBook::new();
        let input = b"add Alice 123\nadd Alice 1111111111\nexit\n" as &[u8];
        let mut output = Vec::new();

        run(&mut book, input, &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Phone number must consist of 10 digits"));
        assert!(output.contains("Contact added."));
    }
}
