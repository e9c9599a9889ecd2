//! Line-oriented front end for the contact form.
//!
//! Each input line fills the current field; after the number the form is
//! submitted. Lines starting with `:` are commands.

use crate::domain::Field;
use crate::error::ConsoleResult;
use crate::form::{ContactForm, SubmitOutcome};
use crate::repositories::InMemoryContactBook;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

const HELP: &str = "\
Commands:
  :list   show saved contacts
  :reset  clear the form
  :help   show this message
  :quit   exit";

/// Drive `form` from `input` until `:quit` or end of input, adding accepted
/// contacts to `book`.
pub fn run<R, W>(
    form: &mut ContactForm,
    book: &mut InMemoryContactBook,
    mut input: R,
    output: &mut W,
) -> ConsoleResult<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Add a contact. Type :help for commands.")?;

    let mut field = Field::Name;
    prompt(output, form, field)?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        // A bad line is skipped; the draft and current field are kept.
        let raw = match std::str::from_utf8(&buf) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "Ignoring input line that is not valid UTF-8");
                writeln!(output, "Input is not valid UTF-8, line ignored.")?;
                prompt(output, form, field)?;
                continue;
            }
        };
        let line = raw.strip_suffix('\n').unwrap_or(raw);
        let line = line.strip_suffix('\r').unwrap_or(line);

        match line.trim() {
            ":quit" => break,
            ":help" => writeln!(output, "{}", HELP)?,
            ":list" => list(output, book)?,
            ":reset" => {
                form.reset();
                field = Field::Name;
                writeln!(output, "Form cleared.")?;
            }
            _ => {
                form.set_field(field, line);
                field = match next_step(form, field) {
                    Some(next) => next,
                    None => submit(output, form, book)?,
                };
            }
        }

        prompt(output, form, field)?;
    }

    writeln!(output)?;
    Ok(())
}

/// Field to ask for next, or `None` when the form should be submitted.
fn next_step(form: &ContactForm, entered: Field) -> Option<Field> {
    match entered {
        // On a retry the number is kept unless it was the problem.
        Field::Name if form.submit_count() > 0 && form.error(Field::Number).is_none() => None,
        Field::Name => Some(Field::Number),
        Field::Number => None,
    }
}

fn submit<W: Write>(
    output: &mut W,
    form: &mut ContactForm,
    book: &mut InMemoryContactBook,
) -> ConsoleResult<Field> {
    let outcome = form.submit(book);

    if let SubmitOutcome::Accepted(contact) = &outcome {
        writeln!(output, "Added {} ({})", contact.name, contact.number)?;
        return Ok(Field::Name);
    }

    let errors = outcome.errors();
    for e in &errors {
        writeln!(output, "{}: {}", e.field.label(), e.message)?;
    }
    let retry = errors.first().map(|e| e.field).unwrap_or(Field::Name);
    debug!(field = %retry, "Returning to first failing field");
    Ok(retry)
}

fn prompt<W: Write>(output: &mut W, form: &ContactForm, field: Field) -> ConsoleResult<()> {
    let current = form.draft().get(field);
    if current.is_empty() {
        write!(output, "{} (e.g. {}): ", field.label(), field.placeholder())?;
    } else {
        write!(output, "{} [{}]: ", field.label(), current)?;
    }
    output.flush()?;
    Ok(())
}

fn list<W: Write>(output: &mut W, book: &InMemoryContactBook) -> ConsoleResult<()> {
    if book.is_empty() {
        writeln!(output, "No contacts.")?;
        return Ok(());
    }
    for (i, contact) in book.contacts().iter().enumerate() {
        writeln!(output, "{}. {}: {}", i + 1, contact.name, contact.number)?;
    }
    Ok(())
}
