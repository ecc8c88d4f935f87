//! Line-driven version of the work form.
//!
//! Each line is one event: `focus <field>`, `set <field> [text]`, `show`,
//! `reset`, `help`, `quit`. The result is printed again after every change.

use crate::cli::parser::parse_field;
use crate::config::Config;
use crate::core::form::WorkForm;
use crate::errors::AppResult;
use crate::models::FieldId;
use crate::ui::messages::warning_to;
use crate::utils::colors::colorize_result;
use crate::utils::formatting::{bold, describe_field};
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::info;

const HELP: &str = "\
Commands:
  focus <field>         focus a field (its value becomes 0)
  set <field> [text]    type text into a field (no text clears it)
  show                  print all fields and the result
  reset                 restore the configured defaults
  help                  print this help
  quit | exit           leave
Fields: start-hour (sh), start-minute (sm), end-hour (eh),
        end-minute (em), break-hour (bh), break-minute (bm)";

/// Output options of a session.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    pub colored: bool,
    pub prompt: bool,
}

/// Handle the `form` subcommand
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut form = WorkForm::new(cfg.form_defaults()?);
    let interactive = io::stdin().is_terminal();
    let opts = SessionOptions {
        colored: cfg.colored_output && io::stdout().is_terminal(),
        prompt: interactive,
    };

    info!(interactive, "form session started");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(&mut form, stdin.lock(), &mut stdout, opts)
}

/// Drive `form` with the lines of `input`, writing every response to `out`.
pub fn run_session<R: BufRead, W: Write>(
    form: &mut WorkForm,
    input: R,
    out: &mut W,
    opts: SessionOptions,
) -> AppResult<()> {
    if opts.prompt {
        writeln!(out, "{}", bold("Work hours calculator"))?;
        writeln!(out, "Type 'help' for the list of commands.")?;
        write_result(form, out, opts)?;
        write!(out, "> ")?;
        out.flush()?;
    }

    for line in input.lines() {
        let line = line?;
        let line = line.trim();

        if !line.is_empty() && !handle_line(form, line, out, opts)? {
            break;
        }

        if opts.prompt {
            write!(out, "> ")?;
            out.flush()?;
        }
    }

    Ok(())
}

/// Returns `false` when the session should end.
fn handle_line<W: Write>(
    form: &mut WorkForm,
    line: &str,
    out: &mut W,
    opts: SessionOptions,
) -> AppResult<bool> {
    let (cmd, rest) = line
        .split_once(char::is_whitespace)
        .map(|(c, r)| (c, r.trim()))
        .unwrap_or((line, ""));

    match cmd.to_lowercase().as_str() {
        "quit" | "exit" => return Ok(false),
        "help" => writeln!(out, "{HELP}")?,
        "show" => {
            for field in FieldId::ALL {
                writeln!(out, "{}", describe_field(field, form.get(field)))?;
            }
            write_result(form, out, opts)?;
        }
        "reset" => {
            form.reset();
            write_result(form, out, opts)?;
        }
        "focus" => match parse_field(rest) {
            Ok(field) => {
                let v = form.focus(field);
                writeln!(out, "{}", describe_field(field, v))?;
                write_result(form, out, opts)?;
            }
            Err(e) => warning_to(out, e)?,
        },
        "set" => {
            let (code, text) = rest
                .split_once(char::is_whitespace)
                .map(|(c, t)| (c, t.trim()))
                .unwrap_or((rest, ""));

            match parse_field(code) {
                Ok(field) => {
                    let v = form.input(field, text);
                    writeln!(out, "{}", describe_field(field, v))?;
                    write_result(form, out, opts)?;
                }
                Err(e) => warning_to(out, e)?,
            }
        }
        other => warning_to(out, format!("Unknown command '{}' (type 'help')", other))?,
    }

    Ok(true)
}

fn write_result<W: Write>(form: &WorkForm, out: &mut W, opts: SessionOptions) -> AppResult<()> {
    let result = form.result();
    let shown = if opts.colored {
        colorize_result(&result, form.worked_minutes())
    } else {
        result
    };
    writeln!(out, "Total worked: {}", shown)?;
    Ok(())
}
