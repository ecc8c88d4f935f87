use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::form::WorkForm;
use crate::errors::AppResult;
use crate::models::{FieldId, TimeOfDay};
use crate::utils::colors::colorize_result;
use crate::utils::time::split_raw_time;
use serde::Serialize;
use std::io::IsTerminal;
use tracing::debug;

/// JSON shape of `calc --json`.
#[derive(Debug, Serialize)]
pub struct CalcOutput {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub break_time: TimeOfDay,
    pub worked_minutes: Option<i64>,
    pub formatted: String,
}

impl CalcOutput {
    pub fn from_form(form: &WorkForm) -> Self {
        Self {
            start: form.start(),
            end: form.end(),
            break_time: form.break_time(),
            worked_minutes: form.worked_minutes(),
            formatted: form.result(),
        }
    }
}

/// Feed a loose `H:MM` value into the hour and minute inputs of one pair.
pub fn apply_raw(form: &mut WorkForm, hour: FieldId, minute: FieldId, raw: Option<&str>) {
    let Some(raw) = raw else {
        return;
    };

    let (h, m) = split_raw_time(raw);
    form.input(hour, h);
    if let Some(m) = m {
        form.input(minute, m);
    }
}

/// Handle the `calc` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calc {
        start,
        end,
        break_time,
        json,
    } = cmd
    {
        let mut form = WorkForm::new(cfg.form_defaults()?);

        apply_raw(
            &mut form,
            FieldId::StartHour,
            FieldId::StartMinute,
            start.as_deref(),
        );
        apply_raw(&mut form, FieldId::EndHour, FieldId::EndMinute, end.as_deref());
        apply_raw(
            &mut form,
            FieldId::BreakHour,
            FieldId::BreakMinute,
            break_time.as_deref(),
        );

        debug!(
            start = %form.start(),
            end = %form.end(),
            break_time = %form.break_time(),
            "calc"
        );

        if *json {
            println!("{}", serde_json::to_string_pretty(&CalcOutput::from_form(&form))?);
            return Ok(());
        }

        let result = form.result();
        let shown = if cfg.colored_output && std::io::stdout().is_terminal() {
            colorize_result(&result, form.worked_minutes())
        } else {
            result
        };

        println!(
            "Start {}  End {}  Break {}",
            form.start(),
            form.end(),
            form.break_time()
        );
        println!("Total worked: {}", shown);
    }

    Ok(())
}
