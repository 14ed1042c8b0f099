use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use std::io::Write;

use crate::api::{Client, Program};
use crate::interactive::ui::components::client_table::format_programs;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    #[value(name = "jsonl")]
    JsonL,
}

pub fn format_program(program: &Program, use_color: bool) -> String {
    if use_color {
        format!("{} {}", format!("#{}", program.id).dimmed(), program.name.bright_green())
    } else {
        format!("#{} {}", program.id, program.name)
    }
}

pub fn format_client(client: &Client, use_color: bool) -> String {
    let programs = format_programs(client);
    if use_color {
        format!(
            "{} {} <{}>\n  programs: {}",
            format!("#{}", client.id).dimmed(),
            client.name.bright_yellow(),
            client.email.bright_blue(),
            programs
        )
    } else {
        format!(
            "#{} {} <{}>\n  programs: {}",
            client.id, client.name, client.email, programs
        )
    }
}

pub fn write_programs<W: Write>(
    out: &mut W,
    programs: &[Program],
    format: OutputFormat,
    use_color: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            if programs.is_empty() {
                writeln!(out, "No programs found.")?;
            }
            for program in programs {
                writeln!(out, "{}", format_program(program, use_color))?;
            }
        }
        OutputFormat::Json => write_json(out, programs)?,
        OutputFormat::JsonL => write_json_lines(out, programs)?,
    }
    Ok(())
}

pub fn write_clients<W: Write>(
    out: &mut W,
    clients: &[Client],
    format: OutputFormat,
    use_color: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            if clients.is_empty() {
                writeln!(out, "No clients found.")?;
            }
            for client in clients {
                writeln!(out, "{}", format_client(client, use_color))?;
            }
        }
        OutputFormat::Json => write_json(out, clients)?,
        OutputFormat::JsonL => write_json_lines(out, clients)?,
    }
    Ok(())
}

/// A confirmation line for deletes; structured formats get `{"deleted": id}`.
pub fn write_deleted<W: Write>(
    out: &mut W,
    what: &str,
    id: i64,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{what} {id} deleted")?,
        OutputFormat::Json | OutputFormat::JsonL => {
            serde_json::to_writer(&mut *out, &serde_json::json!({ "deleted": id }))?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_json<W: Write, T: serde::Serialize>(out: &mut W, items: &[T]) -> Result<()> {
    let output = serde_json::json!({
        "results": items,
        "count": items.len(),
    });
    serde_json::to_writer_pretty(&mut *out, &output)?;
    writeln!(out)?;
    Ok(())
}

fn write_json_lines<W: Write, T: serde::Serialize>(out: &mut W, items: &[T]) -> Result<()> {
    for item in items {
        serde_json::to_writer(&mut *out, item)?;
        writeln!(out)?;
    }
    Ok(())
}
