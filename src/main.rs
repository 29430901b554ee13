use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    style::{Color, ResetColor, SetForegroundColor},
    terminal::{disable_raw_mode, enable_raw_mode},
    ExecutableCommand,
};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use untis_flex_report::app::{self, normalize_input_path, RunOptions};
use untis_flex_report::json_export::{serialize_to_json, summary_export};
use untis_flex_report::launcher;
use untis_flex_report::report::{LessonFilter, ReportLayout};
use untis_flex_report::summary::FlexSettings;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Untis report workbook, asked for on stdin when omitted
    file_path: Option<PathBuf>,

    /// Only count lessons whose classes are all day-school classes
    #[arg(long)]
    day_school_only: bool,

    /// Do not open the result in the default application
    #[arg(long)]
    no_open: bool,

    /// Also print the evaluation as JSON to stdout
    #[arg(long, short = 'j')]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        report_failure(&e);
        // Keep the console window open when started by double click
        let _ = wait_for_keypress();
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    // stdout belongs to the JSON document in --json mode
    let mut console: Box<dyn Write> = if cli.json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };

    writeln!(console, "== BAUEs Untis-Auswertung ==")?;

    let input = match &cli.file_path {
        Some(path) => path.clone(),
        None => prompt_for_path(&mut console)?,
    };

    let filter = if cli.day_school_only {
        LessonFilter::DaySchoolOnly
    } else {
        LessonFilter::AllLessons
    };
    let options = RunOptions {
        input,
        layout: ReportLayout::default().with_filter(filter),
        settings: FlexSettings::default(),
    };

    let outcome = app::run(&options)?;

    writeln!(
        console,
        "{} Lehrkräfte ausgewertet: {}",
        outcome.report.teachers.len(),
        outcome.output_path.display()
    )?;
    for warning in &outcome.report.warnings {
        writeln!(
            console,
            "Hinweis ({}, Zeile {}): {}",
            warning.teacher, warning.row, warning
        )?;
    }

    if cli.json {
        let export = summary_export(&outcome.report, &outcome.summary);
        println!("{}", serialize_to_json(&export)?);
    }

    if !cli.no_open {
        launcher::open_in_viewer(&outcome.output_path)?;
    }

    Ok(())
}

fn prompt_for_path(console: &mut dyn Write) -> Result<PathBuf> {
    write!(console, "Pfad zum Untis-Bericht: ")?;
    console.flush()?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Unable to read the report path")?;

    Ok(normalize_input_path(&line))
}

fn report_failure(error: &anyhow::Error) {
    let mut stderr = io::stderr();
    let _ = stderr.execute(SetForegroundColor(Color::Red));
    eprintln!("FEHLER: {error:#}");
    let _ = stderr.execute(ResetColor);
}

fn wait_for_keypress() -> io::Result<()> {
    if !io::stdin().is_terminal() {
        return Ok(());
    }

    eprintln!("Beenden mit beliebiger Taste ...");
    enable_raw_mode()?;
    let result = loop {
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => break Ok(()),
            Ok(_) => continue,
            Err(e) => break Err(e),
        }
    };
    disable_raw_mode()?;

    result
}
