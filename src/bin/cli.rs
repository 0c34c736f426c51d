use std::io::{self, BufRead, Write};

use cpm_schedule::{
    Activity, Catalog, Instant, ProjectMetadata, Schedule, Task, load_catalog_from_csv,
    load_catalog_from_json, load_catalog_from_text, schedule,
};
use polars::prelude::{AnyValue, DataFrame};
use tracing_subscriber::EnvFilter;

fn cell_text(av: &AnyValue) -> String {
    match av {
        AnyValue::Null => String::new(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::Float64(v) => v.to_string(),
        AnyValue::Boolean(v) => if *v { "yes".into() } else { String::new() },
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        _ => av.to_string(),
    }
}

fn render_df_as_text_table(df: &DataFrame) -> String {
    let columns = df.get_columns();
    let col_names: Vec<String> = columns.iter().map(|c| c.name().to_string()).collect();

    let cells: Vec<Vec<String>> = (0..df.height())
        .map(|row_idx| {
            columns
                .iter()
                .map(|col| col.get(row_idx).map(|av| cell_text(&av)).unwrap_or_default())
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = col_names.iter().map(|n| n.len()).collect();
    for row in &cells {
        for (ci, s) in row.iter().enumerate() {
            widths[ci] = widths[ci].max(s.len());
        }
    }

    let mut sep = String::from("+");
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let render_row = |values: &[String]| {
        let mut line = String::from("|");
        for (ci, s) in values.iter().enumerate() {
            line.push(' ');
            line.push_str(s);
            line.push_str(&" ".repeat(widths[ci].saturating_sub(s.len())));
            line.push_str(" |");
        }
        line
    };

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    out.push_str(&render_row(&col_names));
    out.push('\n');
    out.push_str(&sep);
    out.push('\n');
    for row in &cells {
        out.push_str(&render_row(row));
        out.push('\n');
    }
    out.push_str(&sep);
    out.push('\n');
    out
}

fn print_help() {
    println!(
        "Commands:\n  help                               Show this help\n  show                               Show the task catalog\n  add <name> <duration> [prereqs...] Upsert a task\n  remove <name>                      Remove a task\n  load <text|csv|json> <path>        Replace the catalog from a file\n  meta name <text...>                Set the project name\n  meta desc <text...>                Set the project description\n  compute                            Run forward + backward passes\n  order                              Show activities by start (after compute)\n  critical                           Show the critical path (after compute)\n  get <name>                         Show one activity (after compute)\n  json                               Print the computed schedule as JSON\n  quit|exit                          Exit"
    );
}

struct Session {
    tasks: Vec<Task>,
    metadata: ProjectMetadata,
    schedule: Option<Schedule>,
}

impl Session {
    fn new() -> Self {
        Self {
            tasks: Vec::new(),
            metadata: ProjectMetadata::default(),
            schedule: None,
        }
    }

    fn catalog(&self) -> Result<Catalog, String> {
        Catalog::new(self.tasks.clone())
            .map(|catalog| catalog.with_metadata(self.metadata.clone()))
            .map_err(|err| err.to_string())
    }

    fn replace(&mut self, catalog: Catalog) {
        self.metadata = catalog.metadata().clone();
        self.tasks = catalog.tasks().map(|task| task.as_ref().clone()).collect();
        self.schedule = None;
    }

    fn upsert(&mut self, task: Task) {
        match self.tasks.iter_mut().find(|t| t.name() == task.name()) {
            Some(existing) => *existing = task,
            None => self.tasks.push(task),
        }
        self.schedule = None;
    }

    fn remove(&mut self, name: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.name() != name);
        self.schedule = None;
        self.tasks.len() != before
    }
}

fn show_catalog(session: &Session) {
    match session.catalog() {
        Ok(catalog) => match catalog.to_dataframe() {
            Ok(df) => {
                println!("Project: {}", session.metadata.name);
                println!("{}", render_df_as_text_table(&df));
            }
            Err(e) => println!("Error: {}", e),
        },
        Err(e) => println!("Error: {}", e),
    }
}

fn show_schedule(schedule: &Schedule) {
    match schedule.to_dataframe() {
        Ok(df) => println!("{}", render_df_as_text_table(&df)),
        Err(e) => println!("Error: {}", e),
    }
}

fn show_activities(activities: &[&Activity]) {
    for activity in activities {
        println!(
            "{} start={} finish={} latest_finish={} slack={}",
            activity.name(),
            activity.start(),
            activity.finish(),
            activity.latest_finish(),
            activity.slack()
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut session = Session::new();

    println!("CPM Schedule (CLI) - type 'help' for commands\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                println!("Error: {}", e);
                break;
            }
            None => break,
        };
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&cmd, args)) = parts.split_first() else {
            continue;
        };

        match cmd {
            "help" => print_help(),
            "quit" | "exit" => break,
            "show" => show_catalog(&session),
            "add" => match args {
                [name, dur_s, prereqs @ ..] => {
                    let duration: Instant = match dur_s.parse() {
                        Ok(v) => v,
                        Err(e) => {
                            println!("Invalid duration: {}", e);
                            continue;
                        }
                    };
                    match Task::new(*name, duration, prereqs.iter().copied()) {
                        Ok(task) => {
                            session.upsert(task);
                            println!("Task {} upserted.", name);
                        }
                        Err(e) => println!("Error: {}", e),
                    }
                }
                _ => println!("Usage: add <name> <duration> [prereqs...]"),
            },
            "remove" => match args {
                [name] => {
                    if session.remove(name) {
                        println!("Removed task {}.", name);
                    } else {
                        println!("No task named {}.", name);
                    }
                }
                _ => println!("Usage: remove <name>"),
            },
            "load" => match args {
                [format, path] => {
                    let loaded = match *format {
                        "text" => load_catalog_from_text(path),
                        "csv" => load_catalog_from_csv(path),
                        "json" => load_catalog_from_json(path),
                        _ => {
                            println!("Usage: load <text|csv|json> <path>");
                            continue;
                        }
                    };
                    match loaded {
                        Ok(catalog) => {
                            println!("Loaded {} tasks from {}.", catalog.len(), path);
                            session.replace(catalog);
                        }
                        Err(e) => println!("Load error: {}", e),
                    }
                }
                _ => println!("Usage: load <text|csv|json> <path>"),
            },
            "meta" => match args {
                ["name", rest @ ..] if !rest.is_empty() => {
                    session.metadata.name = rest.join(" ");
                    println!("Project name set.");
                }
                ["desc", rest @ ..] if !rest.is_empty() => {
                    session.metadata.description = rest.join(" ");
                    println!("Project description set.");
                }
                _ => println!("Usage: meta <name|desc> <text...>"),
            },
            "compute" => {
                let result = session
                    .catalog()
                    .and_then(|catalog| schedule(&catalog).map_err(|err| err.to_string()));
                match result {
                    Ok(computed) => {
                        println!("Computed: {}", computed.summary().to_cli_summary());
                        show_schedule(&computed);
                        session.schedule = Some(computed);
                    }
                    Err(e) => println!("Compute error: {}", e),
                }
            }
            "order" | "critical" | "get" | "json" => {
                let Some(computed) = session.schedule.as_ref() else {
                    println!("No schedule computed. Run 'compute' first.");
                    continue;
                };
                match (cmd, args) {
                    ("order", _) => show_activities(&computed.ordered_by_start()),
                    ("critical", _) => show_activities(&computed.critical_path()),
                    ("get", [name]) => match computed.get(name) {
                        Ok(activity) => show_activities(&[activity]),
                        Err(e) => println!("Error: {}", e),
                    },
                    ("get", _) => println!("Usage: get <name>"),
                    _ => match serde_json::to_string_pretty(computed) {
                        Ok(json) => println!("{}", json),
                        Err(e) => println!("Error: {}", e),
                    },
                }
            }
            _ => println!("Unknown command. Type 'help'."),
        }
    }
}
