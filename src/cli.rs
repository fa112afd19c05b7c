use clap::ArgAction;
use transit::System;

mod assignments;
mod bus;
mod driver;
mod entity;
mod line;
mod menu;
mod terminal;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format for listings (table, json)
    #[arg(long, value_name = "FORMAT", default_value = "table", global = true)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Option<Command>,
}

/// How listings are rendered.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned, 1-indexed table.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        // All state lives for this invocation only; nothing is persisted.
        let mut system = System::new();

        match self.command {
            None => menu::run(&mut system, self.output),
            Some(Command::Bus) => bus::menu(&mut system.buses, self.output),
            Some(Command::Driver) => driver::menu(&mut system.drivers, self.output),
            Some(Command::Line) => line::menu(&mut system.lines, self.output),
            Some(Command::Assignments) => assignments::menu(&mut system.assignments, self.output),
        }
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Manage the bus fleet
    Bus,

    /// Manage the driver roster
    Driver,

    /// Manage the transit lines
    Line,

    /// Manage bus+driver assignments per line
    Assignments,
}
