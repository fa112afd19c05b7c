use dialoguer::Select;
use transit::System;

use super::{OutputFormat, assignments, bus, driver, line, terminal::Colorize};

const BANNER: &str = r"
     ))))
    ((((
  +-----+
  |     |] - WELCOME TO THE PUBLIC TRANSPORT SYSTEM -
  `-----'
";

/// Runs the main menu loop until the user quits.
pub fn run(system: &mut System, output: OutputFormat) -> anyhow::Result<()> {
    println!("{}", BANNER.hint());

    loop {
        let choice = Select::new()
            .with_prompt("System menu")
            .items(&[
                "Line manager",
                "Bus manager",
                "Driver manager",
                "Assignment manager",
                "Log out",
            ])
            .default(0)
            .interact()?;

        match choice {
            0 => line::menu(&mut system.lines, output)?,
            1 => bus::menu(&mut system.buses, output)?,
            2 => driver::menu(&mut system.drivers, output)?,
            3 => assignments::menu(&mut system.assignments, output)?,
            _ => {
                println!("{}", "<<GOODBYE!>>".failure());
                return Ok(());
            }
        }

        println!("{}", "Returning to the main menu...".hint());
    }
}
