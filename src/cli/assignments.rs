use dialoguer::{Input, Select};
use serde_json::json;
use transit::{AssignOutcome, AssignmentListing, Registry, UnassignOutcome};

use super::{
    OutputFormat,
    terminal::{Colorize, rule_width},
};

/// Runs the assignment submenu until the user backs out.
pub fn menu(registry: &mut Registry, output: OutputFormat) -> anyhow::Result<()> {
    println!("\n{}", "--- ASSIGNMENT MANAGER ---".heading());

    loop {
        let choice = Select::new()
            .with_prompt("Choose an option")
            .items(&[
                "Assign a bus and driver to a line",
                "Remove an assignment",
                "List assignments",
                "Back",
            ])
            .default(0)
            .interact()?;

        match choice {
            0 => assign(registry)?,
            1 => remove(registry)?,
            2 => render(registry, output)?,
            _ => return Ok(()),
        }
    }
}

fn assign(registry: &mut Registry) -> anyhow::Result<()> {
    let (bus, driver, line) = prompt_identifiers()?;

    // Validation belongs to the registry, so empty input is allowed
    // through here and reported as an outcome.
    match registry.assign(&bus, &driver, &line) {
        AssignOutcome::Assigned => println!(
            "{}",
            format!("Bus '{bus}' is assigned to driver '{driver}' on line '{line}'.").success()
        ),
        AssignOutcome::InvalidInput => println!(
            "{}",
            "Invalid assignment! Please provide a bus, a driver and a line.".failure()
        ),
    }
    Ok(())
}

fn remove(registry: &mut Registry) -> anyhow::Result<()> {
    let (bus, driver, line) = prompt_identifiers()?;

    match registry.remove_assignment(&bus, &driver, &line) {
        UnassignOutcome::Removed(count) => println!(
            "{}",
            format!(
                "Assignment for bus '{bus}' and driver '{driver}' removed from line '{line}' \
                 ({count} dropped)."
            )
            .success()
        ),
        UnassignOutcome::NotFound => println!("{}", "Assignment not found.".failure()),
    }
    Ok(())
}

fn prompt_identifiers() -> anyhow::Result<(String, String, String)> {
    let bus: String = Input::new()
        .with_prompt("Enter the bus")
        .allow_empty(true)
        .interact_text()?;
    let driver: String = Input::new()
        .with_prompt("Enter the driver")
        .allow_empty(true)
        .interact_text()?;
    let line: String = Input::new()
        .with_prompt("Enter the line")
        .allow_empty(true)
        .interact_text()?;

    Ok((
        bus.trim().to_owned(),
        driver.trim().to_owned(),
        line.trim().to_owned(),
    ))
}

fn render(registry: &Registry, output: OutputFormat) -> anyhow::Result<()> {
    match registry.list_assignments() {
        AssignmentListing::Empty => println!("{}", "No assignments found!".failure()),
        AssignmentListing::Lines(lines) => match output {
            OutputFormat::Json => {
                // An array of objects rather than a map, to preserve the
                // first-seen line order in the output.
                let lines: Vec<_> = lines
                    .map(|(line, assignments)| json!({ "line": line, "assignments": assignments }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&lines)?);
            }
            OutputFormat::Table => {
                println!("\n{}", "--- ASSIGNMENTS ---".heading());
                for (line, assignments) in lines {
                    println!("Line: {line}");
                    for assignment in assignments {
                        println!("    Bus: {} - Driver: {}", assignment.bus, assignment.driver);
                    }
                }
                println!("{}", "-".repeat(rule_width()));
            }
        },
    }
    Ok(())
}
