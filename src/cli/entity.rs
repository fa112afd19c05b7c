//! The generic entity submenu.
//!
//! All three entity kinds get the same submenu (view / add / remove /
//! back); only the add-prompt differs, so each kind's module supplies one
//! as a function. Rendering is driven entirely by the [`Record`] shape
//! descriptor.

use dialoguer::{Input, Select};
use serde::Serialize;
use transit::{Listing, Manager, Record, RemoveOutcome};

use super::{
    OutputFormat,
    terminal::{Colorize, rule_width},
};

/// Runs the submenu for one entity kind until the user backs out.
pub fn menu<R>(
    manager: &mut Manager<R>,
    prompt_new: impl Fn() -> anyhow::Result<R>,
    output: OutputFormat,
) -> anyhow::Result<()>
where
    R: Record + Serialize,
{
    let kind_upper = R::KIND.to_uppercase();
    println!("\n{}", format!("--- {kind_upper} MANAGER ---").heading());

    loop {
        let view = format!("View {}s", R::KIND);
        let add = format!("Add a new {}", R::KIND);
        let remove = format!("Remove a {}", R::KIND);
        let choice = Select::new()
            .with_prompt("Choose an option")
            .items(&[view.as_str(), add.as_str(), remove.as_str(), "Back"])
            .default(0)
            .interact()?;

        match choice {
            0 => render(manager, output)?,
            1 => {
                let record = prompt_new()?;
                manager.add_item(record);
                println!(
                    "{}",
                    format!("{kind_upper} added successfully!").success()
                );
            }
            2 => {
                let key: String = Input::new()
                    .with_prompt(format!("Enter the {} to remove", R::KEY_LABEL))
                    .allow_empty(true)
                    .interact_text()?;

                match manager.remove_item(key.trim()) {
                    RemoveOutcome::Removed(_) => {
                        println!("{}", format!("{kind_upper} removed successfully!").success());
                    }
                    RemoveOutcome::NotFound => {
                        println!(
                            "{}",
                            format!(
                                "A {} with this {} was not found! Please try again.",
                                R::KIND,
                                R::KEY_LABEL
                            )
                            .failure()
                        );
                    }
                }
            }
            _ => return Ok(()),
        }
    }
}

/// Renders the current records as a table or JSON.
fn render<R>(manager: &Manager<R>, output: OutputFormat) -> anyhow::Result<()>
where
    R: Record + Serialize,
{
    match manager.list_items() {
        Listing::Empty => {
            println!(
                "{}",
                format!("No {}s have been added yet!", R::KIND).failure()
            );
        }
        Listing::Records(records) => match output {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(records)?),
            OutputFormat::Table => print_table(records),
        },
    }
    Ok(())
}

fn print_table<R: Record>(records: &[R]) {
    let rows: Vec<[String; 3]> = records.iter().map(Record::cells).collect();

    // Column widths fit the widest of header and cells.
    let mut widths = R::COLUMNS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }
    let [w0, w1, _] = widths;

    println!(
        "\n{}",
        format!("--- {} INFORMATION ---", R::KIND.to_uppercase()).heading()
    );
    println!(
        "{:>3} {:<w0$} | {:<w1$} | {}",
        "#",
        R::COLUMNS[0],
        R::COLUMNS[1],
        R::COLUMNS[2]
    );
    println!("{}", "-".repeat(rule_width()));
    for (index, [first, second, third]) in rows.iter().enumerate() {
        println!("{:>3} {first:<w0$} | {second:<w1$} | {third}", index + 1);
    }
    println!("{}", "-".repeat(rule_width()));
}
