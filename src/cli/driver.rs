use dialoguer::Input;
use transit::{Driver, Manager};

use super::{OutputFormat, entity};

/// Runs the driver submenu until the user backs out.
pub fn menu(manager: &mut Manager<Driver>, output: OutputFormat) -> anyhow::Result<()> {
    entity::menu(manager, prompt_new, output)
}

fn prompt_new() -> anyhow::Result<Driver> {
    let name: String = Input::new()
        .with_prompt("Enter the driver's name")
        .interact_text()?;
    let age: u32 = Input::new()
        .with_prompt("Enter the driver's age")
        .interact_text()?;
    let experience_years: u32 = Input::new()
        .with_prompt("Enter the driver's experience in years")
        .interact_text()?;

    Ok(Driver::new(name.trim(), age, experience_years))
}
