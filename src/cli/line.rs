use dialoguer::Input;
use transit::{Line, Manager};

use super::{OutputFormat, entity};

/// Runs the line submenu until the user backs out.
pub fn menu(manager: &mut Manager<Line>, output: OutputFormat) -> anyhow::Result<()> {
    entity::menu(manager, prompt_new, output)
}

fn prompt_new() -> anyhow::Result<Line> {
    let name: String = Input::new()
        .with_prompt("Enter the line name")
        .interact_text()?;
    let route: String = Input::new()
        .with_prompt("Enter the line route")
        .interact_text()?;
    let minutes: u32 = Input::new()
        .with_prompt("Enter the line time (in minutes)")
        .interact_text()?;

    Ok(Line::new(name.trim(), route.trim(), minutes))
}
