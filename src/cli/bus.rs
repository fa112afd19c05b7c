use dialoguer::Input;
use transit::{Bus, Manager};

use super::{OutputFormat, entity};

/// Runs the bus submenu until the user backs out.
pub fn menu(manager: &mut Manager<Bus>, output: OutputFormat) -> anyhow::Result<()> {
    entity::menu(manager, prompt_new, output)
}

fn prompt_new() -> anyhow::Result<Bus> {
    let model: String = Input::new()
        .with_prompt("Enter the bus model")
        .interact_text()?;
    let plate: String = Input::new()
        .with_prompt("Enter the license plate")
        .interact_text()?;
    // A typed prompt re-asks on unparsable input, so the library core only
    // ever sees a well-formed number.
    let kilometers: u32 = Input::new()
        .with_prompt("Enter the kilometers")
        .interact_text()?;

    Ok(Bus::new(model.trim(), plate.trim(), kilometers))
}
