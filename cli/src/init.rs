use crate::error::{Result, ResultExt};
use crate::ui;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::fs;
use std::path::Path;
use udc_console::config::{ensure_config_file_exists, generate_default_config_template};

/// Write the default `udc.toml`, asking before replacing an existing file
pub fn execute(path: String) -> Result<()> {
    let path = Path::new(&path);

    if path.exists() {
        let overwrite = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("{} already exists. Overwrite it?", path.display()))
            .default(false)
            .interact()?;
        if !overwrite {
            ui::warning_message("Keeping the existing configuration");
            return Ok(());
        }

        fs::write(path, generate_default_config_template())
            .with_context(|| format!("Failed to write {}", path.display()))?;
    } else {
        ensure_config_file_exists(path, true)
            .with_context(|| format!("Failed to create {}", path.display()))?;
    }

    ui::success_message(&format!("Created {}", path.display()));
    ui::info_message("Edit [api] base_url to point at your connector service");
    Ok(())
}
