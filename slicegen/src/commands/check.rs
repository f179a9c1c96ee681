use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use slicegen_config::ConfigFile;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Name of the entity config (resolved as <config-dir>/<name>.json)
    pub name: String,

    /// Directory containing entity configs
    #[arg(short, long, default_value = "crud-config")]
    pub config_dir: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let path = self.config_dir.join(format!("{}.json", self.name));
        let config_file = ConfigFile::open(&path).unwrap_or_exit();
        let entity = config_file.entity();

        println!("✓ {} is valid\n", path.display());

        println!("  {} -> {}", entity.pascal_name(), entity.api_base_path());
        println!("  dashboard route: /dashboard/{}", entity.plural_kebab_name());
        match entity.display_field() {
            Some(field) => println!("  sorted and searched by: {}", field),
            None => println!("  no display field: insertion order is kept"),
        }

        println!(
            "\n  {} field{}:",
            entity.fields.len(),
            if entity.fields.len() == 1 { "" } else { "s" }
        );
        for field in &entity.fields {
            let required = if field.required { ", required" } else { "" };
            println!("    {} ({}{})", field.name, field.kind, required);
        }

        Ok(())
    }
}
