use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use slicegen_config::{EntityConfig, Field};
use slicegen_core::{FieldKind, File, WriteResult, to_kebab_case, to_snake_case};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct InitCommand {
    /// Entity name (PascalCase singular, e.g. "ClaimAgreement")
    pub name: String,

    /// Directory to place the config in
    #[arg(short, long, default_value = "crud-config")]
    pub config_dir: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let snake = to_snake_case(&self.name);
        let kebab = to_kebab_case(&self.name);

        let config = EntityConfig {
            name: self.name.clone(),
            fields: vec![
                Field {
                    name: format!("{}_description", snake),
                    kind: FieldKind::String,
                    required: true,
                },
                Field {
                    name: "notes".to_string(),
                    kind: FieldKind::Text,
                    required: false,
                },
                Field {
                    name: "active".to_string(),
                    kind: FieldKind::Boolean,
                    required: false,
                },
            ],
            sort_field: None,
        };

        let json = serde_json::to_string_pretty(&config)
            .wrap_err("Failed to serialize starter config")?;

        // Round-trip through the loader so a bad entity name gets the same
        // diagnostic as a bad config file.
        let filename = format!("{}.json", kebab);
        EntityConfig::from_str_with_filename(&json, &filename).unwrap_or_exit();

        let path = self.config_dir.join(&filename);
        let file = File::create_once(&path, format!("{}\n", json));

        match file.write().wrap_err("Failed to write starter config")? {
            WriteResult::Written => {
                println!("Created {}", path.display());
                println!();
                println!("Next steps:");
                println!("  edit {}", path.display());
                println!("  slicegen generate {}", kebab);
            }
            WriteResult::Skipped => {
                println!("{} already exists, left untouched", path.display());
            }
        }

        Ok(())
    }
}
