use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use slicegen_config::{ConfigFile, available_configs};

#[derive(Args)]
pub struct ListCommand {
    /// Directory containing entity configs
    #[arg(short, long, default_value = "crud-config")]
    pub config_dir: PathBuf,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let stems = available_configs(&self.config_dir);

        if stems.is_empty() {
            println!(
                "No configurations found in '{}'. Run 'slicegen init <Name>' to create one.",
                self.config_dir.display()
            );
            return Ok(());
        }

        println!("Configurations in '{}':", self.config_dir.display());
        for stem in stems {
            let path = self.config_dir.join(format!("{}.json", stem));
            match ConfigFile::open(&path) {
                Ok(file) => {
                    let entity = file.entity();
                    println!(
                        "  {}  {} ({} field{})",
                        stem,
                        entity.pascal_name(),
                        entity.fields.len(),
                        if entity.fields.len() == 1 { "" } else { "s" }
                    );
                }
                Err(_) => {
                    println!("  {}  (invalid; run 'slicegen check {}')", stem, stem);
                }
            }
        }

        Ok(())
    }
}
