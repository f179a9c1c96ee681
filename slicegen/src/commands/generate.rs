use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use slicegen_config::ConfigFile;
use slicegen_typescript::Generator;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Name of the entity config (resolved as <config-dir>/<name>.json)
    pub name: String,

    /// Directory containing entity configs
    #[arg(short, long, default_value = "crud-config")]
    pub config_dir: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let path = self.config_dir.join(format!("{}.json", self.name));
        let config_file = ConfigFile::open(&path).unwrap_or_exit();
        let entity = config_file.entity();
        let generator = Generator::new(entity);

        if self.dry_run {
            return Self::run_preview(&generator);
        }

        let result = generator
            .generate(&self.output)
            .wrap_err("Failed to generate code")?;

        // Header
        println!(
            "{} ({} field{})",
            entity.pascal_name(),
            entity.fields.len(),
            if entity.fields.len() == 1 { "" } else { "s" }
        );
        println!("{}", entity.api_base_path());
        println!();

        // Per-step log
        for report in &result.steps {
            println!("  ✓ {}", report.step.label());
            for path in &report.written {
                println!("      + {}", path.display());
            }
            for path in &report.skipped {
                println!("      = {} (kept)", path.display());
            }
        }

        // Summary
        println!();
        println!(
            "Generated {} files for {} in {}",
            result.total_written(),
            entity.pascal_name(),
            self.output.display()
        );

        Ok(())
    }

    fn run_preview(generator: &Generator) -> Result<()> {
        let files = generator.preview();

        for file in &files {
            println!("── {} ──", file.path);
            println!("{}", file.content);
        }

        println!("── Summary ──");
        println!("{} files would be generated", files.len());

        Ok(())
    }
}
