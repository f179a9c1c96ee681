//! The orchestrator: renders and writes every artifact of a vertical slice.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use slicegen_config::EntityConfig;
use slicegen_core::{GeneratedFile, WriteResult};

use crate::files::{
    ActionsTs, ApiClientTs, AuthTs, CreatePageTsx, DetailPageTsx, EditPageTsx, FormTsx, HookTs,
    ListPageTsx, ListTsx, StoreTs, SyncHookTs, TypesTs, ValidationTs,
};

/// One generation step, in fixed order.
///
/// The order matters only for the log a reader sees: later artifacts
/// reference names from earlier ones, but every generator derives those
/// names independently from the entity config, so there is no file I/O
/// dependency between steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Types,
    Store,
    Actions,
    Hooks,
    Validation,
    Components,
    Pages,
    Support,
}

impl Step {
    pub const ALL: [Self; 8] = [
        Self::Types,
        Self::Store,
        Self::Actions,
        Self::Hooks,
        Self::Validation,
        Self::Components,
        Self::Pages,
        Self::Support,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Types => "types",
            Self::Store => "store",
            Self::Actions => "actions",
            Self::Hooks => "hooks",
            Self::Validation => "validation",
            Self::Components => "components",
            Self::Pages => "pages",
            Self::Support => "support",
        }
    }
}

/// A generated file for preview.
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from the output directory.
    pub path: String,
    pub content: String,
}

/// Per-step outcome of a generation run.
#[derive(Debug)]
pub struct StepReport {
    pub step: Step,
    pub written: Vec<PathBuf>,
    /// Create-once files left untouched because they already existed.
    pub skipped: Vec<PathBuf>,
}

/// Result of a full generation run.
#[derive(Debug, Default)]
pub struct GenerateResult {
    pub steps: Vec<StepReport>,
}

impl GenerateResult {
    pub fn total_written(&self) -> usize {
        self.steps.iter().map(|s| s.written.len()).sum()
    }
}

/// TypeScript CRUD vertical-slice generator for one entity.
pub struct Generator<'a> {
    config: &'a EntityConfig,
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a EntityConfig) -> Self {
        Self { config }
    }

    fn step_files(&self, step: Step) -> Vec<Box<dyn GeneratedFile + 'a>> {
        match step {
            Step::Types => vec![Box::new(TypesTs::new(self.config))],
            Step::Store => vec![Box::new(StoreTs::new(self.config))],
            Step::Actions => vec![Box::new(ActionsTs::new(self.config))],
            Step::Hooks => vec![
                Box::new(HookTs::new(self.config)),
                Box::new(SyncHookTs::new(self.config)),
            ],
            Step::Validation => vec![Box::new(ValidationTs::new(self.config))],
            Step::Components => vec![
                Box::new(FormTsx::new(self.config)),
                Box::new(ListTsx::new(self.config)),
            ],
            Step::Pages => vec![
                Box::new(ListPageTsx::new(self.config)),
                Box::new(CreatePageTsx::new(self.config)),
                Box::new(DetailPageTsx::new(self.config)),
                Box::new(EditPageTsx::new(self.config)),
            ],
            Step::Support => vec![Box::new(ApiClientTs), Box::new(AuthTs)],
        }
    }

    /// Preview every file without touching the filesystem.
    pub fn preview(&self) -> Vec<PreviewFile> {
        Step::ALL
            .iter()
            .flat_map(|step| self.step_files(*step))
            .map(|file| PreviewFile {
                path: file.path(Path::new("")).display().to_string(),
                content: file.render(),
            })
            .collect()
    }

    /// Generate all artifacts into `output_dir`, step by step.
    ///
    /// The first failing write aborts the run; files written by earlier
    /// steps are left in place (no rollback).
    pub fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut steps = Vec::new();

        for step in Step::ALL {
            let mut written = Vec::new();
            let mut skipped = Vec::new();

            for file in self.step_files(step) {
                let rel = file.path(Path::new(""));
                let result = file.write(output_dir).wrap_err_with(|| {
                    format!(
                        "failed to write {} during the {} step",
                        rel.display(),
                        step.label()
                    )
                })?;
                match result {
                    WriteResult::Written => written.push(rel),
                    WriteResult::Skipped => skipped.push(rel),
                }
            }

            steps.push(StepReport {
                step,
                written,
                skipped,
            });
        }

        Ok(GenerateResult { steps })
    }
}

#[cfg(test)]
mod tests {
    use slicegen_config::EntityConfig;

    use super::*;

    fn widget() -> EntityConfig {
        EntityConfig::from_str_with_filename(
            r#"{"name": "Widget", "fields": [{"name": "widget_description", "type": "string", "required": true}]}"#,
            "widget.json",
        )
        .unwrap()
    }

    #[test]
    fn test_preview_covers_all_artifacts() {
        let config = widget();
        let generator = Generator::new(&config);
        let files = generator.preview();

        let paths: Vec<String> = files.iter().map(|f| f.path.clone()).collect();
        for expected in [
            "src/types/widget.ts",
            "src/stores/widgetStore.ts",
            "src/actions/widgetActions.ts",
            "src/hooks/useWidget.ts",
            "src/hooks/useWidgetSync.ts",
            "src/validation/widgetSchema.ts",
            "src/components/Widget/WidgetForm.tsx",
            "src/components/Widget/WidgetList.tsx",
            "src/app/dashboard/widgets/page.tsx",
            "src/app/dashboard/widgets/create/page.tsx",
            "src/app/dashboard/widgets/[uuid]/page.tsx",
            "src/app/dashboard/widgets/[uuid]/edit/page.tsx",
            "src/lib/api-client.ts",
            "src/lib/auth.ts",
        ] {
            assert!(paths.iter().any(|p| p == expected), "missing {}", expected);
        }
        assert_eq!(files.len(), 14);
    }

    #[test]
    fn test_step_order() {
        let labels: Vec<&str> = Step::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            vec![
                "types",
                "store",
                "actions",
                "hooks",
                "validation",
                "components",
                "pages",
                "support"
            ]
        );
    }
}
