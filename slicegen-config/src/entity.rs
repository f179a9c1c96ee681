use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use slicegen_core::{
    FieldKind, to_camel_case, to_kebab_case, to_pascal_case, to_plural, to_snake_case,
};

use crate::{Result, SourceContext, discover::available_configs, validate};

/// One declared attribute of an entity.
///
/// `required` is deliberately not defaulted: every field must state it
/// explicitly in the JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub required: bool,
}

/// Declarative description of one entity, loaded from a JSON config file.
///
/// The `name` (PascalCase singular) is the sole seed for every derived name:
/// type names, file names, URL segments, store and hook names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntityConfig {
    pub name: String,
    pub fields: Vec<Field>,
    /// Optional override for the store's display/sort field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_field: Option<String>,
}

impl EntityConfig {
    /// Parse and validate a config from raw JSON content.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let config: Self =
            serde_json::from_str(content).map_err(|e| ctx.parse_error(e))?;
        validate::validate(&config, &ctx)?;
        Ok(config)
    }

    /// Type-name form of the entity name (e.g. "ClaimAgreement").
    pub fn pascal_name(&self) -> String {
        to_pascal_case(&self.name)
    }

    /// Value-name form (e.g. "claimAgreement").
    pub fn camel_name(&self) -> String {
        to_camel_case(&self.name)
    }

    /// File-name and URL-segment form (e.g. "claim-agreement").
    pub fn kebab_name(&self) -> String {
        to_kebab_case(&self.name)
    }

    /// Property-name form (e.g. "claim_agreement").
    pub fn snake_name(&self) -> String {
        to_snake_case(&self.name)
    }

    /// Pluralized kebab form used for dashboard routes (e.g. "claim-agreements").
    pub fn plural_kebab_name(&self) -> String {
        to_plural(&self.kebab_name())
    }

    /// Human-readable label (e.g. "claim agreement").
    pub fn label(&self) -> String {
        self.kebab_name().replace('-', " ")
    }

    /// REST base path for the entity (e.g. "/api/claim-agreement").
    pub fn api_base_path(&self) -> String {
        format!("/api/{}", self.kebab_name())
    }

    /// The field the store sorts and searches by.
    ///
    /// Either the configured `sort_field`, or `<snake_entity>_description`
    /// when such a field is declared. `None` means the store keeps
    /// insertion order.
    pub fn display_field(&self) -> Option<String> {
        if let Some(sort_field) = &self.sort_field {
            return Some(sort_field.clone());
        }
        let default = format!("{}_description", self.snake_name());
        self.has_field(&default).then_some(default)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// Fields of object kind, which reference sibling entity types.
    pub fn object_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.kind == FieldKind::Object)
    }
}

/// An entity config file on disk: raw content plus the parsed config.
#[derive(Debug)]
pub struct ConfigFile {
    path: PathBuf,
    content: String,
    entity: EntityConfig,
}

impl ConfigFile {
    /// Open, parse, and validate a config file.
    ///
    /// A missing file produces [`crate::Error::NotFound`] carrying the list
    /// of config stems actually present in the same directory.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Box::new(crate::Error::NotFound {
                    name: path
                        .file_stem()
                        .map(|s| s.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                    available: available_help(&path),
                    path: path.clone(),
                })
            } else {
                Box::new(crate::Error::Io {
                    path: path.clone(),
                    source: e,
                })
            }
        })?;
        let filename = path.display().to_string();
        let entity = EntityConfig::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            entity,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn entity(&self) -> &EntityConfig {
        &self.entity
    }
}

/// Remediation line for a missing config: what else is in the directory.
fn available_help(path: &Path) -> String {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let stems = available_configs(dir);
    if stems.is_empty() {
        format!(
            "no configurations found in '{}'; run 'slicegen init <Name>' to create one",
            dir.display()
        )
    } else {
        format!("available configurations: {}", stems.join(", "))
    }
}
