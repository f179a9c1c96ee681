//! Type-definitions generator: the data-shape contracts for an entity.

use std::path::{Path, PathBuf};

use slicegen_config::EntityConfig;
use slicegen_core::{FileRules, GeneratedFile, to_kebab_case, to_pascal_case};

use super::GENERATED_HEADER;
use crate::{
    TypeScriptTypeMapper,
    ast::{Import, Interface},
    code_file::{CodeFile, RawCode},
    naming::TS_NAMING,
};

/// The `src/types/<entity>.ts` file: record shape, create/update DTOs, and
/// response envelopes.
///
/// The create DTO always excludes exactly `id`, `uuid`, `created_at`,
/// `updated_at`, and `deleted_at`; config validation rejects user fields
/// with those names, so the exclusion set never varies.
pub struct TypesTs<'a> {
    config: &'a EntityConfig,
}

impl<'a> TypesTs<'a> {
    pub fn new(config: &'a EntityConfig) -> Self {
        Self { config }
    }

    fn build_imports(&self) -> Vec<Import> {
        self.config
            .object_fields()
            .map(|field| {
                Import::new(format!("./{}.ts", to_kebab_case(&field.name)))
                    .named(format!("{}Data", to_pascal_case(&field.name)))
                    .type_only()
            })
            .collect()
    }

    fn build_record_interface(&self, pascal: &str) -> Interface {
        let mapper = TypeScriptTypeMapper;
        let mut interface = Interface::new(format!("{}Data", pascal))
            .optional_field("id", "number")
            .optional_field("uuid", "string");

        for field in &self.config.fields {
            let annotation = mapper.annotation(field);
            interface = if field.required {
                interface.field(&field.name, annotation)
            } else {
                interface.optional_field(&field.name, annotation)
            };
        }

        interface
            .optional_field("created_at", "string")
            .optional_field("updated_at", "string")
            .optional_field("deleted_at", "string | null")
    }

    fn build_create_interface(&self, pascal: &str) -> Interface {
        let mapper = TypeScriptTypeMapper;
        let mut interface = Interface::new(format!("Create{}Data", pascal));
        for field in &self.config.fields {
            let annotation = mapper.annotation(field);
            interface = if field.required {
                interface.field(&field.name, annotation)
            } else {
                interface.optional_field(&field.name, annotation)
            };
        }
        interface
    }

    fn build_envelopes(&self, pascal: &str) -> Vec<Interface> {
        let data = format!("{}Data", pascal);
        vec![
            Interface::new(format!("{}ListResponse", pascal))
                .field("success", "boolean")
                .optional_field("data", format!("{}[]", data))
                .optional_field("message", "string"),
            Interface::new(format!("{}Response", pascal))
                .field("success", "boolean")
                .optional_field("data", data.as_str())
                .optional_field("message", "string"),
            Interface::new(format!("{}DeleteResponse", pascal))
                .field("success", "boolean")
                .optional_field("message", "string"),
            Interface::new(format!("{}RestoreResponse", pascal))
                .field("success", "boolean")
                .optional_field("data", data.as_str())
                .optional_field("message", "string"),
        ]
    }
}

impl GeneratedFile for TypesTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("src")
            .join("types")
            .join(format!("{}.ts", self.config.kebab_name()))
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        let pascal = TS_NAMING.type_name(&self.config.name);

        let mut file = CodeFile::new()
            .header(GENERATED_HEADER)
            .imports(self.build_imports())
            .add(self.build_record_interface(&pascal))
            .add(self.build_create_interface(&pascal))
            .add(RawCode::new(format!(
                "export type Update{pascal}Data = Partial<Create{pascal}Data>;"
            )));

        for envelope in self.build_envelopes(&pascal) {
            file = file.add(envelope);
        }

        file.render()
    }
}

#[cfg(test)]
mod tests {
    use slicegen_config::EntityConfig;
    use slicegen_core::GeneratedFile;

    use super::*;

    fn widget() -> EntityConfig {
        EntityConfig::from_str_with_filename(
            r#"{
                "name": "Widget",
                "fields": [
                    { "name": "widget_description", "type": "string", "required": true },
                    { "name": "amount", "type": "number", "required": false },
                    { "name": "customer", "type": "object", "required": false }
                ]
            }"#,
            "widget.json",
        )
        .unwrap()
    }

    #[test]
    fn test_path() {
        let config = widget();
        let file = TypesTs::new(&config);
        assert_eq!(
            file.path(Path::new("out")),
            Path::new("out/src/types/widget.ts")
        );
    }

    #[test]
    fn test_record_shape() {
        let config = widget();
        let code = TypesTs::new(&config).render();
        assert!(code.contains("export interface WidgetData {"));
        assert!(code.contains("widget_description: string;"));
        assert!(code.contains("amount?: number;"));
        assert!(code.contains("id?: number;"));
        assert!(code.contains("uuid?: string;"));
        assert!(code.contains("deleted_at?: string | null;"));
    }

    #[test]
    fn test_object_field_import_and_type() {
        let config = widget();
        let code = TypesTs::new(&config).render();
        assert!(code.contains("import type { CustomerData } from \"./customer.ts\";"));
        assert!(code.contains("customer?: CustomerData;"));
    }

    #[test]
    fn test_create_dto_excludes_server_fields() {
        let config = widget();
        let code = TypesTs::new(&config).render();
        let create = code
            .split("export interface CreateWidgetData {")
            .nth(1)
            .unwrap()
            .split('}')
            .next()
            .unwrap();
        for reserved in ["id", "uuid", "created_at", "updated_at", "deleted_at"] {
            assert!(
                !create.contains(&format!("{}:", reserved)),
                "CreateWidgetData must not contain '{}'",
                reserved
            );
        }
        assert!(create.contains("widget_description: string;"));
    }

    #[test]
    fn test_update_dto_and_envelopes() {
        let config = widget();
        let code = TypesTs::new(&config).render();
        assert!(code.contains("export type UpdateWidgetData = Partial<CreateWidgetData>;"));
        assert!(code.contains("export interface WidgetListResponse {"));
        assert!(code.contains("data?: WidgetData[];"));
        assert!(code.contains("export interface WidgetDeleteResponse {"));
        // Delete envelope has no data payload.
        let delete = code
            .split("export interface WidgetDeleteResponse {")
            .nth(1)
            .unwrap()
            .split('}')
            .next()
            .unwrap();
        assert!(!delete.contains("data"));
    }
}
