//! Validation-schema generator: a zod object schema per entity.

use std::path::{Path, PathBuf};

use slicegen_config::EntityConfig;
use slicegen_core::{FileRules, GeneratedFile};

use super::GENERATED_HEADER;
use crate::{
    TypeScriptTypeMapper,
    ast::{Import, JsObject},
    code_file::{CodeFile, RawCode},
    naming::TS_NAMING,
};

/// The `src/validation/<entity>Schema.ts` file.
///
/// Each field's rule chain comes from the exhaustive kind dispatch in
/// [`TypeScriptTypeMapper::validation_chain`].
pub struct ValidationTs<'a> {
    config: &'a EntityConfig,
}

impl<'a> ValidationTs<'a> {
    pub fn new(config: &'a EntityConfig) -> Self {
        Self { config }
    }

    fn build_schema_object(&self) -> JsObject {
        let mapper = TypeScriptTypeMapper;
        self.config
            .fields
            .iter()
            .fold(JsObject::new(), |obj, field| {
                obj.raw(&field.name, mapper.validation_chain(field))
            })
    }
}

impl GeneratedFile for ValidationTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("src")
            .join("validation")
            .join(format!("{}Schema.ts", self.config.camel_name()))
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        let pascal = TS_NAMING.type_name(&self.config.name);
        let camel = TS_NAMING.value_name(&self.config.name);
        let schema_name = format!("{}Schema", camel);

        let mut file = CodeFile::new()
            .header(GENERATED_HEADER)
            .import(Import::new("zod").named("z"));

        for field in self.config.object_fields() {
            file = file.import(
                Import::new(format!(
                    "../types/{}.ts",
                    slicegen_core::to_kebab_case(&field.name)
                ))
                .named(format!(
                    "{}Data",
                    slicegen_core::to_pascal_case(&field.name)
                ))
                .type_only(),
            );
        }

        file
            .add_fragments(
                self.build_schema_object()
                    .wrap(&format!("export const {} = z.object(", schema_name), ");"),
            )
            .add(RawCode::new(format!(
                "export type {pascal}FormValues = z.infer<typeof {schema_name}>;"
            )))
            .render()
    }
}
