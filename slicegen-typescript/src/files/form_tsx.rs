//! Form-component generator: a controlled form bound to the zod schema.

use std::path::{Path, PathBuf};

use slicegen_config::EntityConfig;
use slicegen_core::{FieldKind, FileRules, GeneratedFile, humanize};

use super::GENERATED_HEADER;
use crate::{
    TypeScriptTypeMapper,
    ast::Import,
    code_file::{CodeFile, RawCode},
    naming::TS_NAMING,
};

/// The `src/components/<Entity>/<Entity>Form.tsx` file.
///
/// Validation runs through `safeParse` on submit; field errors render
/// inline, submit outcomes render as a dismissible auto-hiding notice.
/// Object fields have no input; related records are managed through their
/// own entity's pages.
pub struct FormTsx<'a> {
    config: &'a EntityConfig,
}

impl<'a> FormTsx<'a> {
    pub fn new(config: &'a EntityConfig) -> Self {
        Self { config }
    }

    fn build_field_jsx(&self) -> String {
        let mapper = TypeScriptTypeMapper;
        let mut blocks = Vec::new();

        for field in &self.config.fields {
            let Some(input_type) = mapper.input_type(field.kind) else {
                continue;
            };
            let name = &field.name;
            let label = humanize(name);

            let input = if field.kind == FieldKind::Boolean {
                format!(
                    r#"      <label>
        {label}
        <input
          type="checkbox"
          checked={{Boolean(values.{name})}}
          onChange={{(event) => setValue("{name}", event.target.checked)}}
        />
      </label>"#
                )
            } else {
                format!(
                    r#"      <label>
        {label}
        <input
          type="{input_type}"
          value={{String(values.{name} ?? "")}}
          onChange={{(event) => setValue("{name}", event.target.value)}}
        />
      </label>"#
                )
            };

            blocks.push(format!(
                "{input}\n      {{fieldErrors.{name} && <p className=\"field-error\">{{fieldErrors.{name}}}</p>}}"
            ));
        }

        blocks.join("\n")
    }

    fn build_component(&self, pascal: &str, camel: &str) -> String {
        let fields_jsx = self.build_field_jsx();
        format!(
            r#"interface {pascal}FormProps {{
  initialValues?: Partial<{pascal}Data>;
  submitLabel: string;
  onSubmit: (values: {pascal}FormValues) => Promise<void>;
}}

export function {pascal}Form({{ initialValues, submitLabel, onSubmit }}: {pascal}FormProps) {{
  const [values, setValues] = useState<Partial<{pascal}Data>>(initialValues ?? {{}});
  const [fieldErrors, setFieldErrors] = useState<Record<string, string>>({{}});
  const [notice, setNotice] = useState<string | null>(null);

  useEffect(() => {{
    if (notice === null) {{
      return;
    }}
    const timer = setTimeout(() => setNotice(null), 4000);
    return () => clearTimeout(timer);
  }}, [notice]);

  const setValue = (name: keyof {pascal}Data, value: unknown) => {{
    setValues((prev) => ({{ ...prev, [name]: value }}));
  }};

  const handleSubmit = async (event: FormEvent<HTMLFormElement>) => {{
    event.preventDefault();
    const parsed = {camel}Schema.safeParse(values);
    if (!parsed.success) {{
      const errors: Record<string, string> = {{}};
      for (const issue of parsed.error.issues) {{
        const key = issue.path.join(".");
        if (!errors[key]) {{
          errors[key] = issue.message;
        }}
      }}
      setFieldErrors(errors);
      return;
    }}
    setFieldErrors({{}});
    try {{
      await onSubmit(parsed.data);
      setNotice("Saved");
    }} catch (err) {{
      setNotice(err instanceof Error ? err.message : "Something went wrong");
    }}
  }};

  return (
    <form onSubmit={{handleSubmit}}>
      {{notice !== null && (
        <p role="status" onClick={{() => setNotice(null)}}>
          {{notice}}
        </p>
      )}}
{fields_jsx}
      <button type="submit">{{submitLabel}}</button>
    </form>
  );
}}"#
        )
    }
}

impl GeneratedFile for FormTsx<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        let pascal = self.config.pascal_name();
        base.join("src")
            .join("components")
            .join(&pascal)
            .join(format!("{}Form.tsx", pascal))
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        let pascal = TS_NAMING.type_name(&self.config.name);
        let camel = TS_NAMING.value_name(&self.config.name);

        CodeFile::new()
            .header(GENERATED_HEADER)
            .pragma("\"use client\";")
            .import(
                Import::new("react")
                    .named("useEffect")
                    .named("useState")
                    .named_type("FormEvent"),
            )
            .import(
                Import::new(format!("../../types/{}.ts", self.config.kebab_name()))
                    .named(format!("{}Data", pascal))
                    .type_only(),
            )
            .import(
                Import::new(format!("../../validation/{}Schema.ts", camel))
                    .named(format!("{}Schema", camel))
                    .named_type(format!("{}FormValues", pascal)),
            )
            .add(RawCode::new(self.build_component(&pascal, &camel)))
            .render()
    }
}

#[cfg(test)]
mod tests {
    use slicegen_config::EntityConfig;
    use slicegen_core::GeneratedFile;

    use super::*;

    fn config() -> EntityConfig {
        EntityConfig::from_str_with_filename(
            r#"{
                "name": "Widget",
                "fields": [
                    { "name": "widget_description", "type": "string", "required": true },
                    { "name": "active", "type": "boolean", "required": false },
                    { "name": "customer", "type": "object", "required": false }
                ]
            }"#,
            "widget.json",
        )
        .unwrap()
    }

    #[test]
    fn test_path_uses_pascal_component_dir() {
        let c = config();
        assert_eq!(
            FormTsx::new(&c).path(Path::new("out")),
            Path::new("out/src/components/Widget/WidgetForm.tsx")
        );
    }

    #[test]
    fn test_validates_with_schema_on_submit() {
        let c = config();
        let code = FormTsx::new(&c).render();
        assert!(code.contains("const parsed = widgetSchema.safeParse(values);"));
        assert!(code.contains("setFieldErrors(errors);"));
    }

    #[test]
    fn test_input_kinds() {
        let c = config();
        let code = FormTsx::new(&c).render();
        assert!(code.contains("type=\"text\""));
        assert!(code.contains("type=\"checkbox\""));
        // Object fields get no input.
        assert!(!code.contains("setValue(\"customer\""));
    }

    #[test]
    fn test_notice_is_dismissible_and_auto_hides() {
        let c = config();
        let code = FormTsx::new(&c).render();
        assert!(code.contains("setTimeout(() => setNotice(null), 4000);"));
        assert!(code.contains("onClick={() => setNotice(null)}"));
        assert!(code.contains("setNotice(err instanceof Error ? err.message : \"Something went wrong\");"));
    }

    #[test]
    fn test_client_component_pragma() {
        let c = config();
        let code = FormTsx::new(&c).render();
        assert!(code.starts_with(GENERATED_HEADER));
        assert!(code.contains("\"use client\";"));
    }
}
