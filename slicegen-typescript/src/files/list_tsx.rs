//! List-component generator: searchable table over the entity store.

use std::path::{Path, PathBuf};

use slicegen_config::EntityConfig;
use slicegen_core::{FileRules, GeneratedFile, humanize, to_plural};

use super::GENERATED_HEADER;
use crate::{
    ast::Import,
    code_file::{CodeFile, RawCode},
    naming::TS_NAMING,
};

/// The `src/components/<Entity>/<Entity>List.tsx` file.
///
/// Reads filtered items from the store, drives suspend/restore through the
/// sync hook, and shows a skeleton during the initial fetch.
pub struct ListTsx<'a> {
    config: &'a EntityConfig,
}

impl<'a> ListTsx<'a> {
    pub fn new(config: &'a EntityConfig) -> Self {
        Self { config }
    }

    /// The column shown in the table: the display field when one exists,
    /// otherwise the first declared field, otherwise the uuid.
    fn primary_column(&self) -> String {
        self.config
            .display_field()
            .or_else(|| self.config.fields.first().map(|f| f.name.clone()))
            .unwrap_or_else(|| "uuid".to_string())
    }

    fn build_component(&self, pascal: &str) -> String {
        let column = self.primary_column();
        let column_label = humanize(&column);
        let label_plural = to_plural(&self.config.label());
        let route = format!("/dashboard/{}", self.config.plural_kebab_name());

        format!(
            r#"export function {pascal}List() {{
  const {{ loading, error, handleDelete, handleRestore }} = use{pascal}Sync();
  const searchTerm = use{pascal}Store((state) => state.searchTerm);
  const setSearchTerm = use{pascal}Store((state) => state.setSearchTerm);
  const items = use{pascal}Store((state) => state.getFilteredItems());

  if (loading) {{
    return (
      <div className="skeleton" aria-busy="true">
        {{[0, 1, 2, 3, 4].map((row) => (
          <div key={{row}} className="skeleton-row" />
        ))}}
      </div>
    );
  }}

  if (error !== null) {{
    return <p className="error">{{error}}</p>;
  }}

  return (
    <div>
      <input
        type="search"
        placeholder="Search {label_plural}"
        value={{searchTerm}}
        onChange={{(event) => setSearchTerm(event.target.value)}}
      />
      <table>
        <thead>
          <tr>
            <th>{column_label}</th>
            <th>Status</th>
            <th>Actions</th>
          </tr>
        </thead>
        <tbody>
          {{items.map((item) => (
            <tr key={{item.uuid}}>
              <td>{{String(item.{column} ?? "")}}</td>
              <td>{{item.deleted_at ? "Suspended" : "Available"}}</td>
              <td>
                <Link href={{`{route}/${{item.uuid}}`}}>View</Link>
                <Link href={{`{route}/${{item.uuid}}/edit`}}>Edit</Link>
                {{item.deleted_at ? (
                  <button type="button" onClick={{() => item.uuid && void handleRestore(item.uuid)}}>
                    Restore
                  </button>
                ) : (
                  <button type="button" onClick={{() => item.uuid && void handleDelete(item.uuid)}}>
                    Suspend
                  </button>
                )}}
              </td>
            </tr>
          ))}}
        </tbody>
      </table>
    </div>
  );
}}"#
        )
    }
}

impl GeneratedFile for ListTsx<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        let pascal = self.config.pascal_name();
        base.join("src")
            .join("components")
            .join(&pascal)
            .join(format!("{}List.tsx", pascal))
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        let pascal = TS_NAMING.type_name(&self.config.name);

        CodeFile::new()
            .header(GENERATED_HEADER)
            .pragma("\"use client\";")
            .import(Import::new("next/link").default("Link"))
            .import(
                Import::new(format!("../../hooks/use{}Sync.ts", pascal))
                    .named(format!("use{}Sync", pascal)),
            )
            .import(
                Import::new(format!("../../stores/{}Store.ts", self.config.camel_name()))
                    .named(format!("use{}Store", pascal)),
            )
            .add(RawCode::new(self.build_component(&pascal)))
            .render()
    }
}

#[cfg(test)]
mod tests {
    use slicegen_config::EntityConfig;
    use slicegen_core::GeneratedFile;

    use super::*;

    fn widget() -> EntityConfig {
        EntityConfig::from_str_with_filename(
            r#"{"name": "Widget", "fields": [{"name": "widget_description", "type": "string", "required": true}]}"#,
            "widget.json",
        )
        .unwrap()
    }

    #[test]
    fn test_path() {
        let config = widget();
        assert_eq!(
            ListTsx::new(&config).path(Path::new("out")),
            Path::new("out/src/components/Widget/WidgetList.tsx")
        );
    }

    #[test]
    fn test_reads_filtered_items_from_store() {
        let config = widget();
        let code = ListTsx::new(&config).render();
        assert!(code.contains("const items = useWidgetStore((state) => state.getFilteredItems());"));
        assert!(code.contains("placeholder=\"Search widgets\""));
    }

    #[test]
    fn test_suspend_restore_keyed_on_deleted_at() {
        let config = widget();
        let code = ListTsx::new(&config).render();
        assert!(code.contains("{item.deleted_at ? \"Suspended\" : \"Available\"}"));
        assert!(code.contains("void handleRestore(item.uuid)"));
        assert!(code.contains("void handleDelete(item.uuid)"));
    }

    #[test]
    fn test_links_use_plural_route() {
        let config = widget();
        let code = ListTsx::new(&config).render();
        assert!(code.contains("`/dashboard/widgets/${item.uuid}`"));
        assert!(code.contains("`/dashboard/widgets/${item.uuid}/edit`"));
    }

    #[test]
    fn test_loading_skeleton_and_error_state() {
        let config = widget();
        let code = ListTsx::new(&config).render();
        assert!(code.contains("className=\"skeleton\" aria-busy=\"true\""));
        assert!(code.contains("return <p className=\"error\">{error}</p>;"));
    }
}
