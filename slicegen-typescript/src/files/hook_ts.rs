//! Data-hook generator: the per-entity request-lifecycle hook.

use std::path::{Path, PathBuf};

use slicegen_config::EntityConfig;
use slicegen_core::{FileRules, GeneratedFile, to_plural};

use super::GENERATED_HEADER;
use crate::{
    ast::Import,
    code_file::{CodeFile, RawCode},
    naming::TS_NAMING,
};

/// The `src/hooks/use<Entity>.ts` file.
///
/// Behavioral contract:
/// - `fetchItems` is a no-op without a token (not yet authenticated).
/// - every successful mutation refetches the list; the hook reconciles
///   against server truth instead of patching locally.
/// - failures set `error` and rethrow; `loading` always resets in `finally`.
/// - `getItem` turns a success-without-data response into a thrown
///   "not found" error rather than a silent null.
pub struct HookTs<'a> {
    config: &'a EntityConfig,
}

impl<'a> HookTs<'a> {
    pub fn new(config: &'a EntityConfig) -> Self {
        Self { config }
    }

    fn build_fetch_items(&self, pascal: &str, label_plural: &str) -> String {
        format!(
            r#"const fetchItems = useCallback(async () => {{
  if (!token) {{
    return;
  }}
  setLoading(true);
  setError(null);
  try {{
    const response = await get{pascal}DataFetch(token);
    if (response.success && Array.isArray(response.data)) {{
      setItems(response.data);
    }} else if (response.success) {{
      setItems([]);
      setError("Invalid data format");
    }} else {{
      setItems([]);
      setError(response.message ?? "Invalid data format");
    }}
  }} catch (err) {{
    setItems([]);
    setError(err instanceof Error ? err.message : "Failed to fetch {label_plural}");
  }} finally {{
    setLoading(false);
  }}
}}, [token]);"#
        )
    }

    fn build_get_item(&self, pascal: &str, label: &str) -> String {
        format!(
            r#"const getItem = useCallback(
  async (uuid: string): Promise<{pascal}Data> => {{
    setLoading(true);
    setError(null);
    try {{
      if (!token) {{
        throw new Error("Not authenticated");
      }}
      const response = await get{pascal}Data(token, uuid);
      if (!response.success) {{
        throw new Error(response.message ?? "Invalid data format");
      }}
      if (!response.data) {{
        throw new Error("No {label} found");
      }}
      setCurrentItem(response.data);
      return response.data;
    }} catch (err) {{
      const message = err instanceof Error ? err.message : "Failed to fetch {label}";
      setError(message);
      throw err instanceof Error ? err : new Error(message);
    }} finally {{
      setLoading(false);
    }}
  }},
  [token],
);"#
        )
    }

    /// One mutating operation: guard token, call the action, surface the
    /// envelope message on failure, refetch on success.
    fn build_mutation(
        &self,
        name: &str,
        params: &str,
        action_call: &str,
        fail_message: &str,
        returns_data: bool,
    ) -> String {
        let success_tail = if returns_data {
            "      await fetchItems();\n      return response.data ?? null;"
        } else {
            "      await fetchItems();"
        };
        format!(
            r#"const {name} = useCallback(
  async ({params}) => {{
    setLoading(true);
    setError(null);
    try {{
      if (!token) {{
        throw new Error("Not authenticated");
      }}
      const response = await {action_call};
      if (!response.success) {{
        throw new Error(response.message ?? "{fail_message}");
      }}
{success_tail}
    }} catch (err) {{
      const message = err instanceof Error ? err.message : "{fail_message}";
      setError(message);
      throw err instanceof Error ? err : new Error(message);
    }} finally {{
      setLoading(false);
    }}
  }},
  [token, fetchItems],
);"#
        )
    }

    fn build_return(&self) -> String {
        r#"return {
  items,
  currentItem,
  loading,
  error,
  fetchItems,
  getItem,
  createItem,
  updateItem,
  deleteItem,
  restoreItem,
};"#
        .to_string()
    }
}

impl GeneratedFile for HookTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("src")
            .join("hooks")
            .join(format!("use{}.ts", self.config.pascal_name()))
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        let pascal = TS_NAMING.type_name(&self.config.name);
        let kebab = self.config.kebab_name();
        let label = self.config.label();
        let label_plural = to_plural(&label);

        let actions_import = Import::new(format!("../actions/{}Actions.ts", self.config.camel_name()))
            .named(format!("create{}Data", pascal))
            .named(format!("delete{}Data", pascal))
            .named(format!("get{}Data", pascal))
            .named(format!("get{}DataFetch", pascal))
            .named(format!("restore{}Data", pascal))
            .named(format!("update{}Data", pascal));

        let types_import = Import::new(format!("../types/{}.ts", kebab))
            .named(format!("Create{}Data", pascal))
            .named(format!("Update{}Data", pascal))
            .named(format!("{}Data", pascal))
            .type_only();

        let state = format!(
            r#"const token = useAuthToken();
const [items, setItems] = useState<{pascal}Data[]>([]);
const [currentItem, setCurrentItem] = useState<{pascal}Data | null>(null);
const [loading, setLoading] = useState(false);
const [error, setError] = useState<string | null>(null);"#
        );

        let refetch_effect = r#"useEffect(() => {
  void fetchItems();
}, [fetchItems]);"#;

        let create = self.build_mutation(
            "createItem",
            &format!("data: Create{}Data", pascal),
            &format!("create{}Data(token, data)", pascal),
            &format!("Failed to create {}", label),
            true,
        );
        let update = self.build_mutation(
            "updateItem",
            &format!("uuid: string, data: Update{}Data", pascal),
            &format!("update{}Data(token, uuid, data)", pascal),
            &format!("Failed to update {}", label),
            true,
        );
        let delete = self.build_mutation(
            "deleteItem",
            "uuid: string",
            &format!("delete{}Data(token, uuid)", pascal),
            &format!("Failed to suspend {}", label),
            false,
        );
        let restore = self.build_mutation(
            "restoreItem",
            "uuid: string",
            &format!("restore{}Data(token, uuid)", pascal),
            &format!("Failed to restore {}", label),
            true,
        );

        let body = [
            state,
            self.build_fetch_items(&pascal, &label_plural),
            refetch_effect.to_string(),
            self.build_get_item(&pascal, &label),
            create,
            update,
            delete,
            restore,
            self.build_return(),
        ]
        .map(|block| indent_block(&block))
        .join("\n\n");

        CodeFile::new()
            .header(GENERATED_HEADER)
            .import(Import::new("react").named("useCallback").named("useEffect").named("useState"))
            .import(actions_import)
            .import(Import::new("../lib/auth.ts").named("useAuthToken"))
            .import(types_import)
            .add(RawCode::new(format!(
                "export function use{}() {{\n{}\n}}",
                pascal, body
            )))
            .render()
    }
}

/// Indent every non-empty line of a block by one level.
fn indent_block(block: &str) -> String {
    block
        .lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("  {}", line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
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
            HookTs::new(&config).path(Path::new("out")),
            Path::new("out/src/hooks/useWidget.ts")
        );
    }

    #[test]
    fn test_fetch_is_noop_without_token() {
        let config = widget();
        let code = HookTs::new(&config).render();
        assert!(code.contains("if (!token) {\n      return;\n    }"));
    }

    #[test]
    fn test_failure_resets_items_and_surfaces_message() {
        let config = widget();
        let code = HookTs::new(&config).render();
        assert!(code.contains("setItems([]);"));
        assert!(code.contains("setError(response.message ?? \"Invalid data format\");"));
        assert!(code.contains("} finally {"));
        assert!(code.contains("setLoading(false);"));
    }

    #[test]
    fn test_get_item_not_found_error() {
        let config = widget();
        let code = HookTs::new(&config).render();
        assert!(code.contains("throw new Error(\"No widget found\");"));
    }

    #[test]
    fn test_mutations_refetch_and_rethrow() {
        let config = widget();
        let code = HookTs::new(&config).render();
        // Each of the four mutations refetches after success.
        assert_eq!(code.matches("await fetchItems();").count(), 4);
        assert_eq!(
            code.matches("throw err instanceof Error ? err : new Error(message);")
                .count(),
            5 // getItem + four mutations
        );
        assert!(code.contains("Failed to suspend widget"));
    }

    #[test]
    fn test_refetch_on_token_change() {
        let config = widget();
        let code = HookTs::new(&config).render();
        assert!(code.contains("useEffect(() => {\n    void fetchItems();\n  }, [fetchItems]);"));
    }
}
