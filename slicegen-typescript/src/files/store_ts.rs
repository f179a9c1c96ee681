//! State-container generator: the per-entity zustand store.

use std::path::{Path, PathBuf};

use slicegen_config::EntityConfig;
use slicegen_core::{FileRules, GeneratedFile};

use super::GENERATED_HEADER;
use crate::{
    ast::{Import, Interface},
    code_file::{CodeFile, RawCode},
    naming::TS_NAMING,
};

/// The `src/stores/<entity>Store.ts` file.
///
/// The store is a pure in-memory read model: its mutators never trigger
/// network calls. Deletion is soft: `deleteItem` stamps `deleted_at` and
/// `restoreItem` clears it; records are never removed from the collection.
pub struct StoreTs<'a> {
    config: &'a EntityConfig,
}

impl<'a> StoreTs<'a> {
    pub fn new(config: &'a EntityConfig) -> Self {
        Self { config }
    }

    fn build_state_interface(&self, pascal: &str) -> Interface {
        let data = format!("{}Data", pascal);
        Interface::new(format!("{}State", pascal))
            .private()
            .field("items", format!("{}[]", data))
            .field("loading", "boolean")
            .field("error", "string | null")
            .field("searchTerm", "string")
            .field("setItems", format!("(items: {}[]) => void", data))
            .field("setLoading", "(loading: boolean) => void")
            .field("setError", "(error: string | null) => void")
            .field("setSearchTerm", "(searchTerm: string) => void")
            .field("addItem", format!("(item: {}) => void", data))
            .field(
                "updateItem",
                format!("(uuid: string, updates: Partial<{}>) => void", data),
            )
            .field("deleteItem", "(uuid: string) => void")
            .field("restoreItem", "(uuid: string) => void")
            .field("clearItems", "() => void")
            .field("getFilteredItems", format!("() => {}[]", data))
    }

    fn search_fields(&self) -> Vec<String> {
        let mut fields = Vec::new();
        if let Some(display) = self.config.display_field() {
            fields.push(display);
        }
        for fixed in ["id", "uuid", "generated_by"] {
            fields.push(fixed.to_string());
        }
        fields
    }

    fn build_matcher(&self, pascal: &str) -> String {
        let quoted = self
            .search_fields()
            .iter()
            .map(|f| format!("\"{}\"", f))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            r#"const SEARCH_FIELDS = [{quoted}];

function matches(item: {pascal}Data, term: string): boolean {{
  return SEARCH_FIELDS.some((field) =>
    String((item as Record<string, unknown>)[field] ?? "")
      .toLowerCase()
      .includes(term),
  );
}}"#
        )
    }

    fn build_add_item(&self) -> String {
        match self.config.display_field() {
            Some(sort_field) => format!(
                r#"  addItem: (item) =>
    set((state) => ({{
      items: [item, ...state.items].sort((a, b) =>
        String(a.{sort_field} ?? "").localeCompare(String(b.{sort_field} ?? "")),
      ),
    }})),"#
            ),
            // No display field declared: keep insertion order.
            None => "  addItem: (item) => set((state) => ({ items: [item, ...state.items] })),"
                .to_string(),
        }
    }

    fn build_store(&self, pascal: &str, store_name: &str) -> String {
        let add_item = self.build_add_item();
        format!(
            r#"export const {store_name} = create<{pascal}State>((set, get) => ({{
  items: [],
  loading: false,
  error: null,
  searchTerm: "",
  setItems: (items) => set({{ items }}),
  setLoading: (loading) => set({{ loading }}),
  setError: (error) => set({{ error }}),
  setSearchTerm: (searchTerm) => set({{ searchTerm }}),
{add_item}
  updateItem: (uuid, updates) =>
    set((state) => ({{
      items: state.items.map((item) =>
        item.uuid === uuid ? {{ ...item, ...updates }} : item,
      ),
    }})),
  deleteItem: (uuid) =>
    set((state) => ({{
      items: state.items.map((item) =>
        item.uuid === uuid
          ? {{ ...item, deleted_at: new Date().toISOString() }}
          : item,
      ),
    }})),
  restoreItem: (uuid) =>
    set((state) => ({{
      items: state.items.map((item) =>
        item.uuid === uuid ? {{ ...item, deleted_at: null }} : item,
      ),
    }})),
  clearItems: () => set({{ items: [], error: null, searchTerm: "" }}),
  getFilteredItems: () => {{
    const {{ items, searchTerm }} = get();
    if (searchTerm === "") {{
      return items;
    }}
    return items.filter((item) => matches(item, searchTerm.toLowerCase()));
  }},
}}));"#
        )
    }
}

impl GeneratedFile for StoreTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("src")
            .join("stores")
            .join(format!("{}Store.ts", self.config.camel_name()))
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        let pascal = TS_NAMING.type_name(&self.config.name);
        let store_name = format!("use{}Store", pascal);

        CodeFile::new()
            .header(GENERATED_HEADER)
            .import(Import::new("zustand").named("create"))
            .import(
                Import::new(format!("../types/{}.ts", self.config.kebab_name()))
                    .named(format!("{}Data", pascal))
                    .type_only(),
            )
            .add(self.build_state_interface(&pascal))
            .add(RawCode::new(self.build_matcher(&pascal)))
            .add(RawCode::new(self.build_store(&pascal, &store_name)))
            .render()
    }
}
