//! Sync-hook generator: mirrors the base hook into the shared store.

use std::path::{Path, PathBuf};

use slicegen_config::EntityConfig;
use slicegen_core::{FileRules, GeneratedFile};

use super::GENERATED_HEADER;
use crate::{
    ast::Import,
    code_file::{CodeFile, RawCode},
    naming::TS_NAMING,
};

/// The `src/hooks/use<Entity>Sync.ts` file.
///
/// Wraps the base hook, mirroring its state into the entity store via
/// effects. Each handler applies the store mirror and then refetches; the
/// base hook has already refetched once by then. The double refetch matches
/// the historical behavior of this layer and is kept deliberately.
pub struct SyncHookTs<'a> {
    config: &'a EntityConfig,
}

impl<'a> SyncHookTs<'a> {
    pub fn new(config: &'a EntityConfig) -> Self {
        Self { config }
    }

    fn build_body(&self, pascal: &str) -> String {
        format!(
            r#"export function use{pascal}Sync() {{
  const {{
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
  }} = use{pascal}();
  const setItems = use{pascal}Store((state) => state.setItems);
  const setLoading = use{pascal}Store((state) => state.setLoading);
  const setError = use{pascal}Store((state) => state.setError);
  const addStoreItem = use{pascal}Store((state) => state.addItem);
  const updateStoreItem = use{pascal}Store((state) => state.updateItem);
  const deleteStoreItem = use{pascal}Store((state) => state.deleteItem);
  const restoreStoreItem = use{pascal}Store((state) => state.restoreItem);

  useEffect(() => {{
    setItems(items);
  }}, [items, setItems]);

  useEffect(() => {{
    setLoading(loading);
  }}, [loading, setLoading]);

  useEffect(() => {{
    setError(error);
  }}, [error, setError]);

  const handleCreate = useCallback(
    async (data: Create{pascal}Data) => {{
      const created = await createItem(data);
      if (created) {{
        addStoreItem(created);
      }}
      await fetchItems();
      return created;
    }},
    [createItem, addStoreItem, fetchItems],
  );

  const handleUpdate = useCallback(
    async (uuid: string, data: Update{pascal}Data) => {{
      const updated = await updateItem(uuid, data);
      updateStoreItem(uuid, data);
      await fetchItems();
      return updated;
    }},
    [updateItem, updateStoreItem, fetchItems],
  );

  const handleDelete = useCallback(
    async (uuid: string) => {{
      await deleteItem(uuid);
      deleteStoreItem(uuid);
      await fetchItems();
    }},
    [deleteItem, deleteStoreItem, fetchItems],
  );

  const handleRestore = useCallback(
    async (uuid: string) => {{
      await restoreItem(uuid);
      restoreStoreItem(uuid);
      await fetchItems();
    }},
    [restoreItem, restoreStoreItem, fetchItems],
  );

  return {{
    items,
    currentItem,
    loading,
    error,
    getItem,
    handleCreate,
    handleUpdate,
    handleDelete,
    handleRestore,
    refresh: fetchItems,
  }};
}}"#
        )
    }
}

impl GeneratedFile for SyncHookTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("src")
            .join("hooks")
            .join(format!("use{}Sync.ts", self.config.pascal_name()))
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        let pascal = TS_NAMING.type_name(&self.config.name);

        CodeFile::new()
            .header(GENERATED_HEADER)
            .import(Import::new("react").named("useCallback").named("useEffect"))
            .import(Import::new(format!("./use{}.ts", pascal)).named(format!("use{}", pascal)))
            .import(
                Import::new(format!("../stores/{}Store.ts", self.config.camel_name()))
                    .named(format!("use{}Store", pascal)),
            )
            .import(
                Import::new(format!("../types/{}.ts", self.config.kebab_name()))
                    .named(format!("Create{}Data", pascal))
                    .named(format!("Update{}Data", pascal))
                    .type_only(),
            )
            .add(RawCode::new(self.build_body(&pascal)))
            .render()
    }
}
