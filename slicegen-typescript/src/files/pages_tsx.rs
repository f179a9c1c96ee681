//! Page-scaffold generators: list, create, detail, and edit dashboard pages.
//!
//! Pages are thin consumers of the sync hook: no business logic beyond
//! selecting the current record by its `uuid` route parameter and delegating
//! submission to `handleCreate`/`handleUpdate`.

use std::path::{Path, PathBuf};

use slicegen_config::EntityConfig;
use slicegen_core::{FieldKind, FileRules, GeneratedFile, humanize};

use super::GENERATED_HEADER;
use crate::{
    ast::Import,
    code_file::{CodeFile, RawCode},
    naming::TS_NAMING,
};

fn route(config: &EntityConfig) -> String {
    format!("/dashboard/{}", config.plural_kebab_name())
}

fn page_dir(config: &EntityConfig, base: &Path) -> PathBuf {
    base.join("src")
        .join("app")
        .join("dashboard")
        .join(config.plural_kebab_name())
}

/// The fetch-by-route-param effect shared by the detail and edit pages.
fn build_fetch_effect(label: &str) -> String {
    format!(
        r#"useEffect(() => {{
    getItem(params.uuid)
      .then(setItem)
      .catch((err: unknown) => {{
        setError(err instanceof Error ? err.message : "Failed to fetch {label}");
      }});
  }}, [getItem, params.uuid]);"#
    )
}

const SKELETON: &str = r#"  if (item === null) {
    return (
      <div className="skeleton" aria-busy="true">
        <div className="skeleton-row" />
      </div>
    );
  }"#;

/// `<plural>/page.tsx`: heading, create button, list component.
pub struct ListPageTsx<'a> {
    config: &'a EntityConfig,
}

impl<'a> ListPageTsx<'a> {
    pub fn new(config: &'a EntityConfig) -> Self {
        Self { config }
    }
}

impl GeneratedFile for ListPageTsx<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        page_dir(self.config, base).join("page.tsx")
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        let pascal = TS_NAMING.type_name(&self.config.name);
        let heading = humanize(&slicegen_core::to_plural(&self.config.snake_name()));
        let label = self.config.label();
        let route = route(self.config);

        CodeFile::new()
            .header(GENERATED_HEADER)
            .pragma("\"use client\";")
            .import(Import::new("next/link").default("Link"))
            .import(
                Import::new(format!("../../../components/{pascal}/{pascal}List.tsx"))
                    .named(format!("{}List", pascal)),
            )
            .add(RawCode::new(format!(
                r#"export default function {pascal}sPage() {{
  return (
    <main>
      <h1>{heading}</h1>
      <Link href="{route}/create">New {label}</Link>
      <{pascal}List />
    </main>
  );
}}"#
            )))
            .render()
    }
}

/// `<plural>/create/page.tsx`: a form wired to `handleCreate`.
pub struct CreatePageTsx<'a> {
    config: &'a EntityConfig,
}

impl<'a> CreatePageTsx<'a> {
    pub fn new(config: &'a EntityConfig) -> Self {
        Self { config }
    }
}

impl GeneratedFile for CreatePageTsx<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        page_dir(self.config, base).join("create").join("page.tsx")
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        let pascal = TS_NAMING.type_name(&self.config.name);
        let camel = TS_NAMING.value_name(&self.config.name);
        let label = self.config.label();
        let route = route(self.config);

        CodeFile::new()
            .header(GENERATED_HEADER)
            .pragma("\"use client\";")
            .import(Import::new("next/navigation").named("useRouter"))
            .import(
                Import::new(format!("../../../../components/{pascal}/{pascal}Form.tsx"))
                    .named(format!("{}Form", pascal)),
            )
            .import(
                Import::new(format!("../../../../hooks/use{}Sync.ts", pascal))
                    .named(format!("use{}Sync", pascal)),
            )
            .import(
                Import::new(format!("../../../../validation/{}Schema.ts", camel))
                    .named(format!("{}FormValues", pascal))
                    .type_only(),
            )
            .add(RawCode::new(format!(
                r#"export default function Create{pascal}Page() {{
  const router = useRouter();
  const {{ handleCreate }} = use{pascal}Sync();

  const onSubmit = async (values: {pascal}FormValues) => {{
    await handleCreate(values);
    router.push("{route}");
  }};

  return (
    <main>
      <h1>New {label}</h1>
      <{pascal}Form submitLabel="Create" onSubmit={{onSubmit}} />
    </main>
  );
}}"#
            )))
            .render()
    }
}

/// `<plural>/[uuid]/page.tsx`: read-only field rows for one record.
pub struct DetailPageTsx<'a> {
    config: &'a EntityConfig,
}

impl<'a> DetailPageTsx<'a> {
    pub fn new(config: &'a EntityConfig) -> Self {
        Self { config }
    }

    fn build_field_rows(&self) -> String {
        let mut rows = Vec::new();
        for field in &self.config.fields {
            if field.kind == FieldKind::Object {
                continue;
            }
            let name = &field.name;
            let label = humanize(name);
            rows.push(format!(
                "        <dt>{label}</dt>\n        <dd>{{String(item.{name} ?? \"\")}}</dd>"
            ));
        }
        rows.push(
            "        <dt>Status</dt>\n        <dd>{item.deleted_at ? \"Suspended\" : \"Available\"}</dd>"
                .to_string(),
        );
        rows.join("\n")
    }
}

impl GeneratedFile for DetailPageTsx<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        page_dir(self.config, base).join("[uuid]").join("page.tsx")
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        let pascal = TS_NAMING.type_name(&self.config.name);
        let label = self.config.label();
        let heading = humanize(&self.config.snake_name());
        let route = route(self.config);
        let fetch_effect = build_fetch_effect(&label);
        let rows = self.build_field_rows();

        CodeFile::new()
            .header(GENERATED_HEADER)
            .pragma("\"use client\";")
            .import(Import::new("next/link").default("Link"))
            .import(Import::new("next/navigation").named("useParams"))
            .import(Import::new("react").named("useEffect").named("useState"))
            .import(
                Import::new(format!("../../../../hooks/use{}Sync.ts", pascal))
                    .named(format!("use{}Sync", pascal)),
            )
            .import(
                Import::new(format!("../../../../types/{}.ts", self.config.kebab_name()))
                    .named(format!("{}Data", pascal))
                    .type_only(),
            )
            .add(RawCode::new(format!(
                r#"export default function {pascal}DetailPage() {{
  const params = useParams<{{ uuid: string }}>();
  const {{ getItem }} = use{pascal}Sync();
  const [item, setItem] = useState<{pascal}Data | null>(null);
  const [error, setError] = useState<string | null>(null);

  {fetch_effect}

  if (error !== null) {{
    return <p className="error">{{error}}</p>;
  }}

{SKELETON}

  return (
    <main>
      <h1>{heading}</h1>
      <dl>
{rows}
      </dl>
      <Link href={{`{route}/${{params.uuid}}/edit`}}>Edit</Link>
      <Link href="{route}">Back</Link>
    </main>
  );
}}"#
            )))
            .render()
    }
}

/// `<plural>/[uuid]/edit/page.tsx`: a form prefilled via `getItem`, wired to
/// `handleUpdate`.
pub struct EditPageTsx<'a> {
    config: &'a EntityConfig,
}

impl<'a> EditPageTsx<'a> {
    pub fn new(config: &'a EntityConfig) -> Self {
        Self { config }
    }
}

impl GeneratedFile for EditPageTsx<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        page_dir(self.config, base)
            .join("[uuid]")
            .join("edit")
            .join("page.tsx")
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        let pascal = TS_NAMING.type_name(&self.config.name);
        let camel = TS_NAMING.value_name(&self.config.name);
        let label = self.config.label();
        let route = route(self.config);
        let fetch_effect = build_fetch_effect(&label);

        CodeFile::new()
            .header(GENERATED_HEADER)
            .pragma("\"use client\";")
            .import(Import::new("next/navigation").named("useParams").named("useRouter"))
            .import(Import::new("react").named("useEffect").named("useState"))
            .import(
                Import::new(format!(
                    "../../../../../components/{pascal}/{pascal}Form.tsx"
                ))
                .named(format!("{}Form", pascal)),
            )
            .import(
                Import::new(format!("../../../../../hooks/use{}Sync.ts", pascal))
                    .named(format!("use{}Sync", pascal)),
            )
            .import(
                Import::new(format!(
                    "../../../../../types/{}.ts",
                    self.config.kebab_name()
                ))
                .named(format!("{}Data", pascal))
                .type_only(),
            )
            .import(
                Import::new(format!("../../../../../validation/{}Schema.ts", camel))
                    .named(format!("{}FormValues", pascal))
                    .type_only(),
            )
            .add(RawCode::new(format!(
                r#"export default function Edit{pascal}Page() {{
  const params = useParams<{{ uuid: string }}>();
  const router = useRouter();
  const {{ getItem, handleUpdate }} = use{pascal}Sync();
  const [item, setItem] = useState<{pascal}Data | null>(null);
  const [error, setError] = useState<string | null>(null);

  {fetch_effect}

  const onSubmit = async (values: {pascal}FormValues) => {{
    await handleUpdate(params.uuid, values);
    router.push("{route}");
  }};

  if (error !== null) {{
    return <p className="error">{{error}}</p>;
  }}

{SKELETON}

  return (
    <main>
      <h1>Edit {label}</h1>
      <{pascal}Form initialValues={{item}} submitLabel="Save" onSubmit={{onSubmit}} />
    </main>
  );
}}"#
            )))
            .render()
    }
}

#[cfg(test)]
mod tests {
    use slicegen_config::EntityConfig;
    use slicegen_core::GeneratedFile;

    use super::*;

    fn claim_agreement() -> EntityConfig {
        EntityConfig::from_str_with_filename(
            r#"{
                "name": "ClaimAgreement",
                "fields": [
                    { "name": "claim_agreement_description", "type": "string", "required": true },
                    { "name": "customer", "type": "object", "required": false }
                ]
            }"#,
            "claim-agreement.json",
        )
        .unwrap()
    }

    #[test]
    fn test_page_paths() {
        let config = claim_agreement();
        let base = Path::new("out");
        assert_eq!(
            ListPageTsx::new(&config).path(base),
            Path::new("out/src/app/dashboard/claim-agreements/page.tsx")
        );
        assert_eq!(
            CreatePageTsx::new(&config).path(base),
            Path::new("out/src/app/dashboard/claim-agreements/create/page.tsx")
        );
        assert_eq!(
            DetailPageTsx::new(&config).path(base),
            Path::new("out/src/app/dashboard/claim-agreements/[uuid]/page.tsx")
        );
        assert_eq!(
            EditPageTsx::new(&config).path(base),
            Path::new("out/src/app/dashboard/claim-agreements/[uuid]/edit/page.tsx")
        );
    }

    #[test]
    fn test_list_page_heading_and_create_button() {
        let config = claim_agreement();
        let code = ListPageTsx::new(&config).render();
        assert!(code.contains("<h1>Claim agreements</h1>"));
        assert!(code.contains("<Link href=\"/dashboard/claim-agreements/create\">New claim agreement</Link>"));
        assert!(code.contains("<ClaimAgreementList />"));
    }

    #[test]
    fn test_create_page_delegates_to_sync_hook() {
        let config = claim_agreement();
        let code = CreatePageTsx::new(&config).render();
        assert!(code.contains("const { handleCreate } = useClaimAgreementSync();"));
        assert!(code.contains("await handleCreate(values);"));
        assert!(code.contains("router.push(\"/dashboard/claim-agreements\");"));
    }

    #[test]
    fn test_detail_page_selects_by_uuid_param() {
        let config = claim_agreement();
        let code = DetailPageTsx::new(&config).render();
        assert!(code.contains("const params = useParams<{ uuid: string }>();"));
        assert!(code.contains("getItem(params.uuid)"));
        assert!(code.contains("<dt>Claim agreement description</dt>"));
        // Object fields are not rendered as rows.
        assert!(!code.contains("<dt>Customer</dt>"));
        assert!(code.contains("{item.deleted_at ? \"Suspended\" : \"Available\"}"));
    }

    #[test]
    fn test_edit_page_prefills_and_updates() {
        let config = claim_agreement();
        let code = EditPageTsx::new(&config).render();
        assert!(code.contains("initialValues={item}"));
        assert!(code.contains("await handleUpdate(params.uuid, values);"));
    }
}
