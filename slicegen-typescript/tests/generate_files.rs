//! End-to-end generation tests against a temporary output directory.

use std::fs;
use std::path::Path;

use slicegen_config::EntityConfig;
use slicegen_typescript::{Generator, Step};
use tempfile::TempDir;

fn widget_config() -> EntityConfig {
    EntityConfig::from_str_with_filename(
        r#"{
            "name": "Widget",
            "fields": [
                { "name": "widget_description", "type": "string", "required": true }
            ]
        }"#,
        "widget.json",
    )
    .unwrap()
}

fn read(base: &Path, rel: &str) -> String {
    fs::read_to_string(base.join(rel)).unwrap_or_else(|_| panic!("missing {}", rel))
}

#[test]
fn generate_writes_the_full_slice() {
    let temp = TempDir::new().unwrap();
    let config = widget_config();
    let generator = Generator::new(&config);

    let result = generator.generate(temp.path()).unwrap();

    for rel in [
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
        assert!(temp.path().join(rel).exists(), "missing {}", rel);
    }

    assert_eq!(result.total_written(), 14);
    assert_eq!(result.steps.len(), Step::ALL.len());
    assert!(result.steps.iter().all(|s| s.skipped.is_empty()));
}

// The Widget scenario: one string field drives the record shape, the store
// sort key, and the REST paths.
#[test]
fn widget_end_to_end_scenario() {
    let temp = TempDir::new().unwrap();
    let config = widget_config();
    Generator::new(&config).generate(temp.path()).unwrap();

    let types = read(temp.path(), "src/types/widget.ts");
    assert!(types.contains("widget_description: string;"));
    for optional in [
        "id?: number;",
        "uuid?: string;",
        "created_at?: string;",
        "updated_at?: string;",
        "deleted_at?: string | null;",
    ] {
        assert!(types.contains(optional), "missing {}", optional);
    }

    let store = read(temp.path(), "src/stores/widgetStore.ts");
    assert!(store.contains("String(a.widget_description ?? \"\").localeCompare"));

    let actions = read(temp.path(), "src/actions/widgetActions.ts");
    assert!(actions.contains("const BASE_PATH = \"/api/widget\";"));
    for op in [
        "`${BASE_PATH}/${uuid}`, { method: \"GET\" }",
        "`${BASE_PATH}/store`, { method: \"POST\"",
        "`${BASE_PATH}/update/${uuid}`, { method: \"PATCH\"",
        "`${BASE_PATH}/delete/${uuid}`, { method: \"DELETE\" }",
        "`${BASE_PATH}/restore/${uuid}`, { method: \"PUT\" }",
    ] {
        assert!(actions.contains(op), "missing {}", op);
    }
}

#[test]
fn rerun_clobbers_artifacts_but_keeps_support_stubs() {
    let temp = TempDir::new().unwrap();
    let config = widget_config();
    let generator = Generator::new(&config);

    generator.generate(temp.path()).unwrap();

    // Hand-edit one generated artifact and one support stub.
    fs::write(temp.path().join("src/types/widget.ts"), "// edited").unwrap();
    fs::write(temp.path().join("src/lib/api-client.ts"), "// mine").unwrap();

    let result = generator.generate(temp.path()).unwrap();

    // The artifact is regenerated; the stub survives.
    assert!(read(temp.path(), "src/types/widget.ts").contains("export interface WidgetData"));
    assert_eq!(read(temp.path(), "src/lib/api-client.ts"), "// mine");

    let support = result
        .steps
        .iter()
        .find(|s| s.step == Step::Support)
        .unwrap();
    assert_eq!(support.skipped.len(), 2);
    assert!(support.written.is_empty());
}

#[test]
fn multi_word_entity_stays_name_consistent() {
    let temp = TempDir::new().unwrap();
    let config = EntityConfig::from_str_with_filename(
        r#"{
            "name": "ClaimAgreement",
            "fields": [
                { "name": "claim_agreement_description", "type": "string", "required": true },
                { "name": "customer", "type": "object", "required": false }
            ]
        }"#,
        "claim-agreement.json",
    )
    .unwrap();
    Generator::new(&config).generate(temp.path()).unwrap();

    let types = read(temp.path(), "src/types/claim-agreement.ts");
    assert!(types.contains("export interface ClaimAgreementData {"));
    assert!(types.contains("import type { CustomerData } from \"./customer.ts\";"));

    let actions = read(temp.path(), "src/actions/claimAgreementActions.ts");
    assert!(actions.contains("const BASE_PATH = \"/api/claim-agreement\";"));

    let sync = read(temp.path(), "src/hooks/useClaimAgreementSync.ts");
    assert!(sync.contains("import { useClaimAgreement } from \"./useClaimAgreement.ts\";"));
    assert!(
        sync.contains(
            "import { useClaimAgreementStore } from \"../stores/claimAgreementStore.ts\";"
        )
    );

    assert!(
        temp.path()
            .join("src/app/dashboard/claim-agreements/[uuid]/edit/page.tsx")
            .exists()
    );
}
