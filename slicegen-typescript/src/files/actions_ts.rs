//! Remote-actions generator: one thin wrapper per REST operation.

use std::path::{Path, PathBuf};

use slicegen_config::EntityConfig;
use slicegen_core::{FileRules, GeneratedFile};

use super::GENERATED_HEADER;
use crate::{
    ast::{Fn, Import, Param},
    code_file::{CodeFile, RawCode},
    naming::TS_NAMING,
};

/// The `src/actions/<entity>Actions.ts` file.
///
/// Every call goes through the shared `apiRequest` helper, which owns the
/// bearer token and CSRF header; action functions never build raw requests
/// and never swallow errors; rejections propagate to the calling hook.
pub struct ActionsTs<'a> {
    config: &'a EntityConfig,
}

impl<'a> ActionsTs<'a> {
    pub fn new(config: &'a EntityConfig) -> Self {
        Self { config }
    }

    fn build_actions(&self, pascal: &str, base_path: &str) -> Vec<Fn> {
        vec![
            Fn::new(format!("get{}DataFetch", pascal))
                .doc(format!("GET {}", base_path))
                .async_()
                .param(Param::new("token", "string"))
                .returns(format!("Promise<{}ListResponse>", pascal))
                .body_line("return apiRequest(BASE_PATH, { method: \"GET\" }, token);"),
            Fn::new(format!("get{}Data", pascal))
                .doc(format!("GET {}/:uuid", base_path))
                .async_()
                .param(Param::new("token", "string"))
                .param(Param::new("uuid", "string"))
                .returns(format!("Promise<{}Response>", pascal))
                .body_line(
                    "return apiRequest(`${BASE_PATH}/${uuid}`, { method: \"GET\" }, token);",
                ),
            Fn::new(format!("create{}Data", pascal))
                .doc(format!("POST {}/store", base_path))
                .async_()
                .param(Param::new("token", "string"))
                .param(Param::new("data", format!("Create{}Data", pascal)))
                .returns(format!("Promise<{}Response>", pascal))
                .body_line("return apiRequest(`${BASE_PATH}/store`, { method: \"POST\", body: JSON.stringify(data) }, token);"),
            Fn::new(format!("update{}Data", pascal))
                .doc(format!("PATCH {}/update/:uuid", base_path))
                .async_()
                .param(Param::new("token", "string"))
                .param(Param::new("uuid", "string"))
                .param(Param::new("data", format!("Update{}Data", pascal)))
                .returns(format!("Promise<{}Response>", pascal))
                .body_line("return apiRequest(`${BASE_PATH}/update/${uuid}`, { method: \"PATCH\", body: JSON.stringify(data) }, token);"),
            Fn::new(format!("delete{}Data", pascal))
                .doc(format!("DELETE {}/delete/:uuid", base_path))
                .async_()
                .param(Param::new("token", "string"))
                .param(Param::new("uuid", "string"))
                .returns(format!("Promise<{}DeleteResponse>", pascal))
                .body_line(
                    "return apiRequest(`${BASE_PATH}/delete/${uuid}`, { method: \"DELETE\" }, token);",
                ),
            Fn::new(format!("restore{}Data", pascal))
                .doc(format!("PUT {}/restore/:uuid", base_path))
                .async_()
                .param(Param::new("token", "string"))
                .param(Param::new("uuid", "string"))
                .returns(format!("Promise<{}RestoreResponse>", pascal))
                .body_line(
                    "return apiRequest(`${BASE_PATH}/restore/${uuid}`, { method: \"PUT\" }, token);",
                ),
        ]
    }
}

impl GeneratedFile for ActionsTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("src")
            .join("actions")
            .join(format!("{}Actions.ts", self.config.camel_name()))
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        let pascal = TS_NAMING.type_name(&self.config.name);
        let base_path = self.config.api_base_path();

        let types_import = Import::new(format!("../types/{}.ts", self.config.kebab_name()))
            .named(format!("Create{}Data", pascal))
            .named(format!("Update{}Data", pascal))
            .named(format!("{}DeleteResponse", pascal))
            .named(format!("{}ListResponse", pascal))
            .named(format!("{}Response", pascal))
            .named(format!("{}RestoreResponse", pascal))
            .type_only();

        let mut file = CodeFile::new()
            .header(GENERATED_HEADER)
            .import(Import::new("../lib/api-client.ts").named("apiRequest"))
            .import(types_import)
            .add(RawCode::new(format!(
                "const BASE_PATH = \"{}\";",
                base_path
            )));

        for action in self.build_actions(&pascal, &base_path) {
            file = file.add(action);
        }

        file.render()
    }
}
