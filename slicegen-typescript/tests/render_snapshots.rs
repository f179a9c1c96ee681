//! Inline snapshot tests for small deterministic renders.
//!
//! Run `cargo insta review` to update when making intentional changes.

use slicegen_config::EntityConfig;
use slicegen_core::GeneratedFile;
use slicegen_typescript::ast::{Fn, Import, Interface, Param};
use slicegen_typescript::builder::Renderable;
use slicegen_typescript::files::{TypesTs, ValidationTs};

fn note_config() -> EntityConfig {
    EntityConfig::from_str_with_filename(
        r#"{
            "name": "Note",
            "fields": [
                { "name": "note_description", "type": "string", "required": true }
            ]
        }"#,
        "note.json",
    )
    .unwrap()
}

#[test]
fn snapshot_import() {
    let import = Import::new("../types/note.ts")
        .named("NoteData")
        .type_only()
        .render();
    insta::assert_snapshot!(import, @r#"import type { NoteData } from "../types/note.ts";"#);
}

#[test]
fn snapshot_interface() {
    let interface = Interface::new("NoteState")
        .field("items", "NoteData[]")
        .optional_field("error", "string")
        .render();
    insta::assert_snapshot!(interface, @r#"
export interface NoteState {
  items: NoteData[];
  error?: string;
}
"#);
}

#[test]
fn snapshot_function() {
    let f = Fn::new("getNoteData")
        .doc("GET /api/note/:uuid")
        .async_()
        .param(Param::new("token", "string"))
        .param(Param::new("uuid", "string"))
        .returns("Promise<NoteResponse>")
        .body_line("return apiRequest(`${BASE_PATH}/${uuid}`, { method: \"GET\" }, token);")
        .render();
    insta::assert_snapshot!(f, @r#"
/** GET /api/note/:uuid */
export async function getNoteData(token: string, uuid: string): Promise<NoteResponse> {
  return apiRequest(`${BASE_PATH}/${uuid}`, { method: "GET" }, token);
}
"#);
}

#[test]
fn snapshot_validation_file() {
    let config = note_config();
    let code = ValidationTs::new(&config).render();
    insta::assert_snapshot!(code, @r#"
// Code generated by slicegen. DO NOT EDIT.

import { z } from "zod";

export const noteSchema = z.object({
  note_description: z.string().min(1, "Note description is required").max(255),
});

export type NoteFormValues = z.infer<typeof noteSchema>;
"#);
}

#[test]
fn snapshot_types_file() {
    let config = note_config();
    let code = TypesTs::new(&config).render();
    insta::assert_snapshot!(code, @r#"
// Code generated by slicegen. DO NOT EDIT.

export interface NoteData {
  id?: number;
  uuid?: string;
  note_description: string;
  created_at?: string;
  updated_at?: string;
  deleted_at?: string | null;
}

export interface CreateNoteData {
  note_description: string;
}

export type UpdateNoteData = Partial<CreateNoteData>;

export interface NoteListResponse {
  success: boolean;
  data?: NoteData[];
  message?: string;
}

export interface NoteResponse {
  success: boolean;
  data?: NoteData;
  message?: string;
}

export interface NoteDeleteResponse {
  success: boolean;
  message?: string;
}

export interface NoteRestoreResponse {
  success: boolean;
  data?: NoteData;
  message?: string;
}
"#);
}
