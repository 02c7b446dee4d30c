//! JSON schema manifest.
//!
//! A machine-readable summary of what was generated: every message with its
//! id, direction and size estimate, every enum, and every rpc with its gating
//! flags. Clients use it to check they agree with the device on message ids.
//!
//! # Example
//!
//! ```
//! use esphome_api::codegen::descriptor::FileDescriptorProto;
//! use esphome_api::codegen::manifest::build_manifest;
//! use esphome_api::codegen::{GenContext, GeneratorConfig};
//!
//! let file = FileDescriptorProto::default();
//! let config = GeneratorConfig::default();
//! let schema = build_manifest(&GenContext::new(&file, &config)).unwrap();
//! assert!(schema.to_json().unwrap().contains("\"messages\""));
//! ```

use serde::Serialize;
use serde_json::json;

use super::code::{camel_to_snake, feature_name, short_type_name};
use super::context::GenContext;
use super::descriptor::Source;
use super::message::estimated_size;
use crate::error::Result;

/// Manifest format version.
pub const MANIFEST_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Serialize)]
pub struct FieldEntry {
    pub name: String,
    pub number: u32,
    #[serde(rename = "type")]
    pub type_name: String,
    pub repeated: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageEntry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u16>,
    pub message_name: String,
    pub source: Source,
    pub estimated_size: u32,
    pub log: bool,
    pub no_delay: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_class: Option<String>,
    pub fields: Vec<FieldEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnumEntry {
    pub name: String,
    pub values: Vec<(String, i32)>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MethodEntry {
    pub name: String,
    pub input: String,
    pub output: String,
    pub needs_setup_connection: bool,
    pub needs_authentication: bool,
}

/// Everything the manifest lists.
#[derive(Debug, Clone, Serialize)]
pub struct ApiSchema {
    pub file: String,
    pub messages: Vec<MessageEntry>,
    pub enums: Vec<EnumEntry>,
    pub methods: Vec<MethodEntry>,
}

impl ApiSchema {
    /// Look up a message by its dispatch id.
    pub fn message_by_id(&self, id: u16) -> Option<&MessageEntry> {
        self.messages.iter().find(|m| m.id == Some(id))
    }

    /// Pretty-printed manifest document.
    pub fn to_json(&self) -> Result<String> {
        let doc = json!({
            "version": MANIFEST_VERSION,
            "schema": self,
        });
        Ok(serde_json::to_string_pretty(&doc)?)
    }
}

pub fn build_manifest(ctx: &GenContext<'_>) -> Result<ApiSchema> {
    let mut messages = Vec::with_capacity(ctx.file.message_type.len());
    for msg in &ctx.file.message_type {
        let plans = ctx.field_plans(msg)?;
        let fields = plans
            .iter()
            .map(|plan| FieldEntry {
                name: plan.name.clone(),
                number: plan.number,
                type_name: plan
                    .type_name
                    .clone()
                    .unwrap_or_else(|| plan.info.rust_type.to_string()),
                repeated: plan.repeated,
            })
            .collect();

        messages.push(MessageEntry {
            name: msg.name.clone(),
            id: msg.message_id()?,
            message_name: camel_to_snake(&msg.name),
            source: msg.source(),
            estimated_size: estimated_size(&plans),
            log: msg.log(),
            no_delay: msg.no_delay(),
            feature: msg.ifdef().map(feature_name),
            base_class: ctx.base_class_of(msg).map(|group| group.name.to_string()),
            fields,
        });
    }

    let enums = ctx
        .file
        .enum_type
        .iter()
        .map(|e| EnumEntry {
            name: e.name.clone(),
            values: e.value.iter().map(|v| (v.name.clone(), v.number)).collect(),
        })
        .collect();

    let methods = ctx
        .file
        .service
        .iter()
        .flat_map(|service| &service.method)
        .map(|m| MethodEntry {
            name: m.name.clone(),
            input: short_type_name(&m.input_type).to_string(),
            output: short_type_name(&m.output_type).to_string(),
            needs_setup_connection: m.needs_setup_connection(),
            needs_authentication: m.needs_authentication(),
        })
        .collect();

    Ok(ApiSchema {
        file: ctx.file.name.clone(),
        messages,
        enums,
        methods,
    })
}
