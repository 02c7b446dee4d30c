//! Shared state for one generator run.

use std::collections::HashMap;

use super::descriptor::{DescriptorProto, FieldDescriptorProto, FileDescriptorProto};
use super::field::FieldPlan;
use super::GeneratorConfig;
use crate::error::Result;

/// Messages sharing `option (base_class)` and the fields they all carry.
#[derive(Debug, Clone)]
pub struct BaseClass<'a> {
    pub name: &'a str,
    pub members: Vec<&'a DescriptorProto>,
    /// Fields of the first member whose name, type and label appear in every
    /// member, ordered by the first member's field numbers.
    pub common: Vec<&'a FieldDescriptorProto>,
}

impl BaseClass<'_> {
    pub fn contains_field(&self, name: &str) -> bool {
        self.common.iter().any(|f| f.name == name)
    }
}

/// Everything the emitters look up across messages.
pub struct GenContext<'a> {
    pub file: &'a FileDescriptorProto,
    pub config: &'a GeneratorConfig,
    /// Only groups with at least one common field; in first-use order.
    pub base_classes: Vec<BaseClass<'a>>,
    ifdefs: HashMap<&'a str, &'a str>,
}

impl<'a> GenContext<'a> {
    pub fn new(file: &'a FileDescriptorProto, config: &'a GeneratorConfig) -> Self {
        let mut groups: Vec<(&'a str, Vec<&'a DescriptorProto>)> = Vec::new();
        for msg in &file.message_type {
            let Some(base) = msg.base_class() else {
                continue;
            };
            match groups.iter_mut().find(|(name, _)| *name == base) {
                Some((_, members)) => members.push(msg),
                None => groups.push((base, vec![msg])),
            }
        }

        let base_classes = groups
            .into_iter()
            .map(|(name, members)| {
                let common = find_common_fields(&members);
                BaseClass {
                    name,
                    members,
                    common,
                }
            })
            .filter(|group| !group.common.is_empty())
            .collect();

        let ifdefs = file
            .message_type
            .iter()
            .filter_map(|msg| msg.ifdef().map(|ifdef| (msg.name.as_str(), ifdef)))
            .collect();

        Self {
            file,
            config,
            base_classes,
            ifdefs,
        }
    }

    /// Base group of a message, if it has one with common fields.
    pub fn base_class_of(&self, msg: &DescriptorProto) -> Option<&BaseClass<'a>> {
        let name = msg.base_class()?;
        self.base_classes.iter().find(|group| group.name == name)
    }

    pub fn ifdef_of(&self, message_name: &str) -> Option<&'a str> {
        self.ifdefs.get(message_name).copied()
    }

    pub fn message(&self, name: &str) -> Option<&'a DescriptorProto> {
        self.file.message_type.iter().find(|msg| msg.name == name)
    }

    /// Field plans of a message in declaration order.
    pub fn field_plans(&self, msg: &DescriptorProto) -> Result<Vec<FieldPlan>> {
        let base = self.base_class_of(msg);
        msg.field
            .iter()
            .map(|field| {
                let in_base = base.is_some_and(|group| group.contains_field(&field.name));
                FieldPlan::new(field, in_base)
            })
            .collect()
    }

    /// Path prefix for runtime imports in emitted code.
    pub fn runtime(&self) -> &str {
        &self.config.runtime_path
    }
}

fn find_common_fields<'a>(members: &[&'a DescriptorProto]) -> Vec<&'a FieldDescriptorProto> {
    let Some((&first, rest)) = members.split_first() else {
        return Vec::new();
    };

    let mut common: Vec<&'a FieldDescriptorProto> = first
        .field
        .iter()
        .filter(|field| {
            rest.iter().all(|other| {
                other.field.iter().any(|o| {
                    o.name == field.name && o.r#type == field.r#type && o.label == field.label
                })
            })
        })
        .collect();
    common.sort_by_key(|field| field.number);
    common
}
