//! 配置解析模块
//!
//! 支持 TOML (主要) 和 JSON 格式。
//! `plugins` 字段接受两种形态：有序列表或 id -> options 映射，
//! 统一归一化为有序的 `PluginReference` 列表。

use std::fmt;

use contracts::{ContractError, DescriptorShape, PluginReference};
use serde::de::{Deserializer, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;

/// 配置文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML 格式 (推荐)
    Toml,
    /// JSON 格式
    Json,
}

impl ConfigFormat {
    /// 从文件扩展名推断格式
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// 原始配置文档，尚未校验
#[derive(Debug, Deserialize)]
pub(crate) struct RawDocument {
    plugins: RawPlugins,
}

/// `plugins` 字段的两种形态
#[derive(Debug)]
enum RawPlugins {
    Sequence(Vec<RawEntry>),
    /// 保留原始顺序和重复键，重复由校验阶段报告
    Mapping(Vec<(String, Option<Value>)>),
}

/// 列表形态中的单个条目
#[derive(Debug, Deserialize)]
#[serde(
    untagged,
    expecting = "a plugin name or a table with an `id` key and optional `options`"
)]
enum RawEntry {
    Bare(String),
    Full(RawPluginEntry),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPluginEntry {
    id: String,
    #[serde(default)]
    options: Option<Value>,
}

impl<'de> Deserialize<'de> for RawPlugins {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(PluginsVisitor)
    }
}

struct PluginsVisitor;

impl<'de> Visitor<'de> for PluginsVisitor {
    type Value = RawPlugins;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a list of plugin entries or a map of plugin id to options")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut entries = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(entry) = seq.next_element::<RawEntry>()? {
            entries.push(entry);
        }
        Ok(RawPlugins::Sequence(entries))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((id, options)) = map.next_entry::<String, Option<Value>>()? {
            entries.push((id, options));
        }
        Ok(RawPlugins::Mapping(entries))
    }
}

impl RawDocument {
    /// 归一化为有序插件列表
    pub(crate) fn normalize(self) -> (Vec<PluginReference>, DescriptorShape) {
        match self.plugins {
            RawPlugins::Sequence(entries) => {
                let plugins = entries
                    .into_iter()
                    .map(|entry| match entry {
                        RawEntry::Bare(id) => PluginReference::new(id),
                        RawEntry::Full(RawPluginEntry { id, options }) => {
                            PluginReference { id, options }
                        }
                    })
                    .collect();
                (plugins, DescriptorShape::Sequence)
            }
            RawPlugins::Mapping(entries) => {
                let plugins = entries
                    .into_iter()
                    .map(|(id, options)| PluginReference { id, options })
                    .collect();
                (plugins, DescriptorShape::Mapping)
            }
        }
    }
}

/// 解析 TOML 格式配置
pub(crate) fn parse_toml(content: &str) -> Result<RawDocument, ContractError> {
    toml::from_str(content).map_err(|e| ContractError::MalformedDescriptor {
        message: format!("TOML parse error: {e}"),
        source: Some(Box::new(e)),
    })
}

/// 解析 JSON 格式配置
pub(crate) fn parse_json(content: &str) -> Result<RawDocument, ContractError> {
    serde_json::from_str(content).map_err(|e| ContractError::MalformedDescriptor {
        message: format!("JSON parse error: {e}"),
        source: Some(Box::new(e)),
    })
}

/// 解析内存中的结构化文档
pub(crate) fn parse_value(document: &Value) -> Result<RawDocument, ContractError> {
    RawDocument::deserialize(document).map_err(|e| ContractError::MalformedDescriptor {
        message: format!("document error: {e}"),
        source: Some(Box::new(e)),
    })
}

/// 根据格式解析配置
pub(crate) fn parse(content: &str, format: ConfigFormat) -> Result<RawDocument, ContractError> {
    match format {
        ConfigFormat::Toml => parse_toml(content),
        ConfigFormat::Json => parse_json(content),
    }
}
