//! PipelineDescriptor - Config Loader 输出
//!
//! 有序的插件列表，顺序即下游执行顺序。构造后不可变。

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::{ContractError, PluginReference};

/// 描述符来源的输入形态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DescriptorShape {
    /// `plugins = [ ... ]`
    Sequence,
    /// `plugins = { id = options, ... }`
    Mapping,
}

impl fmt::Display for DescriptorShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequence => f.write_str("sequence"),
            Self::Mapping => f.write_str("mapping"),
        }
    }
}

/// 插件管道描述符
///
/// 不变式：
/// - 插件 id 唯一
/// - 顺序与声明顺序一致
/// - options 原样保留
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineDescriptor {
    plugins: Vec<PluginReference>,
}

impl PipelineDescriptor {
    /// 从有序插件列表构造
    ///
    /// # Errors
    /// 同一 id 出现两次时返回 `ContractError::DuplicatePlugin`
    pub fn new(plugins: Vec<PluginReference>) -> Result<Self, ContractError> {
        let mut seen: HashMap<&str, usize> = HashMap::with_capacity(plugins.len());
        for (idx, plugin) in plugins.iter().enumerate() {
            if let Some(first) = seen.insert(plugin.id.as_str(), idx) {
                return Err(ContractError::duplicate_plugin(&plugin.id, first, idx));
            }
        }
        Ok(Self { plugins })
    }

    pub fn plugins(&self) -> &[PluginReference] {
        &self.plugins
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PluginReference> {
        self.plugins.iter()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// 按 id 查找插件
    pub fn get(&self, id: &str) -> Option<&PluginReference> {
        self.plugins.iter().find(|p| p.id == id)
    }

    /// 插件在管道中的位置
    pub fn position(&self, id: &str) -> Option<usize> {
        self.plugins.iter().position(|p| p.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// 按执行顺序返回所有 id
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.plugins.iter().map(|p| p.id.as_str())
    }

    pub fn into_plugins(self) -> Vec<PluginReference> {
        self.plugins
    }
}

impl<'a> IntoIterator for &'a PipelineDescriptor {
    type Item = &'a PluginReference;
    type IntoIter = std::slice::Iter<'a, PluginReference>;

    fn into_iter(self) -> Self::IntoIter {
        self.plugins.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> PipelineDescriptor {
        PipelineDescriptor::new(vec![
            PluginReference::with_options("postcss-import", json!({ "path": ["node_modules"] })),
            PluginReference::new("postcss-nested"),
            PluginReference::with_options("cssnano", json!({ "preset": "default" })),
        ])
        .unwrap()
    }

    #[test]
    fn test_order_preserved() {
        let d = sample();
        let ids: Vec<_> = d.identifiers().collect();
        assert_eq!(ids, vec!["postcss-import", "postcss-nested", "cssnano"]);
        assert_eq!(d.position("cssnano"), Some(2));
        assert!(d.contains("postcss-nested"));
        assert!(!d.contains("autoprefixer"));
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = PipelineDescriptor::new(vec![
            PluginReference::new("a"),
            PluginReference::new("b"),
            PluginReference::new("a"),
        ]);
        match result {
            Err(ContractError::DuplicatePlugin { id, first, second }) => {
                assert_eq!(id, "a");
                assert_eq!(first, 0);
                assert_eq!(second, 2);
            }
            other => panic!("expected DuplicatePlugin, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_descriptor() {
        let d = PipelineDescriptor::new(Vec::new()).unwrap();
        assert!(d.is_empty());
        assert_eq!(d.len(), 0);
    }

    #[test]
    fn test_get_returns_options() {
        let d = sample();
        assert_eq!(
            d.get("cssnano").and_then(|p| p.options.clone()),
            Some(json!({ "preset": "default" }))
        );
        assert_eq!(d.get("postcss-nested").unwrap().options, None);
        assert_eq!((&d).into_iter().count(), 3);
    }

    #[test]
    fn test_serialize_sequence_form() {
        let d = PipelineDescriptor::new(vec![PluginReference::new("autoprefixer")]).unwrap();
        assert_eq!(
            serde_json::to_value(&d).unwrap(),
            json!({ "plugins": [{ "id": "autoprefixer" }] })
        );
    }
}
