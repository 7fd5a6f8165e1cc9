//! 配置校验模块
//!
//! 校验规则：
//! - 插件 id 非空
//! - 插件 id 首尾无空白
//! - 插件 id 唯一 (由 `PipelineDescriptor::new` 保证)
//!
//! 另外收集非致命警告，供 CLI 展示。

use contracts::{ContractError, PipelineDescriptor, PluginReference};
use serde_json::Value;
use validator::Validate;

/// 校验插件列表并构造描述符
///
/// 返回第一个遇到的错误。
pub fn validate(plugins: Vec<PluginReference>) -> Result<PipelineDescriptor, ContractError> {
    validate_identifiers(&plugins)?;
    PipelineDescriptor::new(plugins)
}

/// 校验每个插件的字段规则
fn validate_identifiers(plugins: &[PluginReference]) -> Result<(), ContractError> {
    for (idx, plugin) in plugins.iter().enumerate() {
        if let Err(errors) = plugin.validate() {
            let message = errors
                .field_errors()
                .values()
                .flat_map(|errs| errs.iter())
                .map(|e| {
                    e.message
                        .as_deref()
                        .map(str::to_string)
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect::<Vec<_>>()
                .join("; ");
            return Err(ContractError::malformed_at(
                format!("plugins[{idx}].id"),
                message,
            ));
        }
    }
    Ok(())
}

/// 收集非致命问题
pub fn warnings(descriptor: &PipelineDescriptor) -> Vec<String> {
    let mut warnings = Vec::new();

    if descriptor.is_empty() {
        warnings.push("pipeline declares no plugins - CSS passes through untouched".to_string());
    }

    for plugin in descriptor {
        if matches!(&plugin.options, Some(Value::String(s)) if s.is_empty()) {
            warnings.push(format!("plugin '{}' has an empty string as options", plugin.id));
        }
    }

    warnings
}
