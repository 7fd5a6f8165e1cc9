//! 描述符加载指标模块
//!
//! 通过 `metrics` facade 上报，未安装 recorder 时为空操作。

use std::collections::BTreeMap;

use contracts::{DescriptorShape, ErrorKind};
use metrics::{counter, histogram};

/// 记录一次成功加载
pub fn record_descriptor_loaded(shape: DescriptorShape, plugin_count: usize) {
    counter!(
        "csspipe_descriptors_loaded_total",
        "shape" => shape.to_string()
    )
    .increment(1);
    histogram!("csspipe_descriptor_plugins").record(plugin_count as f64);
}

/// 记录一次加载失败
pub fn record_load_failure(kind: ErrorKind) {
    counter!(
        "csspipe_descriptor_load_failures_total",
        "kind" => kind.as_str()
    )
    .increment(1);
}

/// 加载统计聚合器
///
/// 在内存中聚合，便于 CLI 输出摘要。
#[derive(Debug, Clone, Default)]
pub struct LoadStats {
    pub loaded: u64,
    pub failed: u64,
    pub total_plugins: u64,
    pub by_shape: BTreeMap<&'static str, u64>,
    pub failures_by_kind: BTreeMap<&'static str, u64>,
}

impl LoadStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录成功加载，同时上报指标
    pub fn record_success(&mut self, shape: DescriptorShape, plugin_count: usize) {
        record_descriptor_loaded(shape, plugin_count);
        self.loaded += 1;
        self.total_plugins += plugin_count as u64;
        let key = match shape {
            DescriptorShape::Sequence => "sequence",
            DescriptorShape::Mapping => "mapping",
        };
        *self.by_shape.entry(key).or_insert(0) += 1;
    }

    /// 记录失败，同时上报指标
    pub fn record_failure(&mut self, kind: ErrorKind) {
        record_load_failure(kind);
        self.failed += 1;
        *self.failures_by_kind.entry(kind.as_str()).or_insert(0) += 1;
    }

    pub fn summary(&self) -> LoadSummary {
        LoadSummary {
            loaded: self.loaded,
            failed: self.failed,
            mean_plugins: if self.loaded > 0 {
                self.total_plugins as f64 / self.loaded as f64
            } else {
                0.0
            },
            by_shape: self.by_shape.clone(),
            failures_by_kind: self.failures_by_kind.clone(),
        }
    }
}

/// 加载摘要
#[derive(Debug, Clone, Default)]
pub struct LoadSummary {
    pub loaded: u64,
    pub failed: u64,
    pub mean_plugins: f64,
    pub by_shape: BTreeMap<&'static str, u64>,
    pub failures_by_kind: BTreeMap<&'static str, u64>,
}

impl std::fmt::Display for LoadSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Descriptor Load Summary ===")?;
        writeln!(f, "Loaded: {}", self.loaded)?;
        writeln!(f, "Failed: {}", self.failed)?;
        writeln!(f, "Mean plugins per descriptor: {:.1}", self.mean_plugins)?;
        for (shape, count) in &self.by_shape {
            writeln!(f, "  {shape}: {count}")?;
        }
        if !self.failures_by_kind.is_empty() {
            writeln!(f, "Failures by kind:")?;
            for (kind, count) in &self.failures_by_kind {
                writeln!(f, "  {kind}: {count}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_aggregate() {
        let mut stats = LoadStats::new();
        stats.record_success(DescriptorShape::Mapping, 5);
        stats.record_success(DescriptorShape::Sequence, 6);
        stats.record_failure(ErrorKind::Duplicate);

        let summary = stats.summary();
        assert_eq!(summary.loaded, 2);
        assert_eq!(summary.failed, 1);
        assert!((summary.mean_plugins - 5.5).abs() < 1e-9);
        assert_eq!(summary.by_shape.get("mapping"), Some(&1));
        assert_eq!(summary.failures_by_kind.get("duplicate"), Some(&1));
    }

    #[test]
    fn test_empty_summary_display() {
        let summary = LoadStats::new().summary();
        assert_eq!(summary.mean_plugins, 0.0);
        let text = summary.to_string();
        assert!(text.contains("Loaded: 0"));
        assert!(!text.contains("Failures by kind"));
    }
}
