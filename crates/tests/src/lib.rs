//! # Integration Tests
//!
//! 集成测试与端到端测试。
//!
//! 负责：
//! - 合约测试
//! - 从磁盘加载真实配置 (fixtures/)
//! - 配置与规范管道之间的漂移检查

#[cfg(test)]
fn fixture(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

#[cfg(test)]
mod contract_tests {
    use contracts::{ContractError, PipelineDescriptor, PluginReference};

    #[test]
    fn test_contracts_compile() {
        let _ = contracts::Environment::default();
    }

    #[test]
    fn test_descriptor_rejects_duplicates() {
        let err = PipelineDescriptor::new(vec![
            PluginReference::new("cssnano"),
            PluginReference::new("cssnano"),
        ])
        .unwrap_err();
        assert!(matches!(err, ContractError::DuplicatePlugin { first: 0, second: 1, .. }));
    }
}

#[cfg(test)]
mod loader_tests {
    use super::fixture;
    use config_loader::{ConfigFormat, ConfigLoader, DescriptorShape};
    use contracts::{ContractError, ErrorKind, PluginReference};
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_sequence_order_preserved() {
        let ids = ["z-last", "a-first", "m-middle", "b", "y"];
        let doc = json!({ "plugins": ids });
        let descriptor = ConfigLoader::load(&doc).unwrap();
        assert_eq!(descriptor.identifiers().collect::<Vec<_>>(), ids);
    }

    #[test]
    fn test_mapping_order_preserved() {
        let content = r#"{ "plugins": { "zeta": {}, "alpha": {}, "mu": { "k": 1 }, "beta": null } }"#;
        let descriptor = ConfigLoader::load_from_str(content, ConfigFormat::Json).unwrap();
        assert_eq!(
            descriptor.identifiers().collect::<Vec<_>>(),
            vec!["zeta", "alpha", "mu", "beta"]
        );
        assert_eq!(descriptor.get("beta").unwrap().options, None);
    }

    #[test]
    fn test_mapping_example_from_docs() {
        let doc = json!({ "plugins": { "a": {}, "b": { "preset": "default" } } });
        let descriptor = ConfigLoader::load(&doc).unwrap();
        assert_eq!(
            descriptor.into_plugins(),
            vec![
                PluginReference::with_options("a", json!({})),
                PluginReference::with_options("b", json!({ "preset": "default" })),
            ]
        );
    }

    #[test]
    fn test_sequence_duplicate_fails() {
        let doc = json!({ "plugins": [{ "id": "a" }, { "id": "b" }, { "id": "a" }] });
        let err = ConfigLoader::load(&doc).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Duplicate);
    }

    #[test]
    fn test_missing_plugins_fails() {
        for doc in [json!({}), json!({ "plugin": {} }), json!([]), json!("plugins")] {
            let err = ConfigLoader::load(&doc).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Malformed, "doc: {doc}");
        }
    }

    #[test]
    fn test_options_passed_through_unmodified() {
        let options = json!({
            "path": ["tailwind", "node_modules"],
            "nested": { "b": [1, 2, { "c": null }], "a": true },
            "ratio": 0.5
        });
        let doc = json!({ "plugins": [{ "id": "postcss-import", "options": options.clone() }] });
        let descriptor = ConfigLoader::load(&doc).unwrap();
        assert_eq!(descriptor.plugins()[0].options, Some(options));
    }

    #[test]
    fn test_load_twice_is_identical() {
        let path = fixture("production.toml");
        let a = ConfigLoader::load_from_path(&path).unwrap();
        let b = ConfigLoader::load_from_path(&path).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fixture_shapes() {
        let (_, shape) = ConfigLoader::load_path_with_shape(&fixture("dev_app.toml")).unwrap();
        assert_eq!(shape, DescriptorShape::Mapping);
        let (d, shape) = ConfigLoader::load_path_with_shape(&fixture("dev_legacy.json")).unwrap();
        assert_eq!(shape, DescriptorShape::Sequence);
        assert_eq!(d.len(), 4);
    }

    #[test]
    fn test_json_duplicate_keys_detected() {
        let err = ConfigLoader::load_from_path(&fixture("duplicate.json")).unwrap_err();
        match err {
            ContractError::DuplicatePlugin { id, first, second } => {
                assert_eq!(id, "postcss-import");
                assert_eq!((first, second), (0, 2));
            }
            other => panic!("expected DuplicatePlugin, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ConfigLoader::load_from_path(&fixture("nope.toml")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_load_from_temp_file() {
        let mut file = tempfile::Builder::new().suffix(".TOML").tempfile().unwrap();
        writeln!(file, "plugins = [\"postcss-nested\", \"autoprefixer\"]").unwrap();
        let descriptor = ConfigLoader::load_from_path(file.path()).unwrap();
        assert_eq!(
            descriptor.identifiers().collect::<Vec<_>>(),
            vec!["postcss-nested", "autoprefixer"]
        );
    }
}

#[cfg(test)]
mod drift_tests {
    use super::fixture;
    use config_loader::{drift, presets, ConfigLoader};
    use contracts::Environment;

    #[test]
    fn test_fixtures_match_presets() {
        let cases = [
            ("dev_app.toml", Environment::Development),
            ("production.toml", Environment::Production),
        ];
        for (name, env) in cases {
            let actual = ConfigLoader::load_from_path(&fixture(name)).unwrap();
            let expected = presets::descriptor_for(env).unwrap();
            let report = drift::compare(&expected, &actual);
            assert!(report.is_clean(), "{name} vs {env}: {report:?}");
        }
    }

    #[test]
    fn test_legacy_dev_config_drifts() {
        let actual = ConfigLoader::load_from_path(&fixture("dev_legacy.json")).unwrap();
        let expected = presets::descriptor_for(Environment::Development).unwrap();
        let report = drift::compare(&expected, &actual);

        assert_eq!(report.missing, vec!["tailwindcss/nesting"]);
        assert!(report.unexpected.is_empty());
        assert_eq!(
            report.options_changed,
            vec!["postcss-nested", "postcss-reporter"]
        );
        assert!(!report.order_changed);
    }

    #[test]
    fn test_environments_differ() {
        let dev = presets::descriptor_for(Environment::Development).unwrap();
        let prod = presets::descriptor_for(Environment::Production).unwrap();
        let report = drift::compare(&prod, &dev);
        assert_eq!(report.missing, vec!["autoprefixer", "cssnano"]);
        assert_eq!(report.unexpected, vec!["tailwindcss/nesting"]);
    }
}

#[cfg(test)]
mod observability_tests {
    use config_loader::ConfigLoader;
    use observability::LoadStats;
    use serde_json::json;

    #[test]
    fn test_stats_track_loader_results() {
        let mut stats = LoadStats::new();
        let docs = [
            json!({ "plugins": ["a", "b"] }),
            json!({ "plugins": { "a": {} } }),
            json!({ "plugins": ["a", "a"] }),
        ];
        for doc in &docs {
            match ConfigLoader::load_value_with_shape(doc) {
                Ok((descriptor, shape)) => stats.record_success(shape, descriptor.len()),
                Err(e) => stats.record_failure(e.kind()),
            }
        }
        let summary = stats.summary();
        assert_eq!(summary.loaded, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.by_shape.get("sequence"), Some(&1));
        assert_eq!(summary.by_shape.get("mapping"), Some(&1));
    }
}
