//! Incremental build contracts (INCR-001 through INCR-003)
//!
//! Cache keys depend on the own hash and on the keys of every dependency,
//! and survive a save/load cycle through the manifest file.

use crate::common::*;
use markdef::{
    build_manifest, build_order, ComponentKind, Config, ContentHash, Definition,
    ManifestRepository, MarkdefError, TomlManifestRepository,
};
use std::sync::Arc;
use tempfile::tempdir;

fn hashed(name: &str, source: &str, kind: ComponentKind) -> Arc<Definition> {
    let mut b = named(name);
    b.set_own_hash(ContentHash::from_content(source).to_string());
    Arc::new(b.build_with(kind))
}

fn app(base_source: &str) -> Vec<Arc<Definition>> {
    vec![
        hashed("ui:page", "<page/>", ComponentKind::new().with_include(cmp("ui:card"))),
        hashed("ui:card", "<card/>", ComponentKind::new().with_extends(cmp("ui:base"))),
        hashed("ui:base", base_source, ComponentKind::new()),
        hashed("ui:footer", "<footer/>", ComponentKind::new()),
    ]
}

/// CONTRACT INCR-001: Dependencies Build First
mod ordering {
    use super::*;

    #[test]
    fn contract_every_dependency_precedes_its_dependent() {
        let defs = app("<base/>");
        let order: Vec<String> = build_order(&defs)
            .unwrap()
            .iter()
            .map(|d| d.to_string())
            .collect();

        let pos = |name: &str| order.iter().position(|n| n == name).unwrap();
        assert!(pos("ui:base") < pos("ui:card"));
        assert!(pos("ui:card") < pos("ui:page"));
        assert_eq!(order.len(), 4);
    }

    #[test]
    fn contract_cycles_are_errors() {
        let defs = vec![
            hashed("ui:a", "a", ComponentKind::new().with_include(cmp("ui:b"))),
            hashed("ui:b", "b", ComponentKind::new().with_include(cmp("ui:a"))),
        ];
        let err = build_order(&defs).unwrap_err();
        assert!(matches!(err, MarkdefError::DependencyCycle { .. }));
        insta::assert_snapshot!(err.to_string(), @"dependency cycle between: ui:a, ui:b");
    }
}

/// CONTRACT INCR-002: Changes Propagate to Dependents
mod staleness {
    use super::*;

    #[test]
    fn contract_unchanged_sources_are_not_stale() {
        let previous = build_manifest(&app("<base/>"), |_| None).unwrap();
        let current = build_manifest(&app("<base/>"), |_| None).unwrap();
        assert!(current.stale_against(&previous).is_empty());
    }

    #[test]
    fn contract_change_marks_transitive_dependents_stale() {
        let previous = build_manifest(&app("<base/>"), |_| None).unwrap();
        let current = build_manifest(&app("<base v2/>"), |_| None).unwrap();
        assert_eq!(
            current.stale_against(&previous),
            vec!["ui:base", "ui:card", "ui:page"]
        );
    }

    #[test]
    fn contract_removed_definitions_are_listed() {
        let previous = build_manifest(&app("<base/>"), |_| None).unwrap();
        let mut defs = app("<base/>");
        defs.retain(|d| d.name() != Some("ui:footer"));
        let current = build_manifest(&defs, |_| None).unwrap();
        assert_eq!(current.removed_since(&previous), vec!["ui:footer"]);
    }
}

/// CONTRACT INCR-003: Manifest Survives Persistence
mod persistence {
    use super::*;

    #[test]
    fn contract_saved_manifest_compares_equal_after_load() {
        let dir = tempdir().unwrap();
        let path = Config::default().manifest_path(dir.path());
        let repo = TomlManifestRepository::new();

        let manifest = build_manifest(&app("<base/>"), |_| None).unwrap();
        repo.save(&manifest, &path).unwrap();
        let loaded = repo.load(&path).unwrap();

        assert_eq!(loaded, manifest);
        let rebuilt = build_manifest(&app("<base/>"), |_| None).unwrap();
        assert!(rebuilt.stale_against(&loaded).is_empty());
    }

    #[test]
    fn contract_missing_manifest_makes_everything_stale() {
        let dir = tempdir().unwrap();
        let repo = TomlManifestRepository::new();
        let previous = repo.load(&dir.path().join("markdef.lock")).unwrap();

        let current = build_manifest(&app("<base/>"), |_| None).unwrap();
        assert_eq!(current.stale_against(&previous).len(), 4);
    }
}
