#![cfg(test)]
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use choromap_core::error::{ConfigMismatchError, LoadError};
use choromap_core::validation;
use choromap_core::{BoundaryCache, BoundarySource, PropertyNames, RegionLinkResolver};
use choromap_integration_tests::squares;

fn write_boundary(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Boundary keyed by `NAME_1` and a table written against different names
/// must fail at startup, not on the first click.
#[test]
fn mismatched_link_table_fails_validation() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_boundary(&dir, "india.geojson", &squares("NAME_1", &["Kerala"]));
    let source = BoundarySource::load(&path, &PropertyNames::new("NAME_1")).unwrap();
    let resolver = RegionLinkResolver::table([("KL", "https://x.test/kl")], None);

    let err = validation::validate(&source, &resolver).unwrap_err();

    match err {
        ConfigMismatchError::Disjoint {
            key_property,
            sample_region,
            sample_key,
            ..
        } => {
            assert_eq!(key_property, "NAME_1");
            assert_eq!(sample_region, "Kerala");
            assert_eq!(sample_key, "KL");
        }
        other => panic!("unexpected error: {other}"),
    }
}

/// The same file read with the other observed key property cannot load at all.
#[test]
fn wrong_key_property_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_boundary(&dir, "india.geojson", &squares("NAME_1", &["Kerala"]));

    let err = BoundarySource::load(&path, &PropertyNames::new("st_nm")).unwrap_err();

    assert!(matches!(err, LoadError::MissingKeyProperty { index: 0, .. }));
}

#[test]
fn region_ids_come_from_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let ids = ["Kerala", "Goa", "Tamil Nadu"];
    let path = write_boundary(&dir, "states.geojson", &squares("st_nm", &ids));

    let source = BoundarySource::load(&path, &PropertyNames::new("st_nm")).unwrap();

    let expected: Vec<String> = {
        let mut v: Vec<String> = ids.iter().map(|s| s.to_string()).collect();
        v.sort();
        v
    };
    assert_eq!(source.region_ids().into_iter().collect::<Vec<_>>(), expected);
}

#[test]
fn duplicate_regions_fail_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_boundary(&dir, "states.geojson", &squares("NAME_1", &["Goa", "Goa"]));

    let err = BoundarySource::load(&path, &PropertyNames::new("NAME_1")).unwrap_err();

    assert!(matches!(err, LoadError::DuplicateRegion { .. }));
}

/// Sessions sharing a cache share one parsed boundary.
#[test]
fn cache_is_shared_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_boundary(&dir, "states.geojson", &squares("NAME_1", &["A", "B"]));
    let cache = Arc::new(BoundaryCache::new());
    let names = PropertyNames::new("NAME_1");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let cache = Arc::clone(&cache);
            let path = path.clone();
            let names = names.clone();
            std::thread::spawn(move || cache.get_or_load(&path, &names).unwrap())
        })
        .collect();
    let sources: Vec<Arc<BoundarySource>> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert!(sources.windows(2).all(|pair| Arc::ptr_eq(&pair[0], &pair[1])));
    assert_eq!(cache.len(), 1);
}

#[test]
fn partial_table_is_accepted_with_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_boundary(&dir, "states.geojson", &squares("NAME_1", &["Kerala", "Goa"]));
    let source = BoundarySource::load(&path, &PropertyNames::new("NAME_1")).unwrap();
    let resolver = RegionLinkResolver::table(
        [("Kerala", "https://x.test/kl")],
        Some("https://x.test/".to_string()),
    );

    let report = validation::validate(&source, &resolver).unwrap();

    assert!(report.mapped.contains("Kerala"));
    assert!(report.unmapped.contains("Goa"));
    assert!(report.has_fallback);
}
