//! Catalog integration tests
//!
//! These tests exercise the full store -> service -> filter lifecycle the way
//! the demo driver does: one shared store, multiple services bound to
//! different filters, queried side by side.

use std::sync::Arc;

use blueprints::core::error::BlueprintError;
use blueprints::filters::{filter_for, FilterKind};
use blueprints::model::{Blueprint, Point};
use blueprints::persistence::{BlueprintsPersistence, InMemoryBlueprintPersistence};
use blueprints::services::BlueprintsServices;

fn pts(coords: &[(i32, i32)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

/// Build one shared store with the demo catalog plus a service per filter
fn seeded_catalog() -> (
    Arc<dyn BlueprintsPersistence>,
    BlueprintsServices,
    BlueprintsServices,
) {
    let store: Arc<dyn BlueprintsPersistence> = Arc::new(InMemoryBlueprintPersistence::new());
    let svc_red = BlueprintsServices::new(Arc::clone(&store), filter_for(FilterKind::Redundancy));
    let svc_sub = BlueprintsServices::new(Arc::clone(&store), filter_for(FilterKind::Subsampling));

    let seed = [
        Blueprint::new("john", "house", pts(&[(0, 0), (10, 10)])),
        Blueprint::new("john", "car", pts(&[(5, 5), (15, 15)])),
        Blueprint::new("anna", "garden", pts(&[(3, 3), (7, 7)])),
        Blueprint::new(
            "john",
            "dups",
            pts(&[(0, 0), (0, 0), (5, 5), (5, 5), (10, 10)]),
        ),
        Blueprint::new(
            "mike",
            "long",
            pts(&[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4), (5, 5)]),
        ),
    ];
    for bp in seed {
        svc_red.add_new_blueprint(bp).unwrap();
    }

    (store, svc_red, svc_sub)
}

#[test]
fn test_redundancy_view_collapses_consecutive_duplicates() {
    let (_, svc_red, _) = seeded_catalog();

    let bp = svc_red.get_blueprint("john", "dups").unwrap();
    assert_eq!(bp.points(), &pts(&[(0, 0), (5, 5), (10, 10)])[..]);
}

#[test]
fn test_subsampling_view_keeps_even_indices() {
    let (_, _, svc_sub) = seeded_catalog();

    let bp = svc_sub.get_blueprint("mike", "long").unwrap();
    assert_eq!(bp.points(), &pts(&[(0, 0), (2, 2), (4, 4)])[..]);
}

#[test]
fn test_missing_lookup_fails_with_not_found() {
    let (_, svc_red, _) = seeded_catalog();

    match svc_red.get_blueprint("noone", "nothing") {
        Err(BlueprintError::BlueprintNotFound { author, name }) => {
            assert_eq!(author, "noone");
            assert_eq!(name, "nothing");
        }
        other => panic!("Expected BlueprintNotFound, got {:?}", other),
    }

    // same outcome on an empty store
    let empty = BlueprintsServices::new(
        Arc::new(InMemoryBlueprintPersistence::new()),
        filter_for(FilterKind::Redundancy),
    );
    assert!(matches!(
        empty.get_blueprint("noone", "nothing"),
        Err(BlueprintError::BlueprintNotFound { .. })
    ));
}

#[test]
fn test_shared_store_yields_filter_dependent_views() {
    let (store, svc_red, svc_sub) = seeded_catalog();

    let red = svc_red.get_blueprint("mike", "long").unwrap();
    let sub = svc_sub.get_blueprint("mike", "long").unwrap();

    // same stored blueprint, different point sequences per service
    assert_ne!(red.points(), sub.points());
    assert_eq!(red.point_count(), 6);
    assert_eq!(sub.point_count(), 3);

    // the store itself still holds the unfiltered sequence
    assert_eq!(store.get_blueprint("mike", "long").unwrap().point_count(), 6);
}

#[test]
fn test_registration_through_one_service_is_visible_to_the_other() {
    let (_, svc_red, svc_sub) = seeded_catalog();

    svc_red
        .add_new_blueprint(Blueprint::new("anna", "shed", pts(&[(1, 2), (3, 4)])))
        .unwrap();

    let seen = svc_sub.get_blueprint("anna", "shed").unwrap();
    assert_eq!(seen.author(), "anna");
    assert_eq!(seen.name(), "shed");
}

#[test]
fn test_catalog_listings_preserve_insertion_order() {
    let (_, svc_red, _) = seeded_catalog();

    let all = svc_red.get_all_blueprints().unwrap();
    let keys: Vec<String> = all.iter().map(|bp| bp.to_string()).collect();
    assert_eq!(
        keys,
        vec![
            "john:house",
            "john:car",
            "anna:garden",
            "john:dups",
            "mike:long"
        ]
    );

    let johns = svc_red.get_blueprints_by_author("john").unwrap();
    let names: Vec<&str> = johns.iter().map(|bp| bp.name()).collect();
    assert_eq!(names, vec!["house", "car", "dups"]);
}

#[test]
fn test_author_without_blueprints_yields_empty_listing() {
    let (_, svc_red, _) = seeded_catalog();
    assert!(svc_red.get_blueprints_by_author("ghost").unwrap().is_empty());
}

#[test]
fn test_duplicate_registration_is_rejected_across_services() {
    let (_, svc_red, svc_sub) = seeded_catalog();

    // key exists already, registering through the other service changes nothing
    let result = svc_sub.add_new_blueprint(Blueprint::new("john", "house", vec![]));
    assert!(matches!(
        result,
        Err(BlueprintError::DuplicateBlueprint { .. })
    ));

    // original entry untouched
    let bp = svc_red.get_blueprint("john", "house").unwrap();
    assert_eq!(bp.point_count(), 2);
}
