//! Property-based tests for allow-list reconciliation.

use proptest::prelude::*;
use serde_json::json;
use strapi_mesh_gateway::reconcile;
use strapi_mesh_types::{AllowList, ContentTypeDescriptor, SYSTEM_UID_PREFIX};

fn descriptor_strategy() -> impl Strategy<Value = ContentTypeDescriptor> {
    (
        prop_oneof![Just("api::"), Just("admin::"), Just("plugin::")],
        "[a-z]{1,8}",
    )
        .prop_map(|(prefix, name)| {
            ContentTypeDescriptor::from_catalog_item(&json!({
                "uid": format!("{prefix}{name}.{name}"),
                "schema": { "displayName": name, "pluralName": format!("{name}s") }
            }))
        })
}

fn selectable(catalog: Vec<ContentTypeDescriptor>) -> Vec<ContentTypeDescriptor> {
    catalog.into_iter().filter(|d| d.is_selectable()).collect()
}

proptest! {
    #[test]
    fn system_types_never_resolved(
        catalog in prop::collection::vec(descriptor_strategy(), 0..12),
        keys in prop::collection::vec("[a-z]{1,8}s?", 0..6),
    ) {
        let catalog = selectable(catalog);
        let allow_list = AllowList::Flat {
            allowed_content_types: keys,
            display_field: None,
            image_field: None,
        };

        for resolved in reconcile(&catalog, &allow_list) {
            prop_assert!(!resolved.uid.starts_with(SYSTEM_UID_PREFIX));
        }
    }

    #[test]
    fn empty_allow_list_is_identity(
        catalog in prop::collection::vec(descriptor_strategy(), 0..12),
    ) {
        let catalog = selectable(catalog);
        let resolved = reconcile(&catalog, &AllowList::default());

        let uids: Vec<&str> = resolved.iter().map(|c| c.uid.as_str()).collect();
        let expected: Vec<&str> = catalog.iter().map(|d| d.uid.as_str()).collect();
        prop_assert_eq!(uids, expected);
    }

    #[test]
    fn resolved_is_subset_without_duplicates(
        catalog in prop::collection::vec(descriptor_strategy(), 0..12),
        keys in prop::collection::vec("[a-z]{1,8}s?", 1..6),
    ) {
        let catalog = selectable(catalog);
        let allow_list = AllowList::Flat {
            allowed_content_types: keys.clone(),
            display_field: None,
            image_field: None,
        };

        let resolved = reconcile(&catalog, &allow_list);
        prop_assert!(resolved.len() <= keys.len());

        let mut positions: Vec<usize> = resolved
            .iter()
            .map(|c| catalog.iter().position(|d| d.uid == c.uid).unwrap())
            .collect();
        let count = positions.len();
        positions.sort_unstable();
        positions.dedup();
        prop_assert_eq!(positions.len(), count);
    }
}
