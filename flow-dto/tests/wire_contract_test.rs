//! Wire contract integration tests
//!
//! Checks the JSON shapes exchanged with the control plane:
//! - Property descriptors round-trip with allowable values in order
//! - Absent optional members are omitted rather than emptied
//! - Allowable values compare by value only
//! - The configuration envelope always carries a revision

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use flow_dto::{
    codec, AccessPolicyDto, AllowableValueDto, ControllerConfigurationDto,
    ControllerConfigurationEntity, PropertyDescriptorDto, RevisionDto, WireFormat,
};
use serde_json::json;

fn hash_of(value: &AllowableValueDto) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn populated_descriptor() -> PropertyDescriptorDto {
    PropertyDescriptorDto::new("mode", "Mode")
        .with_description("Selects the operating mode")
        .with_default_value("A")
        .with_allowable_values(vec![
            AllowableValueDto::new("A", "Alpha"),
            AllowableValueDto::new("B", "Beta").with_description("Second choice"),
        ])
        .with_required(true)
        .with_sensitive(true)
        .with_dynamic(true)
        .with_expression_language(true)
        .with_controller_service("org.example.cache.DistributedCacheClient")
}

// =============================================================================
// AllowableValue identity
// =============================================================================

#[test]
fn test_equal_values_are_equal_and_hash_alike() {
    let pairs = [
        ("x", "X", None, "Y", Some("desc")),
        ("", "Empty", None, "Still empty", None),
        ("  spaced ", "a", Some("one"), "b", Some("two")),
    ];

    for (value, name_a, desc_a, name_b, desc_b) in pairs {
        let mut a = AllowableValueDto::new(value, name_a);
        a.description = desc_a.map(str::to_string);
        let mut b = AllowableValueDto::new(value, name_b);
        b.description = desc_b.map(str::to_string);

        assert_eq!(a, b, "value {value:?}");
        assert_eq!(hash_of(&a), hash_of(&b), "value {value:?}");
    }
}

#[test]
fn test_differing_values_are_not_equal() {
    let a = AllowableValueDto::new("x", "Label");
    for other in ["y", "X", "x ", ""] {
        assert_ne!(a, AllowableValueDto::new(other, "Label"), "value {other:?}");
    }
}

#[test]
fn test_scenario_display_name_and_description_ignored() {
    let first: AllowableValueDto =
        serde_json::from_value(json!({ "value": "x", "displayName": "X", "description": null })).unwrap();
    let second: AllowableValueDto =
        serde_json::from_value(json!({ "value": "x", "displayName": "Y", "description": "desc" })).unwrap();

    assert!(first.description.is_none());
    assert_eq!(first, second);
}

// =============================================================================
// PropertyDescriptor wire form
// =============================================================================

#[test]
fn test_descriptor_round_trip_preserves_order() {
    let descriptor = populated_descriptor();

    let encoded = codec::encode(&descriptor, WireFormat::Json, false).unwrap();
    let decoded: PropertyDescriptorDto = codec::decode(&encoded, WireFormat::Json).unwrap();

    // Descriptor equality sees allowable values by value only; compare the wire form too
    assert_eq!(decoded, descriptor);
    assert_eq!(serde_json::to_value(&decoded).unwrap(), serde_json::to_value(&descriptor).unwrap());

    let order: Vec<(&str, &str, Option<&str>)> = decoded
        .allowable_values()
        .iter()
        .map(|av| (av.value.as_str(), av.display_name.as_str(), av.description.as_deref()))
        .collect();
    assert_eq!(order, [("A", "Alpha", None), ("B", "Beta", Some("Second choice"))]);
}

#[test]
fn test_descriptor_equality_ignores_allowable_labels() {
    let descriptor = populated_descriptor();
    let mut relabeled = populated_descriptor();
    if let Some(values) = relabeled.allowable_values.as_mut() {
        values[0].display_name = "Renamed".to_string();
        values[1].description = None;
    }

    assert_eq!(relabeled, descriptor);
    assert_ne!(serde_json::to_value(&relabeled).unwrap(), serde_json::to_value(&descriptor).unwrap());
}

#[test]
fn test_descriptor_json_shape() {
    let json = serde_json::to_value(populated_descriptor()).unwrap();

    assert_eq!(
        json,
        json!({
            "name": "mode",
            "displayName": "Mode",
            "description": "Selects the operating mode",
            "defaultValue": "A",
            "allowableValues": [
                { "displayName": "Alpha", "value": "A" },
                { "displayName": "Beta", "value": "B", "description": "Second choice" }
            ],
            "required": true,
            "sensitive": true,
            "dynamic": true,
            "supportsEl": true,
            "identifiesControllerService": "org.example.cache.DistributedCacheClient"
        })
    );
}

#[test]
fn test_absent_controller_service_is_omitted() {
    let mut descriptor = populated_descriptor();
    descriptor.identifies_controller_service = None;

    let json = serde_json::to_value(&descriptor).unwrap();
    assert!(json.get("identifiesControllerService").is_none());

    let decoded: PropertyDescriptorDto = serde_json::from_value(json).unwrap();
    assert!(!decoded.identifies_controller_service());
}

#[test]
fn test_null_members_decode_as_absent() {
    let decoded: PropertyDescriptorDto = serde_json::from_value(json!({
        "name": "p",
        "displayName": "P",
        "defaultValue": null,
        "allowableValues": null,
        "identifiesControllerService": null
    }))
    .unwrap();

    assert!(decoded.default_value.is_none());
    assert!(!decoded.is_constrained());
    assert!(decoded.identifies_controller_service.is_none());
    assert!(!decoded.required);
    assert!(!decoded.supports_expression_language);
}

#[test]
fn test_allowable_value_without_value_is_rejected() {
    let result: Result<PropertyDescriptorDto, _> = serde_json::from_value(json!({
        "name": "p",
        "displayName": "P",
        "allowableValues": [{ "displayName": "Missing" }]
    }));

    assert!(result.is_err());
}

// =============================================================================
// Controller configuration envelope
// =============================================================================

#[test]
fn test_unset_revision_reads_as_fresh_default() {
    let entity = ControllerConfigurationEntity::new(ControllerConfigurationDto::named("primary"));

    let first = entity.revision().into_owned();
    let second = entity.revision().into_owned();

    assert_eq!(first, RevisionDto::default());
    assert_eq!(first, second);
    assert!(entity.stored_revision().is_none());
}

#[test]
fn test_entity_round_trip() {
    let entity = ControllerConfigurationEntity::new(
        ControllerConfigurationDto::named("primary").with_thread_counts(10, 5),
    )
    .with_revision(RevisionDto::new(4).with_client_id("ui-1"))
    .with_access_policy(AccessPolicyDto::read_write());

    let encoded = codec::encode(&entity, WireFormat::Json, true).unwrap();
    let decoded: ControllerConfigurationEntity = codec::decode(&encoded, WireFormat::Json).unwrap();

    assert_eq!(decoded, entity);
    assert_eq!(decoded.revision().version, Some(4));
}

#[test]
fn test_entity_json_shape() {
    let json = json!({
        "currentTime": "2024-03-01T12:30:00Z",
        "controllerConfiguration": { "name": "primary", "maxTimerDrivenThreadCount": 10 },
        "accessPolicy": { "canRead": true, "canWrite": false }
    });

    let entity: ControllerConfigurationEntity = serde_json::from_value(json).unwrap();
    assert!(entity.stored_revision().is_none());
    assert_eq!(entity.access_policy, Some(AccessPolicyDto::read_only()));

    let reencoded = serde_json::to_value(&entity).unwrap();
    assert_eq!(reencoded["revision"], json!({}));
    assert_eq!(reencoded["controllerConfiguration"]["maxTimerDrivenThreadCount"], 10);
    assert_eq!(reencoded["currentTime"], "2024-03-01T12:30:00Z");
}

#[test]
fn test_unset_revision_comes_back_stored() {
    let entity = ControllerConfigurationEntity::new(ControllerConfigurationDto::named("primary"));
    assert!(entity.stored_revision().is_none());

    let encoded = codec::encode(&entity, WireFormat::Json, false).unwrap();
    let decoded: ControllerConfigurationEntity = codec::decode(&encoded, WireFormat::Json).unwrap();

    // The read-time default is written out, so the receiver sees an explicit empty revision
    assert_eq!(decoded.stored_revision(), Some(&RevisionDto::default()));
    assert_ne!(decoded, entity);
    assert_eq!(decoded.revision(), entity.revision());
}

#[test]
fn test_missing_display_names_decode_as_empty() {
    let decoded: PropertyDescriptorDto = serde_json::from_value(json!({
        "name": "p",
        "allowableValues": [{ "value": "x" }]
    }))
    .unwrap();

    assert_eq!(decoded.display_name, "");
    assert_eq!(decoded.allowable_values()[0].display_name, "");
    assert_eq!(decoded.allowable_values()[0].value, "x");
}
