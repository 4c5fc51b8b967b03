use serde_json::{json, Value};

/// Version stamp applied to every resource before projection.
pub const META_VERSION_ID: &str = "1";

/// Fixed `lastUpdated` stamp carried by the static metadata block.
pub const META_LAST_UPDATED: &str = "2024-01-01T00:00:00Z";

/// Attach the static `meta` block to a resource.
///
/// The input is left untouched; the returned copy carries
/// `meta.versionId` and `meta.lastUpdated`, replacing any `meta`
/// already present.
pub fn enrich_resource(resource: &Value) -> Value {
    let mut enriched = resource.clone();
    if let Some(obj) = enriched.as_object_mut() {
        obj.insert(
            "meta".to_string(),
            json!({
                "versionId": META_VERSION_ID,
                "lastUpdated": META_LAST_UPDATED,
            }),
        );
    }
    enriched
}
