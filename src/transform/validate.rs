use serde_json::Value;

/// Required identifying fields, checked in declared order.
const REQUIRED_FIELDS: [&str; 2] = ["resourceType", "id"];

/// Check a resource for the required identifying fields.
///
/// Returns one violation message per missing field; an empty list
/// means the resource is valid. Absent fields are reported, never
/// treated as a failure of the check itself.
pub fn validate_resource(resource: &Value) -> Vec<String> {
    REQUIRED_FIELDS
        .iter()
        .filter(|field| resource.get(**field).is_none())
        .map(|field| format!("Missing required field: {}", field))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_resource_has_no_violations() {
        let resource = json!({
            "resourceType": "Patient",
            "id": "pat1",
            "gender": "male"
        });

        assert!(validate_resource(&resource).is_empty());
    }

    #[test]
    fn test_missing_id_is_reported() {
        let resource = json!({ "resourceType": "Patient" });

        let violations = validate_resource(&resource);
        assert_eq!(violations, vec!["Missing required field: id"]);
    }

    #[test]
    fn test_missing_resource_type_is_reported() {
        let resource = json!({ "id": "pat1" });

        let violations = validate_resource(&resource);
        assert_eq!(violations, vec!["Missing required field: resourceType"]);
    }

    #[test]
    fn test_empty_resource_reports_all_fields_in_order() {
        let violations = validate_resource(&json!({}));

        assert_eq!(
            violations,
            vec![
                "Missing required field: resourceType",
                "Missing required field: id"
            ]
        );
    }
}
