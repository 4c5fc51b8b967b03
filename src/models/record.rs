use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Flat projection of a Patient resource, one row per patient.
///
/// `patient_id`, `gender` and `birth_date` are verbatim copies of the
/// source fields and stay `None` when the source omits them. `name`
/// and `address` are composed strings and fall back to `""`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRecord {
    pub patient_id: Option<String>,
    pub name: String,
    pub gender: Option<String>,
    pub birth_date: Option<String>,
    pub address: String,
    pub processed_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serialization() {
        let record = PatientRecord {
            patient_id: Some("pat1".to_string()),
            name: "John Smith".to_string(),
            gender: Some("male".to_string()),
            birth_date: Some("1974-12-25".to_string()),
            address: "123 Main St, Anytown, CA, 12345".to_string(),
            processed_date: Utc::now(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["patient_id"], "pat1");
        assert_eq!(json["name"], "John Smith");
        assert_eq!(json["gender"], "male");
        assert_eq!(json["birth_date"], "1974-12-25");
        assert_eq!(json["address"], "123 Main St, Anytown, CA, 12345");
        assert!(json["processed_date"].is_string());
    }

    #[test]
    fn test_absent_fields_serialize_as_null() {
        let record = PatientRecord {
            patient_id: None,
            name: String::new(),
            gender: None,
            birth_date: None,
            address: String::new(),
            processed_date: Utc::now(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert!(json["patient_id"].is_null());
        assert!(json["gender"].is_null());
        assert!(json["birth_date"].is_null());
        assert_eq!(json["name"], "");
        assert_eq!(json["address"], "");
    }
}
