use serde::{Deserialize, Serialize};

/// A creditor directory entry. The backend spells the field `abreviation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditorRecord {
    pub id: i64,
    pub name: String,
    pub abreviation: String,
}

/// Body of `POST /creditors/batch`.
#[derive(Debug, Clone, Serialize)]
pub struct BatchSearchRequest<'a> {
    pub items: &'a [String],
}

/// Body of `POST /creditors/report-miss`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchMissReport {
    pub abreviation: String,
    pub cordoba_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creditor_record_uses_backend_spelling() {
        let json = r#"{"id": 7, "name": "JPMorgan Chase Bank", "abreviation": "CHASE BANK"}"#;
        let record: CreditorRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.abreviation, "CHASE BANK");
    }

    #[test]
    fn test_batch_request_shape() {
        let items = vec!["CHASE".to_string(), "CITI".to_string()];
        let body = serde_json::to_value(BatchSearchRequest { items: &items }).unwrap();
        assert_eq!(body, serde_json::json!({"items": ["CHASE", "CITI"]}));
    }
}
