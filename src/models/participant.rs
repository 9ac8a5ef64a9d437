use serde::{Deserialize, Serialize};

/// A registered chat member.
///
/// Mirrors the stored document shape: `lastStatus` is milliseconds since
/// epoch, set at registration and refreshed by every status update.
/// Participants are never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    #[serde(rename = "lastStatus")]
    pub last_status: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn serializes_with_stored_field_names() {
        let participant = Participant {
            name: "Ana".to_string(),
            last_status: 1700000000000,
        };

        assert_eq!(
            serde_json::to_value(&participant).unwrap(),
            json!({ "name": "Ana", "lastStatus": 1700000000000i64 })
        );
    }

    #[test]
    fn stored_documents_with_extra_fields_still_deserialize() {
        // Documents read back from the store carry an _id we never model.
        let participant: Participant = serde_json::from_value(json!({
            "_id": "65f0c0ffee",
            "name": "Ana",
            "lastStatus": 1700000000000i64,
        }))
        .unwrap();

        assert_eq!(participant.name, "Ana");
        assert_eq!(participant.last_status, 1700000000000);
    }
}
