//! Frame Serializer
//!
//! Encodes one frame (timestamp plus left/right hand models) into a single
//! delimited text record. The hand payloads are JSON with every field
//! delimiter substituted by an escape character, so one logical record can
//! never be misread as multiple fields by a downstream comma-based splitter.

use crate::model::Hand;
use crate::Result;

/// Separates the three fields of a record: timestamp, left hand, right hand.
pub const FIELD_DELIMITER: char = ',';

/// Substituted for every `FIELD_DELIMITER` occurring inside a hand payload.
pub const ESCAPE_CHAR: char = '|';

/// Header row written once at the top of every session file.
pub const HEADER: &str = "timestep|leftHandData|rightHandData";

/// Serialize one frame into a record (without trailing newline).
///
/// Deterministic: identical input always produces identical bytes. Hand
/// payloads are serde-encoded structs (fixed field order, no maps, no
/// embedded timestamps or ids); an absent hand encodes as the `null` marker.
pub fn serialize_frame(timestamp: i64, left: Option<&Hand>, right: Option<&Hand>) -> Result<String> {
    Ok(format!(
        "{timestamp}{FIELD_DELIMITER}{}{FIELD_DELIMITER}{}",
        encode_hand(left)?,
        encode_hand(right)?
    ))
}

fn encode_hand(hand: Option<&Hand>) -> Result<String> {
    let json = match hand {
        Some(h) => serde_json::to_string(h)?,
        None => "null".to_string(),
    };
    Ok(json.replace(FIELD_DELIMITER, &ESCAPE_CHAR.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{build_hand, LandmarkSample, LANDMARK_COUNT};

    fn test_hand() -> Hand {
        let samples: Vec<LandmarkSample> = (0..LANDMARK_COUNT)
            .map(|i| {
                let t = i as f64;
                LandmarkSample::new(t * 0.01, t * 0.02, t * 0.005, 0.9)
            })
            .collect();
        build_hand(Some(&samples)).unwrap().unwrap()
    }

    #[test]
    fn test_absent_hands_encode_as_null_markers() {
        let record = serialize_frame(42, None, None).unwrap();
        assert_eq!(record, "42,null,null");
    }

    #[test]
    fn test_record_has_exactly_three_fields() {
        let hand = test_hand();
        let record = serialize_frame(1000, Some(&hand), Some(&hand)).unwrap();
        let fields: Vec<&str> = record.split(FIELD_DELIMITER).collect();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0], "1000");
    }

    #[test]
    fn test_payload_contains_no_field_delimiter() {
        let hand = test_hand();
        let encoded = encode_hand(Some(&hand)).unwrap();
        assert!(!encoded.contains(FIELD_DELIMITER));
        assert!(encoded.contains(ESCAPE_CHAR));
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let hand = test_hand();
        let first = serialize_frame(7, Some(&hand), None).unwrap();
        let second = serialize_frame(7, Some(&hand), None).unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_left_and_right_are_independent() {
        let hand = test_hand();
        let record = serialize_frame(5, None, Some(&hand)).unwrap();
        let fields: Vec<&str> = record.split(FIELD_DELIMITER).collect();
        assert_eq!(fields[1], "null");
        assert!(fields[2].starts_with('{'));
    }

    #[test]
    fn test_payload_is_structure_preserving() {
        let hand = test_hand();
        let record = serialize_frame(5, Some(&hand), None).unwrap();
        let fields: Vec<&str> = record.split(FIELD_DELIMITER).collect();
        // Undoing the escape recovers the original JSON document.
        let json = fields[1].replace(ESCAPE_CHAR, &FIELD_DELIMITER.to_string());
        let back: Hand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hand);
    }
}
