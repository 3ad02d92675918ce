//! JSON wire codec for announcements.
//!
//! Producers call [`encode`] to emit an announcement; the registry calls
//! [`decode`] at its transport boundary before validating. The wire shape
//! is an object with string fields `environment`, `pool`, `location`
//! (nullable) and a `serviceAnnouncements` array of
//! `{ id, type, properties }` objects. Field order is not significant and
//! `decode(encode(x)) == x` for every valid `x`.

use crate::domain::DynamicAnnouncement;
use crate::error::ParseError;

/// Parses announcement JSON into a [`DynamicAnnouncement`].
///
/// Missing optional fields decode as absent rather than failing: no
/// `location` yields `None`, no `properties` on an entry yields an empty
/// mapping. Structural validity is all that is checked here — a decoded
/// envelope may still fail [`validate`](DynamicAnnouncement::validate).
///
/// # Errors
///
/// Returns [`ParseError`] when `text` is not well-formed JSON or a shape
/// mismatches the expected structure (including a malformed `id` token).
pub fn decode(text: &str) -> Result<DynamicAnnouncement, ParseError> {
    match serde_json::from_str::<DynamicAnnouncement>(text) {
        Ok(announcement) => {
            tracing::debug!(
                environment = announcement.environment(),
                pool = announcement.pool(),
                entries = announcement.service_announcements().map(|entries| entries.len()),
                "decoded announcement"
            );
            Ok(announcement)
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to decode announcement");
            Err(ParseError::from(err))
        }
    }
}

/// Serializes a [`DynamicAnnouncement`] to its canonical JSON wire form.
///
/// Identifiers are rendered in their dashed-hex textual form; absent
/// optional fields serialize as `null`.
///
/// # Errors
///
/// Returns [`ParseError`] if the serializer fails; this cannot happen for
/// any constructible announcement.
pub fn encode(announcement: &DynamicAnnouncement) -> Result<String, ParseError> {
    Ok(serde_json::to_string(announcement)?)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::collections::{BTreeMap, HashSet};

    use super::*;
    use crate::domain::{ServiceAnnouncement, ServiceId};

    const ANNOUNCEMENT_JSON: &str = r#"
        {
            "environment": "testing",
            "pool": "poolA",
            "location": "/a/b/c",
            "serviceAnnouncements": [
                {
                    "id": "1c001650-7841-11e0-a1f0-0800200c9a66",
                    "type": "red",
                    "properties": { "key": "redValue" }
                },
                {
                    "id": "2a817750-7841-11e0-a1f0-0800200c9a66",
                    "type": "blue",
                    "properties": { "key": "blueValue" }
                }
            ]
        }
    "#;

    fn fixture_id(text: &str) -> ServiceId {
        let Ok(id) = ServiceId::parse(text) else {
            panic!("fixture id must parse: {text}");
        };
        id
    }

    fn decoded(text: &str) -> DynamicAnnouncement {
        let Ok(announcement) = decode(text) else {
            panic!("fixture must decode");
        };
        announcement
    }

    #[test]
    fn parses_canonical_document() {
        let red = ServiceAnnouncement::new(
            Some(fixture_id("1c001650-7841-11e0-a1f0-0800200c9a66")),
            Some("red".to_owned()),
            BTreeMap::from([("key".to_owned(), "redValue".to_owned())]),
        );
        let blue = ServiceAnnouncement::new(
            Some(fixture_id("2a817750-7841-11e0-a1f0-0800200c9a66")),
            Some("blue".to_owned()),
            BTreeMap::from([("key".to_owned(), "blueValue".to_owned())]),
        );
        let expected = DynamicAnnouncement::new(
            Some("testing".to_owned()),
            Some("poolA".to_owned()),
            Some("/a/b/c".to_owned()),
            Some(HashSet::from([red, blue])),
        );

        assert_eq!(decoded(ANNOUNCEMENT_JSON), expected);
    }

    #[test]
    fn entry_array_order_is_not_significant() {
        let reordered = r#"
            {
                "environment": "testing",
                "pool": "poolA",
                "location": "/a/b/c",
                "serviceAnnouncements": [
                    {
                        "id": "2a817750-7841-11e0-a1f0-0800200c9a66",
                        "type": "blue",
                        "properties": { "key": "blueValue" }
                    },
                    {
                        "id": "1c001650-7841-11e0-a1f0-0800200c9a66",
                        "type": "red",
                        "properties": { "key": "redValue" }
                    }
                ]
            }
        "#;
        assert_eq!(decoded(reordered), decoded(ANNOUNCEMENT_JSON));
    }

    #[test]
    fn round_trips_valid_announcement() {
        let announcement = decoded(ANNOUNCEMENT_JSON);
        let Ok(text) = encode(&announcement) else {
            panic!("encode must succeed");
        };
        assert_eq!(decoded(&text), announcement);
    }

    #[test]
    fn round_trips_null_location_and_empty_entries() {
        let announcement = DynamicAnnouncement::new(
            Some("testing".to_owned()),
            Some("poolA".to_owned()),
            None,
            Some(HashSet::new()),
        );
        let Ok(text) = encode(&announcement) else {
            panic!("encode must succeed");
        };
        assert_eq!(decoded(&text), announcement);
    }

    #[test]
    fn missing_location_decodes_as_absent() {
        let announcement = decoded(
            r#"{"environment": "testing", "pool": "poolA", "serviceAnnouncements": []}"#,
        );
        assert_eq!(announcement.location(), None);
        assert!(announcement.validate().is_empty());
    }

    #[test]
    fn missing_required_fields_decode_then_fail_validation() {
        // Structural decode succeeds; the constraint failure belongs to
        // the validation pass, not the codec.
        let announcement = decoded("{}");
        assert_eq!(announcement.validate().len(), 3);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(decode("{not json").is_err());
    }

    #[test]
    fn rejects_shape_mismatch() {
        // serviceAnnouncements must be an array of objects.
        assert!(decode(
            r#"{"environment": "testing", "pool": "poolA", "serviceAnnouncements": "nope"}"#
        )
        .is_err());
        // id must be a well-formed dashed-hex token.
        assert!(decode(
            r#"{"environment": "testing", "pool": "poolA",
                "serviceAnnouncements": [{"id": "xyz", "type": "red", "properties": {}}]}"#
        )
        .is_err());
    }

    #[test]
    fn encodes_id_in_canonical_form() {
        let id_text = "1c001650-7841-11e0-a1f0-0800200c9a66";
        let announcement = DynamicAnnouncement::new(
            Some("testing".to_owned()),
            Some("poolA".to_owned()),
            None,
            Some(HashSet::from([ServiceAnnouncement::new(
                Some(fixture_id(id_text)),
                Some("red".to_owned()),
                BTreeMap::new(),
            )])),
        );
        let Ok(text) = encode(&announcement) else {
            panic!("encode must succeed");
        };
        assert!(text.contains(id_text));
    }
}
