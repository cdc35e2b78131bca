//! Serde support (feature-gated)
//!
//! [`NonEmptyList<T>`] serializes as a plain sequence. Deserializing an empty
//! sequence fails, so the non-empty guarantee survives a round trip through any
//! format. [`Validated`](crate::Validated) derives its impls and uses serde's
//! externally tagged representation:
//!
//! ```rust,ignore
//! use accrue::Validated;
//!
//! let v = Validated::<u8, String>::failed("too small".into());
//! assert_eq!(serde_json::to_string(&v).unwrap(), r#"{"Invalid":["too small"]}"#);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::NonEmptyList;

impl<T> Serialize for NonEmptyList<T>
where
    T: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T> Deserialize<'de> for NonEmptyList<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        NonEmptyList::try_from(items).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use crate::{NonEmptyList, Validated};

    #[test]
    fn test_serialize_nonempty_as_sequence() {
        let nel = NonEmptyList::new(1, vec![2, 3]);
        assert_eq!(serde_json::to_string(&nel).unwrap(), "[1,2,3]");
    }

    #[test]
    fn test_deserialize_nonempty() {
        let nel: NonEmptyList<String> = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(nel, NonEmptyList::new("a".to_string(), vec!["b".to_string()]));
    }

    #[test]
    fn test_deserialize_empty_sequence_fails() {
        let result: Result<NonEmptyList<i32>, _> = serde_json::from_str("[]");
        let err = result.unwrap_err();
        assert!(err
            .to_string()
            .contains("cannot build a NonEmptyList from an empty collection"));
    }

    #[test]
    fn test_validated_representation() {
        let valid = Validated::<u8, String>::pure(3);
        assert_eq!(serde_json::to_string(&valid).unwrap(), r#"{"Valid":3}"#);

        let invalid = Validated::<u8, String>::invalid(NonEmptyList::new(
            "a".to_string(),
            vec!["b".to_string()],
        ));
        let json = serde_json::to_string(&invalid).unwrap();
        assert_eq!(json, r#"{"Invalid":["a","b"]}"#);

        let back: Validated<u8, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, invalid);
    }

    #[test]
    fn test_invalid_with_no_failures_is_rejected() {
        let result: Result<Validated<u8, String>, _> = serde_json::from_str(r#"{"Invalid":[]}"#);
        assert!(result.is_err());
    }
}
