use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One field of a partial update payload.
///
/// `Absent` means the field was not sent and the stored value is kept. `Set` carries the
/// new value. For a nullable field use `Patch<Option<T>>`: `Set(None)` is an explicit
/// null and clears the stored value, which a bare `Option<T>` could not express.
///
/// Payload structs mark every `Patch` field `#[serde(default, skip_serializing_if =
/// "Patch::is_absent")]`, so a missing JSON key deserializes to `Absent` and a present key
/// (including `null`) deserializes to `Set`.
#[derive(Debug, Clone, PartialEq)]
pub enum Patch<T> {
    Absent,
    Set(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Absent
    }
}

impl<T> Patch<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }

    pub fn as_set(&self) -> Option<&T> {
        match self {
            Patch::Set(value) => Some(value),
            Patch::Absent => None,
        }
    }

    /// Overwrite `target` if the field was sent.
    pub fn apply_to(self, target: &mut T) {
        if let Patch::Set(value) = self {
            *target = value;
        }
    }
}

impl<T> From<T> for Patch<T> {
    fn from(value: T) -> Self {
        Patch::Set(value)
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Patch::Set)
    }
}

impl<T> Serialize for Patch<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Patch::Set(value) => value.serialize(serializer),
            Patch::Absent => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default)]
        note: Patch<Option<String>>,
        #[serde(default)]
        count: Patch<u32>,
    }

    #[test]
    fn missing_key_is_absent() {
        let probe: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(probe.note, Patch::Absent);
        assert_eq!(probe.count, Patch::Absent);
    }

    #[test]
    fn explicit_null_is_set_none() {
        let probe: Probe = serde_json::from_str(r#"{"note": null}"#).unwrap();
        assert_eq!(probe.note, Patch::Set(None));
        assert!(probe.count.is_absent());
    }

    #[test]
    fn null_for_required_field_is_rejected() {
        assert!(serde_json::from_str::<Probe>(r#"{"count": null}"#).is_err());
    }

    #[test]
    fn apply_to_only_overwrites_when_set() {
        let mut stored = 4;
        Patch::Absent.apply_to(&mut stored);
        assert_eq!(stored, 4);
        Patch::Set(9).apply_to(&mut stored);
        assert_eq!(stored, 9);
    }
}
