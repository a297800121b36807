use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Stable identifier for a character: the catalog URL of the record.
/// No two records in one result set share a URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(String);

impl CharacterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One character record as returned by the catalog.
///
/// Fields are passed through without validation. A missing or `null` field
/// decodes to the empty string, a non-string value to its JSON text, and
/// anything the catalog returns beyond the four known fields is kept in
/// `extra` so it can be re-emitted verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub birth_year: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub gender: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

impl Character {
    pub fn new(
        name: impl Into<String>,
        birth_year: impl Into<String>,
        gender: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            birth_year: birth_year.into(),
            gender: gender.into(),
            url: url.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// The selection key for this record.
    pub fn id(&self) -> CharacterId {
        CharacterId::new(self.url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_known_fields_and_keeps_the_rest() {
        let json = r#"{
            "name": "Luke Skywalker",
            "height": "172",
            "birth_year": "19BBY",
            "gender": "male",
            "films": ["https://swapi.dev/api/films/1/"],
            "url": "https://swapi.dev/api/people/1/"
        }"#;

        let character: Character = serde_json::from_str(json).unwrap();
        assert_eq!(character.name, "Luke Skywalker");
        assert_eq!(character.birth_year, "19BBY");
        assert_eq!(character.gender, "male");
        assert_eq!(character.id().as_str(), "https://swapi.dev/api/people/1/");
        assert_eq!(character.extra["height"], "172");
        assert!(character.extra["films"].is_array());
    }

    #[test]
    fn missing_fields_decode_as_empty() {
        let character: Character = serde_json::from_str(r#"{"name": "R2-D2"}"#).unwrap();
        assert_eq!(character.name, "R2-D2");
        assert!(character.birth_year.is_empty());
        assert!(character.gender.is_empty());
        assert!(character.url.is_empty());
    }

    #[test]
    fn null_fields_decode_as_empty() {
        let json = r#"{"name": "IG-88", "birth_year": null, "gender": null, "url": "u/23"}"#;
        let character: Character = serde_json::from_str(json).unwrap();
        assert_eq!(character.name, "IG-88");
        assert!(character.birth_year.is_empty());
        assert!(character.gender.is_empty());
        assert_eq!(character.url, "u/23");
    }

    #[test]
    fn non_string_fields_decode_as_json_text() {
        let json = r#"{"name": "IG-88", "birth_year": 15, "gender": false, "url": "u/23"}"#;
        let character: Character = serde_json::from_str(json).unwrap();
        assert_eq!(character.birth_year, "15");
        assert_eq!(character.gender, "false");
        assert_eq!(character.id().as_str(), "u/23");
    }

    #[test]
    fn serializes_extra_fields_inline() {
        let mut character = Character::new("Yoda", "896BBY", "male", "u/20");
        character
            .extra
            .insert("height".into(), serde_json::Value::String("66".into()));

        let value = serde_json::to_value(&character).unwrap();
        assert_eq!(value["name"], "Yoda");
        assert_eq!(value["height"], "66");
        assert!(value.get("extra").is_none());
    }
}
