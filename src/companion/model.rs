use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A locally stored contact.
///
/// `id` and `created_at` are fixed at creation time. Everything else is
/// optional and changes through [`ContactFields`] merges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    pub id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub super_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marvel_id: Option<String>,
}

impl ContactRecord {
    pub fn new(id: String, fields: ContactFields) -> Self {
        let mut record = Self {
            id,
            created_at: Utc::now(),
            first: None,
            last: None,
            super_name: None,
            avatar: None,
            url: None,
            notes: None,
            favorite: None,
            marvel_id: None,
        };
        record.merge(fields);
        record
    }

    /// Shallow merge: only the provided fields overwrite.
    pub fn merge(&mut self, fields: ContactFields) {
        let ContactFields {
            first,
            last,
            super_name,
            avatar,
            url,
            notes,
            favorite,
            marvel_id,
        } = fields;

        if first.is_some() {
            self.first = first;
        }
        if last.is_some() {
            self.last = last;
        }
        if super_name.is_some() {
            self.super_name = super_name;
        }
        if avatar.is_some() {
            self.avatar = avatar;
        }
        if url.is_some() {
            self.url = url;
        }
        if notes.is_some() {
            self.notes = notes;
        }
        if favorite.is_some() {
            self.favorite = favorite;
        }
        if marvel_id.is_some() {
            self.marvel_id = marvel_id;
        }
    }

    pub fn is_favorite(&self) -> bool {
        self.favorite.unwrap_or(false)
    }

    /// The id used for the catalog's character lookup.
    pub fn character_id(&self) -> &str {
        self.marvel_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .unwrap_or(&self.id)
    }

    /// "First Last", skipping whichever half is missing.
    pub fn full_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first.as_deref(), self.last.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

/// A partial set of contact fields. `None` means "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub super_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marvel_id: Option<String>,
}

impl ContactFields {
    pub fn is_empty(&self) -> bool {
        self == &ContactFields::default()
    }

    pub fn favorite(value: bool) -> Self {
        Self {
            favorite: Some(value),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_only_overwrites_provided_fields() {
        let mut record = ContactRecord::new(
            "a".into(),
            ContactFields {
                first: Some("Tony".into()),
                last: Some("Stark".into()),
                ..ContactFields::default()
            },
        );
        let created_at = record.created_at;

        record.merge(ContactFields {
            last: Some("Stark Jr".into()),
            notes: Some("Genius".into()),
            ..ContactFields::default()
        });

        assert_eq!(record.id, "a");
        assert_eq!(record.created_at, created_at);
        assert_eq!(record.first.as_deref(), Some("Tony"));
        assert_eq!(record.last.as_deref(), Some("Stark Jr"));
        assert_eq!(record.notes.as_deref(), Some("Genius"));
    }

    #[test]
    fn character_id_prefers_marvel_id() {
        let mut record = ContactRecord::new("iron-man".into(), ContactFields::default());
        assert_eq!(record.character_id(), "iron-man");

        record.marvel_id = Some("1009368".into());
        assert_eq!(record.character_id(), "1009368");

        record.marvel_id = Some(String::new());
        assert_eq!(record.character_id(), "iron-man");
    }

    #[test]
    fn serializes_with_camel_case_keys_and_omits_absent_fields() {
        let record = ContactRecord::new(
            "spider-man".into(),
            ContactFields {
                super_name: Some("Spider-Man".into()),
                marvel_id: Some("1009610".into()),
                ..ContactFields::default()
            },
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["superName"], "Spider-Man");
        assert_eq!(json["marvelId"], "1009610");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("notes").is_none());
    }

    #[test]
    fn full_name_skips_missing_parts() {
        let mut record = ContactRecord::new("x".into(), ContactFields::default());
        assert_eq!(record.full_name(), None);
        record.last = Some("Parker".into());
        assert_eq!(record.full_name().as_deref(), Some("Parker"));
        record.first = Some("Peter".into());
        assert_eq!(record.full_name().as_deref(), Some("Peter Parker"));
    }
}
