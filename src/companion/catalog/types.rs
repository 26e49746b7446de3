//! Catalog entity shapes.
//!
//! Deserialization is lenient: the upstream omits or nulls fields freely, so
//! a missing or `null` field takes its default.

use super::{resource_id_from_uri, ResourceKind};
use crate::error::{CompanionError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// `null` reads as the type's default, the same as a missing key.
fn null_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    #[serde(deserialize_with = "null_default")]
    pub path: String,
    #[serde(deserialize_with = "null_default")]
    pub extension: String,
}

impl Image {
    /// `{path}.{ext}`, or `{path}/{variant}.{ext}` for a sized variant.
    pub fn url(&self, variant: Option<&str>) -> String {
        match variant {
            Some(variant) => format!("{}/{}.{}", self.path, variant, self.extension),
            None => format!("{}.{}", self.path, self.extension),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Url {
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
}

impl Url {
    /// The link type with its first letter upper-cased.
    pub fn label(&self) -> String {
        let mut chars = self.kind.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResourceSummary {
    #[serde(rename = "resourceURI", deserialize_with = "null_default")]
    pub resource_uri: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl ResourceSummary {
    pub fn resource_id(&self) -> Option<String> {
        resource_id_from_uri(&self.resource_uri)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResourceList {
    #[serde(deserialize_with = "null_default")]
    pub available: u32,
    #[serde(deserialize_with = "null_default")]
    pub returned: u32,
    #[serde(rename = "collectionURI", deserialize_with = "null_default")]
    pub collection_uri: String,
    #[serde(deserialize_with = "null_default")]
    pub items: Vec<ResourceSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Character {
    #[serde(deserialize_with = "null_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    pub description: Option<String>,
    pub modified: Option<String>,
    pub thumbnail: Option<Image>,
    #[serde(rename = "resourceURI", deserialize_with = "null_default")]
    pub resource_uri: String,
    #[serde(deserialize_with = "null_default")]
    pub comics: ResourceList,
    #[serde(deserialize_with = "null_default")]
    pub series: ResourceList,
    #[serde(deserialize_with = "null_default")]
    pub stories: ResourceList,
    #[serde(deserialize_with = "null_default")]
    pub events: ResourceList,
    #[serde(deserialize_with = "null_default")]
    pub urls: Vec<Url>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Comic {
    #[serde(deserialize_with = "null_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(deserialize_with = "null_default")]
    pub issue_number: f64,
    pub description: Option<String>,
    pub format: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub page_count: u32,
    pub thumbnail: Option<Image>,
    #[serde(rename = "resourceURI", deserialize_with = "null_default")]
    pub resource_uri: String,
    #[serde(deserialize_with = "null_default")]
    pub urls: Vec<Url>,
    pub series: Option<ResourceSummary>,
    #[serde(deserialize_with = "null_default")]
    pub characters: ResourceList,
    #[serde(deserialize_with = "null_default")]
    pub creators: ResourceList,
    #[serde(deserialize_with = "null_default")]
    pub stories: ResourceList,
    #[serde(deserialize_with = "null_default")]
    pub events: ResourceList,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Series {
    #[serde(deserialize_with = "null_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    pub description: Option<String>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub rating: Option<String>,
    pub thumbnail: Option<Image>,
    #[serde(rename = "resourceURI", deserialize_with = "null_default")]
    pub resource_uri: String,
    #[serde(deserialize_with = "null_default")]
    pub urls: Vec<Url>,
    #[serde(deserialize_with = "null_default")]
    pub comics: ResourceList,
    #[serde(deserialize_with = "null_default")]
    pub stories: ResourceList,
    #[serde(deserialize_with = "null_default")]
    pub events: ResourceList,
    #[serde(deserialize_with = "null_default")]
    pub characters: ResourceList,
    #[serde(deserialize_with = "null_default")]
    pub creators: ResourceList,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Story {
    #[serde(deserialize_with = "null_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub thumbnail: Option<Image>,
    #[serde(rename = "resourceURI", deserialize_with = "null_default")]
    pub resource_uri: String,
    #[serde(deserialize_with = "null_default")]
    pub comics: ResourceList,
    #[serde(deserialize_with = "null_default")]
    pub series: ResourceList,
    #[serde(deserialize_with = "null_default")]
    pub events: ResourceList,
    #[serde(deserialize_with = "null_default")]
    pub characters: ResourceList,
    #[serde(deserialize_with = "null_default")]
    pub creators: ResourceList,
    pub original_issue: Option<ResourceSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Event {
    #[serde(deserialize_with = "null_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    pub description: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub thumbnail: Option<Image>,
    #[serde(rename = "resourceURI", deserialize_with = "null_default")]
    pub resource_uri: String,
    #[serde(deserialize_with = "null_default")]
    pub urls: Vec<Url>,
    #[serde(deserialize_with = "null_default")]
    pub comics: ResourceList,
    #[serde(deserialize_with = "null_default")]
    pub stories: ResourceList,
    #[serde(deserialize_with = "null_default")]
    pub series: ResourceList,
    #[serde(deserialize_with = "null_default")]
    pub characters: ResourceList,
    #[serde(deserialize_with = "null_default")]
    pub creators: ResourceList,
}

/// One fetched catalog entity, typed by kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RemoteEntity {
    Character(Character),
    Comic(Comic),
    Series(Series),
    Story(Story),
    Event(Event),
}

fn typed<T: DeserializeOwned>(kind: ResourceKind, value: Value) -> Result<T> {
    serde_json::from_value(value)
        .map_err(|e| CompanionError::UpstreamFailure(format!("malformed {}: {}", kind, e)))
}

impl RemoteEntity {
    pub fn from_value(kind: ResourceKind, value: Value) -> Result<Self> {
        Ok(match kind {
            ResourceKind::Character => RemoteEntity::Character(typed(kind, value)?),
            ResourceKind::Comic => RemoteEntity::Comic(typed(kind, value)?),
            ResourceKind::Series => RemoteEntity::Series(typed(kind, value)?),
            ResourceKind::Story => RemoteEntity::Story(typed(kind, value)?),
            ResourceKind::Event => RemoteEntity::Event(typed(kind, value)?),
        })
    }

    pub fn kind(&self) -> ResourceKind {
        match self {
            RemoteEntity::Character(_) => ResourceKind::Character,
            RemoteEntity::Comic(_) => ResourceKind::Comic,
            RemoteEntity::Series(_) => ResourceKind::Series,
            RemoteEntity::Story(_) => ResourceKind::Story,
            RemoteEntity::Event(_) => ResourceKind::Event,
        }
    }

    /// Characters have a name, everything else a title.
    pub fn title(&self) -> &str {
        match self {
            RemoteEntity::Character(c) => &c.name,
            RemoteEntity::Comic(c) => &c.title,
            RemoteEntity::Series(s) => &s.title,
            RemoteEntity::Story(s) => &s.title,
            RemoteEntity::Event(e) => &e.title,
        }
    }

    pub fn description(&self) -> Option<&str> {
        let description = match self {
            RemoteEntity::Character(c) => c.description.as_deref(),
            RemoteEntity::Comic(c) => c.description.as_deref(),
            RemoteEntity::Series(s) => s.description.as_deref(),
            RemoteEntity::Story(s) => s.description.as_deref(),
            RemoteEntity::Event(e) => e.description.as_deref(),
        };
        description.filter(|d| !d.trim().is_empty())
    }

    pub fn thumbnail(&self) -> Option<&Image> {
        match self {
            RemoteEntity::Character(c) => c.thumbnail.as_ref(),
            RemoteEntity::Comic(c) => c.thumbnail.as_ref(),
            RemoteEntity::Series(s) => s.thumbnail.as_ref(),
            RemoteEntity::Story(s) => s.thumbnail.as_ref(),
            RemoteEntity::Event(e) => e.thumbnail.as_ref(),
        }
    }

    /// Image URL; character portraits use the `detail` variant.
    pub fn image_url(&self) -> Option<String> {
        let variant = match self {
            RemoteEntity::Character(_) => Some("detail"),
            _ => None,
        };
        self.thumbnail()
            .filter(|image| !image.path.is_empty())
            .map(|image| image.url(variant))
    }

    pub fn urls(&self) -> &[Url] {
        match self {
            RemoteEntity::Character(c) => &c.urls,
            RemoteEntity::Comic(c) => &c.urls,
            RemoteEntity::Series(s) => &s.urls,
            RemoteEntity::Event(e) => &e.urls,
            RemoteEntity::Story(_) => &[],
        }
    }

    /// Related resources grouped by kind, in display order.
    pub fn related(&self) -> Vec<(ResourceKind, &ResourceList)> {
        match self {
            RemoteEntity::Character(c) => vec![
                (ResourceKind::Comic, &c.comics),
                (ResourceKind::Series, &c.series),
                (ResourceKind::Story, &c.stories),
                (ResourceKind::Event, &c.events),
            ],
            RemoteEntity::Comic(c) => vec![
                (ResourceKind::Character, &c.characters),
                (ResourceKind::Story, &c.stories),
                (ResourceKind::Event, &c.events),
            ],
            RemoteEntity::Series(s) => vec![
                (ResourceKind::Comic, &s.comics),
                (ResourceKind::Story, &s.stories),
                (ResourceKind::Event, &s.events),
                (ResourceKind::Character, &s.characters),
            ],
            RemoteEntity::Story(s) => vec![
                (ResourceKind::Comic, &s.comics),
                (ResourceKind::Series, &s.series),
                (ResourceKind::Event, &s.events),
                (ResourceKind::Character, &s.characters),
            ],
            RemoteEntity::Event(e) => vec![
                (ResourceKind::Comic, &e.comics),
                (ResourceKind::Story, &e.stories),
                (ResourceKind::Series, &e.series),
                (ResourceKind::Character, &e.characters),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn character_json() -> Value {
        json!({
            "id": 1009368,
            "name": "Iron Man",
            "description": "Wounded, captured and forced to build a weapon...",
            "modified": "2016-09-28T12:08:19-0400",
            "thumbnail": {
                "path": "http://i.annihil.us/u/prod/marvel/i/mg/9/c0/527bb7b37ff55",
                "extension": "jpg"
            },
            "resourceURI": "http://gateway.marvel.com/v1/public/characters/1009368",
            "comics": {
                "available": 2,
                "returned": 2,
                "collectionURI": "http://gateway.marvel.com/v1/public/characters/1009368/comics",
                "items": [
                    {"resourceURI": "http://gateway.marvel.com/v1/public/comics/43495", "name": "A+X (2012) #2"},
                    {"resourceURI": "http://gateway.marvel.com/v1/public/comics/43506", "name": "A+X (2012) #7"}
                ]
            },
            "stories": {
                "available": 1,
                "returned": 1,
                "items": [
                    {"resourceURI": "http://gateway.marvel.com/v1/public/stories/1026", "name": "Cover #1026", "type": "cover"}
                ]
            },
            "urls": [
                {"type": "detail", "url": "http://marvel.com/characters/29/iron_man"},
                {"type": "wiki", "url": "http://marvel.com/universe/Iron_Man_(Tony_Stark)"}
            ]
        })
    }

    #[test]
    fn parses_character_leniently() {
        let entity = RemoteEntity::from_value(ResourceKind::Character, character_json()).unwrap();
        let RemoteEntity::Character(character) = &entity else {
            panic!("expected a character");
        };
        assert_eq!(character.id, 1009368);
        assert_eq!(character.comics.items.len(), 2);
        assert!(character.series.items.is_empty());
        assert!(character.events.items.is_empty());
        assert_eq!(character.stories.items[0].kind.as_deref(), Some("cover"));
        assert_eq!(entity.title(), "Iron Man");
    }

    #[test]
    fn character_image_uses_detail_variant() {
        let entity = RemoteEntity::from_value(ResourceKind::Character, character_json()).unwrap();
        assert_eq!(
            entity.image_url().as_deref(),
            Some("http://i.annihil.us/u/prod/marvel/i/mg/9/c0/527bb7b37ff55/detail.jpg")
        );
    }

    #[test]
    fn event_without_thumbnail_has_no_image() {
        let entity = RemoteEntity::from_value(
            ResourceKind::Event,
            json!({"id": 116, "title": "Acts of Vengeance!", "thumbnail": null, "description": null}),
        )
        .unwrap();
        assert_eq!(entity.image_url(), None);
        assert_eq!(entity.description(), None);
        assert_eq!(entity.kind(), ResourceKind::Event);
    }

    #[test]
    fn comic_image_has_no_variant() {
        let entity = RemoteEntity::from_value(
            ResourceKind::Comic,
            json!({"id": 43495, "title": "A+X (2012) #2", "thumbnail": {"path": "http://x/img", "extension": "png"}}),
        )
        .unwrap();
        assert_eq!(entity.image_url().as_deref(), Some("http://x/img.png"));
    }

    #[test]
    fn null_fields_read_as_defaults() {
        let entity = RemoteEntity::from_value(
            ResourceKind::Comic,
            json!({
                "id": 1,
                "title": null,
                "pageCount": null,
                "issueNumber": null,
                "characters": null,
                "stories": {"available": null, "items": null},
                "urls": [{"type": null, "url": "http://marvel.com/comics/1"}]
            }),
        )
        .unwrap();
        let RemoteEntity::Comic(comic) = &entity else {
            panic!("expected a comic");
        };
        assert_eq!(comic.title, "");
        assert_eq!(comic.page_count, 0);
        assert!(comic.characters.items.is_empty());
        assert!(comic.stories.items.is_empty());
        assert_eq!(comic.urls[0].label(), "");

        let entity =
            RemoteEntity::from_value(ResourceKind::Character, json!({"name": "Hulk", "comics": null}))
                .unwrap();
        assert_eq!(entity.title(), "Hulk");
        assert!(entity.related().iter().all(|(_, list)| list.items.is_empty()));
    }

    #[test]
    fn wrong_shape_is_upstream_failure() {
        let err = RemoteEntity::from_value(ResourceKind::Comic, json!({"id": "not a number"}))
            .unwrap_err();
        assert!(matches!(err, CompanionError::UpstreamFailure(_)));
    }

    #[test]
    fn related_items_expose_resource_ids() {
        let entity = RemoteEntity::from_value(ResourceKind::Character, character_json()).unwrap();
        let related = entity.related();
        let (kind, comics) = related[0];
        assert_eq!(kind, ResourceKind::Comic);
        let ids: Vec<String> = comics.items.iter().filter_map(|i| i.resource_id()).collect();
        assert_eq!(ids, vec!["43495", "43506"]);
    }

    #[test]
    fn url_label_capitalizes_type() {
        let url = Url {
            kind: "comiclink".into(),
            url: "http://x".into(),
        };
        assert_eq!(url.label(), "Comiclink");
        assert_eq!(Url::default().label(), "");
    }
}
