//! Wire shapes of the Kraken search API.
//!
//! Decoding is lenient per field: a missing, `null` or non-scalar value
//! becomes an empty string so one odd entry never fails a whole search.

use livescope_core::StreamRecord;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
pub struct SearchStreamsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub channels: Vec<ChannelEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ChannelEntry {
    #[serde(deserialize_with = "lenient_string")]
    pub status: String,
    #[serde(deserialize_with = "lenient_string")]
    pub game: String,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    /// Sent as a number by the API, kept as text.
    #[serde(deserialize_with = "lenient_string")]
    pub viewers: String,
    #[serde(deserialize_with = "lenient_string")]
    pub url: String,
    #[serde(deserialize_with = "lenient_string")]
    pub logo: String,
    pub preview: Value,
}

impl ChannelEntry {
    pub fn thumbnail(&self) -> String {
        self.preview
            .get("small")
            .map(scalar_to_string)
            .unwrap_or_default()
    }
}

impl From<ChannelEntry> for StreamRecord {
    fn from(entry: ChannelEntry) -> Self {
        let thumbnail_url = entry.thumbnail();
        StreamRecord {
            title: entry.status,
            game: entry.game,
            channel_name: entry.name,
            viewer_count: entry.viewers,
            url: entry.url,
            logo_url: entry.logo,
            thumbnail_url,
        }
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_to_string(&Value::deserialize(deserializer)?))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_maps_to_record() {
        let entry: ChannelEntry = serde_json::from_value(json!({
            "status": "Any% WR attempts",
            "game": "Celeste",
            "name": "speedy",
            "viewers": 1234,
            "url": "https://www.twitch.tv/speedy",
            "logo": "https://static.example/speedy.png",
            "preview": { "small": "https://static.example/speedy-80x45.jpg" }
        }))
        .unwrap();

        assert_eq!(
            StreamRecord::from(entry),
            StreamRecord {
                title: "Any% WR attempts".into(),
                game: "Celeste".into(),
                channel_name: "speedy".into(),
                viewer_count: "1234".into(),
                url: "https://www.twitch.tv/speedy".into(),
                logo_url: "https://static.example/speedy.png".into(),
                thumbnail_url: "https://static.example/speedy-80x45.jpg".into(),
            }
        );
    }

    #[test]
    fn test_odd_fields_become_empty() {
        let entry: ChannelEntry = serde_json::from_value(json!({
            "status": null,
            "game": { "nested": true },
            "name": "quiet",
            "preview": "not an object"
        }))
        .unwrap();
        let record = StreamRecord::from(entry);

        assert_eq!(record.title, "");
        assert_eq!(record.game, "");
        assert_eq!(record.channel_name, "quiet");
        assert_eq!(record.viewer_count, "");
        assert_eq!(record.logo_url, "");
        assert_eq!(record.thumbnail_url, "");
    }

    #[test]
    fn test_null_channels_is_empty() {
        let response: SearchStreamsResponse =
            serde_json::from_value(json!({ "channels": null, "_total": 0 })).unwrap();
        assert!(response.channels.is_empty());

        let response: SearchStreamsResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.channels.is_empty());
    }
}
