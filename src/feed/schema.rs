//! Wire format of the generative search API
//!
//! The request asks the model for the account's latest posts as a JSON array
//! constrained by a response schema, with search grounding enabled. The
//! response is validated here as a whole: one bad record rejects the batch.

use super::{sort_newest_first, FeedAccount, FeedBatch, FeedError, GroundingSource, Platform, SocialPost};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashSet;

/// Fields every post record must carry
pub const REQUIRED_FIELDS: [&str; 9] = [
    "id",
    "platform",
    "user",
    "link",
    "image",
    "caption",
    "likes",
    "comments",
    "timestamp",
];

pub fn build_prompt(account: &FeedAccount, count: u32) -> String {
    format!(
        "I need the actual latest activity for the wellness brand Rejuvana Living. \
         Search Google for the latest {count} posts and community updates from: {url}. \
         Return a JSON array of posts based on your findings.\n\n\
         Requirements:\n\
         1. Use real themes found (morning sunlight, longevity protocols, cellular health, etc.)\n\
         2. \"timestamp\" must be ISO 8601 within the last few days.\n\
         3. \"image\" must be high-quality Unsplash URLs that reflect the aesthetic of the searched posts.\n\
         4. \"likes\" should be realistic approximations (e.g. \"1.4k\").\n\
         5. \"caption\" MUST reflect the brand voice of Rejuvana Living found in the search results.\n\
         6. \"user\" must be \"{handle}\" and \"platform\" must be \"instagram\".\n\
         7. Return ONLY a valid JSON array.",
        count = count,
        url = account.profile_url,
        handle = account.handle,
    )
}

/// Structured-output schema for an array of post records
pub fn response_schema() -> Value {
    let mut properties = serde_json::Map::new();
    for field in REQUIRED_FIELDS {
        let kind = if field == "comments" { "INTEGER" } else { "STRING" };
        properties.insert(field.to_string(), json!({ "type": kind }));
    }

    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": properties,
            "required": REQUIRED_FIELDS,
        }
    })
}

// ============= Request =============

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub tools: Vec<Value>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: Value,
}

impl GenerateContentRequest {
    pub fn for_feed(account: &FeedAccount, count: u32) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(build_prompt(account, count)),
                }],
            }],
            tools: vec![json!({ "google_search": {} })],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: response_schema(),
            },
        }
    }
}

// ============= Response =============

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroundingChunk {
    #[serde(default)]
    pub web: Option<WebChunk>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebChunk {
    pub uri: String,
    #[serde(default)]
    pub title: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    pub fn sources(&self) -> Vec<GroundingSource> {
        self.candidates
            .first()
            .and_then(|c| c.grounding_metadata.as_ref())
            .map(|meta| {
                meta.grounding_chunks
                    .iter()
                    .filter_map(|chunk| chunk.web.as_ref())
                    .map(|web| GroundingSource {
                        uri: web.uri.clone(),
                        title: web.title.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Validate the answer into a batch ready to install
    pub fn into_batch(self) -> Result<FeedBatch, FeedError> {
        let text = self
            .text()
            .ok_or_else(|| FeedError::Malformed("response has no text content".to_string()))?;
        let posts = parse_posts(&text)?;
        Ok(FeedBatch {
            posts,
            sources: self.sources(),
        })
    }
}

// ============= Post records =============

#[derive(Debug, Deserialize)]
struct WirePost {
    id: String,
    platform: String,
    user: String,
    link: String,
    image: String,
    caption: String,
    likes: String,
    comments: u32,
    timestamp: String,
}

impl WirePost {
    fn validate(self, index: usize) -> Result<SocialPost, FeedError> {
        let schema_err = |reason: String| FeedError::Schema { index, reason };

        if self.id.trim().is_empty() {
            return Err(schema_err("empty id".to_string()));
        }
        if !self.platform.eq_ignore_ascii_case("instagram") {
            return Err(schema_err(format!("unsupported platform '{}'", self.platform)));
        }
        let timestamp = parse_timestamp(&self.timestamp)
            .map_err(|e| schema_err(format!("bad timestamp '{}': {}", self.timestamp, e)))?;

        Ok(SocialPost {
            id: self.id,
            platform: Platform::Instagram,
            author_handle: self.user,
            permalink: self.link,
            image_url: self.image,
            caption: self.caption,
            like_count_display: self.likes,
            comment_count: self.comments,
            timestamp,
        })
    }
}

/// ISO-8601 timestamp. Offset-less forms are read as UTC.
fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    if let Some(midnight) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(midnight.and_utc());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|naive| naive.and_utc())
}

/// Strip a surrounding markdown code fence, if any
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json"), which may share a line with the body
    let body = match rest.split_once('\n') {
        Some((_, body)) => body,
        None => rest.find(['[', '{']).map_or("", |start| &rest[start..]),
    };
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

/// Parse and validate model output into posts, newest first.
///
/// Rejects the whole batch on the first invalid record.
pub fn parse_posts(text: &str) -> Result<Vec<SocialPost>, FeedError> {
    let value: Value = serde_json::from_str(strip_code_fence(text))
        .map_err(|e| FeedError::Malformed(e.to_string()))?;

    let Value::Array(records) = value else {
        return Err(FeedError::Malformed("expected a JSON array".to_string()));
    };
    if records.is_empty() {
        return Err(FeedError::Empty);
    }

    let mut seen = HashSet::new();
    let mut posts = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let wire: WirePost = serde_json::from_value(record).map_err(|e| FeedError::Schema {
            index,
            reason: e.to_string(),
        })?;
        let post = wire.validate(index)?;
        if !seen.insert(post.id.clone()) {
            return Err(FeedError::Schema {
                index,
                reason: format!("duplicate id '{}'", post.id),
            });
        }
        posts.push(post);
    }

    sort_newest_first(&mut posts);
    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};
    use rstest::rstest;

    fn record(id: &str, timestamp: &str) -> Value {
        json!({
            "id": id,
            "platform": "instagram",
            "user": "rejuvanaliving",
            "link": "https://www.instagram.com/p/abc/",
            "image": "https://images.unsplash.com/photo-1",
            "caption": "Morning light",
            "likes": "1.4k",
            "comments": 12,
            "timestamp": timestamp,
        })
    }

    #[test]
    fn test_parse_sorts_newest_first_with_stable_ties() {
        let text = json!([
            record("a", "2025-03-10T08:00:00Z"),
            record("b", "2025-03-12T08:00:00Z"),
            record("c", "2025-03-10T08:00:00Z"),
            record("d", "2025-03-11T08:00:00+02:00"),
        ])
        .to_string();

        let posts = parse_posts(&text).unwrap();
        let ids: Vec<_> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_parse_tolerates_code_fence() {
        let text = format!(
            "```json\n{}\n```",
            json!([record("a", "2025-03-10T08:00:00Z")])
        );
        assert_eq!(parse_posts(&text).unwrap().len(), 1);
    }

    #[test]
    fn test_parse_tolerates_single_line_fence() {
        let text = format!("```json {}```", json!([record("a", "2025-03-10T08:00:00Z")]));
        assert_eq!(parse_posts(&text).unwrap().len(), 1);

        let text = format!("```{}```", json!([record("a", "2025-03-10T08:00:00Z")]));
        assert_eq!(parse_posts(&text).unwrap().len(), 1);
    }

    #[rstest]
    #[case("2025-03-10T08:00:00Z", 8, 0)]
    #[case("2025-03-10T08:00:00.123Z", 8, 0)]
    #[case("2025-03-10T10:00:00+02:00", 8, 0)]
    #[case("2025-03-10T08:00:00", 8, 0)]
    #[case("2025-03-10T08:30:00.5", 8, 30)]
    #[case("2025-03-10", 0, 0)]
    fn test_accepts_iso_8601_timestamps(#[case] raw: &str, #[case] hour: u32, #[case] minute: u32) {
        let posts = parse_posts(&json!([record("a", raw)]).to_string()).unwrap();
        let expected = Utc.with_ymd_and_hms(2025, 3, 10, hour, minute, 0).unwrap();
        assert_eq!(posts[0].timestamp.with_nanosecond(0), Some(expected));
    }

    #[test]
    fn test_missing_field_rejects_batch() {
        let mut bad = record("b", "2025-03-10T08:00:00Z");
        bad.as_object_mut().unwrap().remove("likes");
        let text = json!([record("a", "2025-03-10T08:00:00Z"), bad]).to_string();

        match parse_posts(&text) {
            Err(FeedError::Schema { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_other_platform_bad_timestamp_and_duplicates() {
        let mut tiktok = record("a", "2025-03-10T08:00:00Z");
        tiktok["platform"] = json!("tiktok");
        assert!(parse_posts(&json!([tiktok]).to_string()).is_err());

        let text = json!([record("a", "yesterday")]).to_string();
        assert!(matches!(parse_posts(&text), Err(FeedError::Schema { .. })));

        let text = json!([
            record("a", "2025-03-10T08:00:00Z"),
            record("a", "2025-03-11T08:00:00Z"),
        ])
        .to_string();
        assert!(parse_posts(&text).is_err());
    }

    #[test]
    fn test_non_array_and_empty() {
        assert!(matches!(
            parse_posts("{\"posts\": []}"),
            Err(FeedError::Malformed(_))
        ));
        assert!(matches!(parse_posts("not json"), Err(FeedError::Malformed(_))));
        assert!(matches!(parse_posts("[]"), Err(FeedError::Empty)));
    }

    #[test]
    fn test_request_shape() {
        let request = GenerateContentRequest::for_feed(&FeedAccount::default(), 12);
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["contents"][0]["role"], "user");
        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("latest 12 posts"));
        assert!(prompt.contains("https://www.instagram.com/rejuvanaliving/"));
        assert!(body["tools"][0].get("google_search").is_some());
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(
            body["generationConfig"]["responseSchema"]["items"]["required"]
                .as_array()
                .unwrap()
                .len(),
            9
        );
        assert_eq!(
            body["generationConfig"]["responseSchema"]["items"]["properties"]["comments"]["type"],
            "INTEGER"
        );
    }

    #[test]
    fn test_response_into_batch_collects_sources() {
        let raw = json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "text": json!([record("a", "2025-03-10T08:00:00Z")]).to_string() }]
                },
                "groundingMetadata": {
                    "groundingChunks": [
                        { "web": { "uri": "https://www.instagram.com/rejuvanaliving/", "title": "instagram.com" } },
                        { "retrievedContext": {} }
                    ]
                }
            }]
        });
        let response: GenerateContentResponse = serde_json::from_value(raw).unwrap();
        let batch = response.into_batch().unwrap();

        assert_eq!(batch.posts.len(), 1);
        assert_eq!(batch.sources.len(), 1);
        assert_eq!(batch.sources[0].title.as_deref(), Some("instagram.com"));
    }

    #[test]
    fn test_response_without_text_is_malformed() {
        let response: GenerateContentResponse =
            serde_json::from_value(json!({ "candidates": [] })).unwrap();
        assert!(matches!(response.into_batch(), Err(FeedError::Malformed(_))));
    }
}
