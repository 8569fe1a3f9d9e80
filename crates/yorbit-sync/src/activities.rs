//! Shapes raw YouTube payloads into Orbit activities.
//!
//! Payloads arrive as opaque JSON from the list endpoints; only the fields
//! needed for the activity record are read here, via JSON pointers. Items
//! missing their identifying ID are skipped with a warning rather than
//! failing the batch.

use chrono::{DateTime, Utc};
use serde_json::Value;

use yorbit_orbit::{MemberIdentity, NewActivity};

/// Cap on activity descriptions; Orbit truncates long bodies server-side
/// anyway and comment walls of text add no tracking value.
const MAX_DESCRIPTION_CHARS: usize = 256;

/// The video ID of a `playlistItems` resource.
///
/// Prefers `contentDetails.videoId` and falls back to
/// `snippet.resourceId.videoId` for responses fetched without the
/// `contentDetails` part.
#[must_use]
pub fn video_id(video: &Value) -> Option<&str> {
    video
        .pointer("/contentDetails/videoId")
        .or_else(|| video.pointer("/snippet/resourceId/videoId"))
        .and_then(Value::as_str)
}

/// Shapes a batch of `playlistItems` resources into upload activities.
/// Items with no resolvable video ID are skipped with a warning.
#[must_use]
pub fn prepare_video_activities(videos: &[Value]) -> Vec<NewActivity> {
    videos.iter().filter_map(video_activity).collect()
}

/// Shapes a flattened comment sequence (threads interleaved with their
/// replies) into comment activities. Items with no resolvable comment ID
/// are skipped with a warning.
#[must_use]
pub fn prepare_comment_activities(comments: &[Value]) -> Vec<NewActivity> {
    comments.iter().filter_map(comment_activity).collect()
}

fn video_activity(video: &Value) -> Option<NewActivity> {
    let Some(id) = video_id(video) else {
        tracing::warn!("skipping video payload with no video id");
        return None;
    };

    let title = video
        .pointer("/snippet/title")
        .and_then(Value::as_str)
        .unwrap_or("(untitled video)");

    Some(NewActivity {
        activity_type: "youtube:video".to_owned(),
        key: format!("youtube-video-{id}"),
        title: format!("Uploaded a video: {title}"),
        description: str_at(video, "/snippet/description").map(truncate),
        link: Some(watch_url(id)),
        link_text: Some("Watch on YouTube".to_owned()),
        occurred_at: timestamp_at(video, "/snippet/publishedAt"),
        member: MemberIdentity {
            name: str_at(video, "/snippet/channelTitle").map(str::to_owned),
            youtube: str_at(video, "/snippet/channelId").map(str::to_owned),
        },
    })
}

fn comment_activity(item: &Value) -> Option<NewActivity> {
    // A flattened sequence mixes commentThread resources with bare comment
    // resources (replies); a thread carries the real comment under
    // snippet.topLevelComment.
    let comment = item.pointer("/snippet/topLevelComment").unwrap_or(item);

    let Some(id) = comment.get("id").and_then(Value::as_str) else {
        tracing::warn!("skipping comment payload with no comment id");
        return None;
    };

    let author = str_at(comment, "/snippet/authorDisplayName");
    let text = str_at(comment, "/snippet/textOriginal")
        .or_else(|| str_at(comment, "/snippet/textDisplay"));
    let link = str_at(comment, "/snippet/videoId").map(|v| format!("{}&lc={id}", watch_url(v)));

    Some(NewActivity {
        activity_type: "youtube:comment".to_owned(),
        key: format!("youtube-comment-{id}"),
        title: "Commented on a YouTube video".to_owned(),
        description: text.map(truncate),
        link,
        link_text: Some("View comment".to_owned()),
        occurred_at: timestamp_at(comment, "/snippet/publishedAt"),
        member: MemberIdentity {
            name: author.map(str::to_owned),
            youtube: str_at(comment, "/snippet/authorChannelId/value")
                .or(author)
                .map(str::to_owned),
        },
    })
}

fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}

fn str_at<'a>(value: &'a Value, pointer: &str) -> Option<&'a str> {
    value.pointer(pointer).and_then(Value::as_str)
}

fn timestamp_at(value: &Value, pointer: &str) -> Option<DateTime<Utc>> {
    str_at(value, pointer)
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

/// Truncates on a character boundary.
fn truncate(text: &str) -> String {
    text.chars().take(MAX_DESCRIPTION_CHARS).collect()
}

#[cfg(test)]
#[path = "activities_test.rs"]
mod tests;
