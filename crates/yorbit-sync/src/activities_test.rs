use serde_json::json;

use super::*;

fn video_payload() -> Value {
    json!({
        "contentDetails": { "videoId": "v1" },
        "snippet": {
            "title": "My upload",
            "description": "A longer description of the upload",
            "publishedAt": "2024-03-01T12:00:00Z",
            "channelTitle": "My Channel",
            "channelId": "UCmine"
        }
    })
}

#[test]
fn video_id_prefers_content_details() {
    let video = json!({
        "contentDetails": { "videoId": "from-details" },
        "snippet": { "resourceId": { "videoId": "from-snippet" } }
    });
    assert_eq!(video_id(&video), Some("from-details"));
}

#[test]
fn video_id_falls_back_to_resource_id() {
    let video = json!({
        "snippet": { "resourceId": { "videoId": "from-snippet" } }
    });
    assert_eq!(video_id(&video), Some("from-snippet"));
}

#[test]
fn shapes_video_into_upload_activity() {
    let activities = prepare_video_activities(&[video_payload()]);
    assert_eq!(activities.len(), 1);

    let a = &activities[0];
    assert_eq!(a.activity_type, "youtube:video");
    assert_eq!(a.key, "youtube-video-v1");
    assert_eq!(a.title, "Uploaded a video: My upload");
    assert_eq!(
        a.description.as_deref(),
        Some("A longer description of the upload")
    );
    assert_eq!(a.link.as_deref(), Some("https://www.youtube.com/watch?v=v1"));
    assert_eq!(
        a.occurred_at,
        Some("2024-03-01T12:00:00Z".parse().unwrap())
    );
    assert_eq!(a.member.name.as_deref(), Some("My Channel"));
    assert_eq!(a.member.youtube.as_deref(), Some("UCmine"));
}

#[test]
fn video_without_id_is_skipped() {
    let activities = prepare_video_activities(&[json!({ "snippet": { "title": "orphan" } })]);
    assert!(activities.is_empty());
}

#[test]
fn long_descriptions_are_truncated() {
    let mut video = video_payload();
    video["snippet"]["description"] = json!("x".repeat(1000));
    let activities = prepare_video_activities(&[video]);
    assert_eq!(activities[0].description.as_ref().unwrap().chars().count(), 256);
}

#[test]
fn shapes_top_level_thread_via_its_inner_comment() {
    let thread = json!({
        "id": "t1",
        "snippet": {
            "totalReplyCount": 0,
            "topLevelComment": {
                "id": "c1",
                "snippet": {
                    "textOriginal": "great video",
                    "authorDisplayName": "viewer",
                    "authorChannelId": { "value": "UCviewer" },
                    "videoId": "v1",
                    "publishedAt": "2024-03-02T08:30:00Z"
                }
            }
        }
    });

    let activities = prepare_comment_activities(&[thread]);
    assert_eq!(activities.len(), 1);

    let a = &activities[0];
    assert_eq!(a.activity_type, "youtube:comment");
    assert_eq!(a.key, "youtube-comment-c1");
    assert_eq!(a.description.as_deref(), Some("great video"));
    assert_eq!(
        a.link.as_deref(),
        Some("https://www.youtube.com/watch?v=v1&lc=c1")
    );
    assert_eq!(a.member.name.as_deref(), Some("viewer"));
    assert_eq!(a.member.youtube.as_deref(), Some("UCviewer"));
}

#[test]
fn shapes_bare_reply_comment_directly() {
    let reply = json!({
        "id": "c1.r1",
        "snippet": {
            "textOriginal": "thanks!",
            "authorDisplayName": "author",
            "videoId": "v1",
            "publishedAt": "2024-03-02T09:00:00Z"
        }
    });

    let activities = prepare_comment_activities(&[reply]);
    assert_eq!(activities.len(), 1);

    let a = &activities[0];
    assert_eq!(a.key, "youtube-comment-c1.r1");
    assert_eq!(a.description.as_deref(), Some("thanks!"));
    // No authorChannelId: falls back to the display name for identity.
    assert_eq!(a.member.youtube.as_deref(), Some("author"));
}

#[test]
fn comment_without_id_is_skipped() {
    let activities =
        prepare_comment_activities(&[json!({ "snippet": { "textOriginal": "orphan" } })]);
    assert!(activities.is_empty());
}

#[test]
fn text_display_is_used_when_text_original_is_absent() {
    let reply = json!({
        "id": "c2",
        "snippet": { "textDisplay": "<b>formatted</b>" }
    });
    let activities = prepare_comment_activities(&[reply]);
    assert_eq!(activities[0].description.as_deref(), Some("<b>formatted</b>"));
}
