//! JSON payloads shaped like the service's responses, for tests

use serde_json::{json, Value};

pub(crate) fn page_info(has_next: bool, end_cursor: Option<&str>) -> Value {
    json!({ "has_next_page": has_next, "end_cursor": end_cursor })
}

pub(crate) fn user_node(id: u64, username: &str) -> Value {
    json!({
        "id": id.to_string(),
        "username": username,
        "full_name": format!("{username} full"),
        "profile_pic_url": format!("https://cdn.example/{username}.jpg"),
        "is_verified": false
    })
}

pub(crate) fn media_node(id: &str, shortcode: &str) -> Value {
    json!({
        "id": id,
        "shortcode": shortcode,
        "display_url": format!("https://cdn.example/{shortcode}.jpg"),
        "is_video": false,
        "taken_at_timestamp": 1_500_000_000,
        "edge_media_to_caption": {
            "edges": [{ "node": { "text": format!("caption {shortcode}") } }]
        },
        "edge_liked_by": { "count": 10 },
        "edge_media_to_comment": { "count": 2 },
        "owner": { "id": "3" }
    })
}

pub(crate) fn comment_node(id: &str, text: &str, owner: &str) -> Value {
    json!({
        "id": id,
        "text": text,
        "created_at": 1_500_000_100,
        "owner": {
            "id": "77",
            "username": owner,
            "profile_pic_url": "https://cdn.example/c.jpg"
        }
    })
}

fn connection(count: u64, nodes: Vec<Value>, has_next: bool, end_cursor: Option<&str>) -> Value {
    let edges: Vec<Value> = nodes.into_iter().map(|n| json!({ "node": n })).collect();
    json!({
        "count": count,
        "page_info": page_info(has_next, end_cursor),
        "edges": edges
    })
}

pub(crate) fn account_page(
    username: &str,
    medias: Vec<Value>,
    has_next: bool,
    end_cursor: Option<&str>,
) -> Value {
    let mut user = user_node(3, username);
    user["biography"] = json!("bio");
    user["external_url"] = json!("https://example.com");
    user["is_private"] = json!(false);
    user["is_verified"] = json!(true);
    user["edge_followed_by"] = json!({ "count": 1000 });
    user["edge_follow"] = json!({ "count": 50 });
    user["edge_owner_to_timeline_media"] = connection(120, medias, has_next, end_cursor);
    json!({ "graphql": { "user": user } })
}

pub(crate) fn media_page(id: &str, shortcode: &str, owner: &str) -> Value {
    let mut media = media_node(id, shortcode);
    media["owner"] = user_node(3, owner);
    media["edge_media_preview_like"] = json!({ "count": 42 });
    json!({ "graphql": { "shortcode_media": media } })
}

pub(crate) fn tag_page(
    name: &str,
    medias: Vec<Value>,
    has_next: bool,
    end_cursor: Option<&str>,
) -> Value {
    json!({
        "graphql": {
            "hashtag": {
                "name": name,
                "edge_hashtag_to_media": connection(5000, medias, has_next, end_cursor)
            }
        }
    })
}

pub(crate) fn location_page(
    id: &str,
    medias: Vec<Value>,
    has_next: bool,
    end_cursor: Option<&str>,
) -> Value {
    json!({
        "graphql": {
            "location": {
                "id": id,
                "name": "Somewhere",
                "edge_location_to_media": connection(300, medias, has_next, end_cursor)
            }
        }
    })
}

pub(crate) fn followers_page(
    users: Vec<Value>,
    has_next: bool,
    end_cursor: Option<&str>,
) -> Value {
    let connection = connection(900, users, has_next, end_cursor);
    json!({ "data": { "user": { "edge_followed_by": connection } } })
}

pub(crate) fn follows_page(
    users: Vec<Value>,
    has_next: bool,
    end_cursor: Option<&str>,
) -> Value {
    let connection = connection(40, users, has_next, end_cursor);
    json!({ "data": { "user": { "edge_follow": connection } } })
}

pub(crate) fn comments_page(
    comments: Vec<Value>,
    has_next: bool,
    end_cursor: Option<&str>,
) -> Value {
    json!({
        "data": {
            "shortcode_media": {
                "edge_media_to_comment": connection(12, comments, has_next, end_cursor)
            }
        }
    })
}

pub(crate) fn last_media_page(shortcodes: &[&str]) -> Value {
    let edges: Vec<Value> = shortcodes
        .iter()
        .map(|code| json!({ "node": { "shortcode": code } }))
        .collect();
    json!({
        "data": { "user": { "edge_owner_to_timeline_media": {
            "count": shortcodes.len(),
            "edges": edges
        } } }
    })
}

pub(crate) fn comment_response(id: &str, text: &str) -> Value {
    json!({
        "id": id,
        "text": text,
        "created_time": 1_500_000_200,
        "from": {
            "id": 3,
            "username": "me",
            "full_name": "Me",
            "profile_picture": "https://cdn.example/me.jpg"
        },
        "status": "ok"
    })
}
