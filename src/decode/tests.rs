//! Tests for the response mapper module

use super::fixtures::*;
use super::*;
use crate::error::Error;
use crate::pagination::Cursor;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn bytes(value: &Value) -> Vec<u8> {
    value.to_string().into_bytes()
}

// ============================================================================
// Single-shot Tests
// ============================================================================

#[test]
fn test_map_account() {
    let body = bytes(&account_page("instagram", vec![], false, None));
    let account = JsonMapper::new().map_account(&body).unwrap();

    assert_eq!(account.id, 3);
    assert_eq!(account.username, "instagram");
    assert_eq!(account.full_name.as_deref(), Some("instagram full"));
    assert_eq!(account.biography.as_deref(), Some("bio"));
    assert!(account.is_verified);
    assert!(!account.is_private);
    assert_eq!(account.followed_by_count, 1000);
    assert_eq!(account.follows_count, 50);
    assert_eq!(account.media_count, 120);
}

#[test]
fn test_map_account_missing_optional_fields() {
    let body = bytes(&json!({ "graphql": { "user": { "id": 5 } } }));
    let account = JsonMapper::new().map_account(&body).unwrap();

    assert_eq!(account.id, 5);
    assert_eq!(account.username, "");
    assert!(account.full_name.is_none());
    assert_eq!(account.followed_by_count, 0);
    assert_eq!(account.media_count, 0);
}

#[test]
fn test_map_account_missing_envelope() {
    let body = bytes(&json!({ "user": { "id": 5 } }));
    let err = JsonMapper::new().map_account(&body).unwrap_err();
    assert!(matches!(err, Error::Mapping { .. }));
}

#[test]
fn test_map_media() {
    let body = bytes(&media_page("1266695965066271720", "BGUNUTcMhvo", "owner"));
    let media = JsonMapper::new().map_media(&body).unwrap();

    assert_eq!(media.id, "1266695965066271720");
    assert_eq!(media.shortcode, "BGUNUTcMhvo");
    assert_eq!(media.caption.as_deref(), Some("caption BGUNUTcMhvo"));
    assert_eq!(media.like_count, 42);
    assert_eq!(media.comment_count, 2);
    assert_eq!(
        media.taken_at,
        Some(Utc.timestamp_opt(1_500_000_000, 0).unwrap())
    );
    let owner = media.owner.unwrap();
    assert_eq!(owner.id, 3);
    assert_eq!(owner.username, "owner");
}

#[test]
fn test_map_media_numeric_id_and_no_caption() {
    let body = bytes(&json!({
        "graphql": { "shortcode_media": { "id": 99, "shortcode": "x", "is_video": true } }
    }));
    let media = JsonMapper::new().map_media(&body).unwrap();

    assert_eq!(media.id, "99");
    assert!(media.is_video);
    assert!(media.caption.is_none());
    assert!(media.owner.is_none());
    assert!(media.taken_at.is_none());
    assert_eq!(media.like_count, 0);
}

#[test]
fn test_map_tag() {
    let body = bytes(&tag_page(
        "rust",
        vec![media_node("1", "a"), media_node("2", "b")],
        true,
        Some("J0HW"),
    ));
    let tag = JsonMapper::new().map_tag(&body).unwrap();

    assert_eq!(tag.name, "rust");
    assert_eq!(tag.medias.len(), 2);
    assert_eq!(tag.medias.count, Some(5000));
    assert_eq!(tag.medias.cursor, Cursor::new(true, "J0HW"));
}

#[test]
fn test_map_last_media_code() {
    let body = bytes(&last_media_page(&["newest", "older"]));
    let code = JsonMapper::new().map_last_media_code(&body).unwrap();
    assert_eq!(code.as_str(), "newest");
}

#[test]
fn test_map_last_media_code_no_media() {
    let body = bytes(&last_media_page(&[]));
    let err = JsonMapper::new().map_last_media_code(&body).unwrap_err();
    assert!(err.is_mapping());
    assert!(err.to_string().contains("no media"));
}

#[test]
fn test_map_comment_response() {
    let body = bytes(&comment_response("17900", "nice"));
    let response = JsonMapper::new().map_comment_response(&body).unwrap();

    assert!(response.is_ok());
    assert_eq!(response.payload.id, "17900");
    assert_eq!(response.payload.text, "nice");
    assert_eq!(response.payload.owner.id, 3);
    assert_eq!(response.payload.owner.username, "me");
    assert_eq!(
        response.payload.owner.profile_pic_url.as_deref(),
        Some("https://cdn.example/me.jpg")
    );
    assert!(response.payload.created_at.is_some());
}

// ============================================================================
// Page Tests
// ============================================================================

#[test]
fn test_map_medias_page() {
    let body = bytes(&account_page(
        "instagram",
        vec![media_node("1", "a"), media_node("2", "b")],
        true,
        Some("1"),
    ));
    let page = JsonMapper::new().map_medias_page(&body).unwrap();

    let codes: Vec<&str> = page.items.iter().map(|m| m.shortcode.as_str()).collect();
    assert_eq!(codes, vec!["a", "b"]);
    assert_eq!(page.cursor, Cursor::new(true, "1"));
    assert_eq!(page.count, Some(120));
    assert_eq!(page.items[0].owner.as_ref().unwrap().id, 3);
}

#[test]
fn test_map_followers_page() {
    let body = bytes(&followers_page(
        vec![user_node(10, "ann"), user_node(11, "bob")],
        true,
        Some("QVFB"),
    ));
    let page = JsonMapper::new().map_followers_page(&body).unwrap();

    let names: Vec<&str> = page.items.iter().map(|a| a.username.as_str()).collect();
    assert_eq!(names, vec!["ann", "bob"]);
    assert_eq!(page.items[0].id, 10);
    assert_eq!(page.cursor, Cursor::new(true, "QVFB"));
    assert_eq!(page.count, Some(900));
}

#[test]
fn test_map_follows_page_last() {
    let body = bytes(&follows_page(vec![user_node(12, "cat")], false, None));
    let page = JsonMapper::new().map_follows_page(&body).unwrap();

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.cursor, Cursor::end());
}

#[test]
fn test_map_followers_page_rejects_follows_shape() {
    let body = bytes(&follows_page(vec![], false, None));
    let err = JsonMapper::new().map_followers_page(&body).unwrap_err();
    assert!(matches!(err, Error::Mapping { .. }));
}

#[test]
fn test_map_comments_page() {
    let body = bytes(&comments_page(
        vec![comment_node("c1", "first", "ann"), comment_node("c2", "second", "bob")],
        true,
        Some("AQD"),
    ));
    let page = JsonMapper::new().map_comments_page(&body).unwrap();

    assert_eq!(page.items[0].text, "first");
    assert_eq!(page.items[1].owner.username, "bob");
    assert_eq!(page.cursor, Cursor::new(true, "AQD"));
}

#[test]
fn test_map_tag_and_location_pages() {
    let mapper = JsonMapper::new();

    let tag = bytes(&tag_page("rust", vec![media_node("1", "a")], false, None));
    let page = mapper.map_tag_medias_page(&tag).unwrap();
    assert_eq!(page.items.len(), 1);
    assert!(page.cursor.is_end());

    let location = bytes(&location_page("17326249", vec![], true, Some("123")));
    let page = mapper.map_location_medias_page(&location).unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.cursor, Cursor::new(true, "123"));
    assert_eq!(page.count, Some(300));
}

#[test]
fn test_map_page_missing_page_info() {
    let body = bytes(&json!({
        "data": { "user": { "edge_followed_by": { "count": 1, "edges": [] } } }
    }));
    let err = JsonMapper::new().map_followers_page(&body).unwrap_err();
    assert!(matches!(err, Error::Mapping { .. }));
    assert!(err.to_string().contains("followers page"));
}

#[test]
fn test_map_page_missing_edges() {
    let body = bytes(&json!({
        "data": { "shortcode_media": { "edge_media_to_comment": {
            "page_info": { "has_next_page": false, "end_cursor": null }
        } } }
    }));
    let err = JsonMapper::new().map_comments_page(&body).unwrap_err();
    assert!(err.is_mapping());
}

#[test]
fn test_map_page_null_cursor_is_empty_token() {
    let body = bytes(&json!({
        "data": { "user": { "edge_follow": {
            "page_info": { "has_next_page": true, "end_cursor": null },
            "edges": []
        } } }
    }));
    let page = JsonMapper::new().map_follows_page(&body).unwrap();
    assert_eq!(page.cursor, Cursor::new(true, ""));
    assert_eq!(page.count, None);
}

#[test]
fn test_map_invalid_json() {
    let err = JsonMapper::new().map_account(b"<html>login</html>").unwrap_err();
    assert!(matches!(err, Error::JsonParse(_)));
    assert!(err.is_mapping());

    let err = JsonMapper::new().map_followers_page(b"").unwrap_err();
    assert!(err.is_mapping());
}
