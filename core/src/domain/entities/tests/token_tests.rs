//! Unit tests for token entities

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::token::{
    Claims, TokenCookie, TokenKind, ACCESS_TOKEN_COOKIE_NAME, REFRESH_TOKEN_COOKIE_NAME,
};
use crate::errors::TokenError;

#[test]
fn test_claims_new() {
    let subject = Uuid::new_v4().to_string();
    let claims = Claims::new(subject.clone(), Duration::minutes(15)).unwrap();

    assert_eq!(claims.subject_id, subject);
    assert_eq!(claims.exp - claims.iat, 15 * 60);
    assert!(claims.exp > Utc::now().timestamp());
}

#[test]
fn test_claims_new_rejects_unrepresentable_expiry() {
    let result = Claims::new("user-1", Duration::days(365 * 1_000_000));

    assert_eq!(result, Err(TokenError::TokenGenerationFailed));
}

#[test]
fn test_claims_serialize_subject_id_key() {
    let claims = Claims::new("user-42", Duration::seconds(60)).unwrap();
    let json = serde_json::to_value(&claims).unwrap();

    assert_eq!(json["subjectId"], "user-42");
    assert!(json.get("subject_id").is_none());
    assert!(json.get("iat").is_some());
    assert!(json.get("exp").is_some());
}

#[test]
fn test_claims_accept_legacy_id_key() {
    let json = r#"{"_id":"64b7f0c2a1","iat":1700000000,"exp":1700000900}"#;
    let claims: Claims = serde_json::from_str(json).unwrap();

    assert_eq!(claims.subject_id, "64b7f0c2a1");
    assert_eq!(claims.iat, 1_700_000_000);
    assert_eq!(claims.exp, 1_700_000_900);
}

#[test]
fn test_claims_prefer_subject_id_over_legacy_key() {
    let json = r#"{"subjectId":"new-id","_id":"old-id","iat":1700000000,"exp":1700000900}"#;
    let claims: Claims = serde_json::from_str(json).unwrap();

    assert_eq!(claims.subject_id, "new-id");
}

#[test]
fn test_claims_require_a_subject() {
    let json = r#"{"iat":1700000000,"exp":1700000900}"#;
    let err = serde_json::from_str::<Claims>(json).unwrap_err();

    assert!(err.to_string().contains("subjectId"));
}

#[test]
fn test_token_kind_cookie_names() {
    assert_eq!(TokenKind::Access.cookie_name(), ACCESS_TOKEN_COOKIE_NAME);
    assert_eq!(TokenKind::Refresh.cookie_name(), REFRESH_TOKEN_COOKIE_NAME);
    assert_eq!(TokenKind::Access.to_string(), "access");
    assert_eq!(TokenKind::Refresh.to_string(), "refresh");
}

#[test]
fn test_access_cookie_format() {
    let cookie = TokenCookie::new(TokenKind::Access, "t", 300);

    assert_eq!(
        cookie.to_string(),
        "access_token=t; HttpOnly; Secure; SameSite=Strict; Max-Age=300"
    );
}

#[test]
fn test_refresh_cookie_format() {
    let cookie = TokenCookie::new(TokenKind::Refresh, "abc.def.ghi", 604800);

    assert_eq!(cookie.name(), "refresh_token");
    assert_eq!(cookie.value(), "abc.def.ghi");
    assert_eq!(cookie.max_age(), 604800);
    assert_eq!(
        cookie.to_string(),
        "refresh_token=abc.def.ghi; HttpOnly; Secure; SameSite=Strict; Max-Age=604800"
    );
}
