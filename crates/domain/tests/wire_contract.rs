//! Integration tests for the wire contract the backing service must satisfy.

use atrium_domain::{ApiEnvelope, LoginResponse, Page, User, UserRole};

#[test]
fn list_response_nests_page_inside_envelope() {
    let body = r#"{
        "data": {
            "content": [
                {
                    "id": "1",
                    "email": "admin@example.com",
                    "name": "Admin User",
                    "role": "admin",
                    "createdAt": "2024-01-01T00:00:00Z",
                    "updatedAt": "2024-01-01T00:00:00Z"
                }
            ],
            "totalElements": 21,
            "totalPages": 3,
            "size": 10,
            "number": 2
        },
        "message": "ok",
        "timestamp": "2024-05-01T09:30:00Z"
    }"#;

    let envelope: ApiEnvelope<Page<User>> = serde_json::from_str(body).unwrap();
    assert_eq!(envelope.timestamp.as_deref(), Some("2024-05-01T09:30:00Z"));

    let page = envelope.into_data();
    assert_eq!(page.content.len(), 1);
    assert_eq!(page.content[0].role, UserRole::Admin);
    assert_eq!(page.total_elements, 21);
    assert_eq!(page.number, 2);
    assert!(page.is_last());
}

#[test]
fn login_response_round_trips_through_envelope() {
    let body = r#"{
        "data": {
            "user": {
                "id": "9",
                "email": "a@b.com",
                "name": "A",
                "createdAt": "2024-01-01T00:00:00Z",
                "updatedAt": "2024-01-01T00:00:00Z"
            },
            "token": "jwt-abc"
        }
    }"#;

    let login: LoginResponse =
        serde_json::from_str::<ApiEnvelope<LoginResponse>>(body).unwrap().into_data();
    assert_eq!(login.token, "jwt-abc");
    assert_eq!(login.user.role, UserRole::User, "missing role falls back to default");
}
