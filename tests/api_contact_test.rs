//! Integration tests for the contact API and static page

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use tower::util::ServiceExt;

    use herald::api::public::contact::ContactResponse;

    use crate::test_utils::{body_to_string, test_app};

    /// Tests the configured contact email is returned
    #[tokio::test]
    async fn it_gets_contact_email() {
        let app = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/contact")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_to_string(response.into_body()).await;
        let contact: ContactResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(contact.email, "team@example.com");
    }

    /// Tests the chat page is served from the web UI directory
    #[tokio::test]
    async fn it_serves_chat_page() {
        let app = test_app();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CACHE_CONTROL], "no-cache");

        let body = body_to_string(response.into_body()).await;
        assert!(body.contains("/api/bot"));
        assert!(body.contains("Contact us here"));
    }

    /// Tests the chat page decodes each reply on its own and doesn't
    /// render error responses as bot replies
    #[tokio::test]
    async fn it_serves_chat_page_with_per_reply_decoding() {
        let app = test_app();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let body = body_to_string(response.into_body()).await;
        let reply_fn = &body[body.find("const requestReply").unwrap()..];
        assert!(reply_fn.contains("if (!response.ok) throw"));
        assert!(reply_fn.contains("const decoder = new TextDecoder()"));
        assert!(reply_fn.contains("appendFragment(decoder.decode())"));
        assert_eq!(body.matches("new TextDecoder()").count(), 1);
    }

    /// Tests missing static files return 404
    #[tokio::test]
    async fn it_returns_404_for_missing_file() {
        let app = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/does-not-exist.txt")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
