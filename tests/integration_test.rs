//! End to end conversation through a running server

mod test_utils;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio::sync::mpsc;

    use herald::api::{AppState, app};
    use herald::bot::prompt::OPENING_MESSAGE;
    use herald::client::{BotClient, ChatSession, ReplyState};

    use crate::test_utils::{completion_body, test_config};

    async fn spawn_server(openai_api_hostname: &str) -> String {
        let app = app(Arc::new(AppState::new(test_config(openai_api_hostname))));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    async fn reply(client: &BotClient, session: &mut ChatSession, history: Vec<String>) {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let request = client.stream_reply(&history, tx);
        let render = async {
            while let Some(fragment) = rx.recv().await {
                session.append(&fragment);
            }
        };
        let (result, ()) = tokio::join!(request, render);
        result.unwrap();
        session.finish();
    }

    #[tokio::test]
    async fn it_holds_a_conversation() {
        let mut upstream = mockito::Server::new_async().await;
        let mock = upstream
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "text/event-stream")
            .with_body(completion_body(&["Welcome", " aboard", "."]))
            .create_async()
            .await;

        let base_url = spawn_server(&upstream.url()).await;
        let client = BotClient::new(&base_url);
        let mut session = ChatSession::new();

        // Opening reply on load
        let history = session.begin_reply().unwrap();
        assert!(history.is_empty());
        reply(&client, &mut session, history).await;
        assert_eq!(session.messages(), [OPENING_MESSAGE]);
        assert_eq!(session.state(), ReplyState::Idle);

        // Visitor's first turn goes to the completion API
        let history = session.submit("How do I join?").unwrap();
        assert_eq!(history.len(), 2);
        reply(&client, &mut session, history).await;

        mock.assert_async().await;
        assert_eq!(
            session.messages(),
            [OPENING_MESSAGE, "How do I join?", "Welcome aboard."]
        );
        assert!(session.can_send("Thanks"));
    }
}
