use super::*;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Accept one connection, answer with `status` and `body`, and hand back the
/// raw request text.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    serve_raw(format!(
        "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    ))
    .await
}

/// Accept one connection and write `response` verbatim.
async fn serve_raw(response: String) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        request
    });
    (base_url, handle)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0_u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        let text = String::from_utf8_lossy(&buf);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length").then(|| value.trim().parse::<usize>().ok())?
                })
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

const SESSION_BODY: &str =
    r#"{"token":"token-123","user":{"id":"user123","name":"John Doe","email":"johndoe@example.com"}}"#;

#[tokio::test]
async fn create_session_posts_credentials_without_authorization() {
    let (base_url, server) = serve_once("200 OK", SESSION_BODY).await;
    let api = HttpApi::new(base_url);

    let response = api
        .create_session(&Credentials { email: "johndoe@example.com".into(), password: "123456".into() })
        .await
        .unwrap();

    assert_eq!(response.token, "token-123");
    assert_eq!(response.user.id, "user123");
    let request = server.await.unwrap();
    assert!(request.starts_with("POST /sessions HTTP/1.1"), "{request}");
    assert!(!request.to_ascii_lowercase().contains("authorization:"));
    assert!(request.contains(r#""email":"johndoe@example.com""#));
}

#[tokio::test]
async fn authenticated_call_sends_bearer_and_query() {
    let (base_url, server) = serve_once("200 OK", "[]").await;
    let api = HttpApi::new(format!("{base_url}/"));

    let list = api
        .day_appointments(&Credential::bearer("token-123"), DayQuery { year: 2020, month: 6, day: 8 })
        .await
        .unwrap();

    assert!(list.is_empty());
    let request = server.await.unwrap();
    assert!(request.starts_with("GET /appointments/me?year=2020&month=6&day=8 HTTP/1.1"), "{request}");
    assert!(request.to_ascii_lowercase().contains("authorization: bearer token-123"));
}

#[tokio::test]
async fn status_401_is_unauthorized() {
    let (base_url, server) = serve_once("401 Unauthorized", r#"{"message":"Invalid JWT token"}"#).await;
    let api = HttpApi::new(base_url);

    let err = api
        .update_profile(
            &Credential::bearer("stale"),
            &ProfileUpdate { name: "John".into(), email: "j@example.com".into(), password: None },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Unauthorized));
    assert!(server.await.unwrap().starts_with("PUT /profile HTTP/1.1"));
}

#[tokio::test]
async fn other_status_keeps_body() {
    let (base_url, server) = serve_once("400 Bad Request", r#"{"message":"Email already used"}"#).await;
    let api = HttpApi::new(base_url);

    let err = api
        .create_user(&SignUpRequest { name: "Ann".into(), email: "ann@example.com".into(), password: "123456".into() })
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Email already used");
    server.await.unwrap();
}

#[tokio::test]
async fn truncated_error_body_keeps_status() {
    let (base_url, server) = serve_raw(
        "HTTP/1.1 500 Internal Server Error\r\ncontent-length: 64\r\nconnection: close\r\n\r\n{\"mess".to_owned(),
    )
    .await;
    let api = HttpApi::new(base_url);

    let err = api
        .day_appointments(&Credential::bearer("t"), DayQuery { year: 2020, month: 6, day: 8 })
        .await
        .unwrap_err();

    assert!(matches!(&err, ApiError::Status { status: 500, body } if body.is_empty()), "{err:?}");
    server.await.unwrap();
}

#[tokio::test]
async fn malformed_success_body_is_decode_error() {
    let (base_url, server) = serve_once("200 OK", r#"{"unexpected":true}"#).await;
    let api = HttpApi::new(base_url);

    let err = api
        .month_availability(&Credential::bearer("t"), "user123", MonthQuery { year: 2020, month: 6 })
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
    let request = server.await.unwrap();
    assert!(request.starts_with("GET /providers/user123/month-availability?year=2020&month=6 HTTP/1.1"), "{request}");
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = HttpApi::new(base_url)
        .forgot_password(&ForgotPasswordRequest { email: "ann@example.com".into() })
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[test]
fn avatar_form_rejects_bad_mime() {
    let upload = AvatarUpload { file_name: "a.png".into(), content_type: "not a mime".into(), bytes: vec![1] };
    assert!(matches!(avatar_form(&upload), Err(ApiError::Encode(_))));
}
