#![allow(dead_code)]

use noteful_server::{build_router, AppState, ServerConfig};
use noteful_store::Database;
use serde_json::{json, Value};
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

pub struct RawResponse {
    pub status: u16,
    pub head: String,
    pub body: String,
}

impl RawResponse {
    pub fn header(&self, name: &str) -> Option<String> {
        self.head.lines().skip(1).find_map(|line| {
            let (k, v) = line.split_once(':')?;
            k.trim()
                .eq_ignore_ascii_case(name)
                .then(|| v.trim().to_string())
        })
    }

    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("response body is json")
    }
}

pub async fn spawn_app(state: AppState) -> SocketAddr {
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    addr
}

pub async fn spawn_with_config(config: ServerConfig) -> (SocketAddr, Database) {
    let db = Database::open_in_memory().expect("open db");
    let addr = spawn_app(AppState::with_config(db.clone(), config)).await;
    (addr, db)
}

pub async fn spawn_default() -> (SocketAddr, Database) {
    spawn_with_config(ServerConfig::default()).await
}

pub async fn send_raw(
    addr: SocketAddr,
    method: &str,
    path: &str,
    body: Option<&str>,
    headers: &[(&str, &str)],
) -> RawResponse {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let mut req = format!("{method} {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n");
    for (k, v) in headers {
        req.push_str(&format!("{k}: {v}\r\n"));
    }
    if let Some(body) = body {
        req.push_str("Content-Type: application/json\r\n");
        req.push_str(&format!("Content-Length: {}\r\n\r\n{body}", body.len()));
    } else {
        req.push_str("\r\n");
    }
    stream
        .write_all(req.as_bytes())
        .await
        .expect("write request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response must have separator");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("http status");
    RawResponse {
        status,
        head: head.to_string(),
        body: body.to_string(),
    }
}

pub async fn get(addr: SocketAddr, path: &str) -> RawResponse {
    send_raw(addr, "GET", path, None, &[]).await
}

pub fn folders_fixture() -> Value {
    json!([
        {"id": 1, "name": "Folder One"},
        {"id": 2, "name": "Folder Two"},
        {"id": 3, "name": "Folder Three"},
        {"id": 4, "name": "Folder Four"}
    ])
}

pub fn notes_fixture() -> Value {
    json!([
        {"id": 1, "name": "Note One", "content": "I'm in Folder One", "folder_id": 1, "date_modified": "2019-08-01T16:28:32.615Z"},
        {"id": 2, "name": "Note Two", "content": "I'm in Folder Two", "folder_id": 2, "date_modified": "2019-08-02T16:28:32.615Z"},
        {"id": 3, "name": "Note Three", "content": "I'm in Folder Three", "folder_id": 3, "date_modified": "2019-08-03T16:28:32.615Z"},
        {"id": 4, "name": "Note Four", "content": "I'm in Folder Four", "folder_id": 4, "date_modified": "2019-08-04T16:28:32.615Z"}
    ])
}

pub async fn seed_folders(db: &Database) {
    db.call(|conn| {
        conn.execute_batch(
            "INSERT INTO noteful_folders (id, name) VALUES
               (1, 'Folder One'), (2, 'Folder Two'), (3, 'Folder Three'), (4, 'Folder Four');",
        )
    })
    .await
    .expect("seed folders");
}

pub async fn seed_notes(db: &Database) {
    seed_folders(db).await;
    db.call(|conn| {
        conn.execute_batch(
            "INSERT INTO noteful_notes (id, name, content, folder_id, date_modified) VALUES
               (1, 'Note One', 'I''m in Folder One', 1, '2019-08-01 16:28:32.615'),
               (2, 'Note Two', 'I''m in Folder Two', 2, '2019-08-02 16:28:32.615'),
               (3, 'Note Three', 'I''m in Folder Three', 3, '2019-08-03 16:28:32.615'),
               (4, 'Note Four', 'I''m in Folder Four', 4, '2019-08-04 16:28:32.615');",
        )
    })
    .await
    .expect("seed notes");
}

pub fn error_body(message: &str) -> Value {
    json!({"error": {"message": message}})
}
