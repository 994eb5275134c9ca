use futures_util::StreamExt;
use serde::Deserialize;
use shared::{config::Config, errors::ClientError};
use tokio::{
    io::{AsyncRead, AsyncWrite},
    sync::mpsc,
    task::JoinHandle,
};
use tokio_tungstenite::{WebSocketStream, connect_async, tungstenite::Message};
use tracing::{info, warn};

const EVENT_ONLINE_USERS: &str = "getOnlineUsers";

#[derive(Debug, Clone, PartialEq)]
pub enum PresenceEvent {
    OnlineUsers(Vec<String>),
}

#[derive(Debug, Deserialize)]
struct PresenceFrame {
    event: String,
    #[serde(default)]
    data: serde_json::Value,
}

/// Handle on a live presence connection. Dropping the handle leaves the read
/// task running; call `disconnect` to tear it down.
pub struct PresenceConnection {
    task: JoinHandle<()>,
}

impl PresenceConnection {
    pub fn disconnect(self) {
        self.task.abort();
        info!("🔌 Disconnected from the presence socket");
    }
}

#[derive(Clone)]
pub struct PresenceClient {
    socket_url: String,
}

impl PresenceClient {
    pub fn new(config: &Config) -> Self {
        Self {
            socket_url: config.socket_url().trim_end_matches('/').to_string(),
        }
    }

    /// Connects with the user id as a query parameter and forwards
    /// online-user broadcasts until the server closes or `disconnect`.
    pub async fn connect(
        &self,
        user_id: &str,
    ) -> Result<(PresenceConnection, mpsc::Receiver<PresenceEvent>), ClientError> {
        let url = format!("{}/?userId={}", self.socket_url, user_id);

        let (stream, _) = connect_async(&url)
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        info!("✅ Connected to the presence socket for user {user_id}");

        let (tx, rx) = mpsc::channel(16);
        let task = tokio::spawn(read_loop(stream, tx));

        Ok((PresenceConnection { task }, rx))
    }
}

async fn read_loop<S>(mut stream: WebSocketStream<S>, tx: mpsc::Sender<PresenceEvent>)
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    while let Some(message) = stream.next().await {
        match message {
            Ok(Message::Text(text)) => {
                let frame = match serde_json::from_str::<PresenceFrame>(text.as_str()) {
                    Ok(frame) => frame,
                    Err(e) => {
                        warn!("Ignoring malformed presence frame: {e}");
                        continue;
                    }
                };

                if frame.event != EVENT_ONLINE_USERS {
                    continue;
                }

                match serde_json::from_value::<Vec<String>>(frame.data) {
                    Ok(user_ids) => {
                        if tx.send(PresenceEvent::OnlineUsers(user_ids)).await.is_err() {
                            break;
                        }
                    }
                    Err(e) => warn!("Ignoring malformed online-user list: {e}"),
                }
            }
            Ok(Message::Close(_)) => {
                info!("Presence socket closed by server");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                warn!("Presence socket error: {e}");
                break;
            }
        }
    }
}
