use crate::use_cases::GameEvent;
use axum::extract::ws::Utf8Bytes;
use tokio::sync::{broadcast, mpsc, watch};

#[derive(Clone)]
pub struct AppState {
    // Intents flowing from the network into the world task.
    pub input_tx: mpsc::Sender<GameEvent>,
    // Serialized world updates, shared across all connections. The domain-level
    // broadcast stays between the world task and the serializer.
    pub world_bytes_tx: broadcast::Sender<Utf8Bytes>,
    // Latest serialized world update for lag recovery.
    pub world_latest_tx: watch::Sender<Utf8Bytes>,
}
