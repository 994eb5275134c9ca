use shared::model::UserProfile;
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserState {
    pub user: Option<UserProfile>,
    pub online_users: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct UserStore {
    tx: Arc<watch::Sender<UserState>>,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(UserState::default());
        Self { tx: Arc::new(tx) }
    }

    pub fn subscribe(&self) -> watch::Receiver<UserState> {
        self.tx.subscribe()
    }

    pub fn snapshot(&self) -> UserState {
        self.tx.borrow().clone()
    }

    pub fn set_user(&self, user: UserProfile) {
        self.tx.send_modify(|state| state.user = Some(user));
    }

    pub fn clear_user(&self) {
        self.tx.send_modify(|state| state.user = None);
    }

    pub fn set_online_users(&self, users: Vec<String>) {
        self.tx.send_modify(|state| state.online_users = users);
    }
}
