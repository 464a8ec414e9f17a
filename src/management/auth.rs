use std::path::PathBuf;

use chrono::Utc;

use crate::{
    error::{Error, Result},
    spotify,
    types::Token,
    warning,
};

/// Seconds before the reported expiry at which a token is already refreshed.
const EXPIRY_MARGIN_SECS: u64 = 240;

pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    pub async fn load() -> Result<Self> {
        let path = Self::token_path();
        let content = async_fs::read_to_string(&path).await.map_err(|e| {
            Error::Auth(format!(
                "No cached token at {} ({}). Please run sporlrec auth",
                path.display(),
                e
            ))
        })?;
        let token: Token = serde_json::from_str(&content)
            .map_err(|e| Error::Auth(format!("Corrupt token cache: {}", e)))?;
        Ok(Self { token })
    }

    pub async fn persist(&self) -> Result<()> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| Error::Auth(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(&self.token)?;
        async_fs::write(&path, json)
            .await
            .map_err(|e| Error::Auth(e.to_string()))
    }

    /// Returns an access token, refreshing and persisting it first when it is
    /// about to expire.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Auth`] when the refresh fails. The stale token is never
    /// handed out.
    pub async fn get_valid_token(&mut self) -> Result<String> {
        if self.is_expired() {
            let new_token = spotify::auth::refresh_token(&self.token.refresh_token)
                .await
                .map_err(|e| {
                    Error::Auth(format!(
                        "Failed to refresh token ({}). Please run sporlrec auth",
                        e
                    ))
                })?;
            self.token = new_token;
            if let Err(e) = self.persist().await {
                warning!("Failed to save refreshed token: {}", e);
            }
        }

        Ok(self.token.access_token.clone())
    }

    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now + EXPIRY_MARGIN_SECS >= self.token.obtained_at + self.token.expires_in
    }

    fn token_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("sporlrec/cache/token.json");
        path
    }
}
