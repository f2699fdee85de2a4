use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::player::{GetItemResult, PlayPauseResult};
use crate::models::{
    ActivePlayer, NowPlaying, Params, PlayPauseAction, PlaybackProperties, PlayerItem,
    RpcRequest, RpcResponse,
};
use crate::services::formatter;
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};

const ITEM_PROPERTIES: [&str; 5] = ["episode", "season", "showtitle", "title", "year"];
const PLAYBACK_PROPERTIES: [&str; 3] = ["speed", "time", "totaltime"];

#[derive(Clone)]
pub struct KodiClient {
    rpc_url: String,
    credentials: Option<(String, String)>,
    client: Client,
}

impl KodiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        let credentials = config
            .has_credentials()
            .then(|| (config.username.clone(), config.password.clone()));

        Ok(Self {
            rpc_url: config.rpc_url(),
            credentials,
            client,
        })
    }

    /// Sends a single JSON-RPC request and returns its `result`.
    pub async fn call(&self, method: &str, params: Params) -> Result<Value> {
        let request = RpcRequest::new(method, &params);

        tracing::debug!("Calling {} at {} with params {:?}", method, self.rpc_url, params);

        let mut builder = self
            .client
            .post(&self.rpc_url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&request);

        if let Some((username, password)) = &self.credentials {
            builder = builder.basic_auth(username, Some(password));
        }

        let response = builder.send().await?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!("Kodi returned HTTP {} for {}: {}", status, method, body);
            return Err(AppError::HttpStatus { status, body });
        }

        if !is_json_content_type(content_type.as_deref()) {
            return Err(AppError::UnexpectedContentType(content_type));
        }

        tracing::debug!("Kodi response: {}", body.chars().take(500).collect::<String>());

        let payload: RpcResponse = serde_json::from_str(&body)?;
        payload.into_result()
    }

    /// Like `call`, with positional and named params collected separately.
    pub async fn call_with(
        &self,
        method: &str,
        positional: Vec<Value>,
        named: Map<String, Value>,
    ) -> Result<Value> {
        let params = Params::from_parts(positional, named)?;
        self.call(method, params).await
    }

    async fn call_typed<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T> {
        let result = self.call(method, Params::from_value(params)?).await?;
        Ok(serde_json::from_value(result)?)
    }

    pub async fn get_active_players(&self) -> Result<Vec<ActivePlayer>> {
        self.call_typed("Player.GetActivePlayers", Value::Null).await
    }

    pub async fn get_item(&self, player_id: i64) -> Result<PlayerItem> {
        let result: GetItemResult = self
            .call_typed(
                "Player.GetItem",
                json!({ "playerid": player_id, "properties": ITEM_PROPERTIES }),
            )
            .await?;
        Ok(result.item)
    }

    pub async fn get_properties(&self, player_id: i64) -> Result<PlaybackProperties> {
        self.call_typed(
            "Player.GetProperties",
            json!({ "playerid": player_id, "properties": PLAYBACK_PROPERTIES }),
        )
        .await
    }

    /// Returns the player speed after the command, 0 meaning paused.
    pub async fn play_pause(&self, player_id: i64, action: PlayPauseAction) -> Result<i64> {
        let result: PlayPauseResult = self
            .call_typed(
                "Player.PlayPause",
                json!({ "playerid": player_id, "play": action.to_param() }),
            )
            .await?;
        Ok(result.speed)
    }

    pub async fn first_active_player(&self) -> Result<Option<ActivePlayer>> {
        let players = self.get_active_players().await?;
        tracing::debug!("Active players: {:?}", players);
        Ok(players.into_iter().next())
    }

    /// Item and playback state of the first active player, if any.
    pub async fn now_playing(&self) -> Result<Option<NowPlaying>> {
        let Some(player) = self.first_active_player().await? else {
            return Ok(None);
        };

        tracing::debug!(
            "Using {} player {} ({})",
            player.media_type,
            player.player_id,
            player.player_type.as_deref().unwrap_or("unknown")
        );

        let item = self.get_item(player.player_id).await?;
        tracing::debug!("Item: {:?}", item);

        let properties = self.get_properties(player.player_id).await?;
        tracing::debug!("Properties: {:?}", properties);

        Ok(Some(NowPlaying {
            player_id: player.player_id,
            title: formatter::format_title(&item),
            playing: properties.is_playing(),
            elapsed: properties.time.to_duration(),
            total: properties.total_time.to_duration(),
        }))
    }
}

fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|v| v.split(';').next())
        .map(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}
