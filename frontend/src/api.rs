use async_trait::async_trait;
use blinkbuy_shared::{
    ApiConfig, AuthError, AuthGateway, AuthResult, LoginRequest, SignupRequest, TokenResponse,
};
use gloo_net::http::{Request, Response};
use serde::Deserialize;

/// Compile-time override of the backend, e.g.
/// `BLINKBUY_API_URL=https://api.blinkbuy.com/api trunk build`
const API_URL_OVERRIDE: Option<&str> = option_env!("BLINKBUY_API_URL");

/// Backend configuration; a malformed override falls back to the default.
pub fn api_config() -> ApiConfig {
    ApiConfig::from_override(API_URL_OVERRIDE).unwrap_or_else(|err| {
        log::error!("{err}; using {}", blinkbuy_shared::config::DEFAULT_API_BASE_URL);
        ApiConfig::default()
    })
}

/// Error bodies the backend answers with
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    detail: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BlinkBuyApi {
    config: ApiConfig,
}

impl BlinkBuyApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    async fn post_json<T: serde::Serialize>(&self, url: &str, body: &T) -> AuthResult<TokenResponse> {
        let res = Request::post(url)
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| AuthError::InvalidResponse(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        if !res.ok() {
            return Err(rejected(res).await);
        }

        res.json::<TokenResponse>()
            .await
            .map_err(|e| AuthError::InvalidResponse(e.to_string()))
    }
}

async fn rejected(res: Response) -> AuthError {
    let status = res.status();
    let message = res
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message.or(body.detail));
    log::warn!("auth request rejected with status {status}");
    AuthError::Rejected { status, message }
}

#[async_trait(?Send)]
impl AuthGateway for BlinkBuyApi {
    /// POST `{api}/login/`
    async fn login(&self, request: &LoginRequest) -> AuthResult<TokenResponse> {
        self.post_json(&self.config.login_url(), request).await
    }

    /// POST `{api}/seller-register/`
    async fn signup(&self, request: &SignupRequest) -> AuthResult<TokenResponse> {
        self.post_json(&self.config.signup_url(), request).await
    }
}
