use std::net::SocketAddr;

use axum::http::HeaderValue;
use color_eyre::eyre::Result;
use gatehouse_adapters::{
    config::{Settings, prod},
    hashing::Argon2Hasher,
    persistence::PostgrestUserDirectory,
    token::{JwtConfig, JwtTokenIssuer},
};
use gatehouse_service::{AuthService, init_tracing};
use reqwest::Client as HttpClient;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    // Load configuration
    let settings = Settings::load()?;

    // One HTTP client for every call to the user directory
    let user_directory = PostgrestUserDirectory::new(
        &settings.supabase_url,
        settings.supabase_anon_key.clone(),
        HttpClient::new(),
    )?;

    let token_issuer = JwtTokenIssuer::new(JwtConfig::new(settings.jwt_secret_or_default()));

    let auth_service = AuthService::new(user_directory, Argon2Hasher::new(), token_issuer);

    let allowed_origin = HeaderValue::from_str(&settings.allowed_origin)?;

    let address: SocketAddr = format!("{}:{}", prod::APP_HOST, settings.port).parse()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("Starting gatehouse...");

    auth_service.run_standalone(listener, allowed_origin).await?;

    Ok(())
}
