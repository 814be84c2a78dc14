use apod_favorites::{
    ApiSettings, ApodSettings, AppSettings, AuthSettings, DatabaseSettings, SecretSettings,
};
use axum::body::Body;
use axum::response::Response;
use http_body_util::BodyExt;
use url::Url;

pub fn test_settings(apod_base: Url, nasa_api_key: &str) -> AppSettings {
    AppSettings {
        api: ApiSettings {
            host: "127.0.0.1".into(),
            port: 0,
        },
        database: DatabaseSettings {
            url: "postgres://unused".into(),
            max_connections: 2,
        },
        auth: AuthSettings {
            access_token_expiry_minutes: 60,
        },
        apod: ApodSettings {
            base_url: apod_base,
        },
        secrets: SecretSettings {
            jwt: "test-secret".into(),
            nasa_api_key: nasa_api_key.into(),
        },
    }
}

pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is JSON")
}
