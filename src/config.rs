use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub allowed_origin: String,
    pub contributor_group: String,
    pub identity_header: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            allowed_origin: env::var("ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:4200".to_string()),
            contributor_group: env::var("CONTRIBUTOR_GROUP")
                .unwrap_or_else(|_| "QuizContributers".to_string()),
            identity_header: env::var("IDENTITY_HEADER")
                .unwrap_or_else(|_| "X-Remote-User".to_string()),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            allowed_origin: "http://localhost:4200".to_string(),
            contributor_group: "QuizContributers".to_string(),
            identity_header: "X-Remote-User".to_string(),
        }
    }
}
