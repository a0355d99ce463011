//! CORS middleware configuration for cross-origin requests.
//!
//! Development is permissive. Production only admits the configured
//! origins. Both expose the rotated-token headers so browser clients can
//! read them.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use acct_shared::config::{Environment, ServerConfig, TokenPolicyConfig};

const MAX_AGE: usize = 3600;

/// Creates a CORS middleware instance configured for the environment.
pub fn create_cors(
    environment: Environment,
    server: &ServerConfig,
    token: &TokenPolicyConfig,
) -> Cors {
    let exposed = vec![
        token.new_token_header.clone(),
        token.new_token_expiry_header.clone(),
    ];

    if environment.is_production() {
        create_production_cors(&server.allowed_origins, exposed)
    } else {
        create_development_cors(exposed)
    }
}

fn allowed_methods() -> Vec<Method> {
    vec![
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ]
}

fn create_development_cors(exposed: Vec<String>) -> Cors {
    log::info!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(allowed_methods())
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .expose_headers(exposed)
        .max_age(MAX_AGE)
        .supports_credentials()
}

fn create_production_cors(allowed_origins: &[String], exposed: Vec<String>) -> Cors {
    log::info!("Configuring CORS for production environment");

    let mut cors = Cors::default()
        .allowed_methods(allowed_methods())
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .expose_headers(exposed)
        .max_age(MAX_AGE);

    for origin in allowed_origins {
        log::info!("Adding allowed origin: {}", origin);
        cors = cors.allowed_origin(origin);
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_cors_for_each_environment() {
        let server = ServerConfig {
            allowed_origins: vec!["https://app.example.com".to_string()],
            ..Default::default()
        };
        let token = TokenPolicyConfig::default();

        let _dev = create_cors(Environment::Development, &server, &token);
        let _prod = create_cors(Environment::Production, &server, &token);
    }
}
