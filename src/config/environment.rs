//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    /// Cómo responder cuando un bus/user referenciado no existe al actualizar
    /// un conductor: `false` → 400 Bad Request, `true` → 404 Not Found.
    /// Controlado por INVALID_REFERENCE_STATUS (`bad_request` | `not_found`).
    pub invalid_reference_as_not_found: bool,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|value| value.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_default(),
            invalid_reference_as_not_found: parse_invalid_reference_status(
                &env::var("INVALID_REFERENCE_STATUS").unwrap_or_default(),
            ),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Interpretar INVALID_REFERENCE_STATUS: solo `not_found` activa el mapeo a 404
pub fn parse_invalid_reference_status(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("not_found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_invalid_reference_status() {
        assert!(parse_invalid_reference_status("not_found"));
        assert!(parse_invalid_reference_status("NOT_FOUND"));
        assert!(parse_invalid_reference_status(" not_found "));
        assert!(!parse_invalid_reference_status("bad_request"));
        assert!(!parse_invalid_reference_status(""));
        assert!(!parse_invalid_reference_status("404"));
    }

    #[test]
    fn test_server_url() {
        let config = EnvironmentConfig {
            environment: "development".to_string(),
            host: "127.0.0.1".to_string(),
            port: 8080,
            cors_origins: vec![],
            invalid_reference_as_not_found: false,
        };
        assert_eq!(config.server_url(), "127.0.0.1:8080");
        assert!(config.is_development());
        assert!(!config.is_production());
    }
}
