use crate::{env_or_default, env_required, ConfigError, FromEnv};

/// Bootstrap credentials for the initial admin account.
#[derive(Clone, Debug)]
pub struct AdminAuthConfig {
    pub email: String,
    pub name: String,
    pub password: String,
}

impl FromEnv for AdminAuthConfig {
    /// Reads ADMIN_EMAIL and ADMIN_PASSWORD (required) and ADMIN_NAME
    /// (default "Administrator").
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            email: env_required("ADMIN_EMAIL")?,
            name: env_or_default("ADMIN_NAME", "Administrator"),
            password: env_required("ADMIN_PASSWORD")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_with_all_values() {
        temp_env::with_vars(
            [
                ("ADMIN_EMAIL", Some("ops@example.com")),
                ("ADMIN_NAME", Some("Ops")),
                ("ADMIN_PASSWORD", Some("secret")),
            ],
            || {
                let config = AdminAuthConfig::from_env().unwrap();
                assert_eq!(config.email, "ops@example.com");
                assert_eq!(config.name, "Ops");
            },
        );
    }

    #[test]
    fn name_defaults_when_unset() {
        temp_env::with_vars(
            [
                ("ADMIN_EMAIL", Some("ops@example.com")),
                ("ADMIN_NAME", None),
                ("ADMIN_PASSWORD", Some("secret")),
            ],
            || {
                let config = AdminAuthConfig::from_env().unwrap();
                assert_eq!(config.name, "Administrator");
            },
        );
    }

    #[test]
    fn missing_email_is_an_error() {
        temp_env::with_vars(
            [
                ("ADMIN_EMAIL", None),
                ("ADMIN_PASSWORD", Some("secret")),
            ],
            || {
                let err = AdminAuthConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("ADMIN_EMAIL"));
            },
        );
    }
}
