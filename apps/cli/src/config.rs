//! Layered settings: defaults, then a TOML file, then `FORMCHECK_*`
//! environment variables, then command-line overrides.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use formcheck_validator::{EmailPolicy, PasswordPolicy, Policies};
use serde::{Deserialize, Serialize};

use crate::cli::GlobalArgs;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "formcheck.toml";

/// Environment prefix for every setting.
const ENV_PREFIX: &str = "FORMCHECK_";

/// Taken verbatim: figment would otherwise parse values such as `[]`, `123`
/// or `true` as arrays, integers and booleans.
const RAW_SPECIAL_CHARACTERS_KEY: &str = "password.special_characters";
const RAW_SPECIAL_CHARACTERS_VAR: &str = "FORMCHECK_PASSWORD__SPECIAL_CHARACTERS";

/// Keys owned by the logger's own environment handling; they are flat
/// strings and would clash with the `[log]` table.
const LOG_ENV_KEYS: &[&str] = &["log", "log_format", "log_time", "log_source", "log_colors"];

/// Everything the binary can be configured with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Password policy.
    pub password: PasswordPolicy,
    /// Email policy.
    pub email: EmailPolicy,
    /// Logger configuration.
    pub log: formcheck_log::Config,
}

impl Settings {
    /// Loads settings for `args`, returning them with the file that was read.
    pub fn load(args: &GlobalArgs) -> Result<(Self, Option<PathBuf>)> {
        let file = config_file(args.config.as_deref())?;
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = &file {
            figment = figment.merge(Toml::file(path));
        }
        figment = figment.merge(
            Env::prefixed(ENV_PREFIX)
                .split("__")
                .ignore(LOG_ENV_KEYS)
                .filter(|key| !is_raw_key(key.as_str())),
        );
        if let Ok(raw) = std::env::var(RAW_SPECIAL_CHARACTERS_VAR) {
            figment = figment.merge(Serialized::default(RAW_SPECIAL_CHARACTERS_KEY, raw));
        }

        let settings: Self = figment.extract().context("invalid configuration")?;
        let settings = settings.with_overrides(args).validated()?;
        Ok((settings, file))
    }

    /// Applies the command-line policy overrides.
    pub fn with_overrides(mut self, args: &GlobalArgs) -> Self {
        if let Some(min) = args.min_length {
            self.password.min_length = min;
        }
        if let Some(max) = args.max_length {
            self.password.max_length = max;
        }
        if let Some(max) = args.max_local_part {
            self.email.max_local_part_length = max;
        }
        self.log = self.log.overlay_env().with_verbosity(args.verbose);
        self
    }

    /// Checks the policy invariants.
    pub fn validated(self) -> Result<Self> {
        let Policies { password, email } = self
            .policies()
            .validated()
            .context("invalid policy")?;
        Ok(Self {
            password,
            email,
            ..self
        })
    }

    /// The policies as the validator consumes them.
    pub fn policies(&self) -> Policies {
        Policies {
            password: self.password.clone(),
            email: self.email.clone(),
        }
    }
}

/// Matches the raw key before or after `__` is turned into `.`.
fn is_raw_key(key: &str) -> bool {
    key.replace("__", ".")
        .eq_ignore_ascii_case(RAW_SPECIAL_CHARACTERS_KEY)
}

/// Resolves which TOML file to read, if any.
///
/// An explicit `--config` must exist; the implicit default is optional.
fn config_file(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) if path.is_file() => Ok(Some(path.to_path_buf())),
        Some(path) => bail!("config file '{}' not found", path.display()),
        None => {
            let path = PathBuf::from(DEFAULT_CONFIG_FILE);
            Ok(path.is_file().then_some(path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use figment::Jail;
    use pretty_assertions::assert_eq;

    fn args() -> GlobalArgs {
        GlobalArgs {
            config: None,
            format: OutputFormat::Text,
            verbose: 0,
            min_length: None,
            max_length: None,
            max_local_part: None,
        }
    }

    #[test]
    fn test_defaults_without_file_or_env() {
        Jail::expect_with(|_jail| {
            let (settings, file) = Settings::load(&args()).map_err(|e| e.to_string())?;
            assert_eq!(file, None);
            assert_eq!(settings.password, PasswordPolicy::default());
            assert_eq!(settings.email, EmailPolicy::default());
            Ok(())
        });
    }

    #[test]
    fn test_file_then_env_then_flags() {
        Jail::expect_with(|jail| {
            jail.create_file(
                DEFAULT_CONFIG_FILE,
                r#"
                    [password]
                    min_length = 10
                    max_length = 40

                    [email]
                    max_local_part_length = 32
                "#,
            )?;
            jail.set_env("FORMCHECK_PASSWORD__MAX_LENGTH", "50");

            let mut args = args();
            args.max_local_part = Some(16);
            let (settings, file) = Settings::load(&args).map_err(|e| e.to_string())?;

            assert_eq!(file, Some(PathBuf::from(DEFAULT_CONFIG_FILE)));
            assert_eq!(settings.password.min_length, 10);
            assert_eq!(settings.password.max_length, 50);
            assert_eq!(settings.email.max_local_part_length, 16);
            Ok(())
        });
    }

    #[test]
    fn test_logger_env_vars_do_not_break_extraction() {
        Jail::expect_with(|jail| {
            jail.set_env("FORMCHECK_LOG", "debug");
            jail.set_env("FORMCHECK_LOG_FORMAT", "json");
            let (settings, _) = Settings::load(&args()).map_err(|e| e.to_string())?;
            assert_eq!(settings.log.level, "debug");
            assert_eq!(settings.log.format, formcheck_log::Format::Json);
            Ok(())
        });
    }

    #[test]
    fn test_special_characters_from_env_stay_strings() {
        for raw in ["[]", "{}", "123", "true", "!?"] {
            Jail::expect_with(|jail| {
                jail.set_env(RAW_SPECIAL_CHARACTERS_VAR, raw);
                let (settings, _) = Settings::load(&args()).map_err(|e| e.to_string())?;
                assert_eq!(settings.password.special_characters, raw);
                Ok(())
            });
        }
    }

    #[test]
    fn test_special_characters_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(DEFAULT_CONFIG_FILE, "[password]\nspecial_characters = \"#\"\n")?;
            jail.set_env(RAW_SPECIAL_CHARACTERS_VAR, "[]");
            let (settings, _) = Settings::load(&args()).map_err(|e| e.to_string())?;
            assert_eq!(settings.password.special_characters, "[]");
            assert!(settings.password.validate("Passw0rd[").is_valid);
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        Jail::expect_with(|_jail| {
            let mut args = args();
            args.config = Some(PathBuf::from("nope.toml"));
            let err = Settings::load(&args).unwrap_err();
            assert!(err.to_string().contains("nope.toml"));
            Ok(())
        });
    }

    #[test]
    fn test_inverted_bounds_are_rejected() {
        Jail::expect_with(|_jail| {
            let mut args = args();
            args.min_length = Some(12);
            args.max_length = Some(6);
            let err = Settings::load(&args).unwrap_err();
            assert_eq!(err.to_string(), "invalid policy");
            Ok(())
        });
    }

    #[test]
    fn test_unknown_policy_key_is_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file(DEFAULT_CONFIG_FILE, "[password]\nminimum = 3\n")?;
            assert!(Settings::load(&args()).is_err());
            Ok(())
        });
    }
}
