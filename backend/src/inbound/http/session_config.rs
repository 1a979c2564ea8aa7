//! Session cookie settings read from the environment.
//!
//! Debug builds fall back to safe defaults with a warning. Release builds
//! require every toggle to be set explicitly and valid.

use std::path::PathBuf;

use actix_web::cookie::{Key, SameSite};
use mockable::Env;
use tracing::warn;
use zeroize::Zeroize;

const SESSION_KEY_DEFAULT_PATH: &str = "/var/run/secrets/session_key";
const SESSION_KEY_MIN_LEN: usize = 64;
const KEY_FILE_ENV: &str = "SESSION_KEY_FILE";
const COOKIE_SECURE_ENV: &str = "SESSION_COOKIE_SECURE";
const SAMESITE_ENV: &str = "SESSION_SAMESITE";
const ALLOW_EPHEMERAL_ENV: &str = "SESSION_ALLOW_EPHEMERAL";
const BOOL_EXPECTED: &str = "1|0|true|false|yes|no|y|n";
const SAMESITE_EXPECTED: &str = "Strict|Lax|None";

/// Build mode for session configuration validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Defaults are tolerated with a warning.
    Debug,
    /// Every toggle must be present and valid.
    Release,
}

impl BuildMode {
    /// Determine the build mode from `cfg!(debug_assertions)`.
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }
}

/// Validated cookie session settings.
pub struct SessionSettings {
    /// Signing and encryption key for the private session cookie.
    pub key: Key,
    /// Whether the cookie carries the `Secure` attribute.
    pub cookie_secure: bool,
    /// `SameSite` policy for the cookie.
    pub same_site: SameSite,
}

/// Errors raised while validating session configuration.
#[derive(thiserror::Error, Debug)]
pub enum SessionConfigError {
    #[error("missing required environment variable: {name}")]
    MissingEnv { name: &'static str },
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("failed to read session key at {path}: {source}")]
    KeyRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("session key at {path} too short: need >= {min_len} bytes, got {length}")]
    KeyTooShort {
        path: PathBuf,
        length: usize,
        min_len: usize,
    },
    #[error("SESSION_SAMESITE=None requires SESSION_COOKIE_SECURE=1")]
    InsecureSameSiteNone,
    #[error("SESSION_ALLOW_EPHEMERAL must be 0 in release builds")]
    EphemeralNotAllowed,
}

/// Reads toggles, applying the build mode's tolerance for missing or bad
/// values.
struct ToggleReader<'a, E> {
    env: &'a E,
    mode: BuildMode,
}

impl<E: Env> ToggleReader<'_, E> {
    fn read<T: Copy>(
        &self,
        name: &'static str,
        expected: &'static str,
        parse: impl Fn(&str) -> Option<T>,
        debug_default: T,
    ) -> Result<T, SessionConfigError> {
        let Some(value) = self.env.string(name) else {
            if self.mode == BuildMode::Debug {
                warn!(name, "session toggle not set; using default");
                return Ok(debug_default);
            }
            return Err(SessionConfigError::MissingEnv { name });
        };
        if let Some(parsed) = parse(&value) {
            return Ok(parsed);
        }
        if self.mode == BuildMode::Debug {
            warn!(name, value = %value, "invalid session toggle; using default");
            return Ok(debug_default);
        }
        Err(SessionConfigError::InvalidEnv {
            name,
            value,
            expected,
        })
    }
}

/// Build session settings from environment variables and build mode.
///
/// # Examples
///
/// ```rust
/// use bus_booking::inbound::http::session_config::{BuildMode, session_settings_from_env};
/// use mockable::MockEnv;
///
/// let mut env = MockEnv::new();
/// env.expect_string().returning(|_| None);
///
/// let settings = session_settings_from_env(&env, BuildMode::Debug).expect("debug defaults");
/// assert!(settings.cookie_secure);
/// ```
pub fn session_settings_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<SessionSettings, SessionConfigError> {
    let reader = ToggleReader { env, mode };
    let cookie_secure = reader.read(COOKIE_SECURE_ENV, BOOL_EXPECTED, parse_bool, true)?;
    let default_same_site = match mode {
        BuildMode::Debug => SameSite::Lax,
        BuildMode::Release => SameSite::Strict,
    };
    let same_site = reader.read(
        SAMESITE_ENV,
        SAMESITE_EXPECTED,
        parse_same_site,
        default_same_site,
    )?;
    if same_site == SameSite::None && !cookie_secure {
        if mode == BuildMode::Release {
            return Err(SessionConfigError::InsecureSameSiteNone);
        }
        warn!("SESSION_SAMESITE=None without a secure cookie; browsers may reject it");
    }
    let allow_ephemeral = reader.read(ALLOW_EPHEMERAL_ENV, BOOL_EXPECTED, parse_bool, false)?;
    if allow_ephemeral && mode == BuildMode::Release {
        return Err(SessionConfigError::EphemeralNotAllowed);
    }
    let key_path = env
        .string(KEY_FILE_ENV)
        .map_or_else(|| PathBuf::from(SESSION_KEY_DEFAULT_PATH), PathBuf::from);
    let key = load_key(key_path, mode, allow_ephemeral)?;

    Ok(SessionSettings {
        key,
        cookie_secure,
        same_site,
    })
}

fn load_key(
    path: PathBuf,
    mode: BuildMode,
    allow_ephemeral: bool,
) -> Result<Key, SessionConfigError> {
    let mut bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(error) if mode == BuildMode::Debug || allow_ephemeral => {
            warn!(path = %path.display(), error = %error, "using temporary session key (dev only)");
            return Ok(Key::generate());
        }
        Err(source) => return Err(SessionConfigError::KeyRead { path, source }),
    };
    let length = bytes.len();
    if mode == BuildMode::Release && length < SESSION_KEY_MIN_LEN {
        bytes.zeroize();
        return Err(SessionConfigError::KeyTooShort {
            path,
            length,
            min_len: SESSION_KEY_MIN_LEN,
        });
    }
    let key = Key::derive_from(&bytes);
    bytes.zeroize();
    Ok(key)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}

fn parse_same_site(value: &str) -> Option<SameSite> {
    match value.to_ascii_lowercase().as_str() {
        "lax" => Some(SameSite::Lax),
        "strict" => Some(SameSite::Strict),
        "none" => Some(SameSite::None),
        _ => None,
    }
}
