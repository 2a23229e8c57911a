//! One-shot messages carried across a redirect in a short-lived cookie.

use axum_extra::extract::CookieJar;
use cookie::{Cookie, SameSite};

pub const FLASH_COOKIE: &str = "flash";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Level {
    Success,
    Error,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Level::Success => "success",
            Level::Error => "error",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "success" => Some(Level::Success),
            "error" => Some(Level::Error),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Flash {
    pub level: Level,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: Level::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: Level::Error, message: message.into() }
    }

    pub fn encode(&self) -> String {
        urlencoding::encode(&format!("{}:{}", self.level.as_str(), self.message)).into_owned()
    }

    pub fn decode(raw: &str) -> Option<Self> {
        let decoded = urlencoding::decode(raw).ok()?;
        let (level, message) = decoded.split_once(':')?;
        Some(Self { level: Level::parse(level)?, message: message.to_string() })
    }
}

pub fn push(jar: CookieJar, flash: &Flash) -> CookieJar {
    jar.add(
        Cookie::build((FLASH_COOKIE, flash.encode()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .max_age(time::Duration::minutes(5)),
    )
}

/// Reads the pending message, if any, and clears the cookie.
pub fn take(jar: CookieJar) -> (CookieJar, Option<Flash>) {
    let Some(flash) = jar.get(FLASH_COOKIE).map(|c| Flash::decode(c.value())) else {
        return (jar, None);
    };
    (jar.remove(Cookie::build(FLASH_COOKIE).path("/")), flash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_reads_back_encoded_messages() {
        let flash = Flash::error("Invalid input.");
        assert_eq!(Flash::decode(&flash.encode()), Some(flash));

        let flash = Flash::success("已创建: a:b");
        assert_eq!(Flash::decode(&flash.encode()), Some(flash));
    }

    #[test]
    fn decode_rejects_unknown_levels() {
        assert_eq!(Flash::decode("warning%3Ahi"), None);
        assert_eq!(Flash::decode("no-separator"), None);
    }

    #[test]
    fn take_clears_the_cookie() {
        let jar = push(CookieJar::new(), &Flash::success("Item created."));
        let (jar, flash) = take(jar);
        assert_eq!(flash, Some(Flash::success("Item created.")));
        assert!(jar.get(FLASH_COOKIE).is_none());

        let (_, flash) = take(jar);
        assert_eq!(flash, None);
    }
}
