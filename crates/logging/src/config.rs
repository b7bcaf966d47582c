//! crates/logging/src/config.rs
//! Verbosity configuration combining info and debug levels.

use super::levels::{DebugFlag, DebugLevels, InfoFlag, InfoLevels};

/// Combined verbosity configuration for info and debug flags.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerbosityConfig {
    /// Info flag levels.
    pub info: InfoLevels,
    /// Debug flag levels.
    pub debug: DebugLevels,
}

impl VerbosityConfig {
    /// Create a new configuration from a `-v` count.
    ///
    /// - `0`: silent apart from errors.
    /// - `1`: input names and end-of-run statistics.
    /// - `2`: adds hash and I/O debug summaries.
    /// - `3` and above: raises hash and I/O debug to level 2.
    pub fn from_verbose_level(level: u8) -> Self {
        let mut config = Self::default();

        if level >= 1 {
            config.info.name = 1;
            config.info.stats = 1;
        }
        if level >= 2 {
            config.debug.hash = 1;
            config.debug.io = 1;
        }
        if level >= 3 {
            config.debug.hash = 2;
            config.debug.io = 2;
        }

        config
    }

    /// Apply a single info flag token (e.g., "name", "stats2").
    ///
    /// `all` sets every info flag; `none` clears them.
    pub fn apply_info_flag(&mut self, token: &str) -> Result<(), String> {
        let (name, level) = parse_flag_token(token)?;

        match name {
            "all" => self.info.set_all(level),
            "none" => self.info.set_all(0),
            _ => {
                let flag = InfoFlag::from_name(name)
                    .ok_or_else(|| format!("unknown info flag: {name}"))?;
                self.info.set(flag, level);
            }
        }
        Ok(())
    }

    /// Apply a single debug flag token (e.g., "hash", "io2").
    ///
    /// `all` sets every debug flag; `none` clears them.
    pub fn apply_debug_flag(&mut self, token: &str) -> Result<(), String> {
        let (name, level) = parse_flag_token(token)?;

        match name {
            "all" => self.debug.set_all(level),
            "none" => self.debug.set_all(0),
            _ => {
                let flag = DebugFlag::from_name(name)
                    .ok_or_else(|| format!("unknown debug flag: {name}"))?;
                self.debug.set(flag, level);
            }
        }
        Ok(())
    }

    /// Apply a comma-separated list of info flag tokens.
    pub fn apply_info_flags(&mut self, list: &str) -> Result<(), String> {
        split_tokens(list).try_for_each(|token| self.apply_info_flag(token))
    }

    /// Apply a comma-separated list of debug flag tokens.
    pub fn apply_debug_flags(&mut self, list: &str) -> Result<(), String> {
        split_tokens(list).try_for_each(|token| self.apply_debug_flag(token))
    }
}

fn split_tokens(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|token| !token.is_empty())
}

/// Parse a flag token like "stats2" into ("stats", 2) or "name" into ("name", 1).
fn parse_flag_token(token: &str) -> Result<(&str, u8), String> {
    if token.is_empty() {
        return Err("empty flag token".to_string());
    }

    // Find where the digits start
    let digit_start = token.find(|c: char| c.is_ascii_digit());

    match digit_start {
        Some(0) => Err(format!("missing flag name in: {token}")),
        Some(pos) => {
            let name = &token[..pos];
            let level_str = &token[pos..];
            let level = level_str
                .parse::<u8>()
                .map_err(|_| format!("invalid level in flag: {token}"))?;
            Ok((name, level))
        }
        None => {
            // No digits, default to level 1
            Ok((token, 1))
        }
    }
}
