//! Reveal timing configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How the delay between revealed characters is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    /// Every character waits `tick_interval_ms`
    #[default]
    Fixed,
    /// Longer pauses after line breaks, sentence ends and punctuation
    Natural,
}

/// Timing for a reveal session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealConfig {
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Pause between finishing one segment and starting the next
    #[serde(default = "default_segment_pause_ms")]
    pub segment_pause_ms: u64,
    #[serde(default)]
    pub cadence: Cadence,
}

fn default_tick_interval_ms() -> u64 {
    3
}

fn default_segment_pause_ms() -> u64 {
    100
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            segment_pause_ms: default_segment_pause_ms(),
            cadence: Cadence::default(),
        }
    }
}

impl RevealConfig {
    /// Zero delays everywhere
    pub fn instant() -> Self {
        Self {
            tick_interval_ms: 0,
            segment_pause_ms: 0,
            cadence: Cadence::Fixed,
        }
    }

    /// Delay after revealing `ch`
    pub fn char_delay(&self, ch: char) -> Duration {
        let ms = match self.cadence {
            Cadence::Fixed => self.tick_interval_ms,
            Cadence::Natural => natural_delay_ms(ch),
        };
        Duration::from_millis(ms)
    }

    pub fn segment_pause(&self) -> Duration {
        Duration::from_millis(self.segment_pause_ms)
    }
}

fn natural_delay_ms(ch: char) -> u64 {
    match ch {
        '\n' => 200,
        '.' | '!' | '?' => 150,
        ',' | ';' | ':' => 100,
        ' ' => 50,
        '(' | ')' | '[' | ']' | '{' | '}' => 80,
        _ => 15,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RevealConfig::default();
        assert_eq!(config.char_delay('x'), Duration::from_millis(3));
        assert_eq!(config.char_delay('\n'), Duration::from_millis(3));
        assert_eq!(config.segment_pause(), Duration::from_millis(100));
    }

    #[test]
    fn test_natural_cadence() {
        let config = RevealConfig {
            cadence: Cadence::Natural,
            ..RevealConfig::default()
        };
        assert_eq!(config.char_delay('\n'), Duration::from_millis(200));
        assert_eq!(config.char_delay('?'), Duration::from_millis(150));
        assert_eq!(config.char_delay(';'), Duration::from_millis(100));
        assert_eq!(config.char_delay(' '), Duration::from_millis(50));
        assert_eq!(config.char_delay('}'), Duration::from_millis(80));
        assert_eq!(config.char_delay('a'), Duration::from_millis(15));
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: RevealConfig = serde_yaml::from_str("cadence: natural").unwrap();
        assert_eq!(config.cadence, Cadence::Natural);
        assert_eq!(config.tick_interval_ms, 3);
        assert_eq!(config.segment_pause_ms, 100);
    }
}
