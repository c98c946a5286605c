//! Inputs for the demonstration binary

use tracing::warn;

/// Environment variable overriding [`WindowDemo::k`]
pub const WINDOW_ENV: &str = "SCANPAT_WINDOW";

/// Environment variable overriding [`PairDemo::target`]
pub const TARGET_ENV: &str = "SCANPAT_TARGET";

/// Input for the fixed-window scan
#[derive(Debug, Clone, PartialEq)]
pub struct WindowDemo {
    pub values: Vec<i64>,
    pub k: usize,
}

/// Input for the converging pair search
#[derive(Debug, Clone, PartialEq)]
pub struct PairDemo {
    /// Must be sorted ascending
    pub values: Vec<i64>,
    pub target: i64,
}

/// Shape of the linked list handed to the cycle detector
#[derive(Debug, Clone, PartialEq)]
pub struct CycleDemo {
    /// Node values, linked in order
    pub values: Vec<i64>,
    /// Index the last node links back to, if any
    pub loop_to: Option<usize>,
}

/// Input for the zero-compaction pass
#[derive(Debug, Clone, PartialEq)]
pub struct CompactDemo {
    pub values: Vec<i64>,
}

/// Everything the demo binary runs
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub window: WindowDemo,
    pub pair: PairDemo,
    pub cycle: CycleDemo,
    pub compact: CompactDemo,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            window: WindowDemo {
                values: vec![1, 12, -5, -6, 50, 3],
                k: 4,
            },
            pair: PairDemo {
                values: vec![1, 2, 3, 4, 6],
                target: 6,
            },
            cycle: CycleDemo {
                values: vec![1, 2, 3, 4, 5],
                loop_to: Some(2), // 5 -> 3
            },
            compact: CompactDemo {
                values: vec![0, 1, 0, 3, 12],
            },
        }
    }
}

impl DemoConfig {
    /// Default inputs with overrides from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Default inputs with overrides from `lookup`
    ///
    /// Values that fail to parse are ignored with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(WINDOW_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(k) => config.window.k = k,
                Err(err) => warn!(key = WINDOW_ENV, %raw, %err, "ignoring override"),
            }
        }

        if let Some(raw) = lookup(TARGET_ENV) {
            match raw.trim().parse::<i64>() {
                Ok(target) => config.pair.target = target,
                Err(err) => warn!(key = TARGET_ENV, %raw, %err, "ignoring override"),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DemoConfig::default();
        assert_eq!(config.window.k, 4);
        assert_eq!(config.pair.target, 6);
        assert_eq!(config.cycle.loop_to, Some(2));
        assert!(config.pair.values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_overrides() {
        let config = DemoConfig::from_lookup(|key| match key {
            WINDOW_ENV => Some("2".to_string()),
            TARGET_ENV => Some(" -3 ".to_string()),
            _ => None,
        });
        assert_eq!(config.window.k, 2);
        assert_eq!(config.pair.target, -3);
    }

    #[test]
    fn test_bad_override_is_ignored() {
        let config = DemoConfig::from_lookup(|key| (key == WINDOW_ENV).then(|| "wide".to_string()));
        assert_eq!(config.window.k, 4);
    }
}
