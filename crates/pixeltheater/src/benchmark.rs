//! Process-wide named-section timing, for frame-budget profiling.
//!
//! A section is opened with [`start`] and closed with [`end`]. Starting a
//! new section while one is already open overwrites the in-progress one
//! rather than nesting or erroring — sections are flat, not a stack.

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Instant;

const MAX_NAME_LEN: usize = 20;
const TRUNCATED_LEN: usize = 17;

#[derive(Debug, Clone, Copy, Default)]
pub struct BenchmarkData {
    pub total_time_us: u64,
    pub call_count: u64,
    pub min_time_us: u64,
    pub max_time_us: u64,
}

impl BenchmarkData {
    pub fn average_us(&self) -> f64 {
        if self.call_count == 0 {
            0.0
        } else {
            self.total_time_us as f64 / self.call_count as f64
        }
    }

    fn record(&mut self, elapsed_us: u64) {
        if self.call_count == 0 {
            self.min_time_us = elapsed_us;
            self.max_time_us = elapsed_us;
        } else {
            self.min_time_us = self.min_time_us.min(elapsed_us);
            self.max_time_us = self.max_time_us.max(elapsed_us);
        }
        self.total_time_us += elapsed_us;
        self.call_count += 1;
    }
}

/// Names longer than 20 characters are truncated to 17 characters plus `...`.
fn truncate_name(name: &str) -> String {
    if name.chars().count() <= MAX_NAME_LEN {
        name.to_string()
    } else {
        let head: String = name.chars().take(TRUNCATED_LEN).collect();
        format!("{head}...")
    }
}

struct BenchmarkState {
    enabled: bool,
    sections: HashMap<String, BenchmarkData>,
    in_progress: Option<(String, Instant)>,
}

impl Default for BenchmarkState {
    fn default() -> Self {
        Self {
            enabled: true,
            sections: HashMap::new(),
            in_progress: None,
        }
    }
}

thread_local! {
    static STATE: RefCell<BenchmarkState> = RefCell::new(BenchmarkState::default());
}

pub fn set_enabled(enabled: bool) {
    STATE.with(|s| s.borrow_mut().enabled = enabled);
}

pub fn is_enabled() -> bool {
    STATE.with(|s| s.borrow().enabled)
}

/// Open a named section. If one is already open, it is discarded unfinished;
/// this is the documented flat (non-nesting) behavior, not a bug.
pub fn start(name: &str) {
    STATE.with(|s| {
        let mut s = s.borrow_mut();
        if !s.enabled {
            return;
        }
        s.in_progress = Some((truncate_name(name), Instant::now()));
    });
}

/// Close the currently open section, if any, and fold its duration into its
/// running stats.
pub fn end() {
    STATE.with(|s| {
        let mut s = s.borrow_mut();
        if !s.enabled {
            return;
        }
        if let Some((name, started)) = s.in_progress.take() {
            let elapsed_us = started.elapsed().as_micros() as u64;
            s.sections.entry(name).or_default().record(elapsed_us);
        }
    });
}

pub fn reset() {
    STATE.with(|s| {
        let mut s = s.borrow_mut();
        s.sections.clear();
        s.in_progress = None;
    });
}

pub fn section(name: &str) -> Option<BenchmarkData> {
    STATE.with(|s| s.borrow().sections.get(name).copied())
}

/// A human-readable multi-line summary of all recorded sections plus `fps`.
pub fn report(fps: f32) -> String {
    STATE.with(|s| {
        let s = s.borrow();
        let mut lines = vec![format!("fps: {fps:.1}")];
        let mut names: Vec<&String> = s.sections.keys().collect();
        names.sort();
        for name in names {
            let data = &s.sections[name];
            lines.push(format!(
                "{name}: avg {:.1}us min {}us max {}us calls {}",
                data.average_us(),
                data.min_time_us,
                data.max_time_us,
                data.call_count
            ));
        }
        lines.join("\n")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_overwrites_unfinished_section() {
        reset();
        start("a");
        start("b");
        end();
        assert!(section("a").is_none());
        assert!(section("b").is_some());
    }

    #[test]
    fn records_min_max_average() {
        reset();
        start("work");
        end();
        start("work");
        end();
        let data = section("work").unwrap();
        assert_eq!(data.call_count, 2);
        assert!(data.average_us() >= 0.0);
    }

    #[test]
    fn long_names_are_truncated() {
        assert_eq!(truncate_name("a_name_that_is_definitely_too_long"), "a_name_that_is_d...");
        assert_eq!(truncate_name("short"), "short");
    }

    #[test]
    fn disabled_benchmark_records_nothing() {
        reset();
        set_enabled(false);
        start("x");
        end();
        assert!(section("x").is_none());
        set_enabled(true);
    }
}
