//! Process-wide rendering configuration.
//!
//! The indenter and the text escaper are global, replaceable collaborators.
//! Swap them before any render call; renders running concurrently with a
//! swap see either the old or the new collaborator, never a mix within one
//! borrowed call.

use std::sync::{RwLock, RwLockReadGuard};

use once_cell::sync::Lazy;

use crate::escape;

/// Produces the indented form of a pre-rendered fragment.
pub trait Indenter: Send + Sync {
    /// Prefix `fragment` with `level` units of indentation.
    ///
    /// The fragment's inner lines already carry their own absolute
    /// indentation, so the prefix is applied once, at the start. Level 0 is
    /// the identity transform.
    fn indent(&self, level: usize, fragment: &str) -> String;
}

/// The default [`Indenter`]: a fixed whitespace unit per level.
pub struct FixedIndenter {
    unit: String,
}

impl FixedIndenter {
    pub fn new(unit: impl Into<String>) -> Self {
        Self { unit: unit.into() }
    }
}

impl Default for FixedIndenter {
    fn default() -> Self {
        Self::new("  ")
    }
}

impl Indenter for FixedIndenter {
    fn indent(&self, level: usize, fragment: &str) -> String {
        let mut out = self.unit.repeat(level);
        out.push_str(fragment);
        out
    }
}

type Escaper = Box<dyn Fn(&str) -> String + Send + Sync>;

struct Config {
    indenter: Box<dyn Indenter>,
    text_escaper: Escaper,
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| {
    RwLock::new(Config {
        indenter: Box::new(FixedIndenter::default()),
        text_escaper: Box::new(escape::escape_html),
    })
});

fn read_config() -> RwLockReadGuard<'static, Config> {
    CONFIG.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Replace the process-wide indenter used by formatted rendering
pub fn set_indenter(indenter: impl Indenter + 'static) {
    let mut config = CONFIG.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    config.indenter = Box::new(indenter);
}

/// Replace the process-wide escaper applied to text leaves
pub fn set_text_escaper(escaper: impl Fn(&str) -> String + Send + Sync + 'static) {
    let mut config = CONFIG.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    config.text_escaper = Box::new(escaper);
}

pub(crate) fn indent(level: usize, fragment: &str) -> String {
    read_config().indenter.indent(level, fragment)
}

pub(crate) fn escape_text(text: &str) -> String {
    (read_config().text_escaper)(text)
}
