//! Keybinding configuration types and parsing
//!
//! Key combos are written in vim-style notation: `C-x`, `M-S-w`, `<Right>`,
//! `<Space>`, `G` (shift is implied by an uppercase letter).

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

use crate::ui::action::Action;
use crate::ui::events::InputMode;

/// A key combination (key code + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Normalize a terminal key event to the form produced by the parser.
    ///
    /// Uppercase letters become lowercase + SHIFT so that `G` in config
    /// matches Shift+g. Shifted symbols (`?`, `+`) drop SHIFT since the
    /// character already carries it.
    pub fn from_key_event(event: &KeyEvent) -> Self {
        match event.code {
            KeyCode::Char(c) if c.is_ascii_uppercase() => Self {
                code: KeyCode::Char(c.to_ascii_lowercase()),
                modifiers: event.modifiers | KeyModifiers::SHIFT,
            },
            KeyCode::Char(c) if !c.is_alphabetic() => Self {
                code: event.code,
                modifiers: event.modifiers - KeyModifiers::SHIFT,
            },
            code => Self {
                code,
                modifiers: event.modifiers,
            },
        }
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self.code {
            KeyCode::Char(' ') => "<Space>".to_string(),
            KeyCode::Char(c) if self.modifiers == KeyModifiers::SHIFT => {
                // plain shifted letters display as the uppercase letter
                return write!(f, "{}", c.to_ascii_uppercase());
            }
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "<CR>".to_string(),
            KeyCode::Esc => "<Esc>".to_string(),
            KeyCode::Tab => "<Tab>".to_string(),
            KeyCode::Backspace => "<BS>".to_string(),
            KeyCode::Delete => "<Del>".to_string(),
            KeyCode::Up => "<Up>".to_string(),
            KeyCode::Down => "<Down>".to_string(),
            KeyCode::Left => "<Left>".to_string(),
            KeyCode::Right => "<Right>".to_string(),
            KeyCode::Home => "<Home>".to_string(),
            KeyCode::End => "<End>".to_string(),
            KeyCode::F(n) => format!("<F{n}>"),
            other => format!("{other:?}"),
        };

        let mut parts: Vec<&str> = Vec::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            parts.push("C");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            parts.push("M");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            parts.push("S");
        }
        parts.push(&key);
        write!(f, "{}", parts.join("-"))
    }
}

/// Logical grouping of input modes for keybinding lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyContext {
    /// Replay controls (normal mode)
    Replay,
    /// Numeric prompt for target or size
    Prompt,
    /// Help overlay
    Help,
}

impl KeyContext {
    pub fn from_input_mode(mode: InputMode) -> Self {
        match mode {
            InputMode::Normal => KeyContext::Replay,
            InputMode::EditingTarget | InputMode::EditingSize => KeyContext::Prompt,
            InputMode::ShowingHelp => KeyContext::Help,
        }
    }

    /// Config section name, e.g. `[keys.prompt]`.
    pub fn section_name(self) -> &'static str {
        match self {
            KeyContext::Replay => "replay",
            KeyContext::Prompt => "prompt",
            KeyContext::Help => "help",
        }
    }

    pub fn all() -> &'static [KeyContext] {
        &[KeyContext::Replay, KeyContext::Prompt, KeyContext::Help]
    }
}

/// Global and per-context keybindings
#[derive(Debug, Clone, Default)]
pub struct KeybindingConfig {
    /// Apply in every context unless overridden
    pub global: HashMap<KeyCombo, Action>,
    pub context: HashMap<KeyContext, HashMap<KeyCombo, Action>>,
}

impl KeybindingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context bindings first, then global ones.
    pub fn get_action(&self, key: &KeyCombo, context: KeyContext) -> Option<Action> {
        self.context
            .get(&context)
            .and_then(|bindings| bindings.get(key))
            .or_else(|| self.global.get(key))
            .copied()
    }

    /// Overlay `other` on top of these bindings.
    pub fn merge(&mut self, other: KeybindingConfig) {
        self.global.extend(other.global);
        for (ctx, bindings) in other.context {
            self.context.entry(ctx).or_default().extend(bindings);
        }
    }

    /// First key bound to `action` in `context` (or globally), for hints.
    ///
    /// Ties are broken by the display string so the hint is stable.
    pub fn key_for(&self, action: Action, context: KeyContext) -> Option<KeyCombo> {
        let pick = |map: &HashMap<KeyCombo, Action>| {
            map.iter()
                .filter(|(_, a)| **a == action)
                .map(|(k, _)| *k)
                .min_by_key(|k| k.to_string())
        };
        self.context
            .get(&context)
            .and_then(pick)
            .or_else(|| pick(&self.global))
    }
}

/// Error type for key parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyParseError {
    #[error("empty key notation")]
    Empty,
    #[error("no key specified")]
    NoKey,
    #[error("invalid key: {0}")]
    InvalidKey(String),
    #[error("invalid modifier: {0}")]
    InvalidModifier(String),
}

/// Parse a vim-style key notation string into a KeyCombo
///
/// Supported notation:
/// - `C-x`, `M-x`, `S-x` and combinations such as `C-S-x`
/// - `<CR>`, `<Esc>`, `<Tab>`, `<BS>`, `<Del>`, `<Space>`
/// - `<Up>`, `<Down>`, `<Left>`, `<Right>`, `<Home>`, `<End>`
/// - `<F1>` through `<F12>`
/// - modifiers inside brackets, e.g. `<C-Right>`
pub fn parse_key_notation(s: &str) -> Result<KeyCombo, KeyParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(KeyParseError::Empty);
    }

    if let Some(inner) = s.strip_prefix('<').and_then(|r| r.strip_suffix('>')) {
        return parse_bracketed(inner);
    }

    // A trailing '-' is the minus key itself, as in "C--"
    let (prefix, key) = match s.strip_suffix("--") {
        Some(rest) => (rest, "-"),
        None if s == "-" => ("", "-"),
        None => match s.rsplit_once('-') {
            Some((prefix, key)) => (prefix, key),
            None => ("", s),
        },
    };

    let mut modifiers = parse_modifiers(prefix)?;
    let code = match key {
        "" => return Err(KeyParseError::NoKey),
        k if k.starts_with('<') && k.ends_with('>') => {
            let inner = parse_bracketed(&k[1..k.len() - 1])?;
            modifiers |= inner.modifiers;
            inner.code
        }
        k => {
            let mut chars = k.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => {
                    if c.is_ascii_uppercase() {
                        modifiers |= KeyModifiers::SHIFT;
                    }
                    KeyCode::Char(c.to_ascii_lowercase())
                }
                _ => named_key(k).ok_or_else(|| KeyParseError::InvalidKey(k.to_string()))?,
            }
        }
    };

    Ok(KeyCombo::new(code, modifiers))
}

/// Parse `C-M-S` style modifier prefixes.
fn parse_modifiers(prefix: &str) -> Result<KeyModifiers, KeyParseError> {
    let mut modifiers = KeyModifiers::NONE;
    if prefix.is_empty() {
        return Ok(modifiers);
    }
    for part in prefix.split('-') {
        modifiers |= match part {
            "C" => KeyModifiers::CONTROL,
            "M" => KeyModifiers::ALT,
            "S" => KeyModifiers::SHIFT,
            other => return Err(KeyParseError::InvalidModifier(other.to_string())),
        };
    }
    Ok(modifiers)
}

/// Parse the inside of `<...>`, which may itself carry modifiers.
fn parse_bracketed(inner: &str) -> Result<KeyCombo, KeyParseError> {
    let (prefix, name) = inner.rsplit_once('-').unwrap_or(("", inner));
    let modifiers = parse_modifiers(prefix)?;
    let code = named_key(name).ok_or_else(|| KeyParseError::InvalidKey(name.to_string()))?;
    Ok(KeyCombo::new(code, modifiers))
}

fn named_key(name: &str) -> Option<KeyCode> {
    let upper = name.to_ascii_uppercase();
    let code = match upper.as_str() {
        "CR" | "ENTER" | "RETURN" => KeyCode::Enter,
        "ESC" | "ESCAPE" => KeyCode::Esc,
        "TAB" => KeyCode::Tab,
        "BS" | "BACKSPACE" => KeyCode::Backspace,
        "DEL" | "DELETE" => KeyCode::Delete,
        "SPACE" => KeyCode::Char(' '),
        "UP" => KeyCode::Up,
        "DOWN" => KeyCode::Down,
        "LEFT" => KeyCode::Left,
        "RIGHT" => KeyCode::Right,
        "HOME" => KeyCode::Home,
        "END" => KeyCode::End,
        f if f.len() > 1 && f.starts_with('F') => {
            let n: u8 = f[1..].parse().ok()?;
            if !(1..=12).contains(&n) {
                return None;
            }
            KeyCode::F(n)
        }
        _ => return None,
    };
    Some(code)
}

impl FromStr for KeyCombo {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key_notation(s)
    }
}
