use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gwanak_core::config::KeymapConfig;
use tracing::warn;

use crate::input::Action;

/// Parsed key binding (key code + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Build a lookup key from a terminal event.
    ///
    /// Shift is already encoded in the character ('G', '?') and in BackTab, and
    /// terminals disagree on whether they also report the modifier, so it is
    /// dropped for those keys.
    pub fn from_event(event: &KeyEvent) -> Self {
        let mut modifiers = event.modifiers;
        if matches!(event.code, KeyCode::Char(_) | KeyCode::BackTab) {
            modifiers.remove(KeyModifiers::SHIFT);
        }
        Self::new(event.code, modifiers)
    }
}

/// Runtime keymap for key-to-action lookup
#[derive(Debug)]
pub struct Keymap {
    bindings: HashMap<KeyBinding, Action>,
    /// Action bound to the "gg" sequence, if configured
    pending_g_action: Option<Action>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeymapConfig::default())
    }
}

impl Keymap {
    pub fn from_config(config: &KeymapConfig) -> Self {
        let mut bindings = HashMap::new();
        let mut pending_g_action = None;

        let mut add_binding = |key_str: &str, action: Action| {
            if key_str == "gg" {
                pending_g_action = Some(action);
                return;
            }

            match parse_key_binding(key_str) {
                Some(binding) => {
                    if let Some(existing) = bindings.get(&binding) {
                        warn!(
                            "Key conflict: '{}' already bound to {:?}, ignoring binding to {:?}",
                            key_str, existing, action
                        );
                    } else {
                        bindings.insert(binding, action);
                    }
                }
                None => warn!("Invalid key binding: '{}', ignoring", key_str),
            }
        };

        add_binding(&config.quit, Action::Quit);
        add_binding(&config.help, Action::ShowHelp);
        add_binding(&config.scroll_down, Action::ScrollDown);
        add_binding(&config.scroll_up, Action::ScrollUp);
        add_binding(&config.scroll_half_down, Action::ScrollHalfPageDown);
        add_binding(&config.scroll_half_up, Action::ScrollHalfPageUp);
        add_binding(&config.jump_to_top, Action::JumpToTop);
        add_binding(&config.jump_to_bottom, Action::JumpToBottom);
        add_binding(&config.next_section, Action::NextSection);
        add_binding(&config.prev_section, Action::PrevSection);
        add_binding(&config.focus_next, Action::FocusNext);
        add_binding(&config.focus_prev, Action::FocusPrev);
        add_binding(&config.item_left, Action::ItemLeft);
        add_binding(&config.item_right, Action::ItemRight);

        // Always available regardless of configuration
        bindings.insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit);
        bindings.insert(KeyBinding::simple(KeyCode::Esc), Action::ExitMode);
        bindings.entry(KeyBinding::simple(KeyCode::Left)).or_insert(Action::ItemLeft);
        bindings.entry(KeyBinding::simple(KeyCode::Right)).or_insert(Action::ItemRight);
        bindings.entry(KeyBinding::simple(KeyCode::Up)).or_insert(Action::ScrollUp);
        bindings.entry(KeyBinding::simple(KeyCode::Down)).or_insert(Action::ScrollDown);
        bindings
            .entry(KeyBinding::simple(KeyCode::PageDown))
            .or_insert(Action::ScrollHalfPageDown);
        bindings
            .entry(KeyBinding::simple(KeyCode::PageUp))
            .or_insert(Action::ScrollHalfPageUp);

        Self {
            bindings,
            pending_g_action,
        }
    }

    pub fn get(&self, binding: &KeyBinding) -> Option<&Action> {
        self.bindings.get(binding)
    }

    pub fn pending_g_action(&self) -> Option<&Action> {
        self.pending_g_action.as_ref()
    }

    /// Whether a plain 'g' starts the "gg" sequence
    pub fn is_g_prefix(&self, binding: &KeyBinding) -> bool {
        self.pending_g_action.is_some()
            && binding.code == KeyCode::Char('g')
            && binding.modifiers == KeyModifiers::NONE
    }

    /// Bindings grouped for the help overlay, sorted by action name
    pub fn describe(&self) -> Vec<(String, String)> {
        let mut rows: Vec<(String, String)> = self
            .bindings
            .iter()
            .map(|(binding, action)| (format!("{:?}", action), format_binding(binding)))
            .collect();
        if let Some(action) = &self.pending_g_action {
            rows.push((format!("{:?}", action), "gg".to_string()));
        }
        rows.sort();
        rows
    }
}

/// Parse Vim-style key notation into a KeyBinding
/// Supported formats:
/// - Single char: "j", "G", "/", "?", "]"
/// - Ctrl: "<C-d>"
/// - Shift+Tab: "<S-Tab>"
/// - Special keys: "<CR>", "<Esc>", "<Tab>", "<Space>", "<Left>", "<PageDown>", ...
pub fn parse_key_binding(s: &str) -> Option<KeyBinding> {
    let s = s.trim();

    if s.len() > 2 && s.starts_with('<') && s.ends_with('>') {
        return parse_special_key(&s[1..s.len() - 1]);
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(KeyBinding::simple(KeyCode::Char(c))),
        _ => None,
    }
}

fn parse_special_key(inner: &str) -> Option<KeyBinding> {
    if let Some(rest) = inner.strip_prefix("C-") {
        return parse_key_name(rest).map(KeyBinding::ctrl);
    }

    if let Some(rest) = inner.strip_prefix("S-") {
        return match parse_key_name(rest)? {
            KeyCode::Tab => Some(KeyBinding::simple(KeyCode::BackTab)),
            KeyCode::Char(c) => Some(KeyBinding::simple(KeyCode::Char(c.to_ascii_uppercase()))),
            code => Some(KeyBinding::new(code, KeyModifiers::SHIFT)),
        };
    }

    parse_key_name(inner).map(KeyBinding::simple)
}

fn parse_key_name(name: &str) -> Option<KeyCode> {
    match name.to_lowercase().as_str() {
        "cr" | "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "tab" => Some(KeyCode::Tab),
        "backtab" => Some(KeyCode::BackTab),
        "space" | "spc" => Some(KeyCode::Char(' ')),
        "bs" | "backspace" => Some(KeyCode::Backspace),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" | "pgup" => Some(KeyCode::PageUp),
        "pagedown" | "pgdn" => Some(KeyCode::PageDown),
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(KeyCode::Char(c.to_ascii_lowercase())),
                _ => None,
            }
        }
    }
}

fn format_binding(binding: &KeyBinding) -> String {
    let key = match binding.code {
        KeyCode::Char(' ') => "<Space>".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "<CR>".to_string(),
        KeyCode::Esc => "<Esc>".to_string(),
        KeyCode::Tab => "<Tab>".to_string(),
        KeyCode::BackTab => "<S-Tab>".to_string(),
        other => format!("<{:?}>", other),
    };
    if binding.modifiers.contains(KeyModifiers::CONTROL) {
        format!("<C-{}>", key.trim_matches(|c| c == '<' || c == '>'))
    } else {
        key
    }
}
