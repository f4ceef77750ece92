//! Held-key tracking for terminals.
//!
//! Terminals report key presses, and only some report releases. When
//! releases are available a key is held from press to release. Otherwise a
//! key counts as held until no press or auto-repeat for it has arrived
//! within the release timeout.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::platform::{InputSource, Key, PlatformError};
use crate::sim::MAX_SHOP_SLOTS;

// Long enough to bridge the pause before terminal auto-repeat kicks in.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 300;

/// Map a terminal key code to a game key
pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::Right),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c @ '1'..='9') => {
            let slot = c as usize - '1' as usize;
            (slot < MAX_SHOP_SLOTS).then_some(Key::Buy(slot))
        }
        _ => None,
    }
}

/// Ctrl-C or `q` ends the game
pub fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

#[derive(Debug, Clone)]
pub struct TerminalInput {
    /// Held keys and when each was last seen pressed
    held: HashMap<Key, Instant>,
    release_events: bool,
    release_timeout: Duration,
    quit: bool,
}

impl TerminalInput {
    pub fn new(release_events: bool) -> Self {
        Self {
            held: HashMap::new(),
            release_events,
            release_timeout: Duration::from_millis(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
            quit: false,
        }
    }

    pub fn with_release_timeout(mut self, timeout: Duration) -> Self {
        self.release_timeout = timeout;
        self
    }

    /// Feed one terminal event
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            Event::Key(key) => self.handle_key(key, now),
            Event::FocusLost => self.held.clear(),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                if key.kind == KeyEventKind::Press && is_quit(&key) {
                    self.quit = true;
                    return;
                }
                if let Some(k) = map_key(key.code) {
                    self.held.insert(k, now);
                }
            }
            KeyEventKind::Release => {
                if let Some(k) = map_key(key.code) {
                    self.held.remove(&k);
                }
            }
        }
    }

    /// Drop keys that timed out. Only used without release events.
    pub fn expire(&mut self, now: Instant) {
        if self.release_events {
            return;
        }
        let timeout = self.release_timeout;
        self.held
            .retain(|_, seen| now.saturating_duration_since(*seen) <= timeout);
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> Result<(), PlatformError> {
        while event::poll(Duration::ZERO)? {
            let event = event::read()?;
            self.handle_event(event, Instant::now());
        }
        self.expire(Instant::now());
        Ok(())
    }

    fn is_key_held(&self, key: Key) -> bool {
        self.held.contains_key(&key)
    }

    fn quit_requested(&self) -> bool {
        self.quit
    }
}
