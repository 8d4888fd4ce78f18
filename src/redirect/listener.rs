//! Redirect alteration hooks

use std::fmt;
use std::sync::Arc;

/// Options used when rendering the redirect URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectOptions {
    pub absolute: bool,
    pub query: Vec<(String, String)>,
}

impl Default for RedirectOptions {
    fn default() -> Self {
        Self {
            absolute: true,
            query: Vec::new(),
        }
    }
}

impl RedirectOptions {
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set a query parameter, replacing any existing value
    pub fn set_query<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key = key.into();
        let value = value.into();
        match self.query.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.query.push((key, value)),
        }
    }

    pub fn remove_query(&mut self, key: &str) {
        self.query.retain(|(k, _)| k != key);
    }
}

/// Redirect about to be issued; listeners may rewrite it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectEvent {
    pub url: String,
    pub options: RedirectOptions,
}

impl RedirectEvent {
    pub fn new<S: Into<String>>(url: S, options: RedirectOptions) -> Self {
        Self {
            url: url.into(),
            options,
        }
    }
}

/// Hook invoked before a login redirect is issued
pub trait RedirectListener: Send + Sync {
    fn on_redirect(&self, event: &mut RedirectEvent);
}

impl<F> RedirectListener for F
where
    F: Fn(&mut RedirectEvent) + Send + Sync,
{
    fn on_redirect(&self, event: &mut RedirectEvent) {
        self(event)
    }
}

/// Listeners applied in registration order
#[derive(Clone, Default)]
pub struct RedirectListeners {
    listeners: Vec<Arc<dyn RedirectListener>>,
}

impl fmt::Debug for RedirectListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedirectListeners")
            .field("count", &self.listeners.len())
            .finish()
    }
}

impl RedirectListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, listener: Arc<dyn RedirectListener>) {
        self.listeners.push(listener);
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn dispatch(&self, event: &mut RedirectEvent) {
        for listener in &self.listeners {
            listener.on_redirect(event);
        }
    }
}
