//! Explicit shop-scope handling for operations that must apply globally.
//!
//! The upgrade runner executes against all shops regardless of which shop
//! triggered it. Instead of mutating ambient global state, the current
//! scope lives in a [`ShopContext`] value and is switched through an RAII
//! guard that restores the previous scope on every exit path, including
//! unwinds.

use std::sync::Mutex;

use crate::types::DbId;

/// The shop scope an operation executes under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopScope {
    /// A single shop.
    Shop(DbId),
    /// All shops of the installation.
    All,
}

/// Holds the scope the process is currently operating under.
#[derive(Debug)]
pub struct ShopContext {
    current: Mutex<ShopScope>,
}

impl ShopContext {
    pub fn new(initial: ShopScope) -> Self {
        Self {
            current: Mutex::new(initial),
        }
    }

    /// Lock the scope, recovering from a poisoned lock. The stored scope
    /// is a plain copyable value, so a panicking holder cannot leave it
    /// half-written.
    fn lock(&self) -> std::sync::MutexGuard<'_, ShopScope> {
        match self.current.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// The scope currently in effect.
    pub fn current(&self) -> ShopScope {
        *self.lock()
    }

    /// Switch to `scope`, returning a guard that restores the previous
    /// scope when dropped.
    #[must_use = "dropping the guard immediately restores the previous scope"]
    pub fn enter(&self, scope: ShopScope) -> ScopeGuard<'_> {
        let mut current = self.lock();
        let previous = *current;
        *current = scope;
        ScopeGuard {
            context: self,
            previous,
        }
    }
}

/// Restores the prior [`ShopScope`] on drop.
pub struct ScopeGuard<'a> {
    context: &'a ShopContext,
    previous: ShopScope,
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        *self.context.lock() = self.previous;
    }
}
