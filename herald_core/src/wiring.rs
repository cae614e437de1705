// Copyright 2026 the Herald Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listener bookkeeping.
//!
//! [`ListenerSet`] records which [`Listener`]s the bar has asked its host to
//! deliver. Attaching goes through [`ListenerSet::attach`] and detaching
//! through [`ListenerSet::detach`]; both consult the set first, so a host
//! sees every listener added at most once and removed exactly once.

use core::fmt;

use crate::host::{Listener, ListenerHost};

/// A set of attached [`Listener`]s.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ListenerSet(u8);

const fn bit(listener: Listener) -> u8 {
    match listener {
        Listener::PointerEnter => 1 << 0,
        Listener::PointerLeave => 1 << 1,
        Listener::VisibilityChange => 1 << 2,
        Listener::ViewportChange => 1 << 3,
    }
}

impl ListenerSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The hover and visibility listeners of interactive mode.
    pub const INTERACTION: Self = Self(
        bit(Listener::PointerEnter) | bit(Listener::PointerLeave) | bit(Listener::VisibilityChange),
    );

    /// Returns `true` if `listener` is in the set.
    #[inline]
    #[must_use]
    pub const fn contains(self, listener: Listener) -> bool {
        self.0 & bit(listener) != 0
    }

    /// Returns `true` if no listener is attached.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns only the hover and visibility listeners of this set.
    #[inline]
    #[must_use]
    pub const fn interaction(self) -> Self {
        Self(self.0 & Self::INTERACTION.0)
    }

    /// Number of listeners in the set.
    #[inline]
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Iterates the members in [`Listener::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = Listener> {
        Listener::ALL.into_iter().filter(move |&l| self.contains(l))
    }

    /// Asks `host` to deliver `listener` unless it already does.
    ///
    /// Returns `true` if the host was called.
    pub fn attach(&mut self, listener: Listener, host: &mut impl ListenerHost) -> bool {
        if self.contains(listener) {
            return false;
        }
        host.add_listener(listener);
        self.0 |= bit(listener);
        true
    }

    /// Asks `host` to stop delivering `listener` if it currently does.
    ///
    /// Returns `true` if the host was called.
    pub fn detach(&mut self, listener: Listener, host: &mut impl ListenerHost) -> bool {
        if !self.contains(listener) {
            return false;
        }
        host.remove_listener(listener);
        self.0 &= !bit(listener);
        true
    }
}

impl fmt::Debug for ListenerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
