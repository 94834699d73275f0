//! Transient success/warning banners.
//!
//! A banner dismisses itself [`BANNER_TTL`] after it was shown. Each `show`
//! hands out a sequence number and the dismiss timer carries it, so a timer
//! started for an older banner never clears a newer one of the same kind.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

use std::future::Future;
use std::time::Duration;

use leptos::prelude::*;

/// How long a banner stays on screen.
pub const BANNER_TTL: Duration = Duration::from_millis(3000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Warning,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub message: String,
    pub seq: u64,
}

/// Both banner slots of a list view; they can be visible at the same time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Banners {
    pub success: Option<Banner>,
    pub warning: Option<Banner>,
    next_seq: u64,
}

impl Banners {
    /// Show `message` in the `kind` slot, replacing what was there.
    /// Returns the sequence number the dismiss timer must present.
    pub fn show(&mut self, kind: BannerKind, message: String) -> u64 {
        self.next_seq += 1;
        let seq = self.next_seq;
        *self.slot_mut(kind) = Some(Banner { message, seq });
        seq
    }

    /// Clear the `kind` slot if it still holds banner `seq`.
    pub fn dismiss(&mut self, kind: BannerKind, seq: u64) {
        let slot = self.slot_mut(kind);
        if slot.as_ref().is_some_and(|banner| banner.seq == seq) {
            *slot = None;
        }
    }

    /// Message currently shown in the `kind` slot.
    pub fn message(&self, kind: BannerKind) -> Option<&str> {
        let slot = match kind {
            BannerKind::Success => &self.success,
            BannerKind::Warning => &self.warning,
        };
        slot.as_ref().map(|banner| banner.message.as_str())
    }

    fn slot_mut(&mut self, kind: BannerKind) -> &mut Option<Banner> {
        match kind {
            BannerKind::Success => &mut self.success,
            BannerKind::Warning => &mut self.warning,
        }
    }
}

/// Show `message` in the `kind` slot now and return the future that clears it
/// once `timer` resolves. Production passes a [`BANNER_TTL`] sleep.
pub fn flash<T>(
    banners: RwSignal<Banners>,
    kind: BannerKind,
    message: String,
    timer: T,
) -> impl Future<Output = ()>
where
    T: Future<Output = ()>,
{
    let seq = banners.try_update(|b| b.show(kind, message));
    async move {
        timer.await;
        if let Some(seq) = seq {
            banners.update(|b| b.dismiss(kind, seq));
        }
    }
}
