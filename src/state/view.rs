//! Render request bookkeeping for the transactions page.
//!
//! DESIGN
//! ======
//! Every `render` and `clear` bumps `generation`. A render captures the value
//! as its [`RenderToken`] and re-checks it after each await; if anything else
//! started in between, the response is stale and must not touch the host.
//! This makes overlapping renders resolve to the most recently *started*
//! request rather than whichever response happens to land last.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::net::types::{AccountId, RenderRequest};

/// Generation captured at the start of a render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderToken(u64);

/// Whether the page currently shows a successfully loaded account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Empty,
    Loaded,
}

#[derive(Clone, Debug, Default)]
pub struct ViewState {
    request: Option<RenderRequest>,
    /// Title last written, with the account it belongs to.
    title: Option<(AccountId, String)>,
    generation: u64,
    phase: Phase,
}

impl ViewState {
    /// Store `request` (possibly absent) and start a new generation.
    pub fn begin_render(&mut self, request: Option<RenderRequest>) -> RenderToken {
        if request.is_none() {
            self.phase = Phase::Empty;
        }
        self.request = request;
        self.generation += 1;
        RenderToken(self.generation)
    }

    #[must_use]
    pub fn is_current(&self, token: RenderToken) -> bool {
        token.0 == self.generation
    }

    /// Record the title shown for the current render.
    pub fn title_rendered(&mut self, token: RenderToken, account_name: &str) {
        if !self.is_current(token) {
            return;
        }
        if let Some(request) = &self.request {
            self.title = Some((request.account_id.clone(), account_name.to_owned()));
        }
    }

    /// Mark the current render as fully applied.
    pub fn loaded(&mut self, token: RenderToken) {
        if self.is_current(token) {
            self.phase = Phase::Loaded;
        }
    }

    /// Forget the request and invalidate any in-flight render.
    pub fn clear(&mut self) {
        self.request = None;
        self.title = None;
        self.generation += 1;
        self.phase = Phase::Empty;
    }

    #[must_use]
    pub fn request(&self) -> Option<&RenderRequest> {
        self.request.as_ref()
    }

    /// Name of the stored account, if its title has been rendered.
    #[must_use]
    pub fn account_name(&self) -> Option<&str> {
        let request = self.request.as_ref()?;
        match &self.title {
            Some((id, name)) if *id == request.account_id => Some(name.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
