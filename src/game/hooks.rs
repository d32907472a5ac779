//! Round notification callbacks

/// Optional callbacks fired on round transitions
///
/// Each fires at most once per round: `on_round_start` when the board's word
/// search completes and the clock starts, `on_round_end` when time runs out.
#[derive(Default)]
pub struct RoundHooks {
    on_round_start: Option<Box<dyn FnMut()>>,
    on_round_end: Option<Box<dyn FnMut()>>,
}

impl RoundHooks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on_round_start(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_round_start = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn on_round_end(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_round_end = Some(Box::new(hook));
        self
    }

    pub(crate) fn round_started(&mut self) {
        if let Some(hook) = self.on_round_start.as_mut() {
            hook();
        }
    }

    pub(crate) fn round_ended(&mut self) {
        if let Some(hook) = self.on_round_end.as_mut() {
            hook();
        }
    }
}

impl std::fmt::Debug for RoundHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoundHooks")
            .field("on_round_start", &self.on_round_start.is_some())
            .field("on_round_end", &self.on_round_end.is_some())
            .finish()
    }
}
