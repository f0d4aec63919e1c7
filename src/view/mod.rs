use serde::{Deserialize, Serialize};

use crate::error::{CarouselError, CarouselResult};

/// One host-side effect.
///
/// Offsets are "distance scrolled" in px from the first slide; a DOM host
/// applies `translateX(-offset)`, a GTK host scrolls its adjustment. The
/// engine guarantees indicator commands are page-based (never one dot per
/// slide) and that `RebuildIndicators` is issued whenever the page count
/// changes, so hosts can recreate their dot widgets on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ViewCommand {
    SetOffset { offset: f64, animate: bool },
    RebuildIndicators { page_count: usize },
    HighlightIndicator { page: usize },
    SetNavEnabled { prev: bool, next: bool },
}

impl ViewCommand {
    pub fn validate(self) -> CarouselResult<()> {
        if let Self::SetOffset { offset, .. } = self {
            if !offset.is_finite() {
                return Err(CarouselError::InvalidCommand(format!(
                    "offset must be finite, got {offset}"
                )));
            }
        }
        Ok(())
    }
}

/// Contract implemented by any host view.
///
/// Hosts receive fully resolved commands so mutation code stays isolated
/// from layout and navigation logic; the engine can be driven headless by
/// substituting [`NullView`].
pub trait CarouselView {
    fn apply(&mut self, command: ViewCommand) -> CarouselResult<()>;
}

/// No-op view used by tests and headless engine usage.
///
/// It validates and records every command so tests can assert both the
/// effects and their order, and prove that nothing is applied after
/// destruction.
#[derive(Debug, Default)]
pub struct NullView {
    pub commands: Vec<ViewCommand>,
    pub last_offset: Option<f64>,
    pub last_page_count: Option<usize>,
    pub last_highlight: Option<usize>,
    pub rebuild_count: usize,
}

impl NullView {
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }
}

impl CarouselView for NullView {
    fn apply(&mut self, command: ViewCommand) -> CarouselResult<()> {
        command.validate()?;
        match command {
            ViewCommand::SetOffset { offset, .. } => self.last_offset = Some(offset),
            ViewCommand::RebuildIndicators { page_count } => {
                self.last_page_count = Some(page_count);
                self.rebuild_count += 1;
            }
            ViewCommand::HighlightIndicator { page } => self.last_highlight = Some(page),
            ViewCommand::SetNavEnabled { .. } => {}
        }
        self.commands.push(command);
        Ok(())
    }
}
