//! The render-then-advance loop.

use crate::{engine::GenerationEngine, render::Renderer};
use std::{io, thread, time::Duration};
use tracing::{debug, trace};

/// Whether the loop should keep going after a generation was rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Stop,
}

/// Drives a [`GenerationEngine`] through a [`Renderer`]
///
/// Each step renders the current row and then advances the engine, so the
/// initial row is always shown first.
pub struct Driver<R: Renderer> {
    engine: GenerationEngine,
    renderer: R,
    delay: Option<Duration>,
    limit: Option<u64>,
}

impl<R: Renderer> Driver<R> {
    pub fn new(engine: GenerationEngine, renderer: R) -> Self {
        Self {
            engine,
            renderer,
            delay: None,
            limit: None,
        }
    }

    /// Pause between generations, for display pacing only
    pub fn set_delay(mut self, delay: Option<Duration>) -> Self {
        self.delay = delay;
        self
    }

    /// Number of rows to render before stopping, `None` runs forever
    pub fn set_limit(mut self, limit: Option<u64>) -> Self {
        self.limit = limit;
        self
    }

    /// Renders the current row and advances once
    pub fn step(&mut self) -> io::Result<()> {
        let generation = self.engine.generation();
        self.renderer.render(generation, self.engine.current_row())?;
        self.engine.advance();
        trace!(generation, alive = self.engine.alive_count(), "advanced");
        Ok(())
    }

    /// Runs until the limit is reached or `after_step` asks to stop
    ///
    /// `after_step` sees the engine once per generation, after it advanced.
    pub fn run_with<F>(&mut self, mut after_step: F) -> io::Result<u64>
    where
        F: FnMut(&GenerationEngine, &mut R) -> io::Result<Control>,
    {
        debug!(
            rule = %self.engine.rule(),
            len = self.engine.len(),
            limit = ?self.limit,
            "starting automaton"
        );
        let mut rendered = 0;
        while self.limit.is_none_or(|limit| rendered < limit) {
            self.step()?;
            rendered += 1;
            if after_step(&self.engine, &mut self.renderer)? == Control::Stop {
                debug!(generation = self.engine.generation(), "stopped by caller");
                break;
            }
            if let Some(delay) = self.delay {
                thread::sleep(delay);
            }
        }
        Ok(rendered)
    }

    pub fn run(&mut self) -> io::Result<u64> {
        self.run_with(|_, _| Ok(Control::Continue))
    }

    #[inline]
    pub fn engine(&self) -> &GenerationEngine {
        &self.engine
    }

    pub fn into_parts(self) -> (GenerationEngine, R) {
        (self.engine, self.renderer)
    }
}
