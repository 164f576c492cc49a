use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;

use color_eyre::eyre::Result;
use futures::future;
use ratatui::backend::{Backend, TestBackend};
use ratatui::prelude::*;

use crate::infrastructure::tui::{Event, Frame, TuiLike};

/// Test-oriented TUI implementation backed by ratatui::backend::TestBackend.
/// - enter/exit are no-ops (no raw mode / alternate screen).
/// - next() returns events from an internal queue (non-blocking, immediate).
/// - draw() increments an internal counter for assertions.
pub struct TestTui {
    term: Terminal<TestBackend>,
    events: VecDeque<Event>,
    draws: usize,
}

impl TestTui {
    pub fn new(width: u16, height: u16) -> Result<Self> {
        let backend = TestBackend::new(width, height);
        let term = Terminal::new(backend)?;
        Ok(Self {
            term,
            events: VecDeque::new(),
            draws: 0,
        })
    }

    pub fn with_events(
        width: u16,
        height: u16,
        events: impl IntoIterator<Item = Event>,
    ) -> Result<Self> {
        let mut this = Self::new(width, height)?;
        this.events.extend(events);
        Ok(this)
    }

    /// The screen as last drawn, for content assertions.
    pub fn backend(&self) -> &TestBackend {
        self.term.backend()
    }

    /// Expose draw count for tests.
    pub fn draw_count(&self) -> usize {
        self.draws
    }

    /// Enqueue a single event for tests.
    pub fn enqueue_event(&mut self, ev: Event) {
        self.events.push_back(ev);
    }

    fn resize_impl(&mut self, area: Rect) -> Result<()> {
        self.term.backend_mut().resize(area.width, area.height);
        Ok(())
    }
}

impl TuiLike for TestTui {
    fn enter(&mut self) -> Result<()> {
        // no-op for test UI
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        // no-op for test UI
        Ok(())
    }

    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()> {
        self.term.draw(|frame| f(frame))?;
        self.draws += 1;
        Ok(())
    }

    fn resize(&mut self, area: Rect) -> Result<()> {
        self.resize_impl(area)
    }

    fn size(&self) -> Result<Size> {
        Ok(self.term.backend().size()?)
    }

    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>> {
        let ev = self.events.pop_front();
        Box::pin(future::ready(ev))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn test_events_are_replayed_in_order() -> Result<()> {
        let mut tui = TestTui::with_events(
            10,
            5,
            [Event::Tick(Duration::from_millis(25)), Event::Render],
        )?;
        assert_eq!(tui.next().await, Some(Event::Tick(Duration::from_millis(25))));
        assert_eq!(tui.next().await, Some(Event::Render));
        assert_eq!(tui.next().await, None);
        Ok(())
    }

    #[test]
    fn test_draw_and_resize() -> Result<()> {
        let mut tui = TestTui::new(10, 5)?;
        tui.draw(&mut |frame| {
            frame.render_widget(Line::raw("hi"), frame.area());
        })?;
        assert_eq!(tui.draw_count(), 1);

        tui.resize(Rect::new(0, 0, 20, 8))?;
        assert_eq!(tui.size()?, Size::new(20, 8));
        Ok(())
    }
}
