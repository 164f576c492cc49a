use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::layout::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{cmd::TuiCommand, raw_msg::RawMsg, state::AppState},
    infrastructure::{
        config::Config,
        tui::{self, event_source::EventSource},
    },
    integration::{renderer::Renderer, runtime::Runtime},
};

/// Host loop: terminal events in, frames out
///
/// The terminal is injected, so the same loop runs on a real terminal or on
/// [`TestTui`](crate::infrastructure::tui::test::TestTui) with a scripted [`EventSource`].
pub struct AppRunner {
    runtime: Runtime,
    renderer: Renderer,
    tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    events: EventSource,
    tui_rx: mpsc::UnboundedReceiver<TuiCommand>,
}

impl AppRunner {
    pub fn new_with_config(
        config: Config,
        tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
        events: EventSource,
    ) -> Self {
        Self::new_with_runtime(Runtime::new(AppState::new(config)), tui, events)
    }

    pub fn new_with_runtime(
        mut runtime: Runtime,
        tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
        events: EventSource,
    ) -> Self {
        let (tui_tx, tui_rx) = mpsc::unbounded_channel();
        runtime.add_tui_sender(tui_tx);
        Self {
            runtime,
            renderer: Renderer::new(),
            tui,
            events,
            tui_rx,
        }
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Run until quit is requested or the event source is exhausted
    pub async fn run(&mut self) -> Result<()> {
        let size = {
            let mut tui = self.tui.lock().await;
            tui.enter()?;
            tui.size()?
        };
        // Lay out the first frame for the real terminal size
        self.runtime
            .send_raw_msg(RawMsg::Resize(size.width, size.height));
        self.runtime.run_update_cycle();
        self.render().await?;

        while self.run_one_cycle().await? {}

        self.tui.lock().await.exit()?;
        Ok(())
    }

    /// Handle one terminal event. Returns `false` once the loop should stop.
    pub async fn run_one_cycle(&mut self) -> Result<bool> {
        let Some(event) = self.events.next().await else {
            log::info!("Event source closed");
            return Ok(false);
        };

        let mut should_render = false;
        match event {
            tui::Event::Tick(elapsed) => self.runtime.send_raw_msg(RawMsg::Tick(elapsed)),
            tui::Event::Render => should_render = true,
            tui::Event::Resize(w, h) => self.runtime.send_raw_msg(RawMsg::Resize(w, h)),
            tui::Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key)),
            tui::Event::Mouse(mouse) => self.runtime.send_raw_msg(RawMsg::Mouse(mouse)),
            tui::Event::Quit | tui::Event::Closed => self.runtime.send_raw_msg(RawMsg::Quit),
            tui::Event::Error => self
                .runtime
                .send_raw_msg(RawMsg::Error("Terminal event stream error".to_string())),
            tui::Event::Init => {}
        }

        for line in self.runtime.run_update_cycle() {
            log::trace!("{line}");
        }

        // Handle commands that require immediate host reaction
        while let Ok(command) = self.tui_rx.try_recv() {
            match command {
                TuiCommand::Resize { width, height } => {
                    self.tui
                        .lock()
                        .await
                        .resize(Rect::new(0, 0, width, height))?;
                    should_render = true;
                }
            }
        }

        if self.runtime.state().system.should_quit {
            return Ok(false);
        }

        if self.runtime.state().system.should_suspend {
            {
                let mut tui = self.tui.lock().await;
                tui.suspend()?;
                tui.resume()?;
            }
            self.runtime.send_raw_msg(RawMsg::Resume);
            self.runtime.run_update_cycle();
            should_render = true;
        }

        if should_render {
            self.render().await?;
        }
        Ok(true)
    }

    async fn render(&mut self) -> Result<()> {
        self.renderer.render(&self.tui, self.runtime.state()).await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        domain::section::Section,
        infrastructure::tui::{test::TestTui, TuiLike},
    };

    fn runner_with(
        events: Vec<tui::Event>,
    ) -> Result<(AppRunner, Arc<Mutex<TestTui>>)> {
        let test_tui = Arc::new(Mutex::new(TestTui::new(100, 30)?));
        let runner = AppRunner::new_with_config(
            Config::embedded()?,
            test_tui.clone(),
            EventSource::test(events),
        );
        Ok((runner, test_tui))
    }

    #[tokio::test]
    async fn test_initial_resize_uses_terminal_size() -> Result<()> {
        let (mut runner, test_tui) = runner_with(vec![])?;
        runner.run().await?;

        assert_eq!(
            runner.runtime().state().system.viewport,
            Rect::new(0, 0, 100, 30)
        );
        assert_eq!(test_tui.lock().await.draw_count(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_quit_stops_the_loop() -> Result<()> {
        let (mut runner, _) = runner_with(vec![tui::Event::Quit])?;
        assert!(!runner.run_one_cycle().await?);
        assert!(runner.runtime().state().system.should_quit);
        Ok(())
    }

    #[tokio::test]
    async fn test_render_only_when_asked() -> Result<()> {
        let (mut runner, test_tui) = runner_with(vec![
            tui::Event::Tick(Duration::from_millis(25)),
            tui::Event::Render,
        ])?;
        assert!(runner.run_one_cycle().await?);
        assert_eq!(test_tui.lock().await.draw_count(), 0);
        assert!(runner.run_one_cycle().await?);
        assert_eq!(test_tui.lock().await.draw_count(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_resize_event_resizes_terminal() -> Result<()> {
        let (mut runner, test_tui) = runner_with(vec![tui::Event::Resize(120, 40)])?;
        runner.run_one_cycle().await?;

        let tui = test_tui.lock().await;
        assert_eq!(tui.size()?, ratatui::layout::Size::new(120, 40));
        assert_eq!(tui.draw_count(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_suspend_resumes() -> Result<()> {
        let (mut runner, test_tui) = runner_with(vec![tui::Event::Key(KeyEvent::new(
            KeyCode::Char('z'),
            KeyModifiers::CONTROL,
        ))])?;
        assert!(runner.run_one_cycle().await?);

        assert!(!runner.runtime().state().system.should_suspend);
        assert_eq!(test_tui.lock().await.draw_count(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_keys_drive_navigation_after_boot() -> Result<()> {
        let (mut runner, _) = runner_with(vec![
            tui::Event::Tick(Duration::from_secs(10)),
            tui::Event::Key(KeyEvent::new(KeyCode::F(2), KeyModifiers::NONE)),
        ])?;
        runner.run().await?;
        assert_eq!(runner.runtime().state().active_section(), Section::Logs);
        Ok(())
    }
}
