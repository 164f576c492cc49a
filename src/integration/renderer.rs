use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use crate::{core::state::AppState, infrastructure::tui, presentation::components::Components};

/// Draws the component tree onto whichever terminal the runner owns
#[derive(Debug, Default)]
pub struct Renderer {
    components: Components,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            components: Components::new(),
        }
    }

    pub async fn render(
        &self,
        tui: &Arc<Mutex<dyn tui::TuiLike + Send>>,
        state: &AppState,
    ) -> Result<()> {
        let mut guard = tui.lock().await;
        let mut draw = |f: &mut ratatui::Frame<'_>| {
            self.components.render(f, state);
        };
        guard.draw(&mut draw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{config::Config, tui::test::TestTui};

    #[tokio::test]
    async fn renderer_renders_with_test_tui() -> Result<()> {
        let test_tui = Arc::new(Mutex::new(TestTui::new(80, 24)?));
        let tui: Arc<Mutex<dyn tui::TuiLike + Send>> = test_tui.clone();
        let state = AppState::new(Config::embedded()?);

        Renderer::new().render(&tui, &state).await?;
        Renderer::new().render(&tui, &state).await?;

        assert_eq!(test_tui.lock().await.draw_count(), 2);
        Ok(())
    }
}
