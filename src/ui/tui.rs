use std::{
    ops::{Deref, DerefMut},
    time::Duration,
};

use color_eyre::eyre::Result;

use crossterm::event::EventStream;
use flume::{Receiver, Sender};
use futures::{FutureExt, StreamExt};
use ratatui::crossterm::{
    cursor,
    event::{
        DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseEvent,
    },
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend as Backend, crossterm};
use tokio::task::JoinHandle;

const TICK_RATE: Duration = Duration::from_millis(33);

#[derive(Clone, Debug)]
pub enum TerminalEvent {
    Init,
    Quit,
    Tick,
    FocusGained,
    FocusLost,
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

pub struct Tui {
    pub terminal: ratatui::Terminal<Backend<std::io::Stdout>>,
    pub event_rx: Receiver<TerminalEvent>,
    pub event_tx: Sender<TerminalEvent>,
    pub mouse: bool,
    pub focus: bool,
    reader: Option<JoinHandle<()>>,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let terminal = ratatui::Terminal::new(Backend::new(std::io::stdout()))?;
        let (event_tx, event_rx) = flume::unbounded();

        Ok(Self {
            terminal,
            event_rx,
            event_tx,
            mouse: false,
            focus: false,
            reader: None,
        })
    }

    pub fn mouse(mut self, mouse: bool) -> Self {
        self.mouse = mouse;
        self
    }

    /// Report focus changes so output can pause while the terminal is in the background.
    pub fn focus(mut self, focus: bool) -> Self {
        self.focus = focus;
        self
    }

    pub fn start(&mut self) {
        let event_tx = self.event_tx.clone();

        let reader = tokio::spawn(async move {
            let mut reader = EventStream::new();
            let mut tick_interval = tokio::time::interval(TICK_RATE);
            loop {
                let tick_delay = tick_interval.tick();
                let crossterm_event = reader.next().fuse();

                let event = tokio::select! {
                    _ = tick_delay => TerminalEvent::Tick,
                    maybe_event = crossterm_event => match maybe_event {
                        Some(Ok(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                            TerminalEvent::Key(key)
                        }
                        Some(Ok(CrosstermEvent::Mouse(mouse))) => TerminalEvent::Mouse(mouse),
                        Some(Ok(CrosstermEvent::Resize(x, y))) => TerminalEvent::Resize(x, y),
                        Some(Ok(CrosstermEvent::FocusLost)) => TerminalEvent::FocusLost,
                        Some(Ok(CrosstermEvent::FocusGained)) => TerminalEvent::FocusGained,
                        Some(Ok(_)) => continue,
                        Some(Err(e)) => {
                            tracing::error!("Terminal input error: {e}");
                            continue;
                        }
                        // stdin closed
                        None => TerminalEvent::Quit,
                    },
                };

                let is_quit = matches!(event, TerminalEvent::Quit);
                if event_tx.send_async(event).await.is_err() || is_quit {
                    break;
                }
            }
        });

        self.reader = Some(reader);
    }

    pub fn enter(&mut self) -> Result<()> {
        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(std::io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        if self.mouse {
            crossterm::execute!(std::io::stdout(), EnableMouseCapture)?;
        }
        if self.focus {
            crossterm::execute!(std::io::stdout(), EnableFocusChange)?;
        }
        self.start();
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        if let Some(reader) = self.reader.take() {
            reader.abort();
        }

        if crossterm::terminal::is_raw_mode_enabled()? {
            self.flush()?;
            if self.focus {
                crossterm::execute!(std::io::stdout(), DisableFocusChange)?;
            }
            if self.mouse {
                crossterm::execute!(std::io::stdout(), DisableMouseCapture)?;
            }
            Self::restore()?;
        }
        Ok(())
    }

    pub fn restore() -> Result<()> {
        crossterm::execute!(std::io::stdout(), LeaveAlternateScreen, cursor::Show)?;
        crossterm::terminal::disable_raw_mode()?;
        Ok(())
    }

    #[allow(clippy::should_implement_trait)]
    pub async fn next(&self) -> Option<TerminalEvent> {
        self.event_rx.recv_async().await.ok()
    }
}

impl Deref for Tui {
    type Target = ratatui::Terminal<Backend<std::io::Stdout>>;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for Tui {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if let Err(e) = self.exit() {
            tracing::error!("Failed to restore terminal: {e}");
        }
    }
}
