use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use log::debug;
use ratatui::crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use ratatui::crossterm::execute;

use super::{App, SessionOutcome};

const POLL_INTERVAL: Duration = Duration::from_millis(50);
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

impl App<'_> {
	/// Take over the terminal and run until the user accepts or cancels.
	pub fn run(&mut self) -> Result<SessionOutcome> {
		let mut terminal = ratatui::init();
		if let Err(err) = execute!(io::stdout(), EnableMouseCapture) {
			debug!("mouse capture unavailable: {err}");
		}

		let result = self.event_loop(&mut terminal);

		let _ = execute!(io::stdout(), DisableMouseCapture);
		ratatui::restore();
		result
	}

	fn event_loop(&mut self, terminal: &mut ratatui::DefaultTerminal) -> Result<SessionOutcome> {
		terminal.clear().context("failed to clear the terminal")?;

		let (event_tx, event_rx) = mpsc::channel();
		let running = Arc::new(AtomicBool::new(true));
		let running_flag = Arc::clone(&running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while running_flag.load(Ordering::Relaxed) {
				if event::poll(POLL_INTERVAL)? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending = VecDeque::new();
		let result: Result<SessionOutcome> = 'event_loop: loop {
			self.pump_dataset_updates();
			if self.is_loading() {
				self.throbber_state.calc_next();
			}

			loop {
				match event_rx.try_recv() {
					Ok(event) => pending.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			let mut outcome = None;
			while let Some(event) = pending.pop_front() {
				match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => {
						outcome = self.handle_key(key);
						if outcome.is_some() {
							break;
						}
					}
					Event::Mouse(mouse) => self.handle_mouse(mouse),
					_ => {}
				}
			}
			if let Some(outcome) = outcome {
				break Ok(outcome);
			}

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break Err(err).context("failed to draw the terminal");
			}

			thread::sleep(FRAME_INTERVAL);
		};

		running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(panic) => std::panic::resume_unwind(panic),
		}

		result
	}
}
