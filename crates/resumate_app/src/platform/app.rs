use std::borrow::Cow;
use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use resumate_core::{update, Msg, WizardState, WizardViewModel};
use resumate_logging::{app_debug, app_info, app_warn};

use super::effects::EffectRunner;
use super::logging;
use super::ui::input::{self, Command};
use super::ui::render;
use crate::config::Args;

/// Everything the main loop reacts to, from either the terminal or the engine.
pub enum Inbox {
    Line(String),
    InputClosed,
    Core(Msg),
}

pub fn run_app(args: Args) -> anyhow::Result<()> {
    logging::initialize(&args.log_file, resumate_logging::parse_level(&args.log_level));
    app_info!(
        "resumate starting api_url={} output_dir={}",
        args.api_url,
        args.output_dir.display()
    );

    let settings = args
        .engine_settings()
        .context("invalid --api-url / RESUMATE_API_URL")?;
    let (inbox_tx, inbox_rx) = mpsc::channel::<Inbox>();
    let effects = EffectRunner::new(settings, inbox_tx.clone()).context("starting engine")?;
    spawn_stdin_reader(inbox_tx);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut app = App::new(effects);
    write_lines(&mut out, &render::render(&app.view()))?;

    for event in inbox_rx {
        let flow = app.handle(event);
        if let Some(lines) = app.take_output() {
            write_lines(&mut out, &lines)?;
        }
        if flow == Flow::Quit {
            break;
        }
    }
    app_info!("resumate exiting");
    Ok(())
}

fn spawn_stdin_reader(inbox: mpsc::Sender<Inbox>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        forward_lines(stdin.lock(), &inbox);
    });
}

/// Forwards every line of `reader` to the inbox, then reports the end of input.
/// Bytes that are not UTF-8 are replaced rather than ending the session.
fn forward_lines(mut reader: impl BufRead, inbox: &mpsc::Sender<Inbox>) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                app_warn!("stdin read failed: {}", err);
                break;
            }
        }
        let line = match String::from_utf8_lossy(&buf) {
            Cow::Borrowed(text) => text.to_owned(),
            Cow::Owned(text) => {
                app_warn!("stdin line was not valid UTF-8; replaced invalid bytes");
                text
            }
        };
        let line = line.trim_end_matches(['\r', '\n']).to_owned();
        if inbox.send(Inbox::Line(line)).is_err() {
            return;
        }
    }
    let _ = inbox.send(Inbox::InputClosed);
}

fn write_lines(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

struct App {
    state: WizardState,
    effects: EffectRunner,
    pending_output: Vec<String>,
    input_closed: bool,
}

impl App {
    fn new(effects: EffectRunner) -> Self {
        Self {
            state: WizardState::new(),
            effects,
            pending_output: Vec::new(),
            input_closed: false,
        }
    }

    fn view(&self) -> WizardViewModel {
        self.state.view()
    }

    fn handle(&mut self, event: Inbox) -> Flow {
        match event {
            Inbox::Line(line) => match input::translate(&self.view(), &line) {
                Command::Dispatch(msg) => self.dispatch_msg(msg),
                Command::Help => self.pending_output.extend(render::help()),
                Command::Unknown(cmd) => self
                    .pending_output
                    .push(format!("Unknown command {cmd}; type :help for a list.")),
                Command::Quit => return Flow::Quit,
                Command::Ignore => {}
            },
            Inbox::Core(msg) => self.dispatch_msg(msg),
            Inbox::InputClosed => {
                app_debug!("stdin closed");
                self.input_closed = true;
            }
        }

        // With no more input, stay only as long as work is outstanding.
        if self.input_closed && !is_busy(&self.view()) {
            return Flow::Quit;
        }
        Flow::Continue
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.pending_output.extend(render::render(&state.view()));
        }
        self.state = state;
        self.effects.enqueue(effects);
    }

    fn take_output(&mut self) -> Option<Vec<String>> {
        if self.pending_output.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.pending_output))
        }
    }
}

fn is_busy(view: &WizardViewModel) -> bool {
    view.loading || view.downloads.iter().any(|row| row.in_flight > 0)
}
