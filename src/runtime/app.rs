use std::path::PathBuf;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use rfd::{MessageButtons, MessageDialog, MessageLevel};
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoopProxy};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};
use winit::window::Window;

use semicell::cli::StartupConfig;
use semicell::commands::{Cmd, NoticeLevel};
use semicell::grid::csv_io;
use semicell::messages::{AppMsg, EditMsg, FileMsg, Msg, UiMsg};
use semicell::model::AppModel;
use semicell::update::{update, BLINK_INTERVAL};

use super::input::{handle_key, KeyModifiers};
use super::mouse;
use crate::view::Renderer;

/// Two clicks on the same spot within this window form a double-click
const DOUBLE_CLICK_TIME: Duration = Duration::from_millis(400);
/// Max pointer travel between the clicks of a double-click, in pixels
const DOUBLE_CLICK_SLOP: f64 = 4.0;

/// Initial window size in logical pixels
const WINDOW_WIDTH: u32 = 600;
const WINDOW_HEIGHT: u32 = 400;

pub struct App {
    model: AppModel,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    initial_file: Option<PathBuf>,
    last_tick: Instant,
    modifiers: ModifiersState,
    mouse_position: Option<(f64, f64)>,
    last_click: Option<(Instant, (f64, f64))>,
    quit_requested: bool,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    /// Wakes the event loop when a worker has sent a message
    proxy: EventLoopProxy<()>,
}

impl App {
    pub fn new(model: AppModel, startup_config: StartupConfig, proxy: EventLoopProxy<()>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();

        Self {
            model,
            renderer: None,
            window: None,
            context: None,
            initial_file: startup_config.initial_file,
            last_tick: Instant::now(),
            modifiers: ModifiersState::empty(),
            mouse_position: None,
            last_click: None,
            quit_requested: false,
            msg_tx,
            msg_rx,
            proxy,
        }
    }

    /// Run `job` on a worker thread and feed its message back to `update`
    fn spawn_worker<F>(&self, job: F)
    where
        F: FnOnce() -> Option<Msg> + Send + 'static,
    {
        let tx = self.msg_tx.clone();
        let proxy = self.proxy.clone();
        std::thread::spawn(move || {
            if let Some(msg) = job() {
                if tx.send(msg).is_ok() {
                    let _ = proxy.send_event(());
                }
            }
        });
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attributes = Window::default_attributes()
            .with_title("semicell")
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));

        let window = Rc::new(event_loop.create_window(window_attributes)?);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow!("Failed to create softbuffer context: {}", e))?;

        let size = window.inner_size();
        self.model.window_size = (size.width, size.height);
        self.model.scale_factor = window.scale_factor();

        let renderer = Renderer::new(Rc::clone(&window), &context, &self.model)?;
        self.model
            .set_char_metrics(renderer.line_height(), renderer.char_width());

        self.renderer = Some(renderer);
        self.window = Some(window);
        self.context = Some(context);
        Ok(())
    }

    fn key_modifiers(&self) -> KeyModifiers {
        let ctrl = if cfg!(target_os = "macos") {
            self.modifiers.super_key() || self.modifiers.control_key()
        } else {
            self.modifiers.control_key()
        };
        KeyModifiers {
            ctrl,
            alt: self.modifiers.alt_key(),
        }
    }

    /// Track click timing and report whether this press completes a
    /// double-click
    fn register_click(&mut self, position: (f64, f64)) -> bool {
        let now = Instant::now();
        let double = self.last_click.is_some_and(|(at, (x, y))| {
            now.duration_since(at) < DOUBLE_CLICK_TIME
                && (position.0 - x).abs() <= DOUBLE_CLICK_SLOP
                && (position.1 - y).abs() <= DOUBLE_CLICK_SLOP
        });
        // A completed double-click does not start the next one
        self.last_click = if double { None } else { Some((now, position)) };
        double
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Option<Cmd> {
        match event {
            WindowEvent::Resized(size) => update(
                &mut self.model,
                Msg::App(AppMsg::Resize(size.width, size.height)),
            ),
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(renderer) = &mut self.renderer {
                    match renderer.set_scale_factor(*scale_factor) {
                        Ok(()) => self
                            .model
                            .set_char_metrics(renderer.line_height(), renderer.char_width()),
                        Err(e) => tracing::error!("Failed to rescale font: {:#}", e),
                    }
                }
                update(
                    &mut self.model,
                    Msg::App(AppMsg::ScaleFactorChanged(*scale_factor)),
                )
            }
            WindowEvent::ModifiersChanged(mods) => {
                self.modifiers = mods.state();
                None
            }
            WindowEvent::Focused(false) => {
                update(&mut self.model, Msg::Edit(EditMsg::FocusLost))
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return None;
                }
                let mods = self.key_modifiers();

                if mods.ctrl
                    && !mods.alt
                    && event.physical_key == PhysicalKey::Code(KeyCode::KeyV)
                    && self.model.sheet.is_editing()
                {
                    return self.paste();
                }

                handle_key(
                    &mut self.model,
                    &event.logical_key,
                    event.physical_key,
                    event.text.as_deref(),
                    mods,
                )
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_position = Some((position.x, position.y));
                mouse::handle_cursor_moved(&mut self.model, position.x, position.y)
            }
            WindowEvent::CursorLeft { .. } => {
                self.mouse_position = None;
                None
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                let (x, y) = self.mouse_position?;
                let double = self.register_click((x, y));
                mouse::handle_left_press(&mut self.model, x, y, double)
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let (h_delta, v_delta) = match delta {
                    MouseScrollDelta::LineDelta(x, y) => ((x * 3.0) as i32, (-y * 3.0) as i32),
                    MouseScrollDelta::PixelDelta(pos) => {
                        let row_height = self.model.metrics().row_height().max(1) as f64;
                        let column_width = self.model.metrics().column_width.max(1) as f64;
                        ((pos.x / column_width) as i32, (-pos.y / row_height) as i32)
                    }
                };
                // Shift turns a vertical wheel into horizontal scrolling
                let (rows, cols) = if self.modifiers.shift_key() && h_delta == 0 {
                    (0, v_delta)
                } else {
                    (v_delta, h_delta)
                };
                mouse::handle_wheel(&mut self.model, rows, cols)
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    tracing::error!("Render error: {:#}", e);
                }
                None
            }
            _ => None,
        }
    }

    fn paste(&mut self) -> Option<Cmd> {
        let text = match arboard::Clipboard::new().and_then(|mut c| c.get_text()) {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!("Clipboard paste unavailable: {}", e);
                return None;
            }
        };
        update(&mut self.model, Msg::Edit(EditMsg::InsertText(text)))
    }

    fn render(&mut self) -> Result<()> {
        if let Some(renderer) = &mut self.renderer {
            renderer.render(&self.model)?;
        }
        Ok(())
    }

    fn tick(&mut self) -> Option<Cmd> {
        update(&mut self.model, Msg::Ui(UiMsg::BlinkCursor))
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None | Cmd::Redraw => {}
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
            Cmd::Quit => self.quit_requested = true,

            // =====================================================================
            // File Dialogs (using rfd)
            // =====================================================================
            Cmd::ShowOpenFileDialog { start_dir } => self.spawn_worker(move || {
                let mut dlg = rfd::FileDialog::new().add_filter("CSV files", &["csv"]);
                if let Some(dir) = start_dir {
                    dlg = dlg.set_directory(dir);
                }
                Some(Msg::File(FileMsg::OpenDialogResult(dlg.pick_file())))
            }),
            Cmd::ShowSaveFileDialog { suggested_path } => self.spawn_worker(move || {
                let mut dlg = rfd::FileDialog::new().add_filter("CSV files", &["csv"]);
                match suggested_path {
                    Some(ref path) => {
                        if let Some(dir) = path.parent() {
                            dlg = dlg.set_directory(dir);
                        }
                        if let Some(name) = path.file_name() {
                            dlg = dlg.set_file_name(name.to_string_lossy());
                        }
                    }
                    None => dlg = dlg.set_file_name("table.csv"),
                }
                let path = dlg.save_file().map(with_csv_extension);
                Some(Msg::File(FileMsg::SaveDialogResult(path)))
            }),

            // =====================================================================
            // File I/O
            // =====================================================================
            Cmd::LoadFile { path } => {
                let delimiter = self.model.delimiter();
                self.spawn_worker(move || {
                    let result = csv_io::open(&path, delimiter);
                    Some(Msg::File(FileMsg::Loaded { path, result }))
                });
            }
            Cmd::SaveFile {
                path,
                records,
                format,
            } => {
                let delimiter = self.model.delimiter();
                self.spawn_worker(move || {
                    let result = csv_io::write_records(&path, &records, delimiter, format);
                    Some(Msg::File(FileMsg::Saved { path, result }))
                });
            }

            Cmd::ShowNotice(notice) => self.spawn_worker(move || {
                let level = match notice.level {
                    NoticeLevel::Info => MessageLevel::Info,
                    NoticeLevel::Error => MessageLevel::Error,
                };
                let _ = MessageDialog::new()
                    .set_level(level)
                    .set_title(notice.title)
                    .set_description(notice.body)
                    .set_buttons(MessageButtons::Ok)
                    .show();
                None
            }),
            Cmd::CopyToClipboard { text } => {
                if let Err(e) = arboard::Clipboard::new().and_then(|mut c| c.set_text(text)) {
                    tracing::warn!("Failed to copy to clipboard: {}", e);
                }
            }
        }
    }

    fn process_async_messages(&mut self) -> bool {
        let mut needs_redraw = false;
        while let Ok(msg) = self.msg_rx.try_recv() {
            if let Some(cmd) = update(&mut self.model, msg) {
                if cmd.needs_redraw() {
                    needs_redraw = true;
                }
                self.process_cmd(cmd);
            }
        }
        needs_redraw
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Save dialogs on some platforms return the bare name the user typed
fn with_csv_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension("csv")
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_window(event_loop) {
            tracing::error!("Failed to create window: {:#}", e);
            event_loop.exit();
            return;
        }
        if let Some(path) = self.initial_file.take() {
            if let Some(cmd) = update(&mut self.model, Msg::File(FileMsg::OpenPath(path))) {
                self.process_cmd(cmd);
            }
        }
        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        if self.window.as_ref().map(|w| w.id()) != Some(window_id) {
            return;
        }
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        if let Some(cmd) = self.handle_event(&event) {
            let needs_redraw = cmd.needs_redraw();
            self.process_cmd(cmd);
            if needs_redraw {
                self.request_redraw();
            }
        }

        if self.quit_requested {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        event_loop.set_control_flow(ControlFlow::WaitUntil(now + BLINK_INTERVAL));

        if self.process_async_messages() {
            self.request_redraw();
        }

        if now.duration_since(self.last_tick) >= BLINK_INTERVAL {
            self.last_tick = now;
            if self.tick().is_some() {
                self.request_redraw();
            }
        }

        if self.quit_requested {
            event_loop.exit();
        }
    }
}
