use super::map_widget::TerminalMap;
use super::{handlers, ui};
use crate::{
    config::ResolvedConfig,
    controller::AtlasController,
    error::Result,
    form::MemoryForm,
    map::{MapClick, MapView, Pin},
    storage::{FileSlot, KeyValueSlot, MemoryStore},
    web::open_store,
};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Form,
    DeleteConfirm,
}

/// Footer message, cleared on the next key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Info(String),
    Error(String),
}

pub struct App<S: KeyValueSlot = FileSlot> {
    pub controller: AtlasController<S, TerminalMap>,
    pub input_mode: InputMode,
    pub show_help: bool,
    pub message: Option<Message>,
    /// Memory the delete modal is asking about
    pub pending_delete: Option<i64>,
}

impl<S: KeyValueSlot> App<S> {
    pub fn new(store: MemoryStore<S>, view: MapView) -> Self {
        let mut controller = AtlasController::new(store, TerminalMap::new(view));
        let count = controller.start();

        Self {
            controller,
            input_mode: InputMode::Normal,
            show_help: false,
            message: Some(Message::Info(format!("{} memories loaded", count))),
            pending_delete: None,
        }
    }

    pub fn map(&self) -> &TerminalMap {
        self.controller.canvas()
    }

    pub fn map_mut(&mut self) -> &mut TerminalMap {
        self.controller.canvas_mut()
    }

    pub fn form(&self) -> &MemoryForm {
        self.controller.form()
    }

    pub fn form_mut(&mut self) -> &mut MemoryForm {
        self.controller.form_mut()
    }

    pub fn selected_pin(&self) -> Option<&Pin> {
        self.map().selected()
    }

    /// Opens the memory form at the keyboard cursor.
    pub fn open_form_at_cursor(&mut self) {
        let at = self.map().cursor();
        self.controller.on_map_click(at);
        self.input_mode = InputMode::Form;
    }

    /// A mouse click on the map: pins get selected, empty surface opens the form.
    pub fn handle_map_click(&mut self, column: u16, row: u16) {
        match self.map().click_at(column, row) {
            Some(MapClick::Pin(handle)) => self.map_mut().select(handle),
            Some(MapClick::Surface(at)) => {
                self.map_mut().set_cursor(at);
                self.map_mut().deselect();
                self.controller.on_map_click(at);
                self.input_mode = InputMode::Form;
            }
            None => {}
        }
    }

    pub fn submit_form(&mut self) {
        match self.controller.submit_form() {
            Ok(memory) => {
                self.input_mode = InputMode::Normal;
                if let Some(handle) = self.controller.pin_for(memory.id).map(|p| p.handle) {
                    self.map_mut().select(handle);
                }
                self.message = Some(Message::Info(format!("Pinned memory {}", memory.id)));
            }
            Err(e) => {
                // Form stays open so the input can be fixed
                self.message = Some(Message::Error(e.to_string()));
            }
        }
    }

    pub fn cancel_form(&mut self) {
        self.controller.cancel_form();
        self.input_mode = InputMode::Normal;
    }

    /// Asks for confirmation before deleting the selected pin's memory.
    pub fn request_delete_selected(&mut self) {
        if let Some(id) = self.selected_pin().map(Pin::memory_id) {
            self.pending_delete = Some(id);
            self.input_mode = InputMode::DeleteConfirm;
        }
    }

    /// The confirmation modal answered yes.
    pub fn confirm_delete(&mut self) -> Result<()> {
        self.input_mode = InputMode::Normal;
        let Some(id) = self.pending_delete.take() else {
            return Ok(());
        };

        let deleted = self.controller.request_delete(id, &mut |_: &str| true)?;
        if deleted {
            self.message = Some(Message::Info(format!("Deleted memory {}", id)));
        }
        Ok(())
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
        self.input_mode = InputMode::Normal;
    }

    /// Rebuilds all pins from the store, keeping the view.
    pub fn refresh(&mut self) {
        let count = self.controller.reload();
        self.message = Some(Message::Info(format!("Reloaded {} memories", count)));
    }
}

pub fn run_tui(resolved: ResolvedConfig) -> Result<()> {
    let view = resolved.config.map.initial_view()?;
    let mut app = App::new(open_store(&resolved), view);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "Terminal UI failed");
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                // Clear message on any key press; handlers may set a new one
                app.message = None;
                if handlers::handle_key(app, key) {
                    return Ok(());
                }
            }
            Event::Mouse(mouse_event) => handlers::handle_mouse(app, mouse_event),
            _ => {}
        }
    }
}
