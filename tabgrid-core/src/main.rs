//! src/main.rs
//! Record grid viewer over a JSON dataset, with client and server pagination

use std::{
    io::{self, Stdout},
    panic::PanicHookInfo,
    sync::Arc,
};

use anyhow::{Context, Result};
use crossterm::{
    event::{Event as TerminalEvent, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use serde_json::json;
use tokio::{
    signal,
    sync::{Notify, mpsc},
};
use tracing::{debug, error, info, warn};

use tabgrid_core::{
    config::Config,
    controller::{
        actions::{Action, TaskResult},
        event_processor::process_event,
    },
    logging::{self, LoggerConfig},
    model::{
        column::{ColumnSpec, FilterOption, FilterSpec, TextAlign},
        record::{Record, RecordId},
        table_model::{TableIntent, TableModel, TableOptions, TableSpec},
        ui_state::{UIOverlay, UIState},
    },
    source::{
        json::load_records,
        paged::{LocalPagedSource, PageQuery, PagedSource},
    },
    view::ui::UIRenderer,
};

type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_handler();

    let config = Config::load().await.unwrap_or_else(|e| {
        eprintln!("Failed to load config, using defaults: {e}");
        Config::default()
    });

    let _log_guard = logging::init(&LoggerConfig {
        log_level: config.log_level.clone(),
        ..LoggerConfig::default()
    })
    .context("Failed to initialize logging")?;

    let app = App::new(config)
        .await
        .context("Failed to initialize application")?;
    app.run().await.context("Application runtime error")?;

    info!("Application exited cleanly");
    Ok(())
}

struct App {
    terminal: AppTerminal,
    model: TableModel,
    ui: UIState,
    renderer: UIRenderer,
    source: LocalPagedSource,
    task_tx: mpsc::UnboundedSender<TaskResult>,
    task_rx: mpsc::UnboundedReceiver<TaskResult>,
    shutdown: Arc<Notify>,
}

impl App {
    async fn new(config: Config) -> Result<Self> {
        info!("Starting record grid viewer");

        let terminal = setup_terminal().context("Failed to initialize terminal")?;

        let records = match std::env::args().nth(1) {
            Some(path) => load_records(path.as_ref())
                .await
                .with_context(|| format!("Failed to load records from {path}"))?,
            None => sample_records(),
        };

        let source = LocalPagedSource::new(records.clone());
        let model = TableModel::with_records(site_table_spec(&config), records);

        let mut ui = UIState::default();
        if config.show_help_on_start {
            ui.overlay = UIOverlay::Help;
        }

        let (task_tx, task_rx) = mpsc::unbounded_channel::<TaskResult>();
        let shutdown = Arc::new(Notify::new());

        info!("Application initialized successfully");

        Ok(Self {
            terminal,
            model,
            ui,
            renderer: UIRenderer::new(),
            source,
            task_tx,
            task_rx,
            shutdown,
        })
    }

    async fn run(mut self) -> Result<()> {
        self.setup_shutdown_handler();
        info!("Starting event loop");

        let mut event_stream = EventStream::new();

        loop {
            self.render()?;

            tokio::select! {
                _ = self.shutdown.notified() => {
                    info!("Shutdown signal received");
                    break;
                }

                maybe_event = event_stream.next() => {
                    if let Some(Ok(terminal_event)) = maybe_event
                        && let Some(action) = process_event(&terminal_event, &self.ui)
                    {
                        if matches!(action, Action::Quit) {
                            info!("Quit action from terminal event");
                            break;
                        }
                        self.apply_action(action).await;
                    }
                }

                maybe_result = self.task_rx.recv() => {
                    if let Some(result) = maybe_result {
                        self.apply_task_result(result).await;
                    }
                }
            }
        }

        info!("Event loop terminated cleanly");
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let model = &self.model;
        let ui = &self.ui;
        let renderer = &self.renderer;

        self.terminal
            .draw(|frame: &mut Frame<'_>| {
                renderer.render(frame, model, ui);
            })
            .context("Failed to draw terminal")?;

        Ok(())
    }

    async fn apply_action(&mut self, action: Action) {
        debug!("Applying action: {action:?}");

        match action {
            Action::CursorUp => self.model.cursor_up(),
            Action::CursorDown => self.model.cursor_down(),
            Action::NextPage => self.model.next_page(),
            Action::PrevPage => self.model.prev_page(),
            Action::CyclePageSize => self.model.cycle_page_size(),
            Action::SortColumn(index) => self.model.toggle_sort_column(index),

            Action::NextFilter => {
                self.ui.next_filter(self.model.spec().filters.len());
            }
            Action::CycleFilterValue => {
                let field = self
                    .model
                    .spec()
                    .filters
                    .get(self.ui.active_filter)
                    .map(|filter| filter.field.clone());
                if let Some(field) = field {
                    self.model.cycle_filter(&field);
                }
            }

            Action::ToggleSelect => self.model.toggle_cursor_row(),
            Action::ToggleSelectAll => self.model.toggle_select_all(),
            Action::BulkDelete => self.model.bulk_delete(),
            Action::Activate => self.model.activate_cursor_row(),

            Action::OpenSearch => self.ui.overlay = UIOverlay::Search,
            Action::SearchInput(c) => {
                let mut term = self.model.search_term().to_string();
                term.push(c);
                self.model.set_global_search(term);
            }
            Action::SearchBackspace => {
                let mut term = self.model.search_term().to_string();
                term.pop();
                self.model.set_global_search(term);
            }
            Action::CloseSearch { clear } => {
                if clear {
                    self.model.set_global_search("");
                }
                self.ui.overlay = UIOverlay::None;
            }

            Action::ToggleHelp => {
                self.ui.overlay = if self.ui.overlay == UIOverlay::Help {
                    UIOverlay::None
                } else {
                    UIOverlay::Help
                };
            }

            Action::ToggleMode => self.toggle_mode().await,

            Action::Quit | Action::Resize(..) | Action::NoOp => {}
        }

        self.handle_intents();
    }

    async fn toggle_mode(&mut self) {
        if self.model.is_server() {
            let records = self.source.snapshot().await;
            self.model.set_mode_client(records);
            self.ui.message("client pagination");
            info!("Switched to client pagination mode");
        } else {
            self.model.set_mode_server();
            self.ui.message("server pagination");
            info!("Switched to server pagination mode");
            self.spawn_fetch(0);
        }
    }

    /// React to the intents recorded by the last mutation. In server mode any
    /// view-state change triggers a fresh page query.
    fn handle_intents(&mut self) {
        for intent in self.model.drain_intents() {
            match intent {
                TableIntent::PaginationChanged { page_index, .. } => {
                    if self.model.is_server() {
                        self.spawn_fetch(page_index);
                    }
                }

                TableIntent::FiltersChanged(_)
                | TableIntent::GlobalSearchChanged(_)
                | TableIntent::SortChanged(_) => {
                    if self.model.is_server() {
                        self.spawn_fetch(0);
                    }
                }

                TableIntent::SelectionChanged(records) => {
                    debug!(count = records.len(), "selection changed");
                }

                TableIntent::RowActivated(record) => {
                    let name = record.field_text("name");
                    self.ui.message(format!("opened {name}"));
                    info!(%name, "row activated");
                }

                TableIntent::BulkDeleteRequested(ids) => {
                    self.spawn_delete(ids);
                }
            }
        }
    }

    async fn apply_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::Page(slice) => {
                self.ui.busy = false;
                self.model.set_server_page(slice);
            }

            TaskResult::Deleted { count } => {
                self.ui.busy = false;
                self.ui.message(format!("{count} deleted"));
                info!(count, "bulk delete finished");

                if self.model.is_server() {
                    self.spawn_fetch(self.model.display_page_index());
                } else {
                    let records = self.source.snapshot().await;
                    self.model.set_records(records);
                }
            }

            TaskResult::Failed(message) => {
                self.ui.busy = false;
                warn!("Background task failed: {message}");
                self.ui.message(message);
            }
        }
    }

    fn page_query(&self, page_index: usize) -> PageQuery {
        PageQuery {
            search: self.model.search_term().to_string(),
            search_keys: self.model.search_keys(),
            filters: self.model.filters().clone(),
            sort: self.model.sort_state().cloned(),
            page_index,
            page_size: self.model.page_size(),
        }
    }

    fn spawn_fetch(&mut self, page_index: usize) {
        self.ui.busy = true;

        let query = self.page_query(page_index);
        let source = self.source.clone();
        let task_tx = self.task_tx.clone();

        tokio::spawn(async move {
            let result = match source.fetch(query).await {
                Ok(slice) => TaskResult::Page(slice),
                Err(e) => TaskResult::Failed(e.to_string()),
            };
            let _ = task_tx.send(result);
        });
    }

    fn spawn_delete(&mut self, ids: Vec<RecordId>) {
        self.ui.busy = true;

        let source = self.source.clone();
        let task_tx = self.task_tx.clone();

        tokio::spawn(async move {
            let result = match source.delete(&ids).await {
                Ok(count) => TaskResult::Deleted { count },
                Err(e) => TaskResult::Failed(e.to_string()),
            };
            let _ = task_tx.send(result);
        });
    }

    fn setup_shutdown_handler(&self) {
        let shutdown = self.shutdown.clone();

        tokio::spawn(async move {
            #[cfg(unix)]
            {
                use tokio::signal::unix::{SignalKind, signal};

                let mut sigterm =
                    signal(SignalKind::terminate()).expect("Failed to create SIGTERM handler");

                tokio::select! {
                    _ = sigterm.recv() => info!("Received SIGTERM"),
                    _ = signal::ctrl_c() => info!("Received Ctrl+C"),
                }
            }

            #[cfg(not(unix))]
            {
                if let Err(e) = signal::ctrl_c().await {
                    warn!("Failed to listen for Ctrl+C: {e}");
                    return;
                }
                info!("Received Ctrl+C");
            }

            shutdown.notify_one();
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Err(e) = cleanup_terminal(&mut self.terminal) {
            warn!("Failed to cleanup terminal: {e}");
        }
    }
}

/// Column, filter and option setup for the bundled site dataset.
fn site_table_spec(config: &Config) -> TableSpec {
    let columns = vec![
        ColumnSpec::new("name", "Name").sortable(),
        ColumnSpec::new("code", "Code")
            .sortable()
            .width(ratatui::layout::Constraint::Length(8)),
        ColumnSpec::new("commune.cercle.name", "Cercle").sortable(),
        ColumnSpec::new("commune.name", "Commune").sortable(),
        ColumnSpec::new("is_active", "Active")
            .align(TextAlign::Center)
            .width(ratatui::layout::Constraint::Length(8))
            .render(|record| {
                match record.field("is_active").and_then(serde_json::Value::as_bool) {
                    Some(true) => "yes".to_string(),
                    _ => "no".to_string(),
                }
            }),
    ];

    let filters = vec![
        FilterSpec::new(
            "is_active",
            "Active",
            vec![
                FilterOption::new("true", "Active"),
                FilterOption::new("false", "Inactive"),
            ],
        ),
        FilterSpec::new(
            "commune.cercle.name",
            "Cercle",
            vec![
                FilterOption::new("Kati", "Kati"),
                FilterOption::new("Kita", "Kita"),
                FilterOption::new("Dioïla", "Dioïla"),
            ],
        ),
    ];

    TableSpec::new(columns).filters(filters).options(TableOptions {
        striped: config.striped,
        row_height: config.row_height,
        header_style: config.header_style,
        empty_text: "No matching records".to_string(),
        enable_bulk_delete: true,
        initial_page_size: config.page_size,
        searchable: vec![
            "name".to_string(),
            "code".to_string(),
            "commune.name".to_string(),
            "commune.cercle.name".to_string(),
        ],
    })
}

/// Built-in dataset used when no JSON file is given on the command line.
fn sample_records() -> Vec<Record> {
    let cercles = ["Kati", "Kita", "Dioïla"];
    let communes = [
        ("Kambila", 0),
        ("Siby", 0),
        ("Mandé", 0),
        ("Kita Nord", 1),
        ("Sébékoro", 1),
        ("Banco", 2),
        ("Wacoro", 2),
    ];

    (1..=42)
        .map(|i| {
            let (commune, cercle_index) = communes[i % communes.len()];
            Record::new(json!({
                "id": i,
                "name": format!("Site {i:03}"),
                "code": format!("S-{i:04}"),
                "commune": {
                    "name": commune,
                    "cercle": { "name": cercles[cercle_index] },
                },
                "is_active": i % 3 != 0,
            }))
        })
        .collect()
}

fn setup_terminal() -> Result<AppTerminal> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    info!("Terminal setup complete");
    Ok(terminal)
}

fn cleanup_terminal(terminal: &mut AppTerminal) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    info!("Terminal cleanup complete");
    Ok(())
}

fn setup_panic_handler() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info: &PanicHookInfo<'_>| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);

        error!("Application panicked: {panic_info}");
        original_hook(panic_info);
    }));
}
