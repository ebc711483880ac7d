mod cli;

use std::path::Path;

use dockyard::{
    tracker_markers, Dock, DockConfig, DockError, LiveWidget, PanelEngine, TabCallbacks,
    WidgetRegistry,
};
use dockyard_tracker::memory::{MemoryHost, MemoryWidget, NodeId};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

const WORKBENCH: &str = include_str!("workbench.json");
const DEFAULT_FILTER: &str = "dockyard=info";

/// Widget kinds the built-in session uses.
const KINDS: [&str; 5] = ["EXPLORER", "EDITOR", "TERMINAL", "DEBUG", "OUTPUT"];

fn load_config(path: Option<&Path>) -> dockyard::Result<DockConfig> {
    let config = match path {
        Some(path) => dockyard_config::load_from_path(path)?,
        None => dockyard_config::load_config()?,
    };
    dockyard_config::validate(&config)?;
    Ok(config)
}

fn init_logging(directive: &str) {
    let filter = EnvFilter::from_default_env();
    let filter = match directive.parse::<Directive>() {
        Ok(directive) => filter.add_directive(directive),
        Err(e) => {
            eprintln!("ignoring invalid log directive {directive:?}: {e}");
            filter
        }
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn logging_callbacks() -> TabCallbacks<NodeId, MemoryWidget> {
    TabCallbacks::<NodeId, MemoryWidget>::new()
        .on_tab_added(|tab| {
            tracing::info!(
                tab_id = %tab.tab_id,
                widget_id = ?tab.widget().and_then(|w| w.id()),
                closable = tab.closable,
                "tab added"
            );
        })
        .on_tab_removed(|tab| {
            tracing::info!(tab_id = %tab.tab_id, "tab removed");
        })
        .on_tab_activated(|tab| {
            tracing::info!(tab_id = ?tab.map(|t| t.tab_id.as_str()), "tab activated");
        })
}

fn find_widget(dock: &Dock<MemoryHost>, id: &str) -> dockyard::Result<MemoryWidget> {
    dock.host()
        .and_then(|host| host.widgets().into_iter().find(|w| w.id == id))
        .ok_or_else(|| DockError::Other(format!("no widget with id {id:?}")))
}

fn run(args: &cli::Args, config: DockConfig) -> dockyard::Result<()> {
    let json = match &args.layout {
        Some(path) => std::fs::read_to_string(path)?,
        None => WORKBENCH.to_string(),
    };

    let host = MemoryHost::with_markers(tracker_markers(&config.markers));

    let registry = KINDS
        .into_iter()
        .fold(WidgetRegistry::new(), |registry, kind| {
            registry.with(kind, MemoryWidget::from_config)
        });
    let mut dock = Dock::new(config, registry).with_callbacks(logging_callbacks());
    dock.load(host, &json)?;

    if let Some(id) = &args.activate {
        let widget = find_widget(&dock, id)?;
        dock.activate(&widget)?;
    }
    for id in &args.close {
        let widget = find_widget(&dock, id)?;
        if let Some(host) = dock.host_mut() {
            host.remove_widget(&widget);
        }
        dock.pump();
    }

    let count = dock.count();
    tracing::info!(
        widgets = count.widgets,
        panels = count.panels,
        splits = dock.split_count(),
        tabs = dock.tabs().len(),
        "dock ready"
    );

    let layout = dock.save_json()?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, &layout)?;
            tracing::info!(path = %path.display(), "layout written");
        }
        None => println!("{layout}"),
    }

    dock.dispose();
    Ok(())
}

fn main() {
    let args = cli::parse();

    // Logging needs the config's filter, so the config is read first and
    // its errors are reported once the subscriber is up.
    let config = load_config(args.config.as_deref());
    let directive = args
        .log_level
        .clone()
        .or_else(|| config.as_ref().ok().map(|c| c.logging.filter.clone()))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string());
    init_logging(&directive);

    tracing::info!("dockyard v{} starting", env!("CARGO_PKG_VERSION"));
    if let Some(path) = &args.config {
        tracing::info!("using config override: {}", path.display());
    }
    let config = config.unwrap_or_else(|e| {
        tracing::warn!("config load failed, using defaults: {e}");
        DockConfig::default()
    });

    if let Err(e) = run(&args, config) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
