use aig2cnf::SignalMap;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use env_logger::Env;

/// Logs to stderr at `info` unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

/// Renders the variable/signal mapping as a table.
pub fn mapping_table(signals: &SignalMap) -> Table {
    let mut table = Table::new();

    table
        .load_preset(comfy_table::presets::UTF8_HORIZONTAL_ONLY)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Var", "Signal"]);

    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    for (var, name) in &signals.var_to_signal {
        table.add_row(vec![Cell::new(var), Cell::new(name)]);
    }

    table
}
