//! A terminal memory-matching card game.
//!
//! Starts in a four-step setup menu unless the board is fully
//! specified on the command line.

use anyhow::Result;
use pico_args::Arguments;

use memory_match::game::entities::{board_size_for, theme_named};
use mm_tui::app::App;
use mm_tui::menu::Preset;
use mm_tui::settings::Settings;

const HELP: &str = "\
A terminal memory-matching card game

USAGE:
  mm_tui [OPTIONS]

OPTIONS:
  --theme NAME          Card theme: animals, food, nature, travel, sports
  --cards N             Board size by card count: 6, 12, 16, 20, 30, 48
  --mode MODE           Game mode: classic, timed, limited
  --players N           1 (solo) or 2 (turn-based)

FLAGS:
  --quiet               Start with sound muted
  -h, --help            Print help information
";

fn main() -> Result<()> {
    let mut pargs = Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let preset = Preset {
        players: pargs.opt_value_from_str("--players")?,
        theme: pargs.opt_value_from_fn("--theme", |s| {
            theme_named(s).ok_or("unknown theme (try: animals, food, nature, travel, sports)")
        })?,
        board_size: pargs.opt_value_from_fn("--cards", |s| {
            s.parse::<usize>()
                .ok()
                .and_then(board_size_for)
                .ok_or("unsupported card count (try: 6, 12, 16, 20, 30, 48)")
        })?,
        mode: pargs.opt_value_from_str("--mode")?,
    };

    let mut settings = Settings::load();
    if pargs.contains("--quiet") {
        settings.muted = true;
    }
    let terminal = ratatui::init();
    let result = App::new(preset, settings).and_then(|app| app.run(terminal));
    ratatui::restore();
    result
}
