// framechart: stack-frame layout charts in the terminal

use std::io;
use std::path::Path;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use framechart::chart;
use framechart::config;
use framechart::render::{render, Attribution, JsonRenderer, RenderOptions};
use framechart::ui::App;

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} <config.json> [--json] [--no-attribution]", program_name);
    eprintln!();
    eprintln!("  --json             print chart descriptions as JSON instead of opening the viewer");
    eprintln!("  --no-attribution   omit the attribution link");
    eprintln!();
    eprintln!("Set {}=debug for diagnostics.", framechart::logging::LOG_ENV);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    framechart::logging::init();

    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("framechart");

    let mut path = None;
    let mut json = false;
    let mut attribution = true;
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "--no-attribution" => attribution = false,
            "-h" | "--help" => {
                print_usage(program_name);
                return Ok(());
            }
            other if other.starts_with("--") => {
                eprintln!("Error: Unknown option '{}'", other);
                print_usage(program_name);
                std::process::exit(1);
            }
            other => path = Some(other),
        }
    }

    let Some(path) = path else {
        eprintln!("Error: No config file provided");
        eprintln!();
        print_usage(program_name);
        std::process::exit(1);
    };

    let configs = match config::load(Path::new(path)) {
        Ok(configs) => configs,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let options = if attribution {
        RenderOptions::with_attribution()
    } else {
        RenderOptions::default()
    };

    if json {
        let mut renderer = JsonRenderer::new(io::stdout().lock());
        for config in &configs {
            render(config, &mut renderer, &options)?;
        }
        renderer.finish()?;
        return Ok(());
    }

    let charts = configs.iter().map(chart::build).collect();
    let link = attribution.then(Attribution::default);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(charts, link);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
