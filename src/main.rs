//! foo-greet: mounts a Foo provider and consumer and draws one inline frame.
//!
//! Usage: foo-greet [MESSAGE] [--standalone]

use std::io;
use std::process::ExitCode;

use foo_context::services::config::{load_config, GreeterConfig, InvalidConfig};
use foo_context::ui::backend::terminal::RatatuiTerminal;
use foo_context::ui::geom::Rect;
use foo_context::{App, Element, Foo, FooProvider};

mod logging;

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    message: Option<String>,
    standalone: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Args {
    let mut out = Args::default();
    for arg in args {
        match arg.as_str() {
            "--standalone" => out.standalone = true,
            _ if out.message.is_none() => out.message = Some(arg),
            _ => {}
        }
    }
    out
}

fn main() -> ExitCode {
    let args = parse_args(std::env::args().skip(1));
    let loaded = load_config();
    let log_filter = match &loaded {
        Ok(config) => config.log_filter.clone(),
        Err(_) => GreeterConfig::default().log_filter,
    };
    let logging = logging::init(&log_filter);
    let config = config_or_default(loaded);

    let element = if args.standalone {
        Element::new(Foo)
    } else {
        let message = args.message.unwrap_or_else(|| config.message.clone());
        Element::new(FooProvider::new(message)).child(Element::new(Foo))
    };

    let mut app = App::new();
    if let Err(err) = app.mount(element) {
        tracing::error!(error = %err, "mount failed");
        eprintln!("{err}");
        if let Some(logging) = &logging {
            eprintln!("logs: {}", logging.log_dir().display());
        }
        return ExitCode::FAILURE;
    }

    if let Err(err) = draw(&app, config.width, config.height) {
        tracing::error!(error = %err, "draw failed");
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Falls back to the defaults for an invalid config file. Call after logging is
/// installed so the warning is kept.
fn config_or_default(loaded: Result<GreeterConfig, InvalidConfig>) -> GreeterConfig {
    loaded.unwrap_or_else(|err| {
        tracing::warn!(
            path = %err.path().display(),
            error = %err,
            "invalid config, using defaults"
        );
        GreeterConfig::default()
    })
}

fn draw(app: &App, width: u16, height: u16) -> io::Result<()> {
    let mut terminal = RatatuiTerminal::inline(io::stdout(), height)?;
    let mut result = Ok(0);
    terminal.draw(|backend, area| {
        let area = Rect::new(area.x, area.y, area.w.min(width), area.h);
        result = app.draw(backend, area);
    })?;
    terminal.finish()?;
    println!();
    result.map(|_| ()).map_err(io::Error::other)
}

#[cfg(test)]
#[path = "../tests/unit/main.rs"]
mod tests;
