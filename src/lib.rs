mod cli;
mod controller;
mod events;
mod page;
mod scaffold;
mod settings;
mod theme;

use anyhow::Context as _;

pub use cli::{Args as CliArgs, EventArg, StartTheme};
pub use controller::{PreferenceSink, ThemeToggleController};
pub use events::InputEvent;
pub use page::{PageView, add_class, get_attr, has_class, remove_class};
pub use scaffold::build_page;
pub use settings::SettingsFile;
pub use theme::{DARK_MARKER, LIGHT_MARKER, ThemeState};

pub fn run(args: CliArgs) -> anyhow::Result<()> {
    let page = match (args.scaffold, &args.input) {
        (Some(start), _) => PageView::parse(&scaffold::build_page(start.into())),
        (None, Some(path)) => PageView::from_file(path)?,
        (None, None) => anyhow::bail!("either --input or --scaffold is required"),
    };

    let sink: Option<Box<dyn PreferenceSink>> = args
        .settings
        .clone()
        .map(|path| Box::new(SettingsFile::new(path)) as Box<dyn PreferenceSink>);

    match ThemeToggleController::bind(&page, &args.toggle_id, &args.icon_id, sink) {
        Some(mut controller) => {
            for event_arg in &args.events {
                let event = to_input_event(*event_arg, &args.toggle_id);
                controller.dispatch(&event);
            }
        }
        // Missing elements disable the feature; the page passes through
        // untouched so the host document is never broken.
        None => tracing::warn!("no events dispatched; writing page through unchanged"),
    }

    let html = page.to_html()?;
    match &args.out {
        Some(path) => std::fs::write(path, html)
            .with_context(|| format!("write {}", path.display()))?,
        None => {
            use std::io::Write as _;
            std::io::stdout()
                .write_all(html.as_bytes())
                .context("write stdout")?;
        }
    }
    Ok(())
}

fn to_input_event(arg: EventArg, toggle_id: &str) -> InputEvent {
    match arg {
        EventArg::Click => InputEvent::click(toggle_id),
        EventArg::CtrlK => InputEvent::Key {
            key: 'k',
            ctrl: true,
            meta: false,
        },
        EventArg::CmdK => InputEvent::Key {
            key: 'k',
            ctrl: false,
            meta: true,
        },
    }
}
