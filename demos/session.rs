//! Scripted editing session: builds a polygon through pointer events, saves
//! it, reloads it and prints the canvas primitives.
//!
//! Run with `cargo run --example session --features tracing [out.svg]`.

use glam::dvec2;
use polyedit::defaults::{HELP_TEXT, WINDOW_TITLE};
use polyedit::{Editor, PointerEvent};
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()))
        .with_writer(std::io::stderr)
        .init();

    let out = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "session.svg".to_string());

    eprintln!("{WINDOW_TITLE}: {HELP_TEXT}");

    let mut editor = Editor::new();
    eprintln!("{}", editor.status());
    for (x, y) in [(160.0, 170.0), (250.0, 160.0), (240.0, 250.0), (170.0, 230.0)] {
        editor.handle(PointerEvent::DoubleClick(dvec2(x, y)));
        eprintln!("{}", editor.status());
    }

    // Pull the third vertex outwards
    editor.handle(PointerEvent::Press(dvec2(240.0, 250.0)));
    for step in 1..=4 {
        let d = f64::from(step) * 5.0;
        editor.handle(PointerEvent::Drag(dvec2(240.0 + d, 250.0 + d)));
    }
    editor.handle(PointerEvent::Release);

    editor.set_colors("#e0a030", "#402000");
    editor.save_to(Some(out.as_ref()))?;
    eprintln!("{}", editor.status());

    let mut reloaded = Editor::new();
    reloaded.load_from(Some(out.as_ref()))?;
    eprintln!("{}", reloaded.status());

    for primitive in reloaded.render() {
        println!("{primitive}");
    }
    Ok(())
}
