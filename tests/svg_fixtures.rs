use datatest_stable::Utf8Path;
use glam::dvec2;
use polyedit::{Editor, Outcome};

/// Every fixture is loaded through the editor. Files named `invalid_*` must
/// be rejected without touching the session; the rest must load and come
/// back unchanged from a save/load cycle.
fn check_fixture(path: &Utf8Path) -> datatest_stable::Result<()> {
    let name = path.file_name().unwrap_or_default();
    if name.starts_with("invalid_") {
        check_rejected(path)
    } else {
        check_round_trip(path)
    }
}

fn check_rejected(path: &Utf8Path) -> datatest_stable::Result<()> {
    let mut editor = Editor::new();
    for p in [dvec2(190.0, 190.0), dvec2(230.0, 190.0), dvec2(210.0, 230.0)] {
        editor.handle_double_click(p);
    }
    editor.set_colors("gold", "maroon");
    let before = editor.polygon().clone();

    match editor.load_from(Some(path.as_std_path())) {
        Ok(outcome) => Err(format!("{path}: expected rejection, got {outcome:?}").into()),
        Err(err) => {
            if editor.polygon() != &before {
                return Err(format!("{path}: model changed by failed load ({err})").into());
            }
            if !editor.status().starts_with("Failed to load") {
                return Err(format!("{path}: unexpected status {:?}", editor.status()).into());
            }
            Ok(())
        }
    }
}

fn check_round_trip(path: &Utf8Path) -> datatest_stable::Result<()> {
    let mut editor = Editor::new();
    let outcome = editor.load_from(Some(path.as_std_path()))?;
    if outcome != Outcome::Done {
        return Err(format!("{path}: load reported {outcome:?}").into());
    }
    if editor.polygon().is_empty() {
        return Err(format!("{path}: no vertices loaded").into());
    }

    let dir = tempfile::tempdir()?;
    let copy = dir.path().join("copy.svg");
    editor.save_to(Some(&copy))?;

    let mut reloaded = Editor::new();
    reloaded.load_from(Some(&copy))?;
    if reloaded.polygon() != editor.polygon() {
        return Err(format!(
            "{path}: round trip changed the polygon\n  before: {:?}\n  after:  {:?}",
            editor.polygon(),
            reloaded.polygon()
        )
        .into());
    }
    Ok(())
}

datatest_stable::harness! {
    { test = check_fixture, root = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures"), pattern = r"\.svg$" },
}
