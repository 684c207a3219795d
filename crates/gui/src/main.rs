mod app;
mod ui;
mod viewport;

// Re-export library modules so that `crate::state`, `crate::i18n`, etc.
// resolve to the lib crate types everywhere in the binary.
pub use boxtrude_gui_lib::i18n;
pub use boxtrude_gui_lib::state;

use app::BoxtrudeApp;
use shared::BoxDimensions;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "boxtrude=info,boxtrude_gui_lib=info".into()),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let initial = parse_size_arg(&args);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Boxtrude — Box Extrusion")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "boxtrude",
        native_options,
        Box::new(move |cc| Ok(Box::new(BoxtrudeApp::new(cc, initial)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}

/// Parse `--size W H D`. Returns the unit cube when absent or malformed.
fn parse_size_arg(args: &[String]) -> BoxDimensions {
    let Some(pos) = args.iter().position(|a| a == "--size") else {
        return BoxDimensions::UNIT;
    };

    let values: Vec<Result<f64, _>> = args[pos + 1..]
        .iter()
        .take(3)
        .map(|s| s.parse::<f64>())
        .collect();

    match values.as_slice() {
        [Ok(w), Ok(h), Ok(d)] if [*w, *h, *d].iter().all(|v| v.is_finite() && *v > 0.0) => {
            tracing::info!("Initial size from command line: {w} x {h} x {d}");
            BoxDimensions::new(*w, *h, *d)
        }
        _ => {
            tracing::warn!("Ignoring --size: expected three positive numbers");
            BoxDimensions::UNIT
        }
    }
}
