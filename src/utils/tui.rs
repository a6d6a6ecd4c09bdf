use indicatif::{ProgressBar, ProgressStyle};

/// Spinner on stderr while a blocking query runs (hidden when not a terminal).
pub fn create_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{msg} {spinner}") {
        spinner.set_style(style.tick_strings(&["-", "\\", "|", "/"]));
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}
