use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;
use web_sys::console;

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = JsValue::from_str(&format_record(record));
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug | Level::Trace => console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

fn format_record(record: &Record) -> String {
    format!(
        "[{} {} {}] {}",
        Local::now().format("%H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

/// Routes `log` output to the browser console. Safe to call more than once;
/// later calls only change the level.
pub fn setup_logging(level: LevelFilter) {
    console_error_panic_hook::set_once();

    if log::set_boxed_logger(Box::new(ConsoleLogger)).is_err() {
        log::debug!("Console logger already installed, updating level to {}", level);
    }
    log::set_max_level(level);
}
