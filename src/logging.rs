use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(on: bool) {
    VERBOSE.store(on, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// `[HH:MM:SS] [tag] msg` を stderr に出す
pub fn log(tag: &str, msg: impl Display) {
    eprintln!(
        "[{}] [{}] {}",
        chrono::Local::now().format("%H:%M:%S%.3f"),
        tag,
        msg
    );
}

/// verbose 設定時のみ出力
pub fn debug(tag: &str, msg: impl Display) {
    if is_verbose() {
        log(tag, msg);
    }
}
