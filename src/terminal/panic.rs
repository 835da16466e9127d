use super::setup::emergency_restore;
use std::panic;

/// Chain a panic hook that restores the terminal before the panic report
/// is printed. Call before creating the [`TerminalManager`](super::TerminalManager).
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        original_hook(panic_info);
    }));
}
