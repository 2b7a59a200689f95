// SPDX-License-Identifier: MPL-2.0
use iced_toasts::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        config_path: args.opt_value_from_str("--config").unwrap_or_else(|err| {
            eprintln!("[WARN] Ignoring --config: {err}");
            None
        }),
        max_toasts: args.opt_value_from_str("--max-toasts").unwrap_or_else(|err| {
            eprintln!("[WARN] Ignoring --max-toasts: {err}");
            None
        }),
    };

    app::run(flags)
}
