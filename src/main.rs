// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        theme: args.opt_value_from_str("--theme").unwrap_or(None),
        screen: args.opt_value_from_str("--screen").unwrap_or(None),
    };

    app::run(flags)
}
