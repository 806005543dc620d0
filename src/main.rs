// SPDX-License-Identifier: MPL-2.0
use iced_alert::app::{self, Flags};
use std::path::PathBuf;

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();
    let config_path: Option<PathBuf> = match args.opt_value_from_str("--config") {
        Ok(path) => path,
        Err(err) => {
            log::warn!("Ignoring --config: {err}");
            None
        }
    };
    for unused in args.finish() {
        log::warn!("Ignoring unknown argument {unused:?}");
    }

    app::run(Flags { config_path })
}
