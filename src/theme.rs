use crate::{RENAMER_LOGLEVEL, RENAMER_STYLE};
use env_logger::{fmt::Color, Builder, Env};
use log::Level;
use std::io::Write;

pub fn init_logger() {
    let env = Env::default()
        .filter_or(RENAMER_LOGLEVEL, "info")
        .write_style(RENAMER_STYLE);

    Builder::from_env(env)
        .format(|buf, record| {
            let mut style = buf.style();
            let level = match record.level() {
                Level::Warn => style.set_color(Color::Yellow).value("   warn"),
                Level::Info => style.set_color(Color::Green).value("   info"),
                Level::Error => style.set_color(Color::Red).value("   error"),
                Level::Debug => style.set_color(Color::Blue).value("   debug"),
                Level::Trace => style
                    .set_color(Color::Blue)
                    .set_bold(true)
                    .value("   trace"),
            };

            writeln!(buf, "{} {}", level, record.args())
        })
        .init();
}
