use std::io::IsTerminal;
use std::sync::OnceLock;

static NO_COLOR: OnceLock<bool> = OnceLock::new();

/// Colors are written to stderr only, so stderr decides whether they are shown.
pub fn init(no_color_flag: bool) {
    let _ = NO_COLOR
        .set(no_color_flag || std::env::var_os("NO_COLOR").is_some() || !std::io::stderr().is_terminal());
}

fn is_disabled() -> bool {
    *NO_COLOR.get().unwrap_or(&false)
}

mod codes {
    pub const RESET: &str = "\x1b[0m";
    pub const RED: &str = "\x1b[31m";
    pub const DIM: &str = "\x1b[90m";
}

pub struct Colors;

impl Colors {
    fn paint(code: &str, text: &str) -> String {
        if is_disabled() {
            text.to_string()
        } else {
            format!("{}{}{}", code, text, codes::RESET)
        }
    }

    pub fn error(text: &str) -> String {
        Self::paint(codes::RED, text)
    }

    pub fn dim(text: &str) -> String {
        Self::paint(codes::DIM, text)
    }
}
