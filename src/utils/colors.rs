/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Best-effort mapping of a stored display color to a terminal color.
/// Stored colors are CSS names or `#rrggbb`; hex values become 24-bit escapes.
pub fn ansi_for(color: &str) -> String {
    let c = color.trim();
    if let Some(hex) = c.strip_prefix('#')
        && hex.len() == 6
        && hex.is_ascii()
        && let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&hex[0..2], 16),
            u8::from_str_radix(&hex[2..4], 16),
            u8::from_str_radix(&hex[4..6], 16),
        )
    {
        return format!("\x1b[38;2;{r};{g};{b}m");
    }

    match c.to_ascii_lowercase().as_str() {
        "red" => RED.to_string(),
        "green" | "lime" => GREEN.to_string(),
        "yellow" | "orange" | "gold" => YELLOW.to_string(),
        "blue" | "navy" => "\x1b[34m".to_string(),
        "cyan" | "aqua" | "teal" => CYAN.to_string(),
        "magenta" | "purple" | "violet" => "\x1b[35m".to_string(),
        "grey" | "gray" | "silver" => GREY.to_string(),
        _ => RESET.to_string(),
    }
}

/// Dimmed series are drawn grey regardless of their color.
pub fn ansi_for_opacity(color: &str, opacity: f64) -> String {
    if opacity < 1.0 {
        GREY.to_string()
    } else {
        ansi_for(color)
    }
}
