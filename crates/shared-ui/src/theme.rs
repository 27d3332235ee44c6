use dioxus::prelude::*;
use shared_types::DEFAULT_ACCENT_COLOR;

/// Whether `s` is a `#rgb` or `#rrggbb` hex color.
pub fn is_hex_color(s: &str) -> bool {
    let Some(hex) = s.strip_prefix('#') else {
        return false;
    };
    matches!(hex.len(), 3 | 6) && hex.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Expand `#rgb` to `#rrggbb`; other valid colors pass through lowercased.
fn normalize(color: &str) -> String {
    let hex = &color[1..];
    if hex.len() == 3 {
        let mut out = String::from("#");
        for c in hex.chars() {
            out.push(c);
            out.push(c);
        }
        out.to_ascii_lowercase()
    } else {
        color.to_ascii_lowercase()
    }
}

/// Black or white, whichever reads better on `accent`.
///
/// Uses the WCAG relative-luminance midpoint.
pub fn on_accent(accent: &str) -> &'static str {
    let color = if is_hex_color(accent) {
        normalize(accent)
    } else {
        DEFAULT_ACCENT_COLOR.to_string()
    };
    let channel = |i: usize| {
        let v = u8::from_str_radix(&color[i..i + 2], 16).unwrap_or(0) as f64 / 255.0;
        if v <= 0.039_28 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    };
    let luminance = 0.2126 * channel(1) + 0.7152 * channel(3) + 0.0722 * channel(5);
    if luminance > 0.179 {
        "#111827"
    } else {
        "#ffffff"
    }
}

/// Inline CSS custom properties for the brand accent.
///
/// Invalid input falls back to [`DEFAULT_ACCENT_COLOR`] so a bad stored
/// preference never injects arbitrary CSS.
pub fn accent_style(accent: &str) -> String {
    let color = if is_hex_color(accent) {
        normalize(accent)
    } else {
        DEFAULT_ACCENT_COLOR.to_string()
    };
    format!("--cm-accent: {color}; --cm-on-accent: {};", on_accent(&color))
}

/// Root element that scopes the brand palette to its children.
#[component]
pub fn BrandTheme(accent: String, children: Element) -> Element {
    let style = accent_style(&accent);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./theme.css") }
        div { class: "cm-theme", style: "{style}", {children} }
    }
}
