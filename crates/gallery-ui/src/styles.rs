//! Inline style declarations for the gallery and its cards.
//!
//! Static parts of the layout are plain declaration strings. The badge and the
//! action button depend on stock, so they are pure functions of `in_stock`.

/// Badge background for available products.
pub const IN_STOCK_GREEN: &str = "#2ecc71";
/// Badge background for unavailable products.
pub const OUT_OF_STOCK_RED: &str = "#e74c3c";
/// Button background when the action is enabled.
pub const ACTION_BLUE: &str = "#3498db";
/// Button background when the action is disabled.
pub const DISABLED_GREY: &str = "#bdc3c7";

/// Wrapping, centered flex layout holding all cards.
pub const APP_CONTAINER: &str = "display: flex; flex-wrap: wrap; justify-content: center; \
    gap: 20px; padding: 40px; background-color: #f0f2f5; min-height: 100vh; \
    font-family: Arial, sans-serif;";

pub const CARD: &str = "width: 280px; background-color: #fff; border-radius: 12px; \
    box-shadow: 0 4px 12px rgba(0,0,0,0.1); overflow: hidden; position: relative; \
    display: flex; flex-direction: column;";

pub const IMAGE_CONTAINER: &str = "width: 100%; height: 180px; background-color: #ddd;";

/// Crop-to-fill image.
pub const IMAGE: &str = "width: 100%; height: 100%; object-fit: cover;";

/// Content column; `flex-grow` lets the footer sit at the bottom of the card.
pub const CONTENT: &str = "padding: 20px; display: flex; flex-direction: column; flex-grow: 1;";

pub const TITLE: &str = "font-size: 1.2rem; margin: 0 0 10px 0; color: #333;";

pub const DESCRIPTION: &str = "font-size: 0.9rem; color: #666; line-height: 1.4; margin-bottom: 20px;";

pub const FOOTER: &str = "margin-top: auto; display: flex; justify-content: space-between; \
    align-items: center; border-top: 1px solid #eee; padding-top: 15px;";

pub const PRICE: &str = "font-size: 1.2rem; font-weight: bold; color: #2c3e50;";

/// Badge background for a stock state.
pub fn badge_color(in_stock: bool) -> &'static str {
    if in_stock {
        IN_STOCK_GREEN
    } else {
        OUT_OF_STOCK_RED
    }
}

/// Floating stock badge, layered above the image.
pub fn badge_style(in_stock: bool) -> String {
    format!(
        "position: absolute; top: 10px; right: 10px; padding: 5px 10px; border-radius: 15px; \
         color: #fff; font-size: 0.8rem; font-weight: bold; background-color: {}; z-index: 10;",
        badge_color(in_stock)
    )
}

/// Button background for a stock state.
pub fn action_color(in_stock: bool) -> &'static str {
    if in_stock {
        ACTION_BLUE
    } else {
        DISABLED_GREY
    }
}

/// Mouse cursor over the action button.
pub fn action_cursor(in_stock: bool) -> &'static str {
    if in_stock {
        "pointer"
    } else {
        "not-allowed"
    }
}

/// Add-to-cart button.
pub fn action_style(in_stock: bool) -> String {
    format!(
        "padding: 8px 16px; border-radius: 6px; border: none; color: #fff; font-weight: 600; \
         cursor: {}; background-color: {};",
        action_cursor(in_stock),
        action_color(in_stock)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_style_colors() {
        assert!(badge_style(true).contains("background-color: #2ecc71;"));
        assert!(badge_style(false).contains("background-color: #e74c3c;"));
    }

    #[test]
    fn test_badge_is_absolutely_positioned() {
        let style = badge_style(true);
        assert!(style.contains("position: absolute;"));
        assert!(style.contains("z-index: 10;"));
    }

    #[test]
    fn test_action_style_enabled() {
        let style = action_style(true);
        assert!(style.contains("cursor: pointer;"));
        assert!(style.contains("background-color: #3498db;"));
    }

    #[test]
    fn test_action_style_disabled() {
        let style = action_style(false);
        assert!(style.contains("cursor: not-allowed;"));
        assert!(style.contains("background-color: #bdc3c7;"));
    }

    #[test]
    fn test_static_layout_tokens() {
        assert!(APP_CONTAINER.contains("flex-wrap: wrap;"));
        assert!(APP_CONTAINER.contains("justify-content: center;"));
        assert!(APP_CONTAINER.contains("gap: 20px;"));
        assert!(IMAGE.contains("object-fit: cover;"));
        assert!(IMAGE_CONTAINER.contains("height: 180px;"));
        assert!(CONTENT.contains("flex-grow: 1;"));
        assert!(FOOTER.contains("margin-top: auto;"));
    }

    #[test]
    fn test_style_strings_have_no_line_breaks() {
        for style in [APP_CONTAINER, CARD, FOOTER] {
            assert!(!style.contains('\n'));
            assert!(!style.contains("  "));
        }
        assert!(!badge_style(false).contains("  "));
        assert!(!action_style(true).contains("  "));
    }
}
