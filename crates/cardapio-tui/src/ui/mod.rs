//! Screen implementations and shared drawing helpers.

pub mod delete_dialog;
pub mod detail;
pub mod list;

use ratatui::layout::Rect;

use crate::element::Button;

/// Joins button hints into a footer line.
pub(crate) fn footer(buttons: &[Button]) -> String {
    buttons
        .iter()
        .map(Button::hint)
        .collect::<Vec<_>>()
        .join("  ")
}

/// A `width` x `height` rectangle centered in `area`, clipped to it.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_fits_inside_area() {
        let area = Rect::new(0, 0, 80, 24);
        let popup = centered(area, 60, 10);
        assert_eq!(popup, Rect::new(10, 7, 60, 10));
    }

    #[test]
    fn centered_clips_to_small_areas() {
        let area = Rect::new(2, 1, 20, 5);
        let popup = centered(area, 60, 10);
        assert_eq!(popup, area);
    }
}
