//! Framed cells for the Typora-like table style.

use egui::{Color32, Frame, InnerResponse, Margin, Ui};

use crate::utils::colors::HEADER_BG_COLOR;

/// Header cell with background.
pub fn header_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .fill(HEADER_BG_COLOR)
        .inner_margin(Margin::symmetric(8, 8))
        .show(ui, add_contents)
}

/// Data cell with padding, filled with `fill` (transparent for unselected rows).
pub fn data_cell<R>(
    ui: &mut Ui,
    fill: Color32,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> InnerResponse<R> {
    Frame::NONE
        .fill(fill)
        .inner_margin(Margin::symmetric(8, 6))
        .show(ui, add_contents)
}
