use crate::config::AxisStyle;
use crate::core::{Axes, AxisSel, GridStyle, Which};

/// Apply the stock grid and tick look to `ax`.
pub fn apply_style(ax: &mut Axes) {
    apply_style_with(ax, &AxisStyle::default());
}

/// Apply `style` to `ax`: minor ticks on (except on y), major grid on both
/// axes, minor grid on x only, fixed tick label size and tick lengths.
///
/// Only assigns, so calling it repeatedly leaves the same state.
pub fn apply_style_with(ax: &mut Axes, style: &AxisStyle) {
    let grid = GridStyle {
        style: style.grid_style,
        width: style.grid_width,
    };

    ax.minor_ticks_on();
    ax.grid(Which::Major, AxisSel::Both, grid);
    ax.grid(Which::Minor, AxisSel::X, grid);
    ax.tick_label_size(AxisSel::Both, style.tick_label_size);
    ax.tick_length(Which::Major, AxisSel::Both, style.major_tick_length);
    ax.tick_length(Which::Minor, AxisSel::Both, style.minor_tick_length);
    ax.set_minor_ticks(AxisSel::Y, false);
}
