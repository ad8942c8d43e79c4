/// Pixel offset of the top of a visual row
pub fn scroll_top_for_visual_index(visual_index: usize, row_height: f32) -> f32 {
    visual_index as f32 * row_height
}

/// Visual row at a pixel offset, rounding down
pub fn visual_index_for_scroll_top(scroll_top: f32, row_height: f32) -> usize {
    if row_height <= 0.0 || scroll_top <= 0.0 {
        return 0;
    }
    (scroll_top / row_height).floor() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_and_offset_convert_both_ways() {
        assert_eq!(scroll_top_for_visual_index(0, 20.0), 0.0);
        assert_eq!(scroll_top_for_visual_index(5, 20.0), 100.0);
        assert_eq!(visual_index_for_scroll_top(100.0, 20.0), 5);
        assert_eq!(visual_index_for_scroll_top(119.9, 20.0), 5);
    }

    #[test]
    fn degenerate_inputs_clamp_to_zero() {
        assert_eq!(visual_index_for_scroll_top(-10.0, 20.0), 0);
        assert_eq!(visual_index_for_scroll_top(50.0, 0.0), 0);
    }
}
