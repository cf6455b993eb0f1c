/// How far a section has travelled through the viewport.
///
/// 0.0 when its top edge sits on the bottom of the viewport, 1.0 when its
/// bottom edge reaches the top. `top` is the section's offset from the top of
/// the viewport, as returned by `getBoundingClientRect`.
pub fn section_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let distance = height + viewport_height;
    if distance <= 0.0 || !distance.is_finite() {
        return 0.0;
    }
    ((viewport_height - top) / distance).clamp(0.0, 1.0)
}

/// Piecewise-linear map from `input` breakpoints to `output` values.
///
/// Breakpoints must be ascending and both slices the same length. Values
/// outside the input range clamp to the first or last output.
pub fn interpolate(value: f64, input: &[f64], output: &[f64]) -> f64 {
    debug_assert_eq!(input.len(), output.len());
    let n = input.len().min(output.len());
    if n == 0 {
        return 0.0;
    }
    if value <= input[0] {
        return output[0];
    }
    if value >= input[n - 1] {
        return output[n - 1];
    }
    for i in 1..n {
        if value <= input[i] {
            let span = input[i] - input[i - 1];
            if span <= 0.0 {
                return output[i];
            }
            let t = (value - input[i - 1]) / span;
            return output[i - 1] + (output[i] - output[i - 1]) * t;
        }
    }
    output[n - 1]
}

/// Transform applied to the theme card grid while the section scrolls past.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTransform {
    pub offset_y: f64,
    pub opacity: f64,
}

impl ScrollTransform {
    pub fn for_progress(progress: f64) -> Self {
        Self {
            offset_y: interpolate(progress, &[0.0, 1.0], &[100.0, -100.0]),
            opacity: interpolate(progress, &[0.0, 0.2, 0.8, 1.0], &[0.0, 1.0, 1.0, 0.0]),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "transform: translateY({:.1}px); opacity: {:.3};",
            self.offset_y, self.opacity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_progress_bounds() {
        // Section entirely below the fold.
        assert_eq!(section_progress(900.0, 600.0, 800.0), 0.0);
        // Top edge on the bottom of the viewport.
        assert_eq!(section_progress(800.0, 600.0, 800.0), 0.0);
        // Bottom edge on the top of the viewport.
        assert_eq!(section_progress(-600.0, 600.0, 800.0), 1.0);
        assert_eq!(section_progress(-2000.0, 600.0, 800.0), 1.0);
        assert!(close(section_progress(100.0, 600.0, 800.0), 0.5));
    }

    #[test]
    fn test_progress_with_degenerate_sizes() {
        assert_eq!(section_progress(0.0, 0.0, 0.0), 0.0);
        assert_eq!(section_progress(0.0, f64::NAN, 800.0), 0.0);
    }

    #[test]
    fn test_interpolate_clamps_and_blends() {
        let input = [0.0, 0.2, 0.8, 1.0];
        let output = [0.0, 1.0, 1.0, 0.0];
        assert_eq!(interpolate(-1.0, &input, &output), 0.0);
        assert!(close(interpolate(0.1, &input, &output), 0.5));
        assert_eq!(interpolate(0.5, &input, &output), 1.0);
        assert!(close(interpolate(0.9, &input, &output), 0.5));
        assert_eq!(interpolate(2.0, &input, &output), 0.0);
        assert_eq!(interpolate(0.5, &[], &[]), 0.0);
    }

    #[test]
    fn test_theme_grid_transform() {
        let entering = ScrollTransform::for_progress(0.0);
        assert_eq!(entering, ScrollTransform { offset_y: 100.0, opacity: 0.0 });

        let centred = ScrollTransform::for_progress(0.5);
        assert!(close(centred.offset_y, 0.0));
        assert_eq!(centred.opacity, 1.0);
        assert_eq!(centred.style(), "transform: translateY(0.0px); opacity: 1.000;");

        let leaving = ScrollTransform::for_progress(1.0);
        assert_eq!(leaving, ScrollTransform { offset_y: -100.0, opacity: 0.0 });
    }
}
