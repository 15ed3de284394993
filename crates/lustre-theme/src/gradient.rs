use lustre_engine::paint::{CustomGradient, GradientBorder, GradientStopSet};

use crate::error::GradientFormatError;

/// Decodes `border,pos,value,pos,value,...`.
///
/// Positions and values are clamped into their editable ranges; a clamped
/// number is logged, not rejected. A border with no pairs is an empty
/// (undefined) gradient.
pub fn parse_custom_gradient(s: &str) -> Result<CustomGradient, GradientFormatError> {
    let mut fields = s.split(',').map(str::trim);
    let border = match fields.next() {
        Some(name) if !name.is_empty() => GradientBorder::from_name(name)
            .ok_or_else(|| GradientFormatError::UnknownBorder(name.to_string()))?,
        _ => return Err(GradientFormatError::MissingBorder),
    };

    let numbers = fields
        .filter(|f| !f.is_empty())
        .map(|f| f.parse::<f64>().map_err(|_| GradientFormatError::BadNumber(f.to_string())))
        .collect::<Result<Vec<f64>, _>>()?;
    if numbers.len() % 2 != 0 {
        return Err(GradientFormatError::UnpairedValue(numbers.len()));
    }

    let mut stops = GradientStopSet::new();
    for pair in numbers.chunks_exact(2) {
        let (pos, value) = (pair[0], pair[1]);
        if !(0.0..=1.0).contains(&pos) || !(0.0..=2.0).contains(&value) {
            log::warn!("gradient stop ({pos}, {value}) out of range, clamped");
        }
        stops.insert(pos, value);
    }
    Ok(CustomGradient::new(border, stops))
}

/// Encodes a gradient in the format read by [`parse_custom_gradient`].
pub fn format_custom_gradient(gradient: &CustomGradient) -> String {
    let mut out = gradient.border.as_str().to_string();
    for stop in &gradient.stops {
        out.push(',');
        out.push_str(&format_number(stop.pos));
        out.push(',');
        out.push_str(&format_number(stop.value));
    }
    out
}

/// Shortest decimal at stop precision (`0.5`, `1`, `0.125`).
fn format_number(v: f64) -> String {
    let s = format!("{v:.3}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(g: &CustomGradient) -> Vec<(f64, f64)> {
        g.stops.iter().map(|s| (s.pos, s.value)).collect()
    }

    // ── parse ─────────────────────────────────────────────────────────────

    #[test]
    fn parses_border_and_pairs() {
        let g = parse_custom_gradient("3d,0,1.2,0.5,0.95,1,0.9").unwrap();
        assert_eq!(g.border, GradientBorder::ThreeD);
        assert_eq!(pairs(&g), vec![(0.0, 1.2), (0.5, 0.95), (1.0, 0.9)]);
    }

    #[test]
    fn unsorted_pairs_are_sorted() {
        let g = parse_custom_gradient("light, 1,0.8, 0,1.1").unwrap();
        assert_eq!(pairs(&g), vec![(0.0, 1.1), (1.0, 0.8)]);
    }

    #[test]
    fn border_only_is_undefined() {
        let g = parse_custom_gradient("shine").unwrap();
        assert_eq!(g.border, GradientBorder::Shine);
        assert!(!g.is_defined());
    }

    #[test]
    fn out_of_range_numbers_are_clamped() {
        let g = parse_custom_gradient("none,-1,5,2,0.5").unwrap();
        assert_eq!(pairs(&g), vec![(0.0, 2.0), (1.0, 0.5)]);
    }

    #[test]
    fn malformed_strings_are_rejected() {
        assert_eq!(parse_custom_gradient(""), Err(GradientFormatError::MissingBorder));
        assert_eq!(
            parse_custom_gradient("glossy,0,1"),
            Err(GradientFormatError::UnknownBorder("glossy".into()))
        );
        assert_eq!(parse_custom_gradient("3d,0,1,0.5"), Err(GradientFormatError::UnpairedValue(3)));
        assert_eq!(
            parse_custom_gradient("3d,0,abc"),
            Err(GradientFormatError::BadNumber("abc".into()))
        );
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn formats_compactly() {
        let g = CustomGradient::new(
            GradientBorder::ThreeDFull,
            GradientStopSet::from_pairs([(0.0, 1.2), (0.5, 0.95), (1.0, 1.0)]),
        );
        assert_eq!(format_custom_gradient(&g), "3dfull,0,1.2,0.5,0.95,1,1");
    }

    #[test]
    fn format_then_parse_preserves_fixed_stops() {
        let g = CustomGradient::new(
            GradientBorder::Light,
            GradientStopSet::from_pairs([(0.1, 1.333), (0.499, 0.984), (0.5, 0.9), (0.875, 1.06)]),
        );
        let back = parse_custom_gradient(&format_custom_gradient(&g)).unwrap();
        assert_eq!(back.border, g.border);
        assert!(back.stops.fix().approx_eq(&g.stops.fix()));
    }

    #[test]
    fn number_formatting() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(0.125), "0.125");
        assert_eq!(format_number(0.9999), "1");
    }
}
