//! Shared SVG building blocks.

/// Viridis colorscale stops
const VIRIDIS: [(f64, (u8, u8, u8)); 10] = [
    (0.000, (68, 1, 84)),
    (0.111, (72, 40, 120)),
    (0.222, (62, 73, 137)),
    (0.333, (49, 104, 142)),
    (0.444, (38, 130, 142)),
    (0.556, (31, 158, 137)),
    (0.667, (53, 183, 121)),
    (0.778, (110, 206, 88)),
    (0.889, (181, 222, 43)),
    (1.000, (253, 231, 37)),
];

/// Escape text for use in SVG content and attribute values
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Viridis color for `t` in [0, 1] as `rgb(r, g, b)`
pub fn viridis(t: f64) -> String {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };

    let upper = VIRIDIS
        .iter()
        .position(|(stop, _)| *stop >= t)
        .unwrap_or(VIRIDIS.len() - 1)
        .max(1);
    let (lo_t, lo) = VIRIDIS[upper - 1];
    let (hi_t, hi) = VIRIDIS[upper];

    let f = ((t - lo_t) / (hi_t - lo_t)).clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * f).round() as u8;

    format!("rgb({}, {}, {})", mix(lo.0, hi.0), mix(lo.1, hi.1), mix(lo.2, hi.2))
}

/// Linear mapping from a data range onto a pixel range
#[derive(Debug, Clone, Copy)]
pub struct Scale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl Scale {
    /// Scale over `[min, max]` padded by `pad` of the span on both sides
    ///
    /// A degenerate span is widened to one unit.
    pub fn padded(min: f64, max: f64, pad: f64, range: (f64, f64)) -> Self {
        let (min, max) = if (max - min).abs() < f64::EPSILON {
            (min - 0.5, max + 0.5)
        } else {
            (min, max)
        };
        let margin = (max - min) * pad;
        Self {
            domain: (min - margin, max + margin),
            range,
        }
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// `count` evenly spaced values across the domain
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        if count < 2 {
            return vec![d0];
        }
        let step = (d1 - d0) / (count - 1) as f64;
        (0..count).map(|i| d0 + step * i as f64).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("A&M <Aggies>"), "A&amp;M &lt;Aggies&gt;");
        assert_eq!(escape_xml("O'Neil"), "O&apos;Neil");
    }

    #[test]
    fn test_viridis_endpoints() {
        assert_eq!(viridis(0.0), "rgb(68, 1, 84)");
        assert_eq!(viridis(1.0), "rgb(253, 231, 37)");
        assert_eq!(viridis(f64::NAN), "rgb(68, 1, 84)");
    }

    #[test]
    fn test_scale_maps_inverted_range() {
        let scale = Scale::padded(0.0, 10.0, 0.0, (500.0, 100.0));
        assert_eq!(scale.map(0.0), 500.0);
        assert_eq!(scale.map(10.0), 100.0);
        assert_eq!(scale.map(5.0), 300.0);
    }

    #[test]
    fn test_scale_degenerate_domain() {
        let scale = Scale::padded(2.0, 2.0, 0.0, (0.0, 100.0));
        assert_eq!(scale.domain, (1.5, 2.5));
        assert_eq!(scale.ticks(3), vec![1.5, 2.0, 2.5]);
    }
}
