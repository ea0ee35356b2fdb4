//! # Body identities and display styles
//!
//! A tracked body is a name discovered from the table schema plus a display
//! style (color, marker size, legend priority). A small curated registry
//! carries hand-picked styles for the well-known solar-system bodies; every
//! other discovered body receives a generated, visually distinct color from a
//! palette sized to the body count. The curated list is a styling and legend
//! annotation only; it never filters which bodies are tracked.

use crate::constants::PanelSet;

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Hex form (`#RRGGBB`) for renderers that take CSS-style colors.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Display style of one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyStyle {
    pub color: Rgb,
    /// Marker diameter in renderer points.
    pub marker_size: f64,
    /// Draw/legend ordering; higher values sit on top.
    pub legend_priority: i32,
}

/// A discovered body: schema name plus resolved display style.
#[derive(Debug, Clone)]
pub struct Body {
    pub name: String,
    pub style: BodyStyle,
}

/// Marker size assigned to bodies outside the curated registry.
const GENERATED_MARKER_SIZE: f64 = 6.0;

/// Legend priority assigned to bodies outside the curated registry.
const GENERATED_PRIORITY: i32 = 5;

/// Hand-tuned styles for the classical solar-system bodies.
const CURATED: &[(&str, Rgb, f64, i32)] = &[
    ("Sol", Rgb::new(0xFF, 0xD7, 0x00), 18.0, 10),
    ("Mercurio", Rgb::new(0xB5, 0xB5, 0xB5), 5.0, 5),
    ("Venus", Rgb::new(0xE8, 0xC4, 0x6A), 7.0, 5),
    ("Tierra", Rgb::new(0x4F, 0xA3, 0xE0), 7.0, 5),
    ("Marte", Rgb::new(0xC1, 0x44, 0x0E), 6.0, 5),
    ("Jupiter", Rgb::new(0xC8, 0x8B, 0x3A), 12.0, 5),
    ("Saturno", Rgb::new(0xE4, 0xD1, 0x91), 11.0, 5),
    ("Urano", Rgb::new(0x7D, 0xE8, 0xE8), 9.0, 5),
    ("Neptuno", Rgb::new(0x4B, 0x70, 0xDD), 9.0, 5),
];

/// Curated style of a body, if it is one of the known solar-system bodies.
pub fn curated_style(name: &str) -> Option<BodyStyle> {
    CURATED
        .iter()
        .find(|&&(curated_name, ..)| curated_name == name)
        .map(|&(_, color, marker_size, legend_priority)| BodyStyle {
            color,
            marker_size,
            legend_priority,
        })
}

/// Resolve a style for every discovered body, in discovery order.
///
/// Curated bodies keep their hand-picked style; the rest share a generated
/// palette sized to how many of them there are, so every marker stays
/// distinguishable regardless of how many bodies the table carries.
pub(crate) fn assign_styles(names: &[String]) -> Vec<BodyStyle> {
    let generated_count = names
        .iter()
        .filter(|name| curated_style(name).is_none())
        .count();
    let palette = distinct_palette(generated_count);

    let mut next_generated = 0;
    names
        .iter()
        .map(|name| {
            curated_style(name).unwrap_or_else(|| {
                let color = palette[next_generated];
                next_generated += 1;
                BodyStyle {
                    color,
                    marker_size: GENERATED_MARKER_SIZE,
                    legend_priority: GENERATED_PRIORITY,
                }
            })
        })
        .collect()
}

/// Indices of the `count` highest-priority bodies, used to pick which labels a
/// crowded legend keeps.
pub fn legend_order(bodies: &[Body], count: usize) -> PanelSet {
    let mut order: Vec<usize> = (0..bodies.len()).collect();
    order.sort_by_key(|&i| std::cmp::Reverse(bodies[i].style.legend_priority));
    order.truncate(count);
    order.into_iter().collect()
}

/// Evenly hue-spaced palette of `count` colors.
fn distinct_palette(count: usize) -> Vec<Rgb> {
    (0..count)
        .map(|i| hsv_to_rgb(i as f64 * 360.0 / count as f64, 0.65, 0.90))
        .collect()
}

/// Convert HSV (`h` in degrees, `s`/`v` in [0, 1]) to sRGB.
fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let h = h.rem_euclid(360.0) / 60.0;
    let c = v * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = v - c;
    Rgb::new(
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    )
}

#[cfg(test)]
mod bodies_test {
    use super::*;

    #[test]
    fn test_curated_lookup() {
        let sol = curated_style("Sol").unwrap();
        assert_eq!(sol.color, Rgb::new(0xFF, 0xD7, 0x00));
        assert_eq!(sol.legend_priority, 10);
        assert!(curated_style("Pluton").is_none());
    }

    #[test]
    fn test_assign_styles_mixes_curated_and_generated() {
        let names = vec![
            "Sol".to_string(),
            "Pluton".to_string(),
            "Tierra".to_string(),
            "Ceres".to_string(),
        ];
        let styles = assign_styles(&names);
        assert_eq!(styles.len(), 4);
        assert_eq!(styles[0].color, Rgb::new(0xFF, 0xD7, 0x00));
        assert_eq!(styles[2].color, Rgb::new(0x4F, 0xA3, 0xE0));
        // The two generated colors must differ from each other.
        assert_ne!(styles[1].color, styles[3].color);
        assert_eq!(styles[1].marker_size, GENERATED_MARKER_SIZE);
    }

    #[test]
    fn test_palette_colors_are_distinct() {
        let palette = distinct_palette(12);
        for (i, a) in palette.iter().enumerate() {
            for b in palette.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(Rgb::new(0xFF, 0xD7, 0x00).to_hex(), "#FFD700");
        assert_eq!(Rgb::new(0, 0, 0).to_hex(), "#000000");
    }

    #[test]
    fn test_legend_order_prefers_priority() {
        let bodies = vec![
            Body {
                name: "a".to_string(),
                style: BodyStyle {
                    color: Rgb::new(1, 1, 1),
                    marker_size: 5.0,
                    legend_priority: 5,
                },
            },
            Body {
                name: "b".to_string(),
                style: BodyStyle {
                    color: Rgb::new(2, 2, 2),
                    marker_size: 5.0,
                    legend_priority: 10,
                },
            },
        ];
        let order = legend_order(&bodies, 1);
        assert_eq!(order.as_slice(), &[1]);
    }
}
