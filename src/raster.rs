//! Procedural rasterizer for the pencil badge icon.
//!
//! Paints a rounded square filled with a diagonal gradient, then overlays a
//! pencil stroke running from the upper right to the lower left, with a
//! tapered dark tip and an eraser cap. Every pixel is computed independently,
//! so the output depends only on the requested size and palette.

/// Colors used to paint the badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Base color of the rounded square, before the gradient is applied
    pub background: [u8; 3],
    /// Pencil body
    pub stroke: [u8; 3],
    /// Sharpened end of the pencil
    pub tip: [u8; 3],
    /// Cap past the start of the pencil
    pub eraser: [u8; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [0xFF, 0x6D, 0x00],
            stroke: [0xFF, 0xFF, 0xFF],
            tip: [0x3D, 0x3D, 0x3D],
            eraser: [0xE8, 0x40, 0x40],
        }
    }
}

impl Palette {
    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }
}

// Stroke endpoints as fractions of the icon size.
const STROKE_START: (f64, f64) = (0.73, 0.14);
const STROKE_END: (f64, f64) = (0.18, 0.78);

const CORNER_FEATHER: f64 = 1.2;
const GRADIENT_DEPTH: f64 = 0.18;
const STROKE_WIDTH: f64 = 0.10;
const MIN_STROKE_WIDTH: f64 = 1.5;
const TIP_LENGTH: f64 = 0.12;
const TIP_HIGHLIGHT: f64 = 0.3;
const ERASER_LENGTH: f64 = 0.07;
const ERASER_WIDTH: f64 = 0.85;

/// Radius of the rounded corners for an icon of the given size
pub fn corner_radius(size: u32) -> u32 {
    (size / 5).max(2)
}

/// Render the badge with the default palette.
///
/// Returns `size * size * 4` bytes of row-major RGBA. `size` must be positive.
pub fn generate(size: u32) -> Vec<u8> {
    generate_with_palette(size, &Palette::default())
}

/// Render the badge with caller-chosen colors.
pub fn generate_with_palette(size: u32, palette: &Palette) -> Vec<u8> {
    let stroke = Stroke::new(size);
    let mut pixels = vec![0u8; size as usize * size as usize * 4];

    for y in 0..size {
        for x in 0..size {
            // Pixels outside the rounded corners stay fully transparent
            let Some(alpha) = mask_alpha(x, y, size) else {
                continue;
            };

            let mut rgb = gradient(x, y, size, palette.background);
            stroke.paint(f64::from(x), f64::from(y), &mut rgb, palette);

            let idx = (y as usize * size as usize + x as usize) * 4;
            pixels[idx] = channel(rgb[0]);
            pixels[idx + 1] = channel(rgb[1]);
            pixels[idx + 2] = channel(rgb[2]);
            pixels[idx + 3] = alpha;
        }
    }

    pixels
}

/// Alpha of the rounded-rectangle mask, or `None` when the pixel lies outside
/// one of the corner arcs.
fn mask_alpha(x: u32, y: u32, size: u32) -> Option<u8> {
    let r = i64::from(corner_radius(size));
    let (x, y, s) = (i64::from(x), i64::from(y), i64::from(size));

    let near = |v: i64| v < r;
    let far = |v: i64| v >= s - r;
    let opposite = s - r - 1;
    let corners = [
        (near(x) && near(y), (r, r)),
        (far(x) && near(y), (opposite, r)),
        (near(x) && far(y), (r, opposite)),
        (far(x) && far(y), (opposite, opposite)),
    ];

    let radius = r as f64;
    let mut alpha: i64 = 255;
    for (cx, cy) in corners
        .iter()
        .filter(|(hit, _)| *hit)
        .map(|(_, center)| *center)
    {
        let (dx, dy) = (x - cx, y - cy);
        let distance = ((dx * dx + dy * dy) as f64).sqrt();
        if distance > radius {
            return None;
        }
        if distance > radius - CORNER_FEATHER {
            alpha = (255.0 * (radius - distance).max(0.0)) as i64;
        }
    }

    Some(alpha.clamp(0, 255) as u8)
}

/// Darken the base color towards the bottom right corner.
fn gradient(x: u32, y: u32, size: u32, base: [u8; 3]) -> [i32; 3] {
    let grad = f64::from(x + y) / (2.0 * f64::from(size));
    base.map(|c| (f64::from(c) * (1.0 - GRADIENT_DEPTH * grad)) as i32)
}

/// The pencil, described in the coordinate frame of its axis.
struct Stroke {
    origin: (f64, f64),
    dir: (f64, f64),
    normal: (f64, f64),
    length: f64,
    half_width: f64,
    tip_length: f64,
    eraser_length: f64,
}

impl Stroke {
    fn new(size: u32) -> Self {
        let s = f64::from(size);
        let (x1, y1) = (s * STROKE_START.0, s * STROKE_START.1);
        let (dx, dy) = (s * STROKE_END.0 - x1, s * STROKE_END.1 - y1);
        let length = (dx * dx + dy * dy).sqrt();
        let (ux, uy) = (dx / length, dy / length);

        Self {
            origin: (x1, y1),
            dir: (ux, uy),
            normal: (-uy, ux),
            length,
            half_width: (s * STROKE_WIDTH).max(MIN_STROKE_WIDTH),
            tip_length: s * TIP_LENGTH,
            eraser_length: s * ERASER_LENGTH,
        }
    }

    fn paint(&self, x: f64, y: f64, rgb: &mut [i32; 3], palette: &Palette) {
        let (vx, vy) = (x - self.origin.0, y - self.origin.1);
        let along = vx * self.dir.0 + vy * self.dir.1;
        let signed_perp = vx * self.normal.0 + vy * self.normal.1;
        let perp = signed_perp.abs();
        let width = self.half_width;

        if (0.0..=self.length).contains(&along) && perp < width {
            let tip_start = self.length - self.tip_length;
            if along > tip_start {
                let progress = (along - tip_start) / self.tip_length;
                let tapered = width * (1.0 - progress);
                if perp < tapered {
                    let aa = coverage(tapered - perp);
                    for c in 0..3 {
                        let tip = (f64::from(palette.tip[c]) * (1.0 - TIP_HIGHLIGHT * progress)
                            + f64::from(palette.stroke[c]) * TIP_HIGHLIGHT * progress)
                            as i32;
                        rgb[c] = blend(rgb[c], tip, aa);
                    }
                }
            } else {
                let aa = coverage(width - perp);
                // Light falls on one side of the pencil body
                let shade = 0.85 + 0.15 * (signed_perp / width);
                for c in 0..3 {
                    let body = ((f64::from(palette.stroke[c]) * shade) as i32).clamp(0, 255);
                    rgb[c] = blend(rgb[c], body, aa);
                }
            }
        }

        let cap_width = width * ERASER_WIDTH;
        if (-self.eraser_length..0.0).contains(&along) && perp < cap_width {
            let aa = coverage(cap_width - perp);
            for c in 0..3 {
                rgb[c] = blend(rgb[c], i32::from(palette.eraser[c]), aa);
            }
        }
    }
}

fn coverage(distance_inside: f64) -> f64 {
    distance_inside.clamp(0.0, 1.0)
}

fn blend(current: i32, target: i32, aa: f64) -> i32 {
    (f64::from(current) * (1.0 - aa) + f64::from(target) * aa) as i32
}

fn channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}
