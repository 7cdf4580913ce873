//! Built-in neighbor-aware scalers.
//!
//! Every scaler reads the 3x3 neighborhood around its source pixel through
//! the clamped [`PixelBuffer::get`] and writes its own destination block:
//!
//! ```text
//! A B C
//! D E F
//! G H I
//! ```
//!
//! Image edges therefore behave as if the border pixels were repeated.

use crate::descriptor::FilterDescriptor;
use crate::dispatch::{Band, Placement};
use imgscale_core::{Pixel, PixelBuffer};

/// 3x3 source neighborhood, `e` in the middle.
#[derive(Debug, Clone, Copy)]
struct Neighborhood {
    a: Pixel,
    b: Pixel,
    c: Pixel,
    d: Pixel,
    e: Pixel,
    f: Pixel,
    g: Pixel,
    h: Pixel,
    i: Pixel,
}

impl Neighborhood {
    #[inline]
    fn read(src: &PixelBuffer, at: Placement) -> Self {
        let (x, y) = (at.src_x, at.src_y);
        Self {
            a: src.get(x - 1, y - 1),
            b: src.get(x, y - 1),
            c: src.get(x + 1, y - 1),
            d: src.get(x - 1, y),
            e: src.get(x, y),
            f: src.get(x + 1, y),
            g: src.get(x - 1, y + 1),
            h: src.get(x, y + 1),
            i: src.get(x + 1, y + 1),
        }
    }
}

/// Returns the built-in scalers in catalog order.
pub fn builtin() -> Vec<FilterDescriptor> {
    vec![
        nearest("Normal 2x", 2),
        nearest("Normal 3x", 3),
        nearest("Normal 4x", 4),
        FilterDescriptor::scaling("Scale 2x", 2, 2, scale2x),
        FilterDescriptor::scaling("Scale 3x", 3, 3, scale3x),
        FilterDescriptor::scaling("Eagle 2x", 2, 2, eagle2x),
        FilterDescriptor::scaling("Eagle 3x", 3, 3, eagle3x),
        scanlines("-50% Scanlines", -50.0, Orientation::Horizontal),
        scanlines("+50% Scanlines", 50.0, Orientation::Horizontal),
        scanlines("+100% Scanlines", 100.0, Orientation::Horizontal),
        scanlines("-50% VScanlines", -50.0, Orientation::Vertical),
        scanlines("+50% VScanlines", 50.0, Orientation::Vertical),
        scanlines("+100% VScanlines", 100.0, Orientation::Vertical),
        FilterDescriptor::scaling("Bilinear 2x", 2, 2, bilinear2x),
    ]
}

fn nearest(name: &'static str, factor: u32) -> FilterDescriptor {
    FilterDescriptor::scaling(name, factor, factor, |src, at, out| {
        let px = src.get(at.src_x, at.src_y);
        for dy in 0..at.scale_y as i32 {
            for dx in 0..at.scale_x as i32 {
                out.set(at.dst_x + dx, at.dst_y + dy, px);
            }
        }
    })
}

fn scale2x(src: &PixelBuffer, at: Placement, out: &mut Band<'_>) {
    let Neighborhood { b, d, e, f, h, .. } = Neighborhood::read(src, at);
    let cells = [
        if d == b && b != f && d != h { d } else { e },
        if b == f && b != d && f != h { f } else { e },
        if d == h && d != b && h != f { d } else { e },
        if h == f && d != h && b != f { f } else { e },
    ];
    out.write_block(at, &cells);
}

fn scale3x(src: &PixelBuffer, at: Placement, out: &mut Band<'_>) {
    let Neighborhood { a, b, c, d, e, f, g, h, i } = Neighborhood::read(src, at);
    let cells = if b != h && d != f {
        [
            if d == b { d } else { e },
            if (d == b && e != c) || (b == f && e != a) { b } else { e },
            if b == f { f } else { e },
            if (d == b && e != g) || (d == h && e != a) { d } else { e },
            e,
            if (b == f && e != i) || (h == f && e != c) { f } else { e },
            if d == h { d } else { e },
            if (d == h && e != i) || (h == f && e != g) { h } else { e },
            if h == f { f } else { e },
        ]
    } else {
        [e; 9]
    };
    out.write_block(at, &cells);
}

/// Eagle corners: top-left, top-right, bottom-left, bottom-right.
#[inline]
fn eagle_corners(n: &Neighborhood) -> [Pixel; 4] {
    let corner = |diag: Pixel, o1: Pixel, o2: Pixel| {
        if diag == o1 && o1 == o2 { diag } else { n.e }
    };
    [
        corner(n.a, n.b, n.d),
        corner(n.c, n.b, n.f),
        corner(n.g, n.d, n.h),
        corner(n.i, n.f, n.h),
    ]
}

fn eagle2x(src: &PixelBuffer, at: Placement, out: &mut Band<'_>) {
    let n = Neighborhood::read(src, at);
    out.write_block(at, &eagle_corners(&n));
}

fn eagle3x(src: &PixelBuffer, at: Placement, out: &mut Band<'_>) {
    let n = Neighborhood::read(src, at);
    let [tl, tr, bl, br] = eagle_corners(&n);
    let e = n.e;
    out.write_block(at, &[tl, e, tr, e, e, e, bl, e, br]);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    /// Extra row below each source row.
    Horizontal,
    /// Extra column right of each source column.
    Vertical,
}

/// Shifts one channel by `percent`: negative darkens toward black,
/// positive brightens toward white.
#[inline]
fn shade_channel(c: u8, percent: f32) -> u8 {
    let c = c as f32;
    let shaded = if percent < 0.0 {
        c * (1.0 + percent / 100.0)
    } else {
        c + (255.0 - c) * percent / 100.0
    };
    shaded.round().clamp(0.0, 255.0) as u8
}

fn shade(px: Pixel, percent: f32) -> Pixel {
    Pixel::new(
        shade_channel(px.r(), percent),
        shade_channel(px.g(), percent),
        shade_channel(px.b(), percent),
    )
}

fn scanlines(name: &'static str, percent: f32, orientation: Orientation) -> FilterDescriptor {
    let (sx, sy) = match orientation {
        Orientation::Horizontal => (1, 2),
        Orientation::Vertical => (2, 1),
    };
    FilterDescriptor::scaling(name, sx, sy, move |src, at, out| {
        let px = src.get(at.src_x, at.src_y);
        out.write_block(at, &[px, shade(px, percent)]);
    })
}

fn bilinear2x(src: &PixelBuffer, at: Placement, out: &mut Band<'_>) {
    let Neighborhood { e, f, h, i, .. } = Neighborhood::read(src, at);
    out.write_block(at, &[e, e.average(f), e.average(h), Pixel::average4(e, f, h, i)]);
}
