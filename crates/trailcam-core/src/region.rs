use serde::{Deserialize, Serialize};

/// A width/height pair describing the extent of an image or a tile.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Size { width, height }
    }
}

/// An axis-aligned rectangle in image coordinates.
///
/// The top-left corner of the image is `(0, 0)`; `x` grows to the right and
/// `y` grows down. The rectangle covers the half-open span
/// `[x1, x2) × [y1, y2)` with `x2 = x + w` and `y2 = y + h`.
///
/// `w` and `h` may be negative: the annotation UI lets the user drag a
/// selection from bottom-right to top-left, which produces a "denormalized"
/// rectangle. [`Region::normalize`] flips such a rectangle into its
/// positive-extent equivalent.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Region {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Region { x, y, w, h }
    }

    /// Left edge.
    #[inline]
    pub fn x1(&self) -> i32 {
        self.x
    }

    /// Top edge.
    #[inline]
    pub fn y1(&self) -> i32 {
        self.y
    }

    /// Right edge, exclusive (`x + w`).
    #[inline]
    pub fn x2(&self) -> i32 {
        self.x + self.w
    }

    /// Bottom edge, exclusive (`y + h`).
    #[inline]
    pub fn y2(&self) -> i32 {
        self.y + self.h
    }

    /// Flip a rectangle drawn "backwards" (negative `w` and/or `h`) into the
    /// equivalent rectangle with positive extents covering the same pixels.
    ///
    /// A rectangle that is already positive in both dimensions is returned
    /// unchanged, so the operation is idempotent.
    ///
    /// ```
    /// use trailcam_core::Region;
    /// let r = Region::new(110, 225, -50, -75);
    /// assert_eq!(r.normalize(), Region::new(60, 150, 50, 75));
    /// ```
    pub fn normalize(self) -> Region {
        if self.w > 0 && self.h > 0 {
            return self;
        }
        let Region {
            mut x,
            mut y,
            mut w,
            mut h,
        } = self;
        if w < 0 {
            x += w;
            w = -w;
        }
        if h < 0 {
            y += h;
            h = -h;
        }
        Region { x, y, w, h }
    }

    /// Scale every field by `factor`, truncating toward zero.
    ///
    /// Used to map between full-resolution image coordinates and the
    /// scaled-down on-screen coordinates (the inverse mapping uses
    /// `1.0 / factor`). Round-trips are not exact because of the
    /// truncation; that loss is accepted.
    pub fn scale(self, factor: f64) -> Region {
        Region {
            x: (self.x as f64 * factor) as i32,
            y: (self.y as f64 * factor) as i32,
            w: (self.w as f64 * factor) as i32,
            h: (self.h as f64 * factor) as i32,
        }
    }

    /// Whether two rectangles overlap at all.
    ///
    /// Edges that exactly touch count as intersecting (`a.x2 == b.x1` is an
    /// overlap). Downstream tagging data was produced with this rule, so it
    /// must be preserved even though strict half-open semantics would
    /// exclude the touching case.
    #[inline]
    pub fn intersects(&self, other: &Region) -> bool {
        !((self.x2() < other.x1() || self.x1() > other.x2())
            || (self.y1() > other.y2() || self.y2() < other.y1()))
    }
}

/// Whether `a` intersects at least one region in `regions`.
///
/// An empty slice never intersects anything.
pub fn intersects_any(a: &Region, regions: &[Region]) -> bool {
    regions.iter().any(|b| a.intersects(b))
}

/// A [`Region`] plus the boolean training label attached by the tagger:
/// `true` means the region overlaps a human-annotated animal.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TaggedRegion {
    #[serde(flatten)]
    pub region: Region,
    pub tag: bool,
}

impl TaggedRegion {
    pub const fn new(region: Region, tag: bool) -> Self {
        TaggedRegion { region, tag }
    }
}
