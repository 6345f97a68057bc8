//! Error diffusion kernel tables.
//!
//! Each kernel lists the forward neighbors that receive a share of the
//! quantization error, as `(dx, dy, weight)` with a common divisor. Offsets
//! only ever point at pixels the row-major scan has not visited yet.

/// Pass structure of a diffusion kernel.
///
/// The original device pipeline quantizes in two different shapes and both
/// are preserved byte-for-byte:
///
/// - `Double`: pass 1 only diffuses error through the working buffer;
///   pass 2 re-matches every working-buffer pixel and writes the output.
/// - `Single`: each pixel is quantized and written the moment it is
///   visited, then its error is diffused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassStructure {
    /// Quantize and write during the one and only scan.
    Single,
    /// Diffuse first, re-match the whole working buffer in a second scan.
    Double,
}

/// An error diffusion kernel.
///
/// Each neighbor at `(x + dx, y + dy)` receives `error * weight / divisor`.
/// Neighbors falling outside the raster are skipped and their share of the
/// error is dropped, not redistributed. That loses a little error at the
/// borders; the device firmware expects output produced exactly this way.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// `(dx, dy, weight)` entries, dy >= 0 and dx > 0 when dy == 0.
    pub entries: &'static [(i32, i32, u8)],
    /// Common divisor for the weights.
    pub divisor: u8,
    /// One- or two-scan quantization, see [`PassStructure`].
    pub pass: PassStructure,
}

/// Floyd–Steinberg: 4 neighbors, 16/16 of the error propagated.
///
/// ```text
///         X   7
///     3   5   1      (/16)
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[(1, 0, 7), (-1, 1, 3), (0, 1, 5), (1, 1, 1)],
    divisor: 16,
    pass: PassStructure::Double,
};

/// Atkinson: 6 neighbors at 1/8 each, so only 6/8 of the error moves on.
///
/// ```text
///         X   1   1
///     1   1   1
///         1          (/8)
/// ```
///
/// The missing 2/8 is the classic algorithm's intentional attenuation; it
/// keeps highlights and shadows from washing out on small palettes.
pub const ATKINSON: Kernel = Kernel {
    entries: &[(1, 0, 1), (2, 0, 1), (-1, 1, 1), (0, 1, 1), (1, 1, 1), (0, 2, 1)],
    divisor: 8,
    pass: PassStructure::Single,
};

/// Stucki: 12 neighbors over 3 rows, 42/42 propagated.
///
/// ```text
///             X   8   4
///     2   4   8   4   2
///     1   2   4   2   1      (/42)
/// ```
pub const STUCKI: Kernel = Kernel {
    entries: &[
        (1, 0, 8),
        (2, 0, 4),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 8),
        (1, 1, 4),
        (2, 1, 2),
        (-2, 2, 1),
        (-1, 2, 2),
        (0, 2, 4),
        (1, 2, 2),
        (2, 2, 1),
    ],
    divisor: 42,
    pass: PassStructure::Double,
};

/// Jarvis–Judice–Ninke: 12 neighbors over 3 rows, 48/48 propagated.
///
/// ```text
///             X   7   5
///     3   5   7   5   3
///     1   3   5   3   1      (/48)
/// ```
pub const JARVIS: Kernel = Kernel {
    entries: &[
        (1, 0, 7),
        (2, 0, 5),
        (-2, 1, 3),
        (-1, 1, 5),
        (0, 1, 7),
        (1, 1, 5),
        (2, 1, 3),
        (-2, 2, 1),
        (-1, 2, 3),
        (0, 2, 5),
        (1, 2, 3),
        (2, 2, 1),
    ],
    divisor: 48,
    pass: PassStructure::Double,
};
