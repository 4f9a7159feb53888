use crate::core::Colour;
use indicatif::{ProgressBar, ProgressStyle};
use std::num::NonZeroU16;

pub struct Canvas(Vec<Vec<Colour>>);

impl Canvas {
    /// creates a `Canvas` of `width` by `height` dimensions
    /// returns `None` if the dimensions are too great, to prevent allocating ridiculous amounts of memory
    /// (specifically: width greater than 7680 or height greater than 4320 (i.e. ~16K))
    /// (note: 65535 by 65535 would create a ~12GB data structure)
    pub fn new(width: NonZeroU16, height: NonZeroU16) -> Option<Self> {
        let height = height.get();
        let width = width.get();

        if width > (1920 * 4) || height > (1080 * 4) {
            return None;
        }

        let underlying = vec![vec![Colour::BLACK; width as usize]; height as usize];

        Some(Canvas(underlying))
    }

    pub fn width(&self) -> usize {
        self.0.first().expect("underlying Vec cannot be empty").len()
    }

    pub fn height(&self) -> usize {
        self.0.len()
    }

    /// Returns black for out-of-bounds coordinates rather than panicking, since callers (e.g. the
    /// PPM writer) derive their iteration bounds straight from this canvas.
    pub fn get(&self, x: u16, y: u16) -> Colour {
        self.0
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .unwrap_or(Colour::BLACK)
    }

    /// Silently does nothing if `x`/`y` are out of bounds.
    pub fn set(&mut self, x: u16, y: u16, colour: Colour) {
        if let Some(pixel) = self.0.get_mut(y as usize).and_then(|row| row.get_mut(x as usize)) {
            *pixel = colour;
        }
    }

    pub fn draw<F>(&mut self, show_progress: bool, f: F)
    where
        F: Fn(u16, u16) -> Colour,
        F: Sync + Send,
    {
        use indicatif::ParallelProgressIterator;
        use rayon::prelude::*;

        let progress_bar = if show_progress {
            ProgressBar::new(self.height() as u64).with_style(ProgressStyle::default_bar().template("Rendering: {percent}%"))
        } else {
            ProgressBar::hidden()
        };

        self.0.par_iter_mut().progress_with(progress_bar).enumerate().for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = f(x as _, y as _)
            }
        })
    }
}
