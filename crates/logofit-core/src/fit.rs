//! Shrink-to-fit search and centering
//!
//! The contract both strategies honour: the chosen size is the largest size
//! in `1..=initial_size` whose ink box fits the canvas, or 1 when nothing
//! fits. In the latter case the text is drawn at size 1 and allowed to
//! overflow; size 0 is never measured.

use crate::{
    config::{FitOptions, FitStrategy},
    error::{LogofitError, Result},
    traits::TextMeasurer,
    types::{FitResult, TextExtents},
};

/// What the size search settled on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitOutcome {
    pub font_size: u32,
    pub extents: TextExtents,
    pub overflow: bool,
    pub measurements: u32,
}

/// Counts calls so both strategies report their cost
struct Probe<'a, M: ?Sized> {
    measurer: &'a M,
    text: &'a str,
    calls: u32,
}

impl<M: TextMeasurer + ?Sized> Probe<'_, M> {
    fn at(&mut self, size: u32) -> Result<TextExtents> {
        self.calls += 1;
        let extents = self.measurer.measure(self.text, size as f32)?;
        log::debug!(
            "measure size={} -> {:.2}x{:.2} (bearing {:.2},{:.2})",
            size,
            extents.width,
            extents.height,
            extents.x_bearing,
            extents.y_bearing
        );
        Ok(extents)
    }
}

/// Find the largest font size whose ink box fits `width` x `height`.
pub fn fit_font_size<M: TextMeasurer + ?Sized>(
    measurer: &M,
    text: &str,
    width: u32,
    height: u32,
    initial_size: u32,
    strategy: FitStrategy,
) -> Result<FitOutcome> {
    if initial_size == 0 {
        return Err(LogofitError::invalid_input("initial font size must be at least 1"));
    }

    let mut probe = Probe {
        measurer,
        text,
        calls: 0,
    };

    let (font_size, extents) = match strategy {
        FitStrategy::Linear => linear(&mut probe, width, height, initial_size)?,
        FitStrategy::Binary => binary(&mut probe, width, height, initial_size)?,
    };

    let overflow = !extents.fits_within(width, height);
    if overflow {
        log::warn!(
            "Text {:?} overflows a {}x{} canvas even at size 1 ({:.1}x{:.1})",
            text,
            width,
            height,
            extents.width,
            extents.height
        );
    }

    Ok(FitOutcome {
        font_size,
        extents,
        overflow,
        measurements: probe.calls,
    })
}

fn linear<M: TextMeasurer + ?Sized>(
    probe: &mut Probe<'_, M>,
    width: u32,
    height: u32,
    initial_size: u32,
) -> Result<(u32, TextExtents)> {
    let mut size = initial_size;
    let mut extents = probe.at(size)?;

    while !extents.fits_within(width, height) && size > 1 {
        size -= 1;
        extents = probe.at(size)?;
    }

    Ok((size, extents))
}

fn binary<M: TextMeasurer + ?Sized>(
    probe: &mut Probe<'_, M>,
    width: u32,
    height: u32,
    initial_size: u32,
) -> Result<(u32, TextExtents)> {
    let extents = probe.at(initial_size)?;
    if extents.fits_within(width, height) || initial_size == 1 {
        return Ok((initial_size, extents));
    }

    // Invariant: every size above `hi` is known not to fit.
    let mut best: Option<(u32, TextExtents)> = None;
    let mut at_one: Option<TextExtents> = None;
    let (mut lo, mut hi) = (1u32, initial_size - 1);

    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        let extents = probe.at(mid)?;
        if mid == 1 {
            at_one = Some(extents);
        }
        if extents.fits_within(width, height) {
            best = Some((mid, extents));
            lo = mid + 1;
        } else {
            hi = mid - 1;
        }
    }

    match (best, at_one) {
        (Some(found), _) => Ok(found),
        (None, Some(extents)) => Ok((1, extents)),
        (None, None) => Ok((1, probe.at(1)?)),
    }
}

/// Draw origin that puts the ink box in the middle of the canvas
pub fn center_origin(extents: &TextExtents, width: u32, height: u32) -> (f64, f64) {
    let origin_x = width as f64 / 2.0 - extents.width / 2.0 - extents.x_bearing;
    let origin_y = height as f64 / 2.0 - extents.height / 2.0 - extents.y_bearing;
    (origin_x, origin_y)
}

/// Fit and center in one go
pub fn fit_text<M: TextMeasurer + ?Sized>(
    measurer: &M,
    text: &str,
    width: u32,
    height: u32,
    options: &FitOptions,
) -> Result<FitResult> {
    let outcome = fit_font_size(
        measurer,
        text,
        width,
        height,
        options.initial_size,
        options.strategy,
    )?;
    let (origin_x, origin_y) = center_origin(&outcome.extents, width, height);

    log::info!(
        "Fitted {:?} into {}x{} at size {} ({} strategy, {} measurements)",
        text,
        width,
        height,
        outcome.font_size,
        options.strategy,
        outcome.measurements
    );

    Ok(FitResult {
        chosen_font_size: outcome.font_size,
        origin_x,
        origin_y,
        extents: outcome.extents,
        overflow: outcome.overflow,
        measurements: outcome.measurements,
    })
}
