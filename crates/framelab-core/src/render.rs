//! Frame overlay renderer.
//!
//! Produces the final composite shown to the user: the avatar redrawn
//! inside a circle whose radius shrinks by half the frame width, with the
//! selected frame drawn full-bleed on top. Re-run on every change to the
//! avatar, the frame selection, or the frame width.
//!
//! Hosts trigger re-renders from async image loads that can complete out
//! of order; [`RenderSequencer`] makes the required "latest parameters
//! win" rule explicit with monotonically increasing sequence numbers.

use crate::compose::AVATAR_SIZE;
use crate::frame::FrameWidth;
use crate::mask::circle_coverage;
use crate::raster::Raster;

/// Render the final composite from an avatar, a frame overlay, and a width.
///
/// 1. Fit the avatar's centered shorter-side square into the full 460x460
///    surface (the avatar is normally already 460x460, so this is an
///    identity mapping).
/// 2. Clip it to a circle of radius `230 - frame_width / 2`.
/// 3. Draw the frame art full-bleed with source-over blending. An empty
///    frame raster (failed decode) leaves the avatar-only partial render -
///    the accepted degraded state, with no fallback substituted.
///
/// Deterministic: identical inputs give pixel-identical output.
pub fn render(avatar: &Raster, frame: &Raster, frame_width: FrameWidth) -> Raster {
    let mut out = Raster::blank(AVATAR_SIZE, AVATAR_SIZE);

    if let Some(base) = center_square_fit(avatar) {
        let center = AVATAR_SIZE as f32 / 2.0;
        let radius = frame_width.clip_radius();

        for y in 0..AVATAR_SIZE {
            for x in 0..AVATAR_SIZE {
                let coverage = circle_coverage(center, center, radius, x, y);
                if coverage <= 0.0 {
                    continue;
                }
                let mut px = base.pixel(x, y);
                px[3] = (f32::from(px[3]) * coverage) as u8;
                out.put_pixel(x, y, px);
            }
        }
    }

    overlay_full_bleed(&mut out, frame);
    out
}

/// Map an arbitrary raster onto the 460x460 surface through its centered
/// shorter-side square, resampling as needed.
///
/// Returns `None` when the raster is empty or its buffer is inconsistent -
/// the caller degrades to an unpainted surface.
fn center_square_fit(raster: &Raster) -> Option<Raster> {
    if raster.is_empty() {
        return None;
    }
    if raster.width == AVATAR_SIZE && raster.height == AVATAR_SIZE {
        return Some(raster.clone());
    }

    let size = raster.width.min(raster.height);
    let start_x = (raster.width - size) / 2;
    let start_y = (raster.height - size) / 2;

    let img = raster.to_rgba_image()?;
    let square = image::imageops::crop_imm(&img, start_x, start_y, size, size).to_image();
    let scaled = image::imageops::resize(
        &square,
        AVATAR_SIZE,
        AVATAR_SIZE,
        image::imageops::FilterType::Triangle,
    );
    Some(Raster::from_rgba_image(scaled))
}

/// Draw the overlay across the entire destination with source-over blending.
///
/// The overlay is stretched to the destination size when it differs. An
/// empty overlay is a no-op.
fn overlay_full_bleed(dst: &mut Raster, overlay: &Raster) {
    if overlay.is_empty() {
        return;
    }

    let stretched;
    let overlay = if overlay.width == dst.width && overlay.height == dst.height {
        overlay
    } else {
        let Some(img) = overlay.to_rgba_image() else {
            return;
        };
        let scaled = image::imageops::resize(
            &img,
            dst.width,
            dst.height,
            image::imageops::FilterType::Triangle,
        );
        stretched = Raster::from_rgba_image(scaled);
        &stretched
    };

    for y in 0..dst.height {
        for x in 0..dst.width {
            let src = overlay.pixel(x, y);
            if src[3] == 0 {
                continue;
            }
            let blended = blend_over(dst.pixel(x, y), src);
            dst.put_pixel(x, y, blended);
        }
    }
}

/// Source-over blend of straight-alpha RGBA pixels.
fn blend_over(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let sa = f32::from(src[3]) / 255.0;
    let da = f32::from(dst[3]) / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return [0; 4];
    }

    let mut out = [0u8; 4];
    for c in 0..3 {
        let blended = (f32::from(src[c]) * sa + f32::from(dst[c]) * da * (1.0 - sa)) / out_a;
        out[c] = blended.round() as u8;
    }
    out[3] = (out_a * 255.0).round() as u8;
    out
}

/// Ticket identifying one render invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTicket(u64);

/// Last-write-wins guard for re-entrant renders.
///
/// Each render invocation takes a ticket from [`begin`](Self::begin); when
/// its (possibly slow) result is ready, [`commit`](Self::commit) installs
/// it only if no newer ticket has been issued since. Superseded renders
/// are not cancelled - their results are simply discarded on arrival.
#[derive(Debug, Default)]
pub struct RenderSequencer {
    issued: u64,
}

impl RenderSequencer {
    /// Create a sequencer with no tickets issued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket. The newest ticket is the only one that can
    /// still commit.
    pub fn begin(&mut self) -> RenderTicket {
        self.issued += 1;
        RenderTicket(self.issued)
    }

    /// Whether a ticket is still the latest issued.
    pub fn is_latest(&self, ticket: RenderTicket) -> bool {
        ticket.0 == self.issued
    }

    /// Install a finished composite into `slot` if its ticket is still the
    /// latest. Returns whether the result was applied.
    pub fn commit(
        &self,
        ticket: RenderTicket,
        composite: Raster,
        slot: &mut Option<Raster>,
    ) -> bool {
        if !self.is_latest(ticket) {
            return false;
        }
        *slot = Some(composite);
        true
    }
}
