#[cfg(feature = "parallel")]
use rayon::prelude::*;

use glam::Vec3;

use crate::core::volume::CollisionVolume;

/// Applies the same per-axis rescale to every volume in the slice.
///
/// Each volume is borrowed exclusively by a single worker, so no volume is
/// read while another worker mutates it.
pub fn rescale_volumes(volumes: &mut [CollisionVolume], factors: Vec3) {
    #[cfg(feature = "parallel")]
    volumes
        .par_iter_mut()
        .for_each(|volume| volume.rescale_axes(factors.x, factors.y, factors.z));

    #[cfg(not(feature = "parallel"))]
    volumes
        .iter_mut()
        .for_each(|volume| volume.rescale_axes(factors.x, factors.y, factors.z));
}

/// Rescales each volume by its own factors, e.g. per-instance size jitter.
///
/// Extra entries in the longer slice are ignored.
pub fn rescale_volumes_each(volumes: &mut [CollisionVolume], factors: &[Vec3]) {
    #[cfg(feature = "parallel")]
    volumes
        .par_iter_mut()
        .zip(factors.par_iter())
        .for_each(|(volume, f)| volume.rescale_axes(f.x, f.y, f.z));

    #[cfg(not(feature = "parallel"))]
    volumes
        .iter_mut()
        .zip(factors.iter())
        .for_each(|(volume, f)| volume.rescale_axes(f.x, f.y, f.z));
}
