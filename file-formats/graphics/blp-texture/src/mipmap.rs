//! Mip level dimensions and selection of the level that best fits a target
//! resolution.

use crate::error::{BlpError, Result};
use crate::types::{BlpHeader, MAX_MIP_LEVELS};
use log::*;

/// Dimensions of mip level `level` of a `width` x `height` image. Each axis
/// halves per level and never drops below 1.
pub fn level_dimensions(width: u32, height: u32, level: usize) -> (u32, u32) {
    let shrink = |v: u32| v.checked_shr(level as u32).unwrap_or(0).max(1);
    (shrink(width), shrink(height))
}

/// Picks the level whose dimensions are no smaller than the target, unless
/// that level is the last one the chain can shrink to.
///
/// Walking down the chain stops at level `L` once level `L + 1` fits inside
/// the target on both axes. In addition, as soon as level `L` is smaller than
/// the target on either axis, `L - 1` (or 0) is returned. A plain "stop when
/// the next level fits" walk never fires in that case and would run on to
/// the 1x1 level: for targets larger than the texture, or for non-square
/// textures whose short side reaches 1 before the long side fits. Here
/// those cases yield level 0 or the last level that still covers the target.
///
/// Only looks at dimensions; use [`best_matching_level`] to also account for
/// which levels are actually stored.
pub fn select_level(
    width: u32,
    height: u32,
    has_mipmaps: bool,
    target_width: u32,
    target_height: u32,
) -> usize {
    if !has_mipmaps {
        return 0;
    }

    for level in 0..MAX_MIP_LEVELS {
        let (w, h) = level_dimensions(width, height, level);
        let (lw, lh) = level_dimensions(width, height, level + 1);

        if w == 1 && h == 1 && lw == 1 && lh == 1 {
            return level;
        }

        // Further levels only shrink, so once this level undershoots on an
        // axis the previous one is the smallest that still covers the target.
        if w < target_width || h < target_height {
            return level.saturating_sub(1);
        }

        if lw <= target_width && lh <= target_height {
            return level;
        }
    }

    MAX_MIP_LEVELS - 1
}

/// Walks from `level` towards level 0 and returns the first stored level
pub fn fallback_to_present(header: &BlpHeader, level: usize) -> Result<usize> {
    let start = level.min(MAX_MIP_LEVELS - 1);
    (0..=start)
        .rev()
        .find(|&candidate| header.is_level_present(candidate))
        .ok_or(BlpError::NoDecodableLevel(level))
}

/// Stored level that best matches `target_width` x `target_height`
pub fn best_matching_level(
    header: &BlpHeader,
    target_width: u32,
    target_height: u32,
) -> Result<usize> {
    let selected = select_level(
        header.width,
        header.height,
        header.has_mipmaps(),
        target_width,
        target_height,
    );
    let level = fallback_to_present(header, selected)?;
    if level != selected {
        debug!("Mip level {selected} is not stored, falling back to level {level}");
    }
    trace!(
        "Best level for {target_width}x{target_height} on {}x{} is {level}",
        header.width, header.height
    );
    Ok(level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BLP_MAGIC, HEADER_SIZE};
    use proptest::prelude::*;

    fn header(width: u32, height: u32, present: &[usize]) -> BlpHeader {
        let mut mip_offsets = [0; MAX_MIP_LEVELS];
        let mut mip_sizes = [0; MAX_MIP_LEVELS];
        for &level in present {
            mip_offsets[level] = (HEADER_SIZE + level * 16) as u32;
            mip_sizes[level] = 16;
        }
        BlpHeader {
            magic: BLP_MAGIC,
            version: 1,
            compression: 2,
            alpha_depth: 0,
            alpha_compression: 0,
            mip_levels: 1,
            width,
            height,
            mip_offsets,
            mip_sizes,
        }
    }

    #[test]
    fn test_level_dimensions() {
        assert_eq!(level_dimensions(256, 64, 0), (256, 64));
        assert_eq!(level_dimensions(256, 64, 3), (32, 8));
        assert_eq!(level_dimensions(256, 64, 7), (2, 1));
        assert_eq!(level_dimensions(256, 64, 15), (1, 1));
        assert_eq!(level_dimensions(256, 64, 40), (1, 1));
    }

    #[test]
    fn test_select_square() {
        assert_eq!(select_level(256, 256, true, 256, 256), 0);
        // The next level exactly matching the target does not win over this one
        assert_eq!(select_level(256, 256, true, 128, 128), 0);
        assert_eq!(select_level(256, 256, true, 100, 100), 1);
        assert_eq!(select_level(256, 256, true, 1, 1), 7);
        assert_eq!(select_level(256, 256, true, 0, 0), 8);
    }

    #[test]
    fn test_select_without_mipmaps() {
        assert_eq!(select_level(256, 256, false, 1, 1), 0);
    }

    #[test]
    fn test_select_larger_target_keeps_level_zero() {
        assert_eq!(select_level(64, 64, true, 1024, 1024), 0);
    }

    #[test]
    fn test_select_non_square() {
        // 256x64 against 64x64: level 0 is the only level tall enough
        assert_eq!(select_level(256, 64, true, 64, 64), 0);
        // 256x64 against 32x8: level 2 (64x16) is followed by an exact 32x8
        assert_eq!(select_level(256, 64, true, 32, 8), 2);
        // 256x4 against 16x4: level 1 is already too short, long before 16x1
        assert_eq!(select_level(256, 4, true, 16, 4), 0);
    }

    #[test]
    fn test_best_level_falls_back_to_stored_level() {
        let h = header(256, 256, &[0, 1]);
        // Level 2 is selected by size, level 1 is the closest stored one
        assert_eq!(best_matching_level(&h, 32, 32).unwrap(), 1);
    }

    #[test]
    fn test_best_level_without_stored_levels() {
        let h = header(256, 256, &[]);
        assert!(matches!(
            best_matching_level(&h, 32, 32),
            Err(BlpError::NoDecodableLevel(2))
        ));
    }

    #[test]
    fn test_fallback_skips_gaps() {
        let h = header(256, 256, &[0, 4]);
        assert_eq!(fallback_to_present(&h, 6).unwrap(), 4);
        assert_eq!(fallback_to_present(&h, 3).unwrap(), 0);
        assert_eq!(fallback_to_present(&h, 4).unwrap(), 4);
    }

    proptest! {
        #[test]
        fn level_zero_matches_own_size(width in 1u32..4096, height in 1u32..4096) {
            prop_assert_eq!(select_level(width, height, true, width, height), 0);
        }

        #[test]
        fn selected_level_covers_target(
            width in 1u32..4096,
            height in 1u32..4096,
            tw in 0u32..4096,
            th in 0u32..4096,
        ) {
            let level = select_level(width, height, true, tw, th);
            let (w, h) = level_dimensions(width, height, level);
            let terminal = w == 1 && h == 1;
            let larger_than_texture = width < tw || height < th;
            prop_assert!(terminal || larger_than_texture || (w >= tw && h >= th));
        }
    }
}
