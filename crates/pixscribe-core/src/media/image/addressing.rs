//! Pixel address generation for the payload and signature regions.
//!
//! Both sequences are deterministic and restartable; the encoder and decoder
//! share them, which is what makes the round trip work at all. The payload
//! scan never enters the reserved signature block, so the two regions cannot
//! collide for any carrier size.

/// Edge length of the reserved signature block in the bottom-right corner.
pub(crate) const RESERVED_EDGE: u32 = 9;

/// Top-left corner of the reserved block, clamped for small carriers.
fn reserved_corner(width: u32, height: u32) -> (u32, u32) {
    (
        width.saturating_sub(RESERVED_EDGE),
        height.saturating_sub(RESERVED_EDGE),
    )
}

/// Row-major scan over all odd-column pixels outside the reserved block.
pub(crate) fn payload_addresses(width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> {
    let (x0, y0) = reserved_corner(width, height);
    (0..height)
        .flat_map(move |y| (0..width).map(move |x| (x, y)))
        .filter(move |&(x, y)| x % 2 == 1 && !(x >= x0 && y >= y0))
}

/// Reverse scan over the odd-column pixels of the reserved block, starting
/// at the bottom-right corner.
pub(crate) fn signature_addresses(width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> {
    let (x0, y0) = reserved_corner(width, height);
    (y0..height)
        .rev()
        .flat_map(move |y| (x0..width).rev().map(move |x| (x, y)))
        .filter(|&(x, _)| x % 2 == 1)
}

/// Number of pixels available for payload storage in a carrier of the given size.
pub(crate) fn payload_pixel_count(width: u32, height: u32) -> usize {
    payload_addresses(width, height).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_visit_odd_columns_in_row_major_order() {
        let addresses: Vec<_> = payload_addresses(24, 12).take(14).collect();
        assert_eq!(
            &addresses[..3],
            &[(1, 0), (3, 0), (5, 0)],
            "scan must start at the first odd column of the top row"
        );
        assert_eq!(
            addresses[12],
            (1, 1),
            "scan must wrap to the next row after the last odd column"
        );
    }

    #[test]
    fn should_skip_even_columns() {
        assert!(payload_addresses(24, 12).all(|(x, _)| x % 2 == 1));
        assert!(signature_addresses(24, 12).all(|(x, _)| x % 2 == 1));
    }

    #[test]
    fn should_exclude_the_reserved_block_from_the_payload_region() {
        assert!(payload_addresses(24, 12).all(|(x, y)| !(x >= 15 && y >= 3)));
        // 12 odd columns * 12 rows, minus 5 reserved odd columns * 9 rows
        assert_eq!(payload_pixel_count(24, 12), 144 - 45);
        assert_eq!(payload_pixel_count(40, 10), 155);
    }

    #[test]
    fn should_produce_identical_sequences_on_every_call() {
        let first: Vec<_> = payload_addresses(33, 21).collect();
        let second: Vec<_> = payload_addresses(33, 21).collect();
        assert_eq!(first, second);

        let first: Vec<_> = signature_addresses(33, 21).collect();
        let second: Vec<_> = signature_addresses(33, 21).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn should_scan_the_signature_region_bottom_right_first() {
        let addresses: Vec<_> = signature_addresses(40, 10).take(4).collect();
        assert_eq!(addresses, vec![(39, 9), (37, 9), (35, 9), (33, 9)]);
    }

    #[test]
    fn should_clamp_the_reserved_block_on_small_carriers() {
        // an 8x8 carrier is covered entirely by the reserved block
        assert_eq!(payload_pixel_count(8, 8), 0);
        assert_eq!(signature_addresses(8, 8).count(), 4 * 8);

        // on 10x10 only the top row stays available for payload
        let addresses: Vec<_> = payload_addresses(10, 10).collect();
        assert_eq!(addresses, vec![(1, 0), (3, 0), (5, 0), (7, 0), (9, 0)]);
    }
}
