/// Integration tests for hdcopy

use hdcopy::format::constants::{PRESENCE_TABLE_SIZE, SECTOR_SIZE};
use hdcopy::*;
use proptest::prelude::*;
use std::io::Cursor;

/// Compress one head-surface the way HD-COPY does: least frequent byte as escape
fn encode_surface(data: &[u8]) -> Vec<u8> {
    let mut counts = [0usize; 256];
    for &b in data {
        counts[b as usize] += 1;
    }
    let escape = (0..=255u8)
        .min_by_key(|&b| counts[b as usize])
        .expect("non-empty range");

    let mut body = vec![escape];
    let mut i = 0;
    while i < data.len() {
        let b = data[i];
        let mut run = 1;
        while i + run < data.len() && data[i + run] == b && run < 255 {
            run += 1;
        }
        if b == escape || run > 3 {
            body.extend_from_slice(&[escape, b, run as u8]);
        } else {
            body.extend(std::iter::repeat(b).take(run));
        }
        i += run;
    }
    body
}

/// Build a container from per-surface data (`None` = blank surface)
fn build_container(max_track: u8, spt: u8, surfaces: &[Option<Vec<u8>>], prefixed: bool) -> Vec<u8> {
    let mut raw = Vec::new();
    if prefixed {
        raw.extend_from_slice(&[0xFF, 0x18]);
        raw.extend_from_slice(b"HDCOPY17\x00\x00\x01\x02");
    }

    raw.push(max_track);
    raw.push(spt);
    let mut table = [0u8; PRESENCE_TABLE_SIZE];
    for (i, surface) in surfaces.iter().enumerate() {
        table[i] = surface.is_some() as u8;
    }
    raw.extend_from_slice(&table);

    for data in surfaces.iter().flatten() {
        let body = encode_surface(data);
        raw.extend_from_slice(&(body.len() as u16).to_le_bytes());
        raw.extend_from_slice(&body);
    }
    raw
}

fn expected_output(spt: u8, surfaces: &[Option<Vec<u8>>]) -> Vec<u8> {
    let track_size = spt as usize * SECTOR_SIZE;
    surfaces
        .iter()
        .flat_map(|s| s.clone().unwrap_or_else(|| vec![0; track_size]))
        .collect()
}

fn patterned_track(track: u8, head: u8, spt: u8) -> Vec<u8> {
    let mut data = Vec::with_capacity(spt as usize * SECTOR_SIZE);
    for sector in 1..=spt {
        data.extend_from_slice(&[track, head, sector]);
        data.resize(data.len() + SECTOR_SIZE - 3, 0xF6);
    }
    data
}

#[test]
fn test_decode_1_44m_image() {
    let mut surfaces = Vec::new();
    for track in 0..80u8 {
        for head in 0..2u8 {
            surfaces.push(if track % 3 == 2 {
                None
            } else {
                Some(patterned_track(track, head, 18))
            });
        }
    }
    let raw = build_container(79, 18, &surfaces, false);

    let image = Decoder::new()
        .strict(true)
        .decode_image(&raw)
        .expect("Failed to decode image");

    assert_eq!(image.len(), 1_474_560);
    assert!(image.is_complete());
    assert_eq!(image.geometry(), Geometry::ibm_pc_1_44m());
    assert_eq!(image.geometry().known_name(), Some("1.44M 3.5\" HD"));

    let sector = image.read_sector(40, 1, 7).expect("Failed to read sector");
    assert_eq!(&sector[..3], &[40, 1, 7]);
    assert!(sector[3..].iter().all(|&b| b == 0xF6));

    let blank = image.read_sector(41, 0, 1).expect("Failed to read sector");
    assert!(blank.iter().all(|&b| b == 0));

    assert_eq!(image.into_bytes(), expected_output(18, &surfaces));
}

#[test]
fn test_preamble_skips_exactly_fourteen_bytes() {
    let surfaces = vec![Some(patterned_track(0, 0, 1)), None];
    let bare = build_container(0, 1, &surfaces, false);
    let prefixed = build_container(0, 1, &surfaces, true);

    assert_eq!(prefixed.len(), bare.len() + 14);
    assert_eq!(detect_format(&prefixed), Some(ContainerFormat::Prefixed));
    assert_eq!(decode(&prefixed).unwrap(), decode(&bare).unwrap());
}

#[test]
fn test_other_signature_uses_offset_zero() {
    // 0xFF as the highest track index is out of range, proving it was parsed as layout
    let mut raw = vec![0xFF, 0x17];
    raw.extend_from_slice(&[0u8; PRESENCE_TABLE_SIZE]);
    let err = decode(&raw).unwrap_err();
    assert!(matches!(err, HdCopyError::InvalidFormat(_)));
}

#[test]
fn test_total_length_invariant() {
    let surfaces = vec![Some(vec![0xE5; 9216]), Some(vec![0x00; 9216])];
    let raw = build_container(0, 18, &surfaces, false);
    let out = decode(&raw).unwrap();
    assert_eq!(out.len(), 18432);
    assert!(out[..9216].iter().all(|&b| b == 0xE5));
    assert!(out[9216..].iter().all(|&b| b == 0x00));
}

#[test]
fn test_truncation_failures() {
    let surfaces = vec![Some(patterned_track(0, 0, 2)), Some(patterned_track(0, 1, 2))];
    let raw = build_container(0, 2, &surfaces, false);

    // Mid-header
    assert!(decode(&raw[..50]).unwrap_err().is_format_error());
    // Mid-length prefix of the first block
    assert!(decode(&raw[..171]).unwrap_err().is_format_error());
    // Declared block length exceeds what remains
    assert!(matches!(
        decode(&raw[..raw.len() - 1]),
        Err(HdCopyError::Truncated { what: "block body", .. })
    ));
}

#[test]
fn test_inspect_and_presence_map() {
    let surfaces = vec![
        Some(patterned_track(0, 0, 9)),
        None,
        None,
        Some(vec![0x00; 9 * SECTOR_SIZE]),
    ];
    let raw = build_container(1, 9, &surfaces, true);

    let info = inspect(&raw).expect("Failed to inspect");
    assert_eq!(info.format, ContainerFormat::Prefixed);
    assert_eq!(info.header.present_count(), 2);
    assert_eq!(info.surface(0, 1), Some(&SurfaceEntry::Blank));
    assert!(matches!(
        info.surface(0, 0),
        Some(SurfaceEntry::Stored { offset: 186, .. })
    ));
    assert_eq!(info.container_len, raw.len());
    assert!(info.compressed_len() < raw.len());

    let map = render_presence_map(&info.header);
    assert_eq!(map.lines().collect::<Vec<_>>(), vec!["H1 ░▓", "H0 ▓░", "   0 "]);
}

#[test]
fn test_read_and_write_adapters() {
    let surfaces = vec![None, Some(patterned_track(0, 1, 1))];
    let raw = build_container(0, 1, &surfaces, false);

    let image = read_container(Cursor::new(raw)).expect("Failed to read container");
    let mut out = Vec::new();
    write_linear(&image, &mut out).expect("Failed to write image");
    assert_eq!(out, expected_output(1, &surfaces));
}

#[test]
fn test_cancel_mid_image_on_worker_thread() {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    let surfaces: Vec<Option<Vec<u8>>> = (0..20).map(|_| Some(vec![0xE5; SECTOR_SIZE])).collect();
    let raw = build_container(9, 1, &surfaces, false);
    let flag = Arc::new(AtomicBool::new(false));

    let worker_flag = Arc::clone(&flag);
    let result = std::thread::spawn(move || {
        let stop_after_quarter = |done: f64| {
            if done >= 0.25 {
                worker_flag.store(true, Ordering::Relaxed);
            }
        };
        Decoder::new()
            .cancel_flag(&worker_flag)
            .progress_callback(&stop_after_quarter)
            .decode(&raw)
    })
    .join()
    .expect("worker panicked");

    assert!(flag.load(Ordering::Relaxed));
    assert!(matches!(result, Err(HdCopyError::Cancelled { track: 3 })));
}

#[test]
fn test_lenient_short_block_not_addressable() {
    // Head 0 stores two literal bytes; head 1 expands to 510 bytes
    let mut raw = build_container(0, 1, &[None, None], false);
    raw[2] = 1;
    raw[3] = 1;
    raw.extend_from_slice(&[0x03, 0x00, 0x00, 0x11, 0x22]);
    raw.extend_from_slice(&[0x07, 0x00, 0x00, 0x00, 0xAB, 0xFF, 0x00, 0xAB, 0xFF]);

    let image = Decoder::new().decode_image(&raw).expect("Failed to decode image");
    assert_eq!(image.len(), SECTOR_SIZE);
    assert!(!image.is_complete());
    assert!(matches!(
        image.read_sector(0, 0, 1),
        Err(HdCopyError::TrackSizeMismatch { head: 0, actual: 2, .. })
    ));
    assert!(image.read_sector(0, 1, 1).unwrap_err().is_format_error());
}

fn surface_data(len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec((any::<u8>(), 1usize..300), 1..64).prop_map(move |runs| {
        let mut data: Vec<u8> = runs
            .into_iter()
            .flat_map(|(b, n)| std::iter::repeat(b).take(n))
            .collect();
        data.resize(len, 0);
        data
    })
}

fn container_parts() -> impl Strategy<Value = (u8, u8, Vec<Option<Vec<u8>>>, bool)> {
    (0u8..4, 1u8..3, any::<bool>()).prop_flat_map(|(max_track, spt, prefixed)| {
        let len = spt as usize * SECTOR_SIZE;
        let count = (max_track as usize + 1) * 2;
        (
            Just(max_track),
            Just(spt),
            prop::collection::vec(prop::option::of(surface_data(len)), count),
            Just(prefixed),
        )
    })
}

proptest! {
    #[test]
    fn prop_decode_reproduces_surfaces((max_track, spt, surfaces, prefixed) in container_parts()) {
        let raw = build_container(max_track, spt, &surfaces, prefixed);
        let image = Decoder::new().strict(true).decode_image(&raw).unwrap();

        let expected = expected_output(spt, &surfaces);
        prop_assert!(image.is_complete());
        prop_assert_eq!(image.data(), expected.as_slice());
    }

    #[test]
    fn prop_any_truncation_fails(
        (max_track, spt, surfaces, prefixed) in container_parts(),
        cut in any::<prop::sample::Index>(),
    ) {
        let raw = build_container(max_track, spt, &surfaces, prefixed);
        let cut = cut.index(raw.len());
        let err = decode(&raw[..cut]).unwrap_err();
        prop_assert!(err.is_format_error());
    }
}
