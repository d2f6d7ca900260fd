#![no_main]

use libfuzzer_sys::fuzz_target;

use trapcalc_core::{partition, IntegrationRequest};

fuzz_target!(|data: &[u8]| {
    if data.len() < 6 {
        return;
    }
    // First 4 bytes: n; next 2 bytes: tn. Both kept non-zero.
    let n = u64::from(u32::from_le_bytes([data[0], data[1], data[2], data[3]])) + 1;
    let tn = usize::from(u16::from_le_bytes([data[4], data[5]]) % 1024) + 1;

    let Ok(request) = IntegrationRequest::new(0, 1, n, tn) else {
        return;
    };
    let tasks = partition(&request);

    assert_eq!(tasks.len(), tn);
    assert_eq!(tasks[0].start, 0);
    assert_eq!(tasks[tn - 1].end, n);
    for pair in tasks.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
});
