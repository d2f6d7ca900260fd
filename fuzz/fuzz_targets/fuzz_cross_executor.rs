#![no_main]

use libfuzzer_sys::fuzz_target;

use trapcalc_core::IntegrationRequest;
use trapcalc_orchestration::{integrate, SequentialExecutor, ThreadExecutor};

fuzz_target!(|data: &[u8]| {
    if data.len() < 5 {
        return;
    }
    // Bounds in [0, 50], n capped at 20000 and tn at 16 for speed.
    let a = i64::from(data[0] % 51);
    let b = i64::from(data[1] % 51);
    let n = u64::from(u16::from_le_bytes([data[2], data[3]]) % 20_000) + 1;
    let tn = usize::from(data[4] % 16) + 1;

    let request = IntegrationRequest::new(a.min(b), a.max(b), n, tn).unwrap();
    let threads = integrate(&request, &ThreadExecutor::new()).unwrap();
    let sequential = integrate(&request, &SequentialExecutor::new()).unwrap();

    assert!(threads.value.is_finite());
    assert_eq!(threads.value.to_bits(), sequential.value.to_bits());
});
