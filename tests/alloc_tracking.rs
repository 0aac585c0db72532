//! Counts heap traffic on the current thread to check that a tensor releases
//! its buffer exactly once.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use tensor4d::Tensor4D;

struct CountingAlloc;

thread_local! {
    static LIVE_BYTES: Cell<isize> = const { Cell::new(0) };
}

fn live_bytes() -> isize {
    LIVE_BYTES.with(Cell::get)
}

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            let _ = LIVE_BYTES.try_with(|c| c.set(c.get() + layout.size() as isize));
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        let _ = LIVE_BYTES.try_with(|c| c.set(c.get() - layout.size() as isize));
        System.dealloc(ptr, layout)
    }
}

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

#[test]
fn test_tensor_releases_buffer_once() {
    let data: Vec<f64> = (0..24).map(f64::from).collect();
    let other: Vec<f64> = vec![1.0; 6];

    let before = live_bytes();
    {
        let mut t0 = Tensor4D::new([1, 2, 3, 4], &data).unwrap();
        let t1 = Tensor4D::new([1, 2, 3, 1], &other).unwrap();
        let during = live_bytes() - before;
        assert_eq!(during, (30 * std::mem::size_of::<f64>()) as isize);

        t0 += &t1;
        assert_eq!(live_bytes() - before, during);
    }
    assert_eq!(live_bytes(), before);
}
