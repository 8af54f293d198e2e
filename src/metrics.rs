//! Memory accounting for the command line report
//!
//! [`TrackingAllocator`] wraps the system allocator and keeps a running total
//! of live heap bytes, so the CLI can report how much memory loading and
//! searching a word list consumed.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicI64, Ordering};

static ALLOCATED: AtomicI64 = AtomicI64::new(0);

/// System allocator that counts live bytes
pub struct TrackingAllocator;

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            ALLOCATED.fetch_add(layout.size() as i64, Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        ALLOCATED.fetch_sub(layout.size() as i64, Ordering::Relaxed);
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() {
            ALLOCATED.fetch_add(layout.size() as i64, Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            ALLOCATED.fetch_add(new_size as i64 - layout.size() as i64, Ordering::Relaxed);
        }
        new_ptr
    }
}

/// Live heap bytes allocated through [`TrackingAllocator`].
///
/// Always zero unless the allocator is installed as the global allocator.
pub fn allocated_bytes() -> i64 {
    ALLOCATED.load(Ordering::Relaxed)
}

/// Format a byte count with decimal suffixes (B, KB, MB, GB, TB), at most four
/// decimal places and the sign preserved.
pub fn pretty_size(bytes: i64) -> String {
    const SUFFIXES: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    let mut value = (bytes as f64).abs();
    let mut index = 0;
    while value >= 1000.0 && index < SUFFIXES.len() - 1 {
        value /= 1000.0;
        index += 1;
    }

    let mut number = format!("{:.4}", value);
    if number.contains('.') {
        number = number.trim_end_matches('0').trim_end_matches('.').to_string();
    }

    let sign = if bytes < 0 { "-" } else { "" };
    format!("{}{}{}", sign, number, SUFFIXES[index])
}
