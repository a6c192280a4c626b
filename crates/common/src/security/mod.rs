//! Security primitives for handling sensitive cryptographic material

pub mod secret;

pub use secret::{EphemeralSecret, SecretBuffer, SecureZeroingType, ZeroizeGuard};

/// Memory barrier utilities
pub mod barrier {
    use core::sync::atomic::{compiler_fence, Ordering};

    /// Insert a compiler fence to prevent reordering around secret clearing
    #[inline(always)]
    pub fn compiler_fence_seq_cst() {
        compiler_fence(Ordering::SeqCst);
    }

    /// Execute a closure with compiler fences before and after
    #[inline(always)]
    pub fn with_barriers<T, F: FnOnce() -> T>(f: F) -> T {
        compiler_fence_seq_cst();
        let result = f();
        compiler_fence_seq_cst();
        result
    }
}
