//! Primality oracle used to filter pyramid cells.
//!
//! Trial division over the `6k ± 1` wheel: after ruling out 2 and 3, every
//! remaining prime candidate is adjacent to a multiple of six, so only
//! divisors `5, 7, 11, 13, ...` up to `sqrt(n)` are checked.
//!
//! ### Complexity
//! \(O(\sqrt{n})\) divisions, no allocation.

use num_traits::PrimInt;

/// Returns `true` if `n` is prime.
///
/// Values `<= 1` (including every negative value) are not prime.
///
/// ```
/// use prime_pyramid::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(97_i64));
/// assert!(!is_prime(1));
/// assert!(!is_prime(-7));
/// assert!(!is_prime(25_u32));
/// ```
pub fn is_prime<T: PrimInt>(n: T) -> bool {
    let one = T::one();
    let two = one + one;
    let three = two + one;

    if n <= one {
        return false;
    }
    if n <= three {
        return true;
    }
    if n % two == T::zero() || n % three == T::zero() {
        return false;
    }

    let six = three + three;
    let mut i = three + two;
    // `i <= n / i` keeps the bound check overflow-free near `T::max_value()`.
    while i <= n / i {
        if n % i == T::zero() || n % (i + two) == T::zero() {
            return false;
        }
        i = i + six;
    }

    true
}
