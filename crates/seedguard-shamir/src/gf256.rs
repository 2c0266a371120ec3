//! GF(2^8) arithmetic for the threshold splitter
//!
//! Field of 256 elements over the AES reduction polynomial
//! x^8 + x^4 + x^3 + x + 1 (0x11B). Addition is XOR; multiplication is
//! carry-less shift-and-add with modular reduction; inversion uses Fermat's
//! little theorem (a^254).

/// Add two field elements (XOR)
#[inline]
pub fn add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Subtract two field elements (identical to addition in characteristic 2)
#[inline]
pub fn sub(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Multiply two field elements
pub fn mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    for _ in 0..8 {
        if b & 1 != 0 {
            product ^= a;
        }
        let carry = a & 0x80;
        a <<= 1;
        if carry != 0 {
            a ^= 0x1B; // reduce by x^8 + x^4 + x^3 + x + 1
        }
        b >>= 1;
    }
    product
}

/// Multiplicative inverse (a^254 by square-and-multiply)
pub fn inv(a: u8) -> u8 {
    assert!(a != 0, "inverse of zero in GF(256)");
    let mut result = 1u8;
    let mut base = a;
    let mut exp = 254u8;
    while exp > 0 {
        if exp & 1 != 0 {
            result = mul(result, base);
        }
        base = mul(base, base);
        exp >>= 1;
    }
    result
}

/// Divide two field elements
pub fn div(a: u8, b: u8) -> u8 {
    assert!(b != 0, "division by zero in GF(256)");
    mul(a, inv(b))
}

/// Evaluate a polynomial at `x` using Horner's method.
/// `coefficients[0]` is the constant term.
pub fn poly_eval(coefficients: &[u8], x: u8) -> u8 {
    let mut result = 0u8;
    for &coef in coefficients.iter().rev() {
        result = add(mul(result, x), coef);
    }
    result
}

/// Lagrange interpolation at x = 0 to recover the polynomial's constant term.
/// `points` holds `(x, y)` pairs with distinct nonzero x-coordinates.
pub fn interpolate_at_zero(points: &[(u8, u8)]) -> u8 {
    let mut secret = 0u8;

    for (i, &(xi, yi)) in points.iter().enumerate() {
        let mut numerator = 1u8;
        let mut denominator = 1u8;

        for (j, &(xj, _)) in points.iter().enumerate() {
            if i != j {
                // (0 - xj) = xj in characteristic 2
                numerator = mul(numerator, xj);
                denominator = mul(denominator, sub(xi, xj));
            }
        }

        let basis = div(numerator, denominator);
        secret = add(secret, mul(yi, basis));
    }

    secret
}
