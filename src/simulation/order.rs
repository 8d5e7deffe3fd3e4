use crate::card::ShuffleKind;

/// Multiplicative order of 2 modulo `modulus`: the smallest `k > 0` with
/// `2^k ≡ 1 (mod modulus)`. Modulus 1 yields 1. Returns `None` for an even
/// modulus (2 has no order there) or zero.
pub fn multiplicative_order(modulus: usize) -> Option<usize> {
    if modulus == 0 || (modulus % 2 == 0) {
        return None;
    }
    if modulus == 1 {
        return Some(1);
    }

    let modulus = modulus as u64;
    let mut power = 2 % modulus;
    let mut k = 1;
    while power != 1 {
        power = (power * 2) % modulus;
        k += 1;
    }
    Some(k)
}

/// Restoration count predicted by number theory: order of 2 mod n+1 for
/// in-shuffles, mod n-1 for out-shuffles
pub fn closed_form_restoration(size: usize, kind: ShuffleKind) -> Option<usize> {
    match kind {
        ShuffleKind::In => multiplicative_order(size + 1),
        ShuffleKind::Out => multiplicative_order(size.checked_sub(1)?),
    }
}
