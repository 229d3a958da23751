// Copyright (c) fastecc contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use num_bigint::BigUint;
use proptest::prelude::*;
use rand_utils::rand_value;
use utils::Randomizable;

use super::{mul_split, mul_wide, BaseElement, FieldElement, NttField, M};

// MANUAL TESTS
// ================================================================================================

#[test]
fn add() {
    // identity
    let r: BaseElement = rand_value();
    assert_eq!(r, r + BaseElement::ZERO);

    // test addition within bounds
    assert_eq!(BaseElement::from(5u8), BaseElement::from(2u8) + BaseElement::from(3u8));

    // test overflow
    let t = BaseElement::new(M - 1);
    assert_eq!(BaseElement::ZERO, t + BaseElement::ONE);
    assert_eq!(BaseElement::ONE, t + BaseElement::from(2u8));
    assert_eq!(BaseElement::new(M - 2), t + t);
}

#[test]
fn sub() {
    // identity
    let r: BaseElement = rand_value();
    assert_eq!(r, r - BaseElement::ZERO);

    // test subtraction within bounds
    assert_eq!(BaseElement::from(2u8), BaseElement::from(5u8) - BaseElement::from(3u8));

    // test underflow
    let expected = BaseElement::new(M - 2);
    assert_eq!(expected, BaseElement::from(3u8) - BaseElement::from(5u8));
    assert_eq!(BaseElement::ONE, BaseElement::ZERO - BaseElement::new(M - 1));
}

#[test]
fn mul() {
    // identity
    let r: BaseElement = rand_value();
    assert_eq!(BaseElement::ZERO, r * BaseElement::ZERO);
    assert_eq!(r, r * BaseElement::ONE);

    // test multiplication within bounds
    assert_eq!(BaseElement::from(15u8), BaseElement::from(5u8) * BaseElement::from(3u8));

    // test overflow
    let t = BaseElement::new(M - 1);
    assert_eq!(BaseElement::ONE, t * t);
    assert_eq!(BaseElement::new(M - 2), t * BaseElement::from(2u8));
    assert_eq!(BaseElement::new(M - 4), t * BaseElement::from(4u8));

    let t = M.div_ceil(2);
    assert_eq!(BaseElement::ONE, BaseElement::new(t) * BaseElement::from(2u8));
}

#[test]
fn mul_variants_at_bounds() {
    for (a, b) in [(M - 1, M - 1), (M - 1, M - 2), (M - 2, M - 2), (1 << 31, 1 << 31), (0, M - 1)] {
        let expected = ((a as u64 * b as u64) % M as u64) as u32;
        assert_eq!(expected, mul_wide(a, b));
        assert_eq!(expected, mul_split(a, b));
    }
}

#[test]
fn exp() {
    let a = BaseElement::ZERO;
    assert_eq!(a.exp(0), BaseElement::ONE);
    assert_eq!(a.exp(1), BaseElement::ZERO);

    let a = BaseElement::ONE;
    assert_eq!(a.exp(0), BaseElement::ONE);
    assert_eq!(a.exp(1), BaseElement::ONE);
    assert_eq!(a.exp(3), BaseElement::ONE);

    let a: BaseElement = rand_value();
    assert_eq!(a.exp(3), a * a * a);
}

#[test]
fn inv() {
    // identity
    assert_eq!(BaseElement::ONE, BaseElement::inv(BaseElement::ONE));
    assert_eq!(BaseElement::ZERO, BaseElement::inv(BaseElement::ZERO));

    // -1 is its own inverse
    let t = BaseElement::new(M - 1);
    assert_eq!(t, t.inv());
}

#[test]
fn element_as_int() {
    let e = BaseElement::new(u32::MAX);
    assert_eq!(u32::MAX % M, e.as_int());
    assert_eq!(u32::MAX as u64 % M as u64, BaseElement::from(u32::MAX as u64).as_int() as u64);
}

#[test]
fn from_canonical() {
    assert_eq!(Some(BaseElement::new(M - 1)), BaseElement::from_canonical(M - 1));
    assert_eq!(None, BaseElement::from_canonical(M));
    assert_eq!(None, BaseElement::from_canonical(u32::MAX));
}

#[test]
fn from_random_bytes() {
    let bytes = (M - 1).to_le_bytes();
    assert_eq!(Some(BaseElement::new(M - 1)), BaseElement::from_random_bytes(&bytes));
    assert_eq!(None, BaseElement::from_random_bytes(&M.to_le_bytes()));
    assert_eq!(None, BaseElement::from_random_bytes(&u32::MAX.to_le_bytes()));
}

// ROOTS OF UNITY
// ------------------------------------------------------------------------------------------------

#[test]
fn generator_is_primitive() {
    let g = BaseElement::GENERATOR;
    assert_eq!(BaseElement::ONE, g.exp(BaseElement::GROUP_ORDER));
    for q in [2, 3, 5, 7, 13] {
        assert_ne!(BaseElement::ONE, g.exp(BaseElement::GROUP_ORDER / q));
    }
}

#[test]
fn get_root_of_unity() {
    let root_20 = BaseElement::get_root_of_unity(1 << 20);
    assert_eq!(BaseElement::ONE, root_20.exp(1 << 20));
    assert_ne!(BaseElement::ONE, root_20.exp(1 << 19));

    let root_19 = BaseElement::get_root_of_unity(1 << 19);
    assert_eq!(root_20.exp(2), root_19);

    let root_2 = BaseElement::get_root_of_unity(2);
    assert_eq!(BaseElement::new(M - 1), root_2);

    for n in [3usize, 6, 9, 18, 5, 7, 13] {
        let root = BaseElement::get_root_of_unity(n);
        assert_eq!(BaseElement::ONE, root.exp(n as u64));
        for d in 1..n as u64 {
            if n as u64 % d == 0 {
                assert_ne!(BaseElement::ONE, root.exp(d));
            }
        }
    }
}

#[test]
#[should_panic(expected = "root of unity of order 2097152 does not exist")]
fn get_root_of_unity_too_large() {
    let _ = BaseElement::get_root_of_unity(1 << 21);
}

// RANDOMIZED TESTS
// ================================================================================================

proptest! {

    #[test]
    fn add_proptest(a in any::<u32>(), b in any::<u32>()) {
        let v1 = BaseElement::new(a);
        let v2 = BaseElement::new(b);
        let result = v1 + v2;

        let expected = ((a % M) as u64 + (b % M) as u64) % M as u64;
        prop_assert_eq!(expected, result.as_int() as u64);
    }

    #[test]
    fn sub_proptest(a in any::<u32>(), b in any::<u32>()) {
        let v1 = BaseElement::new(a);
        let v2 = BaseElement::new(b);
        let result = v1 - v2;

        let a = a % M;
        let b = b % M;
        let expected = if a < b { M - b + a } else { a - b };

        prop_assert_eq!(expected, result.as_int());
    }

    #[test]
    fn mul_proptest(a in 0..M, b in 0..M) {
        let expected = ((a as u64 * b as u64) % M as u64) as u32;
        prop_assert_eq!(expected, (BaseElement::new(a) * BaseElement::new(b)).as_int());
        prop_assert_eq!(expected, mul_wide(a, b));
        prop_assert_eq!(expected, mul_split(a, b));
    }

    #[test]
    fn exp_proptest(a in any::<u32>(), b in any::<u64>()) {
        let result = BaseElement::new(a).exp(b);

        let b = BigUint::from(b);
        let m = BigUint::from(M);
        let expected = BigUint::from(a % M).modpow(&b, &m).to_u32_digits();
        let expected = expected.first().copied().unwrap_or(0);
        prop_assert_eq!(expected, result.as_int());
    }

    #[test]
    fn inv_proptest(a in any::<u32>()) {
        let a = BaseElement::new(a);
        let b = a.inv();

        let expected = if a == BaseElement::ZERO { BaseElement::ZERO } else { BaseElement::ONE };
        prop_assert_eq!(expected, a * b);
    }

    #[test]
    fn div_proptest(a in any::<u32>(), b in 1..M) {
        let a = BaseElement::new(a);
        let b = BaseElement::new(b);
        prop_assert_eq!(a, (a / b) * b);
    }
}
