#![no_main]
// Targets: every group, selected by the first input byte
use ecmath::{engine, BigUint, Error, Group};
use libfuzzer_sys::fuzz_target;

fn test_group(group: Group, a: &BigUint, b: &BigUint) {
    let n = group.order();

    // Decoding must reject anything unreduced
    let decoded = (
        group.decode_scalar(&a.to_bytes_be()),
        group.decode_scalar(&b.to_bytes_be()),
    );
    let (a, b) = match decoded {
        (Ok(a), Ok(b)) => (a, b),
        _ => {
            assert!(a >= &n || b >= &n);
            assert_eq!(engine::scalar_add(group, a, b), Err(Error::InvalidOperand));
            return;
        }
    };

    let sum = engine::scalar_add(group, &a, &b).unwrap();
    let product = engine::scalar_mul(group, &a, &b).unwrap();
    assert_eq!(sum, (&a + &b) % &n);
    assert_eq!(product, (&a * &b) % &n);
    assert_eq!(engine::scalar_sub(group, &sum, &b).unwrap(), a);

    match engine::scalar_inverse(group, &b) {
        Ok(inverse) => {
            let one = engine::scalar_mul(group, &b, &inverse).unwrap();
            assert_eq!(one, BigUint::from(1u8));
        }
        Err(err) => {
            assert_eq!(err, Error::NotInvertible);
            assert_eq!(b, BigUint::default());
        }
    }

    match engine::scalar_div(group, &a, &b) {
        Ok(quotient) => assert_eq!(quotient, &a / &b),
        Err(err) => assert_eq!(err, Error::DivisionByZero),
    }
}

fuzz_target!(|data: &[u8]| {
    let groups = Group::all();
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };

    let group = groups[usize::from(selector) % groups.len()];
    let (a, b) = rest.split_at(rest.len() / 2);
    test_group(group, &BigUint::from_bytes_be(a), &BigUint::from_bytes_be(b));
});
