#![no_main]
// Targets: every group, selected by the first input byte
use ecmath::{engine, BigUint, Group, Point};
use libfuzzer_sys::fuzz_target;

fn test_group(group: Group, p1: &Point, p2: &Point, k: &BigUint) {
    // Test point arithmetic
    let sum = engine::point_add(group, p1, p2).unwrap();
    let scalar_mul = engine::point_mul(group, p1, k).unwrap();

    // Test that addition and doubling are consistent
    let doubled = engine::point_mul(group, p1, &2u8.into()).unwrap();
    assert_eq!(doubled, engine::point_add(group, p1, p1).unwrap());

    // Test that negation works correctly
    let negated = engine::point_negate(group, &sum).unwrap();
    assert_eq!(engine::point_add(group, &sum, &negated).unwrap(), Point::Identity);
    assert_eq!(engine::point_sub(group, &sum, p2).unwrap(), *p1);

    // Test scalar multiplication distributive property
    let twice = engine::point_add(group, &scalar_mul, &scalar_mul).unwrap();
    assert_eq!(twice, engine::point_mul(group, p1, &(k * 2u8)).unwrap());
}

fuzz_target!(|data: &[u8]| {
    let groups = Group::all();
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };

    let group = groups[usize::from(selector) % groups.len()];
    let len = group.field_size() + 1;

    if rest.len() < 2 * len {
        return;
    }

    // Primarily tests deserialization: malformed encodings fall back to known points
    let p1 = group
        .decode_point(&rest[..len])
        .unwrap_or_else(|_| group.generator());
    let p2 = group
        .decode_point(&rest[len..2 * len])
        .unwrap_or(Point::Identity);
    let k = BigUint::from_bytes_be(&rest[2 * len..]);

    for point in [&p1, &p2] {
        assert!(group.contains(point));

        if let Ok(encoded) = group.encode_point(point, true) {
            assert_eq!(group.decode_point(&encoded).as_ref(), Ok(point));
        }
    }

    test_group(group, &p1, &p2, &k);
});
