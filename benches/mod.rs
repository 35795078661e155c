use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use valeq::values;
use valeq::values::traits::custom_eq::CustomEq;
use valeq::values::value::ComparableValue;

#[derive(Debug, PartialEq)]
struct ScalarValue(i64);

impl CustomEq for ScalarValue {
    fn equals(&self, other_value: &dyn ComparableValue) -> bool {
        other_value
            .downcast_ref::<Self>()
            .is_some_and(|other_value| other_value.0 == self.0)
    }
}
valeq::comparable_by_custom_eq!(ScalarValue);

fn bench_equals(c: &mut Criterion) {
    c.bench_function("equals primitive", |b| {
        b.iter(|| values::equals(black_box(&1i64), black_box(&1i64)))
    });

    c.bench_function("equals custom equality", |b| {
        let value = ScalarValue(5);
        let other_value = ScalarValue(5);
        b.iter(|| values::equals(black_box(&value), black_box(&other_value)))
    });

    c.bench_function("equals_one_in mixed list", |b| {
        let one = 1i64;
        let two = 2i64;
        let bar = String::from("bar");
        let three = 3i64;
        let other_values: [&dyn ComparableValue; 4] = [&one, &two, &bar, &three];
        b.iter(|| values::equals_one_in(black_box(&3i64), other_values))
    });
}

criterion_group!(benches, bench_equals);
criterion_main!(benches);
