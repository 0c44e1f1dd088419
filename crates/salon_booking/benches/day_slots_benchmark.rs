use chrono::{NaiveDate, NaiveTime};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use salon_booking::slots::{calculate_day_slots, AvailabilityWindow, Booking};

fn bench_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, 3).unwrap()
}

fn wall_time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

// Helper function to create a full working day split into windows
fn create_windows(count: usize) -> Vec<AvailabilityWindow> {
    let date = bench_date();
    (0..count)
        .map(|i| {
            let hour = 8 + i as u32;
            AvailabilityWindow {
                date,
                start: wall_time(hour, 0),
                end: wall_time(hour, 50),
            }
        })
        .collect()
}

// Helper function to create a list of existing bookings
fn create_bookings(count: usize) -> Vec<Booking> {
    let date = bench_date();
    (0..count)
        .map(|i| {
            let hour = 8 + (i as u32 % 10);
            let minute = (i as u32 / 10) * 15;
            Booking {
                date,
                start: wall_time(hour, minute),
                end: wall_time(hour, minute + 15),
            }
        })
        .collect()
}

fn benchmark_calculate_day_slots(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_day_slots");
    let date = bench_date();
    // The previous day, so no slot is cut off as past.
    let now = date.pred_opt().unwrap().and_hms_opt(12, 0, 0).unwrap();

    // Benchmark with no existing bookings
    group.bench_function("no_bookings", |b| {
        let windows = create_windows(10);
        let bookings = Vec::new();
        b.iter(|| {
            calculate_day_slots(
                black_box(date),
                black_box(15),
                black_box(&windows),
                black_box(&bookings),
                black_box(now),
            )
        })
    });

    // Benchmark with a handful of bookings
    group.bench_function("few_bookings", |b| {
        let windows = create_windows(10);
        let bookings = create_bookings(5);
        b.iter(|| {
            calculate_day_slots(
                black_box(date),
                black_box(15),
                black_box(&windows),
                black_box(&bookings),
                black_box(now),
            )
        })
    });

    // Benchmark with a busy day
    group.bench_function("many_bookings", |b| {
        let windows = create_windows(10);
        let bookings = create_bookings(30);
        b.iter(|| {
            calculate_day_slots(
                black_box(date),
                black_box(15),
                black_box(&windows),
                black_box(&bookings),
                black_box(now),
            )
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_calculate_day_slots);
criterion_main!(benches);
