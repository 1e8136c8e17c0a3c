use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cleanops_pricing::{
    breakdown, price, quote, AddOnService, CleaningType, CountInput, PricedFields, QuoteRequest,
    RoomCount,
};

fn busy_order() -> PricedFields {
    let mut fields = PricedFields {
        cleaning_type: Some(CleaningType::Deep),
        number_of_rooms: RoomCount::from(4u32),
        number_of_bathrooms: RoomCount::from(2u32),
        number_of_kitchens: RoomCount::from(1u32),
        number_of_living_rooms: RoomCount::from(2u32),
        number_of_walls: 6,
        number_of_windows: 12,
        number_of_balcony: 1,
        laundry_loads: 3,
        ..PricedFields::default()
    };
    for service in AddOnService::ALL {
        fields.set_service(*service, true);
    }
    fields
}

fn bench_price(c: &mut Criterion) {
    let fields = busy_order();
    c.bench_function("price/typed_fields", |b| b.iter(|| price(black_box(&fields))));
    c.bench_function("breakdown/typed_fields", |b| {
        b.iter(|| breakdown(black_box(&fields)))
    });
}

fn bench_quote(c: &mut Criterion) {
    let request: QuoteRequest = QuoteRequest {
        cleaning_type: Some("Standard Cleaning".to_string()),
        selected_services: vec!["Inside the Oven".to_string(), "Dishes".to_string()],
        number_of_rooms: Some("3".into()),
        number_of_bathrooms: Some("2 baths".into()),
        number_of_walls: Some(CountInput::Integer(4)),
        ..QuoteRequest::default()
    };
    c.bench_function("quote/lenient_raw_request", |b| {
        b.iter(|| quote(black_box(&request)))
    });
}

criterion_group!(benches, bench_price, bench_quote);
criterion_main!(benches);
