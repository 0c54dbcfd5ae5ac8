use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fdatetime::{DateTimeFormat, Endian, FatDateTime, Filetime, StringFormatFlags};

fn bench_fat_decode_and_render(c: &mut Criterion) {
    let bytes = [0x0c, 0x3d, 0xd0, 0xa8];
    c.bench_function("fat::decode_and_render", |b| {
        b.iter(|| {
            let fat = FatDateTime::from_byte_stream(black_box(&bytes), Endian::Little).unwrap();
            let flags = StringFormatFlags::DATE_TIME;
            let size = FatDateTime::string_size(flags, DateTimeFormat::Ctime).unwrap();
            let mut buf = vec![0u8; size];
            let mut idx = 0;
            fat.write_with_index(&mut buf, &mut idx, flags, DateTimeFormat::Ctime)
                .unwrap();
            black_box(buf);
        });
    });
}

fn bench_filetime_decode_and_render(c: &mut Criterion) {
    let bytes = [0xce, 0x17, 0x0a, 0x3d, 0x62, 0x3a, 0xcb, 0x01];
    c.bench_function("filetime::decode_and_render_nanoseconds", |b| {
        b.iter(|| {
            let ft = Filetime::from_byte_stream(black_box(&bytes), Endian::Little).unwrap();
            let flags = StringFormatFlags::DATE_TIME_NANO_SECONDS;
            let size = Filetime::string_size(flags, DateTimeFormat::Ctime).unwrap();
            let mut buf = vec![0u8; size];
            let mut idx = 0;
            ft.write_with_index(&mut buf, &mut idx, flags, DateTimeFormat::Ctime)
                .unwrap();
            black_box(buf);
        });
    });
}

criterion_group!(benches, bench_fat_decode_and_render, bench_filetime_decode_and_render);
criterion_main!(benches);
