use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dianzi_core::braille::braille;
use dianzi_core::segment::{valid_segmentations, ReadingMap};
use dianzi_core::LookupTable;

fn bench_valid_segmentations(c: &mut Criterion) {
    // Every single character and every adjacent pair is known: many ties.
    let word = "中華民國臺灣省政府教育廳";
    let chars: Vec<char> = word.chars().collect();
    let mut readings = ReadingMap::new();
    for w in chars.windows(2) {
        readings.insert(w.iter().collect(), vec!["ㄅ".to_string()]);
    }
    for ch in &chars {
        readings.insert(ch.to_string(), vec!["ㄅ".to_string()]);
    }

    c.bench_function("valid_segmentations_12_chars", |b| {
        b.iter(|| valid_segmentations(black_box(word), black_box(&readings)))
    });
}

fn bench_braille(c: &mut Criterion) {
    let table = LookupTable::global();
    let zhuyin = "ㄕㄠˇ ˙ㄌㄜ ㄐㄧˇ ㄐㄧㄢˋ ㄧ ㄈㄨˊ，ㄨㄛˇ ㄒㄧㄠˇ ㄕˊ ㄏㄡˋ ㄗㄞˋ ㄊㄞˊ ㄅㄟˇ……";
    c.bench_function("braille_sentence", |b| {
        b.iter(|| braille(black_box(zhuyin), table))
    });
}

criterion_group!(benches, bench_valid_segmentations, bench_braille);
criterion_main!(benches);
