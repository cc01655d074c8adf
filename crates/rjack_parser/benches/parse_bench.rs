use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rjack_parser::Parser;
use rjack_tokenizer::Tokenizer;

// A medium-size Jack class (~60 lines) with various constructs
const JACK_SOURCE: &str = r#"
/** A fixed-size list of integers with insertion and search. */
class IntList {
    field Array data;
    field int length, capacity;

    constructor IntList new(int maxSize) {
        let data = Array.new(maxSize);
        let capacity = maxSize;
        let length = 0;
        return this;
    }

    method boolean add(int value) {
        if (length < capacity) {
            let data[length] = value;
            let length = length + 1;
            return true;
        }
        return false;
    }

    method int indexOf(int value) {
        var int i;
        let i = 0;
        while (i < length) {
            if (data[i] = value) {
                return i;
            }
            let i = i + 1;
        }
        return -1;
    }

    method void print() {
        var int i;
        let i = 0;
        while (i < length) {
            do Output.printInt(data[i]);
            do Output.printString(", ");
            let i = i + 1;
        }
        do Output.println();
        return;
    }

    method void dispose() {
        do data.dispose();
        do Memory.deAlloc(this);
        return;
    }
}
"#;

fn tokenize_benchmark(c: &mut Criterion) {
    c.bench_function("tokenize_class", |b| {
        b.iter(|| {
            let mut tokenizer = Tokenizer::new(black_box(JACK_SOURCE));
            let mut count = 0usize;
            while tokenizer
                .next_token()
                .expect("benchmark source tokenizes")
                .is_some()
            {
                count += 1;
            }
            count
        })
    });
}

fn parse_benchmark(c: &mut Criterion) {
    c.bench_function("parse_class", |b| {
        b.iter(|| {
            Parser::new(black_box(JACK_SOURCE))
                .parse_class()
                .expect("benchmark source parses")
        })
    });
}

criterion_group!(benches, tokenize_benchmark, parse_benchmark);
criterion_main!(benches);
