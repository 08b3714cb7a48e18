//! Criterion benchmarks for synonym resolution.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use wnja::lexicon::MemoryLexicon;
use wnja::thesaurus::SynonymResolver;

/// Build a lexicon of `concepts` concepts with `members` words each.
/// Every word also appears in the next concept, so lookups fan out.
fn generate_lexicon(concepts: usize, members: usize) -> MemoryLexicon {
    let mut lexicon = MemoryLexicon::new();
    let mut next_id = 0i64;
    for c in 0..concepts {
        let synset = format!("{:08}-n", c);
        lexicon.add_synset(synset.as_str(), Some(&format!("concept_{c}")));
        lexicon.add_definition(synset.as_str(), "jpn", "定義");
        for _ in 0..members {
            lexicon.add_word(next_id, format!("語{next_id}"), "jpn");
            lexicon.add_sense(synset.as_str(), next_id);
            if c + 1 < concepts {
                lexicon.add_sense(format!("{:08}-n", c + 1).as_str(), next_id);
            }
            next_id += 1;
        }
    }
    lexicon
}

fn bench_find_synonyms(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_synonyms");
    group.throughput(Throughput::Elements(1));

    for (concepts, members) in [(100, 5), (1000, 10)] {
        let mut resolver = SynonymResolver::new(generate_lexicon(concepts, members));
        let lemma = format!("語{}", members * concepts / 2);
        group.bench_function(format!("{concepts}x{members}"), |b| {
            b.iter(|| resolver.find_synonyms(black_box(&lemma), "jpn").unwrap())
        });

        group.bench_function(format!("{concepts}x{members}_not_found"), |b| {
            b.iter(|| resolver.find_synonyms(black_box("xyzzy123"), "jpn").unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_find_synonyms);
criterion_main!(benches);
