// Criterion benchmarks for morfo-pl.
//
// Uses a small in-memory dictionary, so no data files are needed.
//
// Run:
//   cargo bench -p morfo-pl

use criterion::{Criterion, criterion_group, criterion_main};
use morfo_pl::PolishHandle;
use morfo_pl::morphology::LexiconStemmer;
use morfo_pl::speller::WordListSpeller;

const WORDS: &str = "\
kot
pies
stolica
ważny
naukowy
zielony
biały
dom
miasto
Warszawa
";

const LEXICON: &str = "\
kot\tkot\tsubst:sg:nom:m2
pies\tpies\tsubst:sg:nom:m2
stolica\tstolica\tsubst:sg:nom:f
ważny\tważny\tadj:sg:nom:m1:pos
zielony\tzielony\tadj:sg:nom:m1:pos
biało\tbiały\tadja
trzynasto\ttrzynaście\tnum:comp
bitowy\tbitowy\tadj:sg:nom:m3:pos
Polski\tPolska\tsubst:sg:gen:f
polski\tpolski\tadj:sg:nom:m1:pos
";

fn handle() -> PolishHandle {
    let stemmer = LexiconStemmer::parse(LEXICON).expect("valid lexicon");
    PolishHandle::new(WordListSpeller::parse(WORDS), stemmer)
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Correct words: one oracle lookup each.
fn bench_evaluate_correct(c: &mut Criterion) {
    let handle = handle();
    let words = ["kot", "pies", "stolica", "ważny", "dom", "miasto"];

    c.bench_function("evaluate_correct_words", |b| {
        b.iter(|| {
            for word in &words {
                std::hint::black_box(handle.evaluate(word, 0).expect("evaluate"));
            }
        });
    });
}

/// Compounds: every split is tried before the word is accepted.
fn bench_evaluate_compounds(c: &mut Criterion) {
    let handle = handle();
    let words = ["arcyważny", "białozielony", "trzynastobitowy", "quasi-naukowy"];

    c.bench_function("evaluate_compounds", |b| {
        b.iter(|| {
            for word in &words {
                std::hint::black_box(handle.evaluate(word, 0).expect("evaluate"));
            }
        });
    });
}

/// Misspellings: compound scan plus suggestion generation.
fn bench_evaluate_misspelled(c: &mut Criterion) {
    let handle = handle();
    let words = ["Stolica", "kto", "psie", "miatso", "xqzabc"];

    c.bench_function("evaluate_misspelled", |b| {
        b.iter(|| {
            for word in &words {
                std::hint::black_box(handle.evaluate(word, 0).expect("evaluate"));
            }
        });
    });
}

/// Dual-case tagging of a short sentence.
fn bench_tag(c: &mut Criterion) {
    let handle = handle();
    let tokens = ["Polski", "kot", "ważny", "Stolica", "xqz", "zielony"];

    c.bench_function("tag_sentence", |b| {
        b.iter(|| std::hint::black_box(handle.tag(&tokens).expect("tag")));
    });
}

criterion_group!(
    benches,
    bench_evaluate_correct,
    bench_evaluate_compounds,
    bench_evaluate_misspelled,
    bench_tag,
);
criterion_main!(benches);
