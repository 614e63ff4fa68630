//! Benchmarks for surface editing and formatting
//!
//! Run with: cargo bench format

use dashboard_ui::dom::{Document, NodeId};
use dashboard_ui::editable::{
    insert_text, text_length, DomFormatter, FormatCommand, FormattingPrimitive, ListKind, Selection,
};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn surface(paragraphs: usize) -> (Document, NodeId) {
    let body =
        "<p>The quick <b>brown</b> fox jumps over the <i>lazy</i> dog.</p>".repeat(paragraphs);
    let doc = Document::parse(&format!("<div>{body}</div>"));
    let surface = doc.first_child(doc.root()).unwrap_or(doc.root());
    (doc, surface)
}

// ============================================================================
// Parsing and serialization
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn parse(paragraphs: usize) {
    let html = "<p>The quick <b>brown</b> fox.</p>".repeat(paragraphs);
    divan::black_box(Document::parse(divan::black_box(&html)));
}

#[divan::bench(args = [10, 100, 1000])]
fn serialize(bencher: divan::Bencher, paragraphs: usize) {
    let (doc, surface) = surface(paragraphs);
    bencher.bench(|| divan::black_box(doc.inner_html(surface)));
}

// ============================================================================
// Formatting commands
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn bold_whole_surface(bencher: divan::Bencher, paragraphs: usize) {
    bencher
        .with_inputs(|| surface(paragraphs))
        .bench_local_values(|(mut doc, surface)| {
            let len = text_length(&doc, surface);
            let all = Selection::new(0, len);
            DomFormatter.execute(&mut doc, surface, all, FormatCommand::Bold, None);
            doc
        });
}

#[divan::bench(args = [10, 100, 1000])]
fn bullet_list_whole_surface(bencher: divan::Bencher, paragraphs: usize) {
    bencher
        .with_inputs(|| surface(paragraphs))
        .bench_local_values(|(mut doc, surface)| {
            let len = text_length(&doc, surface);
            DomFormatter.execute(
                &mut doc,
                surface,
                Selection::new(0, len),
                FormatCommand::InsertList(ListKind::Unordered),
                None,
            );
            doc
        });
}

#[divan::bench(args = [10, 100, 1000])]
fn query_state_at_end(bencher: divan::Bencher, paragraphs: usize) {
    let (doc, surface) = surface(paragraphs);
    let caret = Selection::collapsed(text_length(&doc, surface));
    bencher.bench(|| {
        for command in FormatCommand::TOGGLES {
            divan::black_box(DomFormatter.query_state(&doc, surface, caret, command));
        }
    });
}

// ============================================================================
// Typing
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn type_at_end(bencher: divan::Bencher, paragraphs: usize) {
    bencher
        .with_inputs(|| surface(paragraphs))
        .bench_local_values(|(mut doc, surface)| {
            let caret = Selection::collapsed(text_length(&doc, surface));
            insert_text(&mut doc, surface, caret, divan::black_box("more text"));
            doc
        });
}
