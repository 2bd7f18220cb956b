use byte_unit::{AdjustedByte, Byte, UnitType};
use itertools::{Itertools, Position};
use std::io::{stderr, IsTerminal};
use std::time::Instant;
use tracing::{info, info_span, Span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

pub fn display_bytes(size: u64) -> AdjustedByte {
    Byte::from(size).get_appropriate_unit(UnitType::Both)
}

const PBAR_TEMPLATE: &str = "{span_child_prefix} {msg} {percent}% {wide_bar} {per_sec} [{human_pos}/{human_len}]";

fn setup_span_bar(span: &Span, size: usize, message: &'static str) -> Span {
    span.pb_set_message(message);
    span.pb_set_style(&indicatif::ProgressStyle::default_bar().template(PBAR_TEMPLATE).unwrap());
    span.pb_set_length(size as u64);
    Span::current()
}

pub fn progress_iter<T>(
    message: &'static str,
    iterator: impl ExactSizeIterator<Item = T>,
) -> impl ExactSizeIterator<Item = T> {
    let total = iterator.len();
    let span = info_span!("task", items = total);
    let entered = span.enter();
    let span = setup_span_bar(&span, total, message);
    let is_term = stderr().is_terminal();
    let start = Instant::now();

    iterator.with_position().map(move |(pos, v)| {
        if is_term {
            span.pb_inc(1);
        } else if pos == Position::Last {
            info!("{message} completed in {:#.1?}", start.elapsed());
        }
        let _ = entered;
        v
    })
}
