//! Presentation helpers for trajectory samples.
//!
//! Values shown to people are fixed to four decimal places. Table rows keep
//! the formatted text; chart series keep numbers rounded the same way so
//! plotted points agree with the table.

use std::io::{self, Write};

use freefall_core::State;
use serde::Serialize;

use crate::SimulationResult;

/// Decimal places used for displayed values.
pub const DECIMALS: usize = 4;

/// Formats a value with [`DECIMALS`] fixed decimal places.
///
/// A value exactly halfway between two results rounds away from zero, and
/// zero is always rendered unsigned, so a downward release at rest shows as
/// `0.0000` rather than `-0.0000`.
///
/// ```
/// use freefall::view::format_number;
///
/// assert_eq!(format_number(1.0), "1.0000");
/// assert_eq!(format_number(1.23456), "1.2346");
/// assert_eq!(format_number(1.03125), "1.0313");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    let value = if value == 0.0 {
        0.0
    } else if is_exact_tie(value) {
        // One ulp further from zero, so the tie no longer rounds to even.
        f64::from_bits(value.to_bits() + 1)
    } else {
        value
    };
    format!("{value:.prec$}", prec = DECIMALS)
}

/// `5^(DECIMALS + 1)`: a binary fraction can only end on a `5` in the first
/// dropped place if its digits there are an odd multiple of this.
const TIE_DIGITS: u32 = 5u32.pow(DECIMALS as u32 + 1);

/// Whether `value` lies exactly halfway between two [`DECIMALS`]-place results.
fn is_exact_tie(value: f64) -> bool {
    let magnitude = value.abs();
    let text = format!("{magnitude:.prec$}", prec = DECIMALS + 1);

    let Some((_, fraction)) = text.split_once('.') else {
        return false;
    };
    let odd_multiple = fraction
        .parse::<u32>()
        .is_ok_and(|digits| digits % TIE_DIGITS == 0 && digits % 2 == 1);

    odd_multiple && text.parse::<f64>() == Ok(magnitude)
}

/// Rounds a value to [`DECIMALS`] places, matching [`format_number`].
#[must_use]
pub fn round_number(value: f64) -> f64 {
    format_number(value).parse().unwrap_or(value)
}

/// One formatted table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub time: String,
    pub height: String,
    pub velocity: String,
}

impl From<&State> for TableRow {
    fn from(state: &State) -> Self {
        Self {
            time: format_number(state.time_si()),
            height: format_number(state.height_si()),
            velocity: format_number(state.velocity_si()),
        }
    }
}

/// Height and velocity against time, as parallel rounded series.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<f64>,
    pub heights: Vec<f64>,
    pub velocities: Vec<f64>,
}

/// Maps samples to formatted table rows, preserving order.
#[must_use]
pub fn table_rows(states: &[State]) -> Vec<TableRow> {
    states.iter().map(TableRow::from).collect()
}

/// Maps samples to rounded chart series, preserving order.
#[must_use]
pub fn chart_series(states: &[State]) -> ChartSeries {
    ChartSeries {
        labels: states.iter().map(|s| round_number(s.time_si())).collect(),
        heights: states.iter().map(|s| round_number(s.height_si())).collect(),
        velocities: states
            .iter()
            .map(|s| round_number(s.velocity_si()))
            .collect(),
    }
}

const HEADERS: [&str; 3] = ["Time (s)", "Height (m)", "Velocity (m/s)"];

/// Writes the equation followed by a right-aligned text table.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_table<W: Write>(writer: &mut W, result: &SimulationResult) -> io::Result<()> {
    let rows = table_rows(&result.states);

    let widths = rows.iter().fold(HEADERS.map(str::len), |widths, row| {
        [
            widths[0].max(row.time.len()),
            widths[1].max(row.height.len()),
            widths[2].max(row.velocity.len()),
        ]
    });

    writeln!(writer, "{}", result.equation)?;
    writeln!(
        writer,
        "{:>w0$}  {:>w1$}  {:>w2$}",
        HEADERS[0],
        HEADERS[1],
        HEADERS[2],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
    )?;
    for row in &rows {
        writeln!(
            writer,
            "{:>w0$}  {:>w1$}  {:>w2$}",
            row.time,
            row.height,
            row.velocity,
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
        )?;
    }
    Ok(())
}

/// Writes samples as CSV at full precision.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_csv<W: Write>(writer: &mut W, states: &[State]) -> io::Result<()> {
    writeln!(writer, "time(s),height(m),velocity(m/s)")?;
    for state in states {
        writeln!(
            writer,
            "{},{},{}",
            state.time_si(),
            state.height_si(),
            state.velocity_si()
        )?;
    }
    Ok(())
}

/// Writes the whole result as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_json<W: Write>(writer: &mut W, result: &SimulationResult) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, result)?;
    writeln!(writer)
}
