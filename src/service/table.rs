//! Borderless text table for `koppel list`
//!
//! Header titles are upper-cased and centered, data cells are left-aligned,
//! and a `-`/`+` rule separates the two. Column widths fit the widest cell;
//! cells are never wrapped, so every record is exactly one line.

use std::io::{self, Write};

use crate::model::{IpCollection, IpRecord};

const HEADERS: [&str; 6] = ["IP", "City", "Region", "Country", "ISP", "Location"];

fn cells(record: &IpRecord) -> [&str; 6] {
    [
        &record.ip,
        &record.city,
        &record.region,
        &record.country,
        &record.isp,
        &record.location,
    ]
}

fn column_widths(headers: &[String], collection: &IpCollection) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for record in collection.iter() {
        for (width, cell) in widths.iter_mut().zip(cells(record)) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths
}

/// Write `collection` as a table, one row per record in stored order.
pub fn render<W: Write>(collection: &IpCollection, out: &mut W) -> io::Result<()> {
    let headers: Vec<String> = HEADERS.iter().map(|h| h.to_uppercase()).collect();
    let widths = column_widths(&headers, collection);

    let header = headers
        .iter()
        .zip(&widths)
        .map(|(title, &width)| format!(" {:^width$} ", title, width = width))
        .collect::<Vec<_>>()
        .join("|");
    writeln!(out, "{}", header)?;

    let rule = widths
        .iter()
        .map(|&width| "-".repeat(width + 2))
        .collect::<Vec<_>>()
        .join("+");
    writeln!(out, "{}", rule)?;

    for record in collection.iter() {
        let row = cells(record)
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!(" {:<width$} ", cell, width = width))
            .collect::<Vec<_>>()
            .join("|");
        writeln!(out, "{}", row)?;
    }

    out.flush()
}
