//! Plain-text rendering of hands and auctions for the quiz loops.

use drill_core::auction::{rows, AuctionSlot};
use drill_core::{Hand, Seat, Vulnerability};
use std::fmt::Write;

const COLUMN_WIDTH: usize = 6;

pub fn format_table_header() -> String {
    let mut out = String::new();
    let names: Vec<String> = Seat::ALL
        .iter()
        .map(|seat| format!("{:<width$}", seat.name(), width = COLUMN_WIDTH))
        .collect();
    writeln!(out, "{}", names.join(" ").trim_end()).unwrap();
    let dashes = vec!["-".repeat(COLUMN_WIDTH); 4];
    writeln!(out, "{}", dashes.join(" ")).unwrap();
    out
}

/// Header, divider, then one row of four slots per line, North on the left.
pub fn format_auction(slots: &[AuctionSlot]) -> String {
    let mut out = format_table_header();
    for row in rows(slots) {
        let cells: Vec<String> = row
            .iter()
            .map(|slot| format!("{:<width$}", slot.to_string(), width = COLUMN_WIDTH))
            .collect();
        writeln!(out, "{}", cells.join(" ").trim_end()).unwrap();
    }
    out
}

pub fn format_hand(hand: &Hand) -> String {
    let mut out = String::new();
    for line in hand.symbol_lines() {
        writeln!(out, "    {}", line).unwrap();
    }
    out
}

pub fn format_deal_info(dealer: Seat, vulnerability: Vulnerability) -> String {
    format!("Dealer: {}   Vulnerable: {}\n", dealer.name(), vulnerability)
}

/// Who is to call, and whether that side is vulnerable.
pub fn format_seat_line(seat: Seat, vulnerability: Vulnerability) -> String {
    let state = if vulnerability.is_vulnerable(seat) {
        "vulnerable"
    } else {
        "not vulnerable"
    };
    format!("You are {}, {}\n", seat.name(), state)
}
