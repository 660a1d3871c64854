// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use clap::Parser;
use csv::{ReaderBuilder, Trim, Writer};
use dispenser_demo_rs::{
    Amount, DispenseError, DispenseEvent, DispenserChain, Receipt, check_granularity,
};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::PathBuf;
use std::process;

/// Cash Dispenser - Break amounts into bills
///
/// Dispenses requested amounts through a fixed denomination chain and prints
/// the resulting report lines to stdout. Amounts can be given on the command
/// line, read from a CSV file, or both.
#[derive(Parser, Debug)]
#[command(name = "dispenser-demo-rs")]
#[command(about = "A cash dispenser that breaks amounts into bills", long_about = None)]
struct Args {
    /// Amounts to dispense, in whole currency units
    ///
    /// Example: cargo run -- 2970 2000
    #[arg(value_name = "AMOUNT", required_unless_present = "file")]
    amounts: Vec<u64>,

    /// CSV file of amounts to dispense
    ///
    /// Expected format: a header row with an `amount` column.
    /// Example: cargo run -- --file requests.csv
    #[arg(long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Bill denominations, highest first
    #[arg(long, value_delimiter = ',', default_values_t = DispenserChain::STANDARD_DENOMINATIONS)]
    denominations: Vec<u64>,

    /// Smallest accepted amount step; off-step requests are rejected
    #[arg(long, default_value_t = 10)]
    granularity: u64,

    /// Emit receipts as CSV rows instead of report lines
    #[arg(long)]
    csv: bool,
}

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    if args.granularity == 0 {
        eprintln!("Invalid granularity: {}", DispenseError::ZeroGranularity);
        process::exit(1);
    }

    // Assemble the chain once; it is reused across every request below.
    let chain = match DispenserChain::new(args.denominations.iter().copied()) {
        Ok(chain) => chain,
        Err(e) => {
            eprintln!("Invalid denominations: {}", e);
            process::exit(1);
        }
    };

    let mut amounts: Vec<Amount> = args.amounts.iter().copied().map(Amount).collect();

    if let Some(path) = &args.file {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("Error opening file '{}': {}", path.display(), e);
                process::exit(1);
            }
        };
        match read_amounts(BufReader::new(file)) {
            Ok(batch) => amounts.extend(batch),
            Err(e) => {
                eprintln!("Error reading amounts: {}", e);
                process::exit(1);
            }
        }
    }

    let mut receipts = Vec::with_capacity(amounts.len());
    for amount in amounts {
        // Granularity pre-check; rejected requests never reach the chain.
        match check_granularity(amount, args.granularity) {
            Ok(()) => receipts.push(chain.dispense(amount)),
            Err(e) => eprintln!("Rejected request: {}", e),
        }
    }

    if args.csv {
        if let Err(e) = write_receipts(&receipts, std::io::stdout()) {
            eprintln!("Error writing output: {}", e);
            process::exit(1);
        }
    } else {
        print_reports(&receipts);
    }
}

/// Raw CSV record matching the batch input format.
///
/// Fields: `amount`
#[derive(Debug, Deserialize)]
struct CsvRecord {
    amount: u64,
}

/// Reads dispense amounts from a CSV reader.
///
/// Streaming parse; malformed rows are skipped rather than aborting the
/// batch. Whitespace around fields is tolerated.
///
/// # CSV Format
///
/// Expected column: `amount` - whole currency units (u64)
///
/// # Errors
///
/// Returns a CSV error if the reader itself fails.
fn read_amounts<R: Read>(reader: R) -> Result<Vec<Amount>, csv::Error> {
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All) // Handle whitespace in fields like " 2970 "
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let mut amounts = Vec::new();
    for result in rdr.deserialize::<CsvRecord>() {
        match result {
            Ok(record) => amounts.push(Amount(record.amount)),
            Err(_e) => {
                // Skip malformed rows
                #[cfg(debug_assertions)]
                eprintln!("Skipping malformed row: {}", _e);
                continue;
            }
        }
    }

    Ok(amounts)
}

/// Flat CSV output row; one row per dispense event.
#[derive(Debug, Serialize)]
struct ReceiptRow {
    amount: u64,
    denomination: Option<u64>,
    count: Option<u64>,
    remainder: Option<u64>,
}

fn receipt_rows(receipt: &Receipt) -> Vec<ReceiptRow> {
    receipt
        .events()
        .iter()
        .map(|event| match event {
            DispenseEvent::Dispensed {
                denomination,
                count,
            } => ReceiptRow {
                amount: receipt.requested().0,
                denomination: Some(denomination.0),
                count: Some(*count),
                remainder: None,
            },
            DispenseEvent::Undispensable { remainder } => ReceiptRow {
                amount: receipt.requested().0,
                denomination: None,
                count: None,
                remainder: Some(remainder.0),
            },
        })
        .collect()
}

/// Writes receipts as flat CSV rows.
///
/// # CSV Format
///
/// Columns: `amount, denomination, count, remainder`
///
/// # Example
///
/// ```csv
/// amount,denomination,count,remainder
/// 2970,1000,2,
/// 2970,500,1,
/// 2970,100,4,
/// 2970,,,70
/// ```
///
/// # Errors
///
/// Returns a CSV error if writing fails.
fn write_receipts<W: Write>(receipts: &[Receipt], writer: W) -> Result<(), csv::Error> {
    let mut wtr = Writer::from_writer(writer);

    for receipt in receipts {
        for row in receipt_rows(receipt) {
            wtr.serialize(row)?;
        }
    }

    // Flush to ensure all data is written
    wtr.flush()?;
    Ok(())
}

/// Prints the human-readable report lines, one blank line between receipts.
fn print_reports(receipts: &[Receipt]) {
    for (i, receipt) in receipts.iter().enumerate() {
        if i > 0 {
            println!();
        }
        for event in receipt.events() {
            println!("{}", event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parse_simple_amounts() {
        let csv = "amount\n2970\n2000\n";
        let reader = Cursor::new(csv);

        let amounts = read_amounts(reader).unwrap();

        assert_eq!(amounts, vec![Amount(2970), Amount(2000)]);
    }

    #[test]
    fn parse_with_whitespace() {
        let csv = "amount\n 2970 \n";
        let reader = Cursor::new(csv);

        let amounts = read_amounts(reader).unwrap();

        assert_eq!(amounts, vec![Amount(2970)]);
    }

    #[test]
    fn skip_malformed_rows() {
        let csv = "amount\n2970\nnot-a-number\n310\n";
        let reader = Cursor::new(csv);

        let amounts = read_amounts(reader).unwrap();

        assert_eq!(amounts, vec![Amount(2970), Amount(310)]);
    }

    #[test]
    fn write_receipts_to_csv() {
        let chain = DispenserChain::new([1000, 500, 100]).unwrap();
        let receipts = vec![chain.dispense(Amount(2970))];

        let mut output = Vec::new();
        write_receipts(&receipts, &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert!(output_str.contains("amount,denomination,count,remainder"));
        assert!(output_str.contains("2970,1000,2,"));
        assert!(output_str.contains("2970,,,70"));
    }

    #[test]
    fn rows_cover_every_event() {
        let chain = DispenserChain::new([1000, 500, 100]).unwrap();
        let receipt = chain.dispense(Amount(2970));

        let rows = receipt_rows(&receipt);

        // 2x1000, 1x500, 4x100, leftover 70
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].denomination, Some(1000));
        assert_eq!(rows[0].count, Some(2));
        assert_eq!(rows[3].remainder, Some(70));
    }
}
