//! Reference table printer

use hesabyar_core::reference::{format_record, REFERENCE_ACCOUNTS};

use crate::error::CliResult;
use crate::output::OutputStyle;

pub fn run() -> CliResult<()> {
    let style = OutputStyle::default();

    println!("{}", style.header("جدول ماهیت حساب‌ها"));
    for record in REFERENCE_ACCOUNTS.iter() {
        println!("{}", format_record(record));
    }

    Ok(())
}
