use super::model::RecordExport;
use crate::errors::AppResult;
use crate::models::RecordSet;
use csv::Writer;
use std::io::Write;

/// Scrive il sottoinsieme filtrato in CSV, una riga per record, con intestazione.
pub fn write_records_csv<W: Write>(out: W, records: &RecordSet) -> AppResult<()> {
    let mut wtr = Writer::from_writer(out);

    for r in records {
        wtr.serialize(RecordExport::from(r))?;
    }

    wtr.flush()?;
    Ok(())
}
