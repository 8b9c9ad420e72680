use crate::parser::MergedRecord;

/// Column headers of the report table.
pub const HEADERS: [&str; 4] = ["dBV", "dBu", "Volts RMS", "Volts peak-to-peak"];

/// Unit suffixes, one per column.
pub const UNITS: [&str; 4] = ["dBV", "dBu", "Vrms", "Vpp"];

/// Append the unit name to each field of a record.
pub fn with_units(record: &MergedRecord) -> [String; 4] {
    let fields = [&record.dbv, &record.dbu, &record.rms, &record.vpp];
    std::array::from_fn(|i| format!("{} {}", fields[i], UNITS[i]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffixes_after_annotation() {
        let record = MergedRecord::new("0", "-0.22000", "ref = 1", "1.41400");
        assert_eq!(
            with_units(&record),
            ["0 dBV", "-0.22000 dBu", "ref = 1 Vrms", "1.41400 Vpp"]
        );
    }
}
