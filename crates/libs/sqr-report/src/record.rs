//! Job records and the `squeue` table parser.
//!
//! `squeue -o %all` prints a `|` separated table whose columns depend on the
//! Slurm version, so records are keyed by whatever the header line says
//! instead of a fixed struct.

use crate::prelude::*;

/// Column separator used by `squeue -o %all`.
pub const FIELD_SEPARATOR: char = '|';

/// One row of scheduler output keyed by the header columns.
///
/// Fields keep the header order. A repeated column name keeps its first
/// position and takes the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobRecord {
    fields: Vec<(String, String)>,
}

impl JobRecord {
    /// Value of `name`, if the row has it.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Value of `name`, failing with [`Error::MissingField`] when absent.
    pub fn field(&self, name: &str) -> Result<&str> {
        self.get(name)
            .ok_or_else(|| Error::MissingField(name.to_string()))
    }

    /// Field names in header order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn insert(&mut self, name: String, value: String) {
        match self.fields.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((name, value)),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for JobRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = JobRecord::default();
        for (key, value) in iter {
            record.insert(key.into(), value.into());
        }
        record
    }
}

/// Parse `squeue` output into job records.
///
/// The first line is the header. Every following line is paired column by
/// column with the header, stopping at whichever runs out first, so short or
/// long rows never fail the parse. Only a completely empty input is an error.
///
/// # Examples
///
/// ```rust
/// use sqr_report::record::parse;
///
/// let records = parse("JOBID|USER\n1|alice\n2|bob\n").unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[1].get("USER"), Some("bob"));
/// ```
pub fn parse(raw: &str) -> Result<Vec<JobRecord>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(Error::MissingHeader);
    }

    let mut lines = raw.split('\n').map(|line| line.trim_end_matches('\r'));
    let header: Vec<&str> = match lines.next() {
        Some(line) => line.split(FIELD_SEPARATOR).collect(),
        None => return Err(Error::MissingHeader),
    };

    Ok(lines
        .map(|line| {
            header
                .iter()
                .copied()
                .zip(line.split(FIELD_SEPARATOR))
                .collect::<JobRecord>()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "JOBID|NAME|USER|ACCOUNT";

    #[test]
    fn parses_every_data_line_with_header_fields() -> Result<()> {
        let raw = format!("{HEADER}\n1|build|alice|phys01\n2|train|bob|chem02\n3||carol|bio03");
        let records = parse(&raw)?;

        assert_eq!(records.len(), 3);
        for record in &records {
            assert_eq!(
                record.keys().collect::<Vec<_>>(),
                vec!["JOBID", "NAME", "USER", "ACCOUNT"]
            );
        }
        assert_eq!(records[2].get("NAME"), Some(""));
        assert_eq!(records[2].get("ACCOUNT"), Some("bio03"));
        Ok(())
    }

    #[test]
    fn header_only_yields_no_records() -> Result<()> {
        assert!(parse(HEADER)?.is_empty());
        assert!(parse(&format!("  \n{HEADER}\n\n"))?.is_empty());
        Ok(())
    }

    #[test]
    fn empty_input_is_missing_header() {
        assert_eq!(parse(""), Err(Error::MissingHeader));
        assert_eq!(parse(" \n\t\n"), Err(Error::MissingHeader));
    }

    #[test]
    fn short_row_keeps_only_paired_fields() -> Result<()> {
        let records = parse(&format!("{HEADER}\n7|solo"))?;
        let record = &records[0];

        assert_eq!(record.len(), 2);
        assert_eq!(record.get("NAME"), Some("solo"));
        assert_eq!(record.get("USER"), None);
        assert_eq!(
            record.field("USER"),
            Err(Error::MissingField(String::from("USER")))
        );
        Ok(())
    }

    #[test]
    fn long_row_drops_unpaired_values() -> Result<()> {
        let records = parse(&format!("{HEADER}\n1|build|alice|phys01|extra|more"))?;
        assert_eq!(records[0].len(), 4);
        assert_eq!(records[0].get("ACCOUNT"), Some("phys01"));
        Ok(())
    }

    #[test]
    fn trailing_separator_produces_empty_column() -> Result<()> {
        let records = parse("JOBID|USER|\n1|alice|\n")?;
        assert_eq!(records[0].keys().collect::<Vec<_>>(), vec!["JOBID", "USER", ""]);
        Ok(())
    }

    #[test]
    fn crlf_line_endings_are_accepted() -> Result<()> {
        let records = parse("JOBID|USER\r\n1|alice\r\n2|bob\r\n")?;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("USER"), Some("alice"));
        assert_eq!(records[1].get("USER"), Some("bob"));
        Ok(())
    }

    #[test]
    fn repeated_column_keeps_first_position_and_last_value() -> Result<()> {
        let records = parse("NAME|USER|NAME\nfirst|alice|second")?;
        let record = &records[0];
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["NAME", "USER"]);
        assert_eq!(record.get("NAME"), Some("second"));
        Ok(())
    }

    #[test]
    fn parsing_twice_gives_equal_records() -> Result<()> {
        let raw = format!("{HEADER}\n1|build|alice|phys01\n2||bob|x");
        assert_eq!(parse(&raw)?, parse(&raw)?);
        Ok(())
    }
}
