use serde::{Deserialize, Deserializer};
use std::io::Read;

use crate::matching::recommendation::ProgramDraft;

/// One program row of a flattened directory export.
#[derive(Debug)]
pub(crate) struct DirectoryRow {
    pub(crate) university_id: String,
    pub(crate) university_name: String,
    pub(crate) address: Option<String>,
    pub(crate) rating: Option<f32>,
    pub(crate) website: Option<String>,
    pub(crate) program: ProgramDraft,
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<DirectoryRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();

    for record in csv_reader.deserialize::<CsvRow>() {
        let row = record?;
        rows.push(row.into_directory_row());
    }

    Ok(rows)
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "University ID")]
    university_id: String,
    #[serde(rename = "University")]
    university: String,
    #[serde(rename = "Address", default, deserialize_with = "empty_string_as_none")]
    address: Option<String>,
    #[serde(rename = "Rating", default)]
    rating: Option<f32>,
    #[serde(rename = "Website", default, deserialize_with = "empty_string_as_none")]
    website: Option<String>,
    #[serde(rename = "Program")]
    program: String,
    #[serde(rename = "Min Percentage", default)]
    min_percentage: Option<f64>,
    #[serde(rename = "Max Percentage", default)]
    max_percentage: Option<f64>,
    #[serde(rename = "Fee", default, deserialize_with = "empty_string_as_none")]
    fee: Option<String>,
    #[serde(rename = "Seats", default)]
    seats: Option<u32>,
    #[serde(rename = "Duration", default, deserialize_with = "empty_string_as_none")]
    duration: Option<String>,
}

impl CsvRow {
    fn into_directory_row(self) -> DirectoryRow {
        DirectoryRow {
            university_id: self.university_id,
            university_name: self.university,
            address: self.address,
            rating: self.rating,
            website: self.website,
            program: ProgramDraft {
                name: self.program,
                min_percentage: self.min_percentage,
                max_percentage: self.max_percentage,
                fee: self.fee,
                seats: self.seats,
                duration: self.duration,
            },
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
